//! Site navigation table.

use serde::{Deserialize, Serialize};

use crate::i18n::{translate, Language, UiKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    User,
    Code,
    Award,
    Briefcase,
    Terminal,
    DeviceDesktop,
    /// Anything the table does not know.
    #[default]
    Link,
}

const ICONS_BY_NAME: [(&str, NavIcon); 6] = [
    ("IconUser", NavIcon::User),
    ("IconCode", NavIcon::Code),
    ("IconAward", NavIcon::Award),
    ("IconBriefcase", NavIcon::Briefcase),
    ("IconTerminal2", NavIcon::Terminal),
    ("IconDeviceDesktop", NavIcon::DeviceDesktop),
];

impl NavIcon {
    pub fn from_name(name: &str) -> Option<NavIcon> {
        ICONS_BY_NAME
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, icon)| *icon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub key: UiKey,
    pub href: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    pub fn label(&self, lang: Language) -> &'static str {
        translate(lang, self.key)
    }
}

/// (label key, href, icon name), in menu order.
const NAV_TABLE: [(UiKey, &str, &str); 6] = [
    (UiKey::NavAbout, "/", "IconUser"),
    (UiKey::NavProjects, "/projects", "IconCode"),
    (UiKey::NavCertificates, "/certificates", "IconAward"),
    (UiKey::NavExperience, "/#experience", "IconBriefcase"),
    (UiKey::NavServices, "/#services", "IconTerminal2"),
    (UiKey::NavUses, "/uses", "IconDeviceDesktop"),
];

pub fn nav_items() -> Vec<NavItem> {
    NAV_TABLE
        .iter()
        .map(|&(key, href, icon)| NavItem {
            key,
            href,
            icon: NavIcon::from_name(icon).unwrap_or_default(),
        })
        .collect()
}
