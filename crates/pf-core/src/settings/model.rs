use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogKind, EngineOptions, ScrollThrottle, SearchProfile};
use crate::i18n::Language;

/// v1 had only `general`; v2 added the `catalog` section.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub theme: Theme,
    /// `None` until the user picks one.
    #[serde(default)]
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    /// What `System` falls back to when the platform preference is unknown.
    pub const SYSTEM_FALLBACK: Theme = Theme::Dark;

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Light or Dark; `System` resolves to `system_preference`.
    pub fn effective(self, system_preference: Theme) -> Theme {
        match self {
            Theme::System => match system_preference {
                Theme::Light => Theme::Light,
                _ => Theme::Dark,
            },
            concrete => concrete,
        }
    }

    /// The theme toggle button: flips the effective theme.
    pub fn toggled(self, system_preference: Theme) -> Theme {
        match self.effective(system_preference) {
            Theme::Light => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Listing-page tunables shared by the project and certificate catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub initial_visible: usize,
    pub page_size: usize,
    pub breakpoint_px: u32,
    /// 0 handles every scroll event.
    #[serde(default)]
    pub scroll_throttle_ms: u64,
}

impl CatalogSettings {
    pub fn engine_options(&self, kind: CatalogKind) -> EngineOptions {
        EngineOptions {
            search: SearchProfile::for_kind(kind),
            initial_visible: self.initial_visible,
            page_size: self.page_size,
            scroll_throttle: ScrollThrottle::new(self.scroll_throttle_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub general: GeneralSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_concrete_themes() {
        assert_eq!(Theme::Light.toggled(Theme::SYSTEM_FALLBACK), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(Theme::SYSTEM_FALLBACK), Theme::Light);
    }

    #[test]
    fn toggling_system_flips_the_resolved_theme() {
        assert_eq!(Theme::System.toggled(Theme::Dark), Theme::Light);
        assert_eq!(Theme::System.toggled(Theme::Light), Theme::Dark);
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" system ".parse::<Theme>().unwrap(), Theme::System);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn v1_document_without_catalog_section_deserializes() {
        let json = r#"{"schema_version":1,"general":{"theme":"light","language":"id"}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.general.theme, Theme::Light);
        assert_eq!(settings.general.language, Some(Language::Id));
        assert_eq!(settings.catalog, CatalogSettings::default());
    }

    #[test]
    fn catalog_settings_build_engine_options() {
        let catalog = CatalogSettings {
            initial_visible: 9,
            page_size: 3,
            breakpoint_px: 640,
            scroll_throttle_ms: 50,
        };

        let options = catalog.engine_options(CatalogKind::Certificates);

        assert_eq!(options.initial_visible, 9);
        assert_eq!(options.page_size, 3);
        assert_eq!(options.scroll_throttle, ScrollThrottle::new(50));
        assert_eq!(options.search, SearchProfile::certificates());
    }
}
