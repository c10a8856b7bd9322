use serde::{Deserialize, Serialize};

use super::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiKey {
    #[serde(rename = "nav.about")]
    NavAbout,
    #[serde(rename = "nav.projects")]
    NavProjects,
    #[serde(rename = "nav.certificates")]
    NavCertificates,
    #[serde(rename = "nav.experience")]
    NavExperience,
    #[serde(rename = "nav.services")]
    NavServices,
    #[serde(rename = "nav.uses")]
    NavUses,
    #[serde(rename = "footer.cta.title")]
    FooterCtaTitle,
    #[serde(rename = "footer.cta.desc")]
    FooterCtaDesc,
    #[serde(rename = "footer.cta.button")]
    FooterCtaButton,
    #[serde(rename = "footer.rights")]
    FooterRights,
    #[serde(rename = "footer.links.privacy")]
    FooterPrivacy,
    #[serde(rename = "footer.links.terms")]
    FooterTerms,
    #[serde(rename = "footer.links.sitemap")]
    FooterSitemap,
}

impl UiKey {
    pub const ALL: [UiKey; 13] = [
        UiKey::NavAbout,
        UiKey::NavProjects,
        UiKey::NavCertificates,
        UiKey::NavExperience,
        UiKey::NavServices,
        UiKey::NavUses,
        UiKey::FooterCtaTitle,
        UiKey::FooterCtaDesc,
        UiKey::FooterCtaButton,
        UiKey::FooterRights,
        UiKey::FooterPrivacy,
        UiKey::FooterTerms,
        UiKey::FooterSitemap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiKey::NavAbout => "nav.about",
            UiKey::NavProjects => "nav.projects",
            UiKey::NavCertificates => "nav.certificates",
            UiKey::NavExperience => "nav.experience",
            UiKey::NavServices => "nav.services",
            UiKey::NavUses => "nav.uses",
            UiKey::FooterCtaTitle => "footer.cta.title",
            UiKey::FooterCtaDesc => "footer.cta.desc",
            UiKey::FooterCtaButton => "footer.cta.button",
            UiKey::FooterRights => "footer.rights",
            UiKey::FooterPrivacy => "footer.links.privacy",
            UiKey::FooterTerms => "footer.links.terms",
            UiKey::FooterSitemap => "footer.links.sitemap",
        }
    }

    pub fn from_key(key: &str) -> Option<UiKey> {
        UiKey::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

pub fn translate(lang: Language, key: UiKey) -> &'static str {
    match lang {
        Language::En => english(key),
        Language::Id => indonesian(key),
    }
}

fn english(key: UiKey) -> &'static str {
    match key {
        UiKey::NavAbout => "About",
        UiKey::NavProjects => "Projects",
        UiKey::NavCertificates => "Certificates",
        UiKey::NavExperience => "Experience",
        UiKey::NavServices => "Services",
        UiKey::NavUses => "Uses",
        UiKey::FooterCtaTitle => "Ready to start?",
        UiKey::FooterCtaDesc => {
            "Currently accepting new projects and collaborations. Let's turn your vision into a digital reality."
        }
        UiKey::FooterCtaButton => "Start a Conversation",
        UiKey::FooterRights => "ALL RIGHTS RESERVED.",
        UiKey::FooterPrivacy => "Privacy",
        UiKey::FooterTerms => "Terms",
        UiKey::FooterSitemap => "Sitemap",
    }
}

fn indonesian(key: UiKey) -> &'static str {
    match key {
        UiKey::NavAbout => "Tentang",
        UiKey::NavProjects => "Proyek",
        UiKey::NavCertificates => "Sertifikat",
        UiKey::NavExperience => "Pengalaman",
        UiKey::NavServices => "Layanan",
        UiKey::NavUses => "Peralatan",
        UiKey::FooterCtaTitle => "Siap untuk mulai?",
        UiKey::FooterCtaDesc => {
            "Menerima proyek dan kolaborasi baru. Mari wujudkan visi digital Anda menjadi kenyataan."
        }
        UiKey::FooterCtaButton => "Mulai Percakapan",
        UiKey::FooterRights => "HAK CIPTA DILINDUNGI.",
        UiKey::FooterPrivacy => "Privasi",
        UiKey::FooterTerms => "Ketentuan",
        UiKey::FooterSitemap => "Sitemap",
    }
}
