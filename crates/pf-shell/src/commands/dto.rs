use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pf_app::usecases::CatalogView;
use pf_core::catalog::{Certificate, ScrollOutcome};
use pf_core::i18n::Language;
use pf_core::nav::{NavIcon, NavItem};

/// One request against a listing page, replayed onto a fresh session in
/// the order a visitor would produce it: filters, load-more clicks, hover,
/// then one scroll event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    /// Language code; `None` resolves through saved settings and config.
    pub lang: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    /// Toggled in order, so naming a facet twice deselects it.
    pub facets: Vec<String>,
    pub load_more: u32,
    pub viewport_width: Option<u32>,
    pub viewport_height: Option<f64>,
    /// Index into the visible window.
    pub hover: Option<usize>,
    /// Vertical centers of the visible cards, in viewport coordinates.
    /// Empty means no scroll event.
    pub scroll_centers: Vec<f64>,
}

/// What the single scroll event of a query did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "index")]
pub enum ScrollReport {
    Focused(Option<usize>),
    Cleared,
    Throttled,
}

impl From<ScrollOutcome> for ScrollReport {
    fn from(outcome: ScrollOutcome) -> Self {
        match outcome {
            ScrollOutcome::Focused(index) => ScrollReport::Focused(index),
            ScrollOutcome::Cleared => ScrollReport::Cleared,
            ScrollOutcome::Throttled => ScrollReport::Throttled,
        }
    }
}

/// Listing page response: the engine view plus the labels the page shows
/// around it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse<E, C> {
    pub language: Language,
    #[serde(flatten)]
    pub view: CatalogView<E>,
    pub copy: C,
    /// `None` while no filter is active.
    pub active_filters_label: Option<String>,
    pub facet_button_label: String,
    pub scroll: Option<ScrollReport>,
}

/// Certificate as its listing card shows it: the entry plus the
/// `Jan 2024` date labels, the expiry badge and the card link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateCardDto {
    #[serde(flatten)]
    pub certificate: Certificate,
    pub issued: String,
    pub expires: Option<String>,
    pub expired: bool,
    pub link: String,
}

impl CertificateCardDto {
    pub fn from_certificate(certificate: Certificate, today: NaiveDate) -> Self {
        Self {
            issued: certificate.issued_label(),
            expires: certificate.expires_label(),
            expired: certificate.is_expired(today),
            link: certificate.link().to_string(),
            certificate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItemDto {
    pub key: String,
    pub label: String,
    pub href: String,
    pub icon: NavIcon,
}

impl NavItemDto {
    pub fn from_item(item: &NavItem, lang: Language) -> Self {
        Self {
            key: item.key.as_str().to_string(),
            label: item.label(lang).to_string(),
            href: item.href.to_string(),
            icon: item.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationDto {
    pub key: String,
    pub language: Language,
    pub text: String,
}
