//! Authored page content.
//!
//! Two kinds of page collections live next to the catalog entries:
//!
//! - listing copy (`projects-page`, `certificates-page`): optional labels
//!   with built-in fallbacks, see [`listing`]
//! - site pages (`index-page`, `uses-page`, `terms-page`, `privacy-page`):
//!   complete documents whose required fields must all be present

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod home;
pub mod legal;
pub mod listing;
pub mod uses;

pub use home::IndexPage;
pub use legal::{LegalPage, LegalSection};
pub use listing::{active_filters_label, CertificatesPageCopy, ProjectsPageCopy};
pub use uses::UsesPage;

/// One of the standalone site pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SitePage {
    Home,
    Uses,
    Terms,
    Privacy,
}

impl SitePage {
    pub const ALL: [SitePage; 4] = [
        SitePage::Home,
        SitePage::Uses,
        SitePage::Terms,
        SitePage::Privacy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SitePage::Home => "home",
            SitePage::Uses => "uses",
            SitePage::Terms => "terms",
            SitePage::Privacy => "privacy",
        }
    }

    /// Directory of the page's collection under the content root.
    pub fn collection(self) -> &'static str {
        match self {
            SitePage::Home => "index-page",
            SitePage::Uses => "uses-page",
            SitePage::Terms => "terms-page",
            SitePage::Privacy => "privacy-page",
        }
    }
}

impl fmt::Display for SitePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page: {0} (expected home, uses, terms or privacy)")]
pub struct UnknownSitePage(pub String);

impl FromStr for SitePage {
    type Err = UnknownSitePage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "index" => Ok(SitePage::Home),
            "uses" => Ok(SitePage::Uses),
            "terms" => Ok(SitePage::Terms),
            "privacy" => Ok(SitePage::Privacy),
            _ => Err(UnknownSitePage(s.to_string())),
        }
    }
}

/// A loaded site page, tagged with which page it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum SitePageContent {
    Home(IndexPage),
    Uses(UsesPage),
    Terms(LegalPage),
    Privacy(LegalPage),
}

impl SitePageContent {
    pub fn page(&self) -> SitePage {
        match self {
            SitePageContent::Home(_) => SitePage::Home,
            SitePageContent::Uses(_) => SitePage::Uses,
            SitePageContent::Terms(_) => SitePage::Terms,
            SitePageContent::Privacy(_) => SitePage::Privacy,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SitePageContent::Home(page) => &page.title,
            SitePageContent::Uses(page) => &page.title,
            SitePageContent::Terms(page) | SitePageContent::Privacy(page) => &page.title,
        }
    }
}
