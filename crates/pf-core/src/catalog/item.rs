use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORY: &str = "All";

/// Text fields a search predicate may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    /// Status labels for projects, the issuer for certificates.
    Category,
    Description,
    /// Tags for projects, skills for certificates.
    Facets,
}

/// Which listing a catalog backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Projects,
    Certificates,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Projects => "projects",
            CatalogKind::Certificates => "certificates",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of a catalog entry as seen by the filter engine.
///
/// Implemented by [`Project`](super::Project) and
/// [`Certificate`](super::Certificate); the engine never mutates entries.
pub trait CatalogItem {
    fn id(&self) -> &EntryId;

    fn title(&self) -> &str;

    /// Single-select classification values carried by the entry.
    fn categories(&self) -> Vec<&str>;

    /// Multi-select tag values carried by the entry.
    fn facets(&self) -> &[String];

    fn description(&self) -> Option<&str>;

    /// Text values exposed to the search predicate for `field`.
    fn field_values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Title => vec![self.title()],
            SearchField::Category => self.categories(),
            SearchField::Description => self.description().into_iter().collect(),
            SearchField::Facets => self.facets().iter().map(String::as_str).collect(),
        }
    }

    fn has_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    fn has_facet(&self, facet: &str) -> bool {
        self.facets().iter().any(|f| f == facet)
    }
}
