use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::item::{CatalogItem, ALL_CATEGORY};

/// Filter-control values derived from the item source.
///
/// `categories` always starts with [`ALL_CATEGORY`]; the rest of both lists
/// is distinct and lexicographically sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSet {
    pub categories: Vec<String>,
    pub facets: Vec<String>,
}

impl Default for FacetSet {
    fn default() -> Self {
        Self {
            categories: vec![ALL_CATEGORY.to_string()],
            facets: Vec::new(),
        }
    }
}

impl FacetSet {
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn contains_facet(&self, facet: &str) -> bool {
        self.facets.binary_search_by(|f| f.as_str().cmp(facet)).is_ok()
    }
}

/// Collects the distinct categories and facets present across `entries`.
pub fn extract_facets<E: CatalogItem>(entries: &[E]) -> FacetSet {
    let mut categories = BTreeSet::new();
    let mut facets = BTreeSet::new();

    for entry in entries {
        for category in entry.categories() {
            if category != ALL_CATEGORY {
                categories.insert(category);
            }
        }
        facets.extend(entry.facets().iter().map(String::as_str));
    }

    let mut ordered = Vec::with_capacity(categories.len() + 1);
    ordered.push(ALL_CATEGORY.to_string());
    ordered.extend(categories.into_iter().map(str::to_string));

    FacetSet {
        categories: ordered,
        facets: facets.into_iter().map(str::to_string).collect(),
    }
}
