use serde::{Deserialize, Serialize};

use super::item::{CatalogItem, CatalogKind, SearchField, ALL_CATEGORY};

/// Single-select category state; `All` disables the category predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    #[default]
    All,
    One(String),
}

impl CategorySelection {
    /// Maps the `"All"` label to [`CategorySelection::All`].
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORY {
            CategorySelection::All
        } else {
            CategorySelection::One(label.to_string())
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORY,
            CategorySelection::One(category) => category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

/// Which fields the free-text predicate searches.
///
/// The two listings search different fields: projects look at title,
/// description and tags, certificates only at title and issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProfile {
    pub fields: Vec<SearchField>,
}

impl SearchProfile {
    pub fn new(fields: impl Into<Vec<SearchField>>) -> Self {
        Self {
            fields: fields.into(),
        }
    }

    pub fn projects() -> Self {
        Self::new([
            SearchField::Title,
            SearchField::Description,
            SearchField::Facets,
        ])
    }

    pub fn certificates() -> Self {
        Self::new([SearchField::Title, SearchField::Category])
    }

    pub fn for_kind(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Projects => Self::projects(),
            CatalogKind::Certificates => Self::certificates(),
        }
    }

    fn matches<E: CatalogItem>(&self, entry: &E, needle: &str) -> bool {
        self.fields.iter().any(|field| {
            entry
                .field_values(*field)
                .into_iter()
                .any(|value| value.to_lowercase().contains(needle))
        })
    }
}

/// The user-controlled part of a listing: search text, category, facets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub selected_category: CategorySelection,
    /// Toggle order, no duplicates.
    pub selected_facets: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the state changed.
    pub fn set_search_text(&mut self, text: &str) -> bool {
        if self.search_text == text {
            return false;
        }
        self.search_text = text.to_string();
        true
    }

    /// Replaces the selected category. Returns whether the state changed.
    pub fn select_category(&mut self, category: CategorySelection) -> bool {
        if self.selected_category == category {
            return false;
        }
        self.selected_category = category;
        true
    }

    /// Adds `facet` when absent, removes it when present.
    pub fn toggle_facet(&mut self, facet: &str) {
        if let Some(pos) = self.selected_facets.iter().position(|f| f == facet) {
            self.selected_facets.remove(pos);
        } else {
            self.selected_facets.push(facet.to_string());
        }
    }

    /// Resets every dimension. Returns whether anything was active.
    pub fn clear(&mut self) -> bool {
        if self.is_default() {
            return false;
        }
        *self = Self::default();
        true
    }

    pub fn is_default(&self) -> bool {
        self.search_text.is_empty()
            && self.selected_category.is_all()
            && self.selected_facets.is_empty()
    }

    /// Number of non-default filter dimensions; each selected facet counts once.
    pub fn active_filters_count(&self) -> usize {
        usize::from(!self.search_text.is_empty())
            + usize::from(!self.selected_category.is_all())
            + self.selected_facets.len()
    }

    /// AND of the search, category and facet predicates.
    pub fn matches<E: CatalogItem>(&self, entry: &E, profile: &SearchProfile) -> bool {
        self.matches_search(entry, profile)
            && self.matches_category(entry)
            && self.matches_facets(entry)
    }

    fn matches_search<E: CatalogItem>(&self, entry: &E, profile: &SearchProfile) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        profile.matches(entry, &self.search_text.to_lowercase())
    }

    fn matches_category<E: CatalogItem>(&self, entry: &E) -> bool {
        match &self.selected_category {
            CategorySelection::All => true,
            CategorySelection::One(category) => entry.has_category(category),
        }
    }

    fn matches_facets<E: CatalogItem>(&self, entry: &E) -> bool {
        self.selected_facets.iter().all(|facet| entry.has_facet(facet))
    }
}

/// Positions in `entries` that satisfy `state`, in source order.
pub fn filter_indices<E: CatalogItem>(
    entries: &[E],
    state: &FilterState,
    profile: &SearchProfile,
) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| state.matches(*entry, profile))
        .map(|(index, _)| index)
        .collect()
}

/// Entries of `entries` that satisfy `state`, in source order.
pub fn apply_filters<'a, E: CatalogItem>(
    entries: &'a [E],
    state: &FilterState,
    profile: &SearchProfile,
) -> Vec<&'a E> {
    entries
        .iter()
        .filter(|entry| state.matches(*entry, profile))
        .collect()
}
