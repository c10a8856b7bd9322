use serde::Serialize;

use pf_core::catalog::{CardState, CatalogKind, FacetSet, FilterState, ViewportMode};

/// Snapshot of everything a listing page renders.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<E> {
    pub kind: CatalogKind,
    pub mode: ViewportMode,
    pub filters: FilterState,
    pub active_filters_count: usize,
    pub facets: FacetSet,
    pub total_count: usize,
    pub filtered_count: usize,
    pub visible_count: usize,
    pub has_more: bool,
    pub all_loaded: bool,
    pub is_empty: bool,
    pub items: Vec<E>,
    pub cards: Vec<CardState>,
}

impl<E> CatalogView<E> {
    /// Same view with each visible entry turned into its card form.
    pub fn map_items<D>(self, f: impl FnMut(E) -> D) -> CatalogView<D> {
        CatalogView {
            kind: self.kind,
            mode: self.mode,
            filters: self.filters,
            active_filters_count: self.active_filters_count,
            facets: self.facets,
            total_count: self.total_count,
            filtered_count: self.filtered_count,
            visible_count: self.visible_count,
            has_more: self.has_more,
            all_loaded: self.all_loaded,
            is_empty: self.is_empty,
            items: self.items.into_iter().map(f).collect(),
            cards: self.cards,
        }
    }
}
