use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::facets::{extract_facets, FacetSet};
use super::filter::{filter_indices, CategorySelection, FilterState, SearchProfile};
use super::focus::{CardRect, FocusState, ScrollOutcome, ScrollThrottle, ViewportMode};
use super::item::{CatalogItem, CatalogKind};
use super::pagination::{Paginator, INITIAL_VISIBLE, PAGE_SIZE};

/// Tunables of one engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub search: SearchProfile,
    pub initial_visible: usize,
    pub page_size: usize,
    pub scroll_throttle: ScrollThrottle,
}

impl EngineOptions {
    pub fn for_kind(kind: CatalogKind) -> Self {
        Self {
            search: SearchProfile::for_kind(kind),
            initial_visible: INITIAL_VISIBLE,
            page_size: PAGE_SIZE,
            scroll_throttle: ScrollThrottle::NONE,
        }
    }
}

/// Presentation flags of one visible card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    pub index: usize,
    pub is_focused: bool,
    pub is_blurred: bool,
}

/// One listing page's filter / pagination / focus state over a fixed item source.
///
/// Every filter mutation recomputes the filtered result synchronously,
/// resets the visible window, and drops focus when the visible list changes.
#[derive(Debug, Clone)]
pub struct CatalogEngine<E> {
    source: Arc<[E]>,
    facets: FacetSet,
    search: SearchProfile,
    state: FilterState,
    /// Positions into `source`, source order.
    filtered: Vec<usize>,
    paginator: Paginator,
    focus: FocusState,
}

impl<E: CatalogItem> CatalogEngine<E> {
    pub fn new(source: Arc<[E]>, options: EngineOptions) -> Self {
        let facets = extract_facets(&source[..]);
        let state = FilterState::default();
        let filtered = filter_indices(&source[..], &state, &options.search);

        Self {
            source,
            facets,
            search: options.search,
            state,
            filtered,
            paginator: Paginator::new(options.initial_visible, options.page_size),
            focus: FocusState::new(options.scroll_throttle),
        }
    }

    pub fn source(&self) -> &[E] {
        &self.source
    }

    pub fn facets(&self) -> &FacetSet {
        &self.facets
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn search_profile(&self) -> &SearchProfile {
        &self.search
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    // ----- filter events -----

    pub fn set_search_text(&mut self, text: &str) -> bool {
        let changed = self.state.set_search_text(text);
        if changed {
            self.refilter();
        }
        changed
    }

    /// Single-select: replaces the current category. `"All"` clears it.
    pub fn select_category(&mut self, category: &str) -> bool {
        let changed = self
            .state
            .select_category(CategorySelection::from_label(category));
        if changed {
            self.refilter();
        }
        changed
    }

    pub fn toggle_facet(&mut self, facet: &str) -> bool {
        self.state.toggle_facet(facet);
        self.refilter();
        true
    }

    pub fn clear_filters(&mut self) -> bool {
        let changed = self.state.clear();
        if changed {
            self.refilter();
        }
        changed
    }

    // ----- pagination events -----

    /// Reveals one more page. Returns `false` when nothing was left to show.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        let before = self.visible_indices().to_vec();
        self.paginator.load_more();
        self.drop_focus_if_visible_changed(&before);
        true
    }

    // ----- focus events -----

    /// Ignored for indices outside the visible window.
    pub fn hover_enter(&mut self, index: usize) -> bool {
        if index >= self.visible_len() {
            return false;
        }
        self.focus.hover_enter(index);
        true
    }

    pub fn hover_leave(&mut self) {
        self.focus.hover_leave();
    }

    /// `cards[i]` is the measured rect of visible card `i`, `None` when not rendered.
    pub fn scroll(
        &mut self,
        cards: &[Option<CardRect>],
        viewport_height: f64,
        mode: ViewportMode,
        now_ms: i64,
    ) -> ScrollOutcome {
        let measurable = &cards[..cards.len().min(self.visible_len())];
        self.focus.scroll(measurable, viewport_height, mode, now_ms)
    }

    /// Unmount: focus goes away, filters and window stay.
    pub fn unmount(&mut self) {
        self.focus.reset();
    }

    // ----- read-outs -----

    pub fn filtered(&self) -> Vec<&E> {
        self.filtered.iter().map(|&i| &self.source[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// No entry matches; the UI shows its "no results" state.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn visible(&self) -> Vec<&E> {
        self.visible_indices()
            .iter()
            .map(|&i| &self.source[i])
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.paginator.visible_len(self.filtered.len())
    }

    pub fn visible_count(&self) -> usize {
        self.paginator.visible_count()
    }

    pub fn has_more(&self) -> bool {
        self.paginator.has_more(self.filtered.len())
    }

    pub fn all_loaded(&self) -> bool {
        self.paginator.all_loaded(self.filtered.len())
    }

    pub fn active_filters_count(&self) -> usize {
        self.state.active_filters_count()
    }

    pub fn active_index(&self, mode: ViewportMode) -> Option<usize> {
        self.focus
            .active_index(mode)
            .filter(|&index| index < self.visible_len())
    }

    pub fn card_states(&self, mode: ViewportMode) -> Vec<CardState> {
        let active = self.active_index(mode);
        (0..self.visible_len())
            .map(|index| CardState {
                index,
                is_focused: active == Some(index),
                is_blurred: matches!(active, Some(a) if a != index),
            })
            .collect()
    }

    fn visible_indices(&self) -> &[usize] {
        self.paginator.visible_slice(&self.filtered)
    }

    fn refilter(&mut self) {
        let before = self.visible_indices().to_vec();
        self.filtered = filter_indices(&self.source[..], &self.state, &self.search);
        self.paginator.reset();
        self.drop_focus_if_visible_changed(&before);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            filtered = self.filtered.len(),
            visible = self.visible_len(),
            active_filters = self.state.active_filters_count(),
            "catalog refiltered"
        );
    }

    fn drop_focus_if_visible_changed(&mut self, before: &[usize]) {
        if self.visible_indices() != before {
            self.focus.reset();
        }
    }
}
