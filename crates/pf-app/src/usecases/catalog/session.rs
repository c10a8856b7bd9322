use std::sync::Arc;

use pf_core::catalog::{
    CardRect, CardState, CatalogEngine, CatalogItem, CatalogKind, ScrollOutcome, ViewportMode,
};
use pf_core::ports::{ClockPort, ViewportPort};
use pf_core::settings::model::CatalogSettings;
use tracing::debug;

use super::view::CatalogView;

/// One open listing page.
///
/// Wraps a [`CatalogEngine`] with the viewport and clock the focus
/// selector needs. The viewport mode is read from the port on every call,
/// never cached.
pub struct CatalogSession<E> {
    kind: CatalogKind,
    engine: CatalogEngine<E>,
    viewport: Arc<dyn ViewportPort>,
    clock: Arc<dyn ClockPort>,
    breakpoint_px: u32,
}

impl<E: CatalogItem> CatalogSession<E> {
    pub fn new(
        kind: CatalogKind,
        entries: Vec<E>,
        catalog: &CatalogSettings,
        viewport: Arc<dyn ViewportPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let engine = CatalogEngine::new(Arc::from(entries), catalog.engine_options(kind));
        Self {
            kind,
            engine,
            viewport,
            clock,
            breakpoint_px: catalog.breakpoint_px,
        }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn engine(&self) -> &CatalogEngine<E> {
        &self.engine
    }

    /// Filter, pagination and hover events go straight to the engine.
    pub fn engine_mut(&mut self) -> &mut CatalogEngine<E> {
        &mut self.engine
    }

    pub fn mode(&self) -> ViewportMode {
        self.viewport.mode(self.breakpoint_px)
    }

    /// `cards[i]` is the measured rect of visible card `i`.
    pub fn scroll(&mut self, cards: &[Option<CardRect>]) -> ScrollOutcome {
        let mode = self.mode();
        let outcome = self.engine.scroll(
            cards,
            self.viewport.height_px(),
            mode,
            self.clock.now_ms(),
        );
        debug!(kind = %self.kind, ?mode, ?outcome, "scroll handled");
        outcome
    }

    pub fn card_states(&self) -> Vec<CardState> {
        self.engine.card_states(self.mode())
    }
}

impl<E: CatalogItem + Clone> CatalogSession<E> {
    pub fn view(&self) -> CatalogView<E> {
        let engine = &self.engine;
        CatalogView {
            kind: self.kind,
            mode: self.mode(),
            filters: engine.filter_state().clone(),
            active_filters_count: engine.active_filters_count(),
            facets: engine.facets().clone(),
            total_count: engine.source().len(),
            filtered_count: engine.filtered_len(),
            visible_count: engine.visible_len(),
            has_more: engine.has_more(),
            all_loaded: engine.all_loaded(),
            is_empty: engine.is_empty(),
            items: engine.visible().into_iter().cloned().collect(),
            cards: self.card_states(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{project, FixedViewport, ManualClock};
    use pf_core::catalog::{Project, ScrollThrottle};

    fn session(
        entries: Vec<Project>,
        catalog: CatalogSettings,
        viewport: Arc<FixedViewport>,
        clock: Arc<ManualClock>,
    ) -> CatalogSession<Project> {
        CatalogSession::new(CatalogKind::Projects, entries, &catalog, viewport, clock)
    }

    fn projects(count: usize) -> Vec<Project> {
        (0..count)
            .map(|i| project(&format!("p{i}"), &format!("Project {i}"), &["Production"], &["Rust"]))
            .collect()
    }

    fn cards(count: usize) -> Vec<Option<CardRect>> {
        (0..count)
            .map(|i| Some(CardRect::new(i as f64 * 200.0, 180.0)))
            .collect()
    }

    #[test]
    fn mode_follows_viewport_resizes() {
        let viewport = Arc::new(FixedViewport::new(375, 800.0));
        let s = session(
            projects(3),
            CatalogSettings::default(),
            viewport.clone(),
            Arc::new(ManualClock::at(0)),
        );

        assert_eq!(s.mode(), ViewportMode::Mobile);
        viewport.resize(1024);
        assert_eq!(s.mode(), ViewportMode::Desktop);
    }

    #[test]
    fn scroll_uses_viewport_height_for_center() {
        let mut s = session(
            projects(6),
            CatalogSettings::default(),
            Arc::new(FixedViewport::new(375, 1000.0)),
            Arc::new(ManualClock::at(0)),
        );

        // center 500; card 2 spans 400..580
        assert_eq!(s.scroll(&cards(6)), ScrollOutcome::Focused(Some(2)));
        let states = s.card_states();
        assert!(states[2].is_focused);
        assert!(states.iter().filter(|c| c.is_blurred).count() == 5);
    }

    #[test]
    fn scroll_throttle_reads_session_clock() {
        let clock = Arc::new(ManualClock::at(1_000));
        let catalog = CatalogSettings {
            scroll_throttle_ms: 100,
            ..CatalogSettings::default()
        };
        let mut s = session(
            projects(6),
            catalog,
            Arc::new(FixedViewport::new(375, 1000.0)),
            clock.clone(),
        );
        assert_eq!(
            s.engine().focus().throttle(),
            ScrollThrottle::new(100)
        );

        s.scroll(&cards(6));
        clock.advance(40);
        assert_eq!(s.scroll(&cards(6)), ScrollOutcome::Throttled);
        clock.advance(60);
        assert_eq!(s.scroll(&cards(6)), ScrollOutcome::Focused(Some(2)));
    }

    #[test]
    fn view_reflects_engine_state() {
        let mut s = session(
            projects(8),
            CatalogSettings::default(),
            Arc::new(FixedViewport::new(1280, 900.0)),
            Arc::new(ManualClock::at(0)),
        );

        let view = s.view();
        assert_eq!(view.total_count, 8);
        assert_eq!(view.visible_count, 6);
        assert_eq!(view.items.len(), 6);
        assert!(view.has_more);
        assert!(!view.all_loaded);

        s.engine_mut().load_more();
        let view = s.view();
        assert_eq!(view.items.len(), 8);
        assert!(view.all_loaded);
        assert_eq!(view.mode, ViewportMode::Desktop);
    }

    #[test]
    fn mapped_view_keeps_counts_and_order() {
        let s = session(
            projects(8),
            CatalogSettings::default(),
            Arc::new(FixedViewport::new(1280, 900.0)),
            Arc::new(ManualClock::at(0)),
        );

        let view = s.view().map_items(|project| project.title);

        assert_eq!(view.items.first().map(String::as_str), Some("Project 0"));
        assert_eq!(view.items.len(), 6);
        assert_eq!(view.total_count, 8);
        assert_eq!(view.cards.len(), 6);
    }
}
