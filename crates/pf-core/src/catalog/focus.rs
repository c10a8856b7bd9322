//! Which single card is "expanded".
//!
//! Desktop follows the pointer; mobile follows whichever card sits nearest
//! the vertical center of the viewport while scrolling. The viewport mode is
//! passed in on every evaluation so crossing the breakpoint takes effect
//! without rebuilding any state.

use serde::{Deserialize, Serialize};

/// Widths below this are treated as mobile.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    pub fn from_width(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px < breakpoint_px {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }
}

/// Vertical placement of a rendered card, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardRect {
    pub top: f64,
    pub height: f64,
}

impl CardRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Minimum spacing between handled scroll events. `0` handles every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollThrottle {
    pub interval_ms: u64,
}

impl ScrollThrottle {
    pub const NONE: ScrollThrottle = ScrollThrottle { interval_ms: 0 };

    pub fn new(interval_ms: u64) -> Self {
        Self { interval_ms }
    }

    fn admits(&self, last_ms: Option<i64>, now_ms: i64) -> bool {
        match last_ms {
            _ if self.interval_ms == 0 => true,
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms as i64,
        }
    }
}

/// Result of feeding one scroll event to [`FocusState::scroll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Mobile: the nearest card (if any was measurable).
    Focused(Option<usize>),
    /// Desktop: scroll focus dropped.
    Cleared,
    /// Dropped by the throttle, nothing changed.
    Throttled,
}

/// Index of the card whose center is nearest `viewport_center`.
///
/// Unmeasurable cards (`None`) are skipped; ties go to the lowest index.
pub fn nearest_to_center(cards: &[Option<CardRect>], viewport_center: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, card) in cards.iter().enumerate() {
        let Some(card) = card else { continue };
        let distance = (viewport_center - card.center()).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Hover and scroll focus, tracked independently over the visible cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    hovered_index: Option<usize>,
    scroll_focused_index: Option<usize>,
    throttle: ScrollThrottle,
    last_scroll_ms: Option<i64>,
}

impl FocusState {
    pub fn new(throttle: ScrollThrottle) -> Self {
        Self {
            throttle,
            ..Self::default()
        }
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_index
    }

    pub fn scroll_focused_index(&self) -> Option<usize> {
        self.scroll_focused_index
    }

    pub fn throttle(&self) -> ScrollThrottle {
        self.throttle
    }

    pub fn hover_enter(&mut self, index: usize) {
        self.hovered_index = Some(index);
    }

    pub fn hover_leave(&mut self) {
        self.hovered_index = None;
    }

    /// Handles one scroll event (or the initial measurement after mount).
    pub fn scroll(
        &mut self,
        cards: &[Option<CardRect>],
        viewport_height: f64,
        mode: ViewportMode,
        now_ms: i64,
    ) -> ScrollOutcome {
        if !self.throttle.admits(self.last_scroll_ms, now_ms) {
            return ScrollOutcome::Throttled;
        }
        self.last_scroll_ms = Some(now_ms);

        match mode {
            ViewportMode::Desktop => {
                self.scroll_focused_index = None;
                ScrollOutcome::Cleared
            }
            ViewportMode::Mobile => {
                self.scroll_focused_index = nearest_to_center(cards, viewport_height / 2.0);
                ScrollOutcome::Focused(self.scroll_focused_index)
            }
        }
    }

    /// The focused index under `mode`.
    pub fn active_index(&self, mode: ViewportMode) -> Option<usize> {
        match mode {
            ViewportMode::Desktop => self.hovered_index,
            ViewportMode::Mobile => self.scroll_focused_index,
        }
    }

    pub fn is_focused(&self, index: usize, mode: ViewportMode) -> bool {
        self.active_index(mode) == Some(index)
    }

    /// Some other card holds focus.
    pub fn is_blurred(&self, index: usize, mode: ViewportMode) -> bool {
        matches!(self.active_index(mode), Some(active) if active != index)
    }

    /// Drops both indices and the throttle clock; the throttle setting stays.
    pub fn reset(&mut self) {
        self.hovered_index = None;
        self.scroll_focused_index = None;
        self.last_scroll_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_cards(count: usize, height: f64, offset: f64) -> Vec<Option<CardRect>> {
        (0..count)
            .map(|i| Some(CardRect::new(offset + i as f64 * height, height)))
            .collect()
    }

    #[test]
    fn breakpoint_is_exclusive_for_mobile() {
        assert_eq!(ViewportMode::from_width(375, 768), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(767, 768), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(768, 768), ViewportMode::Desktop);
    }

    #[test]
    fn nearest_card_wins_and_ties_go_to_lowest_index() {
        let cards = vec![
            Some(CardRect::new(0.0, 100.0)),   // center 50
            Some(CardRect::new(100.0, 100.0)), // center 150
            Some(CardRect::new(200.0, 100.0)), // center 250
        ];
        assert_eq!(nearest_to_center(&cards, 160.0), Some(1));
        assert_eq!(nearest_to_center(&cards, 100.0), Some(0));
    }

    #[test]
    fn unmeasurable_cards_are_skipped() {
        let cards = vec![None, Some(CardRect::new(500.0, 50.0)), None];
        assert_eq!(nearest_to_center(&cards, 0.0), Some(1));
        assert_eq!(nearest_to_center(&[None, None], 0.0), None);
        assert_eq!(nearest_to_center(&[], 0.0), None);
    }

    #[test]
    fn hover_drives_desktop_focus_only() {
        let mut focus = FocusState::default();
        focus.hover_enter(3);

        assert!(focus.is_focused(3, ViewportMode::Desktop));
        assert!(!focus.is_focused(3, ViewportMode::Mobile));
        assert!(focus.is_blurred(0, ViewportMode::Desktop));
        assert!(!focus.is_blurred(0, ViewportMode::Mobile));

        focus.hover_leave();
        assert_eq!(focus.active_index(ViewportMode::Desktop), None);
        assert!(!focus.is_blurred(0, ViewportMode::Desktop));
    }

    #[test]
    fn mobile_scroll_tracks_nearest_card() {
        let mut focus = FocusState::default();
        // viewport 800 tall, center 400; cards 200 tall from y=-100
        let cards = stacked_cards(6, 200.0, -100.0);

        let outcome = focus.scroll(&cards, 800.0, ViewportMode::Mobile, 0);

        assert_eq!(outcome, ScrollOutcome::Focused(Some(2)));
        assert_eq!(focus.scroll_focused_index(), Some(2));
    }

    #[test]
    fn desktop_scroll_clears_scroll_focus() {
        let mut focus = FocusState::default();
        let cards = stacked_cards(3, 100.0, 0.0);
        focus.scroll(&cards, 200.0, ViewportMode::Mobile, 0);
        assert!(focus.scroll_focused_index().is_some());

        assert_eq!(
            focus.scroll(&cards, 200.0, ViewportMode::Desktop, 1),
            ScrollOutcome::Cleared
        );
        assert_eq!(focus.scroll_focused_index(), None);
    }

    #[test]
    fn empty_list_leaves_focus_unset() {
        let mut focus = FocusState::default();
        assert_eq!(
            focus.scroll(&[], 800.0, ViewportMode::Mobile, 0),
            ScrollOutcome::Focused(None)
        );
        assert!(!focus.is_blurred(0, ViewportMode::Mobile));
    }

    #[test]
    fn throttle_drops_events_inside_interval() {
        let mut focus = FocusState::new(ScrollThrottle::new(100));
        let near_top = stacked_cards(4, 100.0, 0.0);
        let scrolled = stacked_cards(4, 100.0, -200.0);

        focus.scroll(&near_top, 200.0, ViewportMode::Mobile, 1_000);
        assert_eq!(focus.scroll_focused_index(), Some(0));

        assert_eq!(
            focus.scroll(&scrolled, 200.0, ViewportMode::Mobile, 1_050),
            ScrollOutcome::Throttled
        );
        assert_eq!(focus.scroll_focused_index(), Some(0));

        focus.scroll(&scrolled, 200.0, ViewportMode::Mobile, 1_100);
        assert_eq!(focus.scroll_focused_index(), Some(2));
    }

    #[test]
    fn reset_clears_indices_but_keeps_throttle() {
        let mut focus = FocusState::new(ScrollThrottle::new(50));
        focus.hover_enter(1);
        focus.scroll(&stacked_cards(2, 10.0, 0.0), 20.0, ViewportMode::Mobile, 5);

        focus.reset();

        assert_eq!(focus.hovered_index(), None);
        assert_eq!(focus.scroll_focused_index(), None);
        assert_eq!(focus.throttle(), ScrollThrottle::new(50));
        // first event after reset is always handled
        assert_ne!(
            focus.scroll(&stacked_cards(2, 10.0, 0.0), 20.0, ViewportMode::Mobile, 6),
            ScrollOutcome::Throttled
        );
    }
}
