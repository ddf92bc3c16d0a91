//! Selection and scroll state for list pickers
//!
//! `NavigationState` is a plain value; `step` maps one key to the next
//! picker state without touching the terminal, so the whole navigation model
//! is testable without a screen.

use std::ops::Range;

/// Keys the picker understands. Everything else maps to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    PageUp,
    PageDown,
    Enter,
    Escape,
    Other,
}

/// Outcome of one step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerState {
    Browsing(NavigationState),
    /// Index of the confirmed entry
    Selected(usize),
    Cancelled,
}

/// Invariants: `len > 0`, `selected < len`, `window > 0`,
/// `offset <= selected < offset + window`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    selected: usize,
    offset: usize,
    window: usize,
    len: usize,
}

impl NavigationState {
    /// Start at the top of a list of `len` entries showing `window` rows.
    ///
    /// Returns None for an empty list; a zero window is bumped to one row.
    pub fn new(len: usize, window: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(NavigationState {
            selected: 0,
            offset: 0,
            window: window.max(1),
            len,
        })
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn item_count(&self) -> usize {
        self.len
    }

    /// Rows currently on screen
    pub fn visible_range(&self) -> Range<usize> {
        self.offset..self.len.min(self.offset + self.window)
    }

    /// Apply one key.
    pub fn step(self, key: NavKey) -> PickerState {
        let last = self.len - 1;
        let target = match key {
            NavKey::Enter => return PickerState::Selected(self.selected),
            NavKey::Escape => return PickerState::Cancelled,
            NavKey::Other => return PickerState::Browsing(self),
            NavKey::Up => self.selected.saturating_sub(1),
            NavKey::Down => (self.selected + 1).min(last),
            NavKey::PageUp => self.selected.saturating_sub(self.window),
            NavKey::PageDown => self.selected.saturating_add(self.window).min(last),
        };
        PickerState::Browsing(self.with_selected(target))
    }

    /// Move the selection and snap the offset so it stays visible.
    fn with_selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        if self.selected < self.offset {
            self.offset = self.selected;
        }
        if self.selected >= self.offset + self.window {
            self.offset = self.selected + 1 - self.window;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browsing(state: PickerState) -> NavigationState {
        match state {
            PickerState::Browsing(s) => s,
            other => panic!("expected Browsing, got {:?}", other),
        }
    }

    fn press(state: NavigationState, key: NavKey, times: usize) -> NavigationState {
        (0..times).fold(state, |s, _| browsing(s.step(key)))
    }

    #[test]
    fn empty_list_has_no_state() {
        assert!(NavigationState::new(0, 10).is_none());
    }

    #[test]
    fn down_moves_without_scrolling_inside_window() {
        let start = NavigationState::new(20, 10).unwrap();
        let s = press(start, NavKey::Down, 5);
        assert_eq!(s.selected(), 5);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn down_past_window_scrolls_by_one() {
        let start = NavigationState::new(20, 10).unwrap();
        let s = press(start, NavKey::Down, 9);
        assert_eq!((s.selected(), s.offset()), (9, 0));
        let s = press(s, NavKey::Down, 1);
        assert_eq!((s.selected(), s.offset()), (10, 1));
        assert_eq!(s.visible_range(), 1..11);
    }

    #[test]
    fn up_and_down_clamp_at_edges() {
        let start = NavigationState::new(3, 6).unwrap();
        let s = press(start, NavKey::Up, 2);
        assert_eq!(s.selected(), 0);
        let s = press(s, NavKey::Down, 10);
        assert_eq!(s.selected(), 2);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn page_down_clamps_to_last_entry() {
        let start = NavigationState::new(5, 10).unwrap();
        let s = browsing(start.step(NavKey::PageDown));
        assert_eq!(s.selected(), 4);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn page_moves_by_window_and_snaps_offset() {
        let start = NavigationState::new(30, 10).unwrap();
        let s = browsing(start.step(NavKey::PageDown));
        assert_eq!((s.selected(), s.offset()), (10, 1));
        let s = browsing(s.step(NavKey::PageDown));
        assert_eq!((s.selected(), s.offset()), (20, 11));
        let s = browsing(s.step(NavKey::PageUp));
        assert_eq!((s.selected(), s.offset()), (10, 10));
        let s = browsing(s.step(NavKey::PageUp));
        assert_eq!((s.selected(), s.offset()), (0, 0));
    }

    #[test]
    fn scrolling_back_up_snaps_offset_to_selection() {
        let start = NavigationState::new(20, 5).unwrap();
        let s = press(start, NavKey::Down, 12);
        assert_eq!((s.selected(), s.offset()), (12, 8));
        let s = press(s, NavKey::Up, 5);
        assert_eq!((s.selected(), s.offset()), (7, 7));
    }

    #[test]
    fn enter_selects_current_index() {
        let start = NavigationState::new(4, 6).unwrap();
        let s = press(start, NavKey::Down, 2);
        assert_eq!(s.step(NavKey::Enter), PickerState::Selected(2));
    }

    #[test]
    fn escape_cancels() {
        let start = NavigationState::new(4, 6).unwrap();
        assert_eq!(start.step(NavKey::Escape), PickerState::Cancelled);
    }

    #[test]
    fn other_keys_leave_state_unchanged() {
        let start = NavigationState::new(4, 6).unwrap();
        let s = press(start, NavKey::Down, 1);
        assert_eq!(s.step(NavKey::Other), PickerState::Browsing(s));
    }

    #[test]
    fn visible_range_is_clipped_to_len() {
        let s = NavigationState::new(3, 6).unwrap();
        assert_eq!(s.visible_range(), 0..3);
    }

    #[test]
    fn invariants_hold_under_mixed_input() {
        let keys = [
            NavKey::Down,
            NavKey::PageDown,
            NavKey::PageDown,
            NavKey::Up,
            NavKey::PageUp,
            NavKey::Down,
            NavKey::PageDown,
            NavKey::PageDown,
            NavKey::PageDown,
            NavKey::Up,
        ];
        let mut s = NavigationState::new(17, 6).unwrap();
        for key in keys {
            s = browsing(s.step(key));
            assert!(s.selected() < s.item_count());
            assert!(s.offset() <= s.selected());
            assert!(s.selected() < s.offset() + s.window());
        }
    }
}
