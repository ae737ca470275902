// SPDX-License-Identifier: MPL-2.0
//! Page chrome state: mobile menu, sticky header, dark mode and the deepest
//! scroll position reached.
//!
//! All transitions are pure; the view reads the resulting flags.

use crate::app::config::{DEFAULT_HIDE_THRESHOLD, DEFAULT_SCROLLED_THRESHOLD};
use crate::ui::notifications::{Kind, Notification};
use crate::ui::state::scroll_depth::ScrollDepth;

/// Scroll offsets driving the sticky header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderThresholds {
    /// Above this offset the header gets its solid background.
    pub scrolled: f32,
    /// Above this offset, scrolling down hides the header.
    pub hide: f32,
}

impl Default for HeaderThresholds {
    fn default() -> Self {
        Self {
            scrolled: DEFAULT_SCROLLED_THRESHOLD,
            hide: DEFAULT_HIDE_THRESHOLD,
        }
    }
}

/// Presentation state owned by the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub menu_open: bool,
    pub header_scrolled: bool,
    pub header_hidden: bool,
    pub last_scroll_top: f32,
    pub dark_mode_on: bool,
    pub scroll_depth: ScrollDepth,
    thresholds: HeaderThresholds,
}

impl PageState {
    #[must_use]
    pub fn new(thresholds: HeaderThresholds, dark_mode_on: bool) -> Self {
        Self {
            dark_mode_on,
            thresholds,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> HeaderThresholds {
        self.thresholds
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu_on_navigate(&mut self) {
        self.menu_open = false;
    }

    /// Updates the header flags for a new scroll offset.
    ///
    /// Order matters: the hidden flag compares against the previous offset,
    /// which is only overwritten last.
    pub fn on_scroll(&mut self, scroll_top: f32) {
        let scroll_top = scroll_top.max(0.0);

        self.header_scrolled = scroll_top > self.thresholds.scrolled;
        self.header_hidden = scroll_top > self.last_scroll_top && scroll_top > self.thresholds.hide;
        self.last_scroll_top = scroll_top;
    }

    /// Records how far down the page has been scrolled.
    ///
    /// Returns the new maximum depth when it is a milestone worth reporting.
    pub fn record_scroll_depth(
        &mut self,
        scroll_top: f32,
        content_height: f32,
        viewport_height: f32,
    ) -> Option<u8> {
        self.scroll_depth.record(scroll_top, content_height, viewport_height)
    }

    /// Flips dark mode and returns the notification announcing the new mode.
    pub fn toggle_dark_mode(&mut self) -> Notification {
        self.dark_mode_on = !self.dark_mode_on;
        let key = if self.dark_mode_on {
            "notification-dark-mode-on"
        } else {
            "notification-dark-mode-off"
        };
        Notification::new(Kind::Info, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PageState {
        PageState::new(HeaderThresholds::default(), false)
    }

    #[test]
    fn toggle_menu_twice_restores_state() {
        let mut page = state();
        page.toggle_menu();
        assert!(page.menu_open);
        page.toggle_menu();
        assert!(!page.menu_open);
    }

    #[test]
    fn navigate_always_closes_menu() {
        let mut page = state();
        page.close_menu_on_navigate();
        assert!(!page.menu_open);

        page.toggle_menu();
        page.close_menu_on_navigate();
        assert!(!page.menu_open);
    }

    #[test]
    fn header_scrolled_tracks_threshold() {
        let mut page = state();
        for (offset, expected) in [(0.0, false), (100.0, false), (100.5, true), (5000.0, true), (50.0, false)] {
            page.on_scroll(offset);
            assert_eq!(page.header_scrolled, expected, "offset {offset}");
        }
    }

    #[test]
    fn scrolling_down_past_threshold_hides_header() {
        let mut page = state();
        page.on_scroll(150.0);
        page.on_scroll(250.0);
        assert!(page.header_hidden);
    }

    #[test]
    fn scrolling_up_shows_header() {
        let mut page = state();
        page.on_scroll(250.0);
        page.on_scroll(150.0);
        assert!(!page.header_hidden);

        page.on_scroll(400.0);
        page.on_scroll(300.0);
        assert!(!page.header_hidden);
    }

    #[test]
    fn scrolling_down_below_hide_threshold_keeps_header() {
        let mut page = state();
        page.on_scroll(50.0);
        page.on_scroll(180.0);
        assert!(!page.header_hidden);
        assert!(page.header_scrolled);
    }

    #[test]
    fn same_offset_twice_shows_header() {
        let mut page = state();
        page.on_scroll(300.0);
        assert!(page.header_hidden);
        page.on_scroll(300.0);
        assert!(!page.header_hidden);
        assert_eq!(page.last_scroll_top, 300.0);
    }

    #[test]
    fn scroll_depth_starts_at_zero_and_reports_milestones() {
        let mut page = state();
        assert_eq!(page.scroll_depth.max(), 0);

        assert_eq!(page.record_scroll_depth(250.0, 2000.0, 1000.0), Some(25));
        assert_eq!(page.record_scroll_depth(100.0, 2000.0, 1000.0), None);
        assert_eq!(page.scroll_depth.max(), 25);
    }

    #[test]
    fn header_scroll_does_not_touch_depth() {
        let mut page = state();
        page.on_scroll(900.0);
        assert_eq!(page.scroll_depth.max(), 0);
    }

    #[test]
    fn toggle_dark_mode_announces_new_mode() {
        let mut page = state();
        let on = page.toggle_dark_mode();
        assert!(page.dark_mode_on);
        assert_eq!(on.message_key(), "notification-dark-mode-on");
        assert_eq!(on.kind(), Kind::Info);

        let off = page.toggle_dark_mode();
        assert!(!page.dark_mode_on);
        assert_eq!(off.message_key(), "notification-dark-mode-off");
    }

    #[test]
    fn custom_thresholds_are_honored() {
        let mut page = PageState::new(
            HeaderThresholds {
                scrolled: 10.0,
                hide: 20.0,
            },
            true,
        );
        assert!(page.dark_mode_on);
        page.on_scroll(15.0);
        assert!(page.header_scrolled);
        assert!(!page.header_hidden);
        page.on_scroll(25.0);
        assert!(page.header_hidden);
    }
}
