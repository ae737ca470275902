// SPDX-License-Identifier: MPL-2.0
//! Maximum scroll depth seen on the page.

/// Depths reported as milestones are multiples of this value.
pub const MILESTONE_STEP: u8 = 25;

/// Tracks the deepest scroll percentage reached.
///
/// A milestone fires only when the new maximum lands exactly on a multiple
/// of [`MILESTONE_STEP`]. A jump from 23% to 27% reports nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollDepth {
    max: u8,
}

impl ScrollDepth {
    #[must_use]
    pub fn max(&self) -> u8 {
        self.max
    }

    /// Records a scroll position.
    ///
    /// Returns the new maximum when it is a milestone. Pages that cannot
    /// scroll record nothing.
    pub fn record(&mut self, scroll_y: f32, content_height: f32, viewport_height: f32) -> Option<u8> {
        let percent = scroll_percent(scroll_y, content_height, viewport_height)?;
        if percent <= self.max {
            return None;
        }
        self.max = percent;
        (percent % MILESTONE_STEP == 0).then_some(percent)
    }
}

/// Rounded scroll percentage in `[0, 100]`, `None` when the page fits the viewport.
#[must_use]
pub fn scroll_percent(scroll_y: f32, content_height: f32, viewport_height: f32) -> Option<u8> {
    let scrollable = content_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return None;
    }
    let percent = (scroll_y / scrollable * 100.0).round();
    if percent.is_nan() {
        return None;
    }
    // Clamped to [0, 100] so the cast cannot truncate
    Some(percent.clamp(0.0, 100.0) as u8)
}
