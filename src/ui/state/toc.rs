// SPDX-License-Identifier: MPL-2.0
//! Table-of-contents highlight.

use crate::app::config::TOC_ACTIVATION_OFFSET;

/// Index of the section to highlight for a scroll offset.
///
/// The active section is the last one whose top, minus the activation
/// offset, is at or above `scroll_top`. `section_tops` must be in page order.
#[must_use]
pub fn active_section(section_tops: &[f32], scroll_top: f32) -> Option<usize> {
    section_tops
        .iter()
        .rposition(|&top| scroll_top >= top - TOC_ACTIVATION_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPS: [f32; 3] = [1000.0, 1500.0, 2200.0];

    #[test]
    fn nothing_active_before_first_section() {
        assert_eq!(active_section(&TOPS, 0.0), None);
        assert_eq!(active_section(&TOPS, 799.0), None);
    }

    #[test]
    fn section_activates_two_hundred_pixels_early() {
        assert_eq!(active_section(&TOPS, 800.0), Some(0));
        assert_eq!(active_section(&TOPS, 1299.0), Some(0));
        assert_eq!(active_section(&TOPS, 1300.0), Some(1));
    }

    #[test]
    fn last_section_stays_active_at_bottom() {
        assert_eq!(active_section(&TOPS, 10_000.0), Some(2));
    }

    #[test]
    fn empty_list_has_no_active_section() {
        assert_eq!(active_section(&[], 500.0), None);
    }
}
