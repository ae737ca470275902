// SPDX-License-Identifier: MPL-2.0
//! Viewport intersection rules for reveal-on-scroll and lazy images.

use crate::app::config::{REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD};

/// Vertical span in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// When an element counts as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRule {
    /// Fraction of the element that must overlap; `0.0` means any overlap.
    pub threshold: f32,
    /// Pixels trimmed from the bottom of the viewport.
    pub bottom_margin: f32,
}

impl IntersectionRule {
    /// Cards and sections animate in once 10% of them is above the bottom margin.
    pub const REVEAL: Self = Self {
        threshold: REVEAL_THRESHOLD,
        bottom_margin: REVEAL_BOTTOM_MARGIN,
    };

    /// Images start loading as soon as any part enters the viewport.
    pub const LAZY_IMAGE: Self = Self {
        threshold: 0.0,
        bottom_margin: 0.0,
    };

    /// Whether `element` intersects the viewport starting at `scroll_top`.
    ///
    /// The threshold applies to the part of the element that can fit in the
    /// viewport, so an element taller than the viewport counts as visible
    /// once it fills enough of it.
    #[must_use]
    pub fn is_intersecting(&self, element: Span, scroll_top: f32, viewport_height: f32) -> bool {
        let visible_height = (viewport_height - self.bottom_margin).max(0.0);
        let view_top = scroll_top;
        let view_bottom = scroll_top + visible_height;
        let overlap = element.bottom().min(view_bottom) - element.top.max(view_top);

        if element.height <= 0.0 {
            return element.top >= view_top && element.top <= view_bottom;
        }
        if self.threshold <= 0.0 {
            return overlap > 0.0;
        }
        let measured = element.height.min(visible_height);
        overlap > 0.0 && overlap / measured >= self.threshold
    }
}

/// One-way visibility flags for a list of elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Marks every element that now intersects as revealed.
    ///
    /// Returns the indices that became revealed on this call.
    pub fn update(
        &mut self,
        spans: &[Span],
        rule: IntersectionRule,
        scroll_top: f32,
        viewport_height: f32,
    ) -> Vec<usize> {
        let mut newly = Vec::new();
        for (index, (flag, span)) in self.revealed.iter_mut().zip(spans).enumerate() {
            if !*flag && rule.is_intersecting(*span, scroll_top, viewport_height) {
                *flag = true;
                newly.push(index);
            }
        }
        newly
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_requires_ten_percent_above_margin() {
        let rule = IntersectionRule::REVEAL;
        // Viewport [0, 750] after the 50px margin; element 500px tall at 720
        let element = Span::new(720.0, 500.0);
        assert!(!rule.is_intersecting(element, 0.0, 800.0));
        // Viewport [30, 780]: 60px overlap = 12%
        assert!(rule.is_intersecting(element, 30.0, 800.0));
    }

    #[test]
    fn element_taller_than_viewport_is_measured_against_viewport() {
        let rule = IntersectionRule::REVEAL;
        // 10 viewports tall: 10% of its height can never be on screen
        let element = Span::new(932.0, 8000.0);
        // 50px of the 750px visible area
        assert!(!rule.is_intersecting(element, 232.0, 800.0));
        // 100px of 750px
        assert!(rule.is_intersecting(element, 282.0, 800.0));
        // Deep inside the element it fills the whole viewport
        assert!(rule.is_intersecting(element, 5000.0, 800.0));
    }

    #[test]
    fn lazy_image_triggers_on_any_overlap() {
        let rule = IntersectionRule::LAZY_IMAGE;
        let image = Span::new(799.0, 200.0);
        assert!(rule.is_intersecting(image, 0.0, 800.0));
        assert!(!rule.is_intersecting(Span::new(800.0, 200.0), 0.0, 800.0));
    }

    #[test]
    fn elements_above_viewport_do_not_intersect() {
        let rule = IntersectionRule::LAZY_IMAGE;
        assert!(!rule.is_intersecting(Span::new(0.0, 100.0), 500.0, 800.0));
    }

    #[test]
    fn reveal_is_one_way() {
        let spans = [Span::new(0.0, 100.0), Span::new(2000.0, 100.0)];
        let mut set = RevealSet::new(spans.len());

        assert_eq!(set.update(&spans, IntersectionRule::REVEAL, 0.0, 800.0), vec![0]);
        assert!(set.is_revealed(0));
        assert!(!set.is_revealed(1));

        assert_eq!(set.update(&spans, IntersectionRule::REVEAL, 1800.0, 800.0), vec![1]);
        // Scrolling away keeps both revealed
        assert!(set.update(&spans, IntersectionRule::REVEAL, 0.0, 800.0).is_empty());
        assert!(set.is_revealed(0) && set.is_revealed(1));
    }

    #[test]
    fn out_of_range_index_is_not_revealed() {
        let set = RevealSet::new(1);
        assert!(!set.is_revealed(5));
    }
}
