// SPDX-License-Identifier: MPL-2.0
//! Article reading progress.
//!
//! Progress reaches 100% when the end of the article passes the middle of the
//! viewport, not the bottom.

/// Computes the reading progress percentage in `[0, 100]`.
///
/// A non-positive article height yields `0.0`.
///
/// # Example
///
/// ```
/// use iced_folio::ui::state::reading_progress::compute_progress;
///
/// assert_eq!(compute_progress(0.0, 0.0, 1000.0, 800.0), 40.0);
/// assert_eq!(compute_progress(600.0, 0.0, 1000.0, 800.0), 100.0);
/// ```
#[must_use]
pub fn compute_progress(
    scroll_top: f32,
    article_top: f32,
    article_height: f32,
    viewport_height: f32,
) -> f32 {
    if article_height.is_nan() || article_height <= 0.0 {
        return 0.0;
    }
    let raw = (scroll_top - article_top + viewport_height / 2.0) / article_height * 100.0;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

/// Position and height of the article body in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleGeometry {
    pub top: f32,
    pub height: f32,
}

/// Progress indicator state; inactive on pages without an article.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadingProgress {
    article: Option<ArticleGeometry>,
    percent: f32,
}

impl ReadingProgress {
    #[must_use]
    pub fn new(article: Option<ArticleGeometry>) -> Self {
        Self {
            article,
            percent: 0.0,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.article.is_some()
    }

    /// Recomputes the percentage for a scroll event. No-op when inactive.
    pub fn on_scroll(&mut self, scroll_top: f32, viewport_height: f32) {
        if let Some(article) = self.article {
            self.percent = compute_progress(scroll_top, article.top, article.height, viewport_height);
        }
    }

    /// Current percentage, `None` when there is no article.
    #[must_use]
    pub fn percent(&self) -> Option<f32> {
        self.article.map(|_| self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert_eq!(compute_progress(0.0, 0.0, 1000.0, 800.0), 40.0);
        assert_eq!(compute_progress(600.0, 0.0, 1000.0, 800.0), 100.0);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut previous = f32::MIN;
        for step in 0..=400 {
            let scroll_top = step as f32 * 10.0;
            let value = compute_progress(scroll_top, 1200.0, 1500.0, 700.0);
            assert!((0.0..=100.0).contains(&value));
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn before_article_is_zero() {
        assert_eq!(compute_progress(0.0, 2000.0, 1000.0, 800.0), 0.0);
    }

    #[test]
    fn non_positive_height_is_zero() {
        assert_eq!(compute_progress(500.0, 0.0, 0.0, 800.0), 0.0);
        assert_eq!(compute_progress(500.0, 0.0, -10.0, 800.0), 0.0);
        assert_eq!(compute_progress(500.0, 0.0, f32::NAN, 800.0), 0.0);
    }

    #[test]
    fn inactive_without_article() {
        let mut progress = ReadingProgress::new(None);
        progress.on_scroll(500.0, 800.0);
        assert!(!progress.is_active());
        assert_eq!(progress.percent(), None);
    }

    #[test]
    fn active_tracker_follows_scroll() {
        let mut progress = ReadingProgress::new(Some(ArticleGeometry {
            top: 0.0,
            height: 1000.0,
        }));
        assert_eq!(progress.percent(), Some(0.0));
        progress.on_scroll(100.0, 800.0);
        assert_eq!(progress.percent(), Some(50.0));
    }
}
