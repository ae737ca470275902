// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Header**: Scroll thresholds for the sticky header
//! - **Notifications**: Toast lifecycle timings
//! - **Reveal**: Intersection rules for reveal-on-scroll and lazy images
//! - **Table of contents**: Active-section lookahead

// ==========================================================================
// Header Defaults
// ==========================================================================

/// Scroll offset (px) past which the header switches to its "scrolled" style.
pub const DEFAULT_SCROLLED_THRESHOLD: f32 = 100.0;

/// Scroll offset (px) past which scrolling down hides the header.
pub const DEFAULT_HIDE_THRESHOLD: f32 = 200.0;

/// Space (px) left above a section when a nav link scrolls to it.
pub const DEFAULT_NAV_OFFSET: f32 = 80.0;

/// Upper bound for any header threshold or offset.
pub const MAX_HEADER_THRESHOLD: f32 = 2000.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay before a freshly shown toast starts sliding in (ms).
pub const DEFAULT_ENTRANCE_DELAY_MS: u64 = 10;

/// Age at which a toast dismisses itself (ms).
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 5000;

/// Length of the slide-in and slide-out transitions (ms).
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 300;

/// Minimum auto-dismiss delay (ms).
pub const MIN_AUTO_DISMISS_MS: u64 = 1000;

/// Maximum auto-dismiss delay (ms).
pub const MAX_AUTO_DISMISS_MS: u64 = 60_000;

/// Maximum entrance delay or exit transition (ms).
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Amount (px) the viewport bottom is pulled up for reveal checks.
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// Duration of the image fade-in once its bytes are loaded (ms).
pub const IMAGE_FADE_MS: u64 = 300;

// ==========================================================================
// Table of Contents Defaults
// ==========================================================================

/// Lookahead (px) used to mark an article section as the active one.
pub const TOC_ACTIVATION_OFFSET: f32 = 200.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SCROLLED_THRESHOLD > 0.0);
    assert!(DEFAULT_HIDE_THRESHOLD >= DEFAULT_SCROLLED_THRESHOLD);
    assert!(DEFAULT_HIDE_THRESHOLD <= MAX_HEADER_THRESHOLD);
    assert!(DEFAULT_NAV_OFFSET >= 0.0);

    assert!(DEFAULT_AUTO_DISMISS_MS >= MIN_AUTO_DISMISS_MS);
    assert!(DEFAULT_AUTO_DISMISS_MS <= MAX_AUTO_DISMISS_MS);
    assert!(DEFAULT_ENTRANCE_DELAY_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_EXIT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_ENTRANCE_DELAY_MS < DEFAULT_AUTO_DISMISS_MS);

    assert!(REVEAL_THRESHOLD > 0.0);
    assert!(REVEAL_THRESHOLD <= 1.0);
};
