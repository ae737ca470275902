// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains all the page state logic separated from the main App struct,
//! following the principle of separation of concerns. Nothing in here touches
//! widgets; the view reads these types and the update loop mutates them.

pub mod page;
pub mod reading_progress;
pub mod reveal;
pub mod scroll_depth;
pub mod toc;

// Re-export commonly used types for convenience
pub use page::{HeaderThresholds, PageState};
pub use reading_progress::{ArticleGeometry, ReadingProgress};
pub use reveal::{IntersectionRule, RevealSet, Span};
pub use scroll_depth::ScrollDepth;
