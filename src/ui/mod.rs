// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`navbar`] - Sticky header with section links, menu and dark mode toggle
//! - [`page`] - Scrollable body: hero, about, projects, article, contact
//! - [`forms`] - Contact and newsletter form state
//! - [`images`] - Lazy image loading with fade-in and placeholders
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Pure scroll-driven state (header, reading progress, reveal, depth)
//! - [`layout`] - Section geometry in content coordinates
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod forms;
pub mod images;
pub mod layout;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
