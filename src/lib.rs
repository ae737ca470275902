// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio and blog page built with the Iced GUI framework.
//!
//! It provides a sticky header that reacts to scrolling, an article reading
//! progress bar, toast notifications, a dark mode toggle and contact forms,
//! with the page content read from a TOML document.

pub mod analytics;
pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
