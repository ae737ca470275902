// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::images::LoadedImage;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page;
use iced::Size;
use std::time::Instant;

/// Scroll offset of the page and height of the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub top: f32,
    pub viewport_height: f32,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    Notification(notifications::NotificationMessage),
    Scrolled(ScrollPosition),
    WindowResized(Size),
    Tick(Instant), // Periodic tick for toast timers and image fades
    /// A project card image finished loading.
    ImageLoaded {
        index: usize,
        result: Result<LoadedImage, Error>,
    },
    HeadshotLoaded(Result<LoadedImage, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional page content file, takes precedence over the configured one.
    pub content_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
