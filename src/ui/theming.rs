// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::Deserialize;

/// Color palette for one page mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub chip_background: Color,

    /// Header background after scrolling past the threshold.
    pub header_scrolled: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_600,
            chip_background: palette::GRAY_100,

            header_scrolled: Color {
                a: opacity::HEADER_SCROLLED,
                ..palette::WHITE
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            border: palette::GRAY_700,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            chip_background: palette::GRAY_700,

            header_scrolled: Color {
                a: opacity::HEADER_SCROLLED,
                ..palette::GRAY_900
            },
        }
    }

    /// Picks the scheme for the current dark mode flag.
    #[must_use]
    pub fn for_mode(dark_mode_on: bool) -> Self {
        if dark_mode_on {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Initial page mode from the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Light on detection error, matching the page's initial state
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

/// Iced theme for the current dark mode flag.
#[must_use]
pub fn iced_theme(dark_mode_on: bool) -> Theme {
    if dark_mode_on {
        Theme::Dark
    } else {
        Theme::Light
    }
}
