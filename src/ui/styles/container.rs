// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scheme(theme: &Theme) -> ColorScheme {
    ColorScheme::for_mode(matches!(theme, Theme::Dark))
}

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Sticky header; gets a solid background and shadow once scrolled.
pub fn header(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        if scrolled {
            container::Style {
                background: Some(Background::Color(colors.header_scrolled)),
                text_color: Some(colors.text_primary),
                shadow: shadow::SM,
                ..Default::default()
            }
        } else {
            container::Style {
                background: Some(Background::Color(colors.surface_primary)),
                text_color: Some(colors.text_primary),
                ..Default::default()
            }
        }
    }
}

/// Bordered panel (skills, education, contact info, stats).
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Pill around a skill or technology.
pub fn chip(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.chip_background)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round avatar with the brand gradient.
pub fn avatar(_theme: &Theme) -> container::Style {
    let gradient = iced::gradient::Linear::new(std::f32::consts::FRAC_PI_4)
        .add_stop(0.0, palette::PRIMARY_500)
        .add_stop(1.0, palette::ACCENT_PINK);
    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Stand-in for an image that is missing or failed to load.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(palette::PLACEHOLDER_BG)),
        text_color: Some(palette::PLACEHOLDER_TEXT),
        border: Border {
            color: colors.border,
            width: 0.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Filled part of the reading progress bar.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    let gradient = iced::gradient::Linear::new(std::f32::consts::FRAC_PI_2)
        .add_stop(0.0, palette::ACCENT_CYAN)
        .add_stop(1.0, palette::ACCENT_PINK);
    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        ..Default::default()
    }
}

/// Dropdown of the mobile menu.
pub fn menu(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Footer separator line.
pub fn divider(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BODY_TEXT,
            ..colors.border
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_header_has_shadow() {
        let scrolled = header(true)(&Theme::Light);
        let resting = header(false)(&Theme::Light);
        assert_eq!(scrolled.shadow, shadow::SM);
        assert_ne!(resting.shadow, shadow::SM);
    }

    #[test]
    fn page_background_follows_theme() {
        assert_ne!(page(&Theme::Light).background, page(&Theme::Dark).background);
    }
}
