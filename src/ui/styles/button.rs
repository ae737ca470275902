// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn scheme(theme: &Theme) -> ColorScheme {
    ColorScheme::for_mode(matches!(theme, Theme::Dark))
}

/// Filled call-to-action (View Projects, Contact, Send).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Active | button::Status::Disabled => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Bordered secondary action (Resume, GitHub).
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..colors.surface_secondary
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Header and table-of-contents links.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let text_color = if active {
            palette::ACCENT_CYAN
        } else if matches!(status, button::Status::Hovered) {
            colors.brand_primary
        } else {
            colors.text_secondary
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round icon button (dark mode toggle).
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Floating search button with the accent gradient.
pub fn floating(_theme: &Theme, status: button::Status) -> button::Style {
    let gradient = iced::gradient::Linear::new(std::f32::consts::FRAC_PI_4)
        .add_stop(0.0, palette::ACCENT_CYAN)
        .add_stop(1.0, palette::ACCENT_PINK);

    button::Style {
        background: Some(Background::Gradient(gradient.into())),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::TOAST
        } else {
            shadow::GLOW
        },
        snap: true,
    }
}

/// Project card surface; the whole card is clickable.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let hovered = matches!(status, button::Status::Hovered);

    button::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: colors.text_primary,
        border: Border {
            color: if hovered { colors.brand_primary } else { colors.border },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: if hovered { shadow::TOAST } else { shadow::NONE },
        snap: true,
    }
}
