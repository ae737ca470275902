// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by every page section, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base and accent colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Dim the accent for a hover background
let hover_bg = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::ACCENT_CYAN
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Brand (indigo scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.506, 0.549, 0.973);
    pub const PRIMARY_500: Color = Color::from_rgb(0.388, 0.400, 0.945);
    pub const PRIMARY_600: Color = Color::from_rgb(0.310, 0.275, 0.898);
    pub const PRIMARY_700: Color = Color::from_rgb(0.263, 0.220, 0.792);

    // Accents (progress bar gradient, search button)
    pub const ACCENT_CYAN: Color = Color::from_rgb(0.0, 1.0, 1.0); // hsl(180 100% 50%)
    pub const ACCENT_PINK: Color = Color::from_rgb(1.0, 0.4, 0.7); // hsl(330 100% 70%)

    // Notification backgrounds
    pub const NOTIFY_SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.0); // hsl(120 100% 40%)
    pub const NOTIFY_ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2); // hsl(0 100% 60%)
    pub const NOTIFY_INFO: Color = ACCENT_CYAN;

    // Placeholder for images that failed to load
    pub const PLACEHOLDER_BG: Color = Color::from_rgb(0.165, 0.165, 0.165);
    pub const PLACEHOLDER_TEXT: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const MUTED_TEXT: f32 = 0.7;
    pub const BODY_TEXT: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Header background once the page has scrolled.
    pub const HEADER_SCROLLED: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const AVATAR: f32 = 48.0;
    pub const HEADSHOT: f32 = 220.0;
    pub const FLOATING_BUTTON: f32 = 50.0;
    pub const READING_PROGRESS_HEIGHT: f32 = 3.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1152.0;
    pub const TOAST_WIDTH: f32 = 300.0;
    pub const INPUT_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! Titles are for the hero and section headings, body for paragraphs
    //! and controls, caption for chips and footers.

    /// Hero heading
    pub const TITLE_LG: f32 = 34.0;

    /// Section headings
    pub const TITLE_MD: f32 = 24.0;

    /// Card titles and the site name
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 17.0;

    pub const BODY: f32 = 14.0;

    /// Tech chips, footer
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Card outlines, inputs
    pub const WIDTH_SM: f32 = 1.0;

    /// Emphasized outlines
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    /// Toast drop shadow: `0 10px 15px -3px rgba(0, 0, 0, 0.3)`
    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 15.0,
    };

    /// Search button glow
    pub const GLOW: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::ACCENT_CYAN
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::MUTED_TEXT < opacity::BODY_TEXT);
    assert!(opacity::HEADER_SCROLLED > 0.0 && opacity::HEADER_SCROLLED < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::TOAST_WIDTH < sizing::CONTENT_MAX_WIDTH);
};
