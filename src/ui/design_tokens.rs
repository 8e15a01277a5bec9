// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by the dashboard panel and the toast cards.

## Organization

- **Palette**: Dashboard text colors and the four notification accents
- **Opacity**: Fade levels for hover, press and closing states
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Button height, toast and panel widths
- **Typography**: Font size scale
- **Border**, **Radius**, **Shadow**: Card outlines and elevation

## Examples

```
use toastboard::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// A closing success toast
let faded = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::SUCCESS_500
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

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Dashboard text colors
    pub const HEADING: Color = Color::from_rgb(0.204, 0.278, 0.404); // #344767
    pub const MUTED: Color = Color::from_rgb(0.404, 0.455, 0.557); // #67748e

    // Notification accents
    pub const SUCCESS_500: Color = Color::from_rgb(0.510, 0.839, 0.086); // #82d616
    pub const ERROR_500: Color = Color::from_rgb(0.918, 0.024, 0.024); // #ea0606
    pub const INFO_500: Color = Color::from_rgb(0.090, 0.757, 0.910); // #17c1e8
    pub const WARNING_500: Color = Color::from_rgb(0.984, 0.812, 0.200); // #fbcf33
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Closing toasts and disabled controls.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Dashboard panel background.
    pub const SURFACE: f32 = 0.95;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Fixed width of a toast card.
    pub const TOAST_WIDTH: f32 = 300.0;
    /// Width of the dashboard control panel.
    pub const PANEL_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Panel heading
    pub const TITLE_MD: f32 = 20.0;

    /// Toast icon
    pub const TITLE_SM: f32 = 18.0;

    /// Toast title
    pub const BODY_LG: f32 = 16.0;

    /// Button labels
    pub const BODY: f32 = 14.0;

    /// Toast message
    pub const BODY_SM: f32 = 13.0;

    /// Close glyph, status line
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders and Elevation
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accent outline
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_HOVER < opacity::OVERLAY_PRESSED);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // The window must fit the panel beside a toast column.
    assert!(sizing::PANEL_WIDTH > sizing::TOAST_WIDTH);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::LG > radius::MD && radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accents_are_opaque() {
        for accent in [
            palette::SUCCESS_500,
            palette::ERROR_500,
            palette::INFO_500,
            palette::WARNING_500,
        ] {
            assert_eq!(accent.a, 1.0);
        }
    }
}
