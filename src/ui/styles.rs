// SPDX-License-Identifier: MPL-2.0
//! Button and panel styles for the dashboard.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Solid button filled with `accent`.
pub fn accent(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (fill, elevation) = match status {
            button::Status::Hovered => (
                Color {
                    a: opacity::OVERLAY_HOVER,
                    ..accent
                },
                shadow::MD,
            ),
            button::Status::Pressed => (
                Color {
                    a: opacity::OVERLAY_PRESSED,
                    ..accent
                },
                shadow::NONE,
            ),
            button::Status::Disabled => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..accent
                },
                shadow::NONE,
            ),
            button::Status::Active => (accent, shadow::SM),
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: palette::WHITE,
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: elevation,
            snap: true,
        }
    }
}

/// Outlined button for secondary actions (theme toggle, clear all).
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: palette::MUTED,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Card behind the dashboard controls.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base.color
        })),
        border: Border {
            color: base.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        text_color: Some(base.text),
        ..Default::default()
    }
}
