// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The dashboard panel sits in the middle of the window; the toast layer is
//! stacked on top of it.

use super::Message;
use crate::notifications::{Kind, NotificationMessage};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{accent_color, ToastLayer};
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{alignment, font, Element, Font, Length, Theme};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a ToastLayer,
    pub theme_mode: ThemeMode,
    pub active_count: usize,
    pub now: Instant,
}

/// Renders the dashboard with the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let dashboard = Container::new(view_panel(ctx.theme_mode, ctx.active_count))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let toasts = ctx.toasts.view(ctx.now).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(dashboard)
        .push(toasts)
        .into()
}

fn view_panel<'a>(theme_mode: ThemeMode, active_count: usize) -> Element<'a, Message> {
    let heading = Text::new("Notification System")
        .size(typography::TITLE_MD)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .style(move |_theme: &Theme| text::Style {
            color: Some(if theme_mode.is_dark() {
                palette::GRAY_100
            } else {
                palette::HEADING
            }),
        });

    let bell = button(Text::new(Kind::Info.glyph()).size(typography::BODY_LG))
        .on_press(Message::ShowSystemNotice)
        .padding(spacing::XS)
        .style(styles::outline);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(heading).width(Length::Fill))
        .push(bell);

    let demos = Kind::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, kind| row.push(demo_button(*kind)),
    );

    let theme_label = if theme_mode.is_dark() {
        "Light mode"
    } else {
        "Dark mode"
    };
    let controls = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(theme_label).size(typography::BODY))
                .on_press(Message::ToggleTheme)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::outline),
        )
        .push(
            button(Text::new("Clear all").size(typography::BODY))
                .on_press_maybe(
                    (active_count > 0)
                        .then_some(Message::Notification(NotificationMessage::ClearAll)),
                )
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::outline),
        );

    let status = Text::new(format!("{active_count} on screen"))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::MUTED),
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(demos)
        .push(controls)
        .push(status);

    Container::new(content)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .padding(spacing::LG)
        .style(styles::panel)
        .into()
}

fn demo_button<'a>(kind: Kind) -> Element<'a, Message> {
    let label = match kind {
        Kind::Success => "Success",
        Kind::Error => "Error",
        Kind::Warning => "Warning",
        Kind::Info => "Info",
    };

    button(
        Container::new(Text::new(label).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::ShowDemo(kind))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::accent(accent_color(kind)))
    .into()
}
