// SPDX-License-Identifier: MPL-2.0
//! Toast layer: the iced rendering surface for notifications.
//!
//! `ToastLayer` receives the manager's mount/append/closing/remove operations
//! and keeps one retained card per notification. The view draws the cards as
//! small accent-bordered boxes stacked in the top-right corner, each with an
//! icon, title, message, close button and a progress bar counting down to the
//! auto-dismiss.

use crate::notifications::{Kind, Notification, NotificationId, NotificationMessage, Surface};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, font, Color, Element, Font, Length, Theme};
use std::time::Instant;

/// Retained toast cards, in display order.
#[derive(Debug, Default)]
pub struct ToastLayer {
    mounted: bool,
    cards: Vec<Notification>,
}

impl ToastLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay container has been created.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.cards.iter().map(Notification::id).collect()
    }

    /// Renders the toast overlay with all cards.
    ///
    /// Positions toasts in the top-right corner, oldest on top.
    pub fn view(&self, now: Instant) -> Element<'_, NotificationMessage> {
        if !self.mounted || self.cards.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toasts: Vec<Element<'_, NotificationMessage>> =
            self.cards.iter().map(|card| view_card(card, now)).collect();

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

impl Surface for ToastLayer {
    fn mount(&mut self) {
        self.mounted = true;
    }

    fn append(&mut self, notification: &Notification) {
        self.cards.push(notification.clone());
    }

    fn mark_closing(&mut self, id: NotificationId) {
        if let Some(card) = self.cards.iter_mut().find(|card| card.id() == id) {
            card.begin_closing();
        }
    }

    fn remove(&mut self, id: NotificationId) {
        self.cards.retain(|card| card.id() != id);
    }
}

/// Accent color for a notification kind.
#[must_use]
pub fn accent_color(kind: Kind) -> Color {
    match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Error => palette::ERROR_500,
        Kind::Warning => palette::WARNING_500,
        Kind::Info => palette::INFO_500,
    }
}

/// Renders a single toast card.
fn view_card(card: &Notification, now: Instant) -> Element<'_, NotificationMessage> {
    let accent = accent_color(card.kind());
    let closing = card.is_closing();

    let icon = Text::new(card.kind().glyph())
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(fade(accent, closing)),
        });

    let title = Text::new(card.title())
        .size(typography::BODY_LG)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        })
        .style(move |theme: &Theme| text::Style {
            color: Some(fade(theme.palette().text, closing)),
        });

    let message = Text::new(card.message())
        .size(typography::BODY_SM)
        .style(move |theme: &Theme| text::Style {
            color: Some(fade(theme.extended_palette().background.weak.text, closing)),
        });

    let close_button = button(Text::new("✕").size(typography::CAPTION))
        .on_press(NotificationMessage::Close(card.id()))
        .padding(spacing::XXS)
        .style(close_button_style);

    // Layout: [icon] [title / message] [close]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Top)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(title)
                .push(message)
                .width(Length::Fill),
        )
        .push(close_button);

    let progress = progress_bar(0.0..=1.0, card.remaining_fraction(now)).style(
        move |theme: &Theme| progress_bar::Style {
            background: iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..theme.palette().text
            }),
            bar: iced::Background::Color(accent),
            border: iced::Border::default(),
        },
    );

    let body = Column::new().spacing(spacing::XS).push(content).push(progress);

    Container::new(body)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, closing))
        .into()
}

fn fade(color: Color, closing: bool) -> Color {
    if closing {
        Color {
            a: color.a * opacity::OVERLAY_MEDIUM,
            ..color
        }
    } else {
        color
    }
}

/// Style function for the toast container. Closing cards are faded out.
fn toast_container_style(theme: &Theme, accent_color: Color, closing: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, closing))),
        border: iced::Border {
            color: fade(accent_color, closing),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if closing { shadow::NONE } else { shadow::MD },
        text_color: Some(fade(theme.palette().text, closing)),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let highlighted = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => highlighted(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => highlighted(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
