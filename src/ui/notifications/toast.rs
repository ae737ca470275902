// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts stack in the top-right corner with a kind-colored background and a
//! close control. The slide transition is drawn by padding the toast
//! out of a clipped slot.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at its current slide position.
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        slide_offset: f32,
    ) -> Element<'a, Message> {
        let background = notification.kind().color();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .color(palette::WHITE);

        let dismiss_button = button(text("×").size(typography::TITLE_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XXS])
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::MD, spacing::LG])
            .style(move |_theme: &Theme| toast_container_style(background));

        // Slot wide enough for the card plus its margin; sliding pushes the
        // card past the right edge.
        let travel = sizing::TOAST_WIDTH + spacing::LG;
        Container::new(card)
            .width(Length::Fixed(travel))
            .padding(Padding {
                left: slide_offset.clamp(0.0, 1.0) * travel,
                ..Padding::ZERO
            })
            .clip(true)
            .into()
    }

    /// Renders the toast overlay with all attached notifications.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| {
                let offset = notification.slide_offset(now, manager.timing());
                Self::view(notification, i18n, offset)
            })
            .collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            // Fixed top-right; the slot margin provides the right gap
            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(Padding {
                    top: 20.0,
                    ..Padding::ZERO
                })
                .into()
        }
    }
}

fn toast_container_style(background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::TOAST,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::WHITE
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;

    #[test]
    fn toast_background_follows_kind() {
        let style = toast_container_style(Kind::Error.color());
        assert_eq!(
            style.background,
            Some(Background::Color(palette::NOTIFY_ERROR))
        );
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }
}
