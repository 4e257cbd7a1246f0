// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications: small cards with a
//! kind-colored accent border and a dismiss button. Cards slide and fade
//! according to the notification's current transition frame.

use super::manager::{Manager, Message};
use super::notification::Notification;
use super::transition::Frame;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Glyph used by the dismiss button.
const DISMISS_GLYPH: &str = "×";

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification as it should look at `now`.
    pub fn view<'a>(notification: &'a Notification, now: Instant) -> Element<'a, Message> {
        let frame = notification.frame(now);
        let accent_color = fade(notification.kind().color(), frame.opacity);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, frame.opacity)),
            });

        let dismiss_button = button(Text::new(DISMISS_GLYPH).size(sizing::ICON_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [message] [dismiss]
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
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, frame));

        // Slot with the card's width; the card is pushed right by the
        // transition offset and clipped.
        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(slide_padding(frame))
            .clip(true)
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Toasts are stacked in the top-right corner in display order.
    pub fn view_overlay<'a>(manager: &'a Manager, now: Instant) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, now))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
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
}

/// Scales a color's alpha by `factor`.
fn fade(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..color
    }
}

/// Left padding that shifts the card by the frame's offset.
fn slide_padding(frame: Frame) -> Padding {
    Padding {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: frame.offset.clamp(0.0, 1.0) * sizing::TOAST_WIDTH,
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, frame: Frame) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, frame.opacity))),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, frame.opacity * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, frame.opacity)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: if status == button::Status::Hovered {
                    opacity::OVERLAY_SUBTLE
                } else {
                    opacity::OVERLAY_MEDIUM
                },
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = Kind::Success.color();
        let style = toast_container_style(&theme, accent, Frame::SHOWN);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn hidden_frame_is_transparent_and_shifted() {
        let faded = fade(palette::SUCCESS_500, Frame::HIDDEN.opacity);
        assert_eq!(faded.a, 0.0);
        assert_eq!(slide_padding(Frame::HIDDEN).left, sizing::TOAST_WIDTH);
        assert_eq!(slide_padding(Frame::SHOWN).left, 0.0);
    }

    #[test]
    fn hovered_dismiss_button_has_background() {
        let style = dismiss_button_style(&Theme::Light, button::Status::Hovered);
        assert!(style.background.is_some());
        let style = dismiss_button_style(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn overlay_renders_without_panicking() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager, now);

        manager.notify_at(crate::ui::notifications::NotifyRequest::new("hello"), now);
        let _ = Toast::view_overlay(&manager, now);
    }
}
