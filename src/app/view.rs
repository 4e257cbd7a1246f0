// SPDX-License-Identifier: MPL-2.0
//! Demo panel layout with the toast overlay stacked on top.

use super::message::{DemoAction, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{button, column, row, text, Container, Stack};
use iced::{alignment, Element, Length};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a Manager,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let demo_button = |key: &str, action: DemoAction| {
        button(text(i18n.tr(key)).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press(Message::Demo(action))
    };

    let buttons = row![
        demo_button("demo-button-success", DemoAction::ShowSuccess),
        demo_button("demo-button-error", DemoAction::ShowError),
        demo_button("demo-button-persistent", DemoAction::ShowPersistent),
        demo_button("demo-button-dismiss-all", DemoAction::DismissAll),
    ]
    .spacing(spacing::XS);

    let count = ctx.notifications.len().to_string();
    let status = text(i18n.tr_with_args("demo-status", &[("count", count.as_str())]))
        .size(typography::CAPTION);

    let panel = column![
        text(i18n.tr("window-title")).size(typography::TITLE_MD),
        buttons,
        status,
    ]
    .spacing(spacing::MD);

    let content = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG);

    let overlay = Toast::view_overlay(ctx.notifications, ctx.now).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(overlay)
        .into()
}
