// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the demo panel.
//!
//! Handlers receive an [`UpdateContext`] holding only what they need. The
//! notification sink is any [`Notify`] implementation, so handlers never
//! reach for a global or for the whole manager.

use super::message::DemoAction;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, NotificationId, Notify, NotifyRequest};
use std::time::Instant;

/// Display time for demo errors, longer than the default so they can be read.
const DEMO_ERROR_DISPLAY_SECONDS: f64 = 5.0;

/// Mutable state borrowed by demo handlers.
pub struct UpdateContext<'a, N: Notify> {
    pub i18n: &'a I18n,
    pub notifier: &'a mut N,
    /// Number of notifications raised so far, used to label demo messages.
    pub raised: &'a mut u32,
}

/// Raises the notification matching a demo button.
///
/// Returns the id of the new notification, if one was raised.
pub fn handle_demo_action<N: Notify>(
    ctx: &mut UpdateContext<'_, N>,
    action: DemoAction,
) -> Option<NotificationId> {
    let request = match action {
        DemoAction::ShowSuccess => NotifyRequest::success(numbered(ctx, "demo-success-message")),
        DemoAction::ShowError => NotifyRequest::error(numbered(ctx, "demo-error-message"))
            .display_seconds(DEMO_ERROR_DISPLAY_SECONDS),
        DemoAction::ShowPersistent => {
            NotifyRequest::new(numbered(ctx, "demo-persistent-message")).persistent()
        }
        DemoAction::DismissAll => return None,
    };

    *ctx.raised += 1;
    Some(ctx.notifier.notify(request))
}

/// Dismisses everything on screen. Needs the manager itself, not just `Notify`.
pub fn dismiss_all(manager: &mut Manager, now: Instant) -> usize {
    manager.remove_all(now)
}

fn numbered<N: Notify>(ctx: &UpdateContext<'_, N>, key: &str) -> String {
    let number = (*ctx.raised + 1).to_string();
    ctx.i18n.tr_with_args(key, &[("number", number.as_str())])
}
