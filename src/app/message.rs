// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toast interactions (dismiss buttons) forwarded to the manager.
    Notification(notifications::NotificationMessage),
    /// Buttons of the demo panel.
    Demo(DemoAction),
    /// Periodic tick driving notification timers and animations.
    Tick(Instant),
}

/// Notifications the demo panel can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    ShowSuccess,
    ShowError,
    ShowPersistent,
    DismissAll,
}

/// Runtime flags passed from the launcher into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_NOTIFY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
