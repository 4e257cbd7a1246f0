// SPDX-License-Identifier: MPL-2.0
//! Application root state for the notification demo shell.
//!
//! The `App` struct owns the notification manager and hands it to handlers
//! explicitly: buttons raise toasts through [`Notify`], toast dismiss buttons
//! and ticks are forwarded to the manager itself.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{DemoAction, Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, NotifyRequest};
use crate::ui::theming::ThemeMode;
use config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use iced::{window, Element, Subscription, Task, Theme};
use notifications::Notify;
use std::fmt;
use std::time::Instant;

/// Display time for startup warnings.
const STARTUP_WARNING_DISPLAY_SECONDS: f64 = 6.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Instant of the latest update, used to sample toast animations.
    now: Instant,
    /// Number of demo notifications raised so far.
    raised: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications.len())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
            now: Instant::now(),
            raised: 0,
        }
    }
}

impl App {
    /// Loads preferences and sets up the notification manager.
    ///
    /// A config file that fails to load is reported as an error toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::with_timing(config.notifications.timing()),
            ..App::default()
        };
        tracing::info!(
            locale = %app.i18n.current_locale(),
            timing = ?app.notifications.timing(),
            "starting"
        );

        if let Some(key) = config_warning {
            let request = NotifyRequest::error(app.i18n.tr(&key))
                .display_seconds(STARTUP_WARNING_DISPLAY_SECONDS);
            app.notifications.notify(request);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.is_animating(self.now),
            self.notifications.has_pending_timers(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.now = Instant::now();
                self.notifications
                    .handle_message(&notification_message, self.now);
            }
            Message::Demo(DemoAction::DismissAll) => {
                self.now = Instant::now();
                update::dismiss_all(&mut self.notifications, self.now);
            }
            Message::Demo(action) => {
                let mut ctx = update::UpdateContext {
                    i18n: &self.i18n,
                    notifier: &mut self.notifications,
                    raised: &mut self.raised,
                };
                update::handle_demo_action(&mut ctx, action);
                self.now = Instant::now();
            }
            Message::Tick(now) => {
                self.now = now;
                self.notifications.advance(now);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifications: &self.notifications,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        App {
            i18n: I18n::new(Some("en-US".to_string()), &config::Config::default()),
            ..App::default()
        }
    }

    #[test]
    fn demo_buttons_add_toasts_in_order() {
        let mut app = app();
        let _ = app.update(Message::Demo(DemoAction::ShowSuccess));
        let _ = app.update(Message::Demo(DemoAction::ShowError));

        let kinds: Vec<_> = app
            .notifications
            .visible()
            .map(|n| n.kind().clone())
            .collect();
        assert_eq!(
            kinds,
            vec![notifications::Kind::Success, notifications::Kind::Error]
        );
    }

    #[test]
    fn toast_dismiss_message_starts_leaving() {
        let mut app = app();
        let _ = app.update(Message::Demo(DemoAction::ShowPersistent));
        let id = app.notifications.visible().next().unwrap().id();

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(app.notifications.get(id).unwrap().is_leaving());
    }

    #[test]
    fn ticks_delete_dismissed_toasts() {
        let mut app = app();
        let _ = app.update(Message::Demo(DemoAction::ShowPersistent));
        let _ = app.update(Message::Demo(DemoAction::DismissAll));
        assert_eq!(app.notifications.len(), 1);

        let later = Instant::now() + Duration::from_secs(1);
        let _ = app.update(Message::Tick(later));
        assert!(app.notifications.is_empty());
        assert_eq!(app.now, later);
    }

    #[test]
    fn view_builds_with_toasts() {
        let mut app = app();
        let _ = app.view();
        let _ = app.update(Message::Demo(DemoAction::ShowSuccess));
        let _ = app.view();
    }
}
