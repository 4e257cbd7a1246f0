// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! without blocking interaction. Each one goes through two phases before it
//! disappears: it is first marked as leaving, which starts its exit animation,
//! and only deleted once the grace period has passed.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `Kind` and `NotifyRequest`
//! - [`manager`] - `Manager` owning the visible sequence and its timers
//! - [`timer`] - deadline-ordered timer queue with cancel handles
//! - [`transition`] - static enter/exit animation definitions
//! - [`toast`] - Toast widget for rendering notifications
//!
//! # Usage
//!
//! ```
//! use iced_notify::ui::notifications::{Manager, NotifyRequest};
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut manager = Manager::new();
//! let id = manager.notify_at(NotifyRequest::new("Saved").display_seconds(1.0), start);
//!
//! manager.advance(start + Duration::from_millis(1000));
//! assert!(manager.get(id).unwrap().is_leaving());
//!
//! manager.advance(start + Duration::from_millis(1500));
//! assert!(manager.is_empty());
//! ```

pub mod manager;
pub mod notification;
pub mod timer;
mod toast;
pub mod transition;

pub use manager::{Manager, Message as NotificationMessage, Notify, Timing, DEFAULT_LEAVE_GRACE};
pub use notification::{
    Kind, Notification, NotificationId, NotifyRequest, Phase, DEFAULT_DISPLAY_SECONDS,
};
pub use toast::Toast;
