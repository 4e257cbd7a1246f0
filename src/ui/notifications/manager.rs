// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the visible sequence and every timer that drives it.
//! A notification is visible until its display timeout fires or it is removed,
//! then spends a grace period in the leaving phase (so its exit animation can
//! play) before it is deleted.
//!
//! All methods take the current instant explicitly. The host update loop
//! passes `Instant::now()`; tests pass a simulated clock.

use super::notification::{
    Kind, Notification, NotificationId, NotifyRequest, DEFAULT_DISPLAY_SECONDS,
};
use super::timer::{TimerHandle, TimerQueue};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Time a notification stays in the leaving phase before deletion.
pub const DEFAULT_LEAVE_GRACE: Duration = Duration::from_millis(500);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Dismiss every notification that is not already leaving.
    DismissAll,
    /// Fire whatever timers are due.
    Tick,
}

/// Timing knobs for a manager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Display time for requests that do not set one. `<= 0` keeps them
    /// until removed.
    pub default_display_seconds: f64,
    /// Length of the leaving phase.
    pub leave_grace: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            default_display_seconds: DEFAULT_DISPLAY_SECONDS,
            leave_grace: DEFAULT_LEAVE_GRACE,
        }
    }
}

/// Anything that accepts notification requests.
///
/// Components that only raise notifications take `&mut impl Notify` instead
/// of the whole manager.
pub trait Notify {
    /// Displays a notification and returns its id.
    fn notify(&mut self, request: NotifyRequest) -> NotificationId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    /// Display timeout elapsed: start leaving.
    Expire(NotificationId),
    /// Leave grace elapsed: delete.
    Delete(NotificationId),
}

/// Owns the visible notification sequence.
#[derive(Debug, Default)]
pub struct Manager {
    /// Visible notifications in display (append) order.
    visible: Vec<Notification>,
    timers: TimerQueue<Timer>,
    /// Pending display timeouts, cancelled on explicit removal.
    expiry: HashMap<NotificationId, TimerHandle>,
    next_id: u64,
    timing: Timing,
}

impl Manager {
    /// Creates a new empty notification manager with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timing(timing: Timing) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Replaces the timing used for notifications created from now on.
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Appends a notification and schedules its display timeout.
    pub fn notify_at(&mut self, request: NotifyRequest, now: Instant) -> NotificationId {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        // A timeout past the clock's range is treated as no timeout.
        let deadline = request
            .auto_dismiss_after(self.timing.default_display_seconds)
            .and_then(|after| now.checked_add(after));
        let (message, kind) = request.into_parts();

        if matches!(kind, Kind::Success) {
            tracing::debug!(%id, %message, "notification shown");
        } else {
            tracing::warn!(%id, %kind, %message, "notification shown");
        }

        self.visible.push(Notification::new(id, message, kind, now));

        if let Some(deadline) = deadline {
            let handle = self.timers.schedule(deadline, Timer::Expire(id));
            self.expiry.insert(id, handle);
        }

        id
    }

    /// Starts removing a notification.
    ///
    /// The notification is marked as leaving right away and deleted once the
    /// leave grace period has passed. Its display timeout, if still pending,
    /// is cancelled. Unknown or already-leaving ids are ignored.
    ///
    /// Returns `true` if the notification entered the leaving phase.
    pub fn remove(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(handle) = self.expiry.remove(&id) {
            self.timers.cancel(handle);
        }
        self.begin_leaving(id, now)
    }

    /// Starts removing every notification that is not already leaving.
    pub fn remove_all(&mut self, now: Instant) -> usize {
        let ids: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| !n.is_leaving())
            .map(Notification::id)
            .collect();
        ids.into_iter().filter(|id| self.remove(*id, now)).count()
    }

    /// Fires every timer due at `now`, in deadline order.
    ///
    /// Timers scheduled while this pass runs are left for the next call, so
    /// a notification that starts leaving here is never deleted in the same
    /// pass. Returns the number of timers fired.
    pub fn advance(&mut self, now: Instant) -> usize {
        let cutoff = self.timers.watermark();
        let mut fired = 0;

        while let Some((deadline, timer)) = self.timers.pop_due(now, cutoff) {
            fired += 1;
            match timer {
                Timer::Expire(id) => {
                    self.expiry.remove(&id);
                    self.begin_leaving(id, deadline);
                }
                Timer::Delete(id) => self.delete(id),
            }
        }

        fired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id, now);
            }
            Message::DismissAll => {
                self.remove_all(now);
            }
            Message::Tick => {
                self.advance(now);
            }
        }
    }

    /// Returns the visible notifications in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible.iter().find(|n| n.id() == id)
    }

    /// Returns the number of notifications in the visible sequence,
    /// including leaving ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Returns whether any display timeout or pending deletion is scheduled.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Returns when the next timer is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Returns whether any toast still needs animation frames at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.visible.iter().any(|n| n.is_animating(now))
    }

    fn begin_leaving(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(notification) = self.visible.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if !notification.begin_leaving(now) {
            return false;
        }
        tracing::debug!(%id, "notification leaving");
        // An unrepresentable grace deadline deletes on the next advance.
        let deadline = now.checked_add(self.timing.leave_grace).unwrap_or(now);
        self.timers.schedule(deadline, Timer::Delete(id));
        true
    }

    fn delete(&mut self, id: NotificationId) {
        let before = self.visible.len();
        self.visible.retain(|n| n.id() != id);
        if self.visible.len() < before {
            tracing::debug!(%id, "notification deleted");
        }
    }
}

impl Notify for Manager {
    fn notify(&mut self, request: NotifyRequest) -> NotificationId {
        self.notify_at(request, Instant::now())
    }
}
