// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its `Kind`, and the
//! `NotifyRequest` callers hand to the manager.

use super::transition::{Frame, SLIDE_IN, SLIDE_OUT};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Display duration used when a request does not specify one.
pub const DEFAULT_DISPLAY_SECONDS: f64 = 3.0;

/// Unique identifier for a notification.
///
/// Ids are handed out by the owning manager from a monotonic counter and are
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(super) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the notification reports. Determines the accent color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Operation failed (red).
    Error,
    /// Any other kind label. Rendered with the error styling.
    Other(String),
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error | Kind::Other(_) => palette::ERROR_500,
        }
    }

    /// Returns the label this kind was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Other(label) => label,
        }
    }
}

impl FromStr for Kind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(if trimmed.eq_ignore_ascii_case("success") {
            Kind::Success
        } else if trimmed.eq_ignore_ascii_case("error") {
            Kind::Error
        } else {
            Kind::Other(trimmed.to_string())
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to display a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyRequest {
    message: String,
    kind: Kind,
    display_seconds: Option<f64>,
}

impl NotifyRequest {
    /// Creates a success request using the manager's default display time.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: Kind::Success,
            display_seconds: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).kind(Kind::Error)
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets how long the notification stays before leaving on its own.
    ///
    /// Zero, negative or non-finite values keep it on screen until removed.
    #[must_use]
    pub fn display_seconds(mut self, seconds: f64) -> Self {
        self.display_seconds = Some(seconds);
        self
    }

    /// Keeps the notification until it is explicitly removed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.display_seconds(0.0)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn requested_kind(&self) -> &Kind {
        &self.kind
    }

    #[must_use]
    pub fn requested_display_seconds(&self) -> Option<f64> {
        self.display_seconds
    }

    /// Resolves the auto-dismiss delay, falling back to `default_seconds`.
    ///
    /// Returns `None` when the notification should persist.
    #[must_use]
    pub fn auto_dismiss_after(&self, default_seconds: f64) -> Option<Duration> {
        let seconds = self.display_seconds.unwrap_or(default_seconds);
        if seconds > 0.0 {
            Duration::try_from_secs_f64(seconds).ok()
        } else {
            None
        }
    }

    pub(super) fn into_parts(self) -> (String, Kind) {
        (self.message, self.kind)
    }
}

impl From<&str> for NotifyRequest {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for NotifyRequest {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen (possibly still playing its enter animation).
    Visible,
    /// Exit animation running; deleted once the grace period ends.
    Leaving { since: Instant },
}

/// A notification in the visible sequence.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    kind: Kind,
    phase: Phase,
    created_at: Instant,
}

impl Notification {
    pub(super) fn new(id: NotificationId, message: String, kind: Kind, now: Instant) -> Self {
        Self {
            id,
            message,
            kind,
            phase: Phase::Visible,
            created_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the exit phase has started.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Leaving { .. })
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Marks the notification as leaving. Returns `false` if it already was.
    pub(super) fn begin_leaving(&mut self, now: Instant) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.phase = Phase::Leaving { since: now };
        true
    }

    /// Returns the animation frame to render at `now`.
    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        match self.phase {
            Phase::Visible => SLIDE_IN.sample(now.saturating_duration_since(self.created_at)),
            Phase::Leaving { since } => SLIDE_OUT.sample(now.saturating_duration_since(since)),
        }
    }

    /// Returns whether an animation is still in progress at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => !SLIDE_IN.is_finished(now.saturating_duration_since(self.created_at)),
            Phase::Leaving { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_is_total() {
        assert_eq!("success".parse::<Kind>(), Ok(Kind::Success));
        assert_eq!("ERROR".parse::<Kind>(), Ok(Kind::Error));
        assert_eq!(
            "warning".parse::<Kind>(),
            Ok(Kind::Other("warning".to_string()))
        );
    }

    #[test]
    fn unknown_kinds_use_the_error_color() {
        assert_eq!(Kind::Other("info".into()).color(), Kind::Error.color());
        assert_ne!(Kind::Success.color(), Kind::Error.color());
    }

    #[test]
    fn request_defaults_to_success_with_manager_default_time() {
        let request = NotifyRequest::new("Saved");
        assert_eq!(request.requested_kind(), &Kind::Success);
        assert_eq!(request.requested_display_seconds(), None);
        assert_eq!(
            request.auto_dismiss_after(DEFAULT_DISPLAY_SECONDS),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn non_positive_display_time_persists() {
        assert_eq!(NotifyRequest::new("x").persistent().auto_dismiss_after(3.0), None);
        assert_eq!(
            NotifyRequest::new("x").display_seconds(-1.0).auto_dismiss_after(3.0),
            None
        );
        assert_eq!(
            NotifyRequest::new("x").display_seconds(f64::NAN).auto_dismiss_after(3.0),
            None
        );
    }

    #[test]
    fn fractional_display_time_is_kept() {
        let request = NotifyRequest::error("oops").display_seconds(1.5);
        assert_eq!(request.auto_dismiss_after(3.0), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn begin_leaving_only_once() {
        let t0 = Instant::now();
        let mut notification =
            Notification::new(NotificationId::from_raw(0), "m".into(), Kind::Success, t0);
        assert!(!notification.is_leaving());
        assert!(notification.begin_leaving(t0));
        assert!(!notification.begin_leaving(t0 + Duration::from_millis(10)));
        assert_eq!(notification.phase(), Phase::Leaving { since: t0 });
    }

    #[test]
    fn frame_follows_phase() {
        let t0 = Instant::now();
        let mut notification =
            Notification::new(NotificationId::from_raw(0), "m".into(), Kind::Success, t0);
        assert_eq!(notification.frame(t0), Frame::HIDDEN);
        assert_eq!(notification.frame(t0 + Duration::from_secs(1)), Frame::SHOWN);
        assert!(!notification.is_animating(t0 + Duration::from_secs(1)));

        let leave_at = t0 + Duration::from_secs(2);
        notification.begin_leaving(leave_at);
        assert_eq!(notification.frame(leave_at), Frame::SHOWN);
        assert_eq!(notification.frame(leave_at + Duration::from_secs(1)), Frame::HIDDEN);
    }
}
