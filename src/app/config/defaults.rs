// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Display time and leave grace period bounds
//! - **Window**: Default and minimum window size

use crate::ui::notifications::{DEFAULT_DISPLAY_SECONDS, DEFAULT_LEAVE_GRACE};

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a notification stays on screen (seconds).
pub const DEFAULT_NOTIFICATION_DISPLAY_SECS: f64 = DEFAULT_DISPLAY_SECONDS;

/// Minimum display time. Zero keeps notifications until dismissed.
pub const MIN_NOTIFICATION_DISPLAY_SECS: f64 = 0.0;

/// Maximum display time (seconds).
pub const MAX_NOTIFICATION_DISPLAY_SECS: f64 = 60.0;

/// Default leave grace period (milliseconds).
#[allow(clippy::cast_possible_truncation)]
pub const DEFAULT_LEAVE_GRACE_MS: u64 = DEFAULT_LEAVE_GRACE.as_millis() as u64;

/// Minimum leave grace period (milliseconds).
pub const MIN_LEAVE_GRACE_MS: u64 = 0;

/// Maximum leave grace period (milliseconds).
pub const MAX_LEAVE_GRACE_MS: u64 = 5_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 640.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 420.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_DISPLAY_SECS <= DEFAULT_NOTIFICATION_DISPLAY_SECS);
    assert!(DEFAULT_NOTIFICATION_DISPLAY_SECS <= MAX_NOTIFICATION_DISPLAY_SECS);
    assert!(MIN_LEAVE_GRACE_MS <= DEFAULT_LEAVE_GRACE_MS);
    assert!(DEFAULT_LEAVE_GRACE_MS <= MAX_LEAVE_GRACE_MS);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
