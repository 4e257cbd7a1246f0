// SPDX-License-Identifier: MPL-2.0
//! Tick subscription driving notification timers and animations.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval while a toast is animating (about 60 fps).
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick interval while only timers are pending.
pub const TIMER_TICK: Duration = Duration::from_millis(100);

/// Picks the tick interval, or `None` when nothing needs ticking.
#[must_use]
pub fn tick_interval(animating: bool, pending_timers: bool) -> Option<Duration> {
    if animating {
        Some(ANIMATION_TICK)
    } else if pending_timers {
        Some(TIMER_TICK)
    } else {
        None
    }
}

/// Creates the tick subscription for the current notification state.
pub fn create_tick_subscription(animating: bool, pending_timers: bool) -> Subscription<Message> {
    match tick_interval(animating, pending_timers) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_manager_needs_no_ticks() {
        assert_eq!(tick_interval(false, false), None);
    }

    #[test]
    fn animation_ticks_faster_than_timers() {
        assert_eq!(tick_interval(true, true), Some(ANIMATION_TICK));
        assert_eq!(tick_interval(false, true), Some(TIMER_TICK));
        assert!(ANIMATION_TICK < TIMER_TICK);
    }
}
