// SPDX-License-Identifier: MPL-2.0
//! Enter and exit animations for toasts.
//!
//! Both transitions are plain constants: the rendering layer samples them with
//! the time elapsed since a notification appeared (or started leaving) and
//! applies the resulting frame. Nothing is registered at mount time.

use std::time::Duration;

/// Length of the enter and exit animations.
///
/// Matches the leave grace period so the exit animation finishes right as the
/// toast is deleted.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// A single sampled animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Horizontal offset as a fraction of the toast width (`1.0` = fully
    /// shifted out to the right).
    pub offset: f32,
    /// Opacity multiplier in `0.0..=1.0`.
    pub opacity: f32,
}

impl Frame {
    /// Fully on screen.
    pub const SHOWN: Frame = Frame {
        offset: 0.0,
        opacity: 1.0,
    };

    /// Off screen to the right.
    pub const HIDDEN: Frame = Frame {
        offset: 1.0,
        opacity: 0.0,
    };

    fn lerp(from: Frame, to: Frame, t: f32) -> Frame {
        Frame {
            offset: from.offset + (to.offset - from.offset) * t,
            opacity: from.opacity + (to.opacity - from.opacity) * t,
        }
    }
}

/// A linear animation between two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub from: Frame,
    pub to: Frame,
}

/// Slide in from the right while fading in.
pub const SLIDE_IN: Transition = Transition {
    duration: TRANSITION_DURATION,
    from: Frame::HIDDEN,
    to: Frame::SHOWN,
};

/// Slide out to the right while fading out.
pub const SLIDE_OUT: Transition = Transition {
    duration: TRANSITION_DURATION,
    from: Frame::SHOWN,
    to: Frame::HIDDEN,
};

impl Transition {
    /// Samples the transition `elapsed` after it started.
    ///
    /// Holds the final frame once the duration has passed.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Frame {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Frame::lerp(self.from, self.to, t)
    }

    /// Returns whether the transition has reached its final frame.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
