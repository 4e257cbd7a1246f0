// SPDX-License-Identifier: MPL-2.0
//! Deadline-ordered timer queue with cancel handles.
//!
//! The queue stores pending callbacks keyed by `(deadline, sequence)` so timers
//! sharing a deadline fire in the order they were scheduled. Nothing here
//! sleeps: the owner advances the queue with the current instant, which keeps
//! the notification lifecycle deterministic under a simulated clock.

use std::collections::BTreeMap;
use std::time::Instant;

/// Monotonic scheduling sequence number.
///
/// Used both to break ties between equal deadlines and as a cutoff so that a
/// single [`TimerQueue::pop_due`] pass ignores timers scheduled during it.
pub type Sequence = u64;

/// Handle to a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    deadline: Instant,
    sequence: Sequence,
}

/// Pending timers ordered by deadline.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: BTreeMap<(Instant, Sequence), T>,
    next_sequence: Sequence,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_sequence: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, payload: T) -> TimerHandle {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.insert((deadline, sequence), payload);
        TimerHandle { deadline, sequence }
    }

    /// Cancels a pending timer, returning its payload if it had not fired yet.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        self.entries.remove(&(handle.deadline, handle.sequence))
    }

    /// The sequence number the next scheduled timer will receive.
    ///
    /// Passing this value as the `cutoff` of [`pop_due`](Self::pop_due)
    /// excludes everything scheduled after this call.
    #[must_use]
    pub fn watermark(&self) -> Sequence {
        self.next_sequence
    }

    /// Removes and returns the earliest timer due at or before `now` that was
    /// scheduled before `cutoff`.
    pub fn pop_due(&mut self, now: Instant, cutoff: Sequence) -> Option<(Instant, T)> {
        let key = self
            .entries
            .range(..=(now, Sequence::MAX))
            .map(|(key, _)| *key)
            .find(|(_, sequence)| *sequence < cutoff)?;
        self.entries
            .remove(&key)
            .map(|payload| (key.0, payload))
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0 + ms(300), "late");
        queue.schedule(t0 + ms(100), "early");

        let cutoff = queue.watermark();
        assert_eq!(queue.pop_due(t0 + ms(500), cutoff), Some((t0 + ms(100), "early")));
        assert_eq!(queue.pop_due(t0 + ms(500), cutoff), Some((t0 + ms(300), "late")));
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0, 1);
        queue.schedule(t0, 2);

        let cutoff = queue.watermark();
        assert_eq!(queue.pop_due(t0, cutoff).map(|(_, v)| v), Some(1));
        assert_eq!(queue.pop_due(t0, cutoff).map(|(_, v)| v), Some(2));
    }

    #[test]
    fn timers_not_yet_due_stay_queued() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0 + ms(100), ());

        assert!(queue.pop_due(t0 + ms(99), queue.watermark()).is_none());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_deadline(), Some(t0 + ms(100)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(t0 + ms(10), "cancel me");

        assert_eq!(queue.cancel(handle), Some("cancel me"));
        assert_eq!(queue.cancel(handle), None);
        assert!(queue.pop_due(t0 + ms(20), queue.watermark()).is_none());
    }

    #[test]
    fn cutoff_excludes_timers_scheduled_later() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        let cutoff = queue.watermark();
        queue.schedule(t0, "scheduled after cutoff");

        assert!(queue.pop_due(t0, cutoff).is_none());
        assert!(queue.pop_due(t0, queue.watermark()).is_some());
    }
}
