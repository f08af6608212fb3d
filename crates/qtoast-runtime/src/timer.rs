#![forbid(unsafe_code)]

//! Deadline-ordered one-shot timers for a single-threaded event loop.
//!
//! The queue never sleeps or spawns anything: the owner asks for
//! [`TimerQueue::next_deadline`], waits however its loop waits, then drains
//! [`TimerQueue::pop_due`]. Timers with equal deadlines fire in the order they
//! were scheduled.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

/// Handle to a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    deadline: Instant,
    seq: u64,
}

impl TimerHandle {
    /// When the timer fires.
    #[must_use]
    pub fn deadline(self) -> Instant {
        self.deadline
    }
}

/// A set of pending one-shot timers carrying a payload each.
pub struct TimerQueue<T> {
    timers: BTreeMap<(Instant, u64), T>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TimerQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.timers.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timers: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, payload: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert((deadline, seq), payload);
        TimerHandle { deadline, seq }
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&(handle.deadline, handle.seq)).is_some()
    }

    /// Whether `handle` is still pending.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&(handle.deadline, handle.seq))
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Remove and return the earliest timer whose deadline is at or before
    /// `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerHandle, T)> {
        let (&(deadline, _), _) = self.timers.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.timers
            .pop_first()
            .map(|((deadline, seq), payload)| (TimerHandle { deadline, seq }, payload))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
