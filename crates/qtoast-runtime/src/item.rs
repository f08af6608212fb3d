#![forbid(unsafe_code)]

//! Presentation lifecycle of a single toast.
//!
//! ```text
//! Mounting --enter delay--> Visible --duration--> Closing --exit--> Removed
//!    |                       |   ^                   ^
//!    | close / hide          |   | hover pauses,     | close / hide
//!    v                       |   | leave resumes     |
//! Removed                    +---+-------------------+
//! ```
//!
//! An item owns at most one pending timer. Arming a timer always cancels the
//! previous one, so a dismiss callback can never fire twice. The expiry
//! instant is fixed when the item becomes visible; hovering suspends the
//! countdown but does not extend it.

use std::time::{Duration, Instant};

use qtoast_core::{MAX_DURATION, ToastConfig, ToastId, ToastMotion, ToastRecord};

use crate::timer::{TimerHandle, TimerQueue};

/// Lifecycle phase of a toast item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastPhase {
    /// Rendered but the entrance transition has not been applied yet.
    Mounting,
    /// Fully shown; the dismiss countdown is running (unless hovered).
    Visible,
    /// Exit animation is playing.
    Closing,
    /// Finished; renders nothing and is dropped by its container.
    Removed,
}

/// What a pending item timer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Enter,
    Dismiss,
    Exit,
}

/// Timer payload: which item and which transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemTimer {
    pub id: ToastId,
    pub kind: TimerKind,
}

/// Timer queue shared by all items of one container.
pub type ItemTimers = TimerQueue<ItemTimer>;

/// Result of driving an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Nothing observable changed.
    Unchanged,
    /// Phase, timer or hover state changed.
    Changed,
    /// The item reached [`ToastPhase::Removed`]; drop its record.
    Remove,
}

/// Lifecycle state for one toast record.
#[derive(Debug, Clone)]
pub struct ToastItem {
    record: ToastRecord,
    phase: ToastPhase,
    phase_started: Instant,
    show: bool,
    hovered: bool,
    expires_at: Option<Instant>,
    pending: Option<(TimerHandle, TimerKind)>,
    enter_delay: Duration,
    exit_duration: Duration,
}

impl ToastItem {
    /// Create an item in [`ToastPhase::Mounting`]. Call [`ToastItem::mount`]
    /// to start its lifecycle.
    #[must_use]
    pub fn new(record: ToastRecord, config: &ToastConfig, now: Instant) -> Self {
        Self {
            record,
            phase: ToastPhase::Mounting,
            phase_started: now,
            show: true,
            hovered: false,
            expires_at: None,
            pending: None,
            enter_delay: config.enter_delay.min(MAX_DURATION),
            exit_duration: config.exit_duration.min(MAX_DURATION),
        }
    }

    /// Arm the entrance timer.
    pub fn mount(&mut self, timers: &mut ItemTimers, now: Instant) {
        if self.phase == ToastPhase::Mounting && self.pending.is_none() {
            self.arm(timers, now + self.enter_delay, TimerKind::Enter);
        }
    }

    /// Handle a fired timer. Stale handles (not this item's pending timer)
    /// are ignored.
    pub fn fire(
        &mut self,
        handle: TimerHandle,
        kind: TimerKind,
        timers: &mut ItemTimers,
        now: Instant,
    ) -> ItemOutcome {
        match self.pending {
            Some((pending, pending_kind)) if pending == handle && pending_kind == kind => {
                self.pending = None;
            }
            _ => return ItemOutcome::Unchanged,
        }
        match (self.phase, kind) {
            (ToastPhase::Mounting, TimerKind::Enter) => {
                self.enter_visible(timers, now);
                ItemOutcome::Changed
            }
            (ToastPhase::Visible, TimerKind::Dismiss) => {
                self.begin_close(timers, now);
                ItemOutcome::Changed
            }
            (ToastPhase::Closing, TimerKind::Exit) => {
                self.finish(timers, now);
                ItemOutcome::Remove
            }
            _ => ItemOutcome::Unchanged,
        }
    }

    /// Pointer entered the toast: suspend the dismiss countdown.
    pub fn mouse_enter(&mut self, timers: &mut ItemTimers) -> ItemOutcome {
        if self.phase != ToastPhase::Visible {
            return ItemOutcome::Unchanged;
        }
        self.hovered = true;
        self.cancel(timers);
        ItemOutcome::Changed
    }

    /// Pointer left the toast: resume the countdown toward the original
    /// expiry, or start closing if it has already passed.
    pub fn mouse_leave(&mut self, timers: &mut ItemTimers, now: Instant) -> ItemOutcome {
        if self.phase != ToastPhase::Visible {
            return ItemOutcome::Unchanged;
        }
        self.hovered = false;
        match self.expires_at {
            Some(expires_at) if expires_at > now => {
                self.arm(timers, expires_at, TimerKind::Dismiss);
            }
            _ => self.begin_close(timers, now),
        }
        ItemOutcome::Changed
    }

    /// Explicit close (the close control was clicked).
    ///
    /// A toast that never became visible is removed immediately.
    pub fn close(&mut self, timers: &mut ItemTimers, now: Instant) -> ItemOutcome {
        match self.phase {
            ToastPhase::Mounting => {
                self.finish(timers, now);
                ItemOutcome::Remove
            }
            ToastPhase::Visible => {
                self.begin_close(timers, now);
                ItemOutcome::Changed
            }
            ToastPhase::Closing | ToastPhase::Removed => ItemOutcome::Unchanged,
        }
    }

    /// Externally requested visibility. Hiding behaves like [`ToastItem::close`].
    pub fn set_show(&mut self, show: bool, timers: &mut ItemTimers, now: Instant) -> ItemOutcome {
        let changed = self.show != show;
        self.show = show;
        if !show {
            let outcome = self.close(timers, now);
            if outcome != ItemOutcome::Unchanged {
                return outcome;
            }
        }
        if changed {
            ItemOutcome::Changed
        } else {
            ItemOutcome::Unchanged
        }
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self, timers: &mut ItemTimers) {
        if let Some((handle, kind)) = self.pending.take() {
            timers.cancel(handle);
            tracing::trace!(id = %self.record.id, ?kind, "timer cancelled");
        }
    }

    fn arm(&mut self, timers: &mut ItemTimers, deadline: Instant, kind: TimerKind) {
        self.cancel(timers);
        let handle = timers.schedule(
            deadline,
            ItemTimer {
                id: self.record.id,
                kind,
            },
        );
        self.pending = Some((handle, kind));
        tracing::trace!(id = %self.record.id, ?kind, "timer armed");
    }

    fn enter_visible(&mut self, timers: &mut ItemTimers, now: Instant) {
        self.transition(ToastPhase::Visible, now);
        let expires_at = now + self.record.duration.min(MAX_DURATION);
        self.expires_at = Some(expires_at);
        self.arm(timers, expires_at, TimerKind::Dismiss);
    }

    fn begin_close(&mut self, timers: &mut ItemTimers, now: Instant) {
        self.hovered = false;
        self.transition(ToastPhase::Closing, now);
        self.arm(timers, now + self.exit_duration, TimerKind::Exit);
    }

    fn finish(&mut self, timers: &mut ItemTimers, now: Instant) {
        self.cancel(timers);
        self.transition(ToastPhase::Removed, now);
    }

    fn transition(&mut self, phase: ToastPhase, now: Instant) {
        tracing::trace!(id = %self.record.id, from = ?self.phase, to = ?phase, "phase");
        self.phase = phase;
        self.phase_started = now;
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.record.id
    }

    #[must_use]
    pub fn record(&self) -> &ToastRecord {
        &self.record
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Externally requested visibility.
    #[must_use]
    pub fn show(&self) -> bool {
        self.show
    }

    /// When the dismiss countdown ends; set once the item becomes visible.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// Kind of the pending timer, if one is armed.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerKind> {
        self.pending.map(|(_, kind)| kind)
    }

    /// Time left before auto-dismiss.
    ///
    /// The full duration while mounting, zero once closing.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.phase {
            ToastPhase::Mounting => self.record.duration,
            ToastPhase::Visible => self
                .expires_at
                .map_or(Duration::ZERO, |e| e.saturating_duration_since(now)),
            ToastPhase::Closing | ToastPhase::Removed => Duration::ZERO,
        }
    }

    /// Progress through the exit animation (0.0 to 1.0).
    #[must_use]
    pub fn exit_progress(&self, now: Instant) -> f64 {
        match self.phase {
            ToastPhase::Mounting | ToastPhase::Visible => 0.0,
            ToastPhase::Removed => 1.0,
            ToastPhase::Closing => {
                if self.exit_duration.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(self.phase_started);
                (elapsed.as_secs_f64() / self.exit_duration.as_secs_f64()).min(1.0)
            }
        }
    }

    /// Whether the entrance transition has been applied.
    #[must_use]
    pub fn entered(&self) -> bool {
        matches!(self.phase, ToastPhase::Visible | ToastPhase::Closing)
    }

    /// Whether the item should be painted: visibility is requested or the
    /// exit animation is still playing.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        match self.phase {
            ToastPhase::Removed => false,
            ToastPhase::Closing => true,
            ToastPhase::Mounting | ToastPhase::Visible => self.show,
        }
    }

    /// Exit motion for this toast's position.
    #[must_use]
    pub fn motion(&self) -> ToastMotion {
        self.record.position.exit_motion()
    }
}
