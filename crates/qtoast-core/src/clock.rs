#![forbid(unsafe_code)]

//! Time sources.
//!
//! Every timer deadline is computed from a [`Clock`], so tests and the
//! simulator can drive time explicitly with [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The system monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same current time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward by `dt`.
    pub fn advance(&self, dt: Duration) {
        self.elapsed.set(self.elapsed.get().saturating_add(dt));
    }

    /// Move time forward to `instant`. Earlier instants are ignored.
    pub fn advance_to(&self, instant: Instant) {
        if let Some(elapsed) = instant.checked_duration_since(self.origin)
            && elapsed > self.elapsed.get()
        {
            self.elapsed.set(elapsed);
        }
    }

    /// Time advanced since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
