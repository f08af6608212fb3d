#![forbid(unsafe_code)]

//! Deterministic toast simulator for testing.
//!
//! `ToastSimulator` wires a [`ManualClock`], a [`ToastBus`] and a mounted
//! [`ToastContainer`] together so scenarios can be scripted without real
//! time passing.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use qtoast_core::ToastOptions;
//! use qtoast_runtime::simulator::ToastSimulator;
//!
//! let mut sim = ToastSimulator::new();
//! sim.bus().success("Saved", ToastOptions::new());
//! sim.advance(Duration::from_millis(10));
//! assert_eq!(sim.container().len(), 1);
//!
//! let removed = sim.advance(Duration::from_millis(3300));
//! assert_eq!(removed.len(), 1);
//! assert!(sim.container().is_empty());
//! ```

use std::time::{Duration, Instant};

use qtoast_core::{Clock, ManualClock, ThemeProvider, ToastConfig, ToastId};

use crate::bus::ToastBus;
use crate::container::ToastContainer;

/// Clock, bus and container driven step by step.
pub struct ToastSimulator {
    clock: ManualClock,
    bus: ToastBus,
    container: ToastContainer,
}

impl Default for ToastSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToastSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastSimulator")
            .field("elapsed", &self.clock.elapsed())
            .field("container", &self.container)
            .finish()
    }
}

impl ToastSimulator {
    /// Simulator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ToastConfig::default())
    }

    #[must_use]
    pub fn with_config(config: ToastConfig) -> Self {
        let clock = ManualClock::new();
        let bus = ToastBus::new();
        let mut container = ToastContainer::with_clock(config, clock.clone());
        container.mount(&bus);
        Self {
            clock,
            bus,
            container,
        }
    }

    /// Replace the container's theme provider.
    #[must_use]
    pub fn with_theme(self, theme: impl ThemeProvider + 'static) -> Self {
        self.container.set_theme(theme);
        self
    }

    /// The bus the container listens on.
    #[must_use]
    pub fn bus(&self) -> &ToastBus {
        &self.bus
    }

    #[must_use]
    pub fn container(&self) -> &ToastContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut ToastContainer {
        &mut self.container
    }

    #[must_use]
    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Move time forward by `dt`, ticking the container at every timer
    /// deadline on the way.
    ///
    /// Returns the ids of toasts that finished during the interval.
    pub fn advance(&mut self, dt: Duration) -> Vec<ToastId> {
        let target = self.clock.now() + dt;
        let mut removed = Vec::new();
        while let Some(deadline) = self.container.next_deadline() {
            if deadline > target {
                break;
            }
            self.clock.advance_to(deadline);
            removed.extend(self.container.tick());
        }
        self.clock.advance_to(target);
        removed.extend(self.container.tick());
        removed
    }

    /// Run until no timer is pending (hovered toasts stay).
    pub fn settle(&mut self) -> Vec<ToastId> {
        let mut removed = Vec::new();
        while let Some(deadline) = self.container.next_deadline() {
            self.clock.advance_to(deadline);
            removed.extend(self.container.tick());
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ToastPhase;
    use qtoast_core::ToastOptions;

    #[test]
    fn advance_steps_through_intermediate_deadlines() {
        let mut sim = ToastSimulator::new();
        sim.bus().success("Saved", ToastOptions::new());
        let id = sim.container().ids()[0];
        let start = sim.now();

        assert!(sim.advance(Duration::from_millis(9)).is_empty());
        assert_eq!(sim.container().phase(id), Some(ToastPhase::Mounting));

        sim.advance(Duration::from_millis(1));
        assert_eq!(sim.container().phase(id), Some(ToastPhase::Visible));
        assert_eq!(sim.container().remaining(id), Some(Duration::from_millis(3000)));

        assert_eq!(sim.advance(Duration::from_secs(60)), vec![id]);
        assert_eq!(sim.now() - start, Duration::from_millis(60_010));
    }

    #[test]
    fn settle_leaves_hovered_toasts() {
        let mut sim = ToastSimulator::new();
        sim.bus().success("stay", ToastOptions::new());
        sim.bus().success("go", ToastOptions::new());
        sim.advance(Duration::from_millis(10));
        let ids = sim.container().ids();
        sim.container_mut().mouse_enter(ids[0]);

        assert_eq!(sim.settle(), vec![ids[1]]);
        assert_eq!(sim.container().ids(), vec![ids[0]]);
        assert_eq!(sim.container().next_deadline(), None);
    }
}
