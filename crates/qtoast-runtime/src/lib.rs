#![forbid(unsafe_code)]

//! qtoast runtime
//!
//! Everything that moves: the event bus producers publish on, the container
//! that owns active toasts, and the per-toast lifecycle state machine.
//!
//! # Key Components
//!
//! - [`ToastBus`] - explicit publish/subscribe broker for "add toast" events
//! - [`ToastContainer`] - owns the ordered toast list, timers and bus subscription
//! - [`ToastItem`] - Mounting → Visible → Closing → Removed state machine
//! - [`TimerQueue`] - deadline-ordered one-shot timers, polled by the host
//! - [`group_by_position`] - derived per-position grouping for rendering
//! - [`ToastSimulator`] - manual-clock harness for deterministic tests
//!
//! # Threading
//!
//! All types here are single-threaded (`!Send`). Bus delivery, timer
//! callbacks and interaction handlers all run on the host's event loop.

pub mod bus;
pub mod container;
pub mod group;
pub mod item;
pub mod simulator;
pub mod timer;
pub mod view;

pub use bus::{Subscription, ToastBus};
pub use container::{ContainerLifecycle, ToastContainer};
pub use group::{PositionGroups, Positioned, ToastGroup, group_by_position};
pub use item::{ItemOutcome, ItemTimer, ItemTimers, TimerKind, ToastItem, ToastPhase};
pub use simulator::ToastSimulator;
pub use timer::{TimerHandle, TimerQueue};
pub use view::ToastView;
