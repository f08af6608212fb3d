#![forbid(unsafe_code)]

//! Core: toast records, options normalisation, themes, style presets and
//! configuration.
//!
//! Nothing in this crate schedules or owns toasts; see `qtoast-runtime` for the
//! bus, container and item state machine.

pub mod clock;
pub mod config;
pub mod id;
pub mod kind;
pub mod logging;
pub mod motion;
pub mod options;
pub mod position;
pub mod record;
pub mod style;
pub mod theme;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, ConfigResult, ToastConfig};
pub use id::ToastId;
pub use kind::ToastKind;
pub use motion::ToastMotion;
pub use options::{MAX_DURATION, ToastEvent, ToastOptions, coerce_duration};
pub use position::ToastPosition;
pub use record::ToastRecord;
pub use style::{Rgb, ToastStyle};
pub use theme::{SharedTheme, ThemeMode, ThemeProvider};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
