#![forbid(unsafe_code)]

//! qtoast public facade crate.
//!
//! Re-exports the toast data model and runtime, and offers a lightweight
//! prelude for wiring a bus and a container into a host event loop.
//!
//! ```
//! use qtoast::prelude::*;
//!
//! let bus = ToastBus::new();
//! let mut container = ToastContainer::new(ToastConfig::default());
//! container.mount(&bus);
//!
//! bus.success("Saved", ToastOptions::new());
//! bus.error("Failed", ToastOptions::new().position(ToastPosition::BottomLeft));
//! assert_eq!(container.render().len(), 2);
//! ```

use std::fmt;
use std::path::Path;

#[cfg(feature = "logging")]
pub mod logging;

// --- Core re-exports -------------------------------------------------------

pub use qtoast_core::{
    Clock, ConfigError, MAX_DURATION, ManualClock, Rgb, SharedTheme, SystemClock, ThemeMode,
    ThemeProvider, ToastConfig, ToastEvent, ToastId, ToastKind, ToastMotion, ToastOptions,
    ToastPosition, ToastRecord, ToastStyle, coerce_duration,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use qtoast_runtime::{
    ContainerLifecycle, PositionGroups, Subscription, ToastBus, ToastContainer, ToastGroup,
    ToastPhase, ToastSimulator, ToastView, group_by_position,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for qtoast hosts.
#[derive(Debug)]
pub enum Error {
    /// Configuration could not be loaded or is invalid.
    Config(ConfigError),
    /// The logging subscriber could not be installed.
    Logging(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(msg) => write!(f, "logging: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for qtoast APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Load a JSON config file and apply `QTOAST_*` environment overrides.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be read or parsed, or if the
/// result (after overrides) is invalid.
pub fn load_config(path: impl AsRef<Path>) -> Result<ToastConfig> {
    let config = ToastConfig::load(path)?.with_env_overrides();
    config.validate()?;
    Ok(config)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Result, SharedTheme, ThemeMode, ToastConfig, ToastEvent, ToastId, ToastKind,
        ToastOptions, ToastPosition,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{ToastBus, ToastContainer, ToastPhase, ToastView};

    pub use crate::core;
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use qtoast_core as core;
#[cfg(feature = "runtime")]
pub use qtoast_runtime as runtime;
