#![forbid(unsafe_code)]

//! Toast timing and default configuration.
//!
//! Configuration is read from JSON (every field optional) and may be
//! overridden through environment variables:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `QTOAST_DEFAULT_DURATION_MS` | `default_duration` |
//! | `QTOAST_ENTER_DELAY_MS` | `enter_delay` |
//! | `QTOAST_EXIT_DURATION_MS` | `exit_duration` |
//! | `QTOAST_DEFAULT_POSITION` | `default_position` |
//! | `QTOAST_DEFAULT_KIND` | `default_kind` |
//!
//! Unparseable overrides are ignored (and logged); they never fail loading.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::kind::ToastKind;
use crate::options::MAX_DURATION;
use crate::position::ToastPosition;

const ENV_DEFAULT_DURATION_MS: &str = "QTOAST_DEFAULT_DURATION_MS";
const ENV_ENTER_DELAY_MS: &str = "QTOAST_ENTER_DELAY_MS";
const ENV_EXIT_DURATION_MS: &str = "QTOAST_EXIT_DURATION_MS";
const ENV_DEFAULT_POSITION: &str = "QTOAST_DEFAULT_POSITION";
const ENV_DEFAULT_KIND: &str = "QTOAST_DEFAULT_KIND";

/// Default auto-dismiss delay.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);
/// Delay between mount and the entrance transition.
pub const DEFAULT_ENTER_DELAY: Duration = Duration::from_millis(10);
/// Length of the exit animation.
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(300);

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The config text is not valid JSON for [`ToastConfig`].
    Parse(String),
    /// The config parsed but holds an unusable value.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(msg) => write!(f, "config parse error: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(_) | ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

/// Timing and defaults applied to every toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastConfig {
    /// Auto-dismiss delay when a toast does not specify one.
    pub default_duration: Duration,
    /// Delay between mount and the entrance transition.
    pub enter_delay: Duration,
    /// Exit animation length; the record is dropped when it elapses.
    pub exit_duration: Duration,
    /// Position when a toast does not specify one.
    pub default_position: ToastPosition,
    /// Kind when a toast does not specify one.
    pub default_kind: ToastKind,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_DURATION,
            enter_delay: DEFAULT_ENTER_DELAY,
            exit_duration: DEFAULT_EXIT_DURATION,
            default_position: ToastPosition::default(),
            default_kind: ToastKind::default(),
        }
    }
}

/// On-disk shape: millisecond integers, every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    default_duration_ms: Option<u64>,
    enter_delay_ms: Option<u64>,
    exit_duration_ms: Option<u64>,
    default_position: Option<ToastPosition>,
    default_kind: Option<ToastKind>,
}

impl ToastConfig {
    /// Parse configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when the result fails validation.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let raw: RawConfig = serde_json::from_str(text)?;
        let defaults = Self::default();
        let config = Self {
            default_duration: raw
                .default_duration_ms
                .map_or(defaults.default_duration, Duration::from_millis),
            enter_delay: raw
                .enter_delay_ms
                .map_or(defaults.enter_delay, Duration::from_millis),
            exit_duration: raw
                .exit_duration_ms
                .map_or(defaults.exit_duration, Duration::from_millis),
            default_position: raw.default_position.unwrap_or(defaults.default_position),
            default_kind: raw.default_kind.unwrap_or(defaults.default_kind),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`ToastConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        crate::debug!(path = %path.display(), "loaded toast config");
        Ok(config)
    }

    /// Apply overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using a custom environment lookup (for tests).
    #[must_use]
    pub fn with_env_overrides_from<F>(mut self, get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(d) = env_millis(&get_env, ENV_DEFAULT_DURATION_MS)
            && !d.is_zero()
        {
            self.default_duration = d;
        }
        if let Some(d) = env_millis(&get_env, ENV_ENTER_DELAY_MS) {
            self.enter_delay = d;
        }
        if let Some(d) = env_millis(&get_env, ENV_EXIT_DURATION_MS) {
            self.exit_duration = d;
        }
        if let Some(value) = get_env(ENV_DEFAULT_POSITION) {
            match ToastPosition::parse(&value) {
                Some(position) => self.default_position = position,
                None => {
                    crate::warn!(key = ENV_DEFAULT_POSITION, value = %value, "ignoring override");
                }
            }
        }
        if let Some(value) = get_env(ENV_DEFAULT_KIND) {
            match ToastKind::parse(&value) {
                Some(kind) => self.default_kind = kind,
                None => {
                    crate::warn!(key = ENV_DEFAULT_KIND, value = %value, "ignoring override");
                }
            }
        }
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `default_duration` is zero or any
    /// duration exceeds [`MAX_DURATION`].
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_duration.is_zero() {
            return Err(ConfigError::Invalid(
                "default_duration_ms must be greater than zero".into(),
            ));
        }
        for (field, value) in [
            ("default_duration_ms", self.default_duration),
            ("enter_delay_ms", self.enter_delay),
            ("exit_duration_ms", self.exit_duration),
        ] {
            if value > MAX_DURATION {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be at most {} ms",
                    MAX_DURATION.as_millis()
                )));
            }
        }
        Ok(())
    }
}

fn env_millis<F>(get_env: &F, key: &str) -> Option<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let value = get_env(key)?;
    match value.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms).min(MAX_DURATION)),
        Err(_) => {
            crate::warn!(key, value = %value, "ignoring override");
            None
        }
    }
}
