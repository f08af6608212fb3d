#![forbid(unsafe_code)]

//! Subscriber installation for hosts that do not bring their own.
//!
//! # Environment Variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `QTOAST_LOG` | `warn` | `EnvFilter` directives, e.g. `qtoast_runtime=debug` |
//! | `QTOAST_LOG_JSON` | off | `1`/`true`/`yes`/`on` selects JSON lines |
//!
//! Hosts that already manage a subscriber should skip [`LogConfig::install`]
//! and add their own layers; every qtoast crate only emits through `tracing`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{Error, Result};

const ENV_LOG: &str = "QTOAST_LOG";
const ENV_LOG_JSON: &str = "QTOAST_LOG_JSON";

/// Default filter when `QTOAST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Logging output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read configuration using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = get_env(ENV_LOG)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let json = get_env(ENV_LOG_JSON).is_some_and(|v| is_truthy(&v));
        Self { filter, json }
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    #[must_use]
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Parse the filter directives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Logging`] if the directives are malformed.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter)
            .map_err(|err| Error::Logging(format!("invalid filter {:?}: {err}", self.filter)))
    }

    /// Install a global registry subscriber with a fmt layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Logging`] if the filter is malformed or a global
    /// subscriber is already set.
    pub fn install(self) -> Result<()> {
        let filter = self.env_filter()?;
        let registry = tracing_subscriber::registry().with(filter);
        let installed = if self.json {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
        } else {
            registry.with(tracing_subscriber::fmt::layer()).try_init()
        };
        installed.map_err(|err| Error::Logging(err.to_string()))?;
        tracing::debug!(filter = %self.filter, json = self.json, "qtoast logging installed");
        Ok(())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(LogConfig::from_env_with(env(&[])), LogConfig::default());
    }

    #[test]
    fn reads_filter_and_json_flag() {
        let config = LogConfig::from_env_with(env(&[
            ("QTOAST_LOG", "qtoast_runtime=trace"),
            ("QTOAST_LOG_JSON", "Yes"),
        ]));
        assert_eq!(config.filter, "qtoast_runtime=trace");
        assert!(config.json);
    }

    #[test]
    fn blank_filter_falls_back_and_falsy_json_is_off() {
        let config = LogConfig::from_env_with(env(&[
            ("QTOAST_LOG", "   "),
            ("QTOAST_LOG_JSON", "0"),
        ]));
        assert_eq!(config.filter, DEFAULT_FILTER);
        assert!(!config.json);
    }

    #[test]
    fn malformed_filter_is_rejected() {
        let err = LogConfig::default()
            .filter("qtoast=loudest")
            .env_filter()
            .unwrap_err();
        assert!(matches!(err, Error::Logging(_)));
    }
}
