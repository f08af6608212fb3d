#![forbid(unsafe_code)]

//! Toast severity kinds.

use serde::{Deserialize, Serialize};

/// Severity of a toast; selects its icon and colour preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Operation completed (green).
    #[default]
    Success,
    /// Operation failed (red).
    Error,
    /// Neutral information (blue).
    Info,
    /// Something needs attention (amber).
    Warning,
}

impl ToastKind {
    /// All kinds in declaration order.
    pub const ALL: [Self; 4] = [Self::Success, Self::Error, Self::Info, Self::Warning];

    /// Parse a kind name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "info" => Some(Self::Info),
            "warning" | "warn" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Parse a kind name, falling back to [`ToastKind::Success`] for anything
    /// unrecognised.
    #[must_use]
    pub fn from_lenient(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}
