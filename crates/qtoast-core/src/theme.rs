#![forbid(unsafe_code)]

//! Colour theme supplied by the host application.
//!
//! The toast subsystem only reads the current mode; it never writes it back.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Source of the current theme mode.
pub trait ThemeProvider {
    /// Current mode; read on every render.
    fn mode(&self) -> ThemeMode;
}

impl ThemeProvider for ThemeMode {
    fn mode(&self) -> ThemeMode {
        *self
    }
}

impl<F> ThemeProvider for F
where
    F: Fn() -> ThemeMode,
{
    fn mode(&self) -> ThemeMode {
        self()
    }
}

/// Cloneable theme handle the host can flip while toasts are on screen.
#[derive(Debug, Clone, Default)]
pub struct SharedTheme {
    mode: Rc<Cell<ThemeMode>>,
}

impl SharedTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: Rc::new(Cell::new(mode)),
        }
    }

    /// Replace the current mode. Every clone observes the change.
    pub fn set(&self, mode: ThemeMode) {
        self.mode.set(mode);
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        let next = match self.mode.get() {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.mode.set(next);
    }
}

impl ThemeProvider for SharedTheme {
    fn mode(&self) -> ThemeMode {
        self.mode.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_and_closure_providers() {
        assert_eq!(ThemeMode::Dark.mode(), ThemeMode::Dark);
        let provider = || ThemeMode::Light;
        assert_eq!(provider.mode(), ThemeMode::Light);
    }

    #[test]
    fn shared_theme_clones_observe_updates() {
        let theme = SharedTheme::new(ThemeMode::Light);
        let observer = theme.clone();
        theme.set(ThemeMode::Dark);
        assert_eq!(observer.mode(), ThemeMode::Dark);
        observer.toggle();
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn parse_modes() {
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("dim"), None);
        assert!(ThemeMode::Dark.is_dark());
    }
}
