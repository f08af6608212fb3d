#![forbid(unsafe_code)]

//! Per-kind icon and colour presets.

use crate::kind::ToastKind;
use crate::theme::ThemeMode;

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        let r = f64::from(self.r);
        let g = f64::from(self.g);
        let b = f64::from(self.b);
        (0.2126 * r + 0.7152 * g + 0.0722 * b).round().clamp(0.0, 255.0) as u8
    }

    /// `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

mod palette {
    use super::Rgb;

    pub const SUCCESS: Rgb = Rgb::new(0x22, 0xc5, 0x5e);
    pub const SUCCESS_DARK: Rgb = Rgb::new(0x4a, 0xde, 0x80);
    pub const ERROR: Rgb = Rgb::new(0xef, 0x44, 0x44);
    pub const ERROR_DARK: Rgb = Rgb::new(0xf8, 0x71, 0x71);
    pub const INFO: Rgb = Rgb::new(0x3b, 0x82, 0xf6);
    pub const INFO_DARK: Rgb = Rgb::new(0x60, 0xa5, 0xfa);
    pub const WARNING: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
    pub const WARNING_DARK: Rgb = Rgb::new(0xfb, 0xbf, 0x24);

    pub const SURFACE_LIGHT: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const SURFACE_DARK: Rgb = Rgb::new(0x1f, 0x29, 0x37);
    pub const TEXT_LIGHT: Rgb = Rgb::new(0x11, 0x18, 0x27);
    pub const TEXT_DARK: Rgb = Rgb::new(0xf9, 0xfa, 0xfb);
}

/// Resolved visual preset for one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    /// Icon glyph.
    pub icon: char,
    /// Fallback icon for ASCII-only painters.
    pub ascii_icon: char,
    /// Accent (border/icon) colour.
    pub accent: Rgb,
    /// Card background.
    pub background: Rgb,
    /// Message text colour.
    pub foreground: Rgb,
}

impl ToastStyle {
    /// Preset for `kind` under `theme`.
    #[must_use]
    pub const fn preset(kind: ToastKind, theme: ThemeMode) -> Self {
        let (icon, ascii_icon) = match kind {
            ToastKind::Success => ('\u{2713}', '+'), // ✓
            ToastKind::Error => ('\u{2717}', 'x'),   // ✗
            ToastKind::Info => ('i', 'i'),
            ToastKind::Warning => ('!', '!'),
        };
        let accent = match (kind, theme) {
            (ToastKind::Success, ThemeMode::Light) => palette::SUCCESS,
            (ToastKind::Success, ThemeMode::Dark) => palette::SUCCESS_DARK,
            (ToastKind::Error, ThemeMode::Light) => palette::ERROR,
            (ToastKind::Error, ThemeMode::Dark) => palette::ERROR_DARK,
            (ToastKind::Info, ThemeMode::Light) => palette::INFO,
            (ToastKind::Info, ThemeMode::Dark) => palette::INFO_DARK,
            (ToastKind::Warning, ThemeMode::Light) => palette::WARNING,
            (ToastKind::Warning, ThemeMode::Dark) => palette::WARNING_DARK,
        };
        let (background, foreground) = match theme {
            ThemeMode::Light => (palette::SURFACE_LIGHT, palette::TEXT_LIGHT),
            ThemeMode::Dark => (palette::SURFACE_DARK, palette::TEXT_DARK),
        };
        Self {
            icon,
            ascii_icon,
            accent,
            background,
            foreground,
        }
    }
}
