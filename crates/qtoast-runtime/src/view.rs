#![forbid(unsafe_code)]

//! Render descriptions produced by the container.
//!
//! A [`ToastView`] is everything a painter needs for one toast at one
//! instant: content, resolved style for the current theme, lifecycle phase
//! and exit animation progress.

use std::time::{Duration, Instant};

use qtoast_core::{
    ThemeMode, ToastId, ToastKind, ToastMotion, ToastPosition, ToastStyle,
};

use crate::group::Positioned;
use crate::item::{ToastItem, ToastPhase};

/// Snapshot of one renderable toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub position: ToastPosition,
    pub theme: ThemeMode,
    pub style: ToastStyle,
    pub phase: ToastPhase,
    /// Entrance transition applied (Visible or Closing).
    pub entered: bool,
    /// Whether the pointer is over the toast.
    pub hovered: bool,
    pub motion: ToastMotion,
    /// Exit animation progress, 0.0 until closing starts.
    pub exit_progress: f64,
    /// Time left before auto-dismiss.
    pub remaining: Duration,
}

impl ToastView {
    /// Describe `item` as of `now` under `theme`.
    #[must_use]
    pub fn from_item(item: &ToastItem, theme: ThemeMode, now: Instant) -> Self {
        let record = item.record();
        Self {
            id: record.id,
            message: record.message.clone(),
            kind: record.kind,
            position: record.position,
            theme,
            style: ToastStyle::preset(record.kind, theme),
            phase: item.phase(),
            entered: item.entered(),
            hovered: item.is_hovered(),
            motion: item.motion(),
            exit_progress: item.exit_progress(now),
            remaining: item.remaining(now),
        }
    }

    /// Current `(dx, dy)` offset for a toast of the given size.
    ///
    /// Before the entrance transition the toast sits fully outside its
    /// resting place; while closing it moves out along its motion.
    #[must_use]
    pub fn offset(&self, width: u16, height: u16) -> (i16, i16) {
        if !self.entered {
            return self.motion.entrance_offset_at_progress(0.0, width, height);
        }
        self.motion
            .offset_at_progress(self.exit_progress, width, height)
    }

    /// Current scale factor (only scaling motions shrink).
    #[must_use]
    pub fn scale(&self) -> f64 {
        if !self.entered {
            return self.motion.scale_at_progress(1.0);
        }
        self.motion.scale_at_progress(self.exit_progress)
    }

    /// Icon followed by the message, e.g. `"✓ Saved"`.
    #[must_use]
    pub fn label(&self, ascii: bool) -> String {
        let icon = if ascii {
            self.style.ascii_icon
        } else {
            self.style.icon
        };
        format!("{icon} {}", self.message)
    }
}

impl Positioned for ToastView {
    fn position(&self) -> ToastPosition {
        self.position
    }
}
