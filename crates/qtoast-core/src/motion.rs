#![forbid(unsafe_code)]

//! Entrance/exit motion for toasts.
//!
//! The exit motion is derived from a toast's position (see
//! [`ToastPosition::exit_motion`](crate::ToastPosition::exit_motion)); the
//! entrance plays the same motion in reverse.

/// Direction a toast moves while leaving the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastMotion {
    /// Slide out through the left edge.
    SlideLeft,
    /// Slide out through the right edge.
    SlideRight,
    /// Slide out through the top edge.
    SlideUp,
    /// Slide out through the bottom edge.
    SlideDown,
    /// Shrink in place.
    ScaleDown,
}

impl ToastMotion {
    /// Offset at the end of the exit motion.
    ///
    /// Returns `(dx, dy)` in cells from the resting position.
    #[must_use]
    pub fn final_offset(self, width: u16, height: u16) -> (i16, i16) {
        let w = i16::try_from(width).unwrap_or(i16::MAX);
        let h = i16::try_from(height).unwrap_or(i16::MAX);
        match self {
            Self::SlideLeft => (-w, 0),
            Self::SlideRight => (w, 0),
            Self::SlideUp => (0, -h),
            Self::SlideDown => (0, h),
            Self::ScaleDown => (0, 0),
        }
    }

    /// Exit offset at `progress` (0.0 = resting, 1.0 = fully out).
    #[must_use]
    pub fn offset_at_progress(self, progress: f64, width: u16, height: u16) -> (i16, i16) {
        let (dx, dy) = self.final_offset(width, height);
        let p = progress.clamp(0.0, 1.0);
        (
            (f64::from(dx) * p).round() as i16,
            (f64::from(dy) * p).round() as i16,
        )
    }

    /// Entrance offset at `progress` (0.0 = fully out, 1.0 = resting).
    #[must_use]
    pub fn entrance_offset_at_progress(self, progress: f64, width: u16, height: u16) -> (i16, i16) {
        self.offset_at_progress(1.0 - progress.clamp(0.0, 1.0), width, height)
    }

    /// Scale factor at exit `progress`; only [`ToastMotion::ScaleDown`] shrinks.
    #[must_use]
    pub fn scale_at_progress(self, progress: f64) -> f64 {
        match self {
            Self::ScaleDown => 1.0 - progress.clamp(0.0, 1.0),
            _ => 1.0,
        }
    }

    /// Whether the motion moves the toast (vs. scaling it in place).
    #[must_use]
    pub fn affects_position(self) -> bool {
        !matches!(self, Self::ScaleDown)
    }
}
