#![forbid(unsafe_code)]

//! The persistent unit of a notification.

use std::time::Duration;

use crate::config::ToastConfig;
use crate::id::ToastId;
use crate::kind::ToastKind;
use crate::options::{MAX_DURATION, ToastEvent};
use crate::position::ToastPosition;

/// A toast with every default resolved.
///
/// Records are never edited in place; the owning container only adds and
/// removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRecord {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub position: ToastPosition,
    /// Auto-dismiss delay, counted from the moment the toast becomes visible.
    pub duration: Duration,
}

impl ToastRecord {
    /// Build a record from an emitted event, applying `config` defaults for
    /// every unset option.
    #[must_use]
    pub fn from_event(id: ToastId, event: &ToastEvent, config: &ToastConfig) -> Self {
        let options = &event.options;
        Self {
            id,
            message: event.message.clone(),
            kind: options.kind.unwrap_or(config.default_kind),
            position: options.position.unwrap_or(config.default_position),
            duration: options
                .duration
                .filter(|d| !d.is_zero())
                .unwrap_or(config.default_duration)
                .min(MAX_DURATION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ToastOptions;

    #[test]
    fn defaults_fill_unset_options() {
        let event = ToastEvent::new("Saved", ToastOptions::new());
        let record = ToastRecord::from_event(ToastId::new(1), &event, &ToastConfig::default());
        assert_eq!(record.message, "Saved");
        assert_eq!(record.kind, ToastKind::Success);
        assert_eq!(record.position, ToastPosition::TopRight);
        assert_eq!(record.duration, Duration::from_millis(3000));
    }

    #[test]
    fn explicit_options_win() {
        let event = ToastEvent::new(
            "Failed",
            ToastOptions::new()
                .kind(ToastKind::Error)
                .position(ToastPosition::BottomLeft)
                .duration_ms(800),
        );
        let record = ToastRecord::from_event(ToastId::new(2), &event, &ToastConfig::default());
        assert_eq!(record.kind, ToastKind::Error);
        assert_eq!(record.position, ToastPosition::BottomLeft);
        assert_eq!(record.duration, Duration::from_millis(800));
    }

    #[test]
    fn zero_duration_set_directly_still_uses_default() {
        let mut options = ToastOptions::new();
        options.duration = Some(Duration::ZERO);
        let event = ToastEvent::new("x", options);
        let record = ToastRecord::from_event(ToastId::new(3), &event, &ToastConfig::default());
        assert_eq!(record.duration, Duration::from_millis(3000));
    }
}
