#![forbid(unsafe_code)]

//! Emit options and the bus payload.
//!
//! Callers may hand over a typed [`ToastOptions`] or an untyped JSON map.
//! Untyped maps are normalised leniently: anything malformed is dropped and
//! the configured default applies later, so no emit path can fail.

use std::time::Duration;

use serde_json::Value;

use crate::kind::ToastKind;
use crate::position::ToastPosition;

/// Longest accepted duration (2^31 - 1 ms, about 24.8 days). Longer values are
/// clamped.
pub const MAX_DURATION: Duration = Duration::from_millis(2_147_483_647);

/// Options attached to an emitted toast. `None` fields use configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub kind: Option<ToastKind>,
    pub position: Option<ToastPosition>,
    pub duration: Option<Duration>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kind.
    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the position.
    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the auto-dismiss duration. A zero duration is treated as unset.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = (!duration.is_zero()).then_some(duration.min(MAX_DURATION));
        self
    }

    /// Set the auto-dismiss duration in milliseconds. Zero is treated as unset.
    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    /// Fill in `kind` only when the caller did not set one.
    ///
    /// An explicit kind in the options takes precedence over the kind implied
    /// by the emitter (`success`, `error`, ...).
    #[must_use]
    pub fn merge_kind(mut self, kind: ToastKind) -> Self {
        self.kind.get_or_insert(kind);
        self
    }

    /// Normalise an untyped options map.
    ///
    /// Recognised keys are `type`, `position` and `duration`. Unknown keys,
    /// non-object values and malformed entries are ignored. An unrecognised
    /// `type` string becomes [`ToastKind::Success`].
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        let kind = map
            .get("type")
            .and_then(Value::as_str)
            .map(ToastKind::from_lenient);
        let position = map
            .get("position")
            .and_then(Value::as_str)
            .and_then(ToastPosition::parse);
        let duration = map.get("duration").and_then(coerce_duration);
        Self {
            kind,
            position,
            duration,
        }
    }
}

/// Coerce a loosely typed duration (milliseconds) into a [`Duration`].
///
/// Positive finite numbers and numeric strings are accepted; fractional
/// milliseconds are truncated (with a floor of 1 ms) and values above
/// [`MAX_DURATION`] are clamped. Zero, negatives, `null`, `NaN`, non-numeric
/// strings and non-scalar values return `None`.
#[must_use]
pub fn coerce_duration(value: &Value) -> Option<Duration> {
    let millis = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !millis.is_finite() || millis <= 0.0 {
        return None;
    }
    // f64 -> u64 saturates for out-of-range values.
    Some(Duration::from_millis((millis as u64).max(1)).min(MAX_DURATION))
}

/// An "add toast" event as carried by the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEvent {
    pub message: String,
    pub options: ToastOptions,
}

impl ToastEvent {
    #[must_use]
    pub fn new(message: impl Into<String>, options: ToastOptions) -> Self {
        Self {
            message: message.into(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duration_coercion_rejects_non_positive_and_garbage() {
        for value in [
            json!(0),
            json!(-5),
            json!(null),
            json!("abc"),
            json!(""),
            json!(true),
            json!([1000]),
            json!({"ms": 1000}),
            json!(-0.5),
            json!("0"),
        ] {
            assert_eq!(coerce_duration(&value), None, "{value}");
        }
    }

    #[test]
    fn duration_coercion_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_duration(&json!(1500)), Some(Duration::from_millis(1500)));
        assert_eq!(coerce_duration(&json!(" 250 ")), Some(Duration::from_millis(250)));
        assert_eq!(coerce_duration(&json!(99.9)), Some(Duration::from_millis(99)));
    }

    #[test]
    fn sub_millisecond_durations_round_up_to_one_ms() {
        assert_eq!(coerce_duration(&json!(0.5)), Some(Duration::from_millis(1)));
        assert_eq!(coerce_duration(&json!("0.9")), Some(Duration::from_millis(1)));
        assert_eq!(coerce_duration(&json!(1e-9)), Some(Duration::from_millis(1)));
    }

    #[test]
    fn huge_durations_are_clamped() {
        assert_eq!(coerce_duration(&json!(1e300)), Some(MAX_DURATION));
        assert_eq!(coerce_duration(&json!("1e300")), Some(MAX_DURATION));
        assert_eq!(
            ToastOptions::new().duration(Duration::MAX).duration,
            Some(MAX_DURATION)
        );
    }

    #[test]
    fn from_value_reads_known_keys() {
        let opts = ToastOptions::from_value(&json!({
            "type": "error",
            "position": "bottom-left",
            "duration": 5000,
            "ignored": "yes",
        }));
        assert_eq!(opts.kind, Some(ToastKind::Error));
        assert_eq!(opts.position, Some(ToastPosition::BottomLeft));
        assert_eq!(opts.duration, Some(Duration::from_millis(5000)));
    }

    #[test]
    fn from_value_drops_malformed_entries() {
        let opts = ToastOptions::from_value(&json!({
            "type": 7,
            "position": "upstairs",
            "duration": "soon",
        }));
        assert_eq!(opts, ToastOptions::default());
        assert_eq!(ToastOptions::from_value(&json!("not a map")), ToastOptions::default());
        assert_eq!(ToastOptions::from_value(&Value::Null), ToastOptions::default());
    }

    #[test]
    fn unknown_type_string_becomes_success() {
        let opts = ToastOptions::from_value(&json!({"type": "danger"}));
        assert_eq!(opts.kind, Some(ToastKind::Success));
    }

    #[test]
    fn merge_kind_keeps_explicit_kind() {
        let explicit = ToastOptions::new().kind(ToastKind::Info).merge_kind(ToastKind::Error);
        assert_eq!(explicit.kind, Some(ToastKind::Info));
        let implied = ToastOptions::new().merge_kind(ToastKind::Error);
        assert_eq!(implied.kind, Some(ToastKind::Error));
    }

    #[test]
    fn zero_duration_builder_is_unset() {
        assert_eq!(ToastOptions::new().duration_ms(0).duration, None);
        assert_eq!(
            ToastOptions::new().duration_ms(10).duration,
            Some(Duration::from_millis(10))
        );
    }
}
