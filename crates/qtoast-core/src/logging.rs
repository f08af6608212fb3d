#![forbid(unsafe_code)]

//! Logging support.
//!
//! Re-exports the `tracing` event macros when the `tracing` feature is
//! enabled. When it is disabled, no-op macros with the same names are
//! exported at the crate root so call sites compile unchanged.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op error macro when tracing is disabled.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    /// No-op info macro when tracing is disabled.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_structured_fields() {
        let key = "QTOAST_DEFAULT_DURATION_MS";
        crate::warn!(key, value = "abc", "ignoring override");
        crate::debug!(count = 3, "loaded");
        crate::trace!("tick");
        crate::info!(path = %"/tmp/qtoast.json", "config");
        crate::error!("unreachable in practice");
        let _ = key;
    }
}
