#![forbid(unsafe_code)]

//! Toast identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a toast record.
///
/// Ids drawn from [`ToastId::next`] come from a process-wide counter, so two
/// toasts created within the same millisecond still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Wrap a raw id value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Allocate the next process-wide id.
    #[must_use]
    pub fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn next_ids_are_unique_and_increasing() {
        let ids: Vec<ToastId> = (0..1000).map(|_| ToastId::next()).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn display_is_prefixed() {
        assert_eq!(ToastId::new(42).to_string(), "toast-42");
    }
}
