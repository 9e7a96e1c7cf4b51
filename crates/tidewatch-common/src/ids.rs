//! ID types for tracked entities.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for fish IDs.
static FISH_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a tracked fish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FishId(u64);

impl FishId {
    /// Creates a new unique fish ID.
    #[must_use]
    pub fn new() -> Self {
        Self(FISH_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Creates a fish ID from a raw value (for deserialization).
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Null/invalid fish ID.
    pub const NULL: Self = Self(0);

    /// Checks if this is a valid (non-null) fish ID.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for FishId {
    fn default() -> Self {
        Self::new()
    }
}
