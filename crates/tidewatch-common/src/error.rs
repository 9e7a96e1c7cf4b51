//! Error types for Tidewatch.

use thiserror::Error;

/// Top-level error type for Tidewatch operations.
///
/// [`TidewatchError::Invariant`] is the fatal kind: it signals a logic
/// fault inside the engine (broken time-range ordering), never bad input.
/// Every other variant is ordinary input validation.
#[derive(Debug, Error)]
pub enum TidewatchError {
    /// Internal invariant broken; indicates a bug in range computation.
    #[error("invariant violation: {0}")]
    Invariant(String),

    /// Hour window outside the valid range.
    #[error("invalid hour window: start {start}, end {end} (hours must be < 24)")]
    InvalidWindow {
        /// Start hour supplied
        start: u8,
        /// End hour supplied
        end: u8,
    },

    /// Weather key not part of the shared enumeration.
    #[error("unknown weather key: {key}")]
    UnknownWeather {
        /// The unrecognized key
        key: String,
    },

    /// Region key not part of the shared enumeration.
    #[error("unknown region key: {key}")]
    UnknownRegion {
        /// The unrecognized key
        key: String,
    },

    /// No fish registered under the given ID.
    #[error("unknown fish id: {0}")]
    UnknownFish(u64),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Tidewatch operations.
pub type TidewatchResult<T> = Result<T, TidewatchError>;

impl TidewatchError {
    /// Whether this error is a fatal internal fault rather than bad input.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}
