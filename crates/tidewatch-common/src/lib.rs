//! # Tidewatch Common
//!
//! Common types, utilities, and shared abstractions for Tidewatch.
//!
//! This crate provides foundational types used across all Tidewatch
//! subsystems:
//! - ID types (`FishId`)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fish_id_generation() {
        let id1 = FishId::new();
        let id2 = FishId::new();
        assert_ne!(id1, id2);
        assert!(id1.is_valid());
    }

    #[test]
    fn test_null_fish_id() {
        assert!(!FishId::NULL.is_valid());
        assert_eq!(FishId::from_raw(7).raw(), 7);
    }

    #[test]
    fn test_fatal_errors() {
        assert!(TidewatchError::Invariant("broken".into()).is_fatal());
        assert!(!TidewatchError::InvalidWindow { start: 25, end: 2 }.is_fatal());
        assert!(!TidewatchError::UnknownWeather { key: "HAIL".into() }.is_fatal());
    }
}
