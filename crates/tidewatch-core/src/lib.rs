//! # Tidewatch Core
//!
//! The time/weather reasoning engine for Tidewatch.
//!
//! This crate provides everything between the wall clock and the screen:
//! - Earth/Eorzea clock conversion at the fixed game ratio
//! - Interval and recurring hour-window value types
//! - Weather and region enumerations shared with the report producer
//! - The per-region weather forecast store
//! - The catchability engine (time ranges + catchable intervals)
//! - The fish model and the tick/report watcher driving it
//! - Event bus for catchability notifications
//!
//! Rendering, report transport and user preferences live in external
//! collaborators; they call into this crate and get plain value objects
//! back.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod catch;
pub mod clock;
pub mod events;
pub mod fish;
pub mod forecast;
pub mod interval;
pub mod watcher;
pub mod weather;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catch::*;
    pub use crate::clock::*;
    pub use crate::events::*;
    pub use crate::fish::*;
    pub use crate::forecast::*;
    pub use crate::interval::*;
    pub use crate::watcher::*;
    pub use crate::weather::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;

    #[test]
    fn test_end_to_end_catch_window() {
        // One fish, one report, one tick: the whole pipeline.
        let mut watcher = FishWatcher::new();
        let id = watcher
            .register(&FishDefinition {
                key: "duskfin".into(),
                name: "Duskfin".into(),
                start_hour: 17,
                end_hour: 19,
                weather_set: vec![Weather::Fog],
                previous_weather_set: vec![],
                region: Region::LowerLaNoscea,
            })
            .expect("valid definition");

        let clock = EorzeaClock::new();
        let now = clock.to_earth(EorzeaInstant::from_millis(10.0 * MS_PER_EORZEA_HOUR));

        let mut map = AHashMap::new();
        map.insert(
            Region::LowerLaNoscea,
            vec![Weather::Clear, Weather::Fog, Weather::Fog],
        );
        watcher
            .apply_report(&WeatherReport::new(9.0, map), now)
            .expect("applies");

        let fish = watcher.fish(id).expect("tracked");
        // Fog holds over [16, 24) and [24, 32): today's window qualifies.
        assert_eq!(fish.catchable_ranges().len(), 1);
        assert!(fish.is_catchable(clock.to_eorzea(now)));
    }
}
