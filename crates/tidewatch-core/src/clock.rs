//! Earth/Eorzea clock conversion.
//!
//! Eorzea time runs at a fixed multiple of Earth time: one Eorzea day
//! passes every 70 Earth minutes. Conversion is a stateless affine map
//! between the two clocks; the ratio and epoch pair are configuration
//! constants, never computed.

use serde::{Deserialize, Serialize};

/// How much faster the Eorzea clock runs than the Earth clock.
///
/// 24 Eorzea hours elapse in 70 Earth minutes: 24 * 60 / 70 = 3600 / 175.
pub const EORZEA_TIME_RATIO: f64 = 3600.0 / 175.0;

/// Milliseconds in one Eorzea hour (measured on the Eorzea clock).
pub const MS_PER_EORZEA_HOUR: f64 = 60.0 * 60.0 * 1000.0;

/// Milliseconds in one Eorzea day (measured on the Eorzea clock).
pub const MS_PER_EORZEA_DAY: f64 = 24.0 * MS_PER_EORZEA_HOUR;

/// An instant on the Earth clock, in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct EarthInstant(f64);

impl EarthInstant {
    /// Creates an instant from raw milliseconds.
    #[must_use]
    pub const fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub const fn millis(self) -> f64 {
        self.0
    }

    /// Returns this instant shifted by the given number of milliseconds.
    #[must_use]
    pub fn plus_millis(self, ms: f64) -> Self {
        Self(self.0 + ms)
    }
}

/// An instant on the Eorzea clock, in milliseconds since the Eorzea epoch.
///
/// Distinct from [`EarthInstant`] so the two clocks can never be mixed
/// without going through an [`EorzeaClock`] conversion.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct EorzeaInstant(f64);

impl EorzeaInstant {
    /// Creates an instant from raw milliseconds.
    #[must_use]
    pub const fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub const fn millis(self) -> f64 {
        self.0
    }

    /// Returns the Eorzea hour of day in `[0, 24)`, fractional.
    ///
    /// Uses a Euclidean remainder so instants before the epoch still map
    /// into `[0, 24)`.
    #[must_use]
    pub fn hour_of_day(self) -> f64 {
        self.0.rem_euclid(MS_PER_EORZEA_DAY) / MS_PER_EORZEA_HOUR
    }

    /// Returns the instant at the most recent Eorzea midnight.
    #[must_use]
    pub fn start_of_day(self) -> Self {
        Self(self.0 - self.0.rem_euclid(MS_PER_EORZEA_DAY))
    }

    /// Returns this instant shifted by the given number of milliseconds.
    #[must_use]
    pub fn plus_millis(self, ms: f64) -> Self {
        Self(self.0 + ms)
    }

    /// Returns this instant shifted by the given number of Eorzea hours.
    #[must_use]
    pub fn plus_hours(self, hours: f64) -> Self {
        Self(self.0 + hours * MS_PER_EORZEA_HOUR)
    }

    /// Returns this instant shifted by the given number of Eorzea days.
    #[must_use]
    pub fn plus_days(self, days: f64) -> Self {
        Self(self.0 + days * MS_PER_EORZEA_DAY)
    }
}

/// Stateless converter between the Earth and Eorzea clocks.
///
/// `to_eorzea` and `to_earth` are exact inverses up to floating-point
/// rounding and are total over all finite instants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EorzeaClock {
    /// Earth instant paired with `eorzea_epoch`.
    earth_epoch: f64,
    /// Eorzea instant paired with `earth_epoch`.
    eorzea_epoch: f64,
    /// Eorzea milliseconds per Earth millisecond.
    ratio: f64,
}

impl Default for EorzeaClock {
    fn default() -> Self {
        Self {
            earth_epoch: 0.0,
            eorzea_epoch: 0.0,
            ratio: EORZEA_TIME_RATIO,
        }
    }
}

impl EorzeaClock {
    /// Creates a clock with the default epoch pair and ratio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock anchored at a custom epoch pair.
    #[must_use]
    pub fn with_epochs(earth_epoch: EarthInstant, eorzea_epoch: EorzeaInstant) -> Self {
        Self {
            earth_epoch: earth_epoch.millis(),
            eorzea_epoch: eorzea_epoch.millis(),
            ratio: EORZEA_TIME_RATIO,
        }
    }

    /// Converts an Earth instant to the corresponding Eorzea instant.
    #[must_use]
    pub fn to_eorzea(&self, earth: EarthInstant) -> EorzeaInstant {
        EorzeaInstant(self.eorzea_epoch + (earth.millis() - self.earth_epoch) * self.ratio)
    }

    /// Converts an Eorzea instant back to the corresponding Earth instant.
    #[must_use]
    pub fn to_earth(&self, eorzea: EorzeaInstant) -> EarthInstant {
        EarthInstant(self.earth_epoch + (eorzea.millis() - self.eorzea_epoch) / self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_epoch_maps_to_epoch() {
        let clock = EorzeaClock::new();
        let eorzea = clock.to_eorzea(EarthInstant::from_millis(0.0));
        assert!(eorzea.millis().abs() < f64::EPSILON);
    }

    #[test]
    fn test_seventy_earth_minutes_is_one_eorzea_day() {
        let clock = EorzeaClock::new();
        let seventy_minutes = EarthInstant::from_millis(70.0 * 60.0 * 1000.0);
        let eorzea = clock.to_eorzea(seventy_minutes);
        assert!((eorzea.millis() - MS_PER_EORZEA_DAY).abs() < 1.0);
    }

    #[test]
    fn test_hour_of_day() {
        let noon = EorzeaInstant::from_millis(12.0 * MS_PER_EORZEA_HOUR);
        assert!((noon.hour_of_day() - 12.0).abs() < 1e-9);

        let next_day = noon.plus_days(1.0);
        assert!((next_day.hour_of_day() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_hour_of_day_before_epoch() {
        // 2 hours before the epoch is 22:00 of the previous day.
        let before = EorzeaInstant::from_millis(-2.0 * MS_PER_EORZEA_HOUR);
        assert!((before.hour_of_day() - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_start_of_day() {
        let instant = EorzeaInstant::from_millis(3.0 * MS_PER_EORZEA_DAY + 5.5 * MS_PER_EORZEA_HOUR);
        let midnight = instant.start_of_day();
        assert!((midnight.millis() - 3.0 * MS_PER_EORZEA_DAY).abs() < 1e-6);
        assert!(midnight.hour_of_day().abs() < 1e-9);
    }

    #[test]
    fn test_custom_epochs() {
        let clock = EorzeaClock::with_epochs(
            EarthInstant::from_millis(1000.0),
            EorzeaInstant::from_millis(500.0),
        );
        let eorzea = clock.to_eorzea(EarthInstant::from_millis(1000.0));
        assert!((eorzea.millis() - 500.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_round_trip_within_one_ms(earth_ms in -1.0e12_f64..1.0e12) {
            let clock = EorzeaClock::new();
            let back = clock.to_earth(clock.to_eorzea(EarthInstant::from_millis(earth_ms)));
            prop_assert!((back.millis() - earth_ms).abs() < 1.0);
        }

        #[test]
        fn prop_to_eorzea_strictly_increasing(
            earth_ms in -1.0e12_f64..1.0e12,
            delta_ms in 1.0_f64..1.0e9,
        ) {
            let clock = EorzeaClock::new();
            let a = clock.to_eorzea(EarthInstant::from_millis(earth_ms));
            let b = clock.to_eorzea(EarthInstant::from_millis(earth_ms + delta_ms));
            prop_assert!(b.millis() > a.millis());
        }
    }
}
