//! Interval and recurring-window value types.
//!
//! An [`Interval`] is a half-open range `[start, end)` of Eorzea instants.
//! Wraparound past midnight is never represented inside an interval; a
//! producer facing a window that crosses midnight anchors it to absolute
//! instants instead.

use serde::{Deserialize, Serialize};

use tidewatch_common::{TidewatchError, TidewatchResult};

use crate::clock::{EorzeaInstant, MS_PER_EORZEA_HOUR};

/// A half-open range `[start, end)` of Eorzea instants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    start: EorzeaInstant,
    end: EorzeaInstant,
}

impl Interval {
    /// Creates an interval.
    ///
    /// # Panics
    /// Panics if `start > end`. Both ends are always engine-computed, so
    /// a reversed interval is a logic fault, not bad input.
    #[must_use]
    pub fn new(start: EorzeaInstant, end: EorzeaInstant) -> Self {
        assert!(
            start.millis() <= end.millis(),
            "interval start must not exceed end"
        );
        Self { start, end }
    }

    /// Start of the interval (inclusive).
    #[must_use]
    pub const fn start(self) -> EorzeaInstant {
        self.start
    }

    /// End of the interval (exclusive).
    #[must_use]
    pub const fn end(self) -> EorzeaInstant {
        self.end
    }

    /// Length of the interval in Eorzea milliseconds.
    #[must_use]
    pub fn length_ms(self) -> f64 {
        self.end.millis() - self.start.millis()
    }

    /// Whether the interval has zero length.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.length_ms() == 0.0
    }

    /// Whether the instant falls inside `[start, end)`.
    #[must_use]
    pub fn contains(self, instant: EorzeaInstant) -> bool {
        instant.millis() >= self.start.millis() && instant.millis() < self.end.millis()
    }

    /// Whether the two intervals share a positive-length span.
    ///
    /// Touching intervals (one's end equals the other's start) do not
    /// overlap.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.start.millis() < other.end.millis() && other.start.millis() < self.end.millis()
    }

    /// Whether one interval ends exactly where the other begins.
    #[must_use]
    pub fn touches(self, other: Self) -> bool {
        self.end.millis() == other.start.millis() || other.end.millis() == self.start.millis()
    }

    /// Intersection of the two intervals.
    ///
    /// Returns `Some` with zero length when the intervals touch, `None`
    /// when they are disjoint.
    #[must_use]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let lo = self.start.millis().max(other.start.millis());
        let hi = self.end.millis().min(other.end.millis());
        if lo <= hi {
            Some(Self::new(
                EorzeaInstant::from_millis(lo),
                EorzeaInstant::from_millis(hi),
            ))
        } else {
            None
        }
    }

    /// The interval shifted by a whole number of Eorzea days.
    #[must_use]
    pub fn shifted_days(self, days: f64) -> Self {
        Self {
            start: self.start.plus_days(days),
            end: self.end.plus_days(days),
        }
    }
}

/// A recurring daily window defined by start and end hours in `[0, 24)`.
///
/// When `end_hour < start_hour` the window spans midnight. Equal hours
/// mean an all-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HourWindow {
    start_hour: u8,
    end_hour: u8,
}

impl HourWindow {
    /// Creates a window, validating both hours are below 24.
    pub fn new(start_hour: u8, end_hour: u8) -> TidewatchResult<Self> {
        if start_hour >= 24 || end_hour >= 24 {
            return Err(TidewatchError::InvalidWindow {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// Hour of day at which the window opens.
    #[must_use]
    pub const fn start_hour(self) -> u8 {
        self.start_hour
    }

    /// Hour of day at which the window closes.
    #[must_use]
    pub const fn end_hour(self) -> u8 {
        self.end_hour
    }

    /// Window length in hours, always in `(0, 24]`.
    #[must_use]
    pub fn length_hours(self) -> u32 {
        let diff = (i32::from(self.end_hour) - i32::from(self.start_hour)).rem_euclid(24);
        if diff == 0 {
            24
        } else {
            diff as u32
        }
    }

    /// Whether the window crosses midnight.
    #[must_use]
    pub const fn spans_midnight(self) -> bool {
        self.end_hour < self.start_hour
    }

    /// The concrete occurrence of this window on the day containing
    /// `day_start` (an Eorzea midnight instant).
    #[must_use]
    pub fn occurrence_on(self, day_start: EorzeaInstant) -> Interval {
        let start = day_start.plus_hours(f64::from(self.start_hour));
        let end = start.plus_hours(f64::from(self.length_hours()));
        Interval::new(start, end)
    }
}

/// Convenience: milliseconds in the given number of Eorzea hours.
#[must_use]
pub fn hours_ms(hours: f64) -> f64 {
    hours * MS_PER_EORZEA_HOUR
}
