//! The model for a tracked fish.
//!
//! A fish's static fields (window, weather requirements, region) are
//! immutable after construction. The derived time ranges and catchable
//! ranges are engine-computed caches, replaced wholesale on every
//! recomputation.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use tidewatch_common::{FishId, TidewatchError, TidewatchResult};

use crate::clock::EorzeaInstant;
use crate::interval::{HourWindow, Interval};
use crate::weather::{Region, Weather};

/// The wire/admin form of a fish, as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishDefinition {
    /// Stable storage key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Hour of day at which the catch window opens.
    pub start_hour: u8,
    /// Hour of day at which the catch window closes.
    pub end_hour: u8,
    /// Weather required during the window; empty means any weather.
    #[serde(default)]
    pub weather_set: Vec<Weather>,
    /// Weather required in the window immediately before; empty means no
    /// constraint.
    #[serde(default)]
    pub previous_weather_set: Vec<Weather>,
    /// Region whose forecast gates this fish.
    pub region: Region,
}

/// A fish with an hour-of-day window and weather constraints, plus the
/// engine-computed time ranges describing when it can be caught.
#[derive(Debug, Clone)]
pub struct Fish {
    id: FishId,
    key: String,
    name: String,
    window: HourWindow,
    weather_set: AHashSet<Weather>,
    previous_weather_set: AHashSet<Weather>,
    region: Region,

    previous_time_range: Option<Interval>,
    next_time_range: Option<Interval>,
    catchable_ranges: Vec<Interval>,
}

impl Fish {
    /// Builds a fish from its wire definition, validating the window.
    pub fn from_definition(def: &FishDefinition) -> TidewatchResult<Self> {
        let window = HourWindow::new(def.start_hour, def.end_hour)?;
        Ok(Self {
            id: FishId::new(),
            key: def.key.clone(),
            name: def.name.clone(),
            window,
            weather_set: def.weather_set.iter().copied().collect(),
            previous_weather_set: def.previous_weather_set.iter().copied().collect(),
            region: def.region,
            previous_time_range: None,
            next_time_range: None,
            catchable_ranges: Vec::new(),
        })
    }

    /// Unique ID of this fish.
    #[must_use]
    pub const fn id(&self) -> FishId {
        self.id
    }

    /// Stable storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The recurring catch window.
    #[must_use]
    pub const fn window(&self) -> HourWindow {
        self.window
    }

    /// Weather required during the window; empty means any weather.
    #[must_use]
    pub const fn weather_set(&self) -> &AHashSet<Weather> {
        &self.weather_set
    }

    /// Weather required in the preceding window; empty means no
    /// constraint.
    #[must_use]
    pub const fn previous_weather_set(&self) -> &AHashSet<Weather> {
        &self.previous_weather_set
    }

    /// Region whose forecast gates this fish.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Whether any weather constraint applies (current or preceding).
    #[must_use]
    pub fn has_weather_constraint(&self) -> bool {
        !self.weather_set.is_empty() || !self.previous_weather_set.is_empty()
    }

    /// The most recent occurrence of the window, which may overlap the
    /// current time. Represents the window only; does not by itself mean
    /// the fish is catchable.
    #[must_use]
    pub const fn previous_time_range(&self) -> Option<Interval> {
        self.previous_time_range
    }

    /// The upcoming occurrence of the window, always in the future.
    #[must_use]
    pub const fn next_time_range(&self) -> Option<Interval> {
        self.next_time_range
    }

    /// The cached catchable ranges, possibly empty.
    #[must_use]
    pub fn catchable_ranges(&self) -> &[Interval] {
        &self.catchable_ranges
    }

    /// Sets the previous and next time ranges.
    ///
    /// The ranges are always engine-computed; a positive-length
    /// intersection or reversed ordering is a logic fault and surfaces as
    /// the fatal [`TidewatchError::Invariant`] kind.
    pub fn set_time_ranges(&mut self, previous: Interval, next: Interval) -> TidewatchResult<()> {
        if let Some(meet) = previous.intersection(next) {
            // Zero length means the previous range runs right into the next.
            if !meet.is_empty() {
                return Err(TidewatchError::Invariant(format!(
                    "time ranges overlap by {} ms",
                    meet.length_ms()
                )));
            }
        }
        if previous.start().millis() >= next.start().millis() {
            return Err(TidewatchError::Invariant(
                "previous time range must start before the next".into(),
            ));
        }
        self.previous_time_range = Some(previous);
        self.next_time_range = Some(next);
        Ok(())
    }

    /// Replaces the cached catchable ranges wholesale.
    pub fn set_catchable_ranges(&mut self, ranges: Vec<Interval>) {
        self.catchable_ranges = ranges;
    }

    /// Whether any catchable range overlaps the rolling next 24 Eorzea
    /// hours from `now`.
    #[must_use]
    pub fn is_catchable(&self, now: EorzeaInstant) -> bool {
        if self.catchable_ranges.is_empty() {
            return false;
        }
        let next_day = Interval::new(now, now.plus_days(1.0));
        self.catchable_ranges
            .iter()
            .any(|range| range.overlaps(next_day))
    }

    /// The wire form of this fish's static fields.
    #[must_use]
    pub fn definition(&self) -> FishDefinition {
        FishDefinition {
            key: self.key.clone(),
            name: self.name.clone(),
            start_hour: self.window.start_hour(),
            end_hour: self.window.end_hour(),
            weather_set: self.weather_set.iter().copied().collect(),
            previous_weather_set: self.previous_weather_set.iter().copied().collect(),
            region: self.region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MS_PER_EORZEA_HOUR;

    fn at(hours: f64) -> EorzeaInstant {
        EorzeaInstant::from_millis(hours * MS_PER_EORZEA_HOUR)
    }

    fn trout() -> Fish {
        Fish::from_definition(&FishDefinition {
            key: "warmwater-trout".into(),
            name: "Warmwater Trout".into(),
            start_hour: 9,
            end_hour: 14,
            weather_set: vec![Weather::Rain],
            previous_weather_set: vec![],
            region: Region::EastShroud,
        })
        .expect("valid definition")
    }

    #[test]
    fn test_definition_round_trip() {
        let fish = trout();
        let def = fish.definition();
        assert_eq!(def.key, "warmwater-trout");
        assert_eq!(def.start_hour, 9);
        assert_eq!(def.weather_set, vec![Weather::Rain]);

        let json = serde_json::to_string(&def).expect("serializes");
        assert!(json.contains("\"startHour\":9"));
        assert!(json.contains("\"EAST_SHROUD\""));
        let back: FishDefinition = serde_json::from_str(&json).expect("parses");
        assert_eq!(back.name, "Warmwater Trout");
    }

    #[test]
    fn test_invalid_window_rejected() {
        let mut def = trout().definition();
        def.start_hour = 24;
        assert!(matches!(
            Fish::from_definition(&def),
            Err(TidewatchError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_set_time_ranges_accepts_touching() {
        let mut fish = trout();
        let previous = Interval::new(at(0.0), at(24.0));
        let next = Interval::new(at(24.0), at(48.0));
        fish.set_time_ranges(previous, next).expect("touching is fine");
        assert_eq!(fish.previous_time_range(), Some(previous));
        assert_eq!(fish.next_time_range(), Some(next));
    }

    #[test]
    fn test_set_time_ranges_rejects_overlap() {
        let mut fish = trout();
        let previous = Interval::new(at(0.0), at(10.0));
        let next = Interval::new(at(8.0), at(18.0));
        let err = fish
            .set_time_ranges(previous, next)
            .expect_err("overlap is an invariant violation");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_set_time_ranges_rejects_misordering() {
        let mut fish = trout();
        let previous = Interval::new(at(30.0), at(32.0));
        let next = Interval::new(at(4.0), at(6.0));
        let err = fish
            .set_time_ranges(previous, next)
            .expect_err("previous must come first");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_is_catchable_rolling_day() {
        let mut fish = trout();
        // No ranges: not catchable.
        assert!(!fish.is_catchable(at(100.0)));

        // An interval entirely before now does not count.
        fish.set_catchable_ranges(vec![Interval::new(at(90.0), at(95.0))]);
        assert!(!fish.is_catchable(at(100.0)));

        // An interval starting 23 hours out is inside the rolling day.
        fish.set_catchable_ranges(vec![Interval::new(at(123.0), at(125.0))]);
        assert!(fish.is_catchable(at(100.0)));

        // One starting exactly 24 hours out only touches the lookahead.
        fish.set_catchable_ranges(vec![Interval::new(at(124.0), at(126.0))]);
        assert!(!fish.is_catchable(at(100.0)));
    }

    #[test]
    fn test_weather_constraint_flags() {
        let fish = trout();
        assert!(fish.has_weather_constraint());

        let mut def = fish.definition();
        def.weather_set.clear();
        let any_weather = Fish::from_definition(&def).expect("valid definition");
        assert!(!any_weather.has_weather_constraint());
    }
}
