//! Per-region weather forecast store.
//!
//! Regions report their weather as a short ordered sequence of values, one
//! per fixed-duration forecast block, stamped with the Eorzea hour at
//! which the report was issued. The store keeps the most recent valid
//! report per region and answers "what is the weather now" and "when does
//! it next change" queries, tolerating reports up to two blocks stale.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use tidewatch_common::{TidewatchError, TidewatchResult};

use crate::clock::EorzeaInstant;
use crate::interval::Interval;
use crate::weather::{Region, Weather};

/// Forecast cadence configuration.
///
/// The production cycle changes weather every 8 Eorzea hours (3 blocks per
/// day); held as configuration rather than literals in case the cadence is
/// ever re-tuned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Length of one forecast block in Eorzea hours.
    pub block_hours: f64,
    /// Number of forecast blocks per Eorzea day.
    pub slots_per_day: u32,
    /// Number of upcoming slots returned by weather queries.
    pub horizon_slots: usize,
    /// Maximum slots retained per region from a single report.
    pub max_slots: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            block_hours: 8.0,
            slots_per_day: 3,
            horizon_slots: 4,
            max_slots: 8,
        }
    }
}

impl ForecastConfig {
    /// The next hour at which weather changes, strictly after
    /// `current_hour`.
    ///
    /// For the default cadence: `[0,8)` maps to 8, `[8,16)` to 16 and
    /// `[16,24)` to 24 (midnight of the next day).
    #[must_use]
    pub fn next_change_hour(&self, current_hour: f64) -> f64 {
        ((current_hour / self.block_hours).floor() + 1.0) * self.block_hours
    }

    /// How many blocks stale a report is, relative to the block that ends
    /// at `next_change_hour`.
    ///
    /// The report hour is interpreted same-day: a report from the current
    /// block is offset 0, from the previous same-day block offset 1, and
    /// anything else (including a report from before midnight) is treated
    /// as two blocks stale.
    #[must_use]
    pub fn report_offset(&self, report_hour: f64, next_change_hour: f64) -> usize {
        let block = self.block_hours;
        if report_hour >= next_change_hour - block && report_hour < next_change_hour {
            0
        } else if report_hour >= next_change_hour - 2.0 * block
            && report_hour < next_change_hour - block
        {
            1
        } else {
            2
        }
    }
}

/// A weather report: one slot sequence per region plus the Eorzea hour of
/// day at which the report was issued.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    eorzea_hour: f64,
    weather_map: AHashMap<Region, Vec<Weather>>,
}

impl WeatherReport {
    /// Creates a report from already-validated data.
    #[must_use]
    pub fn new(eorzea_hour: f64, weather_map: AHashMap<Region, Vec<Weather>>) -> Self {
        Self {
            eorzea_hour,
            weather_map,
        }
    }

    /// Parses the server payload:
    /// `{"eorzeaHour": h, "weatherMap": {"REGION": ["WEATHER", ...]}}`.
    ///
    /// Unknown region keys are skipped. A region whose slot list contains
    /// an unknown weather key is rejected wholesale, so the store retains
    /// its previous valid data for that region.
    pub fn from_json(raw: &str) -> TidewatchResult<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| TidewatchError::Serialization(e.to_string()))?;

        let eorzea_hour = value
            .get("eorzeaHour")
            .and_then(Value::as_f64)
            .ok_or_else(|| TidewatchError::Serialization("report missing eorzeaHour".into()))?;

        let map = value
            .get("weatherMap")
            .and_then(Value::as_object)
            .ok_or_else(|| TidewatchError::Serialization("report missing weatherMap".into()))?;

        let mut weather_map = AHashMap::new();
        for (key, slots) in map {
            let Some(region) = Region::from_key(key) else {
                warn!(region = %key, "skipping unknown region in weather report");
                continue;
            };
            let Some(list) = slots.as_array() else {
                warn!(region = %key, "skipping malformed slot list in weather report");
                continue;
            };

            let mut parsed = Vec::with_capacity(list.len());
            let mut valid = true;
            for slot in list {
                match slot.as_str().and_then(Weather::from_key) {
                    Some(weather) => parsed.push(weather),
                    None => {
                        warn!(region = %key, slot = %slot, "rejecting region with unknown weather slot");
                        valid = false;
                        break;
                    }
                }
            }
            if valid {
                weather_map.insert(region, parsed);
            }
        }

        Ok(Self {
            eorzea_hour,
            weather_map,
        })
    }

    /// Eorzea hour of day at which the report was issued.
    #[must_use]
    pub fn eorzea_hour(&self) -> f64 {
        self.eorzea_hour
    }

    /// Regions carried by this report.
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.weather_map.keys().copied()
    }

    /// Slot sequence for one region, if present.
    #[must_use]
    pub fn slots(&self, region: Region) -> Option<&[Weather]> {
        self.weather_map.get(&region).map(Vec::as_slice)
    }
}

/// Stored forecast state for one region. Replaced wholesale on each new
/// report, never partially updated.
#[derive(Debug, Clone)]
struct RegionForecast {
    /// Eorzea hour of day at which the report was issued.
    report_hour: f64,
    /// Weather values, soonest block first.
    slots: Vec<Weather>,
}

/// One forecast block mapped to its absolute Eorzea interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSpan {
    /// The absolute interval the block covers.
    pub interval: Interval,
    /// Weather during the block.
    pub weather: Weather,
}

/// Holds the most recent weather report per region.
#[derive(Debug, Default)]
pub struct ForecastStore {
    config: ForecastConfig,
    regions: AHashMap<Region, RegionForecast>,
}

impl ForecastStore {
    /// Creates an empty store with the default cadence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with a custom cadence.
    #[must_use]
    pub fn with_config(config: ForecastConfig) -> Self {
        Self {
            config,
            regions: AHashMap::new(),
        }
    }

    /// The cadence configuration.
    #[must_use]
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Whether any report has been stored for the region.
    #[must_use]
    pub fn has_data(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    /// Replaces stored state for every region carried by the report.
    ///
    /// Regions absent from the report keep their previous data.
    pub fn apply_report(&mut self, report: &WeatherReport) {
        for region in report.regions() {
            let Some(slots) = report.slots(region) else {
                continue;
            };
            let mut slots = slots.to_vec();
            slots.truncate(self.config.max_slots);
            self.regions.insert(
                region,
                RegionForecast {
                    report_hour: report.eorzea_hour(),
                    slots,
                },
            );
        }
        debug!(
            regions = report.weather_map.len(),
            report_hour = report.eorzea_hour(),
            "applied weather report"
        );
    }

    /// The next hour at which weather changes, strictly after
    /// `current_hour`.
    #[must_use]
    pub fn next_change_hour(&self, current_hour: f64) -> f64 {
        self.config.next_change_hour(current_hour)
    }

    /// Upcoming weather for a region, current block first.
    ///
    /// Returns up to `horizon_slots` values, compensating for report
    /// staleness; empty when the region has no usable data (not an
    /// error).
    #[must_use]
    pub fn current_weather(&self, region: Region, now: EorzeaInstant) -> Vec<Weather> {
        let Some(forecast) = self.regions.get(&region) else {
            return Vec::new();
        };
        let next_change = self.config.next_change_hour(now.hour_of_day());
        let offset = self.config.report_offset(forecast.report_hour, next_change);
        forecast
            .slots
            .iter()
            .skip(offset)
            .take(self.config.horizon_slots)
            .copied()
            .collect()
    }

    /// Every stored forecast block for a region, mapped to absolute
    /// Eorzea intervals.
    ///
    /// The slot compensating for staleness is anchored to the block
    /// containing `now`; earlier slots therefore yield spans in the past,
    /// which callers use for preceding-weather checks.
    #[must_use]
    pub fn weather_spans(&self, region: Region, now: EorzeaInstant) -> Vec<WeatherSpan> {
        let Some(forecast) = self.regions.get(&region) else {
            return Vec::new();
        };
        let block = self.config.block_hours;
        let next_change = self.config.next_change_hour(now.hour_of_day());
        let offset = self.config.report_offset(forecast.report_hour, next_change);

        let current_block_start = now.start_of_day().plus_hours(next_change - block);
        forecast
            .slots
            .iter()
            .enumerate()
            .map(|(slot, &weather)| {
                let start = current_block_start.plus_hours((slot as f64 - offset as f64) * block);
                WeatherSpan {
                    interval: Interval::new(start, start.plus_hours(block)),
                    weather,
                }
            })
            .collect()
    }
}
