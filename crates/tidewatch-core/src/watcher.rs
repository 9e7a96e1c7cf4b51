//! Tick/report driver for tracked fish.
//!
//! Owns the fish registry, the forecast store and the event bus, and
//! recomputes derived state on the two kinds of events the system reacts
//! to: periodic ticks and weather report arrivals. All work is
//! synchronous; the tick cadence belongs to the caller.

use ahash::AHashMap;
use parking_lot::RwLock;
use tracing::{debug, info};

use tidewatch_common::{FishId, TidewatchError, TidewatchResult};

use crate::catch;
use crate::clock::{EarthInstant, EorzeaClock, EorzeaInstant};
use crate::events::{EventBus, WatchEvent};
use crate::fish::{Fish, FishDefinition};
use crate::forecast::{ForecastConfig, ForecastStore, WeatherReport};
use crate::weather::{Region, Weather};

/// Watches a set of fish against the clock and the weather.
#[derive(Debug)]
pub struct FishWatcher {
    clock: EorzeaClock,
    // Single writer (report arrival), many readers (ticks, queries).
    store: RwLock<ForecastStore>,
    fish: AHashMap<FishId, Fish>,
    events: EventBus,
}

impl Default for FishWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FishWatcher {
    /// Creates a watcher with the default clock and forecast cadence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(EorzeaClock::new(), ForecastConfig::default())
    }

    /// Creates a watcher from injected clock and cadence configuration.
    #[must_use]
    pub fn with_parts(clock: EorzeaClock, config: ForecastConfig) -> Self {
        Self {
            clock,
            store: RwLock::new(ForecastStore::with_config(config)),
            fish: AHashMap::new(),
            events: EventBus::default(),
        }
    }

    /// The clock converter in use.
    #[must_use]
    pub fn clock(&self) -> &EorzeaClock {
        &self.clock
    }

    /// The event bus carrying catchability and forecast notifications.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Starts tracking a fish. Derived state is computed on the next tick
    /// or report.
    pub fn register(&mut self, definition: &FishDefinition) -> TidewatchResult<FishId> {
        let fish = Fish::from_definition(definition)?;
        let id = fish.id();
        info!(key = %definition.key, "tracking fish");
        self.fish.insert(id, fish);
        Ok(id)
    }

    /// Stops tracking a fish.
    pub fn unregister(&mut self, id: FishId) -> TidewatchResult<()> {
        match self.fish.remove(&id) {
            Some(fish) => {
                info!(key = fish.key(), "dropped fish");
                Ok(())
            }
            None => Err(TidewatchError::UnknownFish(id.raw())),
        }
    }

    /// A tracked fish by ID.
    #[must_use]
    pub fn fish(&self, id: FishId) -> Option<&Fish> {
        self.fish.get(&id)
    }

    /// Iterates over all tracked fish.
    pub fn iter_fish(&self) -> impl Iterator<Item = &Fish> {
        self.fish.values()
    }

    /// Number of tracked fish.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fish.len()
    }

    /// Whether no fish are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    /// Upcoming weather for a region at an Earth instant.
    #[must_use]
    pub fn current_weather(&self, region: Region, now: EarthInstant) -> Vec<Weather> {
        let eorzea_now = self.clock.to_eorzea(now);
        self.store.read().current_weather(region, eorzea_now)
    }

    /// Ingests a new weather report and recomputes every fish against it.
    pub fn apply_report(
        &mut self,
        report: &WeatherReport,
        now: EarthInstant,
    ) -> TidewatchResult<()> {
        {
            let mut store = self.store.write();
            store.apply_report(report);
        }
        for region in report.regions() {
            self.events.publish(WatchEvent::WeatherUpdated { region });
        }
        self.tick(now)
    }

    /// Recomputes derived state for every tracked fish at an Earth
    /// instant, publishing `CatchableChanged` for each fish whose
    /// catchability flipped.
    pub fn tick(&mut self, now: EarthInstant) -> TidewatchResult<()> {
        let eorzea_now = self.clock.to_eorzea(now);
        let store = self.store.read();
        for fish in self.fish.values_mut() {
            recompute_fish(fish, &store, eorzea_now, &self.events)?;
        }
        Ok(())
    }
}

/// Recomputes one fish's derived state, replacing it wholesale.
fn recompute_fish(
    fish: &mut Fish,
    store: &ForecastStore,
    now: EorzeaInstant,
    events: &EventBus,
) -> TidewatchResult<()> {
    let was_catchable = fish.is_catchable(now);

    let (previous, next) = catch::compute_time_ranges(fish.window(), now)?;
    fish.set_time_ranges(previous, next)?;
    let ranges = catch::compute_catchable_ranges(fish, store, now)?;
    fish.set_catchable_ranges(ranges);

    let catchable = fish.is_catchable(now);
    if catchable != was_catchable {
        debug!(key = fish.key(), catchable, "catchability flipped");
        events.publish(WatchEvent::CatchableChanged {
            fish: fish.id(),
            catchable,
        });
    }
    Ok(())
}
