//! Catchability computation.
//!
//! Pure functions over `(fish statics, forecast state, now)`. Occurrence
//! enumeration resolves day wraparound by shifting whole days of absolute
//! instants; weather matching is conservative: an occurrence is reported
//! catchable only when the forecast covers its full span with matching
//! weather, never truncated to a sub-window.

use tidewatch_common::{TidewatchError, TidewatchResult};

use crate::clock::EorzeaInstant;
use crate::fish::Fish;
use crate::forecast::{ForecastStore, WeatherSpan};
use crate::interval::{HourWindow, Interval};

/// How far ahead occurrences are enumerated, in Eorzea days. Two days
/// comfortably covers the forecast horizon of a fresh report.
pub const LOOKAHEAD_DAYS: f64 = 2.0;

/// Coverage slack when summing forecast spans over an occurrence, in
/// Eorzea milliseconds.
const COVERAGE_TOLERANCE_MS: f64 = 1.0;

/// Computes the previous and next occurrences of a window around `now`.
///
/// The previous occurrence is the one with the most recent window-start
/// at or before `now` (it may still be in progress); the next occurrence
/// starts strictly after `now`. Both span the full window length.
pub fn compute_time_ranges(
    window: HourWindow,
    now: EorzeaInstant,
) -> TidewatchResult<(Interval, Interval)> {
    let mut previous = window.occurrence_on(now.start_of_day());
    while previous.start().millis() > now.millis() {
        previous = previous.shifted_days(-1.0);
    }
    while previous.start().plus_days(1.0).millis() <= now.millis() {
        previous = previous.shifted_days(1.0);
    }
    let next = previous.shifted_days(1.0);

    // The windows recur daily with length <= 24h, so consecutive
    // occurrences can touch but never overlap. Anything else is a bug in
    // the enumeration above.
    if let Some(meet) = previous.intersection(next) {
        if !meet.is_empty() {
            return Err(TidewatchError::Invariant(format!(
                "window occurrences overlap by {} ms",
                meet.length_ms()
            )));
        }
    }
    if previous.start().millis() >= next.start().millis() {
        return Err(TidewatchError::Invariant(
            "previous occurrence must start before the next".into(),
        ));
    }
    Ok((previous, next))
}

/// Computes the concrete intervals in which the fish is catchable,
/// intersected against forecast data.
///
/// Occurrences already fully elapsed are dropped. A weather-constrained
/// fish in a region with no forecast data gets zero ranges (fail closed);
/// a fish with no weather requirement qualifies for every occurrence
/// regardless of forecast content.
pub fn compute_catchable_ranges(
    fish: &Fish,
    store: &ForecastStore,
    now: EorzeaInstant,
) -> TidewatchResult<Vec<Interval>> {
    let (previous, _) = compute_time_ranges(fish.window(), now)?;
    let horizon = now.plus_days(LOOKAHEAD_DAYS);

    let unconstrained = fish.weather_set().is_empty() && fish.previous_weather_set().is_empty();
    let spans = if unconstrained {
        Vec::new()
    } else {
        store.weather_spans(fish.region(), now)
    };
    if !unconstrained && spans.is_empty() {
        return Ok(Vec::new());
    }

    let mut ranges = Vec::new();
    let mut occurrence = previous;
    while occurrence.start().millis() < horizon.millis() {
        let still_relevant = occurrence.end().millis() > now.millis();
        if still_relevant && (unconstrained || occurrence_qualifies(fish, &spans, occurrence)) {
            ranges.push(occurrence);
        }
        occurrence = occurrence.shifted_days(1.0);
    }
    Ok(ranges)
}

/// Whether any of the ranges overlaps the rolling next 24 Eorzea hours.
#[must_use]
pub fn is_catchable(ranges: &[Interval], now: EorzeaInstant) -> bool {
    let next_day = Interval::new(now, now.plus_days(1.0));
    ranges.iter().any(|range| range.overlaps(next_day))
}

/// Checks one occurrence against the forecast spans.
///
/// Every span overlapping the occurrence must carry matching weather, the
/// spans must cover the occurrence end to end, and when a preceding
/// constraint applies the block before the one containing the occurrence
/// start must be known and matching. Unknown weather anywhere excludes
/// the occurrence.
fn occurrence_qualifies(fish: &Fish, spans: &[WeatherSpan], occurrence: Interval) -> bool {
    let required = fish.weather_set();
    if !required.is_empty() {
        let mut covered_ms = 0.0;
        for span in spans {
            if span.interval.overlaps(occurrence) {
                if !required.contains(&span.weather) {
                    return false;
                }
                covered_ms += span
                    .interval
                    .intersection(occurrence)
                    .map_or(0.0, Interval::length_ms);
            }
        }
        if covered_ms + COVERAGE_TOLERANCE_MS < occurrence.length_ms() {
            return false;
        }
    }

    let preceding = fish.previous_weather_set();
    if !preceding.is_empty() {
        let Some(opening) = spans
            .iter()
            .find(|span| span.interval.contains(occurrence.start()))
        else {
            return false;
        };
        let just_before = opening.interval.start().plus_millis(-1.0);
        match spans.iter().find(|span| span.interval.contains(just_before)) {
            Some(span) if preceding.contains(&span.weather) => {}
            _ => return false,
        }
    }

    true
}
