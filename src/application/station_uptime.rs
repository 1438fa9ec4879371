//! Station uptime via a sweep line over report boundary events.
//!
//! A station is up whenever at least one of its chargers is up, so the
//! union of up intervals matters, not their sum. The sweep turns every
//! report into two boundary events, sorts them by time, and maintains a
//! counter of currently-open up intervals; duration accrues only while
//! the counter is positive.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::domain::{AvailabilityReport, ChargerId, ChargingNetwork, StationId, Ticks};

/// One interval boundary on the station timeline.
///
/// `delta` is +1 for an up-interval start, -1 for an up-interval end, and
/// 0 for down-interval boundaries (they stretch the observed window but
/// never move the counter). The derived `Ord` sorts by `(time, delta)`,
/// so within a tie ends come before starts; tie order cannot affect the
/// accumulated uptime because duration only accrues between distinct
/// timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TimelineEvent {
    time: Ticks,
    delta: i32,
}

/// Computes one station's uptime percentage in [0, 100], truncated.
///
/// Chargers with no reports contribute nothing; an empty report pool or a
/// zero-width observed window yields 0.
pub fn station_uptime(
    chargers: &BTreeSet<ChargerId>,
    charger_reports: &HashMap<ChargerId, Vec<AvailabilityReport>>,
) -> u8 {
    let pooled: Vec<&AvailabilityReport> = chargers
        .iter()
        .filter_map(|id| charger_reports.get(id))
        .flatten()
        .collect();

    if pooled.is_empty() {
        return 0;
    }

    let window_start = pooled.iter().map(|r| r.start_time()).min().unwrap_or(0);
    let window_end = pooled.iter().map(|r| r.end_time()).max().unwrap_or(0);
    let total = window_end - window_start;
    if total == 0 {
        return 0;
    }

    let mut timeline = Vec::with_capacity(pooled.len() * 2);
    for report in &pooled {
        let sign = if report.is_up() { 1 } else { 0 };
        timeline.push(TimelineEvent {
            time: report.start_time(),
            delta: sign,
        });
        timeline.push(TimelineEvent {
            time: report.end_time(),
            delta: -sign,
        });
    }
    timeline.sort();

    // The counter may dip below zero transiently inside a timestamp tie
    // (a zero-width up report sorts its -1 first). No duration passes
    // inside a tie, so the dip never reaches the accumulated uptime.
    let mut up_count: i32 = 0;
    let mut cursor = window_start;
    let mut uptime: Ticks = 0;

    for event in timeline {
        if up_count > 0 {
            uptime += event.time - cursor;
        }
        cursor = event.time;
        up_count += event.delta;
    }

    debug!(
        uptime,
        total,
        reports = pooled.len(),
        "station uptime computed"
    );
    (u128::from(uptime) * 100 / u128::from(total)) as u8
}

/// Runs the sweep for every registered station, keyed ascending.
pub fn compute_station_uptimes(network: &ChargingNetwork) -> BTreeMap<StationId, u8> {
    network
        .stations()
        .map(|(station_id, chargers)| {
            (station_id, station_uptime(chargers, network.charger_reports()))
        })
        .collect()
}
