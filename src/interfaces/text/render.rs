//! Result rendering

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::domain::StationId;

/// One station's computed uptime, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationUptimeEntry {
    pub station_id: StationId,
    /// Truncated percentage in [0, 100].
    pub uptime_pct: u8,
}

/// Renders `<station_id> <percentage>` lines, ascending by station ID.
pub fn render_plain(results: &BTreeMap<StationId, u8>) -> String {
    let mut out = String::new();
    for (station_id, pct) in results {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{station_id} {pct}");
    }
    out
}

/// Renders the result map as a pretty-printed JSON array, same order.
pub fn render_json(results: &BTreeMap<StationId, u8>) -> serde_json::Result<String> {
    let entries: Vec<StationUptimeEntry> = results
        .iter()
        .map(|(&station_id, &uptime_pct)| StationUptimeEntry {
            station_id,
            uptime_pct,
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
