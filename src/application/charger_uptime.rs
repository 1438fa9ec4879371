//! Single-charger uptime via sequential interval merge.
//!
//! The simpler of the two algorithms: sort the charger's reports by start
//! time and walk them with a running cursor. For a single-charger station
//! it must agree with the sweep-line aggregator, which makes it the
//! natural validation oracle for the sweep.

use tracing::debug;

use crate::domain::{AvailabilityReport, Ticks};

/// Uptime and observed-window duration for one charger, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargerUptime {
    /// Ticks during which the charger was up.
    pub uptime: Ticks,
    /// Width of the observed window, max(end) - min(start).
    pub total: Ticks,
}

impl ChargerUptime {
    /// Uptime as a truncated percentage of the observed window.
    /// Zero-width windows report 0.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (u128::from(self.uptime) * 100 / u128::from(self.total)) as u8
    }
}

/// Computes a charger's (uptime, total) pair from its reports.
///
/// Uncovered gaps between reports count as downtime. Overlapping up
/// reports are not double-counted: each up report contributes only the
/// part that extends past the cursor, clamped at zero for reports wholly
/// inside an already-covered span.
pub fn charger_uptime(reports: &[AvailabilityReport]) -> ChargerUptime {
    if reports.is_empty() {
        return ChargerUptime { uptime: 0, total: 0 };
    }

    let mut sorted: Vec<&AvailabilityReport> = reports.iter().collect();
    sorted.sort_by_key(|r| r.start_time());

    let window_start = sorted[0].start_time();
    let window_end = sorted
        .iter()
        .map(|r| r.end_time())
        .max()
        .unwrap_or(window_start);
    let total = window_end - window_start;

    let mut uptime: Ticks = 0;
    let mut cursor = window_start;

    for report in sorted {
        if report.start_time() > cursor {
            // Gap before this report: downtime, just advance.
            cursor = report.start_time();
        }
        if report.is_up() {
            uptime += report.end_time().saturating_sub(cursor);
        }
        cursor = cursor.max(report.end_time());
    }

    debug!(uptime, total, reports = reports.len(), "charger uptime computed");
    ChargerUptime { uptime, total }
}
