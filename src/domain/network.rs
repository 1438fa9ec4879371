//! Parsed network topology: station membership plus per-charger reports.
//!
//! The two mappings are built once (by the parser or programmatically) and
//! are read-only during computation. Station membership uses a `BTreeMap`
//! of `BTreeSet`s so the final report iterates stations ascending without
//! an extra sort; membership iteration order cannot affect results because
//! all reports are pooled and re-sorted by time before the sweep.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::{AvailabilityReport, ChargerId, StationId};

/// Owning container for the station→charger-set and charger→reports
/// mappings the uptime engine consumes.
#[derive(Debug, Clone, Default)]
pub struct ChargingNetwork {
    station_to_chargers: BTreeMap<StationId, BTreeSet<ChargerId>>,
    charger_reports: HashMap<ChargerId, Vec<AvailabilityReport>>,
}

impl ChargingNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a station with its member chargers. Duplicate charger IDs
    /// collapse; registering the same station ID again replaces the
    /// earlier membership set.
    pub fn register_station(
        &mut self,
        station_id: StationId,
        chargers: impl IntoIterator<Item = ChargerId>,
    ) {
        self.station_to_chargers
            .insert(station_id, chargers.into_iter().collect());
    }

    /// Appends a report to its charger's list, preserving insertion order.
    /// The charger does not have to belong to any registered station.
    pub fn add_report(&mut self, report: AvailabilityReport) {
        self.charger_reports
            .entry(report.charger_id())
            .or_default()
            .push(report);
    }

    /// Stations in ascending ID order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &BTreeSet<ChargerId>)> + '_ {
        self.station_to_chargers.iter().map(|(id, set)| (*id, set))
    }

    pub fn charger_reports(&self) -> &HashMap<ChargerId, Vec<AvailabilityReport>> {
        &self.charger_reports
    }

    /// Reports for one charger; empty slice when the charger never reported.
    pub fn reports_for(&self, charger_id: ChargerId) -> &[AvailabilityReport] {
        self.charger_reports
            .get(&charger_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn station_count(&self) -> usize {
        self.station_to_chargers.len()
    }

    pub fn charger_count(&self) -> usize {
        self.charger_reports.len()
    }

    pub fn report_count(&self) -> usize {
        self.charger_reports.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(charger_id: ChargerId, start: u64, end: u64, up: bool) -> AvailabilityReport {
        AvailabilityReport::new(charger_id, start, end, up).unwrap()
    }

    #[test]
    fn stations_iterate_ascending() {
        let mut network = ChargingNetwork::new();
        network.register_station(2, [1003]);
        network.register_station(0, [1001, 1002]);
        network.register_station(1, []);

        let ids: Vec<StationId> = network.stations().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn duplicate_station_replaces_membership() {
        let mut network = ChargingNetwork::new();
        network.register_station(0, [1, 2, 3]);
        network.register_station(0, [9]);

        let (_, chargers) = network.stations().next().unwrap();
        assert_eq!(chargers.iter().copied().collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn duplicate_charger_ids_collapse() {
        let mut network = ChargingNetwork::new();
        network.register_station(0, [5, 5, 5]);

        let (_, chargers) = network.stations().next().unwrap();
        assert_eq!(chargers.len(), 1);
    }

    #[test]
    fn reports_keep_insertion_order() {
        let mut network = ChargingNetwork::new();
        network.add_report(report(1, 50, 100, true));
        network.add_report(report(1, 0, 50, false));

        let reports = network.reports_for(1);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].start_time(), 50);
        assert_eq!(reports[1].start_time(), 0);
    }

    #[test]
    fn missing_charger_has_no_reports() {
        let network = ChargingNetwork::new();
        assert!(network.reports_for(42).is_empty());
        assert_eq!(network.report_count(), 0);
    }
}
