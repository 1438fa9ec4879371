//! Availability report domain entity

use crate::domain::{ChargerId, DomainError, Ticks};

/// One time-stamped up/down report for a single charger.
///
/// Reports are immutable values. `start_time <= end_time` is enforced by
/// the constructor; the computation engine relies on it unconditionally.
/// Reports for one charger may overlap and need not be contiguous or
/// sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityReport {
    charger_id: ChargerId,
    start_time: Ticks,
    end_time: Ticks,
    is_up: bool,
}

impl AvailabilityReport {
    /// Creates a report, rejecting inverted intervals.
    pub fn new(
        charger_id: ChargerId,
        start_time: Ticks,
        end_time: Ticks,
        is_up: bool,
    ) -> Result<Self, DomainError> {
        if start_time > end_time {
            return Err(DomainError::InvalidInterval {
                charger_id,
                start_time,
                end_time,
            });
        }
        Ok(Self {
            charger_id,
            start_time,
            end_time,
            is_up,
        })
    }

    pub fn charger_id(&self) -> ChargerId {
        self.charger_id
    }

    pub fn start_time(&self) -> Ticks {
        self.start_time
    }

    pub fn end_time(&self) -> Ticks {
        self.end_time
    }

    pub fn is_up(&self) -> bool {
        self.is_up
    }
}
