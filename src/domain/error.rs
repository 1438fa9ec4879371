use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("charger {charger_id}: report start {start_time} is after end {end_time}")]
    InvalidInterval {
        charger_id: u32,
        start_time: u64,
        end_time: u64,
    },
}
