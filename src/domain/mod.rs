//! Core business entities and types

pub mod error;
pub mod network;
pub mod report;

pub use error::DomainError;
pub use network::ChargingNetwork;
pub use report::AvailabilityReport;

/// Identifier of a charging station.
pub type StationId = u32;
/// Identifier of an individual charger.
pub type ChargerId = u32;
/// Opaque time unit; the engine assigns it no calendar meaning.
pub type Ticks = u64;
