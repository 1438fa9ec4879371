//! # Texnouz Station Uptime
//!
//! Availability analytics for EV charging stations: given per-charger
//! availability reports, computes how much of the observed window each
//! station had at least one charger up.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities and types
//! - **application**: Uptime computation (per-charger merge, per-station sweep)
//! - **interfaces**: Report-file parsing and result rendering

pub mod application;
pub mod domain;
pub mod interfaces;

// Re-export the computation entry points
pub use application::{charger_uptime, compute_station_uptimes, station_uptime, ChargerUptime};

// Re-export core domain types
pub use domain::{AvailabilityReport, ChargerId, ChargingNetwork, DomainError, StationId, Ticks};

// Re-export the text interface
pub use interfaces::text::{
    load_report, parse_report, render_json, render_plain, ParseError, StationUptimeEntry,
};
