//! Uptime computation engine

pub mod charger_uptime;
pub mod station_uptime;

pub use charger_uptime::{charger_uptime, ChargerUptime};
pub use station_uptime::{compute_station_uptimes, station_uptime};
