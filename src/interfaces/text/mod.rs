//! Line-oriented report-file format: parsing in, rendering out.

pub mod parser;
pub mod render;

pub use parser::{load_report, parse_report, ParseError};
pub use render::{render_json, render_plain, StationUptimeEntry};
