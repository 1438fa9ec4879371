//! External interfaces (report-file parsing and result rendering)

pub mod text;
