//! Report-file parser.
//!
//! Two fixed sections, `[Stations]` then `[Charger Availability Reports]`.
//! Station lines are a station ID followed by its member charger IDs;
//! report lines are `<charger> <start> <end> <true|false>`. Blank lines
//! are skipped anywhere; LF and CRLF both work.
//!
//! The policy is fail closed, fail whole: the first malformed line aborts
//! the parse and no partial network is ever returned.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::domain::{AvailabilityReport, ChargingNetwork, DomainError};

const STATIONS_HEADER: &str = "[Stations]";
const REPORTS_HEADER: &str = "[Charger Availability Reports]";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read report file: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing section {expected}")]
    MissingSection { expected: &'static str },

    #[error("line {line}: unexpected section header {found:?}")]
    UnexpectedHeader { line: usize, found: String },

    #[error("line {line}: data before the first section header")]
    DataBeforeSection { line: usize },

    #[error("line {line}: invalid integer {token:?}")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    WrongFieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: expected \"true\" or \"false\", found {token:?}")]
    InvalidKeyword { line: usize, token: String },

    #[error("line {line}: {source}")]
    InvalidInterval {
        line: usize,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Stations,
    Reports,
}

/// Parses report text into a `ChargingNetwork`.
pub fn parse_report(input: &str) -> Result<ChargingNetwork, ParseError> {
    let mut network = ChargingNetwork::new();
    let mut section = Section::Preamble;

    for (index, raw_line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            section = match (line, section) {
                (STATIONS_HEADER, Section::Preamble) => Section::Stations,
                (REPORTS_HEADER, Section::Stations) => Section::Reports,
                _ => {
                    return Err(ParseError::UnexpectedHeader {
                        line: line_no,
                        found: line.to_string(),
                    })
                }
            };
            continue;
        }

        match section {
            Section::Preamble => return Err(ParseError::DataBeforeSection { line: line_no }),
            Section::Stations => parse_station_line(line, line_no, &mut network)?,
            Section::Reports => parse_report_line(line, line_no, &mut network)?,
        }
    }

    if section != Section::Reports {
        let expected = match section {
            Section::Preamble => STATIONS_HEADER,
            _ => REPORTS_HEADER,
        };
        return Err(ParseError::MissingSection { expected });
    }

    info!(
        stations = network.station_count(),
        chargers = network.charger_count(),
        reports = network.report_count(),
        "report file parsed"
    );
    Ok(network)
}

/// Reads and parses a report file from disk.
pub fn load_report(path: impl AsRef<Path>) -> Result<ChargingNetwork, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_report(&content)
}

fn parse_station_line(
    line: &str,
    line_no: usize,
    network: &mut ChargingNetwork,
) -> Result<(), ParseError> {
    let mut ids = line
        .split_whitespace()
        .map(|token| parse_int::<u32>(token, line_no));
    // A non-blank line always has at least one token.
    let station_id = ids.next().transpose()?.unwrap_or_default();
    let chargers = ids.collect::<Result<Vec<_>, _>>()?;
    network.register_station(station_id, chargers);
    Ok(())
}

fn parse_report_line(
    line: &str,
    line_no: usize,
    network: &mut ChargingNetwork,
) -> Result<(), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(ParseError::WrongFieldCount {
            line: line_no,
            expected: 4,
            found: tokens.len(),
        });
    }

    let charger_id = parse_int::<u32>(tokens[0], line_no)?;
    let start_time = parse_int::<u64>(tokens[1], line_no)?;
    let end_time = parse_int::<u64>(tokens[2], line_no)?;
    let is_up = match tokens[3].to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => {
            return Err(ParseError::InvalidKeyword {
                line: line_no,
                token: tokens[3].to_string(),
            })
        }
    };

    let report = AvailabilityReport::new(charger_id, start_time, end_time, is_up)
        .map_err(|source| ParseError::InvalidInterval { line: line_no, source })?;
    network.add_report(report);
    Ok(())
}

fn parse_int<T: std::str::FromStr>(token: &str, line_no: usize) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInteger {
        line: line_no,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "\
[Stations]
0 1001 1002
1 1003
2

[Charger Availability Reports]
1001 0 50000 true
1001 50000 100000 true
1002 50000 100000 true
1003 25000 75000 false
";

    #[test]
    fn parses_canonical_input() {
        let network = parse_report(CANONICAL).unwrap();
        assert_eq!(network.station_count(), 3);
        assert_eq!(network.charger_count(), 3);
        assert_eq!(network.report_count(), 4);
        assert_eq!(network.reports_for(1001).len(), 2);
        assert!(!network.reports_for(1003)[0].is_up());
    }

    #[test]
    fn accepts_crlf_and_extra_blank_lines() {
        let input = CANONICAL.replace('\n', "\r\n\r\n");
        let network = parse_report(&input).unwrap();
        assert_eq!(network.report_count(), 4);
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let input = "[Stations]\n0 1\n[Charger Availability Reports]\n1 0 10 TRUE\n";
        let network = parse_report(input).unwrap();
        assert!(network.reports_for(1)[0].is_up());
    }

    #[test]
    fn station_with_no_chargers_is_valid() {
        let input = "[Stations]\n5\n[Charger Availability Reports]\n";
        let network = parse_report(input).unwrap();
        assert_eq!(network.station_count(), 1);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            parse_report(""),
            Err(ParseError::MissingSection { expected }) if expected == STATIONS_HEADER
        ));
    }

    #[test]
    fn rejects_missing_reports_section() {
        let input = "[Stations]\n0 1\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::MissingSection { expected }) if expected == REPORTS_HEADER
        ));
    }

    #[test]
    fn rejects_sections_out_of_order() {
        let input = "[Charger Availability Reports]\n1 0 10 true\n[Stations]\n0 1\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::UnexpectedHeader { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_section() {
        let input = "[Stations]\n0 1\n[Stations]\n1 2\n[Charger Availability Reports]\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::UnexpectedHeader { line: 3, .. })
        ));
    }

    #[test]
    fn rejects_unknown_header() {
        let input = "[Depots]\n0 1\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::UnexpectedHeader { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_data_before_first_header() {
        let input = "0 1\n[Stations]\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::DataBeforeSection { line: 1 })
        ));
    }

    #[test]
    fn rejects_non_integer_station_id() {
        let input = "[Stations]\nzero 1\n[Charger Availability Reports]\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::InvalidInteger { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_negative_ids() {
        let input = "[Stations]\n0 -1\n[Charger Availability Reports]\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::InvalidInteger { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_wrong_report_field_count() {
        let input = "[Stations]\n0 1\n[Charger Availability Reports]\n1 0 10\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::WrongFieldCount {
                line: 4,
                expected: 4,
                found: 3,
            })
        ));
    }

    #[test]
    fn rejects_unknown_up_keyword() {
        let input = "[Stations]\n0 1\n[Charger Availability Reports]\n1 0 10 maybe\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::InvalidKeyword { line: 4, .. })
        ));
    }

    #[test]
    fn rejects_inverted_interval() {
        let input = "[Stations]\n0 1\n[Charger Availability Reports]\n1 10 5 true\n";
        assert!(matches!(
            parse_report(input),
            Err(ParseError::InvalidInterval { line: 4, .. })
        ));
    }

    #[test]
    fn load_report_surfaces_io_error() {
        let err = load_report("/nonexistent/uptime-report.txt").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
