//! Output formatting module.
//!
//! Renders address reports and the error code table as plain text, JSON, or
//! CSV.

mod csv_format;
mod json_format;
mod plain;

pub use plain::print_error;

use crate::error::{CliResult, ErrorCode};
use crate::types::{Ip6Address, Locator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format, one row per lane
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// How the low 16 bits of an address classify as a Thread locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocatorKind {
    Router,
    Child,
    Anycast,
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Router => write!(f, "RLOC16 (router)"),
            Self::Child => write!(f, "RLOC16 (child)"),
            Self::Anycast => write!(f, "ALOC16"),
        }
    }
}

impl From<Locator> for LocatorKind {
    fn from(locator: Locator) -> Self {
        if locator.is_aloc() {
            Self::Anycast
        } else if locator.is_router() {
            Self::Router
        } else {
            Self::Child
        }
    }
}

/// Every view of one address, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressReport {
    pub address: Ip6Address,
    pub locator: u16,
    pub locator_kind: LocatorKind,
    pub octets: [u8; 16],
    pub segments: [u16; 8],
    pub words: [u32; 4],
    pub dwords: [u64; 2],
}

impl AddressReport {
    pub fn new(address: Ip6Address) -> Self {
        let locator = Locator::from(address);
        Self {
            address,
            locator: locator.as_u16(),
            locator_kind: locator.into(),
            octets: address.octets(),
            segments: address.segments(),
            words: address.words(),
            dwords: address.dwords(),
        }
    }

    /// Flatten the four views into `(bits, index, value)` rows.
    pub fn lanes(&self) -> Vec<LaneRow> {
        let row = |bits: u8| move |(index, value): (usize, u64)| LaneRow { bits, index, value };

        let mut rows = Vec::with_capacity(16 + 8 + 4 + 2);
        rows.extend(self.octets.iter().map(|&v| u64::from(v)).enumerate().map(row(8)));
        rows.extend(self.segments.iter().map(|&v| u64::from(v)).enumerate().map(row(16)));
        rows.extend(self.words.iter().map(|&v| u64::from(v)).enumerate().map(row(32)));
        rows.extend(self.dwords.iter().copied().enumerate().map(row(64)));
        rows
    }
}

/// A single lane of one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneRow {
    pub bits: u8,
    pub index: usize,
    pub value: u64,
}

impl LaneRow {
    /// Zero-padded hex for the lane width.
    pub fn hex(&self, uppercase: bool) -> String {
        let width = usize::from(self.bits / 4);
        if uppercase {
            format!("{:0width$X}", self.value, width = width)
        } else {
            format!("{:0width$x}", self.value, width = width)
        }
    }
}

/// One row of the error code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub name: &'static str,
    pub value: ErrorCode,
    pub description: String,
}

impl From<ErrorCode> for CodeEntry {
    fn from(code: ErrorCode) -> Self {
        Self {
            name: code.name(),
            value: code,
            description: code.to_string(),
        }
    }
}

/// Render an address report in the requested format.
pub fn write_report<W: Write>(
    out: W,
    report: &AddressReport,
    format: OutputFormat,
    uppercase: bool,
) -> CliResult<()> {
    match format {
        OutputFormat::Plain => plain::write_report(out, report, uppercase)?,
        OutputFormat::Json => json_format::write_json(out, report)?,
        OutputFormat::Csv => csv_format::write_report(out, report, uppercase)?,
    }
    Ok(())
}

/// Render the error code table in the requested format.
pub fn write_codes<W: Write>(out: W, entries: &[CodeEntry], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => plain::write_codes(out, entries)?,
        OutputFormat::Json => json_format::write_json(out, entries)?,
        OutputFormat::Csv => csv_format::write_codes(out, entries)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_kind() {
        assert_eq!(LocatorKind::from(Locator::new(0x0400)), LocatorKind::Router);
        assert_eq!(LocatorKind::from(Locator::new(0x0401)), LocatorKind::Child);
        assert_eq!(LocatorKind::from(Locator::new(0xfc00)), LocatorKind::Anycast);
    }

    #[test]
    fn test_report_lanes() {
        let report = AddressReport::new(Ip6Address::from_locator(0xbeef));
        let lanes = report.lanes();
        assert_eq!(lanes.len(), 16 + 8 + 4 + 2);

        let last_segment = lanes.iter().find(|r| r.bits == 16 && r.index == 7).unwrap();
        assert_eq!(last_segment.value, 0xbeef);
        assert_eq!(last_segment.hex(false), "beef");
        assert_eq!(last_segment.hex(true), "BEEF");

        let low_dword = lanes.iter().find(|r| r.bits == 64 && r.index == 1).unwrap();
        assert_eq!(low_dword.hex(false), "000000000000beef");
    }

    #[test]
    fn test_json_report() {
        let report = AddressReport::new(Ip6Address::from_locator(0xfc10));
        let mut buf = Vec::new();
        write_report(&mut buf, &report, OutputFormat::Json, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["address"], "::fc10");
        assert_eq!(value["locator"], 0xfc10);
        assert_eq!(value["locator_kind"], "anycast");
        assert_eq!(value["octets"][14], 0xfc);
    }

    #[test]
    fn test_codes_json() {
        let entries: Vec<CodeEntry> = ErrorCode::ALL.into_iter().map(CodeEntry::from).collect();
        let mut buf = Vec::new();
        write_codes(&mut buf, &entries, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["value"], 0);
        assert_eq!(value[3]["name"], "dbus");
        assert_eq!(value[3]["value"], -3);
    }
}
