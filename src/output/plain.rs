//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use console::style;
use std::io::Write;

use super::{AddressReport, CodeEntry};
use crate::error::CliResult;

const RULE: &str = "───────────────────────────────────────────────────────────────";

/// Print an address report as a table of lanes.
pub fn write_report<W: Write>(mut out: W, report: &AddressReport, uppercase: bool) -> CliResult<()> {
    let locator = if uppercase {
        format!("0x{:04X}", report.locator)
    } else {
        format!("0x{:04x}", report.locator)
    };

    writeln!(out)?;
    writeln!(out, "  {} {}", style("Address:").bold(), style(report.address).cyan().bold())?;
    writeln!(
        out,
        "  {} {} {}",
        style("Locator:").bold(),
        locator,
        style(format!("[{}]", report.locator_kind)).dim()
    )?;
    writeln!(out)?;
    writeln!(out, "  {}", style(RULE).dim())?;

    let lanes = report.lanes();
    for bits in [8u8, 16, 32, 64] {
        let cells: Vec<String> = lanes
            .iter()
            .filter(|lane| lane.bits == bits)
            .map(|lane| lane.hex(uppercase))
            .collect();
        writeln!(
            out,
            "  {:>7}  {}",
            style(format!("{}-bit", bits)).bold(),
            cells.join(" ")
        )?;
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(out)?;
    Ok(())
}

/// Print the error code table.
pub fn write_codes<W: Write>(mut out: W, entries: &[CodeEntry]) -> CliResult<()> {
    writeln!(
        out,
        "  {:<8}  {:>5}  {}",
        style("NAME").bold(),
        style("VALUE").bold(),
        style("MEANING").bold()
    )?;
    for entry in entries {
        let value = if entry.value.is_ok() {
            style(entry.value.as_i32()).green()
        } else {
            style(entry.value.as_i32()).red()
        };
        writeln!(out, "  {:<8}  {:>5}  {}", entry.name, value, entry.description)?;
    }
    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}
