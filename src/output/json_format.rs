//! JSON output formatting.

use serde::Serialize;
use std::io::Write;

use crate::error::CliResult;

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
