//! CSV output formatting.

use std::io::Write;

use super::{AddressReport, CodeEntry};
use crate::error::CliResult;

/// Write one row per lane: `bits,index,value,hex`.
pub fn write_report<W: Write>(out: W, report: &AddressReport, uppercase: bool) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["bits", "index", "value", "hex"])?;
    for lane in report.lanes() {
        wtr.write_record([
            &lane.bits.to_string(),
            &lane.index.to_string(),
            &lane.value.to_string(),
            &lane.hex(uppercase),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the error code table.
pub fn write_codes<W: Write>(out: W, entries: &[CodeEntry]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["name", "value", "description"])?;
    for entry in entries {
        wtr.write_record([
            entry.name.to_string(),
            entry.value.as_i32().to_string(),
            entry.description.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::types::Ip6Address;

    #[test]
    fn test_report_rows() {
        let report = AddressReport::new(Ip6Address::from_locator(0x1234));
        let mut buf = Vec::new();
        write_report(&mut buf, &report, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "bits,index,value,hex");
        assert_eq!(lines.len(), 1 + 30);
        assert!(lines.contains(&"8,14,18,12"));
        assert!(lines.contains(&"16,7,4660,1234"));
    }

    #[test]
    fn test_code_rows() {
        let entries: Vec<CodeEntry> = ErrorCode::ALL.into_iter().map(CodeEntry::from).collect();
        let mut buf = Vec::new();
        write_codes(&mut buf, &entries).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("dtls,-2,DTLS error"));
    }
}
