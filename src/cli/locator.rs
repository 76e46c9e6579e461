//! Locator subcommand implementation.

use crate::cli::Context;
use crate::error::{CliError, CliResult};
use crate::output::{self, AddressReport};
use crate::types::Ip6Address;
use clap::Parser;
use std::io;
use tracing::debug;

/// Build the address that carries a 16-bit locator.
#[derive(Parser, Debug)]
pub struct LocatorCommand {
    /// RLOC16 or ALOC16, decimal or 0x-prefixed hex (e.g. 1024, 0x0400)
    #[arg(value_name = "VALUE")]
    pub value: String,
}

impl LocatorCommand {
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let locator = parse_locator(&self.value)?;
        let address = Ip6Address::from_locator(locator);
        debug!(locator, %address, "built locator address");

        let report = AddressReport::new(address);
        output::write_report(io::stdout().lock(), &report, ctx.format, ctx.uppercase)
    }
}

/// Parse a 16-bit locator from decimal or `0x`-prefixed hex.
pub fn parse_locator(s: &str) -> CliResult<u16> {
    let s = s.trim();
    let invalid = || CliError::InvalidLocator(s.to_string());

    // from_str_radix tolerates a leading sign, so check the digits first.
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) if hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            u16::from_str_radix(hex, 16).map_err(|_| invalid())
        }
        None if s.bytes().all(|b| b.is_ascii_digit()) => s.parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locator_forms() {
        assert_eq!(parse_locator("1024").unwrap(), 0x0400);
        assert_eq!(parse_locator("0xbeef").unwrap(), 0xbeef);
        assert_eq!(parse_locator("0XFC00").unwrap(), 0xfc00);
        assert_eq!(parse_locator(" 65535 ").unwrap(), 0xffff);
    }

    #[test]
    fn test_parse_locator_rejects() {
        assert!(matches!(parse_locator("65536"), Err(CliError::InvalidLocator(_))));
        assert!(parse_locator("0x10000").is_err());
        assert!(parse_locator("-1").is_err());
        assert!(parse_locator("beef").is_err());
        assert!(parse_locator("").is_err());
    }

    #[test]
    fn test_parse_locator_rejects_sign() {
        assert!(matches!(parse_locator("0x+ff"), Err(CliError::InvalidLocator(_))));
        assert!(parse_locator("+255").is_err());
        assert!(parse_locator("0x").is_err());
    }
}
