//! Inspect subcommand implementation.
//!
//! Parses an address, optionally rewrites individual lanes through any of
//! the four views, then prints the resulting report.

use crate::cli::Context;
use crate::error::{CliError, CliResult};
use crate::output::{self, AddressReport};
use crate::types::{AddressError, Ip6Address, Lane};
use clap::Parser;
use std::io;
use std::num::TryFromIntError;
use std::str::FromStr;
use tracing::debug;

/// Show every lane view of an address.
#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// IPv6 address to inspect (e.g. fd00:db8::ff:fe00:fc00)
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Overwrite a lane before printing, as BITS:INDEX=VALUE (repeatable)
    ///
    /// BITS is 8, 16, 32 or 64; VALUE is decimal or 0x-prefixed hex.
    #[arg(long, value_name = "BITS:INDEX=VALUE")]
    pub set: Vec<LaneEdit>,
}

impl InspectCommand {
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let address = self.resolve()?;
        let report = AddressReport::new(address);
        output::write_report(io::stdout().lock(), &report, ctx.format, ctx.uppercase)
    }

    /// Parse the address and apply every edit in order.
    pub fn resolve(&self) -> CliResult<Ip6Address> {
        let mut address: Ip6Address = self.address.parse()?;
        for edit in &self.set {
            edit.apply(&mut address)?;
            debug!(?edit, %address, "applied lane edit");
        }
        Ok(address)
    }
}

/// A single write through one of the lane views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneEdit {
    pub lane: Lane,
    pub index: usize,
    pub value: u64,
}

impl LaneEdit {
    /// Write the value through the matching view.
    ///
    /// Values wider than the lane are rejected rather than truncated.
    pub fn apply(&self, address: &mut Ip6Address) -> Result<(), AddressError> {
        let too_wide = |_: TryFromIntError| AddressError::ValueTooWide {
            lane: self.lane,
            value: self.value,
        };

        match self.lane {
            Lane::Octet => address.try_set_octet(self.index, self.value.try_into().map_err(too_wide)?),
            Lane::Segment => {
                address.try_set_segment(self.index, self.value.try_into().map_err(too_wide)?)
            }
            Lane::Word => address.try_set_word(self.index, self.value.try_into().map_err(too_wide)?),
            Lane::DoubleWord => address.try_set_dword(self.index, self.value),
        }
    }
}

impl FromStr for LaneEdit {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidLaneEdit(s.to_string());

        let (target, value) = s.split_once('=').ok_or_else(invalid)?;
        let (bits, index) = target.split_once(':').ok_or_else(invalid)?;

        // str::parse accepts a leading '+', which is not a lane number.
        let decimal = |field: &str| {
            let field = field.trim();
            if field.bytes().all(|b| b.is_ascii_digit()) {
                field.parse::<usize>().map_err(|_| invalid())
            } else {
                Err(invalid())
            }
        };

        let bits = u8::try_from(decimal(bits)?).map_err(|_| invalid())?;
        let lane = Lane::from_bits(bits).ok_or_else(invalid)?;
        let index = decimal(index)?;

        let value = value.trim();
        let value = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
            Some(hex) if hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
                u64::from_str_radix(hex, 16).map_err(|_| invalid())?
            }
            None if value.bytes().all(|b| b.is_ascii_digit()) => {
                value.parse().map_err(|_| invalid())?
            }
            _ => return Err(invalid()),
        };

        Ok(Self { lane, index, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_edit_parse() {
        let edit: LaneEdit = "16:7=0xfc00".parse().unwrap();
        assert_eq!(
            edit,
            LaneEdit {
                lane: Lane::Segment,
                index: 7,
                value: 0xfc00
            }
        );

        assert!("12:0=1".parse::<LaneEdit>().is_err());
        assert!("16:7".parse::<LaneEdit>().is_err());
        assert!("16=1".parse::<LaneEdit>().is_err());
        assert!("16:x=1".parse::<LaneEdit>().is_err());
    }

    #[test]
    fn test_lane_edit_rejects_signed_values() {
        assert!(matches!(
            "8:0=+5".parse::<LaneEdit>(),
            Err(CliError::InvalidLaneEdit(_))
        ));
        assert!("16:7=0x+ff".parse::<LaneEdit>().is_err());
        assert!("16:+7=1".parse::<LaneEdit>().is_err());
        assert!("+16:7=1".parse::<LaneEdit>().is_err());
    }

    #[test]
    fn test_edits_apply_in_order() {
        let cmd = InspectCommand {
            address: "fd00::".to_string(),
            set: vec![
                "64:1=0x1122334455667788".parse().unwrap(),
                "8:15=0xff".parse().unwrap(),
            ],
        };
        let address = cmd.resolve().unwrap();
        assert_eq!(address.segment(0), 0xfd00);
        assert_eq!(address.dword(1), 0x1122_3344_5566_77ff);
        assert_eq!(address.to_locator(), 0x77ff);
    }

    #[test]
    fn test_edit_out_of_range_index() {
        let mut address = Ip6Address::new();
        let edit: LaneEdit = "32:4=1".parse().unwrap();
        assert_eq!(
            edit.apply(&mut address),
            Err(AddressError::LaneOutOfRange {
                lane: Lane::Word,
                index: 4,
                len: 4
            })
        );
    }

    #[test]
    fn test_edit_value_too_wide() {
        let mut address = Ip6Address::new();
        let edit: LaneEdit = "8:0=0x100".parse().unwrap();
        assert_eq!(
            edit.apply(&mut address),
            Err(AddressError::ValueTooWide {
                lane: Lane::Octet,
                value: 0x100
            })
        );
        assert!(address.is_unspecified());
    }
}
