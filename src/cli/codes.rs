//! Codes subcommand implementation.

use crate::cli::Context;
use crate::error::{CliResult, ErrorCode};
use crate::output::{self, CodeEntry};
use clap::Parser;
use std::io;

/// List agent error codes, or look up a single value.
#[derive(Parser, Debug)]
pub struct CodesCommand {
    /// Integer code to look up (e.g. -2)
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: Option<i32>,
}

impl CodesCommand {
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let entries = self.entries()?;
        output::write_codes(io::stdout().lock(), &entries, ctx.format)
    }

    fn entries(&self) -> CliResult<Vec<CodeEntry>> {
        match self.value {
            Some(value) => Ok(vec![ErrorCode::try_from(value)?.into()]),
            None => Ok(ErrorCode::ALL.into_iter().map(CodeEntry::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, UnknownErrorCode};

    #[test]
    fn test_all_codes() {
        let cmd = CodesCommand { value: None };
        let entries = cmd.entries().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].value, ErrorCode::None);
    }

    #[test]
    fn test_lookup() {
        let cmd = CodesCommand { value: Some(-2) };
        let entries = cmd.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "dtls");

        let cmd = CodesCommand { value: Some(5) };
        assert!(matches!(
            cmd.entries(),
            Err(CliError::UnknownCode(UnknownErrorCode(5)))
        ));
    }
}
