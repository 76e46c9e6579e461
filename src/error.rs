//! Error types for the border router agent.
//!
//! [`ErrorCode`] is the coarse, integer-valued status shared across module
//! boundaries. The `thiserror` enums below carry detail for callers that want
//! it and project back onto an [`ErrorCode`] when a status has to cross a
//! subsystem boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::AddressError;

/// Coarse failure category used as a return/status value throughout the agent.
///
/// Zero means success, every other code is negative. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum ErrorCode {
    /// No error.
    #[default]
    None = 0,
    /// Error reported by the operating system call layer (see `errno`).
    Errno = -1,
    /// Error originating in the secure transport (DTLS) layer.
    SecureTransport = -2,
    /// Error originating in the inter-process bus (DBus) layer.
    Bus = -3,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 4] = [
        ErrorCode::None,
        ErrorCode::Errno,
        ErrorCode::SecureTransport,
        ErrorCode::Bus,
    ];

    /// Get the raw integer value.
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check whether this code signals success.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::None)
    }

    /// Check whether this code signals a failure.
    #[inline]
    pub const fn is_err(self) -> bool {
        !self.is_ok()
    }

    /// Short machine-friendly name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Errno => "errno",
            Self::SecureTransport => "dtls",
            Self::Bus => "dbus",
        }
    }

    /// Collapse an agent result into its status code.
    pub fn from_result<T>(result: &Result<T, AgentError>) -> Self {
        match result {
            Ok(_) => Self::None,
            Err(e) => e.code(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "no error"),
            Self::Errno => write!(f, "system error"),
            Self::SecureTransport => write!(f, "DTLS error"),
            Self::Bus => write!(f, "DBus error"),
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.as_i32()
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            -1 => Ok(Self::Errno),
            -2 => Ok(Self::SecureTransport),
            -3 => Ok(Self::Bus),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

/// An integer that is not one of the defined [`ErrorCode`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub i32);

/// Detailed failure raised by one of the agent's subsystems.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("system call failed")]
    Io(#[from] std::io::Error),

    #[error("DTLS failure: {0}")]
    SecureTransport(String),

    #[error("DBus failure: {0}")]
    Bus(String),
}

impl AgentError {
    /// Category of this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::Errno,
            Self::SecureTransport(_) => ErrorCode::SecureTransport,
            Self::Bus(_) => ErrorCode::Bus,
        }
    }

    /// The OS `errno` behind an [`AgentError::Io`], if there is one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Io(e) => e.raw_os_error(),
            _ => None,
        }
    }
}

impl From<AgentError> for ErrorCode {
    fn from(err: AgentError) -> Self {
        err.code()
    }
}

/// Result type alias for agent subsystem operations.
pub type AgentResult<T> = Result<T, AgentError>;

/// Errors loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by the command-line tool.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid locator '{0}': expected a 16-bit decimal or 0x-prefixed hex value")]
    InvalidLocator(String),

    #[error("invalid lane edit '{0}': expected BITS:INDEX=VALUE, e.g. 16:7=0xfc00")]
    InvalidLaneEdit(String),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    UnknownCode(#[from] UnknownErrorCode),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error")]
    Output(#[from] std::io::Error),

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Status category used for the process exit code.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Output(_) | Self::Config(ConfigError::Io(_)) => Some(ErrorCode::Errno),
            _ => None,
        }
    }

    /// Process exit status: the magnitude of the status code, or 1 when the
    /// failure has none.
    pub fn exit_status(&self) -> u8 {
        self.code()
            .map(|code| code.as_i32().unsigned_abs() as u8)
            .unwrap_or(1)
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io;

    #[test]
    fn test_none_is_zero() {
        assert_eq!(ErrorCode::None.as_i32(), 0);
        assert!(ErrorCode::None.is_ok());
    }

    #[test]
    fn test_failures_are_negative_and_distinct() {
        let mut seen = HashSet::new();
        for code in ErrorCode::ALL {
            assert!(seen.insert(code.as_i32()), "duplicate value for {:?}", code);
            if code != ErrorCode::None {
                assert!(code.as_i32() < 0);
                assert!(code.is_err());
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_literal_values() {
        assert_eq!(i32::from(ErrorCode::Errno), -1);
        assert_eq!(i32::from(ErrorCode::SecureTransport), -2);
        assert_eq!(i32::from(ErrorCode::Bus), -3);
    }

    #[test]
    fn test_try_from_i32() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::try_from(code.as_i32()).unwrap(), code);
        }
        assert_eq!(ErrorCode::try_from(1), Err(UnknownErrorCode(1)));
        assert_eq!(ErrorCode::try_from(-4), Err(UnknownErrorCode(-4)));
    }

    #[test]
    fn test_serde_as_integer() {
        let json = serde_json::to_string(&ErrorCode::SecureTransport).unwrap();
        assert_eq!(json, "-2");
        let parsed: ErrorCode = serde_json::from_str("-3").unwrap();
        assert_eq!(parsed, ErrorCode::Bus);
        assert!(serde_json::from_str::<ErrorCode>("7").is_err());
    }

    #[test]
    fn test_agent_error_codes() {
        let io_err = AgentError::from(io::Error::from_raw_os_error(2));
        assert_eq!(io_err.code(), ErrorCode::Errno);
        assert_eq!(io_err.raw_os_error(), Some(2));

        let dtls = AgentError::SecureTransport("handshake timeout".into());
        assert_eq!(dtls.code(), ErrorCode::SecureTransport);
        assert_eq!(dtls.raw_os_error(), None);

        assert_eq!(ErrorCode::from(AgentError::Bus("no reply".into())), ErrorCode::Bus);
    }

    #[test]
    fn test_from_result() {
        let ok: AgentResult<()> = Ok(());
        assert_eq!(ErrorCode::from_result(&ok), ErrorCode::None);

        let err: AgentResult<()> = Err(AgentError::Bus("disconnected".into()));
        assert_eq!(ErrorCode::from_result(&err), ErrorCode::Bus);
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(ErrorCode::default(), ErrorCode::None);
    }

    #[test]
    fn test_cli_exit_status() {
        let output = CliError::Output(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(output.code(), Some(ErrorCode::Errno));
        assert_eq!(output.exit_status(), 1);

        let config_io = CliError::Config(ConfigError::Io(io::Error::from_raw_os_error(13)));
        assert_eq!(config_io.code(), Some(ErrorCode::Errno));
        assert_eq!(config_io.exit_status(), 1);

        let unknown = CliError::from(UnknownErrorCode(7));
        assert_eq!(unknown.code(), None);
        assert_eq!(unknown.exit_status(), 1);

        let read_failed = CliError::Config(ConfigError::ReadFailed {
            path: PathBuf::from("/nonexistent/x.json"),
            reason: "not found".into(),
        });
        assert_eq!(read_failed.exit_status(), 1);
    }

    #[test]
    fn test_source_not_repeated_in_message() {
        let err = CliError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "output error");
        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained.matches("pipe closed").count(), 1);
    }
}
