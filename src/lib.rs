//! # otbr-types - Shared value types for a Thread border router agent
//!
//! The agent bridges a Thread mesh to IPv6 networks. Its subsystems (DTLS
//! commissioning, DBus control, the main loop) all exchange the same small
//! vocabulary of values, defined here.
//!
//! ## Features
//!
//! - **Ip6Address**: 128-bit address stored in network byte order with
//!   consistent 8/16/32/64-bit lane views
//! - **Locator encoding**: RLOC16/ALOC16 packed into bytes 14 and 15
//! - **ErrorCode**: closed, integer-valued status taxonomy (`0` is success)
//! - **AgentError**: detailed subsystem errors that project onto an `ErrorCode`
//!
//! ## Example Usage
//!
//! ```rust
//! use otbr_types::{ErrorCode, Ip6Address};
//!
//! let mut addr = Ip6Address::from_locator(0xfc00);
//! assert_eq!(addr.to_locator(), 0xfc00);
//! assert_eq!(addr.segment(7), 0xfc00);
//!
//! addr[15] = 0x01;
//! assert_eq!(addr.to_locator(), 0xfc01);
//!
//! assert_eq!(ErrorCode::None.as_i32(), 0);
//! assert!(ErrorCode::Bus.is_err());
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Address, locator and identifier value types
//! - [`error`] - Status codes and error types
//! - [`config`] - Settings for the `otbr-addr` tool
//! - [`output`] - Report rendering
//! - [`cli`] - `otbr-addr` command definitions

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{AgentError, AgentResult, ErrorCode, UnknownErrorCode};
pub use types::{AddressError, Eui64, Ip6Address, Locator, Pskc, IN6ADDR_ANY};
