//! Configuration management for `otbr-addr`.
//!
//! Settings live in an XDG-compliant configuration directory.

mod settings;

pub use settings::{AppSettings, Paths};
