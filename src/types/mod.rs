//! Core value types shared across the border router agent.
//!
//! All of these are plain `Copy` values with a fixed-size representation.

mod address;
mod ids;
mod locator;

pub use address::{AddressError, Ip6Address, Lane, IN6ADDR_ANY};
pub use ids::{Eui64, IdError, Pskc, SIZE_EUI64, SIZE_PSKC};
pub use locator::Locator;
