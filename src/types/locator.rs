//! Thread 16-bit locators (RLOC16 and ALOC16).
//!
//! An RLOC16 packs a router id in bits 15..10 and a child id in bits 8..0.
//! ALOC16 values live in the reserved block `0xfc00..=0xfcff`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Ip6Address;

/// A 16-bit Thread locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(u16);

impl Locator {
    /// First ALOC16 value.
    pub const ALOC_MIN: u16 = 0xfc00;
    /// Last ALOC16 value.
    pub const ALOC_MAX: u16 = 0xfcff;

    const ROUTER_ID_SHIFT: u16 = 10;
    const CHILD_ID_MASK: u16 = 0x01ff;

    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Build an RLOC16 from a router id (0..=62) and child id.
    ///
    /// Returns `None` if either id does not fit its field.
    pub const fn rloc(router_id: u8, child_id: u16) -> Option<Self> {
        if router_id > 62 || child_id > Self::CHILD_ID_MASK {
            return None;
        }
        Some(Self((router_id as u16) << Self::ROUTER_ID_SHIFT | child_id))
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Check whether this is an anycast locator.
    #[inline]
    pub const fn is_aloc(self) -> bool {
        self.0 >= Self::ALOC_MIN && self.0 <= Self::ALOC_MAX
    }

    #[inline]
    pub const fn is_rloc(self) -> bool {
        !self.is_aloc()
    }

    /// Router id carried in the upper six bits.
    #[inline]
    pub const fn router_id(self) -> u8 {
        (self.0 >> Self::ROUTER_ID_SHIFT) as u8
    }

    /// Child id carried in the lower nine bits.
    #[inline]
    pub const fn child_id(self) -> u16 {
        self.0 & Self::CHILD_ID_MASK
    }

    /// An RLOC16 with a zero child id belongs to a router.
    #[inline]
    pub const fn is_router(self) -> bool {
        self.is_rloc() && self.child_id() == 0
    }

    /// Address with this locator in its low 16 bits.
    #[inline]
    pub const fn to_address(self) -> Ip6Address {
        Ip6Address::from_locator(self.0)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

impl From<u16> for Locator {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Locator> for u16 {
    fn from(locator: Locator) -> Self {
        locator.0
    }
}

impl From<Ip6Address> for Locator {
    fn from(addr: Ip6Address) -> Self {
        Self(addr.to_locator())
    }
}

impl From<Locator> for Ip6Address {
    fn from(locator: Locator) -> Self {
        locator.to_address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aloc_range() {
        assert!(Locator::new(0xfc00).is_aloc());
        assert!(Locator::new(0xfcff).is_aloc());
        assert!(!Locator::new(0xfbff).is_aloc());
        assert!(!Locator::new(0xfd00).is_aloc());
        assert!(Locator::new(0x0400).is_rloc());
    }

    #[test]
    fn test_rloc_fields() {
        let leader = Locator::rloc(1, 0).unwrap();
        assert_eq!(leader.as_u16(), 0x0400);
        assert!(leader.is_router());

        let child = Locator::rloc(1, 3).unwrap();
        assert_eq!(child.as_u16(), 0x0403);
        assert_eq!(child.router_id(), 1);
        assert_eq!(child.child_id(), 3);
        assert!(!child.is_router());

        assert!(Locator::rloc(63, 0).is_none());
        assert!(Locator::rloc(0, 0x200).is_none());
    }

    #[test]
    fn test_address_conversion() {
        let locator = Locator::new(0xbeef);
        let addr = Ip6Address::from(locator);
        assert_eq!(addr.to_locator(), 0xbeef);
        assert_eq!(Locator::from(addr), locator);
    }

    #[test]
    fn test_display() {
        assert_eq!(Locator::new(0x0400).to_string(), "0x0400");
        assert_eq!(Locator::new(0xfc01).to_string(), "0xfc01");
    }
}
