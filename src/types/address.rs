//! IPv6 address with fixed-width lane views and Thread locator encoding.
//!
//! The address is stored as 16 bytes in network byte order. The 16-, 32- and
//! 64-bit views are computed big-endian over those bytes, so a write through
//! any view is visible through every other view and the layout is the same on
//! every host.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::Ipv6Addr;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Textual form of the unspecified IPv6 address.
pub const IN6ADDR_ANY: &str = "::";

/// Byte offset of the 16-bit Thread locator inside the address.
const LOCATOR_OFFSET: usize = 14;

/// A 128-bit IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Ip6Address([u8; 16]);

impl Ip6Address {
    /// Size of the address in bytes.
    pub const SIZE: usize = 16;
    /// Number of 16-bit lanes.
    pub const SEGMENTS: usize = 8;
    /// Number of 32-bit lanes.
    pub const WORDS: usize = 4;
    /// Number of 64-bit lanes.
    pub const DWORDS: usize = 2;

    /// The unspecified address (`::`).
    pub const ANY: Self = Self([0; Self::SIZE]);

    /// Create the all-zero address.
    #[inline]
    pub const fn new() -> Self {
        Self::ANY
    }

    /// Create an address from raw bytes in network order.
    #[inline]
    pub const fn from_octets(octets: [u8; Self::SIZE]) -> Self {
        Self(octets)
    }

    /// Create an address carrying a 16-bit Thread locator (RLOC16 or ALOC16).
    ///
    /// Bytes 0 to 13 are zero and the locator occupies bytes 14 and 15,
    /// high byte first.
    #[inline]
    pub const fn from_locator(locator: u16) -> Self {
        let mut octets = [0u8; Self::SIZE];
        octets[LOCATOR_OFFSET] = (locator >> 8) as u8;
        octets[LOCATOR_OFFSET + 1] = (locator & 0xff) as u8;
        Self(octets)
    }

    /// Read the 16-bit Thread locator from bytes 14 and 15.
    ///
    /// This is a plain projection of the low 16 bits; the remaining bytes are
    /// not checked.
    #[inline]
    pub const fn to_locator(&self) -> u16 {
        (self.0[LOCATOR_OFFSET] as u16) << 8 | self.0[LOCATOR_OFFSET + 1] as u16
    }

    /// Copy of the 16 bytes.
    #[inline]
    pub const fn octets(&self) -> [u8; Self::SIZE] {
        self.0
    }

    /// Borrow the 16 bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.0
    }

    /// Mutably borrow the 16 bytes; writes show up in every lane view.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8; Self::SIZE] {
        &mut self.0
    }

    /// Check whether every byte is zero.
    pub fn is_unspecified(&self) -> bool {
        self.0 == [0; Self::SIZE]
    }

    /// Get 16-bit lane `index`.
    ///
    /// # Panics
    /// Panics if `index >= 8`.
    pub fn segment(&self, index: usize) -> u16 {
        let at = index * 2;
        u16::from_be_bytes([self.0[at], self.0[at + 1]])
    }

    /// Set 16-bit lane `index`.
    ///
    /// # Panics
    /// Panics if `index >= 8`.
    pub fn set_segment(&mut self, index: usize, value: u16) {
        let at = index * 2;
        self.0[at..at + 2].copy_from_slice(&value.to_be_bytes());
    }

    /// Get 32-bit lane `index`.
    ///
    /// # Panics
    /// Panics if `index >= 4`.
    pub fn word(&self, index: usize) -> u32 {
        let at = index * 4;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.0[at..at + 4]);
        u32::from_be_bytes(buf)
    }

    /// Set 32-bit lane `index`.
    ///
    /// # Panics
    /// Panics if `index >= 4`.
    pub fn set_word(&mut self, index: usize, value: u32) {
        let at = index * 4;
        self.0[at..at + 4].copy_from_slice(&value.to_be_bytes());
    }

    /// Get 64-bit lane `index`.
    ///
    /// # Panics
    /// Panics if `index >= 2`.
    pub fn dword(&self, index: usize) -> u64 {
        let at = index * 8;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&self.0[at..at + 8]);
        u64::from_be_bytes(buf)
    }

    /// Set 64-bit lane `index`.
    ///
    /// # Panics
    /// Panics if `index >= 2`.
    pub fn set_dword(&mut self, index: usize, value: u64) {
        let at = index * 8;
        self.0[at..at + 8].copy_from_slice(&value.to_be_bytes());
    }

    /// All eight 16-bit lanes.
    pub fn segments(&self) -> [u16; Self::SEGMENTS] {
        std::array::from_fn(|i| self.segment(i))
    }

    /// All four 32-bit lanes.
    pub fn words(&self) -> [u32; Self::WORDS] {
        std::array::from_fn(|i| self.word(i))
    }

    /// Both 64-bit lanes.
    pub fn dwords(&self) -> [u64; Self::DWORDS] {
        [self.dword(0), self.dword(1)]
    }

    /// Get byte `index`, or `LaneOutOfRange` if `index >= 16`.
    pub fn try_octet(&self, index: usize) -> Result<u8, AddressError> {
        check_lane(Lane::Octet, index, Self::SIZE)?;
        Ok(self.0[index])
    }

    /// Set byte `index`, or `LaneOutOfRange` if `index >= 16`.
    pub fn try_set_octet(&mut self, index: usize, value: u8) -> Result<(), AddressError> {
        check_lane(Lane::Octet, index, Self::SIZE)?;
        self.0[index] = value;
        Ok(())
    }

    /// Checked [`segment`](Self::segment).
    pub fn try_segment(&self, index: usize) -> Result<u16, AddressError> {
        check_lane(Lane::Segment, index, Self::SEGMENTS)?;
        Ok(self.segment(index))
    }

    /// Checked [`set_segment`](Self::set_segment).
    pub fn try_set_segment(&mut self, index: usize, value: u16) -> Result<(), AddressError> {
        check_lane(Lane::Segment, index, Self::SEGMENTS)?;
        self.set_segment(index, value);
        Ok(())
    }

    /// Checked [`word`](Self::word).
    pub fn try_word(&self, index: usize) -> Result<u32, AddressError> {
        check_lane(Lane::Word, index, Self::WORDS)?;
        Ok(self.word(index))
    }

    /// Checked [`set_word`](Self::set_word).
    pub fn try_set_word(&mut self, index: usize, value: u32) -> Result<(), AddressError> {
        check_lane(Lane::Word, index, Self::WORDS)?;
        self.set_word(index, value);
        Ok(())
    }

    /// Checked [`dword`](Self::dword).
    pub fn try_dword(&self, index: usize) -> Result<u64, AddressError> {
        check_lane(Lane::DoubleWord, index, Self::DWORDS)?;
        Ok(self.dword(index))
    }

    /// Checked [`set_dword`](Self::set_dword).
    pub fn try_set_dword(&mut self, index: usize, value: u64) -> Result<(), AddressError> {
        check_lane(Lane::DoubleWord, index, Self::DWORDS)?;
        self.set_dword(index, value);
        Ok(())
    }
}

fn check_lane(lane: Lane, index: usize, len: usize) -> Result<(), AddressError> {
    if index < len {
        Ok(())
    } else {
        Err(AddressError::LaneOutOfRange { lane, index, len })
    }
}

/// Width of a lane view, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Octet,
    Segment,
    Word,
    DoubleWord,
}

impl Lane {
    /// Lane for a width in bits, if it is one of 8, 16, 32 or 64.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            8 => Some(Self::Octet),
            16 => Some(Self::Segment),
            32 => Some(Self::Word),
            64 => Some(Self::DoubleWord),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Self::Octet => 8,
            Self::Segment => 16,
            Self::Word => 32,
            Self::DoubleWord => 64,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Error type for address parsing and checked lane access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("invalid IPv6 address: {0}")]
    InvalidFormat(String),
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("{lane} lane index {index} out of range (0..{len})")]
    LaneOutOfRange { lane: Lane, index: usize, len: usize },
    #[error("value {value:#x} does not fit a {lane} lane")]
    ValueTooWide { lane: Lane, value: u64 },
}

impl Index<usize> for Ip6Address {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Ip6Address {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.0[index]
    }
}

impl From<u16> for Ip6Address {
    fn from(locator: u16) -> Self {
        Self::from_locator(locator)
    }
}

impl From<[u8; 16]> for Ip6Address {
    fn from(octets: [u8; 16]) -> Self {
        Self(octets)
    }
}

impl From<Ip6Address> for [u8; 16] {
    fn from(addr: Ip6Address) -> Self {
        addr.0
    }
}

impl From<[u16; 8]> for Ip6Address {
    fn from(segments: [u16; 8]) -> Self {
        let mut addr = Self::new();
        for (i, segment) in segments.into_iter().enumerate() {
            addr.set_segment(i, segment);
        }
        addr
    }
}

impl From<Ipv6Addr> for Ip6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Ip6Address> for Ipv6Addr {
    fn from(addr: Ip6Address) -> Self {
        Ipv6Addr::from(addr.0)
    }
}

impl TryFrom<&[u8]> for Ip6Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let octets: [u8; 16] = bytes.try_into().map_err(|_| AddressError::InvalidLength {
            expected: Self::SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(octets))
    }
}

impl fmt::Display for Ip6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Ipv6Addr::from(*self), f)
    }
}

impl fmt::LowerHex for Ip6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Ip6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for Ip6Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<Ipv6Addr>()
            .map(Self::from)
            .map_err(|_| AddressError::InvalidFormat(s.to_string()))
    }
}

impl Serialize for Ip6Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ip6Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
