//! Fixed-size identifiers used alongside addresses: EUI-64 and PSKc.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size of a PSKc in bytes.
pub const SIZE_PSKC: usize = 16;
/// Size of an EUI-64 in bytes.
pub const SIZE_EUI64: usize = 8;

/// Error type for identifier parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("expected {expected} hex digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid hex digit in '{0}'")]
    InvalidHex(String),
}

fn parse_hex<const N: usize>(s: &str, separators: &[char]) -> Result<[u8; N], IdError> {
    let digits: String = s
        .trim()
        .chars()
        .filter(|c| !separators.contains(c))
        .collect();
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(IdError::InvalidHex(s.to_string()));
    }
    if digits.len() != N * 2 {
        return Err(IdError::InvalidLength {
            expected: N * 2,
            actual: digits.len(),
        });
    }

    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        let pair = digits
            .get(i * 2..i * 2 + 2)
            .ok_or_else(|| IdError::InvalidHex(s.to_string()))?;
        *byte = u8::from_str_radix(pair, 16).map_err(|_| IdError::InvalidHex(s.to_string()))?;
    }
    Ok(out)
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{:02x}", byte)?;
    }
    Ok(())
}

/// IEEE EUI-64 of a Thread radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Eui64([u8; SIZE_EUI64]);

impl Eui64 {
    pub const fn new(bytes: [u8; SIZE_EUI64]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; SIZE_EUI64] {
        &self.0
    }
}

impl fmt::Display for Eui64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl FromStr for Eui64 {
    type Err = IdError;

    /// Accepts `18b4300000000001` as well as colon or dash separated octets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s, &[':', '-']).map(Self)
    }
}

/// Pre-shared key for the commissioner.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Pskc([u8; SIZE_PSKC]);

impl Pskc {
    pub const fn new(bytes: [u8; SIZE_PSKC]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; SIZE_PSKC] {
        &self.0
    }
}

// Key material stays out of debug logs.
impl fmt::Debug for Pskc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pskc(..)")
    }
}

impl fmt::Display for Pskc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl FromStr for Pskc {
    type Err = IdError;

    /// Accepts exactly 32 hex digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s, &[]).map(Self)
    }
}

macro_rules! serde_via_str {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_via_str!(Eui64);
serde_via_str!(Pskc);
