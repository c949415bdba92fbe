//! Fixed-width 256-bit unsigned integers for seeds and digests.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 256-bit unsigned integer stored as 32 big-endian bytes.
///
/// Only the operations derivation needs are provided: byte conversion,
/// reduction modulo a 64-bit bound, projection to `[0, 1)`, and hex encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct U256([u8; 32]);

/// Seeds are plain 256-bit values, as delivered by the randomness oracle.
pub type Seed = U256;

impl U256 {
    pub const ZERO: Self = Self([0u8; 32]);
    pub const MAX: Self = Self([0xFF; 32]);

    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn to_be_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Fresh value from the thread-local RNG. Never reproducible.
    pub fn from_entropy() -> Self {
        Self(rand::random())
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// `self mod modulus`; returns `0` when `modulus` is zero.
    pub fn rem_u64(&self, modulus: u64) -> u64 {
        if modulus == 0 {
            return 0;
        }
        let m = u128::from(modulus);
        let mut rem = 0u128;
        for &byte in &self.0 {
            rem = ((rem << 8) | u128::from(byte)) % m;
        }
        rem as u64
    }

    /// Projects onto `[0, 1)` using the top 53 bits, i.e. `self / 2^256`
    /// truncated to `f64` precision.
    pub fn to_unit_f64(&self) -> f64 {
        const SCALE: f64 = 1.0 / ((1u64 << 53) as f64);
        let mut top = [0u8; 8];
        top.copy_from_slice(&self.0[..8]);
        ((u64::from_be_bytes(top) >> 11) as f64) * SCALE
    }

    /// Parses up to 64 hex digits, with or without a `0x` prefix.
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        if digits.is_empty() || digits.len() > 64 {
            return Err(Error::InvalidSeed(format!(
                "expected 1 to 64 hex digits, got {}",
                digits.len()
            )));
        }

        let mut bytes = [0u8; 32];
        for (i, ch) in digits.chars().rev().enumerate() {
            let nibble = ch
                .to_digit(16)
                .ok_or_else(|| Error::InvalidSeed(format!("invalid hex digit '{ch}'")))?
                as u8;
            let byte = &mut bytes[31 - i / 2];
            if i % 2 == 0 {
                *byte |= nibble;
            } else {
                *byte |= nibble << 4;
            }
        }
        Ok(Self(bytes))
    }

    /// `0x` followed by 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(66);
        out.push_str("0x");
        for byte in &self.0 {
            out.push_str(&format!("{byte:02x}"));
        }
        out
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<[u8; 32]> for U256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl FromStr for U256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({})", self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for U256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for U256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        U256::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
