//! Fingerprint value type and its text renderings

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of bits in a fingerprint
pub const HASH_BITS: usize = 64;

/// Count of differing bit positions between two fingerprints (0-64)
pub type Distance = u32;

/// A 64-bit perceptual fingerprint.
///
/// Bit `i` of the row-major flattening order is stored at bit position
/// `63 - i`, so the first coefficient is the most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Wrap a raw 64-bit value
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying 64-bit value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Build a fingerprint from exactly 64 bits in flattening order
    pub fn from_bits(bits: &[bool]) -> Result<Self> {
        if bits.len() != HASH_BITS {
            return Err(Error::LengthMismatch {
                left: bits.len(),
                right: HASH_BITS,
            });
        }

        let value = bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
        Ok(Self(value))
    }

    /// Bit at flattening position `index`
    pub fn bit(&self, index: usize) -> bool {
        assert!(index < HASH_BITS, "bit index {} out of range", index);
        (self.0 >> (HASH_BITS - 1 - index)) & 1 == 1
    }

    /// All 64 bits in flattening order
    pub fn bits(&self) -> [bool; HASH_BITS] {
        let mut bits = [false; HASH_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = self.bit(i);
        }
        bits
    }

    /// Number of set bits
    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// Fixed-width hexadecimal rendering (16 lowercase digits)
    pub fn to_hex(&self) -> String {
        format!("{:016x}", self.0)
    }

    /// 64-character '0'/'1' rendering in flattening order
    pub fn to_bit_string(&self) -> String {
        format!("{:064b}", self.0)
    }

    /// Parse a 64-character '0'/'1' string
    pub fn from_bit_string(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::InvalidFingerprint(format!(
                    "unexpected character '{}' in bit string",
                    other
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;

        Self::from_bits(&bits)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = Error;

    /// Parse 16 hex digits, with or without a `0x` prefix
    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != HASH_BITS / 4 {
            return Err(Error::InvalidFingerprint(format!(
                "expected {} hex digits, got {}",
                HASH_BITS / 4,
                digits.len()
            )));
        }

        u64::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|e| Error::InvalidFingerprint(format!("{}: {}", s, e)))
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_bit_is_most_significant() {
        let mut bits = [false; HASH_BITS];
        bits[0] = true;
        let fp = Fingerprint::from_bits(&bits).unwrap();

        assert_eq!(fp.as_u64(), 1u64 << 63);
        assert_eq!(fp.to_hex(), "8000000000000000");
        assert!(fp.bit(0));
        assert!(!fp.bit(63));
    }

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(Fingerprint::from_u64(0xab).to_string(), "00000000000000ab");
        assert_eq!(Fingerprint::default().to_hex().len(), 16);
    }

    #[test]
    fn test_parse_hex() {
        let fp: Fingerprint = "0x00ff00ff00ff00ff".parse().unwrap();
        assert_eq!(fp.as_u64(), 0x00ff_00ff_00ff_00ff);

        let same: Fingerprint = "00FF00FF00FF00FF".parse().unwrap();
        assert_eq!(fp, same);

        assert!("abc".parse::<Fingerprint>().is_err());
        assert!("zz00000000000000".parse::<Fingerprint>().is_err());
    }

    #[test]
    fn test_bit_string() {
        let fp = Fingerprint::from_u64(0x8000_0000_0000_0001);
        let s = fp.to_bit_string();

        assert_eq!(s.len(), 64);
        assert!(s.starts_with('1'));
        assert!(s.ends_with('1'));
        assert_eq!(Fingerprint::from_bit_string(&s).unwrap(), fp);
    }

    #[test]
    fn test_bit_string_wrong_length() {
        let result = Fingerprint::from_bit_string("0101");
        assert!(matches!(
            result,
            Err(Error::LengthMismatch { left: 4, right: 64 })
        ));
    }

    #[test]
    fn test_bit_string_bad_character() {
        let s = "2".repeat(64);
        assert!(matches!(
            Fingerprint::from_bit_string(&s),
            Err(Error::InvalidFingerprint(_))
        ));
    }

    #[test]
    fn test_serde_as_hex() {
        let fp = Fingerprint::from_u64(0x0123_4567_89ab_cdef);
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json, "\"0123456789abcdef\"");

        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fp);
    }
}
