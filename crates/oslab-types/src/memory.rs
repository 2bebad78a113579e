//! Memory sizes on the fixed `bit, B, KB, MB, GB, TB` scale.
//!
//! Adjacent units differ by ×8 (bit↔B) or ×1024 (B↔KB↔…↔TB). Conversions
//! walk the scale one step at a time and carry exact rational amounts, so
//! `4 KB` converted down to bits and back is still exactly `4 KB`.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use oslab_error::{Result, SimError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decimal::{format_decimal, parse_decimal};

/// One unit on the fixed scale, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemoryUnit {
    Bit,
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
}

impl MemoryUnit {
    /// All units, smallest first. The position in this list is the unit's
    /// scale index.
    pub const ALL: [Self; 6] = [
        Self::Bit,
        Self::Byte,
        Self::Kilobyte,
        Self::Megabyte,
        Self::Gigabyte,
        Self::Terabyte,
    ];

    /// Canonical spelling used in serialized sizes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bit => "bit",
            Self::Byte => "B",
            Self::Kilobyte => "KB",
            Self::Megabyte => "MB",
            Self::Gigabyte => "GB",
            Self::Terabyte => "TB",
        }
    }

    /// Position on the scale, 0 = bit.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|u| *u == self).unwrap_or(0)
    }

    /// Multiplier from this unit to the next larger one.
    fn step_factor(self) -> u32 {
        match self {
            Self::Bit => 8,
            _ => 1024,
        }
    }
}

impl fmt::Display for MemoryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoryUnit {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| SimError::UnknownUnit { unit: s.to_owned() })
    }
}

/// An exact amount of memory: a rational quantity paired with a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySize {
    pub amount: BigRational,
    pub unit: MemoryUnit,
}

impl MemorySize {
    pub fn new(amount: BigRational, unit: MemoryUnit) -> Self {
        Self { amount, unit }
    }

    /// Convenience constructor from a whole number of the given unit.
    pub fn from_integer(amount: u64, unit: MemoryUnit) -> Self {
        Self::new(BigRational::from(BigInt::from(amount)), unit)
    }

    /// The amount this size represents in `target` units.
    ///
    /// Walks the scale step by step, multiplying when moving to a smaller
    /// unit and dividing when moving to a larger one.
    pub fn convert_to(&self, target: MemoryUnit) -> BigRational {
        let from = self.unit.index();
        let to = target.index();
        let mut amount = self.amount.clone();

        if to > from {
            for i in from..to {
                let factor = MemoryUnit::ALL[i].step_factor();
                amount /= BigRational::from(BigInt::from(factor));
            }
        } else {
            for i in (to..from).rev() {
                let factor = MemoryUnit::ALL[i].step_factor();
                amount *= BigRational::from(BigInt::from(factor));
            }
        }
        amount
    }

    /// Re-express this size in `target` units.
    pub fn to_unit(&self, target: MemoryUnit) -> Self {
        Self::new(self.convert_to(target), target)
    }

    /// Express two sizes in a common unit: the smaller (more precise) of
    /// the two. Returns both amounts and the unit chosen.
    pub fn common_unit(a: &Self, b: &Self) -> (BigRational, BigRational, MemoryUnit) {
        let unit = if a.unit.index() <= b.unit.index() {
            a.unit
        } else {
            b.unit
        };
        (a.convert_to(unit), b.convert_to(unit), unit)
    }

    /// Serialized form: `"<decimal amount> <unit>"`.
    pub fn serialize_to_string(&self) -> String {
        format!("{} {}", format_decimal(&self.amount), self.unit)
    }

    /// Parse the serialized form back. Splits on the first whitespace and
    /// validates the unit against the fixed scale.
    pub fn parse(text: &str) -> Result<Self> {
        let split_at = text.find(char::is_whitespace).ok_or_else(|| {
            SimError::UnknownUnit {
                unit: String::new(),
            }
        })?;
        let (amount_text, unit_text) = text.split_at(split_at);
        let unit: MemoryUnit = unit_text.trim_start().parse()?;
        let amount = parse_decimal(amount_text)?;
        Ok(Self::new(amount, unit))
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize_to_string())
    }
}

impl FromStr for MemorySize {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for MemorySize {
    fn serialize<S: Serializer>(&self, ser: S) -> std::result::Result<S::Ok, S::Error> {
        self.serialize_to_string().serialize(ser)
    }
}

impl<'de> Deserialize<'de> for MemorySize {
    fn deserialize<D: Deserializer<'de>>(de: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(de)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("KB".parse::<MemoryUnit>().unwrap(), MemoryUnit::Kilobyte);
        assert_eq!("bit".parse::<MemoryUnit>().unwrap(), MemoryUnit::Bit);
        let err = "kb".parse::<MemoryUnit>().unwrap_err();
        assert_eq!(err.to_string(), "invalid memory size unit: kb");
    }

    #[test]
    fn byte_to_bits() {
        let one_byte = MemorySize::from_integer(1, MemoryUnit::Byte);
        assert_eq!(one_byte.convert_to(MemoryUnit::Bit), rat(8, 1));
    }

    #[test]
    fn kb_down_to_bits() {
        let four_kb = MemorySize::from_integer(4, MemoryUnit::Kilobyte);
        assert_eq!(four_kb.convert_to(MemoryUnit::Byte), rat(4096, 1));
        assert_eq!(four_kb.convert_to(MemoryUnit::Bit), rat(32768, 1));
    }

    #[test]
    fn bytes_up_to_tb() {
        let size = MemorySize::from_integer(1, MemoryUnit::Terabyte);
        let bytes = size.convert_to(MemoryUnit::Byte);
        assert_eq!(bytes, BigRational::from(BigInt::from(1024u64.pow(4))));
    }

    #[test]
    fn fractional_conversion_is_exact() {
        let one_bit = MemorySize::from_integer(1, MemoryUnit::Bit);
        assert_eq!(one_bit.convert_to(MemoryUnit::Byte), rat(1, 8));
        assert_eq!(one_bit.convert_to(MemoryUnit::Kilobyte), rat(1, 8192));
    }

    #[test]
    fn same_unit_is_identity() {
        let size = MemorySize::new(rat(7, 3), MemoryUnit::Megabyte);
        assert_eq!(size.convert_to(MemoryUnit::Megabyte), rat(7, 3));
    }

    #[test]
    fn common_unit_picks_smaller() {
        let a = MemorySize::from_integer(2, MemoryUnit::Kilobyte);
        let b = MemorySize::from_integer(3, MemoryUnit::Megabyte);
        let (av, bv, unit) = MemorySize::common_unit(&a, &b);
        assert_eq!(unit, MemoryUnit::Kilobyte);
        assert_eq!(av, rat(2, 1));
        assert_eq!(bv, rat(3072, 1));

        let (bv, av, unit) = MemorySize::common_unit(&b, &a);
        assert_eq!(unit, MemoryUnit::Kilobyte);
        assert_eq!(av, rat(2, 1));
        assert_eq!(bv, rat(3072, 1));
    }

    #[test]
    fn serialize_form() {
        let size = MemorySize::new(rat(9, 2), MemoryUnit::Kilobyte);
        assert_eq!(size.serialize_to_string(), "4.5 KB");
    }

    #[test]
    fn parse_form() {
        let size = MemorySize::parse("4.5 KB").unwrap();
        assert_eq!(size, MemorySize::new(rat(9, 2), MemoryUnit::Kilobyte));
    }

    #[test]
    fn parse_rejects_bad_unit() {
        assert!(MemorySize::parse("4 XB").is_err());
        assert!(MemorySize::parse("4KB").is_err());
        assert!(MemorySize::parse("four KB").is_err());
    }

    #[test]
    fn serde_uses_string_form() {
        let size = MemorySize::from_integer(4, MemoryUnit::Kilobyte);
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, "\"4 KB\"");
        let back: MemorySize = serde_json::from_str(&json).unwrap();
        assert_eq!(back, size);
    }

    proptest! {
        #[test]
        fn prop_serialize_roundtrip(n in -1_000_000i64..1_000_000, d in 0u32..10, unit_idx in 0usize..6) {
            let amount = BigRational::new(BigInt::from(n), BigInt::from(2).pow(d));
            let size = MemorySize::new(amount, MemoryUnit::ALL[unit_idx]);
            let back = MemorySize::parse(&size.serialize_to_string()).unwrap();
            prop_assert_eq!(back, size);
        }

        #[test]
        fn prop_conversion_roundtrip(n in 1i64..1_000_000, from in 0usize..6, to in 0usize..6) {
            let size = MemorySize::new(
                BigRational::from(BigInt::from(n)),
                MemoryUnit::ALL[from],
            );
            let converted = size.to_unit(MemoryUnit::ALL[to]);
            prop_assert_eq!(converted.convert_to(MemoryUnit::ALL[from]), size.amount);
        }
    }
}
