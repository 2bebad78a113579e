//! Exact decimal parsing and rendering over arbitrary-precision rationals.
//!
//! Memory-size and block-count arithmetic must not lose precision: address
//! spaces and nested-indirection block counts routinely exceed 2^53, where
//! `f64` starts dropping integers. All such quantities are carried as
//! [`BigRational`] and only rendered as decimal text at the edge.
//!
//! Rendering is exact whenever the value has a terminating decimal
//! expansion (denominator of the form 2^a·5^b — which covers every unit
//! conversion, since the scale factors are 8 and 1024). Non-terminating
//! values can only arise in derived quantities; those are rounded to
//! [`MAX_FRACTION_DIGITS`] fractional digits, half away from zero.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use oslab_error::{Result, SimError};

/// Fractional digits kept when a value has no terminating expansion.
pub const MAX_FRACTION_DIGITS: usize = 40;

/// Parse a decimal string (`"-12.5"`, `"3"`, `"4.25e3"`) into an exact
/// rational.
pub fn parse_decimal(s: &str) -> Result<BigRational> {
    let original = s;
    let s = s.trim();
    if s.is_empty() {
        return Err(invalid(original));
    }

    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => {
            let exp: i64 = s[pos + 1..].parse().map_err(|_| invalid(original))?;
            if !(-10_000..=10_000).contains(&exp) {
                return Err(invalid(original));
            }
            (&s[..pos], exp)
        }
        None => (s, 0),
    };

    let (sign, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid(original));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid(original));
    }

    let joined = format!("{int_part}{frac_part}");
    let numer: BigInt = joined.parse().map_err(|_| invalid(original))?;
    let numer = numer * BigInt::from(sign);

    // value = numer * 10^(exponent - frac_len)
    let shift = exponent - frac_part.len() as i64;
    let ten = BigInt::from(10);
    let value = if shift >= 0 {
        BigRational::from(numer * ten.pow(shift.unsigned_abs() as u32))
    } else {
        BigRational::new(numer, ten.pow(shift.unsigned_abs() as u32))
    };
    Ok(value)
}

fn invalid(s: &str) -> SimError {
    SimError::InvalidAmount {
        amount: s.to_owned(),
    }
}

/// Render a rational as decimal text.
///
/// Exact for terminating expansions; otherwise rounded to
/// [`MAX_FRACTION_DIGITS`] fractional digits. The output parses back via
/// [`parse_decimal`].
pub fn format_decimal(value: &BigRational) -> String {
    if value.is_zero() {
        return "0".to_owned();
    }

    let negative = value.is_negative();
    let numer = value.numer().abs().to_biguint().unwrap_or_default();
    let denom = value.denom().abs().to_biguint().unwrap_or_default();

    let (digits, scale) = match terminating_scale(&denom) {
        Some(scale) => {
            // numer / denom == numer * 10^scale / denom / 10^scale, and the
            // inner division is exact by construction.
            let scaled = numer * BigUint::from(10u32).pow(scale) / denom;
            (scaled, scale)
        }
        None => {
            let scale = MAX_FRACTION_DIGITS as u32;
            let scaled = numer * BigUint::from(10u32).pow(scale);
            let (q, r) = (scaled.clone() / &denom, scaled % &denom);
            // Round half away from zero.
            let rounded = if r * 2u32 >= denom { q + 1u32 } else { q };
            (rounded, scale)
        }
    };

    let mut text = digits.to_string();
    let scale = scale as usize;
    if text.len() <= scale {
        text.insert_str(0, &"0".repeat(scale - text.len() + 1));
    }
    if scale > 0 {
        text.insert(text.len() - scale, '.');
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if negative && text != "0" {
        text.insert(0, '-');
    }
    text
}

/// The power of ten needed to clear the denominator, if it only contains
/// the prime factors 2 and 5.
fn terminating_scale(denom: &BigUint) -> Option<u32> {
    let mut d = denom.clone();
    let two = BigUint::from(2u32);
    let five = BigUint::from(5u32);
    let mut twos = 0u32;
    let mut fives = 0u32;
    while (&d % &two).is_zero() {
        d /= &two;
        twos += 1;
    }
    while (&d % &five).is_zero() {
        d /= &five;
        fives += 1;
    }
    d.is_one().then_some(twos.max(fives))
}

/// Smallest `k` with `2^k >= value`, for positive `value`.
pub fn ceil_log2(value: &BigRational) -> Result<u64> {
    if !value.is_positive() {
        return Err(SimError::internal(format!(
            "ceil_log2 of non-positive value {value}"
        )));
    }
    let numer = value.numer().abs().to_biguint().unwrap_or_default();
    let denom = value.denom().abs().to_biguint().unwrap_or_default();

    // 2^k >= n/d  <=>  2^k * d >= n. Bit lengths bound k within one.
    let mut k = numer.bits().saturating_sub(denom.bits());
    while (BigUint::one() << k) * &denom < numer {
        k += 1;
    }
    Ok(k)
}

/// Exact `log2` for powers of two; `None` otherwise.
pub fn exact_log2(value: &BigUint) -> Option<u64> {
    if value.is_zero() || value.count_ones() != 1 {
        return None;
    }
    Some(value.bits() - 1)
}

/// Parse a whole number out of a rational, if it is one.
pub fn as_integer(value: &BigRational) -> Option<BigInt> {
    value.is_integer().then(|| value.to_integer())
}

/// Serde adapter rendering a `BigRational` as its decimal string.
pub mod rational_string {
    use super::{format_decimal, parse_decimal, BigRational};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &BigRational, ser: S) -> Result<S::Ok, S::Error> {
        format_decimal(value).serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<BigRational, D::Error> {
        let text = String::deserialize(de)?;
        parse_decimal(&text).map_err(serde::de::Error::custom)
    }
}
