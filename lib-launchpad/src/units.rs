//! Exact decimal <-> base-unit conversion
//!
//! Amounts typed by a user ("1.5") are scaled by a fixed power of ten into
//! the integer representation the ledger uses. The conversion is done on
//! digit strings and 256-bit integers only; no floating point is involved.

use alloy_primitives::U256;
use thiserror::Error;

/// Decimal places of the launched token's supply
pub const SUPPLY_DECIMALS: u8 = 18;

/// Decimal places of the chain's native currency
pub const NATIVE_DECIMALS: u8 = 18;

/// Fixed payment sent with every launch: 0.11 native units in wei
pub const LAUNCH_FEE_WEI: U256 = U256::from_limbs([110_000_000_000_000_000, 0, 0, 0]);

/// Rejection reasons for decimal amount strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitsError {
    #[error("amount is empty")]
    Empty,

    #[error("unexpected character '{0}' in amount")]
    InvalidCharacter(char),

    #[error("amount contains more than one decimal point")]
    MultipleDecimalPoints,

    #[error("amount has no digits")]
    NoDigits,

    #[error("amount has {found} fractional digits, at most {max} allowed")]
    TooManyDecimals { found: usize, max: u8 },

    #[error("amount does not fit in 256 bits")]
    Overflow,
}

/// Parse a non-negative decimal string into base units.
///
/// Accepts `"12"`, `"12.5"`, `".5"` and `"12."`. Signs, exponents and
/// whitespace are rejected. Fractional digits beyond `decimals` are only
/// tolerated when they are zeros.
pub fn parse_units(text: &str, decimals: u8) -> Result<U256, UnitsError> {
    if text.is_empty() {
        return Err(UnitsError::Empty);
    }

    if let Some(bad) = text.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(UnitsError::InvalidCharacter(bad));
    }

    let mut parts = text.splitn(3, '.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return Err(UnitsError::MultipleDecimalPoints);
    }

    if integer.is_empty() && fraction.is_empty() {
        return Err(UnitsError::NoDigits);
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(UnitsError::TooManyDecimals {
            found: fraction.len(),
            max: decimals,
        });
    }

    let mut digits = String::with_capacity(integer.len() + decimals as usize);
    digits.push_str(integer);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat('0').take(decimals as usize - fraction.len()));

    U256::from_str_radix(&digits, 10).map_err(|_| UnitsError::Overflow)
}

/// Render base units back as a decimal string with trailing zeros trimmed.
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}
