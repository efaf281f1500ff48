//! Exact decimal amounts
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! An `Amount` is never negative; every constructor enforces it.

use crate::errors::AssetError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Non-negative exact decimal amount of some asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Parse a decimal string such as `"1.5"`.
    ///
    /// Only plain ASCII digits with at most one `.` are accepted; signs,
    /// separators and exponents fail with `InvalidAmount`. Well-formed values
    /// beyond the `Decimal` range or scale fail with `Overflow`.
    pub fn parse(value: &str) -> Result<Self, AssetError> {
        check_plain_decimal(value).map_err(|reason| AssetError::invalid_amount(value, reason))?;
        Ok(Self(parse_in_range(value)?))
    }

    /// Validate a fee value. Negative fees fail with `InvalidFee`.
    pub fn fee(value: Decimal) -> Result<Self, AssetError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AssetError::invalid_fee(value.to_string(), "fee must not be negative"));
        }
        Ok(Self(value))
    }

    /// Parse a fee given as a decimal string.
    ///
    /// Same accepted format as [`Amount::parse`]; malformed or negative
    /// input fails with `InvalidFee`.
    pub fn parse_fee(value: &str) -> Result<Self, AssetError> {
        if value.starts_with('-') {
            return Err(AssetError::invalid_fee(value, "fee must not be negative"));
        }
        check_plain_decimal(value).map_err(|reason| AssetError::invalid_fee(value, reason))?;
        Ok(Self(parse_in_range(value)?))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Exact sum, `None` when the result leaves the `Decimal` range.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Convert to integer base units of a unit with `decimals` fractional digits.
    ///
    /// `1.5` with 9 decimals is `1_500_000_000`. Fails with `ExcessPrecision`
    /// instead of truncating sub-unit dust.
    pub fn to_base_units(&self, decimals: u32) -> Result<u128, AssetError> {
        let normalized = self.0.normalize();
        let scale = normalized.scale();
        if scale > decimals {
            return Err(AssetError::ExcessPrecision {
                value: normalized.to_string(),
                decimals,
            });
        }

        let overflow = || AssetError::Overflow {
            context: format!("{} does not fit in base units with {} decimals", normalized, decimals),
        };
        // Non-negative by construction, so the mantissa converts losslessly.
        let mantissa = u128::try_from(normalized.mantissa()).map_err(|_| overflow())?;
        let factor = 10u128.checked_pow(decimals - scale).ok_or_else(overflow)?;
        mantissa.checked_mul(factor).ok_or_else(overflow)
    }

    /// Inverse of [`Amount::to_base_units`].
    pub fn from_base_units(units: u128, decimals: u32) -> Result<Self, AssetError> {
        if decimals > MAX_SCALE {
            return Err(AssetError::Overflow {
                context: format!("{} decimals exceeds maximum scale {}", decimals, MAX_SCALE),
            });
        }
        let overflow = || AssetError::Overflow {
            context: format!("{} base units exceeds decimal range", units),
        };
        let mantissa = i128::try_from(units).map_err(|_| overflow())?;
        let decimal = Decimal::try_from_i128_with_scale(mantissa, decimals).map_err(|_| overflow())?;
        Ok(Self(decimal))
    }
}

/// Accept only `digits[.digits]`.
fn check_plain_decimal(value: &str) -> Result<(), &'static str> {
    if value.starts_with('-') {
        return Err("amount must not be negative");
    }
    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !fraction.map_or(true, all_digits) {
        return Err("expected ASCII digits with an optional decimal point");
    }
    Ok(())
}

/// Parse a string already known to be a plain decimal; any remaining
/// failure is a range or scale limit.
fn parse_in_range(value: &str) -> Result<Decimal, AssetError> {
    Decimal::from_str_exact(value).map_err(|e| AssetError::Overflow {
        context: format!("{} is outside the supported decimal range: {}", value, e),
    })
}

impl TryFrom<Decimal> for Amount {
    type Error = AssetError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AssetError::invalid_amount(value.to_string(), "amount must not be negative"));
        }
        Ok(Self(value))
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
