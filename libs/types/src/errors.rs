//! Error types for transfer asset grouping
//!
//! Error taxonomy using thiserror

use thiserror::Error;

/// Errors raised while parsing amounts, grouping transfers or applying fees
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    #[error("Invalid fee '{value}': {reason}")]
    InvalidFee { value: String, reason: String },

    #[error("Arithmetic overflow: {context}")]
    Overflow { context: String },

    #[error("Amount {value} has more than {decimals} fractional digits")]
    ExcessPrecision { value: String, decimals: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AssetError {
    pub fn invalid_amount(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_fee(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFee {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
