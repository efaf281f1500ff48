//! Transfer request and grouped total types
//!
//! Grouped maps are `BTreeMap`s so iteration is sorted by key and identical
//! across runs.

use crate::errors::AssetError;
use crate::ids::{Address, AssetId, DestinationKey};
use crate::numeric::Amount;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One transfer request line
///
/// The amount stays a decimal string until grouping parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferAsset {
    pub to: Address,
    pub asset_id: AssetId,
    pub amount: String,
}

impl TransferAsset {
    pub fn new(
        to: impl Into<Address>,
        asset_id: impl Into<AssetId>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            asset_id: asset_id.into(),
            amount: amount.into(),
        }
    }

    /// Parse the amount string into an exact `Amount`.
    pub fn parsed_amount(&self) -> Result<Amount, AssetError> {
        Amount::parse(&self.amount)
    }

    pub fn destination_key(&self) -> DestinationKey {
        DestinationKey {
            to: self.to.clone(),
            asset_id: self.asset_id.clone(),
        }
    }
}

/// Accumulated amount sent to one destination in one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationTotal {
    pub asset_id: AssetId,
    pub amount: Amount,
    pub to: Address,
}

/// One line of the fee-adjusted output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAmount {
    pub amount: Amount,
    pub asset_id: AssetId,
}

/// Asset id -> accumulated amount
pub type AssetTotals = BTreeMap<AssetId, Amount>;

/// (destination, asset id) -> accumulated record
pub type DestinationTotals = BTreeMap<DestinationKey, DestinationTotal>;
