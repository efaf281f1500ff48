//! Grouper configuration
//!
//! The native asset id is injected here rather than read from a global, so
//! callers on other chains (and tests) can substitute their own identifier.

use serde::{Deserialize, Serialize};
use types::errors::AssetError;
use types::ids::AssetId;

/// Native base asset id: 32 zero bytes, hex encoded.
pub const DEFAULT_NATIVE_ASSET_ID: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Fractional digits of the native unit.
pub const DEFAULT_BASE_UNIT_DECIMALS: u32 = 9;

/// Configuration for the asset grouper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrouperConfig {
    /// Asset that pays transaction fees.
    pub native_asset_id: AssetId,
    /// Fractional digits used when converting totals to base units.
    pub base_unit_decimals: u32,
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            native_asset_id: AssetId::new(DEFAULT_NATIVE_ASSET_ID),
            base_unit_decimals: DEFAULT_BASE_UNIT_DECIMALS,
        }
    }
}

impl GrouperConfig {
    /// Replace the native asset id.
    pub fn with_native_asset(mut self, asset_id: impl Into<AssetId>) -> Self {
        self.native_asset_id = asset_id.into();
        self
    }

    pub fn with_base_unit_decimals(mut self, decimals: u32) -> Self {
        self.base_unit_decimals = decimals;
        self
    }

    /// Load from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AssetError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no grouper can work with.
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.native_asset_id.as_str().is_empty() {
            return Err(AssetError::InvalidConfig(
                "native_asset_id must not be empty".to_string(),
            ));
        }
        // rust_decimal caps scale at 28
        if self.base_unit_decimals > 28 {
            return Err(AssetError::InvalidConfig(format!(
                "base_unit_decimals {} exceeds 28",
                self.base_unit_decimals
            )));
        }
        Ok(())
    }
}
