//! Asset Grouper — folds transfer requests into grouped totals
//!
//! Three independent operations over caller-owned data:
//! - `group_by_id`: sum amounts per asset id
//! - `group_by_destination`: sum amounts per (destination, asset id)
//! - `add_transaction_fee`: add the fee to the native asset total and
//!   flatten the map into the fee-adjusted output
//!
//! Every call builds its own map; nothing is shared between calls. A failure
//! aborts the whole operation and no partial result is returned.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use types::errors::AssetError;
use types::ids::AssetId;
use types::numeric::Amount;
use types::transfer::{AssetAmount, AssetTotals, DestinationTotal, DestinationTotals, TransferAsset};

use crate::config::GrouperConfig;

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Sum transfer amounts per asset id.
///
/// An empty list yields an empty map. The first malformed amount fails the
/// whole call with `InvalidAmount`.
pub fn group_by_id(list: &[TransferAsset]) -> Result<AssetTotals, AssetError> {
    let mut totals = AssetTotals::new();

    for transfer in list {
        let amount = parsed(transfer)?;
        let total = totals.entry(transfer.asset_id.clone()).or_insert(Amount::ZERO);
        accumulate(total, amount, &transfer.asset_id)?;
    }

    debug!(items = list.len(), assets = totals.len(), "Grouped transfers by asset");
    Ok(totals)
}

/// Sum transfer amounts per (destination, asset id) pair.
///
/// Repeated pairs add into the stored record's amount.
pub fn group_by_destination(list: &[TransferAsset]) -> Result<DestinationTotals, AssetError> {
    let mut totals = DestinationTotals::new();

    for transfer in list {
        let amount = parsed(transfer)?;
        let record = totals
            .entry(transfer.destination_key())
            .or_insert_with(|| DestinationTotal {
                asset_id: transfer.asset_id.clone(),
                amount: Amount::ZERO,
                to: transfer.to.clone(),
            });
        accumulate(&mut record.amount, amount, &transfer.asset_id)?;
    }

    debug!(
        items = list.len(),
        destinations = totals.len(),
        "Grouped transfers by destination"
    );
    Ok(totals)
}

/// Add `fee` to the `native_asset_id` total and flatten the map.
///
/// Inserts a native entry equal to the fee when none exists. The fee is
/// validated before `totals` is touched, so a rejected fee leaves the map
/// unchanged. Output is sorted by asset id.
pub fn add_transaction_fee(
    totals: &mut AssetTotals,
    fee: Decimal,
    native_asset_id: &AssetId,
) -> Result<Vec<AssetAmount>, AssetError> {
    let fee = Amount::fee(fee).inspect_err(|e| warn!(error = %e, "Rejected transaction fee"))?;

    match totals.get_mut(native_asset_id) {
        Some(native) => accumulate(native, fee, native_asset_id)?,
        None => {
            totals.insert(native_asset_id.clone(), fee);
        }
    }

    debug!(
        native_asset = %native_asset_id,
        fee = %fee,
        assets = totals.len(),
        "Applied transaction fee"
    );

    Ok(totals
        .iter()
        .map(|(asset_id, amount)| AssetAmount {
            amount: *amount,
            asset_id: asset_id.clone(),
        })
        .collect())
}

fn parsed(transfer: &TransferAsset) -> Result<Amount, AssetError> {
    transfer.parsed_amount().inspect_err(|e| {
        warn!(
            to = %transfer.to,
            asset_id = %transfer.asset_id,
            error = %e,
            "Rejected transfer amount"
        )
    })
}

/// Add `amount` into `total` in place.
fn accumulate(total: &mut Amount, amount: Amount, asset_id: &AssetId) -> Result<(), AssetError> {
    *total = total.checked_add(amount).ok_or_else(|| AssetError::Overflow {
        context: format!("total of asset {} exceeds decimal range", asset_id),
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Configured grouper
// ---------------------------------------------------------------------------

/// Grouper bound to a chain's native asset.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct AssetGrouper {
    config: GrouperConfig,
}

impl AssetGrouper {
    /// Create a grouper with the given configuration.
    ///
    /// Fails with `InvalidConfig` when the configuration does not validate.
    pub fn new(config: GrouperConfig) -> Result<Self, AssetError> {
        config
            .validate()
            .inspect_err(|e| warn!(error = %e, "Rejected grouper configuration"))?;
        Ok(Self::from_validated(config))
    }

    /// Create a grouper with default configuration.
    pub fn with_defaults() -> Self {
        Self::from_validated(GrouperConfig::default())
    }

    fn from_validated(config: GrouperConfig) -> Self {
        info!(
            native_asset = %config.native_asset_id,
            base_unit_decimals = config.base_unit_decimals,
            "AssetGrouper initialized"
        );
        Self { config }
    }

    pub fn config(&self) -> &GrouperConfig {
        &self.config
    }

    pub fn native_asset_id(&self) -> &AssetId {
        &self.config.native_asset_id
    }

    pub fn group_by_id(&self, list: &[TransferAsset]) -> Result<AssetTotals, AssetError> {
        group_by_id(list)
    }

    pub fn group_by_destination(
        &self,
        list: &[TransferAsset],
    ) -> Result<DestinationTotals, AssetError> {
        group_by_destination(list)
    }

    /// Add the fee to this grouper's native asset.
    pub fn add_transaction_fee(
        &self,
        totals: &mut AssetTotals,
        fee: Decimal,
    ) -> Result<Vec<AssetAmount>, AssetError> {
        add_transaction_fee(totals, fee, &self.config.native_asset_id)
    }

    /// `group_by_id` followed by `add_transaction_fee` on the fresh map.
    pub fn group_and_add_fee(
        &self,
        list: &[TransferAsset],
        fee: Decimal,
    ) -> Result<Vec<AssetAmount>, AssetError> {
        // Validate first so a bad fee fails before any amount is parsed.
        Amount::fee(fee)?;
        let mut totals = group_by_id(list)?;
        self.add_transaction_fee(&mut totals, fee)
    }

    /// Convert an amount into base units of the configured precision.
    pub fn base_units(&self, amount: Amount) -> Result<u128, AssetError> {
        amount.to_base_units(self.config.base_unit_decimals)
    }
}

impl Default for AssetGrouper {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn amt(s: &str) -> Amount {
        Amount::parse(s).unwrap()
    }

    fn eth() -> AssetId {
        AssetId::new("ETH")
    }

    #[test]
    fn test_group_by_id_sums_duplicates() {
        let list = vec![
            TransferAsset::new("A", "ETH", "1.5"),
            TransferAsset::new("A", "ETH", "2.5"),
        ];
        let totals = group_by_id(&list).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&eth()].as_decimal(), dec("4.0"));
    }

    #[test]
    fn test_group_by_id_empty() {
        assert!(group_by_id(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_group_by_id_distinct_assets() {
        let list = vec![
            TransferAsset::new("A", "ETH", "1"),
            TransferAsset::new("B", "USDC", "10"),
            TransferAsset::new("C", "ETH", "0.25"),
        ];
        let totals = group_by_id(&list).unwrap();
        assert_eq!(totals[&eth()], amt("1.25"));
        assert_eq!(totals[&AssetId::new("USDC")], amt("10"));
    }

    #[test]
    fn test_group_by_id_invalid_amount() {
        let list = vec![
            TransferAsset::new("A", "ETH", "1"),
            TransferAsset::new("A", "ETH", "1.x"),
        ];
        assert!(matches!(
            group_by_id(&list),
            Err(AssetError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_group_by_id_overflow() {
        let max = Decimal::MAX.to_string();
        let list = vec![
            TransferAsset::new("A", "ETH", max.as_str()),
            TransferAsset::new("B", "ETH", "1"),
        ];
        assert!(matches!(
            group_by_id(&list),
            Err(AssetError::Overflow { .. })
        ));
    }

    #[test]
    fn test_group_by_destination_accumulates() {
        let list = vec![
            TransferAsset::new("A", "ETH", "1.5"),
            TransferAsset::new("A", "ETH", "2.5"),
        ];
        let totals = group_by_destination(&list).unwrap();
        assert_eq!(totals.len(), 1);

        let record = totals.values().next().unwrap();
        assert_eq!(record.asset_id, eth());
        assert_eq!(record.amount.as_decimal(), dec("4.0"));
        assert_eq!(record.to.as_str(), "A");
    }

    #[test]
    fn test_group_by_destination_separates_pairs() {
        let list = vec![
            TransferAsset::new("AB", "C", "1"),
            TransferAsset::new("A", "BC", "2"),
            TransferAsset::new("A", "C", "3"),
        ];
        let totals = group_by_destination(&list).unwrap();
        assert_eq!(totals.len(), 3);
    }

    #[test]
    fn test_group_by_destination_invalid_amount() {
        let list = vec![TransferAsset::new("A", "ETH", "-1")];
        assert!(matches!(
            group_by_destination(&list),
            Err(AssetError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_add_fee_to_existing_native() {
        let mut totals = AssetTotals::new();
        totals.insert(eth(), amt("4.0"));

        let output = add_transaction_fee(&mut totals, dec("0.1"), &eth()).unwrap();
        assert_eq!(
            output,
            vec![AssetAmount {
                amount: amt("4.1"),
                asset_id: eth(),
            }]
        );
    }

    #[test]
    fn test_add_fee_inserts_native() {
        let mut totals = AssetTotals::new();
        totals.insert(AssetId::new("USDC"), amt("10"));

        let output = add_transaction_fee(&mut totals, dec("0.01"), &eth()).unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(totals[&eth()], amt("0.01"));
        assert_eq!(totals[&AssetId::new("USDC")], amt("10"));
    }

    #[test]
    fn test_add_negative_fee_leaves_map_untouched() {
        let mut totals = AssetTotals::new();
        totals.insert(eth(), amt("4.0"));
        let before = totals.clone();

        let result = add_transaction_fee(&mut totals, dec("-0.1"), &eth());
        assert!(matches!(result, Err(AssetError::InvalidFee { .. })));
        assert_eq!(totals, before);
    }

    #[test]
    fn test_add_fee_overflow_leaves_map_untouched() {
        let mut totals = AssetTotals::new();
        totals.insert(eth(), Amount::try_from(Decimal::MAX).unwrap());
        totals.insert(AssetId::new("USDC"), amt("3"));
        let before = totals.clone();

        let result = add_transaction_fee(&mut totals, Decimal::ONE, &eth());
        assert!(matches!(result, Err(AssetError::Overflow { .. })));
        assert_eq!(totals, before);
    }

    #[test]
    fn test_group_by_destination_overflow() {
        let max = Decimal::MAX.to_string();
        let list = vec![
            TransferAsset::new("A", "ETH", max.as_str()),
            TransferAsset::new("A", "ETH", "1"),
        ];
        assert!(matches!(
            group_by_destination(&list),
            Err(AssetError::Overflow { .. })
        ));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = AssetGrouper::new(GrouperConfig::default().with_native_asset(""));
        assert!(matches!(result, Err(AssetError::InvalidConfig(_))));

        let result = AssetGrouper::new(GrouperConfig::default().with_base_unit_decimals(29));
        assert!(matches!(result, Err(AssetError::InvalidConfig(_))));
    }

    #[test]
    fn test_grouper_uses_configured_native_asset() {
        let grouper = AssetGrouper::new(GrouperConfig::default().with_native_asset("FUEL")).unwrap();
        let mut totals = AssetTotals::new();
        totals.insert(eth(), amt("1"));

        let output = grouper.add_transaction_fee(&mut totals, dec("0.5")).unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(totals[&AssetId::new("FUEL")], amt("0.5"));
        assert_eq!(totals[&eth()], amt("1"));
    }

    #[test]
    fn test_group_and_add_fee() {
        let grouper = AssetGrouper::new(GrouperConfig::default().with_native_asset("ETH")).unwrap();
        let list = vec![
            TransferAsset::new("A", "ETH", "1.5"),
            TransferAsset::new("B", "ETH", "2.5"),
        ];
        let output = grouper.group_and_add_fee(&list, dec("0.1")).unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].amount, amt("4.1"));
    }

    #[test]
    fn test_group_and_add_fee_rejects_negative_fee_first() {
        let grouper = AssetGrouper::with_defaults();
        let list = vec![TransferAsset::new("A", "ETH", "bad")];
        assert!(matches!(
            grouper.group_and_add_fee(&list, dec("-1")),
            Err(AssetError::InvalidFee { .. })
        ));
    }

    #[test]
    fn test_base_units_uses_config() {
        let grouper = AssetGrouper::new(GrouperConfig::default().with_base_unit_decimals(6)).unwrap();
        assert_eq!(grouper.base_units(amt("4.1")).unwrap(), 4_100_000);
    }
}
