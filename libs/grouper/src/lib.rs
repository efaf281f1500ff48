//! Asset Grouper — transfer aggregation for transaction construction
//!
//! Reshapes a flat list of transfer requests into the structures a
//! transaction builder consumes:
//! - Per-asset totals (`group_by_id`)
//! - Per-destination, per-asset totals (`group_by_destination`)
//! - Fee-adjusted per-asset output (`add_transaction_fee`)
//!
//! # Determinism
//! All operations are pure and synchronous. Totals use exact `Decimal`
//! arithmetic and `BTreeMap` (sorted iteration) throughout.

pub mod config;
pub mod grouper;

pub use config::GrouperConfig;
pub use grouper::AssetGrouper;

/// Crate version constant
pub const GROUPER_VERSION: &str = "1.0.0";
