//! Types library for transfer asset grouping
//!
//! Core type definitions shared by the grouping layer and the transaction
//! builder that consumes its output.
//!
//! # Version
//! v1.0.0
//!
//! # Modules
//! - `ids`: Identifiers (AssetId, Address, DestinationKey)
//! - `numeric`: Non-negative exact decimal amounts
//! - `transfer`: Transfer requests and grouped totals
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod transfer;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::transfer::*;
    pub use crate::errors::*;
}
