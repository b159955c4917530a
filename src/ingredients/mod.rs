//! Ingredient-name canonicalization and pantry reconciliation.
//!
//! Both halves are pure functions: [`normalize`]/[`parse_available`] turn
//! free-form text into canonical names, [`reconcile`] partitions a recipe's
//! ingredient list into "have" and "need to buy" against those names.

mod normalize;
mod reconcile;

pub use normalize::{normalize, parse_available};
pub use reconcile::{reconcile, ReconciliationResult};
