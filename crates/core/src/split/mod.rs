//! Cost-allocation strategies.
//!
//! Each strategy is a pure function from a payment total and a share
//! specification to the amount every listed participant owes:
//! - `even` - equal split among the listed participants (values ignored)
//! - `exact` - the specification is the owed amount, checked against the total
//! - `ratio` - each participant owes `total * ratio`, ratios summing to 1
//!
//! Splitting evenly among a subset is not a separate strategy: list only the
//! subset's ids in the share specification.

pub mod error;
pub mod methods;
pub mod strategy;

#[cfg(test)]
mod props;

use std::collections::BTreeMap;

use fairshare_shared::types::ParticipantId;
use rust_decimal::Decimal;

pub use error::SplitError;
pub use methods::{RATIO_TOLERANCE, even_split, exact_split, ratio_split};
pub use strategy::SplitStrategy;

/// Per-participant amounts: contributions, share specifications, or owed shares.
pub type ShareMap = BTreeMap<ParticipantId, Decimal>;
