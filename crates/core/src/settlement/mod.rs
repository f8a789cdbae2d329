//! Settlement of net balances into payment transfers.
//!
//! The greedy solver matches debtors against creditors, both sorted by
//! ascending amount, and emits at most `n - 1` transfers for `n`
//! participants with a non-zero balance.

pub mod error;
pub mod solver;
pub mod types;

#[cfg(test)]
mod solver_props;

pub use error::SettlementError;
pub use solver::{greedy_settlement, settle};
pub use types::{SettlementMethod, Transfer};
