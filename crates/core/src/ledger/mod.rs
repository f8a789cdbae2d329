//! Shared-expense ledger.
//!
//! This module holds the stateful side of the engine:
//! - Participants and their registration
//! - Net balance computation over recorded payments
//! - The `Ledger` service tying payments to settlement
//! - Error types for ledger operations

pub mod balance;
pub mod error;
pub mod participant;
pub mod service;

#[cfg(test)]
mod service_props;

pub use balance::{BalanceSheet, compute_net_balances};
pub use error::LedgerError;
pub use participant::Participant;
pub use service::{Ledger, SettlementReport};
