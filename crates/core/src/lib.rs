//! Core ledger engine for Fairshare.
//!
//! This crate contains pure computation with ZERO I/O dependencies.
//! Payments, split strategies, balances, and settlement all live here.
//!
//! # Modules
//!
//! - `payment` - Payment validation and construction
//! - `split` - Even, exact, and ratio split strategies
//! - `ledger` - Participants, net balances, and the ledger service
//! - `settlement` - Debtor-to-creditor transfer solving

pub mod ledger;
pub mod payment;
pub mod settlement;
pub mod split;

pub use ledger::{Ledger, LedgerError, Participant, SettlementReport};
pub use payment::{Payment, PaymentRequest};
pub use settlement::{SettlementMethod, Transfer};
pub use split::SplitStrategy;
