//! Settlement domain types.

use std::collections::BTreeMap;

use fairshare_shared::types::ParticipantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SettlementError;
use super::solver::greedy_settlement;

/// A single debtor-to-creditor payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// The participant paying (a net debtor).
    pub from: ParticipantId,
    /// The participant receiving (a net creditor).
    pub to: ParticipantId,
    /// Amount to pay, rounded to currency precision. Always positive.
    pub amount: Decimal,
}

impl Transfer {
    /// Creates a new transfer.
    #[must_use]
    pub const fn new(from: ParticipantId, to: ParticipantId, amount: Decimal) -> Self {
        Self { from, to, amount }
    }
}

/// Algorithms available for settling a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementMethod {
    /// Smallest-first greedy matching of debtors and creditors.
    #[default]
    Greedy,
}

impl SettlementMethod {
    /// Every registered method.
    pub const ALL: [Self; 1] = [Self::Greedy];

    /// Returns the registered name of this method.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
        }
    }

    /// Returns the names of every registered method.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.name()).collect()
    }

    /// Settles the given balances with this method.
    ///
    /// # Errors
    ///
    /// Returns a [`SettlementError`] if the balances do not net to zero.
    pub fn settle(
        self,
        balances: &BTreeMap<ParticipantId, Decimal>,
    ) -> Result<Vec<Transfer>, SettlementError> {
        match self {
            Self::Greedy => greedy_settlement(balances),
        }
    }
}

impl std::str::FromStr for SettlementMethod {
    type Err = SettlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| SettlementError::UnknownMethod(s.to_string()))
    }
}

impl std::fmt::Display for SettlementMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
