//! Settlement error types.

use fairshare_shared::types::ParticipantId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced while turning balances into transfers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettlementError {
    /// Balances do not sum to zero.
    #[error("Invalid balances: total net balance is {total}, must be zero")]
    Unbalanced {
        /// Sum of all balances.
        total: Decimal,
    },

    /// The matching walk finished with a participant still unsettled.
    #[error("Balance of {participant} left unsettled: {remaining}")]
    Unmatched {
        /// The participant left with a remainder.
        participant: ParticipantId,
        /// The unsettled magnitude.
        remaining: Decimal,
    },

    /// Balances too large to add up.
    #[error("Balances are too large to settle")]
    Overflow,

    /// No settlement method is registered under this name.
    #[error(
        "Unknown settlement method '{0}'. Available methods: {names}",
        names = super::SettlementMethod::names().join(", ")
    )]
    UnknownMethod(String),
}

impl SettlementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unbalanced { .. } | Self::Unmatched { .. } => "UNBALANCED_LEDGER",
            Self::Overflow => "INVALID_AMOUNT",
            Self::UnknownMethod(_) => "UNKNOWN_SETTLEMENT_METHOD",
        }
    }
}
