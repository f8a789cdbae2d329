//! Ledger error types for validation and invariant errors.
//!
//! This module defines every error the engine surfaces to its caller:
//! amount and name validation, strategy lookup, split constraints,
//! participant and payment lookups, and settlement failures.

use fairshare_shared::types::{AmountError, ParticipantId, PaymentId};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::settlement::SettlementError;
use crate::split::{SplitError, SplitStrategy};

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    // ========== Amount Errors ==========
    /// Payment total must be strictly positive.
    #[error("Total amount must be larger than 0, got {0}")]
    NonPositiveTotal(Decimal),

    /// A contribution is negative.
    #[error("Contribution from {participant} cannot be negative: {amount}")]
    NegativeContribution {
        /// The contributing participant.
        participant: ParticipantId,
        /// The offending amount.
        amount: Decimal,
    },

    /// A share specification value is negative.
    #[error("Share for {participant} cannot be negative: {amount}")]
    NegativeShare {
        /// The participant the share belongs to.
        participant: ParticipantId,
        /// The offending amount.
        amount: Decimal,
    },

    /// A host value could not be converted into an amount.
    #[error(transparent)]
    Amount(#[from] AmountError),

    // ========== Participant Errors ==========
    /// Participant names must contain a non-whitespace character.
    #[error("Participant names must be non-empty")]
    InvalidName,

    /// A ledger needs somebody to share costs between.
    #[error("At least one participant is required")]
    NoParticipants,

    /// An id that is not registered in this ledger.
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    // ========== Payment Errors ==========
    /// The strategy name is not registered.
    #[error(
        "Unknown strategy '{0}'. Available strategies: {names}",
        names = SplitStrategy::names().join(", ")
    )]
    UnknownStrategy(String),

    /// The share specification violates the strategy's constraints.
    #[error("Invalid split: {0}")]
    InvalidSplit(#[from] SplitError),

    /// No payment with this id is recorded.
    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    // ========== Settlement Errors ==========
    /// Settlement failed.
    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveTotal(_)
            | Self::NegativeContribution { .. }
            | Self::NegativeShare { .. }
            | Self::Amount(_) => "INVALID_AMOUNT",
            Self::InvalidName => "INVALID_NAME",
            Self::NoParticipants => "NO_PARTICIPANTS",
            Self::UnknownParticipant(_) => "UNKNOWN_PARTICIPANT",
            Self::UnknownStrategy(_) => "UNKNOWN_STRATEGY",
            Self::InvalidSplit(err) => err.error_code(),
            Self::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
            Self::Settlement(err) => err.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 404 Not Found
            Self::PaymentNotFound(_) => 404,

            // 500 Internal Server Error - invariant or configuration failures
            Self::Settlement(
                SettlementError::Unbalanced { .. }
                | SettlementError::Unmatched { .. }
                | SettlementError::UnknownMethod(_),
            ) => 500,

            // 400 Bad Request - validation errors
            _ => 400,
        }
    }

    /// Returns true if this error signals a broken engine invariant rather
    /// than bad input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Settlement(SettlementError::Unbalanced { .. } | SettlementError::Unmatched { .. })
        )
    }
}
