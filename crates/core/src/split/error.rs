//! Split strategy error types.

use fairshare_shared::types::ParticipantId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Strategy-specific constraint violations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SplitError {
    /// The share specification lists nobody to split between.
    #[error("Cannot split a payment between zero participants")]
    NoParticipants,

    /// Exact shares do not add up to the payment total.
    #[error("Exact shares must sum to the payment total. Total: {total}, shares: {allocated}")]
    ExactSumMismatch {
        /// The payment total.
        total: Decimal,
        /// Sum of the exact shares.
        allocated: Decimal,
    },

    /// A ratio lies outside `[0, 1]`.
    #[error("Share ratio for {participant} must be between 0 and 1, got {ratio}")]
    RatioOutOfRange {
        /// The participant whose ratio is invalid.
        participant: ParticipantId,
        /// The offending ratio.
        ratio: Decimal,
    },

    /// Ratios do not add up to 1.
    #[error("Share ratios must sum to 1, got {sum}")]
    RatioSumMismatch {
        /// Sum of all ratios.
        sum: Decimal,
    },

    /// Shares exceed the representable decimal range.
    #[error("Shares are too large to compute")]
    Overflow,
}

impl SplitError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        "INVALID_SPLIT"
    }
}
