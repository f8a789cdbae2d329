//! Decimal money helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal`; `f64` values coming from a host
//! layer are converted once, at the boundary, with [`amount_from_f64`].

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places amounts are rounded to for display and transfers.
pub const CURRENCY_SCALE: u32 = 2;

/// Absolute tolerance for every "sums to" comparison (1e-9).
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// Errors converting a host number into an amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountError {
    /// NaN, infinite, or outside the representable decimal range.
    #[error("Amount must be a finite number, got {0}")]
    NotFinite(String),

    /// A sum of amounts exceeds the representable decimal range.
    #[error("Amounts are too large to add up")]
    Overflow,
}

/// Rounds an amount to [`CURRENCY_SCALE`] using Banker's Rounding.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    round_to(amount, CURRENCY_SCALE)
}

/// Rounds an amount to `scale` decimal places using Banker's Rounding.
#[must_use]
pub fn round_to(amount: Decimal, scale: u32) -> Decimal {
    amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven)
}

/// Returns true if `a` and `b` differ by no more than [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Returns true if the amount is within [`TOLERANCE`] of zero.
#[must_use]
pub fn is_negligible(amount: Decimal) -> bool {
    amount.abs() <= TOLERANCE
}

/// Adds up amounts, returning `None` instead of panicking on overflow.
#[must_use]
pub fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}

/// Converts a host `f64` into a `Decimal`.
///
/// # Errors
///
/// Returns [`AmountError::NotFinite`] for NaN, infinities, and values that
/// do not fit in a `Decimal`.
pub fn amount_from_f64(value: f64) -> Result<Decimal, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::NotFinite(value.to_string()));
    }
    Decimal::from_f64(value).ok_or_else(|| AmountError::NotFinite(value.to_string()))
}
