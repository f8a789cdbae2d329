//! Amount validation for payments.

use fairshare_shared::types::{AmountError, checked_sum};
use rust_decimal::Decimal;

use crate::ledger::LedgerError;
use crate::split::ShareMap;

/// Validates contributions and share specification amounts.
///
/// Returns the payment total on success.
///
/// # Errors
///
/// - [`LedgerError::Amount`] if the contributions overflow when added up
/// - [`LedgerError::NonPositiveTotal`] if the contributions sum to zero or less
/// - [`LedgerError::NegativeContribution`] for any negative contribution
/// - [`LedgerError::NegativeShare`] for any negative share value
pub fn validate_amounts(
    contributions: &ShareMap,
    share_spec: &ShareMap,
) -> Result<Decimal, LedgerError> {
    let total = checked_sum(contributions.values().copied()).ok_or(AmountError::Overflow)?;
    if total <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveTotal(total));
    }

    if let Some((participant, amount)) = contributions.iter().find(|(_, a)| **a < Decimal::ZERO) {
        return Err(LedgerError::NegativeContribution {
            participant: *participant,
            amount: *amount,
        });
    }

    if let Some((participant, amount)) = share_spec.iter().find(|(_, a)| **a < Decimal::ZERO) {
        return Err(LedgerError::NegativeShare {
            participant: *participant,
            amount: *amount,
        });
    }

    Ok(total)
}
