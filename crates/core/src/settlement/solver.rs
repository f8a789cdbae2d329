//! Greedy minimum-transfer settlement.
//!
//! 1. Partition participants into creditors (balance > 0) and debtors
//!    (balance < 0, kept as a positive debt).
//! 2. Sort both ascending by amount. Equal amounts keep participant-id order.
//! 3. Walk both lists with one cursor each, paying `min(debt, credit)` from
//!    the current debtor to the current creditor and advancing whichever
//!    side reaches zero (possibly both).
//!
//! The smallest-first order decides which pairs settle; it is part of the
//! observable output, not an implementation detail.

use std::collections::BTreeMap;

use fairshare_shared::types::money::{is_negligible, round_currency};
use fairshare_shared::types::{ParticipantId, TOLERANCE, checked_sum};
use rust_decimal::Decimal;

use super::error::SettlementError;
use super::types::{SettlementMethod, Transfer};

/// Settles balances with the default method.
///
/// # Errors
///
/// Returns [`SettlementError::Unbalanced`] if the balances do not sum to zero.
pub fn settle(
    balances: &BTreeMap<ParticipantId, Decimal>,
) -> Result<Vec<Transfer>, SettlementError> {
    SettlementMethod::default().settle(balances)
}

/// Credits minus debts. Each side is summed separately so a zero-sum set of
/// large balances does not overflow part way through.
fn net_total(balances: &BTreeMap<ParticipantId, Decimal>) -> Result<Decimal, SettlementError> {
    let credits = checked_sum(balances.values().copied().filter(|b| *b > Decimal::ZERO));
    let debts = checked_sum(
        balances
            .values()
            .filter(|b| **b < Decimal::ZERO)
            .map(|b| -*b),
    );

    match (credits, debts) {
        (Some(credits), Some(debts)) => Ok(credits - debts),
        _ => Err(SettlementError::Overflow),
    }
}

/// Computes a minimal list of transfers with the greedy algorithm.
///
/// Balances within the tolerance of zero are treated as settled. Transfers
/// whose amount rounds to zero at currency precision are not emitted.
///
/// # Errors
///
/// Returns [`SettlementError::Unbalanced`] if the balances do not sum to zero
/// within tolerance, [`SettlementError::Overflow`] if either side of the
/// ledger is too large to add up, or [`SettlementError::Unmatched`] if a participant is
/// left with a remainder once either side is exhausted.
pub fn greedy_settlement(
    balances: &BTreeMap<ParticipantId, Decimal>,
) -> Result<Vec<Transfer>, SettlementError> {
    let total = net_total(balances)?;
    if !is_negligible(total) {
        return Err(SettlementError::Unbalanced { total });
    }

    let mut creditors: Vec<(ParticipantId, Decimal)> = balances
        .iter()
        .filter(|(_, balance)| **balance > TOLERANCE)
        .map(|(id, balance)| (*id, *balance))
        .collect();
    let mut debtors: Vec<(ParticipantId, Decimal)> = balances
        .iter()
        .filter(|(_, balance)| **balance < -TOLERANCE)
        .map(|(id, balance)| (*id, -*balance))
        .collect();

    // Stable sorts: ties keep the map's participant-id order.
    creditors.sort_by(|a, b| a.1.cmp(&b.1));
    debtors.sort_by(|a, b| a.1.cmp(&b.1));

    let mut transfers = Vec::with_capacity(creditors.len() + debtors.len());
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let (debtor, debt) = debtors[i];
        let (creditor, credit) = creditors[j];
        let amount = debt.min(credit);

        let rounded = round_currency(amount);
        if !rounded.is_zero() {
            transfers.push(Transfer::new(debtor, creditor, rounded));
        }

        debtors[i].1 = debt - amount;
        creditors[j].1 = credit - amount;

        if is_negligible(debtors[i].1) {
            i += 1;
        }
        if is_negligible(creditors[j].1) {
            j += 1;
        }
    }

    if let Some((participant, remaining)) = debtors[i..]
        .iter()
        .chain(&creditors[j..])
        .find(|(_, remaining)| !is_negligible(*remaining))
    {
        return Err(SettlementError::Unmatched {
            participant: *participant,
            remaining: *remaining,
        });
    }

    tracing::debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = transfers.len(),
        "settlement computed"
    );

    Ok(transfers)
}
