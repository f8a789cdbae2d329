//! Net balance calculations.
//!
//! Balances are a pure fold over the participants and payments: every
//! participant starts at zero, each payment adds its contributions and
//! subtracts its owed shares. Nothing is cached between computations.

use std::collections::BTreeMap;

use fairshare_shared::types::{AmountError, ParticipantId};
use fairshare_shared::types::money::{is_negligible, round_to};
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::LedgerError;
use super::participant::Participant;
use crate::payment::Payment;

/// Net balance per participant.
///
/// Positive: the group owes this participant. Negative: this participant
/// owes the group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BalanceSheet(BTreeMap<ParticipantId, Decimal>);

impl BalanceSheet {
    /// Returns the balance of one participant.
    #[must_use]
    pub fn get(&self, id: &ParticipantId) -> Option<Decimal> {
        self.0.get(id).copied()
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<ParticipantId, Decimal> {
        &self.0
    }

    /// Iterates balances in participant-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &Decimal)> {
        self.0.iter()
    }

    /// Number of participants on the sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sheet has no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all balances. Zero (within tolerance) for a consistent ledger.
    ///
    /// Credits and debts are added up separately; a side that exceeds the
    /// decimal range saturates.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let (credits, debts) = self.0.values().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(credits, debts), balance| {
                if balance.is_sign_negative() {
                    (credits, debts.saturating_add(-*balance))
                } else {
                    (credits.saturating_add(*balance), debts)
                }
            },
        );
        credits - debts
    }

    /// Returns true if the balances net to zero within tolerance.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        is_negligible(self.total())
    }

    /// Balances rounded to `scale` decimal places for display.
    #[must_use]
    pub fn rounded(&self, scale: u32) -> BTreeMap<ParticipantId, Decimal> {
        self.0
            .iter()
            .map(|(id, balance)| (*id, round_to(*balance, scale)))
            .collect()
    }
}

impl From<BalanceSheet> for BTreeMap<ParticipantId, Decimal> {
    fn from(sheet: BalanceSheet) -> Self {
        sheet.0
    }
}

/// Computes every participant's net balance from scratch.
///
/// Participants without payments end at zero. The result depends only on
/// the inputs, so repeated calls return identical sheets.
///
/// # Errors
///
/// Returns [`LedgerError::UnknownParticipant`] if a payment references an
/// id missing from `participants`, or [`LedgerError::Amount`] if a balance
/// leaves the decimal range.
pub fn compute_net_balances(
    participants: &[Participant],
    payments: &[Payment],
) -> Result<BalanceSheet, LedgerError> {
    let mut balances: BTreeMap<ParticipantId, Decimal> = participants
        .iter()
        .map(|p| (p.id, Decimal::ZERO))
        .collect();

    for payment in payments {
        for (id, paid) in payment.contributions() {
            let balance = entry(&mut balances, id)?;
            *balance = balance.checked_add(*paid).ok_or(AmountError::Overflow)?;
        }
        for (id, owed) in payment.owed_shares() {
            let balance = entry(&mut balances, id)?;
            *balance = balance.checked_sub(*owed).ok_or(AmountError::Overflow)?;
        }
    }

    Ok(BalanceSheet(balances))
}

fn entry<'a>(
    balances: &'a mut BTreeMap<ParticipantId, Decimal>,
    id: &ParticipantId,
) -> Result<&'a mut Decimal, LedgerError> {
    balances
        .get_mut(id)
        .ok_or_else(|| LedgerError::UnknownParticipant(id.to_string()))
}
