//! The ledger: participants, payments, balances, and settlement.
//!
//! A `Ledger` is a plain value owned by its caller. It has no interior
//! locking; a host serving several sessions keeps one ledger per session
//! and serializes access to it.

use std::collections::BTreeMap;

use fairshare_shared::types::money::round_currency;
use fairshare_shared::types::{CURRENCY_SCALE, ParticipantId, PaymentId};
use rust_decimal::Decimal;
use serde::Serialize;

use super::balance::{BalanceSheet, compute_net_balances};
use super::error::LedgerError;
use super::participant::Participant;
use crate::payment::Payment;
use crate::settlement::{SettlementMethod, Transfer};

/// Balances and transfers produced by settling a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementReport {
    /// Net balances rounded to currency precision.
    pub balances: BTreeMap<ParticipantId, Decimal>,
    /// Transfers that bring every balance to zero.
    pub transfers: Vec<Transfer>,
}

/// Shared-expense ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    participants: Vec<Participant>,
    payments: Vec<Payment>,
    settlement_method: SettlementMethod,
}

impl Ledger {
    /// Creates an empty ledger using the default settlement method.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger with one participant per name.
    ///
    /// Nothing is registered unless every name is valid.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoParticipants`] for an empty list and
    /// [`LedgerError::InvalidName`] for any blank name.
    pub fn with_participants<S: AsRef<str>>(names: &[S]) -> Result<Self, LedgerError> {
        if names.is_empty() {
            return Err(LedgerError::NoParticipants);
        }

        let participants = names
            .iter()
            .map(|name| Participant::new(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            participants,
            ..Self::default()
        })
    }

    /// Uses `method` for subsequent settlements.
    #[must_use]
    pub fn with_settlement_method(mut self, method: SettlementMethod) -> Self {
        self.settlement_method = method;
        self
    }

    /// The configured settlement method.
    #[must_use]
    pub fn settlement_method(&self) -> SettlementMethod {
        self.settlement_method
    }

    // ========================================================================
    // Participants
    // ========================================================================

    /// Registers a participant and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidName`] if the name is blank.
    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId, LedgerError> {
        let participant = Participant::new(name)?;
        let id = participant.id;
        tracing::debug!(participant_id = %id, "participant registered");
        self.participants.push(participant);
        Ok(id)
    }

    /// Participants in registration order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Looks up a participant by id.
    #[must_use]
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == *id)
    }

    /// Looks up the first participant registered under `name`.
    #[must_use]
    pub fn participant_by_name(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    // ========================================================================
    // Payments
    // ========================================================================

    /// Records a payment and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownParticipant`] if the payment references
    /// an id not registered in this ledger. The payment is not recorded.
    pub fn add_payment(&mut self, payment: Payment) -> Result<PaymentId, LedgerError> {
        self.ensure_known(&payment)?;
        let id = payment.id();
        tracing::debug!(
            payment_id = %id,
            total = %payment.total(),
            strategy = %payment.strategy(),
            "payment recorded"
        );
        self.payments.push(payment);
        Ok(id)
    }

    /// Replaces the payment with `id` in place, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::PaymentNotFound`] if no such payment exists, or
    /// [`LedgerError::UnknownParticipant`] if the replacement references an
    /// unregistered id.
    pub fn replace_payment(&mut self, id: PaymentId, payment: Payment) -> Result<(), LedgerError> {
        let index = self.position(id)?;
        self.ensure_known(&payment)?;
        tracing::debug!(old_payment_id = %id, new_payment_id = %payment.id(), "payment replaced");
        self.payments[index] = payment;
        Ok(())
    }

    /// Removes and returns the payment with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::PaymentNotFound`] if no such payment exists.
    pub fn remove_payment(&mut self, id: PaymentId) -> Result<Payment, LedgerError> {
        let index = self.position(id)?;
        tracing::debug!(payment_id = %id, "payment removed");
        Ok(self.payments.remove(index))
    }

    /// Payments in insertion order.
    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Looks up a payment by id.
    #[must_use]
    pub fn payment(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id() == id)
    }

    fn position(&self, id: PaymentId) -> Result<usize, LedgerError> {
        self.payments
            .iter()
            .position(|p| p.id() == id)
            .ok_or(LedgerError::PaymentNotFound(id))
    }

    fn ensure_known(&self, payment: &Payment) -> Result<(), LedgerError> {
        match payment
            .contributions()
            .keys()
            .chain(payment.owed_shares().keys())
            .find(|id| self.participant(id).is_none())
        {
            Some(unknown) => Err(LedgerError::UnknownParticipant(unknown.to_string())),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Balances & settlement
    // ========================================================================

    /// Recomputes every participant's exact net balance from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownParticipant`] if a payment references
    /// an unregistered id.
    pub fn compute_net_balances(&self) -> Result<BalanceSheet, LedgerError> {
        let sheet = compute_net_balances(&self.participants, &self.payments)?;
        tracing::trace!(
            participants = sheet.len(),
            payments = self.payments.len(),
            total = %sheet.total(),
            "net balances computed"
        );
        Ok(sheet)
    }

    /// Net balances rounded to currency precision for display.
    ///
    /// # Errors
    ///
    /// See [`Ledger::compute_net_balances`].
    pub fn net_balances(&self) -> Result<BTreeMap<ParticipantId, Decimal>, LedgerError> {
        Ok(self.compute_net_balances()?.rounded(CURRENCY_SCALE))
    }

    /// Recomputes balances and settles them with the configured method.
    ///
    /// Settlement runs on the exact balances; only the reported balances
    /// are rounded.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Settlement`] if the balances fail to net to
    /// zero, which indicates a bug rather than bad input.
    pub fn settle(&self) -> Result<SettlementReport, LedgerError> {
        let sheet = self.compute_net_balances()?;
        let transfers = self.settlement_method.settle(sheet.as_map())?;

        Ok(SettlementReport {
            balances: sheet
                .iter()
                .map(|(id, balance)| (*id, round_currency(*balance)))
                .collect(),
            transfers,
        })
    }
}
