//! Payment requests from a host layer.
//!
//! Host layers (HTTP handlers, form parsers) hand over primitive data:
//! participant ids as strings and amounts as `f64`. The request converts
//! both once and then goes through [`Payment::construct`].

use std::collections::BTreeMap;

use fairshare_shared::types::ParticipantId;
use fairshare_shared::types::money::amount_from_f64;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::types::Payment;
use crate::ledger::LedgerError;
use crate::split::ShareMap;

/// A payment described with primitive values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentRequest {
    /// Optional display description.
    #[serde(default)]
    pub description: Option<String>,
    /// Participant id to amount paid.
    pub contributions: BTreeMap<String, f64>,
    /// Participant id to strategy input.
    pub share_spec: BTreeMap<String, f64>,
    /// Registered strategy name.
    pub strategy: String,
}

impl PaymentRequest {
    /// Converts the request into a validated payment.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Amount`] for non-finite numbers,
    /// [`LedgerError::UnknownParticipant`] for ids that do not parse, and
    /// any error from [`Payment::construct`].
    pub fn into_payment(self) -> Result<Payment, LedgerError> {
        let contributions = convert(&self.contributions)?;
        let share_spec = convert(&self.share_spec)?;

        let payment = Payment::construct(contributions, share_spec, &self.strategy)?;
        Ok(match self.description {
            Some(description) => payment.with_description(description),
            None => payment,
        })
    }
}

fn convert(raw: &BTreeMap<String, f64>) -> Result<ShareMap, LedgerError> {
    raw.iter()
        .map(|(id, value)| -> Result<(ParticipantId, Decimal), LedgerError> {
            let participant = id
                .parse::<ParticipantId>()
                .map_err(|_| LedgerError::UnknownParticipant(id.clone()))?;
            Ok((participant, amount_from_f64(*value)?))
        })
        .collect()
}
