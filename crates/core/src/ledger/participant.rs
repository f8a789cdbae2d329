//! Ledger participants.

use fairshare_shared::types::ParticipantId;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// A person sharing costs in a ledger.
///
/// Balances are not stored here; they are derived from the payments on
/// demand (see [`super::compute_net_balances`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier, fixed at creation.
    pub id: ParticipantId,
    /// Display label.
    pub name: String,
}

impl Participant {
    /// Creates a participant with a fresh id.
    ///
    /// Surrounding whitespace is trimmed from the name.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidName`] if the name is empty or whitespace.
    pub fn new(name: &str) -> Result<Self, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidName);
        }

        Ok(Self {
            id: ParticipantId::new(),
            name: name.to_string(),
        })
    }
}
