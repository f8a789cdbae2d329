//! Scenario files.
//!
//! A scenario names its participants and lists payments keyed by those
//! names. Amounts arrive as JSON numbers and are converted to decimals once.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use fairshare_core::split::ShareMap;
use fairshare_core::{Ledger, LedgerError, Payment, SettlementMethod};
use fairshare_shared::types::money::amount_from_f64;
use serde::Deserialize;

/// A group and its recorded payments.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub participants: Vec<String>,
    #[serde(default)]
    pub payments: Vec<ScenarioPayment>,
}

/// One payment, with participants referenced by name.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioPayment {
    #[serde(default)]
    pub description: Option<String>,
    pub contributions: BTreeMap<String, f64>,
    pub shares: BTreeMap<String, f64>,
    pub strategy: String,
}

impl Scenario {
    /// Reads and parses a scenario file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    /// Registers the participants and records every payment in order.
    pub fn into_ledger(self, method: SettlementMethod) -> anyhow::Result<Ledger> {
        let mut ledger = Ledger::with_participants(self.participants.as_slice())?
            .with_settlement_method(method);

        for (index, entry) in self.payments.into_iter().enumerate() {
            let label = entry
                .description
                .clone()
                .unwrap_or_else(|| format!("#{}", index + 1));
            let payment = entry
                .into_payment(&ledger)
                .with_context(|| format!("payment {label} rejected"))?;
            ledger.add_payment(payment)?;
        }

        Ok(ledger)
    }
}

impl ScenarioPayment {
    fn into_payment(self, ledger: &Ledger) -> Result<Payment, LedgerError> {
        let contributions = resolve(ledger, &self.contributions)?;
        let shares = resolve(ledger, &self.shares)?;
        let payment = Payment::construct(contributions, shares, &self.strategy)?;

        Ok(match self.description {
            Some(description) => payment.with_description(description),
            None => payment,
        })
    }
}

fn resolve(ledger: &Ledger, by_name: &BTreeMap<String, f64>) -> Result<ShareMap, LedgerError> {
    let mut resolved = ShareMap::new();
    for (name, value) in by_name {
        let participant = ledger
            .participant_by_name(name)
            .ok_or_else(|| LedgerError::UnknownParticipant(name.clone()))?;
        resolved.insert(participant.id, amount_from_f64(*value)?);
    }
    Ok(resolved)
}
