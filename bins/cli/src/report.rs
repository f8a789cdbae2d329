//! Settlement report rendering.

use std::fmt;

use fairshare_core::{Ledger, LedgerError};
use fairshare_shared::types::ParticipantId;
use fairshare_shared::types::money::round_to;
use rust_decimal::Decimal;
use serde::Serialize;

/// A participant's balance, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceLine {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// A transfer, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferLine {
    pub from: String,
    pub to: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Balances and transfers ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub balances: Vec<BalanceLine>,
    pub transfers: Vec<TransferLine>,
}

/// Rounds to `scale` places and pads so every amount prints the same width.
fn fixed(amount: Decimal, scale: u32) -> Decimal {
    let mut amount = round_to(amount, scale);
    amount.rescale(scale);
    amount
}

impl Report {
    /// Settles the ledger and resolves ids back to names.
    pub fn build(ledger: &Ledger, scale: u32) -> Result<Self, LedgerError> {
        let sheet = ledger.compute_net_balances()?;
        let transfers = ledger.settlement_method().settle(sheet.as_map())?;

        let name = |id: &ParticipantId| {
            ledger
                .participant(id)
                .map_or_else(|| id.to_string(), |p| p.name.clone())
        };

        let balances = ledger
            .participants()
            .iter()
            .map(|p| BalanceLine {
                name: p.name.clone(),
                balance: fixed(sheet.get(&p.id).unwrap_or_default(), scale),
            })
            .collect();

        let transfers = transfers
            .iter()
            .map(|t| TransferLine {
                from: name(&t.from),
                to: name(&t.to),
                amount: fixed(t.amount, scale),
            })
            .collect();

        Ok(Self {
            balances,
            transfers,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.balances.iter().map(|b| b.name.len()).max().unwrap_or(0);

        writeln!(f, "Balances:")?;
        for line in &self.balances {
            writeln!(f, "  {:<width$}  {:>10}", line.name, line.balance)?;
        }

        writeln!(f, "Transfers:")?;
        if self.transfers.is_empty() {
            writeln!(f, "  (everyone is settled)")?;
        }
        for line in &self.transfers {
            writeln!(f, "  {} -> {}: {}", line.from, line.to, line.amount)?;
        }
        Ok(())
    }
}
