//! Payment domain type.

use chrono::{DateTime, Utc};
use fairshare_shared::types::PaymentId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::validation::validate_amounts;
use crate::ledger::LedgerError;
use crate::split::{ShareMap, SplitStrategy};

/// A validated contribution event and the shares it creates.
///
/// Fields are read-only: a payment is either fully valid or never exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    id: PaymentId,
    description: Option<String>,
    contributions: ShareMap,
    share_spec: ShareMap,
    strategy: SplitStrategy,
    total: Decimal,
    owed_shares: ShareMap,
    recorded_at: DateTime<Utc>,
}

impl Payment {
    /// Validates the inputs and computes owed shares with `strategy`.
    ///
    /// # Errors
    ///
    /// Returns an amount error if validation fails, or
    /// [`LedgerError::InvalidSplit`] if the strategy rejects the share
    /// specification.
    pub fn new(
        contributions: ShareMap,
        share_spec: ShareMap,
        strategy: SplitStrategy,
    ) -> Result<Self, LedgerError> {
        let total = validate_amounts(&contributions, &share_spec)?;
        Self::split(contributions, share_spec, strategy, total)
    }

    /// Validates the inputs, resolves `strategy_name`, and computes owed shares.
    ///
    /// # Errors
    ///
    /// Amount errors take precedence over [`LedgerError::UnknownStrategy`],
    /// which takes precedence over [`LedgerError::InvalidSplit`].
    pub fn construct(
        contributions: ShareMap,
        share_spec: ShareMap,
        strategy_name: &str,
    ) -> Result<Self, LedgerError> {
        let total = validate_amounts(&contributions, &share_spec)?;
        let strategy = SplitStrategy::from_name(strategy_name)
            .ok_or_else(|| LedgerError::UnknownStrategy(strategy_name.to_string()))?;
        Self::split(contributions, share_spec, strategy, total)
    }

    fn split(
        contributions: ShareMap,
        share_spec: ShareMap,
        strategy: SplitStrategy,
        total: Decimal,
    ) -> Result<Self, LedgerError> {
        let owed_shares = strategy.apply(total, &share_spec)?;

        Ok(Self {
            id: PaymentId::new(),
            description: None,
            contributions,
            share_spec,
            strategy,
            total,
            owed_shares,
            recorded_at: Utc::now(),
        })
    }

    /// Attaches a display description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.trim().is_empty()).then_some(description);
        self
    }

    /// The payment id.
    #[must_use]
    pub fn id(&self) -> PaymentId {
        self.id
    }

    /// Optional display description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Amount actually paid by each contributor.
    #[must_use]
    pub fn contributions(&self) -> &ShareMap {
        &self.contributions
    }

    /// The strategy input as given.
    #[must_use]
    pub fn share_spec(&self) -> &ShareMap {
        &self.share_spec
    }

    /// The strategy used to compute owed shares.
    #[must_use]
    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    /// Sum of all contributions.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Amount each participant owes for this payment.
    #[must_use]
    pub fn owed_shares(&self) -> &ShareMap {
        &self.owed_shares
    }

    /// When the payment was recorded.
    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
