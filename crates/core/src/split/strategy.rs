//! The closed set of split strategies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::methods::{even_split, exact_split, ratio_split};
use super::{ShareMap, SplitError};

type SplitFn = fn(Decimal, &ShareMap) -> Result<ShareMap, SplitError>;

/// A named rule converting a payment total into owed shares.
///
/// Adding a strategy means adding a variant, its name, and its function;
/// callers resolve strategies by name and never branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitStrategy {
    /// Equal split among the listed participants.
    Even,
    /// Caller-provided owed amounts.
    Exact,
    /// Caller-provided ratios in `[0, 1]`.
    Ratio,
}

impl SplitStrategy {
    /// Every registered strategy.
    pub const ALL: [Self; 3] = [Self::Even, Self::Exact, Self::Ratio];

    /// Returns the registered name of this strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Exact => "exact",
            Self::Ratio => "ratio",
        }
    }

    /// Returns the names of every registered strategy.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }

    /// Looks up a strategy by its registered name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    const fn function(self) -> SplitFn {
        match self {
            Self::Even => even_split,
            Self::Exact => exact_split,
            Self::Ratio => ratio_split,
        }
    }

    /// Applies the strategy to a payment total.
    ///
    /// # Errors
    ///
    /// Returns a [`SplitError`] when the share specification violates the
    /// strategy's constraints.
    pub fn apply(self, total: Decimal, share_spec: &ShareMap) -> Result<ShareMap, SplitError> {
        (self.function())(total, share_spec)
    }
}

impl std::fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
