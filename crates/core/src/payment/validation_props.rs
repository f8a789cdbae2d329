//! Property-based tests for payment validation.

use fairshare_shared::types::ParticipantId;
use fairshare_shared::types::money::approx_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::Payment;
use crate::ledger::LedgerError;
use crate::split::{ShareMap, SplitStrategy};

/// Strategy to generate a valid positive amount (0.01 to 100,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a negative amount (-0.01 to -100,000.00).
fn negative_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

fn even_spec(ids: &[ParticipantId]) -> ShareMap {
    ids.iter().map(|id| (*id, Decimal::ZERO)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Owed shares of an even payment add up to its total.
    #[test]
    fn prop_owed_shares_sum_to_total(
        amounts in prop::collection::vec(positive_amount(), 1..5),
        sharers in 1usize..8,
    ) {
        let payers: Vec<ParticipantId> = amounts.iter().map(|_| ParticipantId::new()).collect();
        let sharers: Vec<ParticipantId> = (0..sharers).map(|_| ParticipantId::new()).collect();
        let contributions: ShareMap = payers.iter().copied().zip(amounts.iter().copied()).collect();

        let payment = Payment::new(contributions, even_spec(&sharers), SplitStrategy::Even).unwrap();

        let expected: Decimal = amounts.iter().copied().sum();
        prop_assert_eq!(payment.total(), expected);
        prop_assert!(approx_eq(payment.owed_shares().values().copied().sum(), expected));
    }

    /// A negative contribution is rejected even when the total stays positive.
    #[test]
    fn prop_negative_contribution_rejected(
        paid in positive_amount(),
        refund in negative_amount(),
    ) {
        prop_assume!(paid + refund > Decimal::ZERO);
        let alice = ParticipantId::new();
        let bob = ParticipantId::new();
        let contributions: ShareMap = [(alice, paid), (bob, refund)].into_iter().collect();

        let result = Payment::new(contributions, even_spec(&[alice, bob]), SplitStrategy::Even);
        prop_assert!(
            matches!(result, Err(LedgerError::NegativeContribution { participant, .. }) if participant == bob),
            "expected NegativeContribution, got {:?}",
            result
        );
    }

    /// A non-positive total is rejected for every strategy name.
    #[test]
    fn prop_non_positive_total_rejected(
        refund in negative_amount(),
        strategy in prop::sample::select(vec!["even", "exact", "ratio", "unknown"]),
    ) {
        let alice = ParticipantId::new();
        let contributions: ShareMap = [(alice, refund)].into_iter().collect();

        let result = Payment::construct(contributions, even_spec(&[alice]), strategy);
        prop_assert!(
            matches!(result, Err(LedgerError::NonPositiveTotal(_))),
            "expected NonPositiveTotal, got {:?}",
            result
        );
    }
}
