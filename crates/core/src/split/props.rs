//! Property-based tests for split strategies.

use fairshare_shared::types::ParticipantId;
use fairshare_shared::types::money::approx_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{ShareMap, SplitStrategy};

/// Strategy to generate a positive payment total (0.01 to 100,000.00).
fn total_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn participants(n: usize) -> Vec<ParticipantId> {
    (0..n).map(|_| ParticipantId::new()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Even shares are identical and add up to the total.
    #[test]
    fn prop_even_split_conserves_total(
        total in total_strategy(),
        count in 1usize..12,
    ) {
        let spec: ShareMap = participants(count).into_iter().map(|id| (id, Decimal::ZERO)).collect();
        let owed = SplitStrategy::Even.apply(total, &spec).unwrap();

        prop_assert_eq!(owed.len(), count);
        let first = *owed.values().next().unwrap();
        prop_assert!(owed.values().all(|share| *share == first));
        prop_assert!(approx_eq(owed.values().copied().sum(), total));
    }

    /// Exact shares built from integer cents always validate and pass through.
    #[test]
    fn prop_exact_split_accepts_matching_shares(
        cents in prop::collection::vec(0i64..1_000_000i64, 1..8),
    ) {
        let people = participants(cents.len());
        let spec: ShareMap = people
            .iter()
            .copied()
            .zip(cents.iter().map(|c| Decimal::new(*c, 2)))
            .collect();
        let total: Decimal = spec.values().copied().sum();
        prop_assume!(total > Decimal::ZERO);

        let owed = SplitStrategy::Exact.apply(total, &spec).unwrap();
        prop_assert_eq!(owed, spec);
    }

    /// Ratios derived from integer weights add up to the total.
    #[test]
    fn prop_ratio_split_conserves_total(
        total in total_strategy(),
        weights in prop::collection::vec(1u32..1_000u32, 1..8),
    ) {
        let weight_sum: u32 = weights.iter().sum();
        let people = participants(weights.len());
        let mut spec: ShareMap = people
            .iter()
            .copied()
            .zip(weights.iter().map(|w| Decimal::from(*w) / Decimal::from(weight_sum)))
            .collect();

        // Absorb division dust in the last ratio so the ratios sum to exactly 1.
        let dust = Decimal::ONE - spec.values().copied().sum::<Decimal>();
        if let Some(last) = spec.values_mut().last() {
            *last += dust;
        }

        let owed = SplitStrategy::Ratio.apply(total, &spec).unwrap();
        prop_assert!(approx_eq(owed.values().copied().sum(), total));
    }
}
