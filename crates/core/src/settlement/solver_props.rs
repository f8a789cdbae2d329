//! Property-based tests for the greedy settlement solver.

use std::collections::BTreeMap;

use fairshare_shared::types::ParticipantId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::solver::greedy_settlement;
use super::SettlementError;

/// Zero-sum balances in whole cents: random values plus one balancing entry.
fn zero_sum_balances() -> impl Strategy<Value = BTreeMap<ParticipantId, Decimal>> {
    prop::collection::vec(-1_000_000i64..1_000_000i64, 1..10).prop_map(|cents| {
        let closing: i64 = -cents.iter().sum::<i64>();
        cents
            .into_iter()
            .chain(std::iter::once(closing))
            .map(|c| (ParticipantId::new(), Decimal::new(c, 2)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Applying the transfers brings every balance to zero.
    #[test]
    fn prop_transfers_clear_all_balances(balances in zero_sum_balances()) {
        let transfers = greedy_settlement(&balances).unwrap();

        let mut remaining = balances.clone();
        for transfer in &transfers {
            *remaining.get_mut(&transfer.from).unwrap() += transfer.amount;
            *remaining.get_mut(&transfer.to).unwrap() -= transfer.amount;
        }

        prop_assert!(remaining.values().all(Decimal::is_zero), "left over: {:?}", remaining);
    }

    /// At most n - 1 transfers for n participants with a non-zero balance.
    #[test]
    fn prop_transfer_count_bounded(balances in zero_sum_balances()) {
        let transfers = greedy_settlement(&balances).unwrap();
        let imbalanced = balances.values().filter(|b| !b.is_zero()).count();

        prop_assert!(transfers.len() <= imbalanced.saturating_sub(1));
    }

    /// Money only flows from debtors to creditors, in positive amounts.
    #[test]
    fn prop_transfers_flow_debtor_to_creditor(balances in zero_sum_balances()) {
        let transfers = greedy_settlement(&balances).unwrap();

        for transfer in &transfers {
            prop_assert!(transfer.amount > Decimal::ZERO);
            prop_assert!(balances[&transfer.from] < Decimal::ZERO);
            prop_assert!(balances[&transfer.to] > Decimal::ZERO);
        }
    }

    /// Same balances, same transfers.
    #[test]
    fn prop_settlement_deterministic(balances in zero_sum_balances()) {
        prop_assert_eq!(greedy_settlement(&balances), greedy_settlement(&balances));
    }

    /// Any non-zero sum is rejected before matching.
    #[test]
    fn prop_unbalanced_rejected(
        balances in zero_sum_balances(),
        skew in 1i64..10_000i64,
    ) {
        let mut skewed = balances;
        skewed.insert(ParticipantId::new(), Decimal::new(skew, 2));

        let result = greedy_settlement(&skewed);
        prop_assert!(
            matches!(result, Err(SettlementError::Unbalanced { .. })),
            "expected Unbalanced, got {:?}",
            result
        );
    }
}
