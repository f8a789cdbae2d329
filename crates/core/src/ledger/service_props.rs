//! Property-based tests for the ledger service.
//!
//! - Balances always net to zero across any mix of strategies
//! - Settling clears every balance to within rounding
//! - Removing every payment returns all balances to zero

use std::collections::BTreeMap;

use fairshare_shared::types::ParticipantId;
use fairshare_shared::types::money::is_negligible;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::Ledger;
use crate::payment::Payment;
use crate::split::{ShareMap, SplitStrategy};

const NAMES: [&str; 6] = ["Alice", "Bob", "Charlie", "Dana", "Eve", "Frank"];

/// Raw description of one payment, resolved against the ledger later.
#[derive(Debug, Clone)]
struct PaymentSeed {
    payer: usize,
    cents: i64,
    sharers: Vec<bool>,
    weights: Vec<u32>,
    strategy: SplitStrategy,
}

/// Strategy to generate a payment seed for a group of up to six.
fn payment_seed() -> impl Strategy<Value = PaymentSeed> {
    (
        0usize..NAMES.len(),
        1i64..1_000_000i64,
        prop::collection::vec(any::<bool>(), NAMES.len()),
        prop::collection::vec(1u32..100, NAMES.len()),
        prop_oneof![
            Just(SplitStrategy::Even),
            Just(SplitStrategy::Exact),
            Just(SplitStrategy::Ratio),
        ],
    )
        .prop_map(|(payer, cents, sharers, weights, strategy)| PaymentSeed {
            payer,
            cents,
            sharers,
            weights,
            strategy,
        })
}

/// Builds a valid payment from a seed over the first `n` participants.
fn build(seed: &PaymentSeed, ids: &[ParticipantId]) -> Payment {
    let total = Decimal::new(seed.cents, 2);
    let mut sharers: Vec<usize> = (0..ids.len()).filter(|i| seed.sharers[*i]).collect();
    if sharers.is_empty() {
        sharers.push(seed.payer % ids.len());
    }

    let share_spec: ShareMap = match seed.strategy {
        SplitStrategy::Even => sharers.iter().map(|i| (ids[*i], Decimal::ZERO)).collect(),
        SplitStrategy::Exact => {
            let count = i64::try_from(sharers.len()).unwrap();
            let base = seed.cents / count;
            let remainder = seed.cents - base * count;
            sharers
                .iter()
                .enumerate()
                .map(|(pos, i)| {
                    let cents = if pos == 0 { base + remainder } else { base };
                    (ids[*i], Decimal::new(cents, 2))
                })
                .collect()
        }
        SplitStrategy::Ratio => {
            let weight_sum: u32 = sharers.iter().map(|i| seed.weights[*i]).sum();
            sharers
                .iter()
                .map(|i| {
                    (
                        ids[*i],
                        Decimal::from(seed.weights[*i]) / Decimal::from(weight_sum),
                    )
                })
                .collect()
        }
    };

    let contributions: ShareMap = [(ids[seed.payer % ids.len()], total)].into_iter().collect();
    Payment::new(contributions, share_spec, seed.strategy).unwrap()
}

fn ledger_with(group: usize, seeds: &[PaymentSeed]) -> Ledger {
    let mut ledger = Ledger::with_participants(&NAMES[..group]).unwrap();
    let ids: Vec<ParticipantId> = ledger.participants().iter().map(|p| p.id).collect();
    for seed in seeds {
        ledger.add_payment(build(seed, &ids)).unwrap();
    }
    ledger
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Net balances sum to zero within tolerance.
    #[test]
    fn prop_balances_conserve(
        group in 2usize..=NAMES.len(),
        seeds in prop::collection::vec(payment_seed(), 0..12),
    ) {
        let ledger = ledger_with(group, &seeds);
        let sheet = ledger.compute_net_balances().unwrap();

        prop_assert_eq!(sheet.len(), group);
        prop_assert!(is_negligible(sheet.total()), "balances sum to {}", sheet.total());
    }

    /// Applying the transfers leaves every participant within a cent per transfer of zero.
    #[test]
    fn prop_settlement_clears_balances(
        group in 2usize..=NAMES.len(),
        seeds in prop::collection::vec(payment_seed(), 1..12),
    ) {
        let ledger = ledger_with(group, &seeds);
        let sheet = ledger.compute_net_balances().unwrap();
        let report = ledger.settle().unwrap();

        prop_assert!(report.transfers.len() < group);

        let mut residual: BTreeMap<ParticipantId, Decimal> = sheet.into();
        for transfer in &report.transfers {
            prop_assert!(transfer.amount > Decimal::ZERO);
            *residual.get_mut(&transfer.from).unwrap() += transfer.amount;
            *residual.get_mut(&transfer.to).unwrap() -= transfer.amount;
        }

        let bound = Decimal::new(i64::try_from(group).unwrap(), 2);
        for (id, left) in residual {
            prop_assert!(left.abs() <= bound, "{} left with {}", id, left);
        }
    }

    /// Removing every payment returns the ledger to all-zero balances.
    #[test]
    fn prop_remove_all_payments_resets(
        group in 2usize..=NAMES.len(),
        seeds in prop::collection::vec(payment_seed(), 1..8),
    ) {
        let mut ledger = ledger_with(group, &seeds);
        let ids: Vec<_> = ledger.payments().iter().map(Payment::id).collect();
        for id in ids {
            ledger.remove_payment(id).unwrap();
        }

        let balances = ledger.net_balances().unwrap();
        prop_assert!(balances.values().all(Decimal::is_zero));
        prop_assert!(ledger.settle().unwrap().transfers.is_empty());
    }
}
