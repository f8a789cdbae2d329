//! Pure split functions.
//!
//! None of these touch state: same inputs, same owed shares.

use fairshare_shared::types::checked_sum;
use fairshare_shared::types::money::approx_eq;
use rust_decimal::Decimal;

use super::{ShareMap, SplitError};

/// Tolerance for ratios summing to 1.
///
/// Ratios are dimensionless and usually typed with a handful of decimals,
/// so they get a wider band than monetary amounts (1e-6).
pub const RATIO_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Splits `total` equally among every key of `share_spec`.
///
/// The share values are placeholders and are ignored.
///
/// # Example
///
/// ```
/// use fairshare_core::split::{even_split, ShareMap};
/// use fairshare_shared::types::ParticipantId;
/// use rust_decimal_macros::dec;
///
/// let spec: ShareMap = (0..3).map(|_| (ParticipantId::new(), dec!(0))).collect();
/// let owed = even_split(dec!(90), &spec).unwrap();
/// assert!(owed.values().all(|share| *share == dec!(30)));
/// ```
pub fn even_split(total: Decimal, share_spec: &ShareMap) -> Result<ShareMap, SplitError> {
    if share_spec.is_empty() {
        return Err(SplitError::NoParticipants);
    }

    let per_head = total / Decimal::from(share_spec.len());
    Ok(share_spec.keys().map(|id| (*id, per_head)).collect())
}

/// Uses `share_spec` as the owed amounts, unchanged.
///
/// The shares must add up to `total` within the monetary tolerance.
pub fn exact_split(total: Decimal, share_spec: &ShareMap) -> Result<ShareMap, SplitError> {
    let allocated = checked_sum(share_spec.values().copied()).ok_or(SplitError::Overflow)?;

    if !approx_eq(allocated, total) {
        return Err(SplitError::ExactSumMismatch { total, allocated });
    }

    Ok(share_spec.clone())
}

/// Splits `total` by the ratio assigned to each participant.
///
/// Every ratio must lie in `[0, 1]` and the ratios must sum to 1 within
/// [`RATIO_TOLERANCE`]. Shares are scaled by the actual ratio sum so the
/// owed amounts always add up to `total`; for ratios summing to exactly 1
/// this is `total * ratio`.
pub fn ratio_split(total: Decimal, share_spec: &ShareMap) -> Result<ShareMap, SplitError> {
    if share_spec.is_empty() {
        return Err(SplitError::NoParticipants);
    }

    for (participant, ratio) in share_spec {
        if *ratio < Decimal::ZERO || *ratio > Decimal::ONE {
            return Err(SplitError::RatioOutOfRange {
                participant: *participant,
                ratio: *ratio,
            });
        }
    }

    let sum = checked_sum(share_spec.values().copied()).ok_or(SplitError::Overflow)?;
    if (sum - Decimal::ONE).abs() > RATIO_TOLERANCE {
        return Err(SplitError::RatioSumMismatch { sum });
    }

    share_spec
        .iter()
        .map(|(id, ratio)| {
            total
                .checked_mul(*ratio)
                .and_then(|scaled| scaled.checked_div(sum))
                .map(|owed| (*id, owed))
                .ok_or(SplitError::Overflow)
        })
        .collect()
}
