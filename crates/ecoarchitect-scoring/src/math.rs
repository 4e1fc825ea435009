//! Decimal helpers shared by the scoring modules.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::weights::MAX_SCORE;

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> Decimal {
    scaled_ratio(part, whole, MAX_SCORE)
}

/// `part * scale / whole`, or 0 when `whole` is 0.
///
/// Multiplies before dividing so exact halves stay exact.
pub fn scaled_ratio(part: usize, whole: usize, scale: Decimal) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part)
        .checked_mul(scale)
        .and_then(|n| n.checked_div(Decimal::from(whole)))
        .unwrap_or(Decimal::ZERO)
}

/// Clamp into `[0, 100]`.
pub fn clamp_score(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, MAX_SCORE)
}

/// Decimal places kept by [`settle`].
const SETTLE_DP: u32 = 12;

/// Drop the truncation tail left by non-terminating ratios such as thirds.
///
/// Exact sums of such ratios otherwise land just below a half
/// (`55.4999...998`) and round the wrong way.
pub fn settle(value: Decimal) -> Decimal {
    value.round_dp(SETTLE_DP)
}

/// Round half away from zero to a whole number. Negative values give 0.
///
/// The value is [`settle`]d first.
pub fn round_u32(value: Decimal) -> u32 {
    settle(value)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// `min(cap, count * step)` without overflow.
pub fn capped_steps(count: usize, step: u32, cap: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(step)
        .min(cap)
}

/// Saturating `usize` to `u32`.
pub fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn percent_of_nothing_is_zero() {
        assert_eq!(percent(3, 0), Decimal::ZERO);
        assert_eq!(percent(1, 4), dec!(25));
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_u32(dec!(7.5)), 8);
        assert_eq!(round_u32(dec!(85.95)), 86);
        assert_eq!(round_u32(dec!(84.4999)), 84);
        assert_eq!(round_u32(dec!(-3)), 0);
    }

    #[test]
    fn thirds_that_sum_to_a_half_round_up() {
        // 500/6 * 0.25 + (200/3 - 10) * 0.2 + 15 + 100/3 * 0.25 = 55.5
        let quality = scaled_ratio(500, 6, Decimal::ONE);
        let matched = percent(2, 3).checked_sub(dec!(10)).unwrap();
        let requirements = percent(2, 6);
        let weighted = quality * dec!(0.25)
            + matched * dec!(0.20)
            + dec!(15)
            + requirements * dec!(0.25);
        assert_eq!(settle(weighted), dec!(55.5));
        assert_eq!(round_u32(weighted - dec!(55)), 1);
    }

    #[test]
    fn scaled_ratio_keeps_exact_halves() {
        assert_eq!(scaled_ratio(1, 2, dec!(15)), dec!(7.5));
    }

    #[test]
    fn capped_steps_saturate() {
        assert_eq!(capped_steps(2, 5, 15), 10);
        assert_eq!(capped_steps(7, 5, 15), 15);
        assert_eq!(capped_steps(usize::MAX, 5, 15), 15);
    }
}
