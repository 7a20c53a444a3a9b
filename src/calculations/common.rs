//! Shared rounding helpers for tax calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to the nearest whole euro, midpoints away from zero.
///
/// Final tax amounts and PER advisory amounts are reported in whole euros.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::calculations::common::round_to_euro;
///
/// assert_eq!(round_to_euro(dec!(1705.33)), dec!(1705));
/// assert_eq!(round_to_euro(dec!(1705.50)), dec!(1706));
/// assert_eq!(round_to_euro(dec!(-0.50)), dec!(-1)); // Away from zero
/// ```
pub fn round_to_euro(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to two decimal places using half-up rounding.
///
/// Used for the withholding percentages exposed by the simulation result.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(5.6833)), dec!(5.68));
/// assert_eq!(round_half_up(dec!(5.685)), dec!(5.69));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
