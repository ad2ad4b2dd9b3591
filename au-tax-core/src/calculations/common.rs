//! Helpers shared by the calculation modules.

use rust_decimal::Decimal;

use crate::LineItem;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. The calculations keep
/// full precision; this is applied only when figures are presented.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use au_tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(90.909090)), dec!(90.91));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns `value` when positive, otherwise zero.
pub fn positive_part(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// Sums the amounts of a sequence of line items. An empty sequence sums to zero.
///
/// Totals of a statement that passed [`ProfitAndLossStatement::validate`]
/// cannot overflow here.
///
/// [`ProfitAndLossStatement::validate`]: crate::ProfitAndLossStatement::validate
pub fn sum_amounts<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Decimal {
    items.into_iter().map(|item| item.amount).sum()
}
