//! Taxable income from accounting net income.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{ProfitAndLossStatement, TaxAdjustment};

/// Applies book-to-tax adjustments to the statement's reported net income.
///
/// The result is `net_income + Σ add − Σ subtract` and may be negative.
///
/// ```
/// use au_tax_core::{
///     AdjustmentDirection, AdjustmentType, ProfitAndLossStatement, TaxAdjustment,
///     estimate_taxable_income,
/// };
/// use rust_decimal_macros::dec;
///
/// let pl = ProfitAndLossStatement { net_income: dec!(50000), ..Default::default() };
/// let fines = TaxAdjustment {
///     amount: dec!(1200),
///     direction: AdjustmentDirection::Add,
///     adjustment_type: AdjustmentType::Permanent,
///     category: "Penalties".to_string(),
///     description: "Non-deductible fines".to_string(),
/// };
///
/// assert_eq!(estimate_taxable_income(&pl, &[]), dec!(50000));
/// assert_eq!(estimate_taxable_income(&pl, &[fines]), dec!(51200));
/// ```
pub fn estimate_taxable_income(
    pl: &ProfitAndLossStatement,
    adjustments: &[TaxAdjustment],
) -> Decimal {
    let net_adjustment: Decimal = adjustments.iter().map(TaxAdjustment::signed_amount).sum();
    let taxable_income = pl.net_income + net_adjustment;

    debug!(
        net_income = %pl.net_income,
        adjustments = adjustments.len(),
        %net_adjustment,
        %taxable_income,
        "estimated taxable income"
    );

    taxable_income
}
