use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a progressive rate schedule.
///
/// Tax for an income inside the band is
/// `base_tax + (income - min_income) * tax_rate`. The upper bound is
/// inclusive; `None` marks the top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Returns true when `income` falls at or below this band's upper bound.
    pub fn covers(
        &self,
        income: Decimal,
    ) -> bool {
        self.max_income.is_none_or(|max| income <= max)
    }

    /// Tax owed at the top of this band, or `None` for the open-ended band.
    pub fn tax_at_upper_bound(&self) -> Option<Decimal> {
        self.max_income
            .map(|max| self.base_tax + (max - self.min_income) * self.tax_rate)
    }
}
