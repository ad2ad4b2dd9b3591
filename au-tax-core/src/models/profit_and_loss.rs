use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ValidationError;

/// A named, GST-inclusive amount on a profit-and-loss statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Profit-and-loss statement as supplied by the accounting source.
///
/// `net_income` is taken as reported; the calculations never re-derive it
/// from the line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitAndLossStatement {
    #[serde(default)]
    pub revenue: Vec<LineItem>,
    #[serde(default)]
    pub cost_of_sales: Vec<LineItem>,
    #[serde(default)]
    pub expenses: Vec<LineItem>,
    pub net_income: Decimal,
}

impl ProfitAndLossStatement {
    /// Builds a statement whose net income is revenue less cost of sales
    /// less expenses, for sources that do not report a net figure.
    ///
    /// # Errors
    ///
    /// [`ValidationError::AmountOverflow`] if a section total or the net
    /// figure does not fit in a `Decimal`.
    pub fn with_derived_net_income(
        revenue: Vec<LineItem>,
        cost_of_sales: Vec<LineItem>,
        expenses: Vec<LineItem>,
    ) -> Result<Self, ValidationError> {
        let revenue_total = checked_total("revenue", &revenue)?;
        let cost_of_sales_total = checked_total("cost of sales", &cost_of_sales)?;
        let expense_total = checked_total("expense", &expenses)?;
        let net_income = revenue_total
            .checked_sub(cost_of_sales_total)
            .and_then(|net| net.checked_sub(expense_total))
            .ok_or(ValidationError::AmountOverflow {
                section: "net income",
            })?;

        Ok(Self {
            revenue,
            cost_of_sales,
            expenses,
            net_income,
        })
    }

    /// All purchases (cost of sales followed by expenses), in statement order.
    pub fn purchases(&self) -> impl Iterator<Item = &LineItem> {
        self.cost_of_sales.iter().chain(self.expenses.iter())
    }

    /// Checks that every line item has a name and that the section totals
    /// used by the GST and BAS figures are representable.
    ///
    /// Negative amounts (returns, credits) are accepted and logged.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, scanning revenue,
    /// then cost of sales, then expenses, then the combined purchases.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let sections: [(&'static str, &[LineItem]); 3] = [
            ("revenue", self.revenue.as_slice()),
            ("cost of sales", self.cost_of_sales.as_slice()),
            ("expense", self.expenses.as_slice()),
        ];

        for (section, items) in sections {
            for (index, item) in items.iter().enumerate() {
                if item.name.trim().is_empty() {
                    return Err(ValidationError::EmptyLineItemName { section, index });
                }
                if item.amount < Decimal::ZERO {
                    warn!(section, name = %item.name, amount = %item.amount, "negative line item");
                }
            }
            checked_total(section, items)?;
        }

        let purchases = self
            .purchases()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.amount));
        if purchases.is_none() {
            return Err(ValidationError::AmountOverflow {
                section: "purchases",
            });
        }

        Ok(())
    }
}

fn checked_total(
    section: &'static str,
    items: &[LineItem],
) -> Result<Decimal, ValidationError> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.amount))
        .ok_or(ValidationError::AmountOverflow { section })
}
