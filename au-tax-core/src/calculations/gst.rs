//! GST decomposition of GST-inclusive statement totals.
//!
//! Australian GST is 10% of the exclusive price, so the GST inside an
//! inclusive amount is one eleventh of it. Every line is treated as
//! GST-inclusive and taxable; GST-free and input-taxed supplies are not
//! separated out.

use rust_decimal::Decimal;

use crate::calculations::common::sum_amounts;
use crate::{ProfitAndLossStatement, TaxYearConfig};

/// GST component of inclusive amounts, using a configured divisor.
#[derive(Debug, Clone, Copy)]
pub struct GstCalculator {
    divisor: Decimal,
}

impl GstCalculator {
    pub fn new(config: &TaxYearConfig) -> Self {
        Self {
            divisor: config.gst_divisor,
        }
    }

    /// GST contained in a single inclusive amount.
    pub fn gst_component(
        &self,
        inclusive_amount: Decimal,
    ) -> Decimal {
        inclusive_amount / self.divisor
    }

    /// GST on sales: one eleventh of total revenue.
    pub fn collected(
        &self,
        pl: &ProfitAndLossStatement,
    ) -> Decimal {
        self.gst_component(sum_amounts(&pl.revenue))
    }

    /// GST credits on purchases: one eleventh of cost of sales plus expenses.
    pub fn paid(
        &self,
        pl: &ProfitAndLossStatement,
    ) -> Decimal {
        self.gst_component(sum_amounts(pl.purchases()))
    }

    /// Collected less paid. Positive is payable, negative is refundable.
    pub fn net(
        &self,
        pl: &ProfitAndLossStatement,
    ) -> Decimal {
        self.collected(pl) - self.paid(pl)
    }
}

impl Default for GstCalculator {
    fn default() -> Self {
        Self::new(&TaxYearConfig::default())
    }
}

/// GST collected on revenue.
pub fn gst_collected(pl: &ProfitAndLossStatement) -> Decimal {
    GstCalculator::default().collected(pl)
}

/// GST paid on cost of sales and expenses.
pub fn gst_paid(pl: &ProfitAndLossStatement) -> Decimal {
    GstCalculator::default().paid(pl)
}

/// Net GST position for the statement.
pub fn gst_net_amount(pl: &ProfitAndLossStatement) -> Decimal {
    GstCalculator::default().net(pl)
}
