use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use crate::calculations::common::{positive_part, sum_amounts};
use crate::calculations::gst::GstCalculator;
use crate::{BasPeriod, BasStatement, LodgementStatus, ProfitAndLossStatement, TaxYearConfig};

/// Creates a not-yet-started BAS statement under the built-in GST rate.
///
/// Exactly one of `total_payable` and `total_refundable` is non-zero, unless
/// the net GST is zero, in which case both are. PAYG withholding and
/// instalments are not modelled and start at zero.
///
/// ```
/// use au_tax_core::{BasPeriod, LineItem, ProfitAndLossStatement, create_initial_bas_statement};
/// use rust_decimal_macros::dec;
///
/// let pl = ProfitAndLossStatement {
///     revenue: vec![LineItem::new("Sales", dec!(11000))],
///     cost_of_sales: vec![],
///     expenses: vec![LineItem::new("Rent", dec!(2200))],
///     net_income: dec!(8800),
/// };
/// let period = BasPeriod::quarter(2023, 1).unwrap();
///
/// let bas = create_initial_bas_statement("acme", period, &pl);
///
/// assert_eq!(bas.id, "bas-acme-2023-07-01");
/// assert_eq!(bas.total_payable, dec!(800));
/// assert_eq!(bas.total_refundable, dec!(0));
/// ```
pub fn create_initial_bas_statement(
    entity_id: &str,
    period: BasPeriod,
    pl: &ProfitAndLossStatement,
) -> BasStatement {
    BasInitializer::new(&TaxYearConfig::default()).create(entity_id, period, pl)
}

/// Creates initial BAS statements under an explicit [`TaxYearConfig`].
#[derive(Debug, Clone, Copy)]
pub struct BasInitializer {
    gst: GstCalculator,
}

impl BasInitializer {
    pub fn new(config: &TaxYearConfig) -> Self {
        Self {
            gst: GstCalculator::new(config),
        }
    }

    pub fn create(
        &self,
        entity_id: &str,
        period: BasPeriod,
        pl: &ProfitAndLossStatement,
    ) -> BasStatement {
        let gst_collected = self.gst.collected(pl);
        let gst_paid = self.gst.paid(pl);
        let gst_net_amount = gst_collected - gst_paid;

        let sales_total = sum_amounts(&pl.revenue);
        let purchases_total = sum_amounts(pl.purchases());

        info!(
            entity_id,
            start = %period.start_date,
            end = %period.end_date,
            %gst_collected,
            %gst_paid,
            %gst_net_amount,
            "initialised BAS statement"
        );

        BasStatement {
            id: format!("bas-{entity_id}-{}", period.start_date.format("%Y-%m-%d")),
            entity_id: entity_id.to_string(),
            period,
            status: LodgementStatus::NotStarted,
            due_date: Utc::now(),
            gst_collected,
            gst_paid,
            gst_net_amount,
            sales_total,
            purchases_total,
            payg_withholding: Decimal::ZERO,
            payg_installments: Decimal::ZERO,
            total_payable: positive_part(gst_net_amount),
            total_refundable: positive_part(-gst_net_amount),
            attachments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::LineItem;

    fn period() -> BasPeriod {
        BasPeriod::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap()
    }

    fn statement(
        revenue: &[i64],
        cost_of_sales: &[i64],
        expenses: &[i64],
    ) -> ProfitAndLossStatement {
        let items = |amounts: &[i64], name: &str| -> Vec<LineItem> {
            amounts
                .iter()
                .map(|&a| LineItem::new(name, Decimal::from(a)))
                .collect()
        };
        ProfitAndLossStatement::with_derived_net_income(
            items(revenue, "Sales"),
            items(cost_of_sales, "Stock"),
            items(expenses, "Overheads"),
        )
        .unwrap()
    }

    #[test]
    fn payable_position() {
        let bas = create_initial_bas_statement("acme", period(), &statement(&[11000], &[], &[2200]));

        assert_eq!(bas.id, "bas-acme-2024-01-01");
        assert_eq!(bas.entity_id, "acme");
        assert_eq!(bas.status, LodgementStatus::NotStarted);
        assert_eq!(bas.gst_collected, dec!(1000));
        assert_eq!(bas.gst_paid, dec!(200));
        assert_eq!(bas.gst_net_amount, dec!(800));
        assert_eq!(bas.sales_total, dec!(11000));
        assert_eq!(bas.purchases_total, dec!(2200));
        assert_eq!(bas.total_payable, dec!(800));
        assert_eq!(bas.total_refundable, dec!(0));
        assert!(!bas.is_refund());
    }

    #[test]
    fn refundable_position() {
        let bas =
            create_initial_bas_statement("acme", period(), &statement(&[1100], &[3300], &[2200]));

        assert_eq!(bas.purchases_total, dec!(5500));
        assert_eq!(bas.gst_net_amount, dec!(-400));
        assert_eq!(bas.total_payable, dec!(0));
        assert_eq!(bas.total_refundable, dec!(400));
        assert!(bas.is_refund());
    }

    #[test]
    fn balanced_position_has_neither_payable_nor_refundable() {
        let bas = create_initial_bas_statement("acme", period(), &statement(&[2200], &[], &[2200]));

        assert_eq!(bas.total_payable, dec!(0));
        assert_eq!(bas.total_refundable, dec!(0));
    }

    #[test]
    fn payable_and_refundable_are_mutually_exclusive() {
        let cases: [(&[i64], &[i64], &[i64]); 5] = [
            (&[], &[], &[]),
            (&[11000], &[], &[]),
            (&[], &[1100], &[]),
            (&[5000, 7000], &[1234], &[99, 4321]),
            (&[1], &[1], &[1]),
        ];

        for (revenue, cost_of_sales, expenses) in cases {
            let bas = create_initial_bas_statement(
                "acme",
                period(),
                &statement(revenue, cost_of_sales, expenses),
            );
            assert_eq!(bas.total_payable * bas.total_refundable, dec!(0));
        }
    }

    #[test]
    fn payg_fields_and_attachments_start_empty() {
        let bas = create_initial_bas_statement("acme", period(), &statement(&[11000], &[], &[]));

        assert_eq!(bas.payg_withholding, dec!(0));
        assert_eq!(bas.payg_installments, dec!(0));
        assert!(bas.attachments.is_empty());
        assert_eq!(bas.period, period());
    }
}
