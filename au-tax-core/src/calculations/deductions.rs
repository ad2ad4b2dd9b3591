//! Turns expense lines into claimable deductions.

use crate::calculations::category::map_expense_name_to_category;
use crate::{ProfitAndLossStatement, TaxDeduction};

/// Builds one deduction per expense line, in statement order.
///
/// Ids run `deduction-1`, `deduction-2`, … and depend only on position.
/// Cost of sales lines do not produce deductions.
pub fn build_deductions(pl: &ProfitAndLossStatement) -> Vec<TaxDeduction> {
    pl.expenses
        .iter()
        .enumerate()
        .map(|(index, item)| TaxDeduction {
            id: format!("deduction-{}", index + 1),
            category: map_expense_name_to_category(&item.name).to_string(),
            description: item.name.clone(),
            amount: item.amount,
            evidence: Vec::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::LineItem;

    #[test]
    fn builds_deduction_from_single_expense() {
        let pl = ProfitAndLossStatement {
            expenses: vec![LineItem::new("Sales & Marketing", dec!(500))],
            ..Default::default()
        };

        let deductions = build_deductions(&pl);

        assert_eq!(
            deductions,
            vec![TaxDeduction {
                id: "deduction-1".to_string(),
                category: "Advertising and Marketing".to_string(),
                description: "Sales & Marketing".to_string(),
                amount: dec!(500),
                evidence: vec![],
            }]
        );
    }

    #[test]
    fn ids_follow_input_order() {
        let pl = ProfitAndLossStatement {
            expenses: vec![
                LineItem::new("Rent", dec!(3000)),
                LineItem::new("Interest Expense", dec!(10)),
                LineItem::new("Rent", dec!(3000)),
            ],
            ..Default::default()
        };

        let deductions = build_deductions(&pl);
        let summary: Vec<(&str, &str)> = deductions
            .iter()
            .map(|d| (d.id.as_str(), d.category.as_str()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("deduction-1", "Other Deductions"),
                ("deduction-2", "Interest"),
                ("deduction-3", "Other Deductions"),
            ]
        );
    }

    #[test]
    fn cost_of_sales_is_not_deducted() {
        let pl = ProfitAndLossStatement {
            cost_of_sales: vec![LineItem::new("Stock", dec!(800))],
            expenses: vec![LineItem::new("Rent", dec!(200))],
            ..Default::default()
        };

        let deductions = build_deductions(&pl);

        assert_eq!(deductions.len(), pl.expenses.len());
        assert_eq!(deductions[0].description, "Rent");
    }

    #[test]
    fn empty_expenses_yield_no_deductions() {
        let pl = ProfitAndLossStatement::default();

        assert!(build_deductions(&pl).is_empty());
    }
}
