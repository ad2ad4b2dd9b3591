//! Maps expense line names to tax deduction categories.

/// Category used when an expense name has no entry in the lookup table.
pub const OTHER_DEDUCTIONS: &str = "Other Deductions";

/// Expense names recognised by the mapper and the deduction category each
/// one is claimed under. Matching is exact and case-sensitive.
const EXPENSE_CATEGORIES: &[(&str, &str)] = &[
    ("Sales & Marketing", "Advertising and Marketing"),
    ("Research & Development", "Research and Development"),
    ("General & Administrative", "General Administration"),
    ("Depreciation & Amortization", "Depreciation"),
    ("Interest Expense", "Interest"),
];

/// Returns the deduction category for an expense line name.
///
/// Unknown names, including case variants and partial matches, fall back to
/// [`OTHER_DEDUCTIONS`].
///
/// ```
/// use au_tax_core::map_expense_name_to_category;
///
/// assert_eq!(map_expense_name_to_category("Interest Expense"), "Interest");
/// assert_eq!(map_expense_name_to_category("interest expense"), "Other Deductions");
/// ```
pub fn map_expense_name_to_category(name: &str) -> &'static str {
    EXPENSE_CATEGORIES
        .iter()
        .find(|(expense, _)| *expense == name)
        .map_or(OTHER_DEDUCTIONS, |&(_, category)| category)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn maps_every_known_expense_name() {
        let cases = [
            ("Sales & Marketing", "Advertising and Marketing"),
            ("Research & Development", "Research and Development"),
            ("General & Administrative", "General Administration"),
            ("Depreciation & Amortization", "Depreciation"),
            ("Interest Expense", "Interest"),
        ];

        for (name, expected) in cases {
            assert_eq!(map_expense_name_to_category(name), expected, "{name}");
        }
    }

    #[test]
    fn unknown_names_fall_back_to_other_deductions() {
        for name in [
            "",
            "Rent",
            "sales & marketing",
            "Sales & Marketing ",
            "Interest",
            "Depreciation",
            "Research",
        ] {
            assert_eq!(map_expense_name_to_category(name), OTHER_DEDUCTIONS, "{name:?}");
        }
    }
}
