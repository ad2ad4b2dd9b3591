use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A claimed deduction derived from an expense line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDeduction {
    pub id: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    /// References to supporting documents (receipts, invoices).
    pub evidence: Vec<String>,
}
