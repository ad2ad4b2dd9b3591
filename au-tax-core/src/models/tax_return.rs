use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LodgementStatus, TaxDeduction};

/// A tax offset or credit claimed against tax payable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCredit {
    pub id: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

/// One labelled figure on a supporting schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub label: String,
    pub amount: Decimal,
}

/// A supporting schedule attached to a return (e.g. capital gains, losses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxReturnSchedule {
    pub id: String,
    pub schedule_type: String,
    pub entries: Vec<ScheduleEntry>,
}

/// An income tax return for one entity and financial year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxReturn {
    pub id: String,
    pub entity_id: String,
    pub financial_year: String,
    pub status: LodgementStatus,
    pub due_date: DateTime<Utc>,
    pub taxable_income: Decimal,
    pub tax_payable: Decimal,
    pub deductions: Vec<TaxDeduction>,
    pub credits: Vec<TaxCredit>,
    pub schedules: Vec<TaxReturnSchedule>,
    pub attachments: Vec<String>,
}

impl TaxReturn {
    /// Replaces the placeholder due date with the statutory one.
    pub fn with_due_date(
        mut self,
        due_date: DateTime<Utc>,
    ) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sum of all claimed deductions.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.iter().map(|d| d.amount).sum()
    }

    /// Sum of all claimed credits.
    pub fn total_credits(&self) -> Decimal {
        self.credits.iter().map(|c| c.amount).sum()
    }
}
