//! CSV loaders for profit-and-loss statements and tax adjustments.
//!
//! ## Statement format
//!
//! | Column    | Required | Notes |
//! |-----------|----------|-------|
//! | `section` | yes | `revenue`, `cost_of_sales`, `expense` or `net_income` |
//! | `name`    | yes | Line item name; ignored for `net_income` |
//! | `amount`  | yes | GST-inclusive; `$`, commas and `(negatives)` accepted |
//!
//! Rows keep file order within each section. At most one `net_income` row
//! is allowed; without one, net income is revenue less cost of sales less
//! expenses.
//!
//! ```csv
//! section,name,amount
//! revenue,Sales,"$11,000.00"
//! expense,Rent,"2,200.00"
//! net_income,Net profit,8800
//! ```
//!
//! ## Adjustment format
//!
//! | Column            | Required | Notes |
//! |-------------------|----------|-------|
//! | `amount`          | yes | |
//! | `direction`       | yes | `add` or `subtract` |
//! | `adjustment_type` | yes | `permanent` or `timing` |
//! | `category`        | no  | |
//! | `description`     | no  | |

use std::path::{Path, PathBuf};

use au_tax_core::{
    AdjustmentDirection, AdjustmentType, LineItem, ProfitAndLossStatement, TaxAdjustment,
    ValidationError,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::amount::{ParseAmountError, parse_amount};

// ---------------------------------------------------------------------------
// Serde rows mirroring the CSV layouts
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct StatementRow {
    section: String,
    name: String,
    amount: String,
}

#[derive(Debug, Deserialize)]
struct AdjustmentRow {
    amount: String,
    direction: String,
    adjustment_type: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
///
/// Row numbers are 1-based data rows (the header is row 0).
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// An amount cell could not be parsed.
    #[error("row {row}: {source}")]
    InvalidAmount {
        row: usize,
        #[source]
        source: ParseAmountError,
    },

    /// A `section` cell was not one of the recognised sections.
    #[error("unrecognised section '{section}' on row {row}")]
    UnknownSection { section: String, row: usize },

    /// More than one `net_income` row was supplied.
    #[error("duplicate net_income row {row}")]
    DuplicateNetIncome { row: usize },

    /// A row failed domain validation (e.g. an unknown adjustment direction).
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ValidationError,
    },

    /// The assembled statement failed validation.
    #[error("invalid statement: {0}")]
    InvalidStatement(#[from] ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Revenue,
    CostOfSales,
    Expense,
    NetIncome,
}

impl Section {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "revenue" | "income" => Some(Self::Revenue),
            "cost_of_sales" | "cogs" => Some(Self::CostOfSales),
            "expense" | "expenses" => Some(Self::Expense),
            "net_income" => Some(Self::NetIncome),
            _ => None,
        }
    }
}

fn reader(input: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes())
}

fn amount_at(
    cell: &str,
    row: usize,
) -> Result<Decimal, CsvLoadError> {
    parse_amount(cell).map_err(|source| CsvLoadError::InvalidAmount { row, source })
}

fn read_file(path: &Path) -> Result<String, CsvLoadError> {
    std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

/// Parse a profit-and-loss statement from CSV text.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidAmount`] / [`CsvLoadError::UnknownSection`] /
///   [`CsvLoadError::DuplicateNetIncome`] for bad rows.
/// * [`CsvLoadError::InvalidStatement`] if a line item is unnamed or a
///   section total overflows.
pub fn load_statement_from_str(input: &str) -> Result<ProfitAndLossStatement, CsvLoadError> {
    let mut revenue = Vec::new();
    let mut cost_of_sales = Vec::new();
    let mut expenses = Vec::new();
    let mut net_income: Option<Decimal> = None;

    for (idx, result) in reader(input).deserialize::<StatementRow>().enumerate() {
        let row = result?;
        let row_number = idx + 1;

        let section =
            Section::parse(&row.section).ok_or_else(|| CsvLoadError::UnknownSection {
                section: row.section.clone(),
                row: row_number,
            })?;
        let amount = amount_at(&row.amount, row_number)?;

        match section {
            Section::Revenue => revenue.push(LineItem::new(row.name, amount)),
            Section::CostOfSales => cost_of_sales.push(LineItem::new(row.name, amount)),
            Section::Expense => expenses.push(LineItem::new(row.name, amount)),
            Section::NetIncome => {
                if net_income.replace(amount).is_some() {
                    return Err(CsvLoadError::DuplicateNetIncome { row: row_number });
                }
            }
        }
    }

    let statement = match net_income {
        Some(net_income) => ProfitAndLossStatement {
            revenue,
            cost_of_sales,
            expenses,
            net_income,
        },
        None => {
            debug!("no net_income row; deriving net income from line items");
            ProfitAndLossStatement::with_derived_net_income(revenue, cost_of_sales, expenses)?
        }
    };

    statement.validate()?;

    debug!(
        revenue = statement.revenue.len(),
        cost_of_sales = statement.cost_of_sales.len(),
        expenses = statement.expenses.len(),
        net_income = %statement.net_income,
        "loaded profit and loss statement"
    );

    Ok(statement)
}

/// Read a statement file from disk and delegate to [`load_statement_from_str`].
pub fn load_statement_from_file(path: &Path) -> Result<ProfitAndLossStatement, CsvLoadError> {
    load_statement_from_str(&read_file(path)?)
}

// ---------------------------------------------------------------------------
// Adjustments
// ---------------------------------------------------------------------------

fn convert_adjustment(
    row: AdjustmentRow,
    row_number: usize,
) -> Result<TaxAdjustment, CsvLoadError> {
    let invalid = |source| CsvLoadError::InvalidRow {
        row: row_number,
        source,
    };

    Ok(TaxAdjustment {
        amount: amount_at(&row.amount, row_number)?,
        direction: AdjustmentDirection::parse(&row.direction).map_err(invalid)?,
        adjustment_type: AdjustmentType::parse(&row.adjustment_type).map_err(invalid)?,
        category: row.category,
        description: row.description,
    })
}

/// Parse tax adjustments from CSV text, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidAmount`] for an unparseable amount.
/// * [`CsvLoadError::InvalidRow`] for an unknown direction or adjustment type.
pub fn load_adjustments_from_str(input: &str) -> Result<Vec<TaxAdjustment>, CsvLoadError> {
    reader(input)
        .deserialize::<AdjustmentRow>()
        .enumerate()
        .map(|(idx, result)| convert_adjustment(result?, idx + 1))
        .collect()
}

/// Read an adjustments file from disk and delegate to [`load_adjustments_from_str`].
pub fn load_adjustments_from_file(path: &Path) -> Result<Vec<TaxAdjustment>, CsvLoadError> {
    load_adjustments_from_str(&read_file(path)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
