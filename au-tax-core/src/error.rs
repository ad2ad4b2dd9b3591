use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when untrusted input is converted into the core data model.
///
/// The calculations themselves never fail; every check happens at the
/// boundary where raw strings and amounts enter the system.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Adjustment direction was neither `add` nor `subtract`.
    #[error("invalid adjustment direction '{0}' (expected 'add' or 'subtract')")]
    InvalidAdjustmentDirection(String),

    /// Adjustment type was neither `permanent` nor `timing`.
    #[error("invalid adjustment type '{0}' (expected 'permanent' or 'timing')")]
    InvalidAdjustmentType(String),

    /// A section total does not fit in a `Decimal`.
    #[error("{section} total exceeds the representable amount range")]
    AmountOverflow { section: &'static str },

    /// A line item had an empty or whitespace-only name.
    #[error("{section} item at position {index} has an empty name")]
    EmptyLineItemName { section: &'static str, index: usize },

    /// A reporting period ends before it starts.
    #[error("period end {end} is before start {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    /// BAS quarters are numbered 1 to 4.
    #[error("quarter must be between 1 and 4, got {0}")]
    InvalidQuarter(u32),
}
