//! Resolution of the BAS reporting period from command-line style inputs.

use au_tax_core::{BasPeriod, ValidationError};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// The financial year label did not start with a four-digit year.
    #[error("financial year '{0}' must look like 2023-24")]
    InvalidFinancialYear(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Calendar year in which a financial year label such as `2023-24` begins.
pub fn financial_year_start(label: &str) -> Result<i32, PeriodError> {
    let invalid = || PeriodError::InvalidFinancialYear(label.to_string());

    let (start, end) = label.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = start.parse().map_err(|_| invalid())?;
    if start.len() != 4 || end.is_empty() || !end.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    Ok(year)
}

/// Picks the reporting period: explicit dates win, then a quarter of the
/// financial year, otherwise the whole financial year (1 July to 30 June).
pub fn resolve_period(
    financial_year: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    quarter: Option<u32>,
) -> Result<BasPeriod, PeriodError> {
    if let (Some(start), Some(end)) = (start, end) {
        return Ok(BasPeriod::new(start, end)?);
    }

    let fy_start = financial_year_start(financial_year)?;
    if let Some(quarter) = quarter {
        return Ok(BasPeriod::quarter(fy_start, quarter)?);
    }

    let first = BasPeriod::quarter(fy_start, 1)?;
    let last = BasPeriod::quarter(fy_start, 4)?;
    Ok(BasPeriod::new(first.start_date, last.end_date)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn financial_year_start_parses_label() {
        assert_eq!(financial_year_start("2023-24"), Ok(2023));
        assert_eq!(financial_year_start(" 2024-2025 "), Ok(2024));
    }

    #[test]
    fn financial_year_start_rejects_bad_labels() {
        for label in ["2023", "23-24", "FY2023-24", "2023-", "2023-xx"] {
            assert_eq!(
                financial_year_start(label),
                Err(PeriodError::InvalidFinancialYear(label.to_string())),
                "{label}"
            );
        }
    }

    #[test]
    fn explicit_dates_take_precedence() {
        let period =
            resolve_period("2023-24", Some(date(2024, 2, 1)), Some(date(2024, 2, 29)), Some(1))
                .unwrap();

        assert_eq!(period.start_date, date(2024, 2, 1));
        assert_eq!(period.end_date, date(2024, 2, 29));
    }

    #[test]
    fn quarter_of_financial_year() {
        let period = resolve_period("2023-24", None, None, Some(2)).unwrap();

        assert_eq!(period.start_date, date(2023, 10, 1));
        assert_eq!(period.end_date, date(2023, 12, 31));
    }

    #[test]
    fn defaults_to_whole_financial_year() {
        let period = resolve_period("2023-24", None, None, None).unwrap();

        assert_eq!(period.start_date, date(2023, 7, 1));
        assert_eq!(period.end_date, date(2024, 6, 30));
    }

    #[test]
    fn inverted_dates_are_rejected() {
        let result = resolve_period("2023-24", Some(date(2024, 3, 1)), Some(date(2024, 1, 1)), None);

        assert!(matches!(result, Err(PeriodError::Invalid(ValidationError::InvalidPeriod { .. }))));
    }
}
