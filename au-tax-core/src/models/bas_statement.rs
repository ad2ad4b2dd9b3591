use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LodgementStatus, ValidationError};

/// The reporting period a BAS statement covers, inclusive of both dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BasPeriod {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPeriod`] when `end_date` precedes `start_date`.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if end_date < start_date {
            return Err(ValidationError::InvalidPeriod {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Quarterly period of the financial year starting 1 July `fy_start_year`.
    ///
    /// Q1 is July to September, Q2 October to December, Q3 January to March
    /// and Q4 April to June.
    ///
    /// ```
    /// use au_tax_core::BasPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let q3 = BasPeriod::quarter(2023, 3).unwrap();
    ///
    /// assert_eq!(q3.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    /// assert_eq!(q3.end_date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidQuarter`] unless `quarter` is 1 to 4.
    pub fn quarter(
        fy_start_year: i32,
        quarter: u32,
    ) -> Result<Self, ValidationError> {
        let (year, first_month) = match quarter {
            1 => (fy_start_year, 7),
            2 => (fy_start_year, 10),
            3 => (fy_start_year + 1, 1),
            4 => (fy_start_year + 1, 4),
            _ => return Err(ValidationError::InvalidQuarter(quarter)),
        };

        let start = NaiveDate::from_ymd_opt(year, first_month, 1)
            .ok_or(ValidationError::InvalidQuarter(quarter))?;
        let next = start
            .checked_add_months(chrono::Months::new(3))
            .ok_or(ValidationError::InvalidQuarter(quarter))?;
        let end = next
            .pred_opt()
            .ok_or(ValidationError::InvalidQuarter(quarter))?;

        Self::new(start, end)
    }

    /// Number of days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Financial year (by its starting calendar year) the period begins in.
    pub fn financial_year_start(&self) -> i32 {
        let date = self.start_date;
        if date.month() >= 7 {
            date.year()
        } else {
            date.year() - 1
        }
    }
}

/// Business activity statement summarising GST for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasStatement {
    pub id: String,
    pub entity_id: String,
    pub period: BasPeriod,
    pub status: LodgementStatus,
    pub due_date: DateTime<Utc>,
    pub gst_collected: Decimal,
    pub gst_paid: Decimal,
    pub gst_net_amount: Decimal,
    pub sales_total: Decimal,
    pub purchases_total: Decimal,
    pub payg_withholding: Decimal,
    pub payg_installments: Decimal,
    pub total_payable: Decimal,
    pub total_refundable: Decimal,
    pub attachments: Vec<String>,
}

impl BasStatement {
    /// Replaces the placeholder due date with the statutory one.
    pub fn with_due_date(
        mut self,
        due_date: DateTime<Utc>,
    ) -> Self {
        self.due_date = due_date;
        self
    }

    /// True when the statement results in a refund from the ATO.
    pub fn is_refund(&self) -> bool {
        self.total_refundable > Decimal::ZERO
    }
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
    fn new_rejects_end_before_start() {
        let result = BasPeriod::new(date(2024, 3, 31), date(2024, 1, 1));

        assert_eq!(
            result,
            Err(ValidationError::InvalidPeriod {
                start: date(2024, 3, 31),
                end: date(2024, 1, 1),
            })
        );
    }

    #[test]
    fn new_accepts_single_day_period() {
        let period = BasPeriod::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();

        assert_eq!(period.days(), 1);
    }

    #[test]
    fn quarters_cover_the_financial_year() {
        let expected = [
            (date(2023, 7, 1), date(2023, 9, 30)),
            (date(2023, 10, 1), date(2023, 12, 31)),
            (date(2024, 1, 1), date(2024, 3, 31)),
            (date(2024, 4, 1), date(2024, 6, 30)),
        ];

        for (q, (start, end)) in (1..=4).zip(expected) {
            let period = BasPeriod::quarter(2023, q).unwrap();
            assert_eq!((period.start_date, period.end_date), (start, end), "quarter {q}");
            assert_eq!(period.financial_year_start(), 2023);
        }
    }

    #[test]
    fn quarter_rejects_out_of_range() {
        assert_eq!(BasPeriod::quarter(2023, 0), Err(ValidationError::InvalidQuarter(0)));
        assert_eq!(BasPeriod::quarter(2023, 5), Err(ValidationError::InvalidQuarter(5)));
    }

    #[test]
    fn leap_year_quarter_has_91_days() {
        let q3 = BasPeriod::quarter(2023, 3).unwrap();

        assert_eq!(q3.days(), 91);
    }
}
