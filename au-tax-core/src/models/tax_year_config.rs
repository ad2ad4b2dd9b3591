//! Rates and thresholds for a single Australian financial year.
//!
//! The built-in schedule is FY 2023-24 (resident individual rates before the
//! stage 3 changes, 25% base rate entity company rate). Other years are
//! loaded from configuration and checked with [`TaxYearConfig::validate`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TaxBracket;

/// Financial year the built-in schedule applies to.
pub const DEFAULT_FINANCIAL_YEAR: &str = "2023-24";

/// Flat rate applied to companies (base rate entity).
pub const COMPANY_TAX_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Rough estimate applied to trusts and partnerships. Distributions to
/// beneficiaries and partners are not modelled.
pub const TRUST_PARTNERSHIP_TAX_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// GST is 10% of the exclusive price, so 1/11 of a GST-inclusive amount.
pub const GST_DIVISOR: Decimal = Decimal::from_parts(11, 0, 0, false, 0);

/// Errors raised when a [`TaxYearConfig`] is internally inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxConfigError {
    /// A flat rate must be between 0 and 1.
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    /// The GST divisor must be positive.
    #[error("GST divisor must be positive, got {0}")]
    InvalidGstDivisor(Decimal),

    /// No individual brackets were configured.
    #[error("no individual tax brackets configured")]
    NoBrackets,

    /// A bracket's rate is outside [0, 1].
    #[error("bracket {index} has rate {rate} outside 0..=1")]
    InvalidBracketRate { index: usize, rate: Decimal },

    /// A bracket does not start where the previous one ends.
    #[error("bracket {index} starts at {min_income}, expected {expected}")]
    NonContiguousBracket {
        index: usize,
        min_income: Decimal,
        expected: Decimal,
    },

    /// A bracket's upper bound is not above its lower bound.
    #[error("bracket {index} has max income {max_income} not above min income {min_income}")]
    EmptyBracket {
        index: usize,
        min_income: Decimal,
        max_income: Decimal,
    },

    /// A bracket's base tax does not equal the tax at the top of the previous bracket.
    #[error("bracket {index} base tax {base_tax} does not match {expected} owed at its lower bound")]
    DiscontinuousBaseTax {
        index: usize,
        base_tax: Decimal,
        expected: Decimal,
    },

    /// Only the final bracket may be open-ended, and it must be.
    #[error("only the last bracket may have no upper bound (bracket {0})")]
    UnboundedBracket(usize),

    /// The final bracket has an upper bound, leaving higher incomes uncovered.
    #[error("last bracket must have no upper bound")]
    BoundedTopBracket,
}

/// Tax rates and thresholds for one financial year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    /// Financial year label, e.g. `2023-24`.
    pub financial_year: String,

    /// Flat rate for companies.
    pub company_rate: Decimal,

    /// Flat estimate for trusts and partnerships.
    pub trust_partnership_rate: Decimal,

    /// Divisor that extracts GST from a GST-inclusive amount.
    pub gst_divisor: Decimal,

    /// Resident individual brackets, ascending by `min_income`.
    pub individual_brackets: Vec<TaxBracket>,
}

impl TaxYearConfig {
    /// The FY 2023-24 schedule.
    ///
    /// | Taxable income        | Tax                                  |
    /// |-----------------------|--------------------------------------|
    /// | 0 – 18,200            | Nil                                  |
    /// | 18,201 – 45,000       | 19c for each $1 over 18,200          |
    /// | 45,001 – 120,000      | 5,092 plus 32.5c for each $1 over 45,000 |
    /// | 120,001 – 180,000     | 29,467 plus 37c for each $1 over 120,000 |
    /// | 180,001 and over      | 51,667 plus 45c for each $1 over 180,000 |
    pub fn fy2023_24() -> Self {
        Self {
            financial_year: DEFAULT_FINANCIAL_YEAR.to_string(),
            company_rate: COMPANY_TAX_RATE,
            trust_partnership_rate: TRUST_PARTNERSHIP_TAX_RATE,
            gst_divisor: GST_DIVISOR,
            individual_brackets: vec![
                bracket(0, 0, Some(18_200), 0, 0),
                bracket(18_200, 0, Some(45_000), 19, 2),
                bracket(45_000, 5_092, Some(120_000), 325, 3),
                bracket(120_000, 29_467, Some(180_000), 37, 2),
                bracket(180_000, 51_667, None, 45, 2),
            ],
        }
    }

    /// Checks that rates are sane and the bracket schedule is a continuous
    /// step function covering every income.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaxConfigError`] found.
    pub fn validate(&self) -> Result<(), TaxConfigError> {
        check_rate("company rate", self.company_rate)?;
        check_rate("trust/partnership rate", self.trust_partnership_rate)?;

        if self.gst_divisor <= Decimal::ZERO {
            return Err(TaxConfigError::InvalidGstDivisor(self.gst_divisor));
        }

        let last = self
            .individual_brackets
            .len()
            .checked_sub(1)
            .ok_or(TaxConfigError::NoBrackets)?;

        let mut previous: Option<&TaxBracket> = None;
        for (index, current) in self.individual_brackets.iter().enumerate() {
            if current.tax_rate < Decimal::ZERO || current.tax_rate > Decimal::ONE {
                return Err(TaxConfigError::InvalidBracketRate {
                    index,
                    rate: current.tax_rate,
                });
            }

            match current.max_income {
                Some(max_income) if max_income <= current.min_income => {
                    return Err(TaxConfigError::EmptyBracket {
                        index,
                        min_income: current.min_income,
                        max_income,
                    });
                }
                Some(_) if index == last => return Err(TaxConfigError::BoundedTopBracket),
                None if index != last => return Err(TaxConfigError::UnboundedBracket(index)),
                _ => {}
            }

            if let Some(prev) = previous {
                // Guaranteed bounded by the checks on the previous iteration.
                let expected_min = prev.max_income.unwrap_or(prev.min_income);
                if current.min_income != expected_min {
                    return Err(TaxConfigError::NonContiguousBracket {
                        index,
                        min_income: current.min_income,
                        expected: expected_min,
                    });
                }

                let expected_base = prev.tax_at_upper_bound().unwrap_or(prev.base_tax);
                if current.base_tax != expected_base {
                    return Err(TaxConfigError::DiscontinuousBaseTax {
                        index,
                        base_tax: current.base_tax,
                        expected: expected_base,
                    });
                }
            }

            previous = Some(current);
        }

        Ok(())
    }
}

impl Default for TaxYearConfig {
    fn default() -> Self {
        Self::fy2023_24()
    }
}

fn bracket(
    min_income: i64,
    base_tax: i64,
    max_income: Option<i64>,
    rate_mantissa: i64,
    rate_scale: u32,
) -> TaxBracket {
    TaxBracket {
        min_income: Decimal::from(min_income),
        max_income: max_income.map(Decimal::from),
        tax_rate: Decimal::new(rate_mantissa, rate_scale),
        base_tax: Decimal::from(base_tax),
    }
}

fn check_rate(
    name: &'static str,
    value: Decimal,
) -> Result<(), TaxConfigError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(TaxConfigError::InvalidRate { name, value });
    }
    Ok(())
}
