//! Tax payable estimates by business structure.
//!
//! | Structure              | Schedule                                     |
//! |------------------------|----------------------------------------------|
//! | Company                | Flat company rate                            |
//! | Trust, Partnership     | Flat estimate at an individual-like rate     |
//! | Sole trader, other     | Progressive resident individual brackets     |
//!
//! The trust and partnership figure is a rough proxy: the real liability
//! depends on how income is distributed to beneficiaries and partners.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use au_tax_core::calculations::TaxPayableEstimator;
//! use au_tax_core::{BusinessEntity, BusinessStructure, TaxYearConfig};
//!
//! let config = TaxYearConfig::default();
//! let estimator = TaxPayableEstimator::new(&config);
//!
//! let company = BusinessEntity::new("acme", BusinessStructure::Company);
//! let sole_trader = BusinessEntity::new("jo", BusinessStructure::SoleTrader);
//!
//! assert_eq!(estimator.estimate(dec!(100000), &company), dec!(25000));
//! assert_eq!(estimator.estimate(dec!(200000), &sole_trader), dec!(60667));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{BusinessEntity, BusinessStructure, TaxYearConfig};

/// Applies a [`TaxYearConfig`] to taxable income.
#[derive(Debug, Clone)]
pub struct TaxPayableEstimator<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> TaxPayableEstimator<'a> {
    /// Creates an estimator over the given rates.
    ///
    /// The config is expected to have passed [`TaxYearConfig::validate`];
    /// an empty bracket list makes every individual estimate zero.
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Estimates tax payable for `entity` on `taxable_income`.
    ///
    /// Negative income is not special-cased: flat rates produce a negative
    /// figure and the individual schedule produces zero.
    pub fn estimate(
        &self,
        taxable_income: Decimal,
        entity: &BusinessEntity,
    ) -> Decimal {
        if taxable_income < Decimal::ZERO {
            warn!(
                entity = %entity.id,
                %taxable_income,
                "negative taxable income passed to tax payable estimate"
            );
        }

        let tax = match &entity.business_structure {
            BusinessStructure::Company => self.flat(taxable_income, self.config.company_rate),
            BusinessStructure::Trust | BusinessStructure::Partnership => {
                self.flat(taxable_income, self.config.trust_partnership_rate)
            }
            BusinessStructure::SoleTrader | BusinessStructure::Other(_) => {
                self.individual(taxable_income)
            }
        };

        debug!(
            entity = %entity.id,
            structure = entity.business_structure.as_str(),
            %taxable_income,
            %tax,
            "estimated tax payable"
        );

        tax
    }

    /// Flat-rate tax.
    fn flat(
        &self,
        taxable_income: Decimal,
        rate: Decimal,
    ) -> Decimal {
        taxable_income * rate
    }

    /// Progressive tax from the individual brackets.
    ///
    /// The first bracket whose upper bound covers the income applies, so
    /// incomes below the first bracket's lower bound use the first bracket.
    fn individual(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.config
            .individual_brackets
            .iter()
            .find(|b| b.covers(taxable_income))
            .map_or(Decimal::ZERO, |b| {
                b.base_tax + (taxable_income - b.min_income) * b.tax_rate
            })
    }
}

/// Estimates tax payable under the built-in FY 2023-24 rates.
pub fn estimate_tax_payable(
    taxable_income: Decimal,
    entity: &BusinessEntity,
) -> Decimal {
    let config = TaxYearConfig::default();
    TaxPayableEstimator::new(&config).estimate(taxable_income, entity)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn entity(structure: BusinessStructure) -> BusinessEntity {
        BusinessEntity::new("entity-1", structure)
    }

    fn sole_trader_tax(income: Decimal) -> Decimal {
        estimate_tax_payable(income, &entity(BusinessStructure::SoleTrader))
    }

    // =========================================================================
    // flat-rate structures
    // =========================================================================

    #[test]
    fn company_pays_flat_25_percent() {
        let result = estimate_tax_payable(dec!(100000), &entity(BusinessStructure::Company));

        assert_eq!(result, dec!(25000));
    }

    #[test]
    fn trust_and_partnership_pay_flat_30_percent() {
        for structure in [BusinessStructure::Trust, BusinessStructure::Partnership] {
            let result = estimate_tax_payable(dec!(100000), &entity(structure));

            assert_eq!(result, dec!(30000));
        }
    }

    #[test]
    fn company_with_negative_income_yields_negative_tax() {
        let result = estimate_tax_payable(dec!(-1000), &entity(BusinessStructure::Company));

        assert_eq!(result, dec!(-250));
    }

    // =========================================================================
    // individual brackets
    // =========================================================================

    #[test]
    fn income_within_tax_free_threshold_is_nil() {
        assert_eq!(sole_trader_tax(dec!(0)), dec!(0));
        assert_eq!(sole_trader_tax(dec!(18200)), dec!(0));
    }

    #[test]
    fn negative_income_is_nil_for_individuals() {
        assert_eq!(sole_trader_tax(dec!(-5000)), dec!(0));
    }

    #[test]
    fn second_bracket() {
        // (30000 - 18200) * 0.19 = 2242
        assert_eq!(sole_trader_tax(dec!(30000)), dec!(2242));
    }

    #[test]
    fn second_bracket_upper_boundary() {
        assert_eq!(sole_trader_tax(dec!(45000)), dec!(5092));
    }

    #[test]
    fn third_bracket() {
        // 5092 + (100000 - 45000) * 0.325 = 22967
        assert_eq!(sole_trader_tax(dec!(100000)), dec!(22967));
    }

    #[test]
    fn fourth_bracket() {
        // 29467 + (150000 - 120000) * 0.37 = 40567
        assert_eq!(sole_trader_tax(dec!(150000)), dec!(40567));
    }

    #[test]
    fn top_bracket() {
        // 51667 + 20000 * 0.45 = 60667
        assert_eq!(sole_trader_tax(dec!(200000)), dec!(60667));
    }

    #[test]
    fn unrecognised_structure_uses_individual_brackets() {
        let other = entity(BusinessStructure::Other("cooperative".to_string()));

        assert_eq!(estimate_tax_payable(dec!(45000), &other), dec!(5092));
    }

    #[test]
    fn brackets_are_continuous_at_each_boundary() {
        let epsilon = dec!(0.0000001);
        let tolerance = dec!(0.000001);

        for boundary in [dec!(18200), dec!(45000), dec!(120000), dec!(180000)] {
            let at = sole_trader_tax(boundary);
            let above = sole_trader_tax(boundary + epsilon);

            assert!(
                (above - at).abs() < tolerance,
                "discontinuity at {boundary}: {at} vs {above}"
            );
        }
    }

    #[test]
    fn tax_is_monotonic_across_brackets() {
        let incomes = [0, 10000, 18200, 30000, 45000, 80000, 120000, 150000, 180000, 500000];

        let taxes: Vec<Decimal> = incomes
            .iter()
            .map(|&i| sole_trader_tax(Decimal::from(i)))
            .collect();

        assert!(taxes.windows(2).all(|w| w[0] <= w[1]), "{taxes:?}");
    }

    #[test]
    fn estimator_uses_supplied_config() {
        let config = TaxYearConfig {
            company_rate: dec!(0.30),
            ..TaxYearConfig::default()
        };
        let estimator = TaxPayableEstimator::new(&config);

        let result = estimator.estimate(dec!(1000), &entity(BusinessStructure::Company));

        assert_eq!(result, dec!(300));
    }

    #[test]
    fn empty_brackets_estimate_zero() {
        let config = TaxYearConfig {
            individual_brackets: vec![],
            ..TaxYearConfig::default()
        };
        let estimator = TaxPayableEstimator::new(&config);

        let result = estimator.estimate(dec!(1000000), &entity(BusinessStructure::SoleTrader));

        assert_eq!(result, dec!(0));
    }
}
