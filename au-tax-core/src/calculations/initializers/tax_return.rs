use chrono::Utc;
use tracing::info;

use crate::calculations::deductions::build_deductions;
use crate::calculations::income::estimate_taxable_income;
use crate::calculations::payable::TaxPayableEstimator;
use crate::{
    BusinessEntity, LodgementStatus, ProfitAndLossStatement, TaxAdjustment, TaxReturn,
    TaxYearConfig,
};

/// Creates a not-yet-started tax return under the built-in rates.
///
/// Taxable income comes from net income plus adjustments, tax payable from
/// the entity's schedule and deductions from the expense lines. Credits,
/// schedules and attachments start empty.
pub fn create_initial_tax_return(
    entity_id: &str,
    financial_year: &str,
    pl: &ProfitAndLossStatement,
    entity: &BusinessEntity,
    adjustments: &[TaxAdjustment],
) -> TaxReturn {
    TaxReturnInitializer::new(&TaxYearConfig::default()).create(
        entity_id,
        financial_year,
        pl,
        entity,
        adjustments,
    )
}

/// Creates initial tax returns under an explicit [`TaxYearConfig`].
#[derive(Debug, Clone)]
pub struct TaxReturnInitializer<'a> {
    estimator: TaxPayableEstimator<'a>,
}

impl<'a> TaxReturnInitializer<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self {
            estimator: TaxPayableEstimator::new(config),
        }
    }

    pub fn create(
        &self,
        entity_id: &str,
        financial_year: &str,
        pl: &ProfitAndLossStatement,
        entity: &BusinessEntity,
        adjustments: &[TaxAdjustment],
    ) -> TaxReturn {
        let taxable_income = estimate_taxable_income(pl, adjustments);
        let tax_payable = self.estimator.estimate(taxable_income, entity);
        let deductions = build_deductions(pl);

        info!(
            entity_id,
            financial_year,
            deductions = deductions.len(),
            %taxable_income,
            %tax_payable,
            "initialised tax return"
        );

        TaxReturn {
            id: format!("tax-return-{entity_id}-{financial_year}"),
            entity_id: entity_id.to_string(),
            financial_year: financial_year.to_string(),
            status: LodgementStatus::NotStarted,
            due_date: Utc::now(),
            taxable_income,
            tax_payable,
            deductions,
            credits: Vec::new(),
            schedules: Vec::new(),
            attachments: Vec::new(),
        }
    }
}
