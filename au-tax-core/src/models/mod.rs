mod adjustment;
mod bas_statement;
mod business_entity;
mod deduction;
mod lodgement_status;
mod profit_and_loss;
mod tax_bracket;
mod tax_return;
mod tax_year_config;

pub use adjustment::{AdjustmentDirection, AdjustmentType, TaxAdjustment};
pub use bas_statement::{BasPeriod, BasStatement};
pub use business_entity::{BusinessEntity, BusinessStructure};
pub use deduction::TaxDeduction;
pub use lodgement_status::LodgementStatus;
pub use profit_and_loss::{LineItem, ProfitAndLossStatement};
pub use tax_bracket::TaxBracket;
pub use tax_return::{ScheduleEntry, TaxCredit, TaxReturn, TaxReturnSchedule};
pub use tax_year_config::{TaxConfigError, TaxYearConfig};
