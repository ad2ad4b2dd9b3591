//! Tax and GST calculations over a profit-and-loss statement.
//!
//! Every function here is pure: it reads its inputs and returns a new value.
//! Free functions use the built-in [`crate::TaxYearConfig`]; the calculator
//! structs take an explicit config.

pub mod category;
pub mod common;
pub mod deductions;
pub mod gst;
pub mod income;
pub mod initializers;
pub mod payable;

pub use category::{OTHER_DEDUCTIONS, map_expense_name_to_category};
pub use deductions::build_deductions;
pub use gst::{GstCalculator, gst_collected, gst_net_amount, gst_paid};
pub use income::estimate_taxable_income;
pub use initializers::bas::BasInitializer;
pub use initializers::tax_return::TaxReturnInitializer;
pub use initializers::{create_initial_bas_statement, create_initial_tax_return};
pub use payable::{TaxPayableEstimator, estimate_tax_payable};
