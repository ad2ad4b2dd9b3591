//! Australian tax and BAS estimation core.
//!
//! Pure calculations that turn a profit-and-loss statement and a business
//! entity into an estimated taxable income, tax payable, GST position and
//! the initial `TaxReturn` / `BasStatement` records.

pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{
    build_deductions, create_initial_bas_statement, create_initial_tax_return,
    estimate_taxable_income, estimate_tax_payable, gst_collected, gst_net_amount, gst_paid,
    map_expense_name_to_category,
};
pub use error::ValidationError;
pub use models::*;
