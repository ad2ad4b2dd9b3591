//! Builders for the initial lodgement records.
//!
//! Both records start in [`crate::LodgementStatus::NotStarted`] with a
//! placeholder due date of "now"; callers with a statutory due date replace
//! it via `with_due_date`.

pub mod bas;
pub mod tax_return;

pub use bas::create_initial_bas_statement;
pub use tax_return::create_initial_tax_return;
