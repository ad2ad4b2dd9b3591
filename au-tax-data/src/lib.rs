//! Input and output plumbing around `au-tax-core`: CSV statement and
//! adjustment loaders, TOML rate configuration, report rendering and
//! logging setup for the `au-tax-estimator` binary.

pub mod amount;
pub mod config;
pub mod loader;
pub mod logging;
pub mod period;
pub mod report;

pub use config::{
    ConfigLoadError, effective_financial_year, load_tax_year_config, parse_tax_year_config,
};
pub use loader::{CsvLoadError, load_adjustments_from_str, load_statement_from_str};
pub use report::EstimateReport;
