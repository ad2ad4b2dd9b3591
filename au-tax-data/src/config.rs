//! TOML rate configuration.
//!
//! A config file describes one financial year. Decimal values are written
//! as strings so they are read exactly; thresholds may be bare integers.
//!
//! ```toml
//! financial_year = "2024-25"
//! company_rate = "0.25"
//! trust_partnership_rate = "0.30"
//! gst_divisor = 11
//!
//! [[individual_brackets]]
//! min_income = 0
//! max_income = 18200
//! tax_rate = "0"
//! base_tax = 0
//!
//! [[individual_brackets]]
//! min_income = 18200
//! tax_rate = "0.16"
//! base_tax = 0
//! ```

use std::path::{Path, PathBuf};

use au_tax_core::{TaxConfigError, TaxYearConfig};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while reading a rate configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("inconsistent tax rates: {0}")]
    Invalid(#[from] TaxConfigError),
}

/// Parse and validate a [`TaxYearConfig`] from TOML text.
pub fn parse_tax_year_config(input: &str) -> Result<TaxYearConfig, ConfigLoadError> {
    let config: TaxYearConfig = toml::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a [`TaxYearConfig`] file.
pub fn load_tax_year_config(path: &Path) -> Result<TaxYearConfig, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_tax_year_config(&contents)?;

    info!(
        path = %path.display(),
        financial_year = %config.financial_year,
        brackets = config.individual_brackets.len(),
        "loaded tax year config"
    );

    Ok(config)
}

/// The financial year to report: the requested label if given, otherwise
/// the year the rates were configured for.
///
/// A requested year that differs from `config.financial_year` is honoured
/// but logged, since the return is then labelled with one year and taxed
/// at another year's rates.
pub fn effective_financial_year<'a>(
    requested: Option<&'a str>,
    config: &'a TaxYearConfig,
) -> &'a str {
    match requested {
        Some(year) if year != config.financial_year => {
            warn!(
                requested = year,
                configured = %config.financial_year,
                "financial year differs from the configured rates"
            );
            year
        }
        Some(year) => year,
        None => &config.financial_year,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TWO_BRACKETS: &str = r#"
financial_year = "2024-25"
company_rate = "0.25"
trust_partnership_rate = "0.30"
gst_divisor = 11

[[individual_brackets]]
min_income = 0
max_income = 18200
tax_rate = "0"
base_tax = 0

[[individual_brackets]]
min_income = 18200
tax_rate = "0.16"
base_tax = 0
"#;

    #[test]
    fn parses_valid_config() {
        let config = parse_tax_year_config(TWO_BRACKETS).expect("should parse");

        assert_eq!(config.financial_year, "2024-25");
        assert_eq!(config.company_rate, dec!(0.25));
        assert_eq!(config.gst_divisor, dec!(11));
        assert_eq!(config.individual_brackets.len(), 2);
        assert_eq!(config.individual_brackets[0].max_income, Some(dec!(18200)));
        assert_eq!(config.individual_brackets[1].max_income, None);
        assert_eq!(config.individual_brackets[1].tax_rate, dec!(0.16));
    }

    #[test]
    fn rejects_discontinuous_brackets() {
        let broken = TWO_BRACKETS.replace("min_income = 18200", "min_income = 20000");

        match parse_tax_year_config(&broken).unwrap_err() {
            ConfigLoadError::Invalid(TaxConfigError::NonContiguousBracket { index, .. }) => {
                assert_eq!(index, 1);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn rejects_missing_field() {
        let missing = TWO_BRACKETS.replace("gst_divisor = 11\n", "");

        assert!(matches!(
            parse_tax_year_config(&missing),
            Err(ConfigLoadError::Parse(_))
        ));
    }

    #[test]
    fn financial_year_defaults_to_configured_year() {
        let config = parse_tax_year_config(TWO_BRACKETS).expect("should parse");

        assert_eq!(effective_financial_year(None, &config), "2024-25");
        assert_eq!(effective_financial_year(Some("2024-25"), &config), "2024-25");
    }

    #[test]
    fn requested_financial_year_is_kept_when_it_differs() {
        let config = parse_tax_year_config(TWO_BRACKETS).expect("should parse");

        assert_eq!(effective_financial_year(Some("2023-24"), &config), "2023-24");
    }

    #[test]
    fn missing_file_returns_io_error() {
        let result = load_tax_year_config(Path::new("/this/path/does/not/exist.toml"));

        assert!(matches!(result, Err(ConfigLoadError::Io { .. })));
    }
}
