use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Currency markers, thousands separators and whitespace stripped before parsing.
static CURRENCY_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)AUD|A\$|\$|,|\s").expect("currency pattern is valid"));

/// Accounting-style negative, e.g. `(1,250.00)`.
static PARENTHESISED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((.*)\)$").expect("parenthesis pattern is valid"));

/// Error returned when a string cannot be parsed as a currency amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

impl ParseAmountError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parses a currency amount as exported by accounting packages.
///
/// Accepts `$` / `A$` / `AUD` markers, comma thousands separators and
/// parentheses for negatives (`"(1,250.00)"` is `-1250.00`). Empty or
/// whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let trimmed = s.trim();
    let (body, negate) = match PARENTHESISED.captures(trimmed) {
        Some(caps) => (caps.get(1).map_or("", |m| m.as_str()), true),
        None => (trimmed, false),
    };

    let normalized = CURRENCY_NOISE.replace_all(body, "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })?;

    Ok(if negate { -value } else { value })
}
