use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Whether an adjustment increases or reduces taxable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentDirection {
    Add,
    Subtract,
}

impl AdjustmentDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }

    /// Parses `add` or `subtract`, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            _ => Err(ValidationError::InvalidAdjustmentDirection(s.to_string())),
        }
    }

    /// The adjustment amount with the sign this direction applies.
    pub fn signed(
        &self,
        amount: Decimal,
    ) -> Decimal {
        match self {
            Self::Add => amount,
            Self::Subtract => -amount,
        }
    }
}

/// Permanent differences never reverse; timing differences reverse in a later year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentType {
    Permanent,
    Timing,
}

impl AdjustmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::Timing => "timing",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permanent" => Ok(Self::Permanent),
            "timing" => Ok(Self::Timing),
            _ => Err(ValidationError::InvalidAdjustmentType(s.to_string())),
        }
    }
}

/// A book-to-tax adjustment applied to accounting net income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAdjustment {
    pub amount: Decimal,
    pub direction: AdjustmentDirection,
    pub adjustment_type: AdjustmentType,
    pub category: String,
    pub description: String,
}

impl TaxAdjustment {
    /// Amount signed by direction: positive for `Add`, negative for `Subtract`.
    pub fn signed_amount(&self) -> Decimal {
        self.direction.signed(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn direction_parse_accepts_known_values() {
        assert_eq!(AdjustmentDirection::parse("add"), Ok(AdjustmentDirection::Add));
        assert_eq!(AdjustmentDirection::parse(" Subtract "), Ok(AdjustmentDirection::Subtract));
    }

    #[test]
    fn direction_parse_rejects_unknown_value() {
        assert_eq!(
            AdjustmentDirection::parse("minus"),
            Err(ValidationError::InvalidAdjustmentDirection("minus".to_string()))
        );
    }

    #[test]
    fn direction_round_trips_through_as_str() {
        for direction in [AdjustmentDirection::Add, AdjustmentDirection::Subtract] {
            assert_eq!(AdjustmentDirection::parse(direction.as_str()), Ok(direction));
        }
    }

    #[test]
    fn adjustment_type_parse_rejects_unknown_value() {
        assert_eq!(AdjustmentType::parse("timing"), Ok(AdjustmentType::Timing));
        assert_eq!(
            AdjustmentType::parse("temporary"),
            Err(ValidationError::InvalidAdjustmentType("temporary".to_string()))
        );
    }

    #[test]
    fn signed_amount_follows_direction() {
        let mut adjustment = TaxAdjustment {
            amount: dec!(250),
            direction: AdjustmentDirection::Add,
            adjustment_type: AdjustmentType::Permanent,
            category: "Entertainment".to_string(),
            description: "Non-deductible entertainment".to_string(),
        };
        assert_eq!(adjustment.signed_amount(), dec!(250));

        adjustment.direction = AdjustmentDirection::Subtract;
        assert_eq!(adjustment.signed_amount(), dec!(-250));
    }
}
