use serde::{Deserialize, Serialize};

/// Legal structure of a business, which selects the tax schedule.
///
/// Parsing is total: unrecognised values are kept in [`BusinessStructure::Other`]
/// and taxed at individual rates, the same as a sole trader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BusinessStructure {
    Company,
    Trust,
    Partnership,
    SoleTrader,
    Other(String),
}

impl BusinessStructure {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Company => "company",
            Self::Trust => "trust",
            Self::Partnership => "partnership",
            Self::SoleTrader => "soleTrader",
            Self::Other(raw) => raw,
        }
    }

    /// Maps the camelCase wire value (`company`, `trust`, `partnership`,
    /// `soleTrader`) to a structure. Matching is exact.
    pub fn parse(s: &str) -> Self {
        match s {
            "company" => Self::Company,
            "trust" => Self::Trust,
            "partnership" => Self::Partnership,
            "soleTrader" => Self::SoleTrader,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for BusinessStructure {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BusinessStructure> for String {
    fn from(value: BusinessStructure) -> Self {
        value.as_str().to_string()
    }
}

/// The business a return or BAS statement is prepared for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessEntity {
    pub id: String,
    pub name: String,
    pub business_structure: BusinessStructure,
    pub abn: Option<String>,
    #[serde(default)]
    pub gst_registered: bool,
}

impl BusinessEntity {
    pub fn new(
        id: impl Into<String>,
        business_structure: BusinessStructure,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            business_structure,
            abn: None,
            gst_registered: true,
        }
    }
}
