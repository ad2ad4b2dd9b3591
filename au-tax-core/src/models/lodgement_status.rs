use serde::{Deserialize, Serialize};

/// Progress of a return or BAS statement through the lodgement workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LodgementStatus {
    #[default]
    NotStarted,
    InProgress,
    ReadyForReview,
    Lodged,
    Amended,
}

impl LodgementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "notStarted",
            Self::InProgress => "inProgress",
            Self::ReadyForReview => "readyForReview",
            Self::Lodged => "lodged",
            Self::Amended => "amended",
        }
    }
}
