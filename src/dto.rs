use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Query parameters of a match request.
#[derive(Debug, Default, Deserialize)]
pub struct PlayRequest {
    pub hand: Option<String>,
    #[serde(alias = "name")]
    pub user: Option<String>,
}

/// A judged match as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMatch {
    pub user_hand: String,
    pub pc_hand: String,
    pub user_win: bool,
    pub pc_win: bool,
    pub id: String,
    pub user: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiGreeting {
    pub message: String,
}

impl From<&MatchRecord> for ApiMatch {
    fn from(record: &MatchRecord) -> Self {
        Self {
            user_hand: record.user_hand().to_string(),
            pc_hand: record.opponent_hand().to_string(),
            user_win: record.user_win(),
            pc_win: record.opponent_win(),
            id: record.id().to_string(),
            user: record.user_name().to_string(),
            timestamp: record.stamp(),
        }
    }
}

impl From<MatchRecord> for ApiMatch {
    fn from(record: MatchRecord) -> Self {
        Self::from(&record)
    }
}

impl From<&JankenError> for ApiError {
    fn from(error: &JankenError) -> Self {
        Self {
            error: match error {
                JankenError::InvalidHandCode(_) => "Internal error.".to_string(),
                e => e.to_string(),
            },
        }
    }
}
