use crate::*;
use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use std::collections::HashMap;

/// Persisted result of one match.
///
/// Built once when the match is judged and never modified afterwards.
/// Win flags are derived from an [`Outcome`] so both can never be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    id: ID<Self>,
    user_hand: Hand,
    opponent_hand: Hand,
    outcome: Outcome,
    user_name: String,
    timestamp: DateTime<Utc>,
}

impl Unique for MatchRecord {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl MatchRecord {
    /// Field names as written to the backend.
    pub const ID: &'static str = "id";
    pub const USER_HAND: &'static str = "user_hand";
    pub const PC_HAND: &'static str = "pc_hand";
    pub const USER_WIN: &'static str = "user_win";
    pub const PC_WIN: &'static str = "pc_win";
    pub const USER: &'static str = "user";
    pub const TIMESTAMP: &'static str = "timestamp";

    /// Fresh record with a new id, stamped now.
    /// Blank names fall back to [`ANONYMOUS`].
    pub(crate) fn new(user_hand: Hand, opponent_hand: Hand, outcome: Outcome, user_name: &str) -> Self {
        let user_name = match user_name.trim() {
            "" => ANONYMOUS.to_string(),
            _ => user_name.to_string(),
        };
        Self {
            id: ID::default(),
            user_hand,
            opponent_hand,
            outcome,
            user_name,
            timestamp: Utc::now(),
        }
    }
    pub fn user_hand(&self) -> Hand {
        self.user_hand
    }
    pub fn opponent_hand(&self) -> Hand {
        self.opponent_hand
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn user_win(&self) -> bool {
        self.outcome.user_win()
    }
    pub fn opponent_win(&self) -> bool {
        self.outcome.opponent_win()
    }
    pub fn user_name(&self) -> &str {
        &self.user_name
    }
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
    /// Timestamp at full precision, so a stored record reads back equal.
    pub fn stamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }

    /// Flat string fields for the backend.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (Self::ID, self.id.to_string()),
            (Self::USER_HAND, self.user_hand.to_string()),
            (Self::PC_HAND, self.opponent_hand.to_string()),
            (Self::USER_WIN, self.user_win().to_string()),
            (Self::PC_WIN, self.opponent_win().to_string()),
            (Self::USER, self.user_name.clone()),
            (Self::TIMESTAMP, self.stamp()),
        ]
    }
}

/// hydrate from backend fields
impl TryFrom<&HashMap<String, String>> for MatchRecord {
    type Error = String;
    fn try_from(fields: &HashMap<String, String>) -> Result<Self, Self::Error> {
        let field = |name: &str| {
            fields
                .get(name)
                .map(String::as_str)
                .ok_or_else(|| format!("missing field {}", name))
        };
        let flag = |name: &str| {
            field(name)?
                .parse::<bool>()
                .map_err(|e| format!("{}: {}", name, e))
        };
        let id = ID::try_from(field(Self::ID)?).map_err(|e| format!("id: {}", e))?;
        let user_hand = Hand::parse(field(Self::USER_HAND)?).map_err(|e| e.to_string())?;
        let opponent_hand = Hand::parse(field(Self::PC_HAND)?).map_err(|e| e.to_string())?;
        let outcome = Outcome::from_flags(flag(Self::USER_WIN)?, flag(Self::PC_WIN)?)
            .ok_or_else(|| "both win flags set".to_string())?;
        if outcome != Outcome::resolve(user_hand, opponent_hand) {
            return Err(format!("flags disagree with {} vs {}", user_hand, opponent_hand));
        }
        let timestamp = DateTime::parse_from_rfc3339(field(Self::TIMESTAMP)?)
            .map_err(|e| format!("timestamp: {}", e))?
            .with_timezone(&Utc);
        Ok(Self {
            id,
            user_hand,
            opponent_hand,
            outcome,
            user_name: field(Self::USER)?.to_string(),
            timestamp,
        })
    }
}
