/// Failures of the match pipeline.
///
/// Client-facing variants carry messages that are safe to echo back.
/// Storage failures deliberately carry nothing from the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JankenError {
    /// The request did not name a hand at all.
    #[error("No hand was specified.")]
    MissingHand,

    /// The request named something that is not a canonical hand.
    #[error("{0}: unknown hand.")]
    UnknownHand(String),

    /// A hand code outside {0, 1, 2}. Only an opponent with a broken
    /// random source can produce this.
    #[error("invalid hand code: {0}")]
    InvalidHandCode(i64),

    /// No match is stored under this id.
    #[error("{0}: no such match.")]
    RecordNotFound(String),

    /// The backend could not be reached or refused the operation.
    #[error("Storage is unavailable. Please try again.")]
    StorageUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(JankenError::MissingHand.to_string(), "No hand was specified.");
        assert_eq!(
            JankenError::UnknownHand("rock".into()).to_string(),
            "rock: unknown hand."
        );
    }

    #[test]
    fn storage_message_is_generic() {
        let message = JankenError::StorageUnavailable.to_string();
        assert!(message.contains("try again"));
        assert!(!message.contains("refused"));
    }
}
