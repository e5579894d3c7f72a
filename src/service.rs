use crate::*;
use std::sync::Arc;

/// Runs matches against the automated opponent.
///
/// Each call is independent. The only shared state is the store's backend.
#[derive(Clone)]
pub struct Janken {
    store: Store,
    opponent: Arc<dyn Opponent>,
}

impl Janken {
    pub fn new(store: Store, opponent: Arc<dyn Opponent>) -> Self {
        Self { store, opponent }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Play one match: parse, draw, judge, persist.
    /// Nothing is written unless the user's hand is valid.
    pub async fn play(
        &self,
        hand: Option<&str>,
        user: Option<&str>,
    ) -> Result<MatchRecord, JankenError> {
        let user_hand = hand
            .filter(|h| !h.trim().is_empty())
            .ok_or(JankenError::MissingHand)
            .and_then(Hand::parse)
            .inspect_err(|e| log::warn!("rejected hand: {}", e))?;
        let opponent_hand = Hand::resolve(self.opponent.next())
            .inspect_err(|e| log::error!("opponent broke its contract: {}", e))?;
        let outcome = Outcome::resolve(user_hand, opponent_hand);
        let record = self
            .store
            .create(user_hand, opponent_hand, outcome, user.unwrap_or(ANONYMOUS))
            .await?;
        log::info!(
            "match {} {} vs {} -> {}",
            record.id(),
            user_hand,
            opponent_hand,
            outcome
        );
        Ok(record)
    }

    /// Fetch a previously played match.
    pub async fn lookup(&self, id: &str) -> Result<MatchRecord, JankenError> {
        self.store.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::Offline;

    fn janken(codes: Vec<i64>) -> (Janken, Arc<Memory>) {
        let memory = Arc::new(Memory::default());
        let store = Store::new(memory.clone());
        (Janken::new(store, Arc::new(Scripted::new(codes))), memory)
    }

    #[tokio::test]
    async fn stone_beats_scissors() {
        let (janken, _) = janken(vec![1]);
        let record = janken.play(Some("stone"), None).await.unwrap();
        assert_eq!(record.user_hand(), Hand::Stone);
        assert_eq!(record.opponent_hand(), Hand::Scissors);
        assert!(record.user_win());
        assert!(!record.opponent_win());
        assert_eq!(record.user_name(), ANONYMOUS);
    }

    #[tokio::test]
    async fn paper_draws_paper() {
        let (janken, _) = janken(vec![2]);
        let record = janken.play(Some("paper"), Some("hanako")).await.unwrap();
        assert_eq!(record.outcome(), Outcome::Draw);
        assert!(!record.user_win());
        assert!(!record.opponent_win());
        assert_eq!(record.user_name(), "hanako");
    }

    #[tokio::test]
    async fn unknown_hand_writes_nothing() {
        let (janken, memory) = janken(vec![0]);
        assert_eq!(
            janken.play(Some("rock"), None).await,
            Err(JankenError::UnknownHand("rock".to_string()))
        );
        assert!(memory.is_empty().await);
    }

    #[tokio::test]
    async fn missing_hand_writes_nothing() {
        let (janken, memory) = janken(vec![0]);
        assert_eq!(janken.play(None, None).await, Err(JankenError::MissingHand));
        assert_eq!(janken.play(Some(""), None).await, Err(JankenError::MissingHand));
        assert!(memory.is_empty().await);
    }

    #[tokio::test]
    async fn broken_opponent_is_internal() {
        let (janken, memory) = janken(vec![3]);
        assert_eq!(
            janken.play(Some("stone"), None).await,
            Err(JankenError::InvalidHandCode(3))
        );
        assert!(memory.is_empty().await);
    }

    #[tokio::test]
    async fn offline_store_fails_whole_match() {
        let janken = Janken::new(Store::new(Arc::new(Offline)), Arc::new(Scripted::new(vec![0])));
        assert_eq!(
            janken.play(Some("stone"), None).await,
            Err(JankenError::StorageUnavailable)
        );
    }

    #[tokio::test]
    async fn lookup_after_play() {
        let (janken, _) = janken(vec![0]);
        let record = janken.play(Some("scissors"), Some("jiro")).await.unwrap();
        let found = janken.lookup(&record.id().to_string()).await.unwrap();
        assert_eq!(found, record);
        assert!(found.opponent_win());
    }

    #[tokio::test]
    async fn random_opponent_plays() {
        let janken = Janken::new(Store::new(Arc::new(Memory::default())), Arc::new(Random));
        for _ in 0..32 {
            let record = janken.play(Some("stone"), None).await.unwrap();
            assert_eq!(
                record.outcome(),
                Outcome::resolve(record.user_hand(), record.opponent_hand())
            );
        }
    }
}
