use crate::*;
use std::sync::Arc;

/// Sole writer of match records.
///
/// Each record lives under its own key, so concurrent matches never touch
/// the same key and need no coordination.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn Backend>,
}

impl Store {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    fn key(id: &str) -> String {
        format!("janken:{}", id)
    }

    /// Build a fresh record and persist it.
    /// The record is only returned once the write has succeeded.
    /// An outcome that contradicts the hands is replaced by the judged one.
    pub async fn create(
        &self,
        user: Hand,
        opponent: Hand,
        outcome: Outcome,
        user_name: &str,
    ) -> Result<MatchRecord, JankenError> {
        let judged = Outcome::resolve(user, opponent);
        if judged != outcome {
            log::warn!("{} vs {} is {}, not {}", user, opponent, judged, outcome);
        }
        let record = MatchRecord::new(user, opponent, judged, user_name);
        let ref key = Self::key(&record.id().to_string());
        self.backend
            .set(key, &record.fields())
            .await
            .inspect_err(|e| log::error!("failed to persist match {}: {:#}", record.id(), e))
            .map_err(|_| JankenError::StorageUnavailable)?;
        Ok(record)
    }

    /// Read a record back by id.
    pub async fn get(&self, id: &str) -> Result<MatchRecord, JankenError> {
        let id = ID::<MatchRecord>::try_from(id)
            .map_err(|_| JankenError::RecordNotFound(id.to_string()))?;
        let ref key = Self::key(&id.to_string());
        let fields = self
            .backend
            .get(key)
            .await
            .inspect_err(|e| log::error!("failed to read match {}: {:#}", id, e))
            .map_err(|_| JankenError::StorageUnavailable)?;
        if fields.is_empty() {
            return Err(JankenError::RecordNotFound(id.to_string()));
        }
        MatchRecord::try_from(&fields)
            .inspect_err(|e| log::error!("corrupt match {}: {}", id, e))
            .map_err(|_| JankenError::StorageUnavailable)
    }
}
