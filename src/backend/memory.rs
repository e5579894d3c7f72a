use super::*;
use tokio::sync::RwLock;

/// In-process backend. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct Memory {
    keys: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl Memory {
    /// Number of keys written so far.
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.keys.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl Backend for Memory {
    async fn set(&self, key: &str, fields: &[(&str, String)]) -> anyhow::Result<()> {
        let mut keys = self.keys.write().await;
        let stored = keys.entry(key.to_string()).or_default();
        for (field, value) in fields {
            stored
                .entry(field.to_string())
                .or_insert_with(|| value.clone());
        }
        Ok(())
    }
    async fn get(&self, key: &str) -> anyhow::Result<HashMap<String, String>> {
        Ok(self.keys.read().await.get(key).cloned().unwrap_or_default())
    }
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get() {
        let memory = Memory::default();
        memory
            .set("k", &[("a", "1".to_string()), ("b", "2".to_string())])
            .await
            .unwrap();
        let fields = memory.get("k").await.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["a"], "1");
        assert_eq!(fields["b"], "2");
    }

    #[tokio::test]
    async fn keys_are_write_once() {
        let memory = Memory::default();
        memory.set("k", &[("a", "1".to_string())]).await.unwrap();
        memory
            .set("k", &[("a", "2".to_string()), ("b", "3".to_string())])
            .await
            .unwrap();
        let fields = memory.get("k").await.unwrap();
        assert_eq!(fields["a"], "1");
        assert_eq!(fields["b"], "3");
    }

    #[tokio::test]
    async fn absent_key_is_empty() {
        let memory = Memory::default();
        assert!(memory.get("nope").await.unwrap().is_empty());
        assert!(memory.is_empty().await);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let memory = Memory::default();
        memory.set("x", &[("a", "1".to_string())]).await.unwrap();
        memory.set("y", &[("a", "2".to_string())]).await.unwrap();
        assert_eq!(memory.get("x").await.unwrap()["a"], "1");
        assert_eq!(memory.get("y").await.unwrap()["a"], "2");
        assert_eq!(memory.len().await, 2);
    }
}
