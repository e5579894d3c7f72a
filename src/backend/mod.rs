//! Key-value storage behind the match store.
//!
//! A backend keeps flat string fields grouped under one key, so a whole
//! record is written with one `set` and read back with one `get`.
//!
//! - [`Memory`] — process-local map, for tests and database-less runs
//! - `Arc<tokio_postgres::Client>` — PostgreSQL (feature `database`)
mod memory;

pub use memory::*;

#[cfg(feature = "database")]
mod postgres;
#[cfg(feature = "database")]
pub use postgres::*;

use std::collections::HashMap;

/// Storage contract used by [`crate::Store`].
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Write all fields under `key` in one operation.
    /// Keys are write-once: fields already stored under `key` are kept.
    async fn set(&self, key: &str, fields: &[(&str, String)]) -> anyhow::Result<()>;
    /// All fields under `key`, empty if the key was never written.
    async fn get(&self, key: &str) -> anyhow::Result<HashMap<String, String>>;
    /// Cheap liveness probe.
    async fn ping(&self) -> anyhow::Result<()>;
}
