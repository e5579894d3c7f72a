use super::*;
use anyhow::Context;
use const_format::concatcp;
use std::sync::Arc;
use tokio_postgres::Client;

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table holding one row per (key, field).
#[rustfmt::skip]
pub const FIELDS: &str = "fields";

/// DDL for the fields table.
pub fn creates() -> &'static str {
    concatcp!(
        "CREATE TABLE IF NOT EXISTS ", FIELDS, " (
            key     TEXT NOT NULL,
            field   TEXT NOT NULL,
            value   TEXT NOT NULL,
            PRIMARY KEY (key, field)
        );"
    )
}

/// Write-once insert of every field under one key.
#[rustfmt::skip]
const WRITE: &str = concatcp!(
    "INSERT INTO ", FIELDS, " (key, field, value) ",
    "SELECT $1, f, v ",
    "FROM   UNNEST($2::TEXT[], $3::TEXT[]) AS t(f, v) ",
    "ON CONFLICT (key, field) DO NOTHING"
);

/// Connect to PostgreSQL and make sure the fields table exists.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    client.batch_execute(creates()).await?;
    Ok(Arc::new(client))
}

#[rustfmt::skip]
#[async_trait::async_trait]
impl Backend for Client {
    async fn set(&self, key: &str, fields: &[(&str, String)]) -> anyhow::Result<()> {
        let names = fields.iter().map(|(f, _)| f.to_string()).collect::<Vec<String>>();
        let values = fields.iter().map(|(_, v)| v.clone()).collect::<Vec<String>>();
        log::debug!("writing {} fields under {}", names.len(), key);
        self.execute(WRITE, &[&key, &names, &values])
            .await
            .map(|_| ())
            .with_context(|| format!("write {}", key))
    }
    async fn get(&self, key: &str) -> anyhow::Result<HashMap<String, String>> {
        const SQL: &str = concatcp!(
            "SELECT field, ",
                   "value ",
            "FROM   ", FIELDS, " ",
            "WHERE  key = $1"
        );
        log::debug!("reading fields under {}", key);
        self.query(SQL, &[&key])
            .await
            .map(|rows| {
                rows.into_iter()
                    .map(|row| (row.get::<_, String>(0), row.get::<_, String>(1)))
                    .collect()
            })
            .with_context(|| format!("read {}", key))
    }
    async fn ping(&self) -> anyhow::Result<()> {
        self.execute("SELECT 1", &[])
            .await
            .map(|_| ())
            .context("ping")
    }
}
