use std::collections::HashMap;

use anyhow::Context;
use rusqlite::{params, Connection, OptionalExtension};

/// Opaque key-value persistence. The store reads and writes whole values;
/// there is no incremental update and exactly one writer.
pub trait BlobStore: Send {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Durable blob store backed by a single sqlite table. Accepts
/// `":memory:"` for throwaway databases.
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    pub fn open(path: &str) -> anyhow::Result<Self> {
        let conn = Connection::open(path).context("failed to open blob store")?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("failed to set blob store pragmas")?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
        .context("failed to create kv table")?;

        tracing::info!("opened blob store at {path}");

        Ok(Self { conn })
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("failed to read key: {key}"))
    }

    fn put(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .with_context(|| format!("failed to write key: {key}"))?;
        Ok(())
    }
}

/// In-memory blob store for tests and non-durable embedding.
#[derive(Default)]
pub struct MemoryBlobStore {
    values: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. to simulate a previous session's data.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
