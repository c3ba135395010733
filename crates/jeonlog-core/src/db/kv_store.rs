//! libSQL-backed key/value store

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::storage::KeyValueStore;

use super::Database;

/// Durable `KeyValueStore` over the `key_value` table.
#[derive(Clone)]
pub struct LibSqlKeyValueStore {
    db: Arc<Mutex<Database>>,
}

impl LibSqlKeyValueStore {
    /// Wrap an already opened database
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Open (or create) the database file at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Database::open(path).await?))
    }

    /// Open an in-memory database (primarily for tests)
    pub async fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory().await?))
    }
}

impl KeyValueStore for LibSqlKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let db = self.db.lock().await;
        let mut rows = db
            .connection()
            .query("SELECT value FROM key_value WHERE key = ?", [key])
            .await?;

        if let Some(row) = rows.next().await? {
            let value: String = row.get(0)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let now = crate::util::unix_timestamp_now_ms();
        let db = self.db.lock().await;
        db.connection()
            .execute(
                "INSERT OR REPLACE INTO key_value (key, value, updated_at) VALUES (?, ?, ?)",
                libsql::params![key, value, now],
            )
            .await?;
        tracing::debug!("Stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let db = self.db.lock().await;
        db.connection()
            .execute("DELETE FROM key_value WHERE key = ?", [key])
            .await?;
        Ok(())
    }
}
