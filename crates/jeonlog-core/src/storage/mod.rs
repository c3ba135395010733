//! Persistent key/value storage port.
//!
//! Record Store and Visited Index only see this trait. Production wiring uses
//! [`crate::db::LibSqlKeyValueStore`]; tests use [`MemoryKeyValueStore`].

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;

/// Async string key/value storage (one serialized document per key).
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` when nothing was written yet
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key` (no-op when absent)
    async fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key).await
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key).await
    }
}

/// In-memory `KeyValueStore`, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryKeyValueStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw values, e.g. blobs written by another client.
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let items = items
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get_item("k").await.unwrap(), None);

        store.set_item("k", "v1").await.unwrap();
        store.set_item("k", "v2").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("v2"));

        store.remove_item("k").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_state() {
        let store = MemoryKeyValueStore::with_items([("a", "1")]);
        let clone = store.clone();
        clone.set_item("b", "2").await.unwrap();

        assert_eq!(store.get_item("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get_item("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_reference_and_arc_forward() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store.set_item("k", "v").await.unwrap();

        let by_ref = &*store;
        assert_eq!(by_ref.get_item("k").await.unwrap().as_deref(), Some("v"));
    }
}
