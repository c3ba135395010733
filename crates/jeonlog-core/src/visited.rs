//! Visited Index: ordered set of exhibition ids the user marked visited.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::ExhibitionId;
use crate::storage::KeyValueStore;

/// Storage key of the visited-ids blob.
pub const VISITED_KEY: &str = "visited_exhibition_ids";

/// Visited Index over a `KeyValueStore`
pub struct VisitedIndex<S> {
    store: S,
}

impl<S: KeyValueStore> VisitedIndex<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load ids in visit order. Absent blob is empty; unparseable blob is `StoreCorrupt`.
    pub async fn load_all(&self) -> Result<Vec<ExhibitionId>> {
        let Some(raw) = self.store.get_item(VISITED_KEY).await? else {
            tracing::debug!("No visited exhibitions stored yet");
            return Ok(Vec::new());
        };

        let ids: Vec<ExhibitionId> = serde_json::from_str(&raw)
            .map_err(|error| Error::store_corrupt(VISITED_KEY, error))?;

        let mut seen = HashSet::new();
        let ids: Vec<ExhibitionId> = ids.into_iter().filter(|id| seen.insert(id.clone())).collect();
        tracing::debug!("Loaded {} visited exhibition ids", ids.len());
        Ok(ids)
    }

    /// Load ids, degrading to empty on failure.
    pub async fn load_or_default(&self) -> (Vec<ExhibitionId>, Option<Error>) {
        match self.load_all().await {
            Ok(ids) => (ids, None),
            Err(error) => {
                tracing::warn!("Falling back to empty visited index: {error}");
                (Vec::new(), Some(error))
            }
        }
    }

    pub async fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.load_all().await?.iter().any(|visited| visited.as_str() == id))
    }

    /// Mark `id` visited. Returns `false` when it already was.
    pub async fn append(&self, id: &ExhibitionId) -> Result<bool> {
        let mut ids = self.load_all().await?;
        if ids.contains(id) {
            return Ok(false);
        }

        ids.push(id.clone());
        let raw = serde_json::to_string(&ids)?;
        self.store.set_item(VISITED_KEY, &raw).await?;
        tracing::info!("Marked exhibition {id} as visited");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_load_all_absent_is_empty() {
        let index = VisitedIndex::new(MemoryKeyValueStore::new());
        assert!(index.load_all().await.unwrap().is_empty());
        assert!(!index.contains("e1").await.unwrap());
    }

    #[tokio::test]
    async fn test_append_preserves_visit_order() {
        let index = VisitedIndex::new(MemoryKeyValueStore::new());
        assert!(index.append(&"e2".into()).await.unwrap());
        assert!(index.append(&"e1".into()).await.unwrap());
        assert!(index.append(&"e3".into()).await.unwrap());

        assert_eq!(
            index.load_all().await.unwrap(),
            vec![ExhibitionId::from("e2"), "e1".into(), "e3".into()]
        );
    }

    #[tokio::test]
    async fn test_append_is_idempotent() {
        let index = VisitedIndex::new(MemoryKeyValueStore::new());
        assert!(index.append(&"e1".into()).await.unwrap());
        assert!(!index.append(&"e1".into()).await.unwrap());

        assert_eq!(index.load_all().await.unwrap().len(), 1);
        assert!(index.contains("e1").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicates_in_blob_keep_first_occurrence() {
        let kv = MemoryKeyValueStore::with_items([(VISITED_KEY, r#"["a","b","a","c","b"]"#)]);
        let ids = VisitedIndex::new(kv).load_all().await.unwrap();
        assert_eq!(ids, vec![ExhibitionId::from("a"), "b".into(), "c".into()]);
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_store_corrupt() {
        let kv = MemoryKeyValueStore::with_items([(VISITED_KEY, r#"{"e1":true}"#)]);
        let index = VisitedIndex::new(kv);

        assert!(index.load_all().await.unwrap_err().is_store_corrupt());

        let (ids, error) = index.load_or_default().await;
        assert!(ids.is_empty());
        assert!(error.is_some());
    }
}
