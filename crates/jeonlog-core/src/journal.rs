//! Write-record flow: the writes the record editor performs on save.
//!
//! Visiting and recording touch two independent keys. There is no transaction
//! across them: an interruption after the visit is stored but before the
//! record is written leaves a visited exhibition without a record. Readers
//! already treat that as "not yet recorded", so it is tolerated rather than
//! repaired.

use crate::error::{Error, Result};
use crate::models::{ExhibitionId, ExhibitionRecord};
use crate::records::{RecordStore, RECORDS_KEY};
use crate::storage::KeyValueStore;
use crate::visited::{VisitedIndex, VISITED_KEY};

/// Write side for records and visits over one `KeyValueStore`
pub struct RecordJournal<S> {
    store: S,
}

impl<S: KeyValueStore> RecordJournal<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Mark an exhibition visited. Returns `false` when it already was.
    pub async fn mark_visited(&self, id: &str) -> Result<bool> {
        let id = parse_id(id)?;
        VisitedIndex::new(&self.store).append(&id).await
    }

    /// Save a record for an exhibition, marking it visited first.
    ///
    /// Any previous record for the exhibition is replaced entirely.
    pub async fn write_record(
        &self,
        id: &str,
        title: impl Into<String>,
        hashtags: Vec<String>,
    ) -> Result<ExhibitionRecord> {
        let id = parse_id(id)?;
        let record = ExhibitionRecord::new(title, hashtags);

        VisitedIndex::new(&self.store).append(&id).await?;
        RecordStore::new(&self.store).put(&id, record.clone()).await?;

        Ok(record)
    }

    /// Drop both persisted blobs (external storage reset).
    pub async fn reset(&self) -> Result<()> {
        self.store.remove_item(RECORDS_KEY).await?;
        self.store.remove_item(VISITED_KEY).await?;
        tracing::info!("Cleared exhibition records and visited index");
        Ok(())
    }
}

fn parse_id(id: &str) -> Result<ExhibitionId> {
    ExhibitionId::parse(id)
        .ok_or_else(|| Error::InvalidInput("Exhibition id cannot be empty".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_write_record_updates_both_stores() {
        let kv = MemoryKeyValueStore::new();
        let journal = RecordJournal::new(kv.clone());

        let saved = journal
            .write_record("e1", "Great show", vec!["art".into()])
            .await
            .unwrap();

        assert_eq!(RecordStore::new(&kv).get("e1").await.unwrap(), Some(saved));
        assert!(VisitedIndex::new(&kv).contains("e1").await.unwrap());
    }

    #[tokio::test]
    async fn test_rewrite_keeps_single_visit() {
        let kv = MemoryKeyValueStore::new();
        let journal = RecordJournal::new(kv.clone());

        journal.write_record("e1", "first", vec![]).await.unwrap();
        journal.write_record("e1", "second", vec![]).await.unwrap();

        assert_eq!(VisitedIndex::new(&kv).load_all().await.unwrap().len(), 1);
        let record = RecordStore::new(&kv).get("e1").await.unwrap().unwrap();
        assert_eq!(record.title, "second");
    }

    #[tokio::test]
    async fn test_empty_id_rejected() {
        let journal = RecordJournal::new(MemoryKeyValueStore::new());
        let error = journal.write_record("  ", "t", vec![]).await.unwrap_err();
        assert!(matches!(error, Error::InvalidInput(_)));
        assert!(journal.mark_visited("").await.is_err());
    }

    #[tokio::test]
    async fn test_mark_visited_trims_id() {
        let kv = MemoryKeyValueStore::new();
        let journal = RecordJournal::new(kv.clone());

        assert!(journal.mark_visited(" e1 ").await.unwrap());
        assert!(!journal.mark_visited("e1").await.unwrap());
        assert!(VisitedIndex::new(&kv).contains("e1").await.unwrap());
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let kv = MemoryKeyValueStore::new();
        let journal = RecordJournal::new(kv.clone());
        journal.write_record("e1", "t", vec![]).await.unwrap();

        journal.reset().await.unwrap();

        assert!(RecordStore::new(&kv).load_all().await.unwrap().is_empty());
        assert!(VisitedIndex::new(&kv).load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reset_recovers_corrupt_store() {
        let kv = MemoryKeyValueStore::with_items([(RECORDS_KEY, "oops")]);
        let journal = RecordJournal::new(kv.clone());
        assert!(journal.write_record("e1", "t", vec![]).await.is_err());

        journal.reset().await.unwrap();
        journal.write_record("e1", "t", vec![]).await.unwrap();
        assert_eq!(RecordStore::new(&kv).load_all().await.unwrap().len(), 1);
    }
}
