//! Record Store: exhibition id -> user-authored record.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::{ExhibitionId, ExhibitionRecord};
use crate::storage::KeyValueStore;

/// Storage key of the records blob.
pub const RECORDS_KEY: &str = "exhibition_records";

/// A loaded copy of every stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordsSnapshot {
    records: BTreeMap<ExhibitionId, ExhibitionRecord>,
}

impl RecordsSnapshot {
    pub const fn new(records: BTreeMap<ExhibitionId, ExhibitionRecord>) -> Self {
        Self { records }
    }

    /// Record for `id`; absent is the common case for unannotated visits
    pub fn get(&self, id: &str) -> Option<&ExhibitionRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ExhibitionId, &ExhibitionRecord)> {
        self.records.iter()
    }

    fn insert(&mut self, id: ExhibitionId, record: ExhibitionRecord) {
        self.records.insert(id, record);
    }
}

impl FromIterator<(ExhibitionId, ExhibitionRecord)> for RecordsSnapshot {
    fn from_iter<T: IntoIterator<Item = (ExhibitionId, ExhibitionRecord)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Record Store over a `KeyValueStore`
pub struct RecordStore<S> {
    store: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load every record. Absent blob is empty; unparseable blob is `StoreCorrupt`.
    pub async fn load_all(&self) -> Result<RecordsSnapshot> {
        let Some(raw) = self.store.get_item(RECORDS_KEY).await? else {
            tracing::debug!("No records stored yet");
            return Ok(RecordsSnapshot::default());
        };

        let records: BTreeMap<ExhibitionId, ExhibitionRecord> = serde_json::from_str(&raw)
            .map_err(|error| Error::store_corrupt(RECORDS_KEY, error))?;
        tracing::debug!("Loaded {} exhibition records", records.len());
        Ok(RecordsSnapshot::new(records))
    }

    /// Load every record, degrading to empty on failure.
    ///
    /// The error is returned alongside so the caller can surface a notice.
    pub async fn load_or_default(&self) -> (RecordsSnapshot, Option<Error>) {
        match self.load_all().await {
            Ok(snapshot) => (snapshot, None),
            Err(error) => {
                tracing::warn!("Falling back to empty records: {error}");
                (RecordsSnapshot::default(), Some(error))
            }
        }
    }

    /// Fetch one record
    pub async fn get(&self, id: &str) -> Result<Option<ExhibitionRecord>> {
        Ok(self.load_all().await?.get(id).cloned())
    }

    /// Replace the record for `id`; nothing from the previous record is kept.
    pub async fn put(&self, id: &ExhibitionId, record: ExhibitionRecord) -> Result<()> {
        let mut snapshot = self.load_all().await?;
        snapshot.insert(id.clone(), record);

        let raw = serde_json::to_string(&snapshot.records)?;
        self.store.set_item(RECORDS_KEY, &raw).await?;
        tracing::info!("Saved record for exhibition {id}");
        Ok(())
    }
}
