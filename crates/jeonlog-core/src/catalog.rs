//! Read-only exhibition catalog.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{CatalogEntry, ExhibitionId};
use crate::util::compact_text;

/// Lookup from exhibition id to display metadata
pub trait Catalog {
    fn get(&self, id: &str) -> Option<&CatalogEntry>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn get(&self, id: &str) -> Option<&CatalogEntry> {
        (**self).get(id)
    }
}

impl<C: Catalog + ?Sized> Catalog for std::sync::Arc<C> {
    fn get(&self, id: &str) -> Option<&CatalogEntry> {
        (**self).get(id)
    }
}

/// Catalog held fully in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    entries: BTreeMap<ExhibitionId, CatalogEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Keyed(BTreeMap<ExhibitionId, CatalogEntry>),
    List(Vec<CatalogEntry>),
}

impl StaticCatalog {
    /// Build a catalog keyed by each entry's own id
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.id.clone(), entry))
                .collect(),
        }
    }

    /// The three demonstration exhibitions shipped with the app
    pub fn demo() -> Self {
        Self::new([
            CatalogEntry::new(
                "1",
                "클림트 특별전",
                "국립중앙박물관",
                "https://via.placeholder.com/100x100?text=클림트전",
            ),
            CatalogEntry::new(
                "2",
                "현대미술 특별전",
                "MMCA",
                "https://via.placeholder.com/100x100?text=현대미술전",
            ),
            CatalogEntry::new(
                "3",
                "한국 전통미술전",
                "국립민속박물관",
                "https://via.placeholder.com/100x100?text=전통미술전",
            ),
        ])
    }

    /// Parse a catalog document.
    ///
    /// Accepts an object keyed by exhibition id (lookups use the key) or a
    /// plain list of entries.
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(raw).map_err(|error| {
            Error::Catalog(format!("invalid catalog JSON: {}", compact_text(&error.to_string())))
        })?;

        Ok(match document {
            CatalogDocument::Keyed(entries) => Self { entries },
            CatalogDocument::List(entries) => Self::new(entries),
        })
    }

    /// Read and parse a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|error| {
            Error::Catalog(format!("failed to read {}: {error}", path.display()))
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}

impl Catalog for StaticCatalog {
    fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }
}
