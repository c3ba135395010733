//! jeonlog-core - Core library for Jeonlog
//!
//! Persists per-exhibition records and the visited index, joins them with the
//! exhibition catalog, and rebuilds the "visited" list and "my records" feed
//! whenever a screen regains focus.

pub mod catalog;
pub mod db;
pub mod error;
pub mod journal;
pub mod models;
pub mod records;
pub mod refresh;
pub mod storage;
pub mod util;
pub mod views;
pub mod visited;

pub use catalog::{Catalog, StaticCatalog};
pub use error::{Error, Result};
pub use journal::RecordJournal;
pub use models::{ExhibitionId, ExhibitionRecord};
pub use records::{RecordStore, RecordsSnapshot};
pub use refresh::{RefreshOutcome, RefreshTrigger, RenderState, VisitedSource};
pub use storage::{KeyValueStore, MemoryKeyValueStore};
pub use visited::VisitedIndex;
