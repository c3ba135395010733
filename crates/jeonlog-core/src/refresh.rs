//! Refresh Trigger: rebuilds the views every time the owning screen gains focus.
//!
//! Each `on_focus` takes a request id from a monotonic counter. A result is
//! published only while its id is still the newest issued and newer than what
//! is already on screen, so a slow older refresh never overwrites a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{watch, RwLock};

use crate::catalog::Catalog;
use crate::models::{ExhibitionId, Identity, LoadNotice, SortMode, Views};
use crate::records::{RecordStore, RECORDS_KEY};
use crate::storage::KeyValueStore;
use crate::views::{build_records_feed, build_visited_list, resolve_visited_subset};
use crate::visited::{VisitedIndex, VISITED_KEY};

/// Which exhibitions the visited list shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitedSource {
    /// Everything in the Visited Index that the catalog knows
    #[default]
    Index,
    /// A fixed set of exhibitions, regardless of the index
    Pinned(Vec<ExhibitionId>),
}

/// What the screen currently renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Request that produced `views`; 0 before the first refresh
    pub request_id: u64,
    pub views: Views,
}

/// Result of one `on_focus` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The views were built and published
    Published(Views),
    /// A newer refresh started while this one was loading; nothing was published
    Superseded { request_id: u64 },
}

impl RefreshOutcome {
    pub const fn views(&self) -> Option<&Views> {
        match self {
            Self::Published(views) => Some(views),
            Self::Superseded { .. } => None,
        }
    }
}

/// Load-then-join pipeline driven by focus events
pub struct RefreshTrigger<S, C> {
    store: S,
    catalog: C,
    visited_source: VisitedSource,
    identity: RwLock<Identity>,
    sort: RwLock<SortMode>,
    latest_request: AtomicU64,
    state: watch::Sender<RenderState>,
}

impl<S: KeyValueStore, C: Catalog> RefreshTrigger<S, C> {
    pub fn new(store: S, catalog: C) -> Self {
        let (state, _) = watch::channel(RenderState::default());
        Self {
            store,
            catalog,
            visited_source: VisitedSource::default(),
            identity: RwLock::new(Identity::anonymous()),
            sort: RwLock::new(SortMode::default()),
            latest_request: AtomicU64::new(0),
            state,
        }
    }

    #[must_use]
    pub fn with_identity(self, identity: Identity) -> Self {
        Self {
            identity: RwLock::new(identity),
            ..self
        }
    }

    #[must_use]
    pub fn with_sort_mode(self, sort: SortMode) -> Self {
        Self {
            sort: RwLock::new(sort),
            ..self
        }
    }

    #[must_use]
    pub fn with_visited_source(self, visited_source: VisitedSource) -> Self {
        Self {
            visited_source,
            ..self
        }
    }

    /// Receive every published render state
    pub fn subscribe(&self) -> watch::Receiver<RenderState> {
        self.state.subscribe()
    }

    /// Snapshot of what is currently published
    pub fn current(&self) -> RenderState {
        self.state.borrow().clone()
    }

    /// Replace the author identity. Already published items keep their author.
    pub async fn set_identity(&self, identity: Identity) {
        *self.identity.write().await = identity;
    }

    /// Change the feed ordering used by the next refresh.
    pub async fn set_sort_mode(&self, sort: SortMode) {
        *self.sort.write().await = sort;
    }

    /// Reload both stores, rebuild the views, and publish them unless superseded.
    pub async fn on_focus(&self) -> RefreshOutcome {
        let request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Refresh {request_id} started");

        let identity = self.identity.read().await.clone();
        let sort = *self.sort.read().await;

        let records_store = RecordStore::new(&self.store);
        let visited_index = VisitedIndex::new(&self.store);
        let ((records, records_error), (visited_ids, visited_error)) = tokio::join!(
            records_store.load_or_default(),
            visited_index.load_or_default()
        );

        let mut failed_keys = Vec::new();
        if records_error.is_some() {
            failed_keys.push(RECORDS_KEY.to_string());
        }
        if visited_error.is_some() {
            failed_keys.push(VISITED_KEY.to_string());
        }

        let subset = match &self.visited_source {
            VisitedSource::Index => resolve_visited_subset(&visited_ids, &self.catalog),
            VisitedSource::Pinned(ids) => resolve_visited_subset(ids, &self.catalog),
        };

        let views = Views {
            visited: build_visited_list(subset, &records),
            feed: build_records_feed(&visited_ids, &records, &self.catalog, &identity, sort),
            notice: (!failed_keys.is_empty()).then(|| LoadNotice::load_failed(failed_keys)),
        };

        let published = self.state.send_if_modified(|current| {
            let still_latest = self.latest_request.load(Ordering::SeqCst) == request_id;
            if still_latest && request_id > current.request_id {
                *current = RenderState {
                    request_id,
                    views: views.clone(),
                };
                true
            } else {
                false
            }
        });

        if published {
            tracing::debug!(
                "Refresh {request_id} published {} visited, {} feed items",
                views.visited.len(),
                views.feed.len()
            );
            RefreshOutcome::Published(views)
        } else {
            tracing::debug!("Refresh {request_id} superseded; discarding result");
            RefreshOutcome::Superseded { request_id }
        }
    }
}
