//! Catalog entry model

use serde::{Deserialize, Serialize};

use super::ExhibitionId;

/// Display metadata for one exhibition, owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ExhibitionId,
    pub title: String,
    pub location: String,
    /// Image reference (URL or asset path)
    pub image: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(
        id: impl Into<ExhibitionId>,
        title: impl Into<String>,
        location: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            image: image.into(),
        }
    }
}
