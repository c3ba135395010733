//! Data models for Jeonlog

mod catalog;
mod identity;
mod record;
mod view;

pub use catalog::CatalogEntry;
pub use identity::{Identity, FALLBACK_AUTHOR_NAME};
pub use record::{extract_hashtags, strip_hashtags, ExhibitionId, ExhibitionRecord};
pub use view::{
    Author, DisplayRecord, FeedItem, LoadNotice, SortMode, Views, FALLBACK_HASHTAG,
    LOAD_FAILED_MESSAGE, NOT_YET_RECORDED,
};
