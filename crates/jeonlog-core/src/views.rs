//! View Builder: joins catalog, records, and visited ids into screen views.
//!
//! Everything here is pure. Missing records and missing catalog entries are
//! ordinary inputs, never errors.

use crate::catalog::Catalog;
use crate::models::{
    Author, CatalogEntry, DisplayRecord, ExhibitionId, FeedItem, Identity, SortMode,
    FALLBACK_HASHTAG, NOT_YET_RECORDED,
};
use crate::records::RecordsSnapshot;

/// Catalog entries for the visited ids, in visit order; ids unknown to the catalog are dropped.
pub fn resolve_visited_subset<'a, C: Catalog>(
    visited_ids: &[ExhibitionId],
    catalog: &'a C,
) -> Vec<&'a CatalogEntry> {
    visited_ids
        .iter()
        .filter_map(|id| catalog.get(id.as_str()))
        .collect()
}

/// One row per exhibition in `subset`, in the given order.
///
/// Exhibitions without a record show [`NOT_YET_RECORDED`].
pub fn build_visited_list<'a>(
    subset: impl IntoIterator<Item = &'a CatalogEntry>,
    records: &RecordsSnapshot,
) -> Vec<DisplayRecord> {
    subset
        .into_iter()
        .map(|entry| {
            let record = records.get(entry.id.as_str());
            DisplayRecord {
                id: entry.id.clone(),
                title: entry.title.clone(),
                location: entry.location.clone(),
                image: entry.image.clone(),
                note: record.map_or_else(|| NOT_YET_RECORDED.to_string(), |r| r.title.clone()),
                recorded: record.is_some(),
            }
        })
        .collect()
}

/// The "my records" feed.
///
/// An id contributes an item only when it has both a catalog entry and a
/// record. Authorship is stamped from `identity` now; a later identity change
/// needs a rebuild.
pub fn build_records_feed<C: Catalog>(
    visited_ids: &[ExhibitionId],
    records: &RecordsSnapshot,
    catalog: &C,
    identity: &Identity,
    sort: SortMode,
) -> Vec<FeedItem> {
    let author = Author {
        name: identity.display_name().to_string(),
        avatar: identity.avatar.clone(),
    };

    let mut items: Vec<FeedItem> = visited_ids
        .iter()
        .filter_map(|id| {
            let entry = catalog.get(id.as_str())?;
            let record = records.get(id.as_str())?;
            Some(FeedItem {
                id: entry.id.clone(),
                image: entry.image.clone(),
                log_title: record.title.clone(),
                author: author.clone(),
                timestamp: record.created_at,
                hashtags: record.hashtags.clone(),
                fallback_hashtag: record
                    .hashtags
                    .is_empty()
                    .then(|| FALLBACK_HASHTAG.to_string()),
                likes: 0,
            })
        })
        .collect();

    match sort {
        SortMode::Latest => order_latest(&mut items),
        SortMode::Popular => {
            // No ranking signal exists yet; keep the latest order
            tracing::debug!("Popular ordering requested; using latest order");
            order_latest(&mut items);
        }
    }

    items
}

/// Newest first. Ids are appended chronologically, so reversing visit order
/// gives the newest visit first; the stable sort then fixes records edited
/// after later visits and keeps later visits first on equal timestamps.
fn order_latest(items: &mut [FeedItem]) {
    items.reverse();
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::models::ExhibitionRecord;
    use pretty_assertions::assert_eq;

    fn catalog(ids: &[&str]) -> StaticCatalog {
        StaticCatalog::new(ids.iter().map(|id| {
            CatalogEntry::new(*id, format!("title {id}"), "Seoul", format!("{id}.png"))
        }))
    }

    fn ids(values: &[&str]) -> Vec<ExhibitionId> {
        values.iter().map(|id| ExhibitionId::from(*id)).collect()
    }

    fn records(entries: &[(&str, &str, i64)]) -> RecordsSnapshot {
        entries
            .iter()
            .map(|(id, title, created_at)| {
                (
                    ExhibitionId::from(*id),
                    ExhibitionRecord::with_created_at(*title, vec![], *created_at),
                )
            })
            .collect()
    }

    #[test]
    fn test_visited_list_substitutes_placeholder() {
        let catalog = catalog(&["e1", "e2"]);
        let snapshot = records(&[("e2", "Great show", 200)]);

        let list = build_visited_list(catalog.entries(), &snapshot);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id.as_str(), "e1");
        assert_eq!(list[0].note, NOT_YET_RECORDED);
        assert!(!list[0].recorded);
        assert_eq!(list[1].note, "Great show");
        assert!(list[1].recorded);
    }

    #[test]
    fn test_visited_list_keeps_input_order() {
        let catalog = catalog(&["a", "b", "c"]);
        let subset = resolve_visited_subset(&ids(&["c", "a", "missing", "b"]), &catalog);
        let list = build_visited_list(subset, &RecordsSnapshot::default());

        assert_eq!(
            list.iter().map(|row| row.id.as_str()).collect::<Vec<_>>(),
            vec!["c", "a", "b"]
        );
        assert!(list.iter().all(|row| row.note == NOT_YET_RECORDED));
    }

    #[test]
    fn test_feed_example_with_full_catalog() {
        let feed = build_records_feed(
            &ids(&["e1", "e2"]),
            &records(&[("e2", "Great show", 200)]),
            &catalog(&["e1", "e2"]),
            &Identity::anonymous(),
            SortMode::Latest,
        );

        assert_eq!(feed.len(), 1);
        let item = &feed[0];
        assert_eq!(item.id.as_str(), "e2");
        assert_eq!(item.image, "e2.png");
        assert_eq!(item.log_title, "Great show");
        assert_eq!(item.timestamp, 200);
        assert_eq!(item.author.name, "user");
        assert_eq!(item.fallback_hashtag.as_deref(), Some(FALLBACK_HASHTAG));
        assert_eq!(item.likes, 0);
    }

    #[test]
    fn test_feed_drops_ids_missing_from_catalog() {
        let feed = build_records_feed(
            &ids(&["e1", "e2"]),
            &records(&[("e2", "Great show", 200)]),
            &catalog(&["e1"]),
            &Identity::anonymous(),
            SortMode::Latest,
        );
        assert!(feed.is_empty());
    }

    #[test]
    fn test_feed_ignores_records_not_in_visited_index() {
        let feed = build_records_feed(
            &ids(&["e1"]),
            &records(&[("e1", "one", 1), ("e2", "orphan", 2)]),
            &catalog(&["e1", "e2"]),
            &Identity::anonymous(),
            SortMode::Latest,
        );
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id.as_str(), "e1");
    }

    #[test]
    fn test_feed_latest_is_strictly_decreasing() {
        let visited = ids(&["a", "b", "c", "d"]);
        let snapshot = records(&[("a", "A", 10), ("b", "B", 20), ("c", "C", 30), ("d", "D", 40)]);
        let feed = build_records_feed(
            &visited,
            &snapshot,
            &catalog(&["a", "b", "c", "d"]),
            &Identity::anonymous(),
            SortMode::Latest,
        );

        let timestamps = feed.iter().map(|item| item.timestamp).collect::<Vec<_>>();
        assert_eq!(timestamps, vec![40, 30, 20, 10]);
    }

    #[test]
    fn test_feed_latest_accounts_for_rewritten_records() {
        // "a" was visited first but its record was rewritten last
        let feed = build_records_feed(
            &ids(&["a", "b"]),
            &records(&[("a", "A", 300), ("b", "B", 200)]),
            &catalog(&["a", "b"]),
            &Identity::anonymous(),
            SortMode::Latest,
        );
        assert_eq!(
            feed.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_feed_equal_timestamps_keep_later_visit_first() {
        let feed = build_records_feed(
            &ids(&["a", "b"]),
            &records(&[("a", "A", 100), ("b", "B", 100)]),
            &catalog(&["a", "b"]),
            &Identity::anonymous(),
            SortMode::Latest,
        );
        assert_eq!(feed[0].id.as_str(), "b");
    }

    #[test]
    fn test_feed_popular_matches_latest() {
        let visited = ids(&["a", "b", "c"]);
        let snapshot = records(&[("a", "A", 1), ("b", "B", 3), ("c", "C", 2)]);
        let catalog = catalog(&["a", "b", "c"]);
        let identity = Identity::anonymous();

        assert_eq!(
            build_records_feed(&visited, &snapshot, &catalog, &identity, SortMode::Popular),
            build_records_feed(&visited, &snapshot, &catalog, &identity, SortMode::Latest)
        );
    }

    #[test]
    fn test_feed_stamps_current_identity() {
        let identity = Identity::new(Some("민지".into()), Some("me.png".into()));
        let feed = build_records_feed(
            &ids(&["e1"]),
            &records(&[("e1", "t", 1)]),
            &catalog(&["e1"]),
            &identity,
            SortMode::Latest,
        );
        assert_eq!(feed[0].author.name, "민지");
        assert_eq!(feed[0].author.avatar.as_deref(), Some("me.png"));
    }

    #[test]
    fn test_feed_keeps_record_hashtags() {
        let snapshot: RecordsSnapshot = [(
            ExhibitionId::from("e1"),
            ExhibitionRecord::with_created_at("t", vec!["art".into(), "서울".into()], 1),
        )]
        .into_iter()
        .collect();

        let feed = build_records_feed(
            &ids(&["e1"]),
            &snapshot,
            &catalog(&["e1"]),
            &Identity::anonymous(),
            SortMode::Latest,
        );
        assert_eq!(feed[0].hashtags, vec!["art", "서울"]);
        assert_eq!(feed[0].fallback_hashtag, None);
    }
}
