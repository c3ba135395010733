use std::env;
use std::path::{Path, PathBuf};

use chrono::Utc;
use jeonlog_core::db::LibSqlKeyValueStore;
use jeonlog_core::models::{
    extract_hashtags, strip_hashtags, DisplayRecord, FeedItem, Identity, SortMode, Views,
};
use jeonlog_core::{ExhibitionRecord, RefreshTrigger, StaticCatalog, VisitedSource};
use serde::Serialize;

use crate::config::{normalize_text_option, CliProfile};
use crate::error::CliError;

/// Everything a command needs once flags, env and profile are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliContext {
    pub db_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub identity: Identity,
    pub sort: SortMode,
}

impl CliContext {
    /// Precedence: flag > env > profile > default.
    pub fn resolve(
        cli_db_path: Option<PathBuf>,
        cli_catalog: Option<PathBuf>,
        cli_author: Option<String>,
        profile: &CliProfile,
    ) -> Self {
        Self {
            db_path: resolve_db_path(cli_db_path, profile),
            catalog_path: cli_catalog.or_else(|| profile.catalog_path.clone()),
            identity: resolve_identity(cli_author, profile),
            sort: profile.sort.unwrap_or_default(),
        }
    }

    pub async fn open_store(&self) -> Result<LibSqlKeyValueStore, CliError> {
        Ok(LibSqlKeyValueStore::open(&self.db_path).await?)
    }

    pub fn load_catalog(&self) -> Result<StaticCatalog, CliError> {
        load_catalog(self.catalog_path.as_deref())
    }

    /// Run one focus refresh and return what the screen would render.
    ///
    /// A load notice is echoed to stderr; the views are still returned.
    pub async fn refresh_views(
        &self,
        visited_source: VisitedSource,
        sort: SortMode,
    ) -> Result<Views, CliError> {
        let trigger = RefreshTrigger::new(self.open_store().await?, self.load_catalog()?)
            .with_identity(self.identity.clone())
            .with_sort_mode(sort)
            .with_visited_source(visited_source);

        let outcome = trigger.on_focus().await;
        let views = outcome
            .views()
            .cloned()
            .unwrap_or_else(|| trigger.current().views);

        if let Some(notice) = &views.notice {
            eprintln!("Warning: {} ({})", notice.message, notice.keys.join(", "));
        }
        Ok(views)
    }
}

#[derive(Debug, Serialize)]
pub struct RecordItem {
    pub id: String,
    pub title: String,
    pub hashtags: Vec<String>,
    pub created_at: i64,
    pub created_at_iso: String,
}

pub fn record_to_item(id: &str, record: &ExhibitionRecord) -> RecordItem {
    RecordItem {
        id: id.to_string(),
        title: record.title.clone(),
        hashtags: record.hashtags.clone(),
        created_at: record.created_at,
        created_at_iso: format_timestamp(record.created_at),
    }
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>, profile: &CliProfile) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os("JEONLOG_DB_PATH").map(PathBuf::from))
        .or_else(|| profile.db_path.clone())
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("jeonlog")
        .join("jeonlog.db")
}

pub fn resolve_identity(cli_author: Option<String>, profile: &CliProfile) -> Identity {
    let name = normalize_text_option(cli_author).or_else(|| profile.author_name.clone());
    Identity::new(name, profile.author_avatar.clone())
}

/// The configured catalog file, or the built-in demonstration catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<StaticCatalog, CliError> {
    match path {
        Some(path) => {
            let catalog = StaticCatalog::load(path)?;
            tracing::debug!(
                "Loaded {} exhibitions from {}",
                catalog.len(),
                path.display()
            );
            Ok(catalog)
        }
        None => Ok(StaticCatalog::demo()),
    }
}

pub fn normalize_exhibition_id(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyExhibitionId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Split record input into a title and hashtags.
///
/// Inline `#tags` are lifted out of the title and come first; `--tag` values
/// follow with any leading `#` dropped. Repeats keep their first position.
pub fn resolve_record_input(
    title_parts: &[String],
    extra_tags: &[String],
) -> Result<(String, Vec<String>), CliError> {
    let raw = title_parts.join(" ");
    let title = strip_hashtags(&raw);
    if title.is_empty() {
        return Err(CliError::EmptyTitle);
    }

    let mut hashtags = extract_hashtags(&raw);
    for tag in extra_tags {
        let tag = tag.trim().trim_start_matches('#').trim();
        if !tag.is_empty() && !hashtags.iter().any(|existing| existing == tag) {
            hashtags.push(tag.to_string());
        }
    }

    Ok((title, hashtags))
}

pub fn format_visited_lines(rows: &[DisplayRecord]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let marker = if row.recorded { '*' } else { ' ' };
            format!(
                "{marker} {:<6}  {}  ({})  {}",
                row.id, row.title, row.location, row.note
            )
        })
        .collect()
}

pub fn format_feed_lines(items: &[FeedItem], now_ms: i64) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let tags = item
                .display_hashtags()
                .into_iter()
                .map(|tag| format!("#{tag}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "{:<6}  {}  by {}  {:<10}  {tags}",
                item.id,
                item.log_title,
                item.author.name,
                format_relative_time(item.timestamp, now_ms)
            )
        })
        .collect()
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn format_timestamp(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |date_time| date_time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}
