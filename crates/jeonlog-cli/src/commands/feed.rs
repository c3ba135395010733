use jeonlog_core::models::SortMode;
use jeonlog_core::VisitedSource;

use crate::commands::common::{format_feed_lines, now_ms, CliContext};
use crate::error::CliError;

pub async fn run_feed(
    sort: Option<SortMode>,
    as_json: bool,
    ctx: &CliContext,
) -> Result<(), CliError> {
    let sort = sort.unwrap_or(ctx.sort);
    let views = ctx.refresh_views(VisitedSource::Index, sort).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&views.feed)?);
    } else if views.feed.is_empty() {
        println!("No records yet");
    } else {
        for line in format_feed_lines(&views.feed, now_ms()) {
            println!("{line}");
        }
    }
    Ok(())
}
