use jeonlog_core::{Catalog, RecordJournal};

use crate::commands::common::{normalize_exhibition_id, CliContext};
use crate::error::CliError;

pub async fn run_visit(id: &str, ctx: &CliContext) -> Result<(), CliError> {
    let id = normalize_exhibition_id(id)?;
    let catalog = ctx.load_catalog()?;
    if catalog.get(&id).is_none() {
        tracing::warn!("Exhibition '{id}' is not in the catalog; it will stay hidden until it is");
    }

    let journal = RecordJournal::new(ctx.open_store().await?);
    if journal.mark_visited(&id).await? {
        println!("{id}");
    } else {
        println!("{id} (already visited)");
    }
    Ok(())
}
