use jeonlog_core::{Catalog, RecordJournal};

use crate::commands::common::{normalize_exhibition_id, resolve_record_input, CliContext};
use crate::error::CliError;

pub async fn run_record(
    id: &str,
    title_parts: &[String],
    tags: &[String],
    force: bool,
    ctx: &CliContext,
) -> Result<(), CliError> {
    let id = normalize_exhibition_id(id)?;
    let (title, hashtags) = resolve_record_input(title_parts, tags)?;

    if !force && ctx.load_catalog()?.get(&id).is_none() {
        return Err(CliError::UnknownExhibition(id));
    }

    let journal = RecordJournal::new(ctx.open_store().await?);
    let record = journal.write_record(&id, title, hashtags).await?;

    if record.hashtags.is_empty() {
        println!("{id}  {}", record.title);
    } else {
        let tags = record
            .hashtags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{id}  {}  {tags}", record.title);
    }
    Ok(())
}
