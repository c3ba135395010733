use jeonlog_core::RecordStore;

use crate::commands::common::{
    format_timestamp, normalize_exhibition_id, record_to_item, CliContext,
};
use crate::error::CliError;

pub async fn run_show(id: &str, as_json: bool, ctx: &CliContext) -> Result<(), CliError> {
    let id = normalize_exhibition_id(id)?;
    let store = ctx.open_store().await?;
    let record = RecordStore::new(&store)
        .get(&id)
        .await?
        .ok_or_else(|| CliError::RecordNotFound(id.clone()))?;

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&record_to_item(&id, &record))?
        );
    } else {
        println!("{}", record.title);
        if !record.hashtags.is_empty() {
            let tags = record
                .hashtags
                .iter()
                .map(|tag| format!("#{tag}"))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{tags}");
        }
        println!("{}", format_timestamp(record.created_at));
    }
    Ok(())
}
