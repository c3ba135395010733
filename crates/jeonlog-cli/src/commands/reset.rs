use jeonlog_core::RecordJournal;

use crate::commands::common::CliContext;
use crate::error::CliError;

pub async fn run_reset(confirmed: bool, ctx: &CliContext) -> Result<(), CliError> {
    if !confirmed {
        return Err(CliError::ResetNotConfirmed);
    }

    RecordJournal::new(ctx.open_store().await?).reset().await?;
    println!("Cleared records and visits in {}", ctx.db_path.display());
    Ok(())
}
