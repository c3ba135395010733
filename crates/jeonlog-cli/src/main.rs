//! Jeonlog CLI - keep a personal log of the exhibitions you visit
//!
//! Marks exhibitions visited, writes one record per exhibition, and renders
//! the visited list and "my records" feed from the local store.

mod cli;
mod commands;
mod config;
mod error;


use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::CliContext;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::feed::run_feed;
use crate::commands::record::run_record;
use crate::commands::reset::run_reset;
use crate::commands::show::run_show;
use crate::commands::visit::run_visit;
use crate::commands::visited::run_visited;
use crate::config::CliProfilesConfig;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jeonlog=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        command,
        db_path,
        catalog,
        author,
        profile,
    } = Cli::parse();

    let context = || -> Result<CliContext, CliError> {
        let profiles = CliProfilesConfig::load().map_err(CliError::Config)?;
        let resolved = profiles.resolved_profile(profile.as_deref());
        let ctx = CliContext::resolve(db_path, catalog, author, &resolved);
        tracing::debug!("Using database at {}", ctx.db_path.display());
        Ok(ctx)
    };

    match command {
        Commands::Visit { id } => run_visit(&id, &context()?).await?,
        Commands::Record {
            id,
            title,
            tags,
            force,
        } => run_record(&id, &title, &tags, force, &context()?).await?,
        Commands::Show { id, json } => run_show(&id, json, &context()?).await?,
        Commands::Visited { demo, json } => run_visited(demo, json, &context()?).await?,
        Commands::Feed { sort, json } => {
            run_feed(sort.map(Into::into), json, &context()?).await?;
        }
        Commands::Reset { yes } => run_reset(yes, &context()?).await?,
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
        Commands::Config { command } => run_config(command, profile.as_deref())?,
    }

    Ok(())
}
