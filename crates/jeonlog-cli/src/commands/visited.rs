use jeonlog_core::models::ExhibitionId;
use jeonlog_core::VisitedSource;

use crate::commands::common::{format_visited_lines, CliContext};
use crate::error::CliError;

/// Ids of the demonstration exhibitions shown on the static visited screen.
pub const DEMO_EXHIBITION_IDS: [&str; 3] = ["1", "2", "3"];

pub fn demo_source() -> VisitedSource {
    VisitedSource::Pinned(
        DEMO_EXHIBITION_IDS
            .iter()
            .map(|id| ExhibitionId::from(*id))
            .collect(),
    )
}

pub async fn run_visited(demo: bool, as_json: bool, ctx: &CliContext) -> Result<(), CliError> {
    let source = if demo {
        demo_source()
    } else {
        VisitedSource::Index
    };
    let views = ctx.refresh_views(source, ctx.sort).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&views.visited)?);
    } else if views.visited.is_empty() {
        println!("No visited exhibitions yet");
    } else {
        for line in format_visited_lines(&views.visited) {
            println!("{line}");
        }
    }
    Ok(())
}
