use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jeonlog_core::models::SortMode;

#[derive(Parser)]
#[command(name = "jeonlog")]
#[command(about = "Keep a personal log of the exhibitions you visit")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Exhibition catalog JSON file (built-in demo catalog when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Display name stamped on feed items
    #[arg(long, global = true, value_name = "NAME")]
    pub author: Option<String>,

    /// CLI profile name
    #[arg(long, global = true, value_name = "NAME")]
    pub profile: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mark an exhibition as visited
    Visit {
        /// Exhibition ID
        id: String,
    },
    /// Write (or overwrite) the record for an exhibition
    #[command(alias = "write")]
    Record {
        /// Exhibition ID
        id: String,
        /// Record title; inline #hashtags become hashtags
        title: Vec<String>,
        /// Additional hashtag (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Record even if the catalog does not know the exhibition
        #[arg(long)]
        force: bool,
    },
    /// Show the record for one exhibition
    Show {
        /// Exhibition ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List visited exhibitions with their record titles
    Visited {
        /// Show the demonstration exhibitions instead of the visited index
        #[arg(long)]
        demo: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the "my records" feed
    Feed {
        /// Feed ordering
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear every stored record and visit
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Configure CLI profiles
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    Latest,
    Popular,
}

impl From<SortArg> for SortMode {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Latest => Self::Latest,
            SortArg::Popular => Self::Popular,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize or update a profile
    Init {
        /// Profile name to initialize
        #[arg(long, value_name = "NAME")]
        profile: Option<String>,
        /// Display name for feed items
        #[arg(long, value_name = "NAME")]
        author_name: Option<String>,
        /// Avatar reference for feed items
        #[arg(long, value_name = "REF")]
        author_avatar: Option<String>,
        /// Catalog JSON file
        #[arg(long, value_name = "PATH")]
        catalog_path: Option<PathBuf>,
        /// Database file
        #[arg(long, value_name = "PATH")]
        db_path: Option<PathBuf>,
        /// Default feed ordering
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Keep current active profile instead of activating this one
        #[arg(long)]
        no_activate: bool,
    },
    /// Print the resolved profile
    Show {
        /// Optional profile override
        #[arg(long, value_name = "NAME")]
        profile: Option<String>,
    },
}
