use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] jeonlog_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Exhibition ID cannot be empty")]
    EmptyExhibitionId,
    #[error("No record title provided")]
    EmptyTitle,
    #[error("No record found for exhibition: {0}")]
    RecordNotFound(String),
    #[error("Exhibition '{0}' is not in the catalog (use --force to record it anyway)")]
    UnknownExhibition(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Refusing to clear stored records without --yes")]
    ResetNotConfirmed,
}
