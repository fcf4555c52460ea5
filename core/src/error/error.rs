use thiserror::Error;

use super::{DistributeError, TableError};

/// Top-level error surfaced by the CLI, one line per failure.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("command failed: {0}")]
    Command(String),
    #[error("{0}")]
    Distribute(#[from] DistributeError),
    #[error("{0}")]
    Table(#[from] TableError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}
