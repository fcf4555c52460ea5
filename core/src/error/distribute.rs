use std::path::PathBuf;

use thiserror::Error;

use super::{RosterError, TableError};

/// Failures while resolving a student name to a destination folder.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error(
        "unmatched name: '{0}' is not in the conversion table; \
         add an entry or regenerate the table"
    )]
    NotInTable(String),
    #[error("missing folder: no submission folder contains '{0}'")]
    NoFolder(String),
    #[error(
        "ambiguous folder: {count} submission folders contain '{latte_name}'; \
         duplicate names are not supported"
    )]
    Ambiguous { latte_name: String, count: usize },
}

/// Failures anywhere in the load → validate → write pipeline.
#[derive(Error, Debug)]
pub enum DistributeError {
    #[error("missing directory: {0} is not a directory")]
    MissingSubmissionsDir(PathBuf),
    #[error("existing report: {0} already exists; delete it or allow overwriting")]
    ExistingReport(PathBuf),
    #[error("{0}")]
    Roster(#[from] RosterError),
    #[error("{0}")]
    Table(#[from] TableError),
    #[error("{0}")]
    Match(#[from] MatchError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
