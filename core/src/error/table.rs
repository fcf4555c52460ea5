use std::path::PathBuf;

use thiserror::Error;

/// Failures while building, saving, or loading the name conversion table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("missing file: cannot find conversion table {0}; run `gradesout convert` first")]
    Missing(PathBuf),
    #[error("no submissions: no subdirectory of {0} matches the folder naming pattern")]
    NoFoldersMatched(PathBuf),
    #[error("bad table: conversion table {file} has no '{column}' column")]
    MissingColumn { file: PathBuf, column: String },
    #[error("duplicate entry: grading name '{0}' appears more than once in the conversion table")]
    DuplicateEntry(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
