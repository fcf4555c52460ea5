//! Folder assignment: exactly one destination directory per roster name.

use std::path::{Path, PathBuf};

use crate::error::MatchError;
use crate::name::ConversionTable;

/// Destination for one student's report.
#[derive(Debug, Clone)]
pub struct FolderAssignment {
    pub grading_name: String,
    pub latte_name: String,
    pub dir: PathBuf,
    /// True when no folder matched and the submissions root is used instead.
    pub fallback: bool,
}

/// Resolve a destination folder for every name in `names`, in order.
///
/// Matching is by substring: the LATTE display name must appear in exactly
/// one of the given subdirectory names. Zero matches falls back to the
/// submissions root (or fails with `require_match`); two or more always
/// fail, ambiguous folder names are never auto-resolved.
pub fn resolve_assignments(
    names: &[String],
    table: &ConversionTable,
    submissions_root: &Path,
    subdirs: &[PathBuf],
    require_match: bool,
) -> Result<Vec<FolderAssignment>, MatchError> {
    names
        .iter()
        .map(|name| resolve_one(name, table, submissions_root, subdirs, require_match))
        .collect()
}

fn resolve_one(
    grading_name: &str,
    table: &ConversionTable,
    submissions_root: &Path,
    subdirs: &[PathBuf],
    require_match: bool,
) -> Result<FolderAssignment, MatchError> {
    let trimmed = grading_name.trim();
    let latte_name = table
        .lookup(trimmed)
        .ok_or_else(|| MatchError::NotInTable(trimmed.to_string()))?
        .to_string();

    let matches: Vec<&PathBuf> = subdirs
        .iter()
        .filter(|dir| {
            dir.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.contains(&latte_name))
        })
        .collect();

    match matches.as_slice() {
        [] if require_match => Err(MatchError::NoFolder(latte_name)),
        [] => {
            tracing::warn!(
                name = %latte_name,
                "no submission folder matched; falling back to the submissions root"
            );
            Ok(FolderAssignment {
                grading_name: grading_name.to_string(),
                latte_name,
                dir: submissions_root.to_path_buf(),
                fallback: true,
            })
        }
        [only] => Ok(FolderAssignment {
            grading_name: grading_name.to_string(),
            latte_name,
            dir: (*only).clone(),
            fallback: false,
        }),
        many => Err(MatchError::Ambiguous {
            latte_name,
            count: many.len(),
        }),
    }
}
