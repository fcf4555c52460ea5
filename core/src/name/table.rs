//! Conversion table bridging LATTE folder names and grading sheet names.
//!
//! Produced by the `convert` command, consumed by every `distribute` run.
//! The persisted csv is durable reference data: it must be regenerated
//! whenever the submission export changes, and a stale table shows up
//! later as match failures.

use std::collections::BTreeMap;
use std::path::Path;

use regex::Regex;

use crate::error::TableError;
use crate::name::convert_name_for_grading;

/// Header of the column holding the name as printed in the LATTE folder.
pub const LATTE_COLUMN: &str = "Name on LATTE";
/// Header of the column holding the normalized grading sheet name.
pub const GRADING_COLUMN: &str = "Name on Grading Sheet";

/// Counts reported by [`scan_submission_names`].
#[derive(Debug, Clone, Copy)]
pub struct ScanStats {
    /// Immediate subdirectories seen under the submissions root.
    pub subdirs: usize,
    /// Subdirectories whose name matched the folder pattern.
    pub matched: usize,
}

/// Extract the display names from the immediate subdirectories of `root`.
///
/// Subdirectories that do not match `pattern` are skipped; zero matches is
/// an error (wrong directory, or the export layout changed).
pub fn scan_submission_names(
    root: &Path,
    pattern: &Regex,
) -> Result<(Vec<String>, ScanStats), TableError> {
    let mut names = Vec::new();
    let mut subdirs = 0usize;
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        subdirs += 1;
        let folder = entry.file_name().to_string_lossy().into_owned();
        if let Some(caps) = pattern.captures(&folder) {
            if let Some(name) = caps.get(1) {
                names.push(name.as_str().to_string());
            }
        }
    }
    if names.is_empty() {
        return Err(TableError::NoFoldersMatched(root.to_path_buf()));
    }
    let stats = ScanStats {
        subdirs,
        matched: names.len(),
    };
    Ok((names, stats))
}

/// Two-column lookup table keyed by grading sheet name.
#[derive(Debug, Clone, Default)]
pub struct ConversionTable {
    // grading sheet name -> LATTE folder name, sorted for stable output
    entries: BTreeMap<String, String>,
}

impl ConversionTable {
    /// Build a table from explicit (grading name, LATTE name) pairs.
    pub fn from_entries<I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries = BTreeMap::new();
        for (grading, latte) in pairs {
            if entries.insert(grading.clone(), latte).is_some() {
                return Err(TableError::DuplicateEntry(grading));
            }
        }
        Ok(Self { entries })
    }

    /// Build a table by scanning and normalizing the submission folders
    /// under `root`.
    pub fn from_submissions(
        root: &Path,
        pattern: &Regex,
    ) -> Result<(Self, ScanStats), TableError> {
        let (names, stats) = scan_submission_names(root, pattern)?;
        let table = Self::from_entries(
            names
                .into_iter()
                .map(|latte| (convert_name_for_grading(&latte), latte)),
        )?;
        Ok((table, stats))
    }

    /// Load a previously generated table.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        if !path.exists() {
            return Err(TableError::Missing(path.to_path_buf()));
        }
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let latte_idx = column_position(&headers, LATTE_COLUMN, path)?;
        let grading_idx = column_position(&headers, GRADING_COLUMN, path)?;

        let mut pairs = Vec::new();
        for record in reader.records() {
            let record = record?;
            pairs.push((
                record.get(grading_idx).unwrap_or("").to_string(),
                record.get(latte_idx).unwrap_or("").to_string(),
            ));
        }
        Self::from_entries(pairs)
    }

    /// Write the table sorted by grading name, overwriting any previous
    /// file at `path`. The parent directory is created if missing.
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record([LATTE_COLUMN, GRADING_COLUMN])?;
        for (grading, latte) in &self.entries {
            writer.write_record([latte.as_str(), grading.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn lookup(&self, grading_name: &str) -> Option<&str> {
        self.entries.get(grading_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn column_position(
    headers: &csv::StringRecord,
    column: &str,
    file: &Path,
) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| TableError::MissingColumn {
            file: file.to_path_buf(),
            column: column.to_string(),
        })
}
