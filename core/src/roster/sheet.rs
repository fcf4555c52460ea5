//! Raw grid loading for .csv and .xlsx grading sheets.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::error::RosterError;

/// Load a grading sheet into a headerless grid of strings.
///
/// The first row is expected to carry the assignment title in its first
/// cell and the second row the column headers; interpreting them is the
/// roster model's job, not the loader's. Every cell is coerced to a
/// string, empty cells to `""`.
pub fn load_grid(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<String>>, RosterError> {
    if !path.exists() {
        return Err(RosterError::MissingFile(path.to_path_buf()));
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => load_csv(path),
        "xlsx" => {
            let sheet = sheet.ok_or(RosterError::SheetNameRequired)?;
            load_xlsx(path, sheet)
        }
        _ => Err(RosterError::UnsupportedExtension(path.to_path_buf())),
    }
}

fn load_csv(path: &Path) -> Result<Vec<Vec<String>>, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

fn load_xlsx(path: &Path, sheet: &str) -> Result<Vec<Vec<String>>, RosterError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    if !workbook.sheet_names().iter().any(|s| s.as_str() == sheet) {
        return Err(RosterError::MissingSheet {
            sheet: sheet.to_string(),
            file: path.to_path_buf(),
        });
    }
    let range = workbook.worksheet_range(sheet)?;
    let grid = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect();
    Ok(grid)
}
