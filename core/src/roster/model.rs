//! Typed roster model: one ordered column list, one record per student.

use std::collections::HashSet;

use crate::config::RosterConfig;
use crate::error::RosterError;

/// One student's row: grading sheet name plus one cell per roster column.
#[derive(Debug, Clone)]
pub struct StudentRow {
    pub name: String,
    pub values: Vec<String>,
}

/// Normalized grading sheet.
///
/// `columns` excludes the name column; every student's `values` holds one
/// cell per entry of `columns`, in the same order. Grading items are built
/// from this same list, so items and values always correspond.
#[derive(Debug, Clone)]
pub struct Roster {
    pub assignment_title: String,
    pub columns: Vec<String>,
    pub students: Vec<StudentRow>,
}

impl Roster {
    /// Normalize a headerless grid into a roster.
    ///
    /// Pipeline: take the title from the first cell of the first raw row,
    /// pad rows to a rectangle, drop fully empty rows and columns, promote
    /// the second surviving row to column headers, then drop sentinel name
    /// rows and reject duplicate names.
    pub fn from_grid(grid: Vec<Vec<String>>, cfg: &RosterConfig) -> Result<Self, RosterError> {
        let assignment_title = grid
            .first()
            .and_then(|row| row.first())
            .map(|cell| cell.trim().to_string())
            .ok_or(RosterError::Empty)?;

        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut rows: Vec<Vec<String>> = grid
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .collect();

        let keep: Vec<usize> = (0..width)
            .filter(|&i| rows.iter().any(|row| !row[i].trim().is_empty()))
            .collect();
        for row in &mut rows {
            let picked: Vec<String> = keep.iter().map(|&i| std::mem::take(&mut row[i])).collect();
            *row = picked;
        }

        // rows[0] is the title row, rows[1] the header row.
        if rows.len() < 2 {
            return Err(RosterError::Empty);
        }
        let headers = rows[1].clone();
        let name_idx = headers
            .iter()
            .position(|h| h.trim() == cfg.name_column)
            .ok_or_else(|| RosterError::MissingNameColumn(cfg.name_column.clone()))?;

        let mut students = Vec::new();
        let mut seen = HashSet::new();
        for row in rows.into_iter().skip(2) {
            let name = row[name_idx].trim().to_string();
            if cfg.drop_values.iter().any(|v| v == &name) {
                continue;
            }
            if !seen.insert(name.clone()) {
                return Err(RosterError::DuplicateName(name));
            }
            let values = row
                .into_iter()
                .enumerate()
                .filter(|(i, _)| *i != name_idx)
                .map(|(_, cell)| cell)
                .collect();
            students.push(StudentRow { name, values });
        }

        let columns = headers
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != name_idx)
            .map(|(_, header)| header)
            .collect();

        Ok(Self {
            assignment_title,
            columns,
            students,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    fn cfg() -> RosterConfig {
        RosterConfig::default()
    }

    #[test]
    fn normalizes_title_headers_and_rows() {
        let roster = Roster::from_grid(
            grid(&[
                &["A1 Report ", "", "", ""],
                &["", "", "", ""], // fully empty row
                &["Name", ">Pt 1 /0.5", "Comments", ""], // last column fully empty
                &["Doe,Jane", "0.4", "Nice work", ""],
                &["#REF!", "", "x", ""],
                &["", "0", "", ""], // sentinel empty name (non-empty row)
                &["Smith,John", "0.5", "", ""],
            ]),
            &cfg(),
        )
        .unwrap();

        assert_eq!(roster.assignment_title, "A1 Report");
        assert_eq!(roster.columns, vec![">Pt 1 /0.5", "Comments"]);
        assert_eq!(roster.students.len(), 2);
        assert_eq!(roster.students[0].name, "Doe,Jane");
        assert_eq!(roster.students[0].values, vec!["0.4", "Nice work"]);
        assert_eq!(roster.students[1].name, "Smith,John");
        assert_eq!(roster.students[1].values, vec!["0.5", ""]);
        // one value per column for every student
        for student in &roster.students {
            assert_eq!(student.values.len(), roster.columns.len());
        }
    }

    #[test]
    fn ragged_rows_are_padded() {
        let roster = Roster::from_grid(
            grid(&[
                &["Quiz 3"],
                &["Name", "Score /10", "Comments"],
                &["Doe,Jane", "9"],
            ]),
            &cfg(),
        )
        .unwrap();
        assert_eq!(roster.students[0].values, vec!["9", ""]);
    }

    #[test]
    fn name_column_position_is_not_assumed() {
        let roster = Roster::from_grid(
            grid(&[
                &["Quiz"],
                &["Score /5", "Name"],
                &["4", "Doe,Jane"],
            ]),
            &cfg(),
        )
        .unwrap();
        assert_eq!(roster.columns, vec!["Score /5"]);
        assert_eq!(roster.students[0].name, "Doe,Jane");
        assert_eq!(roster.students[0].values, vec!["4"]);
    }

    #[test]
    fn missing_name_column_fails() {
        let err = Roster::from_grid(
            grid(&[&["Quiz"], &["Student", "Score"], &["Doe,Jane", "4"]]),
            &cfg(),
        )
        .unwrap_err();
        assert!(matches!(err, RosterError::MissingNameColumn(col) if col == "Name"));
    }

    #[test]
    fn duplicate_names_fail() {
        let err = Roster::from_grid(
            grid(&[
                &["Quiz"],
                &["Name", "Score"],
                &["Doe,Jane", "4"],
                &["Doe,Jane", "5"],
            ]),
            &cfg(),
        )
        .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateName(name) if name == "Doe,Jane"));
    }

    #[test]
    fn empty_grid_fails() {
        assert!(matches!(
            Roster::from_grid(Vec::new(), &cfg()).unwrap_err(),
            RosterError::Empty
        ));
        assert!(matches!(
            Roster::from_grid(grid(&[&["Title only"]]), &cfg()).unwrap_err(),
            RosterError::Empty
        ));
    }
}
