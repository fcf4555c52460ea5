use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or normalizing the grading sheet.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("missing file: cannot find grading sheet {0}")]
    MissingFile(PathBuf),
    #[error("unsupported extension: cannot recognize file suffix of {0}")]
    UnsupportedExtension(PathBuf),
    #[error("missing sheet name: reading an .xlsx grading sheet requires a sheet name")]
    SheetNameRequired,
    #[error("missing sheet: no sheet named '{sheet}' in {file}")]
    MissingSheet { sheet: String, file: PathBuf },
    #[error("empty sheet: the grading sheet has no title and header rows")]
    Empty,
    #[error("missing column: the grading sheet has no '{0}' column")]
    MissingNameColumn(String),
    #[error("duplicate student: '{0}' appears more than once in the grading sheet")]
    DuplicateName(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("xlsx error: {0}")]
    Xlsx(#[from] calamine::XlsxError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
