mod normalize;
mod table;

pub use normalize::convert_name_for_grading;
pub use table::{scan_submission_names, ConversionTable, ScanStats, GRADING_COLUMN, LATTE_COLUMN};
