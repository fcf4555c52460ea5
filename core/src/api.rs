//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `gradesout_core::api` instead of reaching into
//! internal modules.

pub use crate::config::{
    load_default, load_from, AppConfig, ConversionConfig, FoldersConfig, LoggingConfig,
    ReportConfig, RosterConfig,
};
pub use crate::distribute::{
    resolve_assignments, DistributeOptions, DistributeSummary, Distributor, FolderAssignment,
};
pub use crate::error::{CliError, DistributeError, MatchError, RosterError, TableError};
pub use crate::name::{
    convert_name_for_grading, scan_submission_names, ConversionTable, ScanStats, GRADING_COLUMN,
    LATTE_COLUMN,
};
pub use crate::report::{render_report, GradingItem};
pub use crate::roster::{load_grid, Roster, StudentRow};
