use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Full tool configuration.
///
/// Every knob the original workflow hard-coded (table path, sentinel name
/// values, folder pattern, report cosmetics) lives here and is passed into
/// the components at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub conversion: ConversionConfig,

    #[serde(default)]
    pub roster: RosterConfig,

    #[serde(default)]
    pub folders: FoldersConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Where the conversion table csv is persisted. The file is durable
    /// reference data shared by `convert` and `distribute` runs.
    #[serde(default = "default_conversion_path")]
    pub path: PathBuf,
}

fn default_conversion_path() -> PathBuf {
    PathBuf::from("conv/latte_grading_conversion.csv")
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            path: default_conversion_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Header of the column holding student names in the grading sheet.
    #[serde(default = "default_name_column")]
    pub name_column: String,

    /// Name-column values that mark a row as not a real student.
    #[serde(default = "default_drop_values")]
    pub drop_values: Vec<String>,
}

fn default_name_column() -> String {
    "Name".to_string()
}

fn default_drop_values() -> Vec<String> {
    vec![String::new(), "#REF!".to_string()]
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            name_column: default_name_column(),
            drop_values: default_drop_values(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldersConfig {
    /// Pattern extracting the student display name (capture group 1) from
    /// a submission folder name.
    #[serde(default = "default_folder_pattern")]
    pub pattern: String,
}

fn default_folder_pattern() -> String {
    r"([ a-zA-Z'-]+)_\d+_assignsubmission_file_".to_string()
}

impl Default for FoldersConfig {
    fn default() -> Self {
        Self {
            pattern: default_folder_pattern(),
        }
    }
}

impl FoldersConfig {
    pub fn compiled(&self) -> Result<regex::Regex, regex::Error> {
        regex::Regex::new(&self.pattern)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Marker prefixed to column headers; each occurrence is one
    /// indentation level in the rendered report.
    #[serde(default = "default_indent_mark")]
    pub indent_mark: String,

    #[serde(default = "default_spaces_per_indent")]
    pub spaces_per_indent: usize,

    /// Shown for comment columns left empty (or graded "0") on the sheet.
    #[serde(default = "default_no_comment_notice")]
    pub no_comment_notice: String,

    /// Shown for scored columns left empty on the sheet.
    #[serde(default = "default_no_value_notice")]
    pub no_value_notice: String,
}

fn default_indent_mark() -> String {
    ">".to_string()
}

fn default_spaces_per_indent() -> usize {
    4
}

fn default_no_comment_notice() -> String {
    "(No comment entered)".to_string()
}

fn default_no_value_notice() -> String {
    "(No value entered)".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            indent_mark: default_indent_mark(),
            spaces_per_indent: default_spaces_per_indent(),
            no_comment_notice: default_no_comment_notice(),
            no_value_notice: default_no_value_notice(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "gradesout_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_from_empty_toml() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.roster.name_column, "Name");
        assert_eq!(cfg.roster.drop_values, vec!["", "#REF!"]);
        assert_eq!(cfg.report.indent_mark, ">");
        assert_eq!(cfg.report.spaces_per_indent, 4);
        assert_eq!(
            cfg.conversion.path,
            PathBuf::from("conv/latte_grading_conversion.csv")
        );
        assert!(cfg.folders.compiled().is_ok());
        assert!(cfg.logging.console);
        assert!(!cfg.logging.file);
    }

    #[test]
    fn section_overrides_keep_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [roster]
            name_column = "Student"

            [report]
            spaces_per_indent = 2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.roster.name_column, "Student");
        assert_eq!(cfg.report.spaces_per_indent, 2);
        assert_eq!(cfg.report.indent_mark, ">");
        assert_eq!(cfg.roster.drop_values, vec!["", "#REF!"]);
    }

    #[test]
    fn default_pattern_captures_display_name() {
        let re = FoldersConfig::default().compiled().unwrap();
        let caps = re
            .captures("Jane Doe_12345_assignsubmission_file_hw1.pdf")
            .unwrap();
        assert_eq!(&caps[1], "Jane Doe");
        assert!(re.captures("random_folder").is_none());
    }
}
