//! Load → validate → distribute pipeline for one grading run.

use std::path::{Path, PathBuf};

use crate::config::{AppConfig, ReportConfig};
use crate::error::DistributeError;
use crate::name::ConversionTable;
use crate::report::{render_report, GradingItem};
use crate::roster::{load_grid, Roster};

use super::matcher::{resolve_assignments, FolderAssignment};

/// Inputs for one distribution run.
#[derive(Debug, Clone)]
pub struct DistributeOptions {
    pub submissions_root: PathBuf,
    pub roster_path: PathBuf,
    /// Required for .xlsx grading sheets.
    pub sheet_name: Option<String>,
    /// Short assignment alias used in the report file names.
    pub alias: String,
    /// Fail instead of falling back to the submissions root when no folder
    /// matches a student.
    pub require_match: bool,
}

/// Outcome counts of a distribution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributeSummary {
    pub written: usize,
    /// Reports written to the submissions root because no folder matched.
    pub fell_back: usize,
}

/// One fully resolved grading run: roster, grading items, and a folder
/// assignment per student, ready to validate and write.
#[derive(Debug)]
pub struct Distributor {
    report_cfg: ReportConfig,
    alias: String,
    roster: Roster,
    items: Vec<GradingItem>,
    assignments: Vec<FolderAssignment>,
}

impl Distributor {
    /// Load the roster and the conversion table and resolve a folder
    /// assignment for every student. Nothing is written yet.
    pub fn load(opts: DistributeOptions, cfg: &AppConfig) -> Result<Self, DistributeError> {
        if !opts.submissions_root.is_dir() {
            return Err(DistributeError::MissingSubmissionsDir(
                opts.submissions_root,
            ));
        }

        tracing::info!(roster = %opts.roster_path.display(), "loading grading sheet");
        let grid = load_grid(&opts.roster_path, opts.sheet_name.as_deref())?;
        let roster = Roster::from_grid(grid, &cfg.roster)?;
        tracing::debug!(
            students = roster.students.len(),
            columns = roster.columns.len(),
            title = %roster.assignment_title,
            "grading sheet normalized"
        );

        let items: Vec<GradingItem> = roster
            .columns
            .iter()
            .map(|header| GradingItem::parse(&cfg.report, header))
            .collect();

        let table = ConversionTable::load(&cfg.conversion.path)?;

        let subdirs = immediate_subdirs(&opts.submissions_root)?;
        let names: Vec<String> = roster.students.iter().map(|s| s.name.clone()).collect();
        let assignments = resolve_assignments(
            &names,
            &table,
            &opts.submissions_root,
            &subdirs,
            opts.require_match,
        )?;

        Ok(Self {
            report_cfg: cfg.report.clone(),
            alias: opts.alias,
            roster,
            items,
            assignments,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn items(&self) -> &[GradingItem] {
        &self.items
    }

    pub fn students(&self) -> usize {
        self.roster.students.len()
    }

    /// Deterministic output file name for one assignment.
    pub fn output_file_name(&self, assignment: &FolderAssignment) -> String {
        format!(
            "{}_{}_Grade_Feedback.txt",
            assignment.latte_name.replace(' ', "_"),
            self.alias
        )
    }

    /// Full destination path for the student at `index` in roster order.
    pub fn output_path(&self, index: usize) -> PathBuf {
        let assignment = &self.assignments[index];
        assignment.dir.join(self.output_file_name(assignment))
    }

    /// Pre-flight pass over every destination before anything is written.
    ///
    /// An existing report is fatal by default; with `allow_overwrite` it is
    /// warned about and counted. Returns the would-overwrite count.
    pub fn validate_existing(&self, allow_overwrite: bool) -> Result<usize, DistributeError> {
        let mut collisions = 0usize;
        for index in 0..self.assignments.len() {
            let path = self.output_path(index);
            if path.exists() {
                if allow_overwrite {
                    tracing::warn!(file = %path.display(), "existing report will be overwritten");
                    collisions += 1;
                } else {
                    return Err(DistributeError::ExistingReport(path));
                }
            }
        }
        Ok(collisions)
    }

    /// Render the report for the student at `index` in roster order.
    pub fn report_for(&self, index: usize) -> String {
        let student = &self.roster.students[index];
        let display_name = student.name.replace(',', ", ");
        render_report(
            &self.report_cfg,
            &self.roster.assignment_title,
            &display_name,
            &self.items,
            &student.values,
        )
    }

    /// Write every report. Overwrites unconditionally; the overwrite policy
    /// was already enforced by [`Self::validate_existing`]. Not
    /// transactional: an io error mid-batch leaves earlier files in place.
    pub fn distribute(&self) -> Result<DistributeSummary, DistributeError> {
        let mut summary = DistributeSummary::default();
        for (index, assignment) in self.assignments.iter().enumerate() {
            let path = self.output_path(index);
            std::fs::write(&path, self.report_for(index))?;
            tracing::debug!(file = %path.display(), "report written");
            summary.written += 1;
            if assignment.fallback {
                summary.fell_back += 1;
            }
        }
        tracing::info!(
            written = summary.written,
            fell_back = summary.fell_back,
            "distribution finished"
        );
        Ok(summary)
    }
}

fn immediate_subdirs(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.path().is_dir() {
            dirs.push(entry.path());
        }
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MatchError, RosterError, TableError};
    use pretty_assertions::assert_eq;

    const ROSTER_CSV: &str = "\
A1 Report,,
Name,>Pt 1 /0.5,Comments
\"Doe,Jane\",0.4,Good job!
\"Smith,John\",0.5,
";

    struct Fixture {
        tmp: tempfile::TempDir,
        cfg: AppConfig,
        opts: DistributeOptions,
    }

    fn setup(folders: &[&str]) -> Fixture {
        let tmp = tempfile::tempdir().unwrap();
        let submissions = tmp.path().join("submissions");
        std::fs::create_dir(&submissions).unwrap();
        for folder in folders {
            std::fs::create_dir(submissions.join(folder)).unwrap();
        }

        let roster_path = tmp.path().join("a1.csv");
        std::fs::write(&roster_path, ROSTER_CSV).unwrap();

        let mut cfg = AppConfig::default();
        cfg.conversion.path = tmp.path().join("conv").join("table.csv");
        ConversionTable::from_entries([
            ("Doe,Jane".to_string(), "Jane Doe".to_string()),
            ("Smith,John".to_string(), "John Smith".to_string()),
        ])
        .unwrap()
        .save(&cfg.conversion.path)
        .unwrap();

        let opts = DistributeOptions {
            submissions_root: submissions,
            roster_path,
            sheet_name: None,
            alias: "A1".to_string(),
            require_match: false,
        };
        Fixture { tmp, cfg, opts }
    }

    const JANE_DIR: &str = "Jane Doe_1111_assignsubmission_file_";
    const JOHN_DIR: &str = "John Smith_2222_assignsubmission_file_";

    #[test]
    fn one_item_per_column_per_student() {
        let fx = setup(&[JANE_DIR, JOHN_DIR]);
        let distributor = Distributor::load(fx.opts.clone(), &fx.cfg).unwrap();
        assert_eq!(distributor.items().len(), distributor.roster().columns.len());
        for student in &distributor.roster().students {
            assert_eq!(student.values.len(), distributor.items().len());
        }
    }

    #[test]
    fn end_to_end_writes_reports_into_matched_folders() {
        let fx = setup(&[JANE_DIR, JOHN_DIR]);
        let distributor = Distributor::load(fx.opts.clone(), &fx.cfg).unwrap();

        assert_eq!(distributor.validate_existing(false).unwrap(), 0);
        let summary = distributor.distribute().unwrap();
        assert_eq!(
            summary,
            DistributeSummary {
                written: 2,
                fell_back: 0
            }
        );

        let jane_report = fx
            .opts
            .submissions_root
            .join(JANE_DIR)
            .join("Jane_Doe_A1_Grade_Feedback.txt");
        let body = std::fs::read_to_string(&jane_report).unwrap();
        assert_eq!(
            body,
            "Assignment Report for A1 Report\n\n\
             Student Name: Doe, Jane\n\n\
             \x20   Pt 1: 0.4/0.5\n\
             \nComments: Good job!\n"
        );

        let john_report = fx
            .opts
            .submissions_root
            .join(JOHN_DIR)
            .join("John_Smith_A1_Grade_Feedback.txt");
        let body = std::fs::read_to_string(&john_report).unwrap();
        assert!(body.contains("Comments: (No comment entered)"));
        assert!(body.contains("Pt 1: 0.5/0.5"));
    }

    #[test]
    fn existing_report_blocks_by_default() {
        let fx = setup(&[JANE_DIR, JOHN_DIR]);
        let distributor = Distributor::load(fx.opts.clone(), &fx.cfg).unwrap();
        let existing = fx
            .opts
            .submissions_root
            .join(JANE_DIR)
            .join("Jane_Doe_A1_Grade_Feedback.txt");
        std::fs::write(&existing, "old report").unwrap();

        let err = distributor.validate_existing(false).unwrap_err();
        assert!(matches!(err, DistributeError::ExistingReport(path) if path == existing));
        // nothing was written over it
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "old report");

        // allow-overwrite counts it instead, and distribution replaces it
        assert_eq!(distributor.validate_existing(true).unwrap(), 1);
        distributor.distribute().unwrap();
        assert_ne!(std::fs::read_to_string(&existing).unwrap(), "old report");
    }

    #[test]
    fn missing_folder_falls_back_to_root_and_is_counted() {
        let fx = setup(&[JANE_DIR]);
        let distributor = Distributor::load(fx.opts.clone(), &fx.cfg).unwrap();
        let summary = distributor.distribute().unwrap();
        assert_eq!(
            summary,
            DistributeSummary {
                written: 2,
                fell_back: 1
            }
        );
        assert!(fx
            .opts
            .submissions_root
            .join("John_Smith_A1_Grade_Feedback.txt")
            .exists());
    }

    #[test]
    fn missing_folder_fails_when_match_required() {
        let mut fx = setup(&[JANE_DIR]);
        fx.opts.require_match = true;
        let err = Distributor::load(fx.opts, &fx.cfg).unwrap_err();
        assert!(matches!(
            err,
            DistributeError::Match(MatchError::NoFolder(name)) if name == "John Smith"
        ));
    }

    #[test]
    fn ambiguous_folders_fail() {
        let fx = setup(&[
            JANE_DIR,
            JOHN_DIR,
            "Jane Doe_9999_assignsubmission_file_resubmit",
        ]);
        let err = Distributor::load(fx.opts, &fx.cfg).unwrap_err();
        assert!(matches!(
            err,
            DistributeError::Match(MatchError::Ambiguous { count: 2, .. })
        ));
    }

    #[test]
    fn missing_conversion_table_fails() {
        let fx = setup(&[JANE_DIR, JOHN_DIR]);
        std::fs::remove_file(&fx.cfg.conversion.path).unwrap();
        let err = Distributor::load(fx.opts, &fx.cfg).unwrap_err();
        assert!(matches!(
            err,
            DistributeError::Table(TableError::Missing(_))
        ));
    }

    #[test]
    fn missing_submissions_directory_fails() {
        let fx = setup(&[JANE_DIR]);
        let mut opts = fx.opts.clone();
        opts.submissions_root = fx.tmp.path().join("nowhere");
        let err = Distributor::load(opts, &fx.cfg).unwrap_err();
        assert!(matches!(err, DistributeError::MissingSubmissionsDir(_)));
    }

    #[test]
    fn roster_errors_surface() {
        let fx = setup(&[JANE_DIR]);
        let mut opts = fx.opts.clone();
        opts.roster_path = fx.tmp.path().join("missing.csv");
        let err = Distributor::load(opts, &fx.cfg).unwrap_err();
        assert!(matches!(
            err,
            DistributeError::Roster(RosterError::MissingFile(_))
        ));
    }
}
