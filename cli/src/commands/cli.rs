use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gradesout",
    about = "Distributes per-student grade feedback reports into LATTE submission folders"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file overriding the default lookup
    /// (~/.gradesout/config.toml, then ./gradesout.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ConvertArgs {
    /// Folder whose immediate subdirectories are the students' LATTE
    /// submission folders (<name>_<digits>_assignsubmission_file_...).
    pub submissions_dir: PathBuf,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DistributeArgs {
    /// Folder whose immediate subdirectories are the students' LATTE
    /// submission folders.
    pub submissions_dir: PathBuf,

    /// Grading sheet file (.csv, or .xlsx together with --sheet-name).
    pub roster_file: PathBuf,

    /// Short assignment alias used in report file names (e.g. A1, midterm).
    pub alias: String,

    /// Sheet to read; required for .xlsx grading sheets.
    #[arg(long)]
    pub sheet_name: Option<String>,

    /// Overwrite feedback files already present at the destinations.
    #[arg(long)]
    pub allow_overwrite: bool,

    /// Fail when a student has no matching submission folder, instead of
    /// writing the report to the submissions root.
    #[arg(long)]
    pub require_match: bool,

    /// Skip the interactive confirmation and write immediately.
    #[arg(long)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan submission folders and (re)generate the name conversion table.
    Convert(ConvertArgs),
    /// Render and save one feedback report per student.
    Distribute(DistributeArgs),
}
