//! `gradesout convert` — build the LATTE ↔ grading-sheet name table.

use gradesout_core::api as core_api;

use super::cli::ConvertArgs;

pub fn handle_convert(
    args: ConvertArgs,
    cfg: &core_api::AppConfig,
) -> Result<(), core_api::CliError> {
    let pattern = cfg
        .folders
        .compiled()
        .map_err(|e| core_api::CliError::Config(format!("bad folder pattern: {e}")))?;

    let (table, stats) =
        core_api::ConversionTable::from_submissions(&args.submissions_dir, &pattern)?;
    table.save(&cfg.conversion.path)?;

    println!(
        "Scanned {} folders under {}; found {} student names.",
        stats.subdirs,
        args.submissions_dir.display(),
        stats.matched
    );
    println!(
        "Conversion table written to {}. Keep this file; every distribution run reads it.",
        cfg.conversion.path.display()
    );
    Ok(())
}
