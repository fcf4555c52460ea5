//! `gradesout distribute` — load, validate, preview, confirm, write.

use std::io::Write;

use gradesout_core::api as core_api;

use super::cli::DistributeArgs;
use crate::prompt::{confirm_distribution, Verdict};

pub fn handle_distribute(
    args: DistributeArgs,
    cfg: &core_api::AppConfig,
) -> Result<i32, core_api::CliError> {
    let opts = core_api::DistributeOptions {
        submissions_root: args.submissions_dir,
        roster_path: args.roster_file,
        sheet_name: args.sheet_name,
        alias: args.alias,
        require_match: args.require_match,
    };

    let distributor = core_api::Distributor::load(opts, cfg)?;
    tracing::debug!(students = distributor.students(), "distributor ready");
    if distributor.students() == 0 {
        println!("No student rows in the grading sheet; nothing to distribute.");
        return Ok(0);
    }

    let collisions = distributor.validate_existing(args.allow_overwrite)?;
    if collisions > 0 {
        println!("{collisions} existing report(s) will be overwritten.");
    }

    let verdict = if args.yes {
        Verdict::Proceeded
    } else {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        let total = distributor.students();
        let mut sample = 0usize;
        confirm_distribution(&mut input, &mut output, |out| {
            let index = sample % total;
            sample += 1;
            preview(out, &distributor, index)
        })?
    };

    match verdict {
        Verdict::Aborted => {
            println!("No reports have been generated or saved.");
            Ok(0)
        }
        Verdict::Proceeded => {
            let summary = distributor.distribute()?;
            if summary.fell_back > 0 {
                println!(
                    "Saved {} reports ({} to the submissions root because no folder matched).",
                    summary.written, summary.fell_back
                );
            } else {
                println!("Saved {} reports.", summary.written);
            }
            Ok(0)
        }
    }
}

fn preview<W: Write>(
    out: &mut W,
    distributor: &core_api::Distributor,
    index: usize,
) -> std::io::Result<()> {
    writeln!(
        out,
        "\nPreviewing report output. Nothing is saved until you confirm."
    )?;
    writeln!(out, "{}", "-".repeat(20))?;
    writeln!(
        out,
        "The following report will be saved as {}:",
        distributor.output_path(index).display()
    )?;
    writeln!(out, "{}", distributor.report_for(index))?;
    writeln!(out, "{}", "-".repeat(20))?;
    Ok(())
}
