//! Comche CLI binary entry point.
//! Delegates to the library modules for discovery/scan/report and prints
//! results, mapping the outcome onto the process exit status.

use clap::Parser;
use comche::cli::{Cli, Commands};
use comche::{config, discover, output, patterns, report, scan, utils};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::Scan {
            repo_root,
            dir,
            mode,
            tags,
            fail,
            ext,
            comment,
            output: output_mode,
            files,
        } => run_scan_command(
            repo_root, dir, mode, tags, fail, ext, comment, output_mode, files,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_scan_command(
    repo_root: Option<String>,
    dir: Option<String>,
    mode: Option<String>,
    tags: Option<String>,
    fail: Option<usize>,
    ext: Option<String>,
    comment: Option<String>,
    output_mode: Option<String>,
    files: Vec<String>,
) -> ExitCode {
    let eff = match config::resolve_effective(
        repo_root.as_deref(),
        tags.as_deref(),
        fail,
        mode.as_deref(),
        dir.as_deref(),
        ext.as_deref(),
        comment.as_deref(),
        output_mode.as_deref(),
    ) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return ExitCode::from(2);
        }
    };

    // Friendly note if no comche config was found
    if eff.output != "json" {
        if let Ok(None) = config::load_config(&eff.repo_root) {
            eprintln!(
                "{} {}",
                utils::note_prefix(),
                "No comche.toml found; using defaults."
            );
        }
    }

    let mode = match discover::Mode::parse(&eff.mode) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return ExitCode::from(2);
        }
    };

    let compiled = match patterns::compile(&eff.tags, &eff.comment) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return ExitCode::from(2);
        }
    };

    let targets: Vec<PathBuf> = match mode {
        discover::Mode::Commit => {
            let filtered = discover::filter_by_extension(&files, &eff.extension);
            if filtered.is_empty() && eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("No .{} files in the supplied list.", eff.extension)
                );
            }
            filtered
        }
        discover::Mode::Root => {
            let scan_root = eff.repo_root.join(&eff.dir);
            match discover::walk_root(&scan_root, &eff.extension) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    return ExitCode::from(2);
                }
            }
        }
    };

    let aggregate = scan::run_scan(&targets, &compiled);
    let summary = report::evaluate(&aggregate, eff.fail);
    output::print_scan(&aggregate, &summary, &eff.output);

    if summary.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
