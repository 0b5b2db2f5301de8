//! Covgate CLI binary entry point.
//! Delegates to modules for parsing, comparison, and baseline handling.

mod baseline;
mod cli;
mod compare;
mod config;
mod models;
mod output;
mod report;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            coverage_path,
            baseline_dir,
            repo_root,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                coverage_path.as_deref(),
                baseline_dir.as_deref(),
                output.as_deref(),
            );
            // Friendly note if no covgate config was found
            if eff.output != "json" && config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No covgate.toml found; using defaults."
                );
            }
            let result = compare::compare_paths(&eff.coverage_path, &eff.baseline_dir);
            if eff.output != "json" && result.baseline.is_none() {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    "No baseline found; drop check skipped."
                );
            }
            output::print_comparison(&result, &eff.output);
            if !result.passed {
                std::process::exit(1);
            }
        }
        Commands::SaveBaseline {
            coverage_path,
            output_dir,
            repo_root,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                coverage_path.as_deref(),
                output_dir.as_deref(),
                None,
            );
            match report::parse_coverage_report(&eff.coverage_path) {
                Some(summary) => match baseline::save_baseline(&summary, &eff.baseline_dir) {
                    Ok(_) => {
                        println!("Baseline coverage saved: {}%", summary.lines.percentage);
                    }
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!(
                                "failed to write baseline to {}: {}",
                                eff.baseline_dir.to_string_lossy(),
                                e
                            )
                        );
                        std::process::exit(2);
                    }
                },
                None => {
                    // Graceful: nothing written, normal exit
                    eprintln!(
                        "{} {}",
                        utils::note_prefix(),
                        format!(
                            "Coverage report not found or unreadable: {}; baseline not written.",
                            eff.coverage_path.to_string_lossy()
                        )
                    );
                }
            }
        }
    }
}
