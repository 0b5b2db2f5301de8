//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "covgate",
    version,
    about = "Coverage gate for CI",
    long_about = "Covgate — a tiny, fast CLI that gates CI on code coverage.\n\nReads a browser coverage report (JSON array of per-file entries), compares it against a stored baseline, and fails the run when line coverage is below 75% or dropped more than 5 points.\n\nConfiguration precedence: CLI > covgate.toml > defaults.",
    after_help = "Examples:\n  covgate check\n  covgate check coverage/coverage-final.json coverage-baseline --output human\n  covgate save-baseline coverage/coverage-final.json coverage-baseline",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for checking coverage and saving baselines.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current covgate version."
    )]
    Version,
    /// Compare coverage against thresholds and the baseline
    #[command(
        about = "Run the coverage check",
        long_about = "Parse the coverage report, load the baseline if present, and decide pass/fail. Prints the full comparison as indented JSON (or a table with --output human) and exits 1 on failure.",
        after_help = "Examples:\n  covgate check\n  covgate check coverage/coverage-final.json\n  covgate check --output human"
    )]
    Check {
        #[arg(help = "Path to the coverage report (default: coverage/coverage-final.json)")]
        coverage_path: Option<String>,
        #[arg(help = "Directory holding the baseline (default: coverage-baseline)")]
        baseline_dir: Option<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: json)")]
        output: Option<String>,
    },
    /// Persist current coverage as the new baseline
    #[command(
        about = "Save the baseline",
        long_about = "Parse the coverage report and write its summary as coverage-summary.json into the output directory, creating it when needed and overwriting any previous baseline.",
        after_help = "Examples:\n  covgate save-baseline\n  covgate save-baseline coverage/coverage-final.json coverage-baseline"
    )]
    SaveBaseline {
        #[arg(help = "Path to the coverage report (default: coverage/coverage-final.json)")]
        coverage_path: Option<String>,
        #[arg(help = "Directory to write the baseline into (default: coverage-baseline)")]
        output_dir: Option<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
    },
}
