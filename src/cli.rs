use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repomirror",
    version,
    about = "Repository hygiene scoring and improvement roadmap CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a repository and print the full report
    Analyze(AnalyzeCommand),
    /// Print only the improvement roadmap
    Suggest(SuggestCommand),
}

/// Saved analyzer outputs shared by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct SignalInputs {
    /// pylint text output containing a "rated at X/10" line
    #[arg(long, value_name = "FILE")]
    pub lint_report: Option<PathBuf>,
    /// radon `cc -j` JSON output
    #[arg(long, value_name = "FILE")]
    pub complexity_report: Option<PathBuf>,
    /// Hosting-platform repository metadata as JSON
    #[arg(long, value_name = "FILE")]
    pub hosting_metadata: Option<PathBuf>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    /// Also write the rendered report to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Exit with code 2 when the score is below this value
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,
    #[command(flatten)]
    pub inputs: SignalInputs,
}

#[derive(Args)]
pub struct SuggestCommand {
    pub path: PathBuf,
    #[command(flatten)]
    pub inputs: SignalInputs,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
