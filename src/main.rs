mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod scan;
mod types;

use crate::error::{MirrorError, Result};
use crate::types::report::EvaluationReport;
use crate::types::scoring::ScoringConfig;
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct Evaluation {
    report: EvaluationReport,
    warnings: Vec<String>,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn evaluate_path(path: &Path, inputs: &cli::SignalInputs) -> Result<Evaluation> {
    if !path.exists() {
        return Err(MirrorError::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(MirrorError::NotADirectory(path.display().to_string()));
    }

    let scoring = config::load_config(path)?
        .map(|cfg| cfg.scoring_config())
        .unwrap_or_else(ScoringConfig::default);

    let scan_inputs = scan::ScanInputs {
        lint_report: inputs.lint_report.clone(),
        complexity_report: inputs.complexity_report.clone(),
        hosting_metadata: inputs.hosting_metadata.clone(),
        hotspot_threshold: scoring.thresholds.hotspot_complexity,
    };
    let discovery = scan::discover(path, &scan_inputs)?;
    let (score, recommendations) = analyze::evaluate(&discovery.signals, &scoring);
    info!(score = score.overall_score, level = %score.level, "evaluation complete");

    let repository = path
        .canonicalize()
        .ok()
        .and_then(|full| full.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string());

    Ok(Evaluation {
        report: EvaluationReport::new(repository, discovery.signals, score, recommendations),
        warnings: discovery.warnings,
    })
}

fn report_warnings(warnings: &[String], quiet: bool) {
    if quiet {
        return;
    }
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let evaluation = evaluate_path(&cmd.path, &cmd.inputs)?;
            let output_format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&evaluation.report, output_format)?;
            println!("{rendered}");

            if let Some(output) = &cmd.output {
                report::write_report(output, &rendered)?;
                if !cli.quiet {
                    eprintln!("report written to {}", output.display());
                }
            }
            report_warnings(&evaluation.warnings, cli.quiet);

            if cmd
                .fail_under
                .is_some_and(|minimum| evaluation.report.score < minimum)
            {
                Ok(exit_code::BELOW_THRESHOLD)
            } else if !evaluation.warnings.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Suggest(cmd) => {
            let evaluation = evaluate_path(&cmd.path, &cmd.inputs)?;
            let roadmap = &evaluation.report.roadmap;
            if roadmap.is_empty() {
                println!("suggest: no recommendations");
            } else {
                println!("suggestions:");
                for (index, step) in roadmap.iter().enumerate() {
                    println!("{}. {}", index + 1, step);
                }
            }
            report_warnings(&evaluation.warnings, cli.quiet);

            if evaluation.warnings.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
