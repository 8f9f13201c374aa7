//! Readers for saved output of external lint and complexity tools.
//!
//! Nothing here runs an analyzer. Callers point at a pylint text report and
//! a radon `cc -j` JSON report produced beforehand.

use crate::error::{MirrorError, Result};
use crate::types::signals::ComplexityHotspot;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

const RATING_MARKER: &str = "rated at ";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplexitySummary {
    pub block_count: usize,
    pub average_complexity: f64,
    pub hotspots: Vec<ComplexityHotspot>,
    /// Files or blocks that could not be read and were left out.
    pub skipped: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RadonBlock {
    name: String,
    complexity: f64,
    #[serde(default)]
    lineno: Option<u64>,
    #[serde(default)]
    classname: Option<String>,
}

pub fn read_lint_report(path: &Path) -> Result<f64> {
    let output = std::fs::read_to_string(path)?;
    parse_lint_score(&output).ok_or_else(|| {
        MirrorError::AnalyzerOutput(format!("{}: no lint rating line found", path.display()))
    })
}

/// Extracts `X` from a `Your code has been rated at X/10` line, clamped to 0..=10.
pub fn parse_lint_score(output: &str) -> Option<f64> {
    output.lines().find_map(|line| {
        let (_, rest) = line.split_once(RATING_MARKER)?;
        let (value, _) = rest.split_once('/')?;
        let score = value.trim().parse::<f64>().ok()?;
        Some(round2(score.clamp(0.0, 10.0)))
    })
}

pub fn read_complexity_report(path: &Path, hotspot_threshold: f64) -> Result<ComplexitySummary> {
    let content = std::fs::read_to_string(path)?;
    parse_complexity_report(&content, hotspot_threshold)
}

pub fn parse_complexity_report(content: &str, hotspot_threshold: f64) -> Result<ComplexitySummary> {
    let files: BTreeMap<String, Value> = serde_json::from_str(content)?;
    let mut summary = ComplexitySummary::default();
    let mut total = 0.0;

    for (file, entry) in files {
        let blocks = match entry {
            Value::Array(blocks) => blocks,
            Value::Object(object) => {
                let reason = object
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unexpected entry");
                warn!(file = %file, reason, "skipping file in complexity report");
                summary.skipped.push(format!("{file}: {reason}"));
                continue;
            }
            _ => {
                warn!(file = %file, "skipping non-list entry in complexity report");
                summary.skipped.push(format!("{file}: unexpected entry"));
                continue;
            }
        };

        for block in blocks {
            let block: RadonBlock = match serde_json::from_value(block) {
                Ok(block) => block,
                Err(err) => {
                    warn!(file = %file, error = %err, "skipping malformed complexity block");
                    summary.skipped.push(format!("{file}: {err}"));
                    continue;
                }
            };
            total += block.complexity;
            summary.block_count += 1;
            if block.complexity > hotspot_threshold {
                summary.hotspots.push(ComplexityHotspot {
                    location: match block.lineno {
                        Some(line) => format!("{file}:{line}"),
                        None => file.clone(),
                    },
                    name: match block.classname {
                        Some(class) => format!("{class}.{}", block.name),
                        None => block.name,
                    },
                    complexity: block.complexity,
                });
            }
        }
    }

    if summary.block_count > 0 {
        summary.average_complexity = round2(total / summary.block_count as f64);
    }
    debug!(
        blocks = summary.block_count,
        average = summary.average_complexity,
        hotspots = summary.hotspots.len(),
        "parsed complexity report"
    );
    Ok(summary)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PYLINT_OUTPUT: &str = "\
************* Module app
app.py:1:0: C0114: Missing module docstring (missing-module-docstring)

------------------------------------------------------------------
Your code has been rated at 7.456/10 (previous run: 7.00/10, +0.46)
";

    #[test]
    fn parse_lint_score_reads_rating_line() {
        assert_eq!(parse_lint_score(PYLINT_OUTPUT), Some(7.46));
    }

    #[test]
    fn parse_lint_score_clamps_negative_ratings() {
        assert_eq!(
            parse_lint_score("Your code has been rated at -3.20/10"),
            Some(0.0)
        );
    }

    #[test]
    fn parse_lint_score_returns_none_without_rating() {
        assert_eq!(parse_lint_score("no score here"), None);
        assert_eq!(parse_lint_score("Your code has been rated at n/a/10"), None);
    }

    #[test]
    fn read_lint_report_rejects_output_without_rating() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("pylint.txt");
        fs::write(&path, "crashed").expect("report should write");
        let err = read_lint_report(&path).expect_err("missing rating should fail");
        assert!(matches!(err, MirrorError::AnalyzerOutput(_)));
    }

    #[test]
    fn complexity_report_averages_blocks_and_flags_hotspots() {
        let report = r#"{
            "app/core.py": [
                {"type": "function", "name": "parse", "complexity": 14, "lineno": 10},
                {"type": "method", "name": "run", "classname": "Worker", "complexity": 4, "lineno": 40}
            ],
            "app/util.py": [
                {"type": "function", "name": "slug", "complexity": 1, "lineno": 3}
            ]
        }"#;
        let summary = parse_complexity_report(report, 10.0).expect("report should parse");
        assert_eq!(summary.block_count, 3);
        assert_eq!(summary.average_complexity, 6.33);
        assert_eq!(
            summary.hotspots,
            vec![ComplexityHotspot {
                location: "app/core.py:10".to_string(),
                name: "parse".to_string(),
                complexity: 14.0,
            }]
        );
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn complexity_report_skips_failed_files_and_bad_blocks() {
        let report = r#"{
            "broken.py": {"error": "invalid syntax (<unknown>, line 3)"},
            "ok.py": [
                {"name": "fine", "complexity": 2},
                {"name": "missing_complexity"},
                {"name": "Big", "classname": "Pipeline", "complexity": 11}
            ]
        }"#;
        let summary = parse_complexity_report(report, 10.0).expect("report should parse");
        assert_eq!(summary.block_count, 2);
        assert_eq!(summary.average_complexity, 6.5);
        assert_eq!(summary.hotspots[0].name, "Pipeline.Big");
        assert_eq!(summary.hotspots[0].location, "ok.py");
        assert_eq!(summary.skipped.len(), 2);
        assert!(summary.skipped[0].starts_with("broken.py: invalid syntax"));
    }

    #[test]
    fn empty_complexity_report_has_zero_average() {
        let summary = parse_complexity_report("{}", 10.0).expect("report should parse");
        assert_eq!(summary, ComplexitySummary::default());
    }

    #[test]
    fn complexity_report_must_be_a_json_object() {
        assert!(matches!(
            parse_complexity_report("[1, 2]", 10.0),
            Err(MirrorError::Json(_))
        ));
    }
}
