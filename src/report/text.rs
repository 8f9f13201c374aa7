use crate::types::report::EvaluationReport;

pub fn to_text(report: &EvaluationReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Score: {} / 100\n", report.score));
    output.push_str(&format!("Level: {}\n", report.level));
    output.push_str("Summary:\n");
    output.push_str(&report.summary);
    output.push('\n');
    output.push_str("Roadmap:\n");
    if report.roadmap.is_empty() {
        output.push_str("- none\n");
    }
    for step in &report.roadmap {
        output.push_str(&format!("- {step}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn text_report_matches_console_layout() {
        assert_eq!(
            to_text(&sample_report()),
            "Score: 62 / 100\nLevel: Intermediate\nSummary:\nSolid foundation.\nRoadmap:\n- Add automated tests\n"
        );
    }
}
