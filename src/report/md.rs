use crate::types::report::EvaluationReport;

pub fn to_markdown(report: &EvaluationReport) -> String {
    let mut output = String::new();
    output.push_str("# Repository Report\n\n");
    output.push_str(&format!("Repository: {}\n\n", report.repository));
    output.push_str(&format!(
        "Score: {} / 100 ({})\n\n",
        report.score, report.level
    ));

    output.push_str("## Category Scores\n\n");
    for (category, score) in report.breakdown.iter() {
        output.push_str(&format!("- {}: {:.1}\n", category.key(), score));
    }
    output.push('\n');

    output.push_str("## Summary\n\n");
    output.push_str(&report.summary);
    output.push_str("\n\n");

    if !report.metrics.complexity_hotspots.is_empty() {
        output.push_str("## Complexity Hotspots\n\n");
        for hotspot in &report.metrics.complexity_hotspots {
            output.push_str(&format!(
                "- `{}` at {} (complexity {})\n",
                hotspot.name, hotspot.location, hotspot.complexity
            ));
        }
        output.push('\n');
    }

    output.push_str("## Roadmap\n\n");
    if report.roadmap.is_empty() {
        output.push_str("- none\n");
    } else {
        for (index, step) in report.roadmap.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, step));
        }
    }

    output
}
