use crate::types::report::DatasetReport;

pub fn to_markdown(reports: &[DatasetReport]) -> String {
    let mut output = String::new();
    output.push_str("# Readiness Report\n\n");
    if reports.is_empty() {
        output.push_str("No datasets scored.\n");
        return output;
    }

    for report in reports {
        push_dataset(&mut output, report);
    }
    output
}

fn push_dataset(output: &mut String, report: &DatasetReport) {
    let result = &report.result;
    output.push_str(&format!("## {}\n\n", report.dataset));
    output.push_str(&format!(
        "Score: {}/100 ({}), scoring {}\n\n",
        result.total_score, result.status, report.scoring_version
    ));

    output.push_str("### Dimensions\n\n");
    output.push_str("| Dimension | Points | Max | Coverage |\n");
    output.push_str("|---|---:|---:|---:|\n");
    for score in &result.dimension_scores {
        if score.measured {
            output.push_str(&format!(
                "| {} | {} | {} | {:.0}% |\n",
                score.dimension_key.label(),
                score.points_awarded,
                score.max_points,
                score.percentage
            ));
        } else {
            output.push_str(&format!(
                "| {} | - | - | not measured |\n",
                score.dimension_key.label()
            ));
        }
    }
    output.push('\n');

    output.push_str("### Reasons\n\n");
    if result.reasons.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for reason in &result.reasons {
            output.push_str(&format!(
                "- -{} [{}] {}\n",
                reason.points_lost, reason.dimension_key, reason.message
            ));
        }
        output.push('\n');
    }

    output.push_str("### Actions\n\n");
    if result.actions.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for action in result.actions_by_gain() {
            output.push_str(&format!(
                "- +{} {}: {}\n",
                action.points_gain, action.title, action.description
            ));
        }
        output.push('\n');
    }
}
