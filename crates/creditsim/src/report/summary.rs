use super::views::{ProfileLine, ScoreReport};
use std::fmt::Write as _;

/// Plain-text rendering used by the command line.
pub fn render_text(report: &ScoreReport) -> String {
    let mut out = String::new();

    writeln!(out, "Credit score report ({})", report.generated_on).expect("write title");
    writeln!(out, "Score: {} ({})", report.score, report.grade_label).expect("write score");

    out.push_str("\nProfile\n");
    write_profile(&mut out, &report.profile);

    out.push_str("\nFactors\n");
    for factor in &report.factors {
        writeln!(
            out,
            "- {} [{:.1}/{:.0}]: {}",
            factor.label, factor.points, factor.max_points, factor.message
        )
        .expect("write factor");
    }

    match &report.scenario {
        Some(scenario) => {
            out.push_str("\nScenario\n");
            write_profile(&mut out, &scenario.profile);
            writeln!(
                out,
                "Scenario score: {} ({}), {:+} vs current{}",
                scenario.score,
                scenario.grade_label,
                scenario.score_delta,
                if scenario.grade_changed {
                    ", grade changes"
                } else {
                    ""
                }
            )
            .expect("write scenario score");
        }
        None => out.push_str("\nScenario: none\n"),
    }

    out
}

fn write_profile(out: &mut String, lines: &[ProfileLine]) {
    for line in lines {
        writeln!(out, "- {}: {}", line.label, line.value).expect("write profile line");
    }
}
