use crate::commands::render_projection;
use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use creditsim::advisor::{self, AdvisorScreening, CreditTopicGate};
use creditsim::error::AppError;
use creditsim::report::{render_text, ScoreReport};
use creditsim::scenario::{ScenarioComparison, ScoreProjection};
use creditsim::{FieldExtractor, FinancialProfile, ScoreEngine};

const DEMO_DESCRIPTION: &str =
    "I earn ₹75,000 monthly with ₹20,000 EMI and 2 missed payments. I have 3 active loans.";
const DEMO_WHAT_IF: &str = "What if my credit usage drops to 8%?";
const DEMO_QUESTION: &str = "How can I improve my credit score?";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Self-description fed to the extractor (defaults to a sample profile)
    #[arg(long)]
    pub(crate) describe: Option<String>,
    /// Override the report date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Months covered by the projection section
    #[arg(long, default_value_t = 12)]
    pub(crate) months: u32,
    /// Skip the advisor screening section
    #[arg(long)]
    pub(crate) skip_advisor: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        describe,
        today,
        months,
        skip_advisor,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let description = describe.as_deref().unwrap_or(DEMO_DESCRIPTION);
    let engine = ScoreEngine::default();
    let extractor = FieldExtractor::new();

    println!("Credit score simulator demo");
    println!("\nStep 1: extraction");
    println!("Input: \"{description}\"");
    let parsed = extractor.extract(description);
    let recognized = parsed.recognized();
    if recognized.is_empty() {
        println!("No fields recognized; keeping the starting profile.");
    }
    for field in &recognized {
        println!("- recognized {}", field.label());
    }

    let profile = FinancialProfile::default().merged(&parsed);
    let what_if = profile.merged(&extractor.extract(DEMO_WHAT_IF));

    println!("\nStep 2: score report");
    let report = ScoreReport::build(&engine, &profile, Some(&what_if), today)?;
    print!("{}", render_text(&report));

    println!("\nStep 3: what-if comparison");
    println!("Input: \"{DEMO_WHAT_IF}\"");
    let comparison = ScenarioComparison::compare(&engine, &profile, &what_if)?;
    println!(
        "{} -> {} ({:+}){}",
        comparison.baseline.score,
        comparison.scenario.score,
        comparison.score_delta,
        if comparison.improved() {
            ", an improvement"
        } else {
            ""
        }
    );

    println!("\nStep 4: projection");
    let projection = ScoreProjection::project(&engine, &profile, months)?;
    print!("{}", render_projection(&projection));

    if !skip_advisor {
        println!("\nStep 5: advisor screening");
        let score = engine.compute(&profile)?;
        for message in [DEMO_QUESTION, "Who won the cricket match?"] {
            match advisor::screen(CreditTopicGate::shared(), &profile, &score, message) {
                AdvisorScreening::Forwarded { brief } => {
                    println!("\"{message}\" forwarded with brief:");
                    for line in brief.user_prompt.lines() {
                        println!("    {line}");
                    }
                }
                AdvisorScreening::Declined { reply } => {
                    println!("\"{message}\" declined: {reply}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_with_sample_description() {
        let args = DemoArgs {
            today: NaiveDate::from_ymd_opt(2025, 9, 24),
            months: 6,
            ..DemoArgs::default()
        };
        assert!(run_demo(args).is_ok());
    }

    #[test]
    fn demo_tolerates_unrecognized_description() {
        let args = DemoArgs {
            describe: Some("nothing financial here".to_string()),
            skip_advisor: true,
            ..DemoArgs::default()
        };
        assert!(run_demo(args).is_ok());
    }
}
