use crate::infra::{parse_date, ProfileArgs};
use chrono::{Local, NaiveDate};
use clap::Args;
use creditsim::error::AppError;
use creditsim::report::{render_text, ScoreReport};
use creditsim::scenario::{ScoreProjection, DEFAULT_PROJECTION_MONTHS};
use creditsim::{extract, FinancialProfile, ScoreEngine};
use std::fmt::Write as _;

const PROJECTION_ROW_STEP: u32 = 6;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Free-text self-description whose recognized fields override the flags
    #[arg(long)]
    pub(crate) describe: Option<String>,
    /// Free-text what-if change compared against the current profile
    #[arg(long)]
    pub(crate) what_if: Option<String>,
    /// Override the report date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExtractArgs {
    /// Financial self-description, e.g. "I earn 75k with 20k EMI"
    pub(crate) text: String,
}

#[derive(Args, Debug)]
pub(crate) struct ProjectArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Number of months to project (at most 120)
    #[arg(long, default_value_t = DEFAULT_PROJECTION_MONTHS)]
    pub(crate) months: u32,
    /// Print the projection as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profile,
        describe,
        what_if,
        today,
        json,
    } = args;

    let mut profile = FinancialProfile::try_from(profile)?;
    if let Some(text) = describe.as_deref() {
        profile.merge(&extract(text));
    }
    let scenario = what_if.as_deref().map(|text| profile.merged(&extract(text)));

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = ScoreReport::build(&ScoreEngine::default(), &profile, scenario.as_ref(), today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

pub(crate) fn run_extract(args: ExtractArgs) -> Result<(), AppError> {
    let parsed = extract(&args.text);
    let recognized = parsed.recognized();

    if recognized.is_empty() {
        println!("No profile fields recognized.");
    } else {
        let labels: Vec<&str> = recognized.iter().map(|field| field.label()).collect();
        println!("Recognized: {}", labels.join(", "));
    }
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

pub(crate) fn run_project(args: ProjectArgs) -> Result<(), AppError> {
    let profile = FinancialProfile::try_from(args.profile)?;
    let projection = ScoreProjection::project(&ScoreEngine::default(), &profile, args.months)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        print!("{}", render_projection(&projection));
    }
    Ok(())
}

pub(crate) fn render_projection(projection: &ScoreProjection) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Score projection over {} months (current {})",
        projection.months, projection.current_score
    )
    .expect("write title");
    writeln!(
        out,
        "{:>5}  {:>12}  {:>10}  {:>10}",
        "month", "conservative", "optimistic", "aggressive"
    )
    .expect("write header");
    for point in projection
        .points
        .iter()
        .filter(|point| point.month % PROJECTION_ROW_STEP == 0 || point.month == projection.months)
    {
        writeln!(
            out,
            "{:>5}  {:>12}  {:>10}  {:>10}",
            point.month, point.conservative, point.optimistic, point.aggressive
        )
        .expect("write row");
    }

    out.push_str("\nOutlook\n");
    for outlook in &projection.outlooks {
        writeln!(
            out,
            "- {}: {} ({:+}) {}",
            outlook.label, outlook.final_score, outlook.improvement, outlook.description
        )
        .expect("write outlook");
        for action in &outlook.actions {
            writeln!(out, "    * {action}").expect("write action");
        }
    }
    out
}
