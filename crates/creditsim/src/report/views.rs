use crate::profile::{FinancialProfile, ProfileError, ProfileField};
use crate::scenario::ScenarioComparison;
use crate::scoring::{FactorKind, Grade, ScoreBreakdown, ScoreEngine};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLine {
    pub field: ProfileField,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorLine {
    pub factor: FactorKind,
    pub label: &'static str,
    pub points: f64,
    pub max_points: f64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioView {
    pub profile: Vec<ProfileLine>,
    pub score: u16,
    pub grade: Grade,
    pub grade_label: &'static str,
    pub score_delta: i32,
    pub grade_changed: bool,
}

/// Everything the report renderer needs, already formatted for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub generated_on: NaiveDate,
    pub score: u16,
    pub grade: Grade,
    pub grade_label: &'static str,
    pub profile: Vec<ProfileLine>,
    pub factors: Vec<FactorLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ScenarioView>,
}

impl ScoreReport {
    pub fn build(
        engine: &ScoreEngine,
        profile: &FinancialProfile,
        scenario: Option<&FinancialProfile>,
        generated_on: NaiveDate,
    ) -> Result<Self, ProfileError> {
        let breakdown = engine.breakdown(profile)?;
        let scenario = scenario
            .map(|candidate| -> Result<ScenarioView, ProfileError> {
                let comparison = ScenarioComparison::compare(engine, profile, candidate)?;
                Ok(ScenarioView {
                    profile: profile_lines(candidate),
                    score: comparison.scenario.score,
                    grade: comparison.scenario.grade(),
                    grade_label: comparison.scenario.grade().label(),
                    score_delta: comparison.score_delta,
                    grade_changed: comparison.grade_changed,
                })
            })
            .transpose()?;

        Ok(Self::from_breakdown(profile, &breakdown, scenario, generated_on))
    }

    fn from_breakdown(
        profile: &FinancialProfile,
        breakdown: &ScoreBreakdown,
        scenario: Option<ScenarioView>,
        generated_on: NaiveDate,
    ) -> Self {
        let factors = breakdown
            .components
            .iter()
            .map(|component| FactorLine {
                factor: component.factor,
                label: component.factor.label(),
                points: component.points,
                max_points: component.max_points,
                message: component.message.clone(),
            })
            .collect();

        Self {
            generated_on,
            score: breakdown.score,
            grade: breakdown.grade,
            grade_label: breakdown.grade.label(),
            profile: profile_lines(profile),
            factors,
            scenario,
        }
    }
}

pub(crate) fn profile_lines(profile: &FinancialProfile) -> Vec<ProfileLine> {
    ProfileField::ordered()
        .into_iter()
        .map(|field| ProfileLine {
            field,
            label: field.label(),
            value: display_value(profile, field),
        })
        .collect()
}

fn display_value(profile: &FinancialProfile, field: ProfileField) -> String {
    match field {
        ProfileField::Income => format!("\u{20b9}{}", profile.income),
        ProfileField::Emi => format!("\u{20b9}{}", profile.emi),
        ProfileField::CreditUsage => format!("{}%", profile.credit_usage),
        ProfileField::MissedPayments => profile.missed_payments.to_string(),
        ProfileField::CreditHistoryAge => format!("{} months", profile.credit_history_age),
        ProfileField::ActiveLoans => profile.active_loans.to_string(),
    }
}
