mod rules;

pub use rules::{
    FactorKind, FactorRule, HistoryMessage, LoanBucket, RatioBand, RuleOutcome, RuleTable,
    TierPoints, UtilizationTier,
};

use crate::profile::{FinancialProfile, ProfileError};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const BASE_SCORE: f64 = 300.0;
pub const MIN_SCORE: u16 = 300;
pub const MAX_SCORE: u16 = 900;

/// Qualitative band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Grade {
    pub const fn from_score(score: u16) -> Self {
        if score >= 750 {
            Self::Excellent
        } else if score >= 650 {
            Self::Good
        } else if score >= 550 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// Discrete contribution of one rule, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    pub factor: FactorKind,
    pub points: f64,
    pub max_points: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub grade: Grade,
    pub factors: Vec<String>,
}

/// Public score contract: `{ score, details: { grade, factors } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u16,
    pub details: ScoreDetails,
}

impl ScoreResult {
    pub fn grade(&self) -> Grade {
        self.details.grade
    }

    pub fn factors(&self) -> &[String] {
        &self.details.factors
    }
}

/// Score plus the per-rule components that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub score: u16,
    pub grade: Grade,
    pub raw_total: f64,
    pub components: Vec<FactorScore>,
}

impl ScoreBreakdown {
    pub fn to_result(&self) -> ScoreResult {
        ScoreResult {
            score: self.score,
            details: ScoreDetails {
                grade: self.grade,
                factors: self
                    .components
                    .iter()
                    .map(|component| component.message.clone())
                    .collect(),
            },
        }
    }
}

/// Stateless evaluator that applies a rule table to a profile.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    rules: RuleTable,
}

impl ScoreEngine {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn compute(&self, profile: &FinancialProfile) -> Result<ScoreResult, ProfileError> {
        self.breakdown(profile).map(|breakdown| breakdown.to_result())
    }

    pub fn breakdown(&self, profile: &FinancialProfile) -> Result<ScoreBreakdown, ProfileError> {
        profile.validate()?;

        let components: Vec<FactorScore> = self
            .rules
            .rules()
            .iter()
            .map(|rule| {
                let outcome = rule.evaluate(profile);
                FactorScore {
                    factor: rule.kind(),
                    points: outcome.points,
                    max_points: rule.max_points(),
                    message: outcome.message,
                }
            })
            .collect();

        let raw_total = BASE_SCORE
            + components
                .iter()
                .map(|component| component.points)
                .sum::<f64>();
        let score = clamp_score(raw_total);

        tracing::debug!(score, raw_total, "computed credit score");

        Ok(ScoreBreakdown {
            score,
            grade: Grade::from_score(score),
            raw_total,
            components,
        })
    }
}

fn clamp_score(raw_total: f64) -> u16 {
    raw_total
        .round()
        .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u16
}

static STANDARD_ENGINE: OnceLock<ScoreEngine> = OnceLock::new();

/// Engine configured with the standard rule table, built once.
pub fn standard_engine() -> &'static ScoreEngine {
    STANDARD_ENGINE.get_or_init(ScoreEngine::default)
}

/// Score a profile with the standard rule table.
pub fn compute(profile: &FinancialProfile) -> Result<ScoreResult, ProfileError> {
    standard_engine().compute(profile)
}

#[cfg(test)]
mod tests;
