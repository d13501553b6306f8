use crate::profile::{FinancialProfile, ProfileError};
use crate::scoring::{ScoreEngine, ScoreResult};
use serde::{Deserialize, Serialize};

/// Baseline and hypothetical profiles scored with the same engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub baseline: ScoreResult,
    pub scenario: ScoreResult,
    pub score_delta: i32,
    pub grade_changed: bool,
}

impl ScenarioComparison {
    pub fn compare(
        engine: &ScoreEngine,
        baseline: &FinancialProfile,
        scenario: &FinancialProfile,
    ) -> Result<Self, ProfileError> {
        let baseline = engine.compute(baseline)?;
        let scenario = engine.compute(scenario)?;

        Ok(Self::from_results(baseline, scenario))
    }

    pub fn from_results(baseline: ScoreResult, scenario: ScoreResult) -> Self {
        let score_delta = i32::from(scenario.score) - i32::from(baseline.score);
        let grade_changed = baseline.grade() != scenario.grade();

        Self {
            baseline,
            scenario,
            score_delta,
            grade_changed,
        }
    }

    pub fn improved(&self) -> bool {
        self.score_delta > 0
    }
}
