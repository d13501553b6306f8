use crate::profile::{FinancialProfile, ProfileError};
use crate::scoring::ScoreEngine;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROJECTION_MONTHS: u32 = 24;
pub const MAX_PROJECTION_MONTHS: u32 = 120;

/// Improvement plans the projection simulates month by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionStrategy {
    Conservative,
    Optimistic,
    Aggressive,
}

impl ProjectionStrategy {
    pub const fn ordered() -> [Self; 3] {
        [Self::Conservative, Self::Optimistic, Self::Aggressive]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Optimistic => "Optimistic",
            Self::Aggressive => "Aggressive",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Conservative => "Minimal changes, slow improvement",
            Self::Optimistic => "Moderate improvements over time",
            Self::Aggressive => "Maximum effort, fastest improvement",
        }
    }

    pub const fn actions(self) -> [&'static str; 3] {
        match self {
            Self::Conservative => [
                "Make all payments on time",
                "Avoid new credit applications",
                "Keep credit utilization stable",
            ],
            Self::Optimistic => [
                "Reduce credit utilization by 50%",
                "Pay down existing debt",
                "Maintain perfect payment history",
            ],
            Self::Aggressive => [
                "Pay off all outstanding debt",
                "Reduce credit utilization to <10%",
                "Consider debt consolidation",
            ],
        }
    }

    /// Profile expected after `month` months of following this plan.
    pub fn profile_at(self, current: &FinancialProfile, month: u32) -> FinancialProfile {
        let elapsed = f64::from(month);
        let credit_history_age = current.credit_history_age.saturating_add(month);

        match self {
            Self::Conservative => FinancialProfile {
                missed_payments: current.missed_payments.saturating_sub(month / 6),
                credit_usage: (current.credit_usage - elapsed * 0.5).max(10.0),
                credit_history_age,
                ..*current
            },
            Self::Optimistic => FinancialProfile {
                missed_payments: current.missed_payments.saturating_sub(month / 3),
                credit_usage: (current.credit_usage - elapsed).max(10.0),
                credit_history_age,
                emi: (current.emi - elapsed * 200.0).max(0.0),
                ..*current
            },
            Self::Aggressive => FinancialProfile {
                missed_payments: if month >= 3 { 0 } else { current.missed_payments },
                credit_usage: (current.credit_usage - elapsed * 2.0).max(5.0),
                credit_history_age,
                emi: (current.emi - elapsed * 500.0).max(0.0),
                ..*current
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub month: u32,
    pub conservative: u16,
    pub optimistic: u16,
    pub aggressive: u16,
}

impl ProjectionPoint {
    pub fn score_for(&self, strategy: ProjectionStrategy) -> u16 {
        match strategy {
            ProjectionStrategy::Conservative => self.conservative,
            ProjectionStrategy::Optimistic => self.optimistic,
            ProjectionStrategy::Aggressive => self.aggressive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyOutlook {
    pub strategy: ProjectionStrategy,
    pub label: &'static str,
    pub description: &'static str,
    pub final_score: u16,
    pub improvement: i32,
    pub actions: Vec<&'static str>,
}

/// Month-by-month score trajectory for every strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreProjection {
    pub current_score: u16,
    pub months: u32,
    pub points: Vec<ProjectionPoint>,
    pub outlooks: Vec<StrategyOutlook>,
}

impl ScoreProjection {
    /// Projects `months` months ahead (capped at ten years). Month zero is
    /// the unchanged profile.
    pub fn project(
        engine: &ScoreEngine,
        profile: &FinancialProfile,
        months: u32,
    ) -> Result<Self, ProfileError> {
        let months = months.min(MAX_PROJECTION_MONTHS);
        let current_score = engine.compute(profile)?.score;

        let mut points = Vec::with_capacity(months as usize + 1);
        for month in 0..=months {
            let score = |strategy: ProjectionStrategy| {
                engine
                    .compute(&strategy.profile_at(profile, month))
                    .map(|result| result.score)
            };
            points.push(ProjectionPoint {
                month,
                conservative: score(ProjectionStrategy::Conservative)?,
                optimistic: score(ProjectionStrategy::Optimistic)?,
                aggressive: score(ProjectionStrategy::Aggressive)?,
            });
        }

        let outlooks = match points.last() {
            Some(last) => ProjectionStrategy::ordered()
                .into_iter()
                .map(|strategy| {
                    let final_score = last.score_for(strategy);
                    StrategyOutlook {
                        strategy,
                        label: strategy.label(),
                        description: strategy.description(),
                        final_score,
                        improvement: i32::from(final_score) - i32::from(current_score),
                        actions: strategy.actions().to_vec(),
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        tracing::debug!(current_score, months, "projected score trajectory");

        Ok(Self {
            current_score,
            months,
            points,
            outlooks,
        })
    }

    pub fn outlook(&self, strategy: ProjectionStrategy) -> Option<&StrategyOutlook> {
        self.outlooks
            .iter()
            .find(|outlook| outlook.strategy == strategy)
    }
}
