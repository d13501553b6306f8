//! What-if tooling built on the score engine: side-by-side comparison of two
//! profiles and month-by-month projections under improvement strategies.

mod comparison;
mod projection;

pub use comparison::ScenarioComparison;
pub use projection::{
    ProjectionPoint, ProjectionStrategy, ScoreProjection, StrategyOutlook,
    DEFAULT_PROJECTION_MONTHS, MAX_PROJECTION_MONTHS,
};
