mod summary;
pub mod views;

pub use summary::render_text;
pub use views::{FactorLine, ProfileLine, ScenarioView, ScoreReport};
