//! Credit score simulation: free-text profile extraction and an explainable,
//! rule-driven score engine, plus the what-if tooling layered on top.

pub mod advisor;
pub mod config;
pub mod error;
pub mod extraction;
pub mod profile;
pub mod report;
pub mod router;
pub mod scenario;
pub mod scoring;
pub mod service;
pub mod telemetry;

pub use extraction::{extract, parse_amount, FieldExtractor};
pub use profile::{FinancialProfile, PartialProfile, ProfileError, ProfileField, ProfileSubmission};
pub use scoring::{compute, Grade, RuleTable, ScoreEngine, ScoreResult};
