use crate::advisor::{self, AdvisorScreening, CreditTopicGate};
use crate::config::SimulationConfig;
use crate::extraction::FieldExtractor;
use crate::profile::{FinancialProfile, PartialProfile, ProfileError, ProfileField, ProfileSubmission};
use crate::scenario::{ScenarioComparison, ScoreProjection};
use crate::scoring::{ScoreEngine, ScoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    /// Current profile to merge the recognized fields into.
    #[serde(default)]
    pub profile: Option<ProfileSubmission>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub extracted: PartialProfile,
    pub recognized: Vec<ProfileField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged: Option<FinancialProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRequest {
    pub baseline: ProfileSubmission,
    pub scenario: ProfileSubmission,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionRequest {
    pub profile: ProfileSubmission,
    #[serde(default)]
    pub months: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorRequest {
    pub message: String,
    pub profile: ProfileSubmission,
}

/// Facade composing the extractor, score engine and what-if tooling for the
/// HTTP and command-line surfaces.
#[derive(Debug, Clone)]
pub struct CreditSimService {
    engine: ScoreEngine,
    extractor: FieldExtractor,
    gate: &'static CreditTopicGate,
    simulation: SimulationConfig,
}

impl Default for CreditSimService {
    fn default() -> Self {
        Self::new(ScoreEngine::default(), SimulationConfig::default())
    }
}

impl CreditSimService {
    pub fn new(engine: ScoreEngine, simulation: SimulationConfig) -> Self {
        Self {
            engine,
            extractor: FieldExtractor::new(),
            gate: CreditTopicGate::shared(),
            simulation,
        }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    pub fn score(&self, submission: ProfileSubmission) -> Result<ScoreResult, ProfileError> {
        let profile = FinancialProfile::try_from(submission)?;
        self.engine.compute(&profile)
    }

    pub fn extract(&self, request: ExtractRequest) -> Result<ExtractResponse, ProfileError> {
        let extracted = self.extractor.extract(&request.text);
        let recognized = extracted.recognized();

        let (merged, score) = match request.profile {
            Some(submission) => {
                let merged = FinancialProfile::try_from(submission)?.merged(&extracted);
                let score = self.engine.compute(&merged)?;
                (Some(merged), Some(score))
            }
            None => (None, None),
        };

        Ok(ExtractResponse {
            extracted,
            recognized,
            merged,
            score,
        })
    }

    pub fn compare(&self, request: ScenarioRequest) -> Result<ScenarioComparison, ProfileError> {
        let baseline = FinancialProfile::try_from(request.baseline)?;
        let scenario = FinancialProfile::try_from(request.scenario)?;
        ScenarioComparison::compare(&self.engine, &baseline, &scenario)
    }

    pub fn project(&self, request: ProjectionRequest) -> Result<ScoreProjection, ProfileError> {
        let profile = FinancialProfile::try_from(request.profile)?;
        let months = request
            .months
            .unwrap_or(self.simulation.projection_months);
        ScoreProjection::project(&self.engine, &profile, months)
    }

    pub fn advise(&self, request: AdvisorRequest) -> Result<AdvisorScreening, ProfileError> {
        let profile = FinancialProfile::try_from(request.profile)?;
        let score = self.engine.compute(&profile)?;
        Ok(advisor::screen(self.gate, &profile, &score, &request.message))
    }
}
