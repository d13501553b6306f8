use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::advisor::AdvisorScreening;
use crate::error::AppError;
use crate::profile::ProfileSubmission;
use crate::scenario::{ScenarioComparison, ScoreProjection};
use crate::scoring::ScoreResult;
use crate::service::{
    AdvisorRequest, CreditSimService, ExtractRequest, ExtractResponse, ProjectionRequest,
    ScenarioRequest,
};

/// Router builder exposing extraction, scoring and what-if endpoints.
pub fn credit_router(service: Arc<CreditSimService>) -> Router {
    Router::new()
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/extract", post(extract_handler))
        .route("/api/v1/scenario", post(scenario_handler))
        .route("/api/v1/projection", post(projection_handler))
        .route("/api/v1/advisor/brief", post(advisor_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<CreditSimService>>,
    Json(submission): Json<ProfileSubmission>,
) -> Result<Json<ScoreResult>, AppError> {
    Ok(Json(service.score(submission)?))
}

pub(crate) async fn extract_handler(
    State(service): State<Arc<CreditSimService>>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    Ok(Json(service.extract(request)?))
}

pub(crate) async fn scenario_handler(
    State(service): State<Arc<CreditSimService>>,
    Json(request): Json<ScenarioRequest>,
) -> Result<Json<ScenarioComparison>, AppError> {
    Ok(Json(service.compare(request)?))
}

pub(crate) async fn projection_handler(
    State(service): State<Arc<CreditSimService>>,
    Json(request): Json<ProjectionRequest>,
) -> Result<Json<ScoreProjection>, AppError> {
    Ok(Json(service.project(request)?))
}

pub(crate) async fn advisor_handler(
    State(service): State<Arc<CreditSimService>>,
    Json(request): Json<AdvisorRequest>,
) -> Result<Json<AdvisorScreening>, AppError> {
    Ok(Json(service.advise(request)?))
}
