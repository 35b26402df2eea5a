use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a002_profit_distribution::aggregate::DistributionRecord;
use contracts::usecases::u501_simulate_distribution::{
    ScenarioRequest, ScenarioResult, SimulationRequest, SimulationResult,
};
use contracts::usecases::u502_execute_distribution::{
    DistributionPreview, ExecuteDistributionRequest,
};

use crate::api::extractors::{ApiJson, ApiPath};
use crate::shared::app_state::AppState;
use crate::shared::error::ServiceError;
use crate::usecases::u501_simulate_distribution::SimulationExecutor;
use crate::usecases::u502_execute_distribution::DistributionExecutor;

// ============================================================================
// UseCase u501: Simulate distribution
// ============================================================================

/// POST /api/owners/:owner_id/distribution/simulate
pub async fn u501_simulate(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiJson(request): ApiJson<SimulationRequest>,
) -> Result<Json<SimulationResult>, ServiceError> {
    let executor = SimulationExecutor::new(state.db.clone());
    Ok(Json(executor.simulate(&owner_id, request).await?))
}

/// POST /api/owners/:owner_id/distribution/scenarios
pub async fn u501_scenarios(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiJson(request): ApiJson<ScenarioRequest>,
) -> Result<Json<Vec<ScenarioResult>>, ServiceError> {
    let executor = SimulationExecutor::new(state.db.clone());
    Ok(Json(executor.scenarios(&owner_id, request).await?))
}

// ============================================================================
// UseCase u502: Execute distribution
// ============================================================================

fn distribution_executor(state: &AppState) -> DistributionExecutor {
    DistributionExecutor::new(state.db.clone(), state.enforce_full_allocation())
}

/// POST /api/owners/:owner_id/distribution/preview
pub async fn u502_preview(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiJson(request): ApiJson<ExecuteDistributionRequest>,
) -> Result<Json<DistributionPreview>, ServiceError> {
    let preview = distribution_executor(&state)
        .preview(&owner_id, request)
        .await?;
    Ok(Json(preview))
}

/// POST /api/owners/:owner_id/distribution/execute
pub async fn u502_execute(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiJson(request): ApiJson<ExecuteDistributionRequest>,
) -> Result<(StatusCode, Json<DistributionRecord>), ServiceError> {
    let record = distribution_executor(&state)
        .execute(&owner_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}
