use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a001_profit_distribution_config::aggregate::{
    ConfigurationStatus, DistributionConfigDto, DistributionConfigEntry,
};
use contracts::enums::{CategoryInfo, ProfitCategory};

use crate::api::extractors::{ApiJson, ApiPath};
use crate::domain::a001_profit_distribution_config;
use crate::shared::app_state::AppState;
use crate::shared::error::ServiceError;

/// GET /api/profit-categories
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(ProfitCategory::all().iter().map(|c| c.info()).collect())
}

/// GET /api/owners/:owner_id/distribution-config
pub async fn list(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
) -> Result<Json<Vec<DistributionConfigEntry>>, ServiceError> {
    let entries = a001_profit_distribution_config::service::list(&state.db, &owner_id).await?;
    Ok(Json(entries))
}

/// POST /api/owners/:owner_id/distribution-config
pub async fn upsert(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiJson(dto): ApiJson<DistributionConfigDto>,
) -> Result<Json<DistributionConfigEntry>, ServiceError> {
    let entry = a001_profit_distribution_config::service::upsert(&state.db, &owner_id, dto).await?;
    Ok(Json(entry))
}

/// DELETE /api/owners/:owner_id/distribution-config/:category
pub async fn remove(
    State(state): State<AppState>,
    ApiPath((owner_id, category)): ApiPath<(String, String)>,
) -> Result<StatusCode, ServiceError> {
    let category = ProfitCategory::from_code(&category)
        .ok_or_else(|| ServiceError::Validation(format!("Неизвестная категория: {}", category)))?;
    a001_profit_distribution_config::service::remove(&state.db, &owner_id, category).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/owners/:owner_id/distribution-config/defaults
pub async fn apply_defaults(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
) -> Result<Json<Vec<DistributionConfigEntry>>, ServiceError> {
    let entries =
        a001_profit_distribution_config::service::apply_defaults(&state.db, &owner_id).await?;
    Ok(Json(entries))
}

/// GET /api/owners/:owner_id/distribution-config/status
pub async fn status(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
) -> Result<Json<ConfigurationStatus>, ServiceError> {
    let status = a001_profit_distribution_config::service::status(&state.db, &owner_id).await?;
    Ok(Json(status))
}
