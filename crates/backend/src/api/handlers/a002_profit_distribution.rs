use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d401_distribution_history::HistoryQuery;
use contracts::domain::a002_profit_distribution::aggregate::DistributionRecord;

use crate::api::extractors::{ApiPath, ApiQuery};
use crate::domain::a002_profit_distribution;
use crate::shared::app_state::AppState;
use crate::shared::error::ServiceError;

/// GET /api/owners/:owner_id/distributions
pub async fn list(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<HistoryQuery>,
) -> Result<Json<Vec<DistributionRecord>>, ServiceError> {
    let records = a002_profit_distribution::service::list(&state.db, &owner_id, query.year).await?;
    Ok(Json(records))
}

/// GET /api/owners/:owner_id/distributions/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath((owner_id, id)): ApiPath<(String, String)>,
) -> Result<Json<DistributionRecord>, ServiceError> {
    let record = a002_profit_distribution::service::get(&state.db, &owner_id, &id).await?;
    Ok(Json(record))
}

/// DELETE /api/owners/:owner_id/distributions/:id
pub async fn delete(
    State(state): State<AppState>,
    ApiPath((owner_id, id)): ApiPath<(String, String)>,
) -> Result<StatusCode, ServiceError> {
    a002_profit_distribution::service::delete(&state.db, &owner_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
