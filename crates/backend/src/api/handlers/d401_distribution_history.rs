use axum::{extract::State, Json};
use contracts::dashboards::d401_distribution_history::{DistributionHistorySummary, HistoryQuery};

use crate::api::extractors::{ApiPath, ApiQuery};
use crate::dashboards::d401_distribution_history;
use crate::shared::app_state::AppState;
use crate::shared::error::ServiceError;

/// GET /api/owners/:owner_id/distributions/summary
pub async fn get_summary(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<HistoryQuery>,
) -> Result<Json<DistributionHistorySummary>, ServiceError> {
    let summary =
        d401_distribution_history::service::get_summary(&state.db, &owner_id, &query).await?;
    Ok(Json(summary))
}
