use axum::{extract::State, Json};
use contracts::dashboards::d400_financial_summary::{
    FinancialSummary, FinancialSummaryQuery, MonthlyFinancialReport, MonthlyReportQuery,
};

use crate::api::extractors::{ApiPath, ApiQuery};
use crate::dashboards::d400_financial_summary;
use crate::shared::app_state::AppState;
use crate::shared::error::ServiceError;

/// GET /api/owners/:owner_id/financial-summary
pub async fn get_summary(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<FinancialSummaryQuery>,
) -> Result<Json<FinancialSummary>, ServiceError> {
    let summary = d400_financial_summary::service::get_summary(&state.db, &owner_id, &query).await?;
    Ok(Json(summary))
}

/// GET /api/owners/:owner_id/financial-summary/monthly?year=2025&month=3
pub async fn get_monthly_report(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<MonthlyReportQuery>,
) -> Result<Json<MonthlyFinancialReport>, ServiceError> {
    let report =
        d400_financial_summary::service::get_monthly_report(&state.db, &owner_id, &query).await?;
    Ok(Json(report))
}
