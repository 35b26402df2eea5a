use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use contracts::domain::a003_attendance::aggregate::{Attendance, AttendanceDto, PaymentStatusUpdate};
use serde::Deserialize;

use crate::api::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::domain::a003_attendance;
use crate::shared::app_state::AppState;
use crate::shared::error::ServiceError;

#[derive(Deserialize)]
pub struct AttendanceListParams {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// GET /api/owners/:owner_id/attendances
pub async fn list(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiQuery(params): ApiQuery<AttendanceListParams>,
) -> Result<Json<Vec<Attendance>>, ServiceError> {
    let items =
        a003_attendance::service::list(&state.db, &owner_id, params.date_from, params.date_to)
            .await?;
    Ok(Json(items))
}

/// POST /api/owners/:owner_id/attendances
pub async fn create(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    ApiJson(dto): ApiJson<AttendanceDto>,
) -> Result<(StatusCode, Json<Attendance>), ServiceError> {
    let attendance = a003_attendance::service::create(&state.db, &owner_id, dto).await?;
    Ok((StatusCode::CREATED, Json(attendance)))
}

/// GET /api/owners/:owner_id/attendances/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath((owner_id, id)): ApiPath<(String, String)>,
) -> Result<Json<Attendance>, ServiceError> {
    Ok(Json(a003_attendance::service::get(&state.db, &owner_id, &id).await?))
}

/// DELETE /api/owners/:owner_id/attendances/:id
pub async fn delete(
    State(state): State<AppState>,
    ApiPath((owner_id, id)): ApiPath<(String, String)>,
) -> Result<StatusCode, ServiceError> {
    a003_attendance::service::delete(&state.db, &owner_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/owners/:owner_id/attendances/:id/payment-status
pub async fn set_payment_status(
    State(state): State<AppState>,
    ApiPath((owner_id, id)): ApiPath<(String, String)>,
    ApiJson(update): ApiJson<PaymentStatusUpdate>,
) -> Result<Json<Attendance>, ServiceError> {
    let attendance = a003_attendance::service::set_payment_status(
        &state.db,
        &owner_id,
        &id,
        update.payment_status,
    )
    .await?;
    Ok(Json(attendance))
}
