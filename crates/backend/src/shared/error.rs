use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::usecases::common::UseCaseError;
use sea_orm::DbErr;
use thiserror::Error;

/// Ошибки сервисов распределения прибыли
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Строгий режим: сумма активных процентов не равна 100%
    #[error("Allocation mismatch: configured {total:.2}% of 100%")]
    AllocationMismatch { total: f64 },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::AllocationMismatch { .. } => StatusCode::CONFLICT,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Тело ответа для клиента. Детали ошибок БД наружу не отдаются.
    pub fn to_usecase_error(&self) -> UseCaseError {
        match self {
            ServiceError::Validation(message) => UseCaseError::validation(message.clone()),
            ServiceError::NotFound(message) => UseCaseError::not_found(message.clone()),
            ServiceError::AllocationMismatch { total } => UseCaseError::allocation_mismatch(
                "Сумма процентов распределения должна быть равна 100%",
            )
            .with_details(format!("{:.2}", total)),
            ServiceError::Database(_) => UseCaseError::internal("Ошибка хранилища данных"),
        }
    }
}

// Ошибки разбора запроса отдаются тем же телом, что и ошибки валидации
impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Validation(format!("Некорректное тело запроса: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::Validation(format!("Некорректный путь запроса: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ServiceError::Validation(format!(
            "Некорректные параметры запроса: {}",
            rejection.body_text()
        ))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ServiceError::Database(e) = &self {
            tracing::error!("Database error: {}", e);
        }
        (status, Json(self.to_usecase_error())).into_response()
    }
}
