use chrono::NaiveDate;
use contracts::domain::a003_attendance::aggregate::{Attendance, AttendanceDto, AttendanceId};
use contracts::domain::common::AggregateId;
use contracts::enums::PaymentStatus;
use contracts::shared::Period;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::ensure_owner;
use crate::shared::error::{ServiceError, ServiceResult};

fn parse_id(id: &str) -> ServiceResult<AttendanceId> {
    AttendanceId::from_string(id)
        .map_err(|_| ServiceError::Validation(format!("Некорректный идентификатор: {}", id)))
}

fn not_found(id: &AttendanceId) -> ServiceError {
    ServiceError::NotFound(format!("Услуга {} не найдена", id.as_string()))
}

/// Зарегистрировать оказанную услугу
pub async fn create(
    db: &DatabaseConnection,
    owner_id: &str,
    dto: AttendanceDto,
) -> ServiceResult<Attendance> {
    let mut attendance = Attendance::new_for_insert(owner_id.to_string(), dto);
    attendance.validate().map_err(ServiceError::Validation)?;
    attendance.before_write();
    repository::insert(db, &attendance).await?;
    Ok(attendance)
}

pub async fn list(
    db: &DatabaseConnection,
    owner_id: &str,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) -> ServiceResult<Vec<Attendance>> {
    ensure_owner(owner_id)?;
    if let (Some(from), Some(to)) = (date_from, date_to) {
        if from > to {
            return Err(ServiceError::Validation(format!(
                "Начало периода {} позже окончания {}",
                from, to
            )));
        }
    }
    Ok(repository::list_by_owner(db, owner_id, date_from, date_to).await?)
}

/// Услуги за календарный месяц
pub async fn list_for_period(
    db: &DatabaseConnection,
    owner_id: &str,
    period: &Period,
) -> ServiceResult<Vec<Attendance>> {
    let (from, to) = period.date_range().map_err(ServiceError::Validation)?;
    list(db, owner_id, Some(from), Some(to)).await
}

pub async fn get(
    db: &DatabaseConnection,
    owner_id: &str,
    id: &str,
) -> ServiceResult<Attendance> {
    ensure_owner(owner_id)?;
    let id = parse_id(id)?;
    repository::get_by_id(db, owner_id, &id)
        .await?
        .ok_or_else(|| not_found(&id))
}

pub async fn set_payment_status(
    db: &DatabaseConnection,
    owner_id: &str,
    id: &str,
    status: PaymentStatus,
) -> ServiceResult<Attendance> {
    ensure_owner(owner_id)?;
    let id = parse_id(id)?;
    if repository::update_payment_status(db, owner_id, &id, status).await? == 0 {
        return Err(not_found(&id));
    }
    repository::get_by_id(db, owner_id, &id)
        .await?
        .ok_or_else(|| not_found(&id))
}

pub async fn delete(db: &DatabaseConnection, owner_id: &str, id: &str) -> ServiceResult<()> {
    ensure_owner(owner_id)?;
    let id = parse_id(id)?;
    if repository::delete(db, owner_id, &id).await? == 0 {
        return Err(not_found(&id));
    }
    Ok(())
}
