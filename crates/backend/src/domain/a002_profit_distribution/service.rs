use contracts::domain::a002_profit_distribution::aggregate::{
    DistributionRecord, DistributionRecordId,
};
use contracts::domain::common::AggregateId;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::ensure_owner;
use crate::shared::error::{ServiceError, ServiceResult};

fn parse_id(id: &str) -> ServiceResult<DistributionRecordId> {
    DistributionRecordId::from_string(id)
        .map_err(|_| ServiceError::Validation(format!("Некорректный идентификатор: {}", id)))
}

fn not_found(id: &DistributionRecordId) -> ServiceError {
    ServiceError::NotFound(format!("Распределение {} не найдено", id.as_string()))
}

/// История распределений владельца
pub async fn list(
    db: &DatabaseConnection,
    owner_id: &str,
    year: Option<i32>,
) -> ServiceResult<Vec<DistributionRecord>> {
    ensure_owner(owner_id)?;
    Ok(repository::list_by_owner(db, owner_id, year).await?)
}

/// Запись истории владельца; запись другого владельца не находится
pub async fn get(
    db: &DatabaseConnection,
    owner_id: &str,
    id: &str,
) -> ServiceResult<DistributionRecord> {
    ensure_owner(owner_id)?;
    let id = parse_id(id)?;
    repository::get_by_id(db, owner_id, &id)
        .await?
        .ok_or_else(|| not_found(&id))
}

/// Сохранить выполненное распределение
pub async fn save(db: &DatabaseConnection, record: &DistributionRecord) -> ServiceResult<()> {
    record.validate().map_err(ServiceError::Validation)?;
    repository::insert(db, record).await?;
    Ok(())
}

/// Удалить запись истории владельца
pub async fn delete(db: &DatabaseConnection, owner_id: &str, id: &str) -> ServiceResult<()> {
    ensure_owner(owner_id)?;
    let id = parse_id(id)?;
    if repository::delete(db, owner_id, &id).await? == 0 {
        return Err(not_found(&id));
    }
    tracing::info!("Distribution record {} of {} deleted", id.as_string(), owner_id);
    Ok(())
}
