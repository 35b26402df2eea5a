use contracts::domain::a001_profit_distribution_config::aggregate::{
    ConfigurationStatus, DistributionConfigDto, DistributionConfigEntry,
};
use contracts::enums::ProfitCategory;
use contracts::usecases::u501_simulate_distribution::PercentageAllocation;
use sea_orm::{DatabaseConnection, TransactionTrait};

use super::repository;
use crate::domain::ensure_owner;
use crate::shared::error::{ServiceError, ServiceResult};

/// Активная настройка владельца
pub async fn list(db: &DatabaseConnection, owner_id: &str) -> ServiceResult<Vec<DistributionConfigEntry>> {
    ensure_owner(owner_id)?;
    Ok(repository::list_active(db, owner_id).await?)
}

/// Создать или обновить процент категории
///
/// Сумма процентов здесь не проверяется: несоответствие видно в `status`.
pub async fn upsert(
    db: &DatabaseConnection,
    owner_id: &str,
    dto: DistributionConfigDto,
) -> ServiceResult<DistributionConfigEntry> {
    let candidate = DistributionConfigEntry::new_for_insert(
        owner_id.to_string(),
        dto.category,
        dto.percentage,
        dto.description.clone(),
    );
    candidate.validate().map_err(ServiceError::Validation)?;

    let entry = match repository::find_active_by_category(db, owner_id, dto.category).await? {
        Some(mut existing) => {
            existing.update(&dto);
            existing.before_write();
            repository::update(db, &existing).await?;
            existing
        }
        None => {
            let mut entry = candidate;
            entry.before_write();
            repository::insert(db, &entry).await?;
            entry
        }
    };

    tracing::info!(
        "Distribution config {}: {} = {}%",
        owner_id,
        entry.category,
        entry.percentage
    );
    Ok(entry)
}

/// Убрать категорию из настройки (мягкое удаление)
pub async fn remove(db: &DatabaseConnection, owner_id: &str, category: ProfitCategory) -> ServiceResult<()> {
    ensure_owner(owner_id)?;
    let entry = repository::find_active_by_category(db, owner_id, category)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Категория {} не настроена", category.code()))
        })?;
    repository::deactivate(db, &entry.id).await?;
    tracing::info!("Distribution config {}: {} removed", owner_id, category);
    Ok(())
}

/// Заменить настройку значениями реестра категорий
///
/// Выполняется одной транзакцией: при ошибке прежняя настройка остается.
pub async fn apply_defaults(
    db: &DatabaseConnection,
    owner_id: &str,
) -> ServiceResult<Vec<DistributionConfigEntry>> {
    ensure_owner(owner_id)?;

    let txn = db.begin().await?;
    let replaced = repository::deactivate_all(&txn, owner_id).await?;

    let mut entries = Vec::new();
    for category in ProfitCategory::all() {
        let mut entry = DistributionConfigEntry::from_defaults(owner_id.to_string(), category);
        entry.before_write();
        repository::insert(&txn, &entry).await?;
        entries.push(entry);
    }
    txn.commit().await?;

    tracing::info!(
        "Distribution config {}: defaults applied, {} previous entries replaced",
        owner_id,
        replaced
    );
    Ok(entries)
}

/// Сумма процентов и предупреждение о несоответствии 100%
pub async fn status(db: &DatabaseConnection, owner_id: &str) -> ServiceResult<ConfigurationStatus> {
    let entries = list(db, owner_id).await?;
    Ok(ConfigurationStatus::from_entries(&entries))
}

/// Активная настройка в виде входа для симуляции
pub async fn active_allocations(
    db: &DatabaseConnection,
    owner_id: &str,
) -> ServiceResult<Vec<PercentageAllocation>> {
    Ok(to_allocations(&list(db, owner_id).await?))
}

pub fn to_allocations(entries: &[DistributionConfigEntry]) -> Vec<PercentageAllocation> {
    entries
        .iter()
        .filter(|e| e.is_active)
        .map(|e| PercentageAllocation {
            category: e.category,
            percentage: e.percentage,
        })
        .collect()
}
