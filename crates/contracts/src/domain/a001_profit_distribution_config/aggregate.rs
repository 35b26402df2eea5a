use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::ProfitCategory;
use crate::shared::money::{is_full_allocation, round2, validate_percentage};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор строки настройки распределения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistributionConfigId(pub Uuid);

impl AggregateId for DistributionConfigId {
    fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Процент прибыли, который владелец направляет в одну категорию
///
/// У владельца не больше одной активной строки на категорию.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionConfigEntry {
    pub id: DistributionConfigId,
    pub owner_id: String,
    pub category: ProfitCategory,
    pub percentage: f64,
    pub description: Option<String>,
    pub is_active: bool,
    pub metadata: EntityMetadata,
}

impl DistributionConfigEntry {
    /// Создать новую строку для вставки в БД
    pub fn new_for_insert(
        owner_id: String,
        category: ProfitCategory,
        percentage: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            id: DistributionConfigId::new_v4(),
            owner_id,
            category,
            percentage,
            description,
            is_active: true,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать строку из значений реестра категорий
    pub fn from_defaults(owner_id: String, category: ProfitCategory) -> Self {
        let defaults = category.defaults();
        Self::new_for_insert(
            owner_id,
            category,
            defaults.percentage,
            Some(defaults.description.to_string()),
        )
    }

    /// Обновить данные из DTO (категория не меняется)
    pub fn update(&mut self, dto: &DistributionConfigDto) {
        self.percentage = dto.percentage;
        self.description = dto.description.clone();
        self.is_active = true;
        self.metadata.increment_version();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.owner_id.trim().is_empty() {
            return Err("Владелец не может быть пустым".into());
        }
        validate_percentage(self.percentage)
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for DistributionConfigEntry {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "profit_distribution_config"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления процента категории
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionConfigDto {
    pub category: ProfitCategory,
    pub percentage: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Состояние настройки: хватает ли процентов для запуска распределения
///
/// Несоответствие не блокирует редактирование, только подсвечивается.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationStatus {
    pub total_percentage: f64,
    pub remaining_percentage: f64,
    pub is_complete: bool,
    pub is_over_allocated: bool,
    pub configured_categories: Vec<ProfitCategory>,
    pub warning: Option<String>,
}

impl ConfigurationStatus {
    pub fn from_entries(entries: &[DistributionConfigEntry]) -> Self {
        let active: Vec<&DistributionConfigEntry> = entries.iter().filter(|e| e.is_active).collect();
        let total = round2(active.iter().map(|e| e.percentage).sum());
        let mut configured: Vec<ProfitCategory> = active.iter().map(|e| e.category).collect();
        configured.sort_by_key(|c| c.position());
        configured.dedup();

        let is_complete = is_full_allocation(total);
        let is_over_allocated = !is_complete && total > 100.0;
        let remaining = round2(100.0 - total);

        let warning = if active.is_empty() {
            Some("Распределение не настроено".to_string())
        } else if is_over_allocated {
            Some(format!(
                "Настроено {:.2}% прибыли, превышение на {:.2}%",
                total, -remaining
            ))
        } else if !is_complete {
            Some(format!(
                "Настроено {:.2}% прибыли, осталось распределить {:.2}%",
                total, remaining
            ))
        } else {
            None
        };

        Self {
            total_percentage: total,
            remaining_percentage: remaining,
            is_complete,
            is_over_allocated,
            configured_categories: configured,
            warning,
        }
    }
}
