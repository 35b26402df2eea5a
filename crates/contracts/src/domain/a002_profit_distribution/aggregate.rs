use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::ProfitCategory;
use crate::shared::money::round2;
use crate::shared::{Period, PeriodFinancials};
use crate::usecases::u501_simulate_distribution::SimulationResult;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор выполненного распределения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistributionRecordId(pub Uuid);

impl AggregateId for DistributionRecordId {
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

/// Выполненное распределение прибыли за период
///
/// Запись неизменяема: повторный расчет создает новую запись.
/// Сумма категории = None, если категория не была настроена в момент выполнения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRecord {
    pub id: DistributionRecordId,
    pub owner_id: String,
    pub period: Period,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    pub pro_labore_amount: Option<f64>,
    pub equipment_reserve_amount: Option<f64>,
    pub emergency_reserve_amount: Option<f64>,
    pub investment_amount: Option<f64>,
    pub metadata: EntityMetadata,
}

impl DistributionRecord {
    /// Зафиксировать результат симуляции как распределение периода
    pub fn from_simulation(
        owner_id: String,
        period: Period,
        financials: &PeriodFinancials,
        simulation: &SimulationResult,
    ) -> Self {
        let mut record = Self {
            id: DistributionRecordId::new_v4(),
            owner_id,
            period,
            total_revenue: round2(financials.total_revenue),
            total_costs: round2(financials.total_costs),
            total_profit: round2(financials.total_profit),
            pro_labore_amount: None,
            equipment_reserve_amount: None,
            emergency_reserve_amount: None,
            investment_amount: None,
            metadata: EntityMetadata::new(),
        };
        for allocation in &simulation.allocations {
            let amount = record.amount_for(allocation.category).unwrap_or(0.0) + allocation.amount;
            record.set_amount(allocation.category, Some(round2(amount)));
        }
        record
    }

    /// Сумма по категории
    pub fn amount_for(&self, category: ProfitCategory) -> Option<f64> {
        match category {
            ProfitCategory::ProLabore => self.pro_labore_amount,
            ProfitCategory::EquipmentReserve => self.equipment_reserve_amount,
            ProfitCategory::EmergencyReserve => self.emergency_reserve_amount,
            ProfitCategory::Investment => self.investment_amount,
        }
    }

    fn set_amount(&mut self, category: ProfitCategory, amount: Option<f64>) {
        match category {
            ProfitCategory::ProLabore => self.pro_labore_amount = amount,
            ProfitCategory::EquipmentReserve => self.equipment_reserve_amount = amount,
            ProfitCategory::EmergencyReserve => self.emergency_reserve_amount = amount,
            ProfitCategory::Investment => self.investment_amount = amount,
        }
    }

    /// Суммы по настроенным категориям в порядке реестра
    pub fn allocations(&self) -> Vec<(ProfitCategory, f64)> {
        ProfitCategory::all()
            .into_iter()
            .filter_map(|c| self.amount_for(c).map(|amount| (c, amount)))
            .collect()
    }

    /// Всего распределено
    pub fn total_distributed(&self) -> f64 {
        round2(self.allocations().iter().map(|(_, amount)| amount).sum())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.owner_id.trim().is_empty() {
            return Err("Владелец не может быть пустым".into());
        }
        self.period.validate()
    }
}

impl AggregateRoot for DistributionRecord {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "profit_distribution"
    }
}
