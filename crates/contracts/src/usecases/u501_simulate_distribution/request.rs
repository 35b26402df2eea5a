use serde::{Deserialize, Serialize};

use crate::enums::ProfitCategory;

/// Процент одной категории (строгая запись вместо произвольного словаря)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageAllocation {
    pub category: ProfitCategory,
    pub percentage: f64,
}

/// Откуда брать проценты для симуляции
///
/// `Override` нужен для интерактивных ползунков и никогда не пишет в БД.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "source", content = "allocations", rename_all = "snake_case")]
pub enum PercentageSource {
    /// Сохраненная настройка владельца
    #[default]
    Configured,
    /// Проценты, переданные вызывающей стороной
    Override(Vec<PercentageAllocation>),
}

/// Запрос на симуляцию
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub total_profit: f64,
    #[serde(default)]
    pub percentages: PercentageSource,
}

/// Запрос на расчет предопределенных сценариев
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// Текущая прибыль, от которой строятся сценарии
    pub base_profit: f64,
    #[serde(default)]
    pub percentages: PercentageSource,
}
