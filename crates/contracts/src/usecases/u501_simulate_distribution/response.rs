use serde::{Deserialize, Serialize};

use crate::enums::ProfitCategory;

/// Сумма по одной категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub category: ProfitCategory,
    pub label: String,
    pub percentage: f64,
    pub amount: f64,
}

/// Результат симуляции (в БД не сохраняется)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub total_profit: f64,
    pub allocations: Vec<CategoryAllocation>,
    pub total_percentage: f64,
    pub total_distributed: f64,
    /// 100 - total_percentage, отрицательное при превышении
    pub remaining_percentage: f64,
    /// Прибыль, не попавшая ни в одну категорию
    pub undistributed: f64,
}

impl SimulationResult {
    pub fn amount_for(&self, category: ProfitCategory) -> Option<f64> {
        self.allocations
            .iter()
            .find(|a| a.category == category)
            .map(|a| a.amount)
    }
}

/// Предопределенные сценарии прибыли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Conservative,
    Current,
    Optimistic,
    Growth,
}

impl ScenarioKind {
    pub fn all() -> Vec<ScenarioKind> {
        vec![
            ScenarioKind::Conservative,
            ScenarioKind::Current,
            ScenarioKind::Optimistic,
            ScenarioKind::Growth,
        ]
    }

    /// Множитель к текущей прибыли
    pub fn factor(&self) -> f64 {
        match self {
            ScenarioKind::Conservative => 0.8,
            ScenarioKind::Current => 1.0,
            ScenarioKind::Optimistic => 1.2,
            ScenarioKind::Growth => 1.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::Conservative => "Консервативный (-20%)",
            ScenarioKind::Current => "Текущий",
            ScenarioKind::Optimistic => "Оптимистичный (+20%)",
            ScenarioKind::Growth => "Рост (+50%)",
        }
    }
}

/// Симуляция одного сценария
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub kind: ScenarioKind,
    pub label: String,
    pub factor: f64,
    pub simulation: SimulationResult,
}
