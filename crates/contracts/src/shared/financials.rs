use serde::{Deserialize, Serialize};

use super::money::round2;

/// Финансовый итог периода, от которого считается распределение
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodFinancials {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
}

impl PeriodFinancials {
    /// Прибыль = выручка - затраты
    pub fn from_revenue_and_costs(total_revenue: f64, total_costs: f64) -> Self {
        Self {
            total_revenue: round2(total_revenue),
            total_costs: round2(total_costs),
            total_profit: round2(total_revenue - total_costs),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let values = [self.total_revenue, self.total_costs, self.total_profit];
        if values.iter().any(|v| !v.is_finite()) {
            return Err("Финансовые показатели должны быть числами".into());
        }
        Ok(())
    }
}
