use serde::{Deserialize, Serialize};

use crate::shared::{Period, PeriodFinancials};

/// Запрос на расчет/выполнение распределения за месяц
///
/// Если `financials` не переданы, они считаются по оказанным услугам периода.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteDistributionRequest {
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub financials: Option<PeriodFinancials>,
}

impl ExecuteDistributionRequest {
    pub fn period(&self) -> Result<Period, String> {
        Period::new(self.month, self.year)
    }
}
