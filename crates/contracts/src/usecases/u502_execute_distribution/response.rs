use serde::{Deserialize, Serialize};

use crate::domain::a001_profit_distribution_config::aggregate::ConfigurationStatus;
use crate::shared::{Period, PeriodFinancials};
use crate::usecases::u501_simulate_distribution::SimulationResult;

/// Расчет перед подтверждением: то же, что выполнение, но без записи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionPreview {
    pub period: Period,
    pub financials: PeriodFinancials,
    pub simulation: SimulationResult,
    pub status: ConfigurationStatus,
}
