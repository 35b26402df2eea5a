use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::ProfitCategory;
use crate::shared::Period;

/// Filter for the distribution history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// None = all years
    #[serde(default)]
    pub year: Option<i32>,
}

/// Aggregate over executed distributions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionHistorySummary {
    pub total_distributed: f64,
    pub distribution_count: u64,
    /// Only categories that received an amount at least once
    pub by_category: BTreeMap<ProfitCategory, f64>,
    /// Latest period among the records
    pub last_period: Option<Period>,
}
