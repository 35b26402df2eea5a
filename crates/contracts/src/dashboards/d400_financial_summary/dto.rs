use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::PaymentMethod;
use crate::shared::{Period, PeriodFinancials};

/// Query for the financial summary dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialSummaryQuery {
    /// Inclusive lower bound, None = from the first attendance
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

/// Totals over a range of attendances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of (value - discount)
    pub total_revenue: f64,
    /// Sum of product_cost
    pub total_costs: f64,
    pub total_profit: f64,
    /// Net revenue still waiting for payment
    pub total_pending: f64,
    pub total_paid: f64,
    pub total_discounts: f64,
    pub average_ticket: f64,
    pub transaction_count: u64,
}

impl FinancialSummary {
    /// Input for the distribution executor
    pub fn to_period_financials(&self) -> PeriodFinancials {
        PeriodFinancials {
            total_revenue: self.total_revenue,
            total_costs: self.total_costs,
            total_profit: self.total_profit,
        }
    }
}

/// Query for the monthly report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReportQuery {
    pub year: i32,
    pub month: u32,
}

/// Monthly report with net revenue split by payment method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFinancialReport {
    pub period: Period,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub transactions: u64,
    pub average_ticket: f64,
    /// Attendances without a payment method are not listed here
    pub payment_methods: BTreeMap<PaymentMethod, f64>,
}
