use contracts::dashboards::d400_financial_summary::{
    FinancialSummary, FinancialSummaryQuery, MonthlyFinancialReport, MonthlyReportQuery,
};
use contracts::domain::a003_attendance::aggregate::Attendance;
use contracts::enums::PaymentStatus;
use contracts::shared::money::round2;
use contracts::shared::{Period, PeriodFinancials};
use sea_orm::DatabaseConnection;
use std::collections::BTreeMap;

use crate::domain::a003_attendance;
use crate::shared::error::{ServiceError, ServiceResult};

/// Get financial summary for a date range
pub async fn get_summary(
    db: &DatabaseConnection,
    owner_id: &str,
    query: &FinancialSummaryQuery,
) -> ServiceResult<FinancialSummary> {
    let attendances =
        a003_attendance::service::list(db, owner_id, query.date_from, query.date_to).await?;
    Ok(summarize(&attendances))
}

/// Get monthly report with payment method breakdown
pub async fn get_monthly_report(
    db: &DatabaseConnection,
    owner_id: &str,
    query: &MonthlyReportQuery,
) -> ServiceResult<MonthlyFinancialReport> {
    let period = Period::new(query.month, query.year).map_err(ServiceError::Validation)?;
    let attendances = a003_attendance::service::list_for_period(db, owner_id, &period).await?;
    Ok(build_monthly_report(period, &attendances))
}

/// Revenue, costs and profit of a calendar month (executor input)
pub async fn get_period_financials(
    db: &DatabaseConnection,
    owner_id: &str,
    period: &Period,
) -> ServiceResult<PeriodFinancials> {
    let attendances = a003_attendance::service::list_for_period(db, owner_id, period).await?;
    Ok(summarize(&attendances).to_period_financials())
}

/// Aggregate attendances
///
/// Every attendance counts toward revenue and costs regardless of payment status.
pub fn summarize(attendances: &[Attendance]) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for attendance in attendances {
        let net_value = attendance.net_value();
        summary.total_revenue += net_value;
        summary.total_costs += attendance.product_cost;
        summary.total_discounts += attendance.discount;
        summary.transaction_count += 1;

        match attendance.payment_status {
            PaymentStatus::Paid => summary.total_paid += net_value,
            PaymentStatus::Pending => summary.total_pending += net_value,
            PaymentStatus::Cancelled | PaymentStatus::Refunded => {}
        }
    }

    summary.total_profit = round2(summary.total_revenue - summary.total_costs);
    summary.average_ticket = average(summary.total_revenue, summary.transaction_count);
    summary.total_revenue = round2(summary.total_revenue);
    summary.total_costs = round2(summary.total_costs);
    summary.total_discounts = round2(summary.total_discounts);
    summary.total_paid = round2(summary.total_paid);
    summary.total_pending = round2(summary.total_pending);
    summary
}

/// Build the monthly report; attendances without payment method are skipped in the breakdown
pub fn build_monthly_report(period: Period, attendances: &[Attendance]) -> MonthlyFinancialReport {
    let summary = summarize(attendances);

    let mut payment_methods = BTreeMap::new();
    for attendance in attendances {
        if let Some(method) = attendance.payment_method {
            *payment_methods.entry(method).or_insert(0.0) += attendance.net_value();
        }
    }
    for value in payment_methods.values_mut() {
        *value = round2(*value);
    }

    MonthlyFinancialReport {
        period,
        revenue: summary.total_revenue,
        costs: summary.total_costs,
        profit: summary.total_profit,
        transactions: summary.transaction_count,
        average_ticket: summary.average_ticket,
        payment_methods,
    }
}

fn average(total: f64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round2(total / count as f64)
}
