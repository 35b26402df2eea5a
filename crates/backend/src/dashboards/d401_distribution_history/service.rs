use contracts::dashboards::d401_distribution_history::{DistributionHistorySummary, HistoryQuery};
use contracts::domain::a002_profit_distribution::aggregate::DistributionRecord;
use contracts::shared::money::round2;
use sea_orm::DatabaseConnection;

use crate::domain::a002_profit_distribution;
use crate::shared::error::ServiceResult;

/// Get summary over executed distributions
pub async fn get_summary(
    db: &DatabaseConnection,
    owner_id: &str,
    query: &HistoryQuery,
) -> ServiceResult<DistributionHistorySummary> {
    let records = a002_profit_distribution::service::list(db, owner_id, query.year).await?;
    Ok(summarize(&records))
}

/// Add up category columns; categories absent from a record contribute nothing
pub fn summarize(records: &[DistributionRecord]) -> DistributionHistorySummary {
    let mut summary = DistributionHistorySummary::default();

    for record in records {
        for (category, amount) in record.allocations() {
            *summary.by_category.entry(category).or_insert(0.0) += amount;
        }
        summary.distribution_count += 1;
        summary.last_period = summary.last_period.max(Some(record.period));
    }

    for amount in summary.by_category.values_mut() {
        *amount = round2(*amount);
    }
    summary.total_distributed = round2(summary.by_category.values().sum());
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ProfitCategory;
    use contracts::shared::{Period, PeriodFinancials};
    use contracts::usecases::u501_simulate_distribution::{simulate, PercentageAllocation};

    fn record(month: u32, profit: f64, split: &[(ProfitCategory, f64)]) -> DistributionRecord {
        let financials = PeriodFinancials::from_revenue_and_costs(profit, 0.0);
        let allocations: Vec<PercentageAllocation> = split
            .iter()
            .map(|(category, percentage)| PercentageAllocation {
                category: *category,
                percentage: *percentage,
            })
            .collect();
        DistributionRecord::from_simulation(
            "owner-1".into(),
            Period::new(month, 2025).unwrap(),
            &financials,
            &simulate(profit, &allocations),
        )
    }

    #[test]
    fn test_summarize_adds_up_category_columns() {
        let records = vec![
            record(
                3,
                1000.0,
                &[(ProfitCategory::ProLabore, 60.0), (ProfitCategory::Investment, 40.0)],
            ),
            record(
                1,
                500.0,
                &[(ProfitCategory::ProLabore, 50.0), (ProfitCategory::EmergencyReserve, 30.0)],
            ),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.distribution_count, 2);
        assert_eq!(summary.by_category.get(&ProfitCategory::ProLabore), Some(&850.0));
        assert_eq!(summary.by_category.get(&ProfitCategory::Investment), Some(&400.0));
        assert_eq!(summary.by_category.get(&ProfitCategory::EmergencyReserve), Some(&150.0));
        assert!(!summary.by_category.contains_key(&ProfitCategory::EquipmentReserve));
        assert_eq!(summary.total_distributed, 1400.0);
        assert_eq!(summary.last_period, Some(Period { year: 2025, month: 3 }));
    }

    #[test]
    fn test_summarize_empty_history() {
        let summary = summarize(&[]);
        assert_eq!(summary.distribution_count, 0);
        assert_eq!(summary.total_distributed, 0.0);
        assert!(summary.last_period.is_none());
    }
}
