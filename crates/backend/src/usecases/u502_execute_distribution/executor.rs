use contracts::domain::a001_profit_distribution_config::aggregate::ConfigurationStatus;
use contracts::domain::a002_profit_distribution::aggregate::DistributionRecord;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_simulate_distribution::simulate;
use contracts::usecases::u502_execute_distribution::{
    DistributionPreview, ExecuteDistribution, ExecuteDistributionRequest,
};
use sea_orm::DatabaseConnection;

use crate::dashboards::d400_financial_summary;
use crate::domain::{a001_profit_distribution_config, a002_profit_distribution, ensure_owner};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::format::format_money;

/// Executor для UseCase распределения прибыли за период
pub struct DistributionExecutor {
    db: DatabaseConnection,
    /// Строгий режим: отклонять настройку, сумма которой не равна 100%
    enforce_full_allocation: bool,
}

impl DistributionExecutor {
    pub fn new(db: DatabaseConnection, enforce_full_allocation: bool) -> Self {
        Self {
            db,
            enforce_full_allocation,
        }
    }

    /// Расчет без записи (показывается перед подтверждением)
    pub async fn preview(
        &self,
        owner_id: &str,
        request: ExecuteDistributionRequest,
    ) -> ServiceResult<DistributionPreview> {
        ensure_owner(owner_id)?;
        let period = request.period().map_err(ServiceError::Validation)?;

        let entries = a001_profit_distribution_config::service::list(&self.db, owner_id).await?;
        if entries.is_empty() {
            return Err(ServiceError::Validation(
                "Распределение не настроено: задайте проценты категорий".into(),
            ));
        }

        let status = ConfigurationStatus::from_entries(&entries);
        if self.enforce_full_allocation && !status.is_complete {
            return Err(ServiceError::AllocationMismatch {
                total: status.total_percentage,
            });
        }

        let financials = match request.financials {
            Some(financials) => {
                financials.validate().map_err(ServiceError::Validation)?;
                financials
            }
            None => {
                d400_financial_summary::service::get_period_financials(&self.db, owner_id, &period)
                    .await?
            }
        };

        let allocations = a001_profit_distribution_config::service::to_allocations(&entries);
        let simulation = simulate(financials.total_profit, &allocations);

        Ok(DistributionPreview {
            period,
            financials,
            simulation,
            status,
        })
    }

    /// Выполнить распределение и сохранить запись в историю
    pub async fn execute(
        &self,
        owner_id: &str,
        request: ExecuteDistributionRequest,
    ) -> ServiceResult<DistributionRecord> {
        let preview = self.preview(owner_id, request).await?;

        if let Some(warning) = &preview.status.warning {
            tracing::warn!(
                "Executing distribution {} {} with incomplete configuration: {}",
                owner_id,
                preview.period.label(),
                warning
            );
        }

        let record = DistributionRecord::from_simulation(
            owner_id.to_string(),
            preview.period,
            &preview.financials,
            &preview.simulation,
        );
        a002_profit_distribution::service::save(&self.db, &record).await?;

        tracing::info!(
            "{}: {} {} executed, profit {}, distributed {}",
            ExecuteDistribution::full_name(),
            owner_id,
            record.period.label(),
            format_money(record.total_profit),
            format_money(record.total_distributed())
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_attendance;
    use crate::shared::data::db::test_connection;
    use chrono::NaiveDate;
    use contracts::domain::a001_profit_distribution_config::aggregate::DistributionConfigDto;
    use contracts::domain::a003_attendance::aggregate::AttendanceDto;
    use contracts::enums::ProfitCategory;
    use contracts::shared::PeriodFinancials;

    async fn configure(db: &DatabaseConnection, split: &[(ProfitCategory, f64)]) {
        for (category, percentage) in split {
            a001_profit_distribution_config::service::upsert(
                db,
                "owner-1",
                DistributionConfigDto {
                    category: *category,
                    percentage: *percentage,
                    description: None,
                },
            )
            .await
            .unwrap();
        }
    }

    fn request(month: u32, year: i32, financials: Option<PeriodFinancials>) -> ExecuteDistributionRequest {
        ExecuteDistributionRequest {
            month,
            year,
            financials,
        }
    }

    fn thousand_profit() -> Option<PeriodFinancials> {
        Some(PeriodFinancials::from_revenue_and_costs(1500.0, 500.0))
    }

    #[tokio::test]
    async fn test_execute_with_defaults() {
        let db = test_connection().await;
        a001_profit_distribution_config::service::apply_defaults(&db, "owner-1")
            .await
            .unwrap();
        let executor = DistributionExecutor::new(db.clone(), false);

        let record = executor
            .execute("owner-1", request(4, 2025, thousand_profit()))
            .await
            .unwrap();
        assert_eq!(record.total_revenue, 1500.0);
        assert_eq!(record.total_costs, 500.0);
        assert_eq!(record.total_profit, 1000.0);
        assert_eq!(record.pro_labore_amount, Some(600.0));
        assert_eq!(record.equipment_reserve_amount, Some(200.0));
        assert_eq!(record.emergency_reserve_amount, Some(100.0));
        assert_eq!(record.investment_amount, Some(100.0));

        let history = a002_profit_distribution::service::list(&db, "owner-1", None)
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, record.id);
        assert_eq!(history[0].investment_amount, Some(100.0));
    }

    #[tokio::test]
    async fn test_incomplete_configuration_is_executed_by_default() {
        let db = test_connection().await;
        configure(
            &db,
            &[
                (ProfitCategory::ProLabore, 60.0),
                (ProfitCategory::EquipmentReserve, 15.0),
                (ProfitCategory::Investment, 10.0),
            ],
        )
        .await;
        let executor = DistributionExecutor::new(db, false);

        let preview = executor
            .preview("owner-1", request(4, 2025, thousand_profit()))
            .await
            .unwrap();
        assert!(!preview.status.is_complete);
        assert_eq!(preview.status.total_percentage, 85.0);

        let record = executor
            .execute("owner-1", request(4, 2025, thousand_profit()))
            .await
            .unwrap();
        assert_eq!(record.equipment_reserve_amount, Some(150.0));
        assert_eq!(record.emergency_reserve_amount, None);
        assert_eq!(record.total_distributed(), 850.0);
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_incomplete_configuration() {
        let db = test_connection().await;
        configure(
            &db,
            &[
                (ProfitCategory::ProLabore, 60.0),
                (ProfitCategory::EquipmentReserve, 15.0),
                (ProfitCategory::Investment, 10.0),
            ],
        )
        .await;
        let executor = DistributionExecutor::new(db.clone(), true);

        let result = executor
            .execute("owner-1", request(4, 2025, thousand_profit()))
            .await;
        match result {
            Err(ServiceError::AllocationMismatch { total }) => assert_eq!(total, 85.0),
            other => panic!("expected allocation mismatch, got {:?}", other),
        }
        assert!(a002_profit_distribution::service::list(&db, "owner-1", None)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_preview_does_not_persist() {
        let db = test_connection().await;
        a001_profit_distribution_config::service::apply_defaults(&db, "owner-1")
            .await
            .unwrap();
        let executor = DistributionExecutor::new(db.clone(), true);

        let preview = executor
            .preview("owner-1", request(4, 2025, thousand_profit()))
            .await
            .unwrap();
        assert_eq!(preview.simulation.total_distributed, 1000.0);
        assert!(preview.status.is_complete);
        assert!(a002_profit_distribution::service::list(&db, "owner-1", None)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_financials_computed_from_attendances() {
        let db = test_connection().await;
        a001_profit_distribution_config::service::apply_defaults(&db, "owner-1")
            .await
            .unwrap();
        for (day, value, cost) in [(5, 800.0, 100.0), (20, 400.0, 100.0)] {
            a003_attendance::service::create(
                &db,
                "owner-1",
                AttendanceDto {
                    date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
                    value,
                    discount: None,
                    product_cost: Some(cost),
                    payment_method: None,
                    payment_status: None,
                    observations: None,
                },
            )
            .await
            .unwrap();
        }
        let executor = DistributionExecutor::new(db, false);

        let record = executor
            .execute("owner-1", request(2, 2025, None))
            .await
            .unwrap();
        assert_eq!(record.total_revenue, 1200.0);
        assert_eq!(record.total_costs, 200.0);
        assert_eq!(record.total_profit, 1000.0);
        assert_eq!(record.pro_labore_amount, Some(600.0));
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let db = test_connection().await;
        let executor = DistributionExecutor::new(db.clone(), false);

        // Нет настройки
        let empty = executor
            .execute("owner-1", request(4, 2025, thousand_profit()))
            .await;
        assert!(matches!(empty, Err(ServiceError::Validation(_))));

        a001_profit_distribution_config::service::apply_defaults(&db, "owner-1")
            .await
            .unwrap();
        for (month, year) in [(0, 2025), (13, 2025), (4, 25)] {
            let invalid = executor
                .execute("owner-1", request(month, year, thousand_profit()))
                .await;
            assert!(matches!(invalid, Err(ServiceError::Validation(_))));
        }
    }
}
