use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_simulate_distribution::{
    normalize_allocations, scenarios, simulate, PercentageAllocation, PercentageSource,
    ScenarioRequest, ScenarioResult, SimulateDistribution, SimulationRequest, SimulationResult,
};
use sea_orm::DatabaseConnection;

use crate::domain::{a001_profit_distribution_config, ensure_owner};
use crate::shared::error::{ServiceError, ServiceResult};

/// Executor для UseCase симуляции распределения
///
/// Ничего не пишет в БД: процент из переопределения живет только в запросе.
pub struct SimulationExecutor {
    db: DatabaseConnection,
}

impl SimulationExecutor {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Симуляция для гипотетической прибыли
    pub async fn simulate(
        &self,
        owner_id: &str,
        request: SimulationRequest,
    ) -> ServiceResult<SimulationResult> {
        ensure_finite(request.total_profit)?;
        let allocations = self.resolve_percentages(owner_id, request.percentages).await?;
        Ok(simulate(request.total_profit, &allocations))
    }

    /// Предопределенные сценарии относительно базовой прибыли
    pub async fn scenarios(
        &self,
        owner_id: &str,
        request: ScenarioRequest,
    ) -> ServiceResult<Vec<ScenarioResult>> {
        ensure_finite(request.base_profit)?;
        let allocations = self.resolve_percentages(owner_id, request.percentages).await?;
        Ok(scenarios(request.base_profit, &allocations))
    }

    async fn resolve_percentages(
        &self,
        owner_id: &str,
        source: PercentageSource,
    ) -> ServiceResult<Vec<PercentageAllocation>> {
        ensure_owner(owner_id)?;
        tracing::debug!(
            "{}: owner {}, source {:?}",
            SimulateDistribution::full_name(),
            owner_id,
            source
        );
        match source {
            PercentageSource::Configured => {
                a001_profit_distribution_config::service::active_allocations(&self.db, owner_id)
                    .await
            }
            PercentageSource::Override(allocations) => {
                normalize_allocations(allocations).map_err(ServiceError::Validation)
            }
        }
    }
}

fn ensure_finite(profit: f64) -> ServiceResult<()> {
    if !profit.is_finite() {
        return Err(ServiceError::Validation(
            "Прибыль должна быть числом".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;
    use contracts::domain::a001_profit_distribution_config::aggregate::DistributionConfigDto;
    use contracts::enums::ProfitCategory;

    fn request(total_profit: f64, percentages: PercentageSource) -> SimulationRequest {
        SimulationRequest {
            total_profit,
            percentages,
        }
    }

    #[tokio::test]
    async fn test_simulate_with_configured_percentages() {
        let db = test_connection().await;
        a001_profit_distribution_config::service::apply_defaults(&db, "owner-1")
            .await
            .unwrap();
        let executor = SimulationExecutor::new(db);

        let result = executor
            .simulate("owner-1", request(1000.0, PercentageSource::Configured))
            .await
            .unwrap();
        let amounts: Vec<(ProfitCategory, f64)> = result
            .allocations
            .iter()
            .map(|a| (a.category, a.amount))
            .collect();
        assert_eq!(
            amounts,
            vec![
                (ProfitCategory::ProLabore, 600.0),
                (ProfitCategory::EquipmentReserve, 200.0),
                (ProfitCategory::EmergencyReserve, 100.0),
                (ProfitCategory::Investment, 100.0),
            ]
        );
    }

    #[tokio::test]
    async fn test_edit_then_resimulate_changes_only_that_category() {
        let db = test_connection().await;
        a001_profit_distribution_config::service::apply_defaults(&db, "owner-1")
            .await
            .unwrap();
        a001_profit_distribution_config::service::upsert(
            &db,
            "owner-1",
            DistributionConfigDto {
                category: ProfitCategory::EquipmentReserve,
                percentage: 35.0,
                description: None,
            },
        )
        .await
        .unwrap();
        let executor = SimulationExecutor::new(db);

        let result = executor
            .simulate("owner-1", request(1000.0, PercentageSource::Configured))
            .await
            .unwrap();
        assert_eq!(result.amount_for(ProfitCategory::EquipmentReserve), Some(350.0));
        assert_eq!(result.amount_for(ProfitCategory::ProLabore), Some(600.0));
        assert_eq!(result.total_percentage, 115.0);
    }

    #[tokio::test]
    async fn test_override_does_not_touch_stored_configuration() {
        let db = test_connection().await;
        a001_profit_distribution_config::service::apply_defaults(&db, "owner-1")
            .await
            .unwrap();
        let before = a001_profit_distribution_config::service::list(&db, "owner-1")
            .await
            .unwrap();
        let executor = SimulationExecutor::new(db.clone());

        let result = executor
            .simulate(
                "owner-1",
                request(
                    2000.0,
                    PercentageSource::Override(vec![PercentageAllocation {
                        category: ProfitCategory::Investment,
                        percentage: 50.0,
                    }]),
                ),
            )
            .await
            .unwrap();
        assert_eq!(result.allocations.len(), 1);
        assert_eq!(result.amount_for(ProfitCategory::Investment), Some(1000.0));

        let after = a001_profit_distribution_config::service::list(&db, "owner-1")
            .await
            .unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_invalid_inputs() {
        let executor = SimulationExecutor::new(test_connection().await);

        let bad_override = executor
            .simulate(
                "owner-1",
                request(
                    100.0,
                    PercentageSource::Override(vec![PercentageAllocation {
                        category: ProfitCategory::ProLabore,
                        percentage: 140.0,
                    }]),
                ),
            )
            .await;
        assert!(matches!(bad_override, Err(ServiceError::Validation(_))));

        let bad_profit = executor
            .simulate("owner-1", request(f64::INFINITY, PercentageSource::Configured))
            .await;
        assert!(matches!(bad_profit, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_empty_configuration_simulates_nothing() {
        let executor = SimulationExecutor::new(test_connection().await);
        let result = executor
            .simulate("owner-1", request(1000.0, PercentageSource::Configured))
            .await
            .unwrap();
        assert!(result.allocations.is_empty());
        assert_eq!(result.total_distributed, 0.0);

        let scenarios = executor
            .scenarios(
                "owner-1",
                ScenarioRequest {
                    base_profit: 1000.0,
                    percentages: PercentageSource::Configured,
                },
            )
            .await
            .unwrap();
        assert_eq!(scenarios.len(), 4);
    }
}
