pub mod request;
pub mod response;
pub mod simulation;

pub use request::{PercentageAllocation, PercentageSource, ScenarioRequest, SimulationRequest};
pub use response::{CategoryAllocation, ScenarioKind, ScenarioResult, SimulationResult};
pub use simulation::{normalize_allocations, scenarios, simulate};

use crate::usecases::common::UseCaseMetadata;

pub struct SimulateDistribution;

impl UseCaseMetadata for SimulateDistribution {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "simulate_distribution"
    }

    fn display_name() -> &'static str {
        "Симуляция распределения прибыли"
    }

    fn description() -> &'static str {
        "Расчет сумм по категориям для гипотетической прибыли без записи в БД"
    }
}
