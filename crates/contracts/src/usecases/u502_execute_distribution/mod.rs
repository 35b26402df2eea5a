pub mod request;
pub mod response;

pub use request::ExecuteDistributionRequest;
pub use response::DistributionPreview;

use crate::usecases::common::UseCaseMetadata;

pub struct ExecuteDistribution;

impl UseCaseMetadata for ExecuteDistribution {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "execute_distribution"
    }

    fn display_name() -> &'static str {
        "Распределение прибыли за период"
    }

    fn description() -> &'static str {
        "Применение сохраненной настройки к прибыли месяца и запись результата в историю"
    }
}
