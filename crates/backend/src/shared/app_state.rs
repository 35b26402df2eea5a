use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::config::Config;

/// Состояние, общее для всех обработчиков
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn enforce_full_allocation(&self) -> bool {
        self.config.distribution.enforce_full_allocation
    }
}
