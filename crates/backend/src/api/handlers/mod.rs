// Aggregate handlers (a001-a003)
pub mod a001_profit_distribution_config;
pub mod a002_profit_distribution;
pub mod a003_attendance;

// Dashboard handlers (d400-d401)
pub mod d400_financial_summary;
pub mod d401_distribution_history;

// UseCase handlers (u501-u502)
pub mod usecases;
