pub mod a001_profit_distribution_config;
pub mod a002_profit_distribution;
pub mod a003_attendance;
pub mod common;
