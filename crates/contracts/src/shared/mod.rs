pub mod financials;
pub mod money;
pub mod period;

pub use financials::PeriodFinancials;
pub use period::Period;
