pub mod dto;

pub use dto::{FinancialSummary, FinancialSummaryQuery, MonthlyFinancialReport, MonthlyReportQuery};
