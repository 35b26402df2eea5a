pub mod dto;

pub use dto::{DistributionHistorySummary, HistoryQuery};
