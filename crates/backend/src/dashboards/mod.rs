pub mod d400_financial_summary;
pub mod d401_distribution_history;
