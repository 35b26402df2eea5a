pub mod executor;

pub use executor::DistributionExecutor;
