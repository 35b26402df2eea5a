pub mod u501_simulate_distribution;
pub mod u502_execute_distribution;
