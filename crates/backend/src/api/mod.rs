pub mod extractors;
pub mod handlers;
