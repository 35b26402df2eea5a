pub mod payment;
pub mod profit_category;

pub use payment::{PaymentMethod, PaymentStatus};
pub use profit_category::{CategoryDefaults, CategoryInfo, ProfitCategory};
