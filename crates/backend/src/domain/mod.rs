pub mod a001_profit_distribution_config;
pub mod a002_profit_distribution;
pub mod a003_attendance;

use crate::shared::error::{ServiceError, ServiceResult};

/// Все операции выполняются от имени явно указанного владельца
pub(crate) fn ensure_owner(owner_id: &str) -> ServiceResult<()> {
    if owner_id.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Владелец не может быть пустым".into(),
        ));
    }
    Ok(())
}
