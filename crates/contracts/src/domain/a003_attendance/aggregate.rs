use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::{PaymentMethod, PaymentStatus};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор оказанной услуги
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendanceId(pub Uuid);

impl AggregateId for AttendanceId {
    fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Оказанная услуга: источник выручки и затрат периода
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: AttendanceId,
    pub owner_id: String,
    pub date: NaiveDate,
    /// Цена услуги до скидки
    pub value: f64,
    pub discount: f64,
    /// Себестоимость израсходованных материалов
    pub product_cost: f64,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    pub observations: Option<String>,
    pub metadata: EntityMetadata,
}

impl Attendance {
    /// Создать новую запись для вставки в БД
    pub fn new_for_insert(owner_id: String, dto: AttendanceDto) -> Self {
        Self {
            id: AttendanceId::new_v4(),
            owner_id,
            date: dto.date,
            value: dto.value,
            discount: dto.discount.unwrap_or(0.0),
            product_cost: dto.product_cost.unwrap_or(0.0),
            payment_method: dto.payment_method,
            payment_status: dto.payment_status.unwrap_or_default(),
            observations: dto.observations,
            metadata: EntityMetadata::new(),
        }
    }

    /// Выручка за вычетом скидки
    pub fn net_value(&self) -> f64 {
        self.value - self.discount
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.owner_id.trim().is_empty() {
            return Err("Владелец не может быть пустым".into());
        }
        if !self.value.is_finite() || self.value < 0.0 {
            return Err("Стоимость услуги не может быть отрицательной".into());
        }
        if !self.discount.is_finite() || self.discount < 0.0 {
            return Err("Скидка не может быть отрицательной".into());
        }
        if self.discount > self.value {
            return Err("Скидка не может превышать стоимость услуги".into());
        }
        if !self.product_cost.is_finite() || self.product_cost < 0.0 {
            return Err("Себестоимость не может быть отрицательной".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for Attendance {
    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "attendance"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для регистрации оказанной услуги
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDto {
    pub date: NaiveDate,
    pub value: f64,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub product_cost: Option<f64>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub observations: Option<String>,
}

/// Запрос на смену статуса оплаты
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusUpdate {
    pub payment_status: PaymentStatus,
}
