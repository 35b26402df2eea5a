use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Все идентификаторы в системе: UUID v4, хранятся в БД строкой.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Обернуть UUID
    fn from_uuid(value: uuid::Uuid) -> Self;

    /// Получить UUID
    fn value(&self) -> uuid::Uuid;

    /// Сгенерировать новый ID
    fn new_v4() -> Self {
        Self::from_uuid(uuid::Uuid::new_v4())
    }

    /// Преобразовать ID в строку
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(Self::from_uuid)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}
