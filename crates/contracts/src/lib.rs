//! Общие типы домена распределения прибыли.
//!
//! Крейт не зависит от хранилища и HTTP: здесь живут агрегаты, DTO,
//! реестр категорий и чистая математика симуляции.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
