//! HTTP-сервис распределения прибыли: настройка процентов по категориям,
//! симуляция, выполнение распределения за месяц и история.

pub mod api;
pub mod dashboards;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;
