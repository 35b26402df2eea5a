//! Математика распределения прибыли.
//!
//! Чистые функции без ввода-вывода: одинаково используются симулятором
//! и при выполнении распределения.

use std::collections::BTreeMap;

use super::request::PercentageAllocation;
use super::response::{CategoryAllocation, ScenarioKind, ScenarioResult, SimulationResult};
use crate::shared::money::{round2, validate_percentage};

/// Рассчитать суммы по категориям
///
/// `amount = round2(total_profit * percentage / 100)`. Сумма процентов не
/// обязана быть 100: неполная или избыточная настройка тоже симулируется.
/// Нулевая и отрицательная прибыль масштабируются так же, без ошибок.
pub fn simulate(total_profit: f64, allocations: &[PercentageAllocation]) -> SimulationResult {
    let items: Vec<CategoryAllocation> = allocations
        .iter()
        .map(|allocation| CategoryAllocation {
            category: allocation.category,
            label: allocation.category.label().to_string(),
            percentage: allocation.percentage,
            amount: round2(total_profit * allocation.percentage / 100.0),
        })
        .collect();

    let total_percentage = round2(items.iter().map(|a| a.percentage).sum());
    let total_distributed = round2(items.iter().map(|a| a.amount).sum());

    SimulationResult {
        total_profit: round2(total_profit),
        allocations: items,
        total_percentage,
        total_distributed,
        remaining_percentage: round2(100.0 - total_percentage),
        undistributed: round2(total_profit - total_distributed),
    }
}

/// Проверить проценты, переданные вызывающей стороной
///
/// Дубликаты категорий схлопываются (побеждает последний), результат
/// упорядочен по реестру категорий.
pub fn normalize_allocations(
    allocations: Vec<PercentageAllocation>,
) -> Result<Vec<PercentageAllocation>, String> {
    let mut by_category = BTreeMap::new();
    for allocation in allocations {
        validate_percentage(allocation.percentage)
            .map_err(|e| format!("{}: {}", allocation.category, e))?;
        by_category.insert(allocation.category.position(), allocation);
    }
    Ok(by_category.into_values().collect())
}

/// Симуляция предопределенных сценариев относительно текущей прибыли
pub fn scenarios(base_profit: f64, allocations: &[PercentageAllocation]) -> Vec<ScenarioResult> {
    ScenarioKind::all()
        .into_iter()
        .map(|kind| ScenarioResult {
            kind,
            label: kind.label().to_string(),
            factor: kind.factor(),
            simulation: simulate(base_profit * kind.factor(), allocations),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ProfitCategory;

    fn allocation(category: ProfitCategory, percentage: f64) -> PercentageAllocation {
        PercentageAllocation { category, percentage }
    }

    fn standard() -> Vec<PercentageAllocation> {
        vec![
            allocation(ProfitCategory::ProLabore, 60.0),
            allocation(ProfitCategory::EquipmentReserve, 20.0),
            allocation(ProfitCategory::EmergencyReserve, 10.0),
            allocation(ProfitCategory::Investment, 10.0),
        ]
    }

    #[test]
    fn test_standard_split_of_thousand() {
        let result = simulate(1000.0, &standard());
        let amounts: Vec<f64> = result.allocations.iter().map(|a| a.amount).collect();
        assert_eq!(amounts, vec![600.0, 200.0, 100.0, 100.0]);
        assert_eq!(result.total_percentage, 100.0);
        assert_eq!(result.total_distributed, 1000.0);
        assert_eq!(result.remaining_percentage, 0.0);
        assert_eq!(result.undistributed, 0.0);
    }

    #[test]
    fn test_editing_one_category_changes_only_its_amount() {
        let before = simulate(1000.0, &standard());

        let mut edited = standard();
        edited[1].percentage = 35.0;
        let after = simulate(1000.0, &edited);

        assert_eq!(before.amount_for(ProfitCategory::EquipmentReserve), Some(200.0));
        assert_eq!(after.amount_for(ProfitCategory::EquipmentReserve), Some(350.0));
        for category in [
            ProfitCategory::ProLabore,
            ProfitCategory::EmergencyReserve,
            ProfitCategory::Investment,
        ] {
            assert_eq!(before.amount_for(category), after.amount_for(category));
        }
    }

    #[test]
    fn test_zero_profit_gives_zero_amounts() {
        let result = simulate(0.0, &standard());
        assert!(result.allocations.iter().all(|a| a.amount == 0.0));
        assert_eq!(result.total_distributed, 0.0);
    }

    #[test]
    fn test_negative_profit_scales_proportionally() {
        let result = simulate(-500.0, &standard());
        assert_eq!(result.amount_for(ProfitCategory::ProLabore), Some(-300.0));
        assert_eq!(result.amount_for(ProfitCategory::Investment), Some(-50.0));
        assert_eq!(result.total_distributed, -500.0);
    }

    #[test]
    fn test_empty_configuration() {
        let result = simulate(1000.0, &[]);
        assert!(result.allocations.is_empty());
        assert_eq!(result.total_distributed, 0.0);
        assert_eq!(result.total_percentage, 0.0);
        assert_eq!(result.undistributed, 1000.0);
    }

    #[test]
    fn test_partial_allocation_is_not_an_error() {
        let result = simulate(
            1000.0,
            &[
                allocation(ProfitCategory::ProLabore, 60.0),
                allocation(ProfitCategory::EquipmentReserve, 15.0),
                allocation(ProfitCategory::Investment, 10.0),
            ],
        );
        assert_eq!(result.total_percentage, 85.0);
        assert_eq!(result.remaining_percentage, 15.0);
        assert_eq!(result.total_distributed, 850.0);
        assert_eq!(result.undistributed, 150.0);
    }

    #[test]
    fn test_full_allocation_sums_to_profit_within_rounding() {
        let splits: Vec<Vec<PercentageAllocation>> = vec![
            standard(),
            vec![
                allocation(ProfitCategory::ProLabore, 33.33),
                allocation(ProfitCategory::EquipmentReserve, 33.33),
                allocation(ProfitCategory::EmergencyReserve, 33.34),
            ],
            vec![
                allocation(ProfitCategory::ProLabore, 12.5),
                allocation(ProfitCategory::Investment, 87.5),
            ],
            ProfitCategory::all()
                .into_iter()
                .map(|c| allocation(c, 25.0))
                .collect(),
        ];
        let profits = [0.0, 0.01, 1.0, 99.99, 1000.0, 1234.56, 98765.43, 1_000_000.37];

        for split in &splits {
            for profit in profits {
                let result = simulate(profit, split);
                let sum: f64 = result.allocations.iter().map(|a| a.amount).sum();
                let tolerance = 0.01 * split.len() as f64 + 1e-9;
                assert!(
                    (sum - round2(profit)).abs() <= tolerance,
                    "profit {} split {:?}: sum {}",
                    profit,
                    split,
                    sum
                );
            }
        }
    }

    #[test]
    fn test_normalize_allocations() {
        let normalized = normalize_allocations(vec![
            allocation(ProfitCategory::Investment, 10.0),
            allocation(ProfitCategory::ProLabore, 50.0),
            allocation(ProfitCategory::Investment, 30.0),
        ])
        .unwrap();
        assert_eq!(
            normalized,
            vec![
                allocation(ProfitCategory::ProLabore, 50.0),
                allocation(ProfitCategory::Investment, 30.0),
            ]
        );

        assert!(normalize_allocations(vec![allocation(ProfitCategory::ProLabore, 101.0)]).is_err());
        assert!(normalize_allocations(vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_scenarios() {
        let results = scenarios(1000.0, &standard());
        let profits: Vec<f64> = results.iter().map(|r| r.simulation.total_profit).collect();
        assert_eq!(profits, vec![800.0, 1000.0, 1200.0, 1500.0]);
        assert_eq!(
            results[3].simulation.amount_for(ProfitCategory::ProLabore),
            Some(900.0)
        );
    }
}
