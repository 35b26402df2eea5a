use serde::{Deserialize, Serialize};

/// Категории распределения прибыли
///
/// Набор закрыт: новая категория появляется только вместе с новой колонкой
/// в истории распределений.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitCategory {
    /// Pro-labore, вознаграждение владельца
    ProLabore,
    /// Резерв на оборудование
    EquipmentReserve,
    /// Резервный фонд на непредвиденные расходы
    EmergencyReserve,
    /// Инвестиции и маркетинг
    Investment,
}

/// Значения категории по умолчанию (статический реестр)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDefaults {
    pub percentage: f64,
    pub label: &'static str,
    pub description: &'static str,
}

/// Описание категории для клиентов API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: ProfitCategory,
    pub code: String,
    pub label: String,
    pub description: String,
    pub default_percentage: f64,
}

impl ProfitCategory {
    /// Код категории (совпадает с serde-представлением)
    pub fn code(&self) -> &'static str {
        match self {
            ProfitCategory::ProLabore => "pro_labore",
            ProfitCategory::EquipmentReserve => "equipment_reserve",
            ProfitCategory::EmergencyReserve => "emergency_reserve",
            ProfitCategory::Investment => "investment",
        }
    }

    /// Все категории в порядке отображения
    pub fn all() -> Vec<ProfitCategory> {
        vec![
            ProfitCategory::ProLabore,
            ProfitCategory::EquipmentReserve,
            ProfitCategory::EmergencyReserve,
            ProfitCategory::Investment,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pro_labore" => Some(ProfitCategory::ProLabore),
            "equipment_reserve" => Some(ProfitCategory::EquipmentReserve),
            "emergency_reserve" => Some(ProfitCategory::EmergencyReserve),
            "investment" => Some(ProfitCategory::Investment),
            _ => None,
        }
    }

    /// Процент, метка и описание по умолчанию
    pub fn defaults(&self) -> CategoryDefaults {
        match self {
            ProfitCategory::ProLabore => CategoryDefaults {
                percentage: 60.0,
                label: "Pro-labore (вознаграждение владельца)",
                description: "Вознаграждение владельца за работу",
            },
            ProfitCategory::EquipmentReserve => CategoryDefaults {
                percentage: 20.0,
                label: "Резерв на оборудование",
                description: "Фонд покупки и обслуживания оборудования",
            },
            ProfitCategory::EmergencyReserve => CategoryDefaults {
                percentage: 10.0,
                label: "Резервный фонд",
                description: "Фонд непредвиденных расходов",
            },
            ProfitCategory::Investment => CategoryDefaults {
                percentage: 10.0,
                label: "Инвестиции / маркетинг",
                description: "Бюджет на развитие и маркетинг",
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.defaults().label
    }

    pub fn info(&self) -> CategoryInfo {
        let defaults = self.defaults();
        CategoryInfo {
            category: *self,
            code: self.code().to_string(),
            label: defaults.label.to_string(),
            description: defaults.description.to_string(),
            default_percentage: defaults.percentage,
        }
    }

    /// Позиция в реестре, используется для стабильной сортировки
    pub fn position(&self) -> usize {
        match self {
            ProfitCategory::ProLabore => 0,
            ProfitCategory::EquipmentReserve => 1,
            ProfitCategory::EmergencyReserve => 2,
            ProfitCategory::Investment => 3,
        }
    }
}

impl std::fmt::Display for ProfitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_sum_to_hundred() {
        let total: f64 = ProfitCategory::all()
            .iter()
            .map(|c| c.defaults().percentage)
            .sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_code_round_trip() {
        for category in ProfitCategory::all() {
            assert_eq!(ProfitCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(ProfitCategory::from_code("marketing"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&ProfitCategory::EmergencyReserve).unwrap();
        assert_eq!(json, "\"emergency_reserve\"");

        let parsed: Result<ProfitCategory, _> = serde_json::from_str("\"vacation_fund\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_info_uses_registry_labels() {
        let info = ProfitCategory::EmergencyReserve.info();
        assert_eq!(info.code, "emergency_reserve");
        assert_eq!(info.label, "Резервный фонд");
        assert_eq!(info.description, "Фонд непредвиденных расходов");
        assert_eq!(ProfitCategory::ProLabore.label(), "Pro-labore (вознаграждение владельца)");
    }

    #[test]
    fn test_positions_follow_registry_order() {
        let positions: Vec<usize> = ProfitCategory::all().iter().map(|c| c.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }
}
