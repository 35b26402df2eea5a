use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Расчетный период распределения (месяц + год)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self, String> {
        let period = Self { year, month };
        period.validate()?;
        Ok(period)
    }

    /// Месяц 1..=12, год из четырех цифр
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.month) {
            return Err(format!("Месяц должен быть от 1 до 12, получено {}", self.month));
        }
        if !(1000..=9999).contains(&self.year) {
            return Err(format!("Год должен состоять из 4 цифр, получено {}", self.year));
        }
        Ok(())
    }

    /// Период в формате "YYYY-MM"
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn first_day(&self) -> Result<NaiveDate, String> {
        self.validate()?;
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| format!("Некорректный период {}", self.label()))
    }

    pub fn last_day(&self) -> Result<NaiveDate, String> {
        self.validate()?;
        NaiveDate::from_ymd_opt(self.year, self.month, days_in_month(self.year, self.month))
            .ok_or_else(|| format!("Некорректный период {}", self.label()))
    }

    /// Границы месяца включительно
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate), String> {
        Ok((self.first_day()?, self.last_day()?))
    }
}

/// Количество дней в месяце
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
