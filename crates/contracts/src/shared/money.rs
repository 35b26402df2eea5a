/// Допуск при сравнении суммы процентов со 100%
pub const PERCENT_TOLERANCE: f64 = 0.01;

/// Округление до 2 знаков (копейки / центы), половина от нуля
///
/// ```
/// use contracts::shared::money::round2;
/// assert_eq!(round2(10.004), 10.0);
/// assert_eq!(round2(-2.5551), -2.56);
/// ```
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // -0.0 в ответах выглядит странно
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Сумма процентов считается полной, если отличается от 100 не больше допуска
pub fn is_full_allocation(total_percentage: f64) -> bool {
    (total_percentage - 100.0).abs() < PERCENT_TOLERANCE
}

/// Процент должен быть конечным числом в диапазоне [0, 100]
pub fn validate_percentage(percentage: f64) -> Result<(), String> {
    if !percentage.is_finite() {
        return Err("Процент должен быть числом".into());
    }
    if !(0.0..=100.0).contains(&percentage) {
        return Err(format!(
            "Процент должен быть в диапазоне от 0 до 100, получено {}",
            percentage
        ));
    }
    Ok(())
}
