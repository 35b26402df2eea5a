/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Денежная сумма с двумя знаками: разделитель тысяч точка, дробной части запятая
///
/// ```
/// use backend::shared::format::format_money;
/// assert_eq!(format_money(1234.5), "1.234,50");
/// assert_eq!(format_money(-0.004), "0,00");
/// ```
pub fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{},{:02}",
        sign,
        format_number((cents / 100) as usize),
        cents % 100
    )
}
