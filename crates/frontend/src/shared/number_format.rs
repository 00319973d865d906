//! Number formatting for amounts: grouped thousands and a currency code prefix

use super::config::DisplayConfig;

/// Formats a number with a thousands separator and fixed decimals.
/// Example: `1234.567`, 2 decimals, `,` and `.` → `"1,234.57"`
pub fn format_number_with_decimals(
    value: f64,
    decimals: usize,
    thousands_separator: char,
    decimal_separator: char,
) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert the separator every 3 digits from the right
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(thousands_separator);
        }
        grouped.push(c);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match decimal_part {
        Some(d) => format!("{}{}{}{}", sign, grouped, decimal_separator, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Amount with 2 decimals, separators from config
pub fn format_money(value: f64, config: &DisplayConfig) -> String {
    format_number_with_decimals(
        value,
        2,
        config.thousands_separator,
        config.decimal_separator,
    )
}

/// Amount with the currency code prefix: "USD 1,234.56", "-USD 12.00"
pub fn format_currency(value: f64, config: &DisplayConfig) -> String {
    let amount = format_money(value.abs(), config);
    if value < 0.0 && amount.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{} {}", config.currency_code, amount)
    } else {
        format!("{} {}", config.currency_code, amount)
    }
}

/// Percentage without trailing zeros: 10 → "10%", 12.5 → "12.5%"
pub fn format_percent(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        let cfg = DisplayConfig::default();
        assert_eq!(format_money(1234.56, &cfg), "1,234.56");
        assert_eq!(format_money(1234567.89, &cfg), "1,234,567.89");
        assert_eq!(format_money(0.0, &cfg), "0.00");
        assert_eq!(format_money(-1234.56, &cfg), "-1,234.56");
        assert_eq!(format_money(999.999, &cfg), "1,000.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, ' ', '.'), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1, ' ', '.'), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3, '.', ','), "1.234,567");
        assert_eq!(format_number_with_decimals(123.0, 0, ',', '.'), "123");
        assert_eq!(format_number_with_decimals(-0.001, 2, ',', '.'), "0.00");
    }

    #[test]
    fn test_format_currency() {
        let cfg = DisplayConfig::default();
        assert_eq!(format_currency(1500.0, &cfg), "USD 1,500.00");
        assert_eq!(format_currency(-50000.0, &cfg), "-USD 50,000.00");
        assert_eq!(format_currency(-0.0001, &cfg), "USD 0.00");

        let cop = DisplayConfig::default().with_currency("cop");
        assert_eq!(format_currency(2500000.0, &cop), "COP 2,500,000.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(10.0), "10%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
