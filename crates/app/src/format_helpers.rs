/// Shared formatting utilities for the UI layer.

use serde_json::Value;

/// Format a JSON amount as money with thousands separators and two
/// decimals, e.g. `1234.5` becomes "1,234.50". Non-numeric values
/// degrade to an empty string.
pub fn format_money(value: Option<&Value>) -> String {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.parse::<f64>().ok(),
        _ => None,
    };
    let Some(amount) = amount else {
        return String::new();
    };

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-{grouped}.{fraction:02}")
    } else {
        format!("{grouped}.{fraction:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn groups_thousands_and_pads_cents() {
        assert_eq!(format_money(Some(&json!(1234.5))), "1,234.50");
        assert_eq!(format_money(Some(&json!(1000000))), "1,000,000.00");
        assert_eq!(format_money(Some(&json!(7))), "7.00");
    }

    #[test]
    fn accepts_stringified_numbers() {
        assert_eq!(format_money(Some(&json!("250.75"))), "250.75");
    }

    #[test]
    fn non_numbers_degrade_to_empty() {
        assert_eq!(format_money(Some(&json!("n/a"))), "");
        assert_eq!(format_money(Some(&json!(null))), "");
        assert_eq!(format_money(None), "");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_money(Some(&json!(-42.5))), "-42.50");
    }
}
