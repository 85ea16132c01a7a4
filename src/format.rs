//! Display formatting helpers shared by the dashboard components.

use chrono::{DateTime, Utc};

/// Formats a monetary amount as a dollar string with grouped thousands,
/// e.g. `1234.5` becomes `$1,234.50`.
pub fn currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Formats a timestamp as a long date, e.g. `January 5, 2026`.
pub fn date(value: &DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}

/// Formats a rate as a percentage without trailing zeros, e.g. `20%`.
pub fn percent(value: f64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(9.99), "$9.99");
        assert_eq!(currency(1000.0), "$1,000.00");
        assert_eq!(currency(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn currency_marks_negative_amounts() {
        assert_eq!(currency(-200.0), "-$200.00");
    }

    #[test]
    fn date_is_long_form() {
        let value = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(date(&value), "January 5, 2026");
    }

    #[test]
    fn percent_drops_trailing_zeros() {
        assert_eq!(percent(20.0), "20%");
        assert_eq!(percent(12.5), "12.5%");
    }
}
