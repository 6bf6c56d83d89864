//! Currency, date and name formatting with the dashboard's fixed locales.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Mxn,
}

const MONTHS_LONG: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Insert `separator` every three digits of a plain digit string.
fn group_digits(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Split `|value|` rounded to cents into grouped integer and fraction parts.
fn split_amount(value: f64, separator: char) -> (String, String) {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    (group_digits(int_part, separator), frac_part.to_string())
}

/// Format an amount the way the browser's currency formatter does for each
/// supported currency:
/// USD `$1,234.56` (en-US), EUR `1.234,56 €` (de-DE), MXN `$1,234.56` (es-MX).
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    match currency {
        Currency::Usd | Currency::Mxn => {
            let (int_part, frac) = split_amount(amount, ',');
            format!("{sign}${int_part}.{frac}")
        }
        Currency::Eur => {
            let (int_part, frac) = split_amount(amount, '.');
            format!("{sign}{int_part},{frac}\u{a0}€")
        }
    }
}

/// Outgoing movement amount, e.g. `-$1,800.00`.
pub fn format_outgoing(amount: f64) -> String {
    format_currency(-amount.abs(), Currency::Usd)
}

/// Whole-dollar amount for budgets and invoice totals, e.g. `$8,500`.
pub fn format_usd_whole(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = format!("{:.0}", amount.abs());
    format!("{sign}${}", group_digits(&rounded, ','))
}

/// Value-axis tick of the charts: `18500` -> `$18.5k`.
pub fn format_k(value: f64) -> String {
    format!("${}k", value / 1000.0)
}

/// `2026-01-11` -> `11 ene 2026`.
pub fn format_date_short(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}

/// `2026-01-11` -> `11 de enero de 2026`.
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

/// Up to two upper-case initials: `"maría garcía lópez"` -> `"MG"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5, Currency::Usd), "$1,234.50");
        assert_eq!(format_currency(1234567.891, Currency::Mxn), "$1,234,567.89");
        assert_eq!(format_currency(1234.5, Currency::Eur), "1.234,50\u{a0}€");
        assert_eq!(format_currency(-15.0, Currency::Usd), "-$15.00");
        assert_eq!(format_currency(0.0, Currency::Usd), "$0.00");
    }

    #[test]
    fn test_format_outgoing() {
        assert_eq!(format_outgoing(1800.0), "-$1,800.00");
        assert_eq!(format_outgoing(79.0), "-$79.00");
    }

    #[test]
    fn test_format_usd_whole() {
        assert_eq!(format_usd_whole(8500.0), "$8,500");
        assert_eq!(format_usd_whole(12000.0), "$12,000");
        assert_eq!(format_usd_whole(450.0), "$450");
    }

    #[test]
    fn test_format_k() {
        assert_eq!(format_k(18500.0), "$18.5k");
        assert_eq!(format_k(22000.0), "$22k");
        assert_eq!(format_k(0.0), "$0k");
    }

    #[test]
    fn test_format_dates() {
        assert_eq!(format_date_short(date(2026, 1, 11)), "11 ene 2026");
        assert_eq!(format_date_short(date(2025, 9, 3)), "3 sept 2025");
        assert_eq!(format_date_long(date(2026, 1, 11)), "11 de enero de 2026");
        assert_eq!(format_date_long(date(2025, 12, 28)), "28 de diciembre de 2025");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("maría garcía lópez"), "MG");
        assert_eq!(initials("Carlos"), "C");
        assert_eq!(initials("  ana   martínez "), "AM");
        assert_eq!(initials(""), "");
    }
}
