//! Raw text handling shared by the forms.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::FormError;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Something, an `@`, something, a dot, something; no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Apply one keystroke's worth of text to a decimal field.
///
/// Keeps only digits and `.`. If the cleaned text has more than one `.` or
/// more than two digits after it, the edit is refused and `previous` is kept.
pub fn sanitize_decimal_input(previous: &str, typed: &str) -> String {
    let cleaned: String = typed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = cleaned.split('.');
    let _integer = parts.next();
    let fraction = parts.next();
    if parts.next().is_some() {
        return previous.to_string();
    }
    if fraction.is_some_and(|f| f.len() > 2) {
        return previous.to_string();
    }

    cleaned
}

/// Parse a decimal field. Tolerates a leading or trailing `.` (".5", "12.").
pub(crate) fn parse_decimal(text: &str, field: &'static str) -> Result<Decimal, FormError> {
    let mut s = text.trim().to_string();
    if s.ends_with('.') {
        s.pop();
    }
    if s.starts_with('.') {
        s.insert(0, '0');
    }
    Decimal::from_str(&s).map_err(|_| FormError::InvalidAmount { field })
}

/// Parse a `YYYY-MM-DD` date field.
pub(crate) fn parse_date(text: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ana@x.com"));
        assert!(!is_valid_email("ana@x"));
        assert!(!is_valid_email("ana x@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn sanitize_strips_foreign_characters() {
        assert_eq!(sanitize_decimal_input("", "1a2,5"), "125");
        assert_eq!(sanitize_decimal_input("", "$10.50"), "10.50");
    }

    #[test]
    fn sanitize_refuses_second_dot() {
        assert_eq!(sanitize_decimal_input("1.2", "1.2."), "1.2");
    }

    #[test]
    fn sanitize_refuses_third_fraction_digit() {
        assert_eq!(sanitize_decimal_input("1.25", "1.255"), "1.25");
    }

    #[test]
    fn parse_decimal_tolerates_dangling_dot() {
        assert_eq!(parse_decimal("12.", "cost").unwrap(), dec!(12));
        assert_eq!(parse_decimal(".5", "cost").unwrap(), dec!(0.5));
        assert_eq!(
            parse_decimal("", "cost").unwrap_err(),
            FormError::InvalidAmount { field: "cost" }
        );
    }

    #[test]
    fn parse_decimal_rejects_values_beyond_decimal_range() {
        assert_eq!(
            parse_decimal("79228162514264337593543950335", "quantity").unwrap(),
            rust_decimal::Decimal::MAX
        );
        assert_eq!(
            parse_decimal(&"9".repeat(30), "quantity").unwrap_err(),
            FormError::InvalidAmount { field: "quantity" }
        );
    }

    #[test]
    fn parse_date_requires_iso_format() {
        assert!(parse_date("2026-10-18").is_ok());
        assert_eq!(parse_date("18/10/2026").unwrap_err(), FormError::InvalidDate);
    }

    proptest! {
        /// Property: sanitized text always parses as a decimal with <= 2 places
        /// (or is empty / a lone dot).
        #[test]
        fn sanitized_text_is_a_decimal(typed in ".{0,12}") {
            let out = sanitize_decimal_input("", &typed);
            prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '.'));
            prop_assert!(out.matches('.').count() <= 1);
            if let Some((_, frac)) = out.split_once('.') {
                prop_assert!(frac.len() <= 2);
            }
        }

        /// Property: a refused edit returns exactly the previous text.
        #[test]
        fn refused_edit_keeps_previous(prev in "[0-9]{1,3}\\.[0-9]{2}", extra in "[0-9]{1,3}") {
            let typed = format!("{prev}{extra}");
            prop_assert_eq!(sanitize_decimal_input(&prev, &typed), prev);
        }
    }
}
