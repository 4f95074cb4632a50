use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::types::{Day, Month, Weekday, Year, days_in_month};
use crate::{CalendarDate, split_date_text};

/// Severity of a validation message, for a display layer to style by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[display(fmt = "success")]
    Success,
    #[display(fmt = "error")]
    Error,
    #[display(fmt = "info")]
    Info,
}

/// Derived facts about a date that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    pub weekday: Weekday,
    pub is_leap_year: bool,
    pub days_in_month: u8,
}

/// Outcome of a single validation call.
///
/// Invalid input is data, not a fault: every call produces exactly one
/// result, and `date_info` is present if and only if `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    pub kind: MessageKind,
    pub date_info: Option<DateInfo>,
}

impl ValidationResult {
    /// A valid-date outcome carrying derived facts.
    pub fn success(message: impl Into<String>, date_info: DateInfo) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
            kind: MessageKind::Success,
            date_info: Some(date_info),
        }
    }

    /// A rejected-input outcome.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            kind: MessageKind::Error,
            date_info: None,
        }
    }

    /// An incomplete-input outcome (nothing to validate yet).
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            kind: MessageKind::Info,
            date_info: None,
        }
    }
}

/// Validates a date given as three separate text fields.
///
/// Rules are applied in order and the first failing one decides the
/// outcome: empty fields, non-numeric fields, year range, month range,
/// day range for the governing month, then a day-number round-trip
/// cross-check. A passing date reports its weekday, leap-year status,
/// and month length.
///
/// Pure and reentrant; a caller re-invokes it after every input change.
pub fn validate_components(day: &str, month: &str, year: &str) -> ValidationResult {
    let (day, month, year) = (day.trim(), month.trim(), year.trim());

    if day.is_empty() || month.is_empty() || year.is_empty() {
        return ValidationResult::info("Please fill in all date fields");
    }

    let (Ok(day_num), Ok(month_num), Ok(year_num)) =
        (day.parse::<i64>(), month.parse::<i64>(), year.parse::<i64>())
    else {
        return ValidationResult::error("Please enter valid numbers");
    };

    let Some(year) = to_year(year_num) else {
        return ValidationResult::error("Year must be between 1 and 9999");
    };

    let Some(month) = to_month(month_num) else {
        return ValidationResult::error("Month must be between 1 and 12");
    };

    let max_days = days_in_month(year.get(), month.get());
    let Some(day) = to_day(day_num, year, month) else {
        return ValidationResult::error(format!(
            "Day must be between 1 and {max_days} for {} {year}",
            month.name()
        ));
    };

    match CalendarDate::new(year, month, day) {
        Ok(date) => {
            let info = DateInfo {
                weekday: date.weekday(),
                is_leap_year: date.is_leap_year(),
                days_in_month: max_days,
            };
            ValidationResult::success(format!("Valid date! This is a {}.", info.weekday), info)
        }
        Err(_) => ValidationResult::error("Invalid date combination"),
    }
}

/// Validates a date given as one free-text string.
///
/// Accepts `DD/MM/YYYY` (day-first by convention), `YYYY-MM-DD`, and
/// `DD-MM-YYYY`; the extracted raw fields are handed to
/// [`validate_components`] so both entry points share one rule set.
pub fn validate_free_text(text: &str) -> ValidationResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ValidationResult::info("Please enter a date");
    }

    match split_date_text(trimmed) {
        Some((day, month, year)) => validate_components(day, month, year),
        None => ValidationResult::error(
            "Invalid date format. Try DD/MM/YYYY, MM/DD/YYYY, or YYYY-MM-DD",
        ),
    }
}

fn to_year(value: i64) -> Option<Year> {
    u16::try_from(value).ok().and_then(|v| Year::new(v).ok())
}

fn to_month(value: i64) -> Option<Month> {
    u8::try_from(value).ok().and_then(|v| Month::new(v).ok())
}

fn to_day(value: i64, year: Year, month: Month) -> Option<Day> {
    u8::try_from(value)
        .ok()
        .and_then(|v| Day::new(v, year.get(), month.get()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let result = validate_components("", "", "");
        assert!(!result.is_valid);
        assert_eq!(result.kind, MessageKind::Info);
        assert_eq!(result.message, "Please fill in all date fields");
        assert!(result.date_info.is_none());

        // Any single missing field is enough
        for (d, m, y) in [("", "2", "2024"), ("29", "", "2024"), ("29", "2", "")] {
            let result = validate_components(d, m, y);
            assert_eq!(result.kind, MessageKind::Info);
            assert_eq!(result.message, "Please fill in all date fields");
        }
    }

    #[test]
    fn test_non_numeric_fields() {
        for (d, m, y) in [
            ("abc", "2", "2024"),
            ("29", "xx", "2024"),
            ("29", "2", "20x4"),
            ("1.5", "2", "2024"),
        ] {
            let result = validate_components(d, m, y);
            assert!(!result.is_valid);
            assert_eq!(result.kind, MessageKind::Error);
            assert_eq!(result.message, "Please enter valid numbers");
        }
    }

    #[test]
    fn test_year_out_of_range() {
        for y in ["0", "10000", "-5"] {
            let result = validate_components("15", "3", y);
            assert!(!result.is_valid);
            assert_eq!(result.message, "Year must be between 1 and 9999");
        }
    }

    #[test]
    fn test_month_out_of_range() {
        for m in ["0", "13", "-1", "255"] {
            let result = validate_components("15", m, "2024");
            assert!(!result.is_valid);
            assert_eq!(result.message, "Month must be between 1 and 12");
        }
    }

    #[test]
    fn test_rule_order_year_before_month() {
        // Year and month are both bad: the year rule fires first
        let result = validate_components("15", "13", "10000");
        assert_eq!(result.message, "Year must be between 1 and 9999");
    }

    #[test]
    fn test_day_out_of_range_message() {
        let result = validate_components("31", "2", "2023");
        assert!(!result.is_valid);
        assert_eq!(result.kind, MessageKind::Error);
        assert_eq!(
            result.message,
            "Day must be between 1 and 28 for February 2023"
        );

        let result = validate_components("30", "2", "2024");
        assert_eq!(
            result.message,
            "Day must be between 1 and 29 for February 2024"
        );

        let result = validate_components("31", "4", "2024");
        assert_eq!(result.message, "Day must be between 1 and 30 for April 2024");
    }

    #[test]
    fn test_valid_leap_day() {
        let result = validate_components("29", "2", "2024");
        assert!(result.is_valid);
        assert_eq!(result.kind, MessageKind::Success);
        assert_eq!(result.message, "Valid date! This is a Thursday.");
        assert_eq!(
            result.date_info,
            Some(DateInfo {
                weekday: Weekday::Thursday,
                is_leap_year: true,
                days_in_month: 29,
            })
        );
    }

    #[test]
    fn test_valid_regular_date() {
        let result = validate_components("15", "3", "2024");
        assert!(result.is_valid);
        assert_eq!(result.message, "Valid date! This is a Friday.");
        let info = result.date_info.unwrap();
        assert_eq!(info.weekday, Weekday::Friday);
        assert!(info.is_leap_year);
        assert_eq!(info.days_in_month, 31);
    }

    #[test]
    fn test_day_boundaries() {
        // day = 1 and day = max accepted, day = 0 and max + 1 rejected,
        // across every month of a leap and a non-leap year
        for year in [2023u16, 2024] {
            for month in 1..=12u8 {
                let max = days_in_month(year, month);
                let m = month.to_string();
                let y = year.to_string();

                assert!(validate_components("1", &m, &y).is_valid);
                assert!(validate_components(&max.to_string(), &m, &y).is_valid);
                assert!(!validate_components("0", &m, &y).is_valid);
                assert!(!validate_components(&(max + 1).to_string(), &m, &y).is_valid);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let first = validate_components("29", "2", "2024");
        let second = validate_components("29", "2", "2024");
        assert_eq!(first, second);

        let first = validate_components("31", "2", "2023");
        let second = validate_components("31", "2", "2023");
        assert_eq!(first, second);
    }

    #[test]
    fn test_components_trim_whitespace() {
        let result = validate_components(" 29 ", " 2 ", " 2024 ");
        assert!(result.is_valid);
    }

    #[test]
    fn test_free_text_empty() {
        for text in ["", "   "] {
            let result = validate_free_text(text);
            assert!(!result.is_valid);
            assert_eq!(result.kind, MessageKind::Info);
            assert_eq!(result.message, "Please enter a date");
            assert!(result.date_info.is_none());
        }
    }

    #[test]
    fn test_free_text_iso() {
        let result = validate_free_text("2024-03-15");
        assert!(result.is_valid);
        assert_eq!(result.message, "Valid date! This is a Friday.");
        let info = result.date_info.unwrap();
        assert_eq!(info.days_in_month, 31);
    }

    #[test]
    fn test_free_text_day_first_slash() {
        // Day-first convention: 03/04/2024 is 3 April 2024 (a Wednesday),
        // not March 4 (a Monday)
        let result = validate_free_text("03/04/2024");
        assert!(result.is_valid);
        assert_eq!(result.date_info.unwrap().weekday, Weekday::Wednesday);
    }

    #[test]
    fn test_free_text_day_first_hyphen() {
        let result = validate_free_text("15-03-2024");
        assert!(result.is_valid);
        assert_eq!(result.message, "Valid date! This is a Friday.");
    }

    #[test]
    fn test_free_text_delegates_range_errors() {
        let result = validate_free_text("15/15/2024");
        assert!(!result.is_valid);
        assert_eq!(result.message, "Month must be between 1 and 12");

        let result = validate_free_text("31/2/2023");
        assert_eq!(
            result.message,
            "Day must be between 1 and 28 for February 2023"
        );
    }

    #[test]
    fn test_free_text_unparseable_formats() {
        for text in [
            "15.03.2024",
            "2024/03/15",
            "March 15, 2024",
            "15/03",
            "15/03/24",
            "2024-03/15",
            "20240315",
        ] {
            let result = validate_free_text(text);
            assert!(!result.is_valid, "{text:?} should not validate");
            assert_eq!(result.kind, MessageKind::Error);
            assert_eq!(
                result.message,
                "Invalid date format. Try DD/MM/YYYY, MM/DD/YYYY, or YYYY-MM-DD"
            );
        }
    }

    #[test]
    fn test_free_text_matches_components() {
        // The two entry points agree on the same date
        let from_text = validate_free_text("2024-03-15");
        let from_parts = validate_components("15", "3", "2024");
        assert_eq!(from_text, from_parts);
    }

    #[test]
    fn test_date_info_iff_valid() {
        let cases = [
            validate_components("29", "2", "2024"),
            validate_components("30", "2", "2024"),
            validate_components("", "", ""),
            validate_free_text("2024-03-15"),
            validate_free_text("garbage"),
            validate_free_text(""),
        ];
        for result in &cases {
            assert_eq!(
                result.is_valid,
                result.date_info.is_some(),
                "date_info must be present exactly when the date is valid"
            );
        }
    }

    #[test]
    fn test_year_domain_edges() {
        assert!(validate_components("1", "1", "1").is_valid);
        assert!(validate_components("31", "12", "9999").is_valid);
    }

    #[test]
    fn test_result_serde() {
        let result = validate_components("29", "2", "2024");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""is_valid":true"#));
        assert!(json.contains(r#""kind":"success""#));
        assert!(json.contains(r#""weekday":"Thursday""#));

        let parsed: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(MessageKind::Success.to_string(), "success");
        assert_eq!(MessageKind::Error.to_string(), "error");
        assert_eq!(MessageKind::Info.to_string(), "info");
    }
}
