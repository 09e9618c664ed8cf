//! Cell value normalization
//!
//! Every populated cell becomes a string before comparison. Numbers and dates are
//! printed in one fixed form so the same stored value always normalizes the same way.

use calamine::Data;
use chrono::NaiveDateTime;

/// Normalize a decoded cell, or `None` for an empty cell
///
/// An empty *string* is a populated cell and normalizes to `Some("")`.
pub fn normalize_value(data: &Data) -> Option<String> {
    let text = match data {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                format_number(dt.as_f64())
            } else {
                match dt.as_datetime() {
                    Some(ndt) => format_datetime(&ndt),
                    None => format_number(dt.as_f64()),
                }
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    };
    Some(text)
}

/// Print a number the way a spreadsheet user would type it
///
/// Integral values below 1e15 drop the fractional part (`5.0` -> `"5"`).
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Print a date/time as `YYYY-MM-DD HH:MM:SS`
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_is_absent() {
        assert_eq!(normalize_value(&Data::Empty), None);
    }

    #[test]
    fn test_empty_string_is_present() {
        assert_eq!(normalize_value(&Data::String(String::new())), Some(String::new()));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(normalize_value(&Data::Int(5)).as_deref(), Some("5"));
        assert_eq!(normalize_value(&Data::Float(5.0)).as_deref(), Some("5"));
        assert_eq!(normalize_value(&Data::Float(-12.0)).as_deref(), Some("-12"));
        assert_eq!(normalize_value(&Data::Float(3.25)).as_deref(), Some("3.25"));
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn test_number_and_text_normalize_equal() {
        assert_eq!(
            normalize_value(&Data::Float(5.0)),
            normalize_value(&Data::String("5".into()))
        );
    }

    #[test]
    fn test_bool_and_error() {
        assert_eq!(normalize_value(&Data::Bool(true)).as_deref(), Some("TRUE"));
        assert_eq!(normalize_value(&Data::Bool(false)).as_deref(), Some("FALSE"));
        assert_eq!(
            normalize_value(&Data::Error(CellErrorType::Div0)).as_deref(),
            Some("#DIV/0!")
        );
    }

    #[test]
    fn test_iso_values_verbatim() {
        assert_eq!(
            normalize_value(&Data::DateTimeIso("2024-03-01T10:00:00".into())).as_deref(),
            Some("2024-03-01T10:00:00")
        );
        assert_eq!(
            normalize_value(&Data::DurationIso("PT1H".into())).as_deref(),
            Some("PT1H")
        );
    }

    #[test]
    fn test_format_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 31)
            .and_then(|d| d.and_hms_opt(8, 5, 0))
            .unwrap();
        assert_eq!(format_datetime(&dt), "2024-01-31 08:05:00");
    }
}
