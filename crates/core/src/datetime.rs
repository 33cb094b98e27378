//! Định dạng ngày giờ dạng text ở boundary: `YYYY-MM-DD HH:MM:SS`.

use crate::error::{CoreError, CoreResult};
use chrono::NaiveDateTime;

/// Một thời điểm, độ chính xác đến giây, không có timezone.
pub type Instant = NaiveDateTime;

/// Định dạng cố định (24 giờ, đệm số 0, không timezone)
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse thời điểm từ `YYYY-MM-DD HH:MM:SS`.
pub fn parse_datetime(raw: &str) -> CoreResult<Instant> {
    NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)
        .map_err(|_| CoreError::parse("datetime", raw))
}

/// Format thời điểm thành `YYYY-MM-DD HH:MM:SS`.
pub fn format_datetime(instant: &Instant) -> String {
    instant.format(DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2021-01-01 09:30:05").unwrap();
        let expected = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap();
        assert_eq!(dt, expected);
    }

    #[test]
    fn test_round_trip() {
        let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let text = format_datetime(&dt);
        assert_eq!(text, "2024-02-29 23:59:59");
        assert_eq!(parse_datetime(&text).unwrap(), dt);
    }

    #[test]
    fn test_malformed_input() {
        for raw in [
            "",
            "2021-01-01",
            "2021-01-01T00:00:00",
            "2021-13-01 00:00:00",
            "01/01/2021 00:00:00",
            "2021-01-01 25:00:00",
        ] {
            let err = parse_datetime(raw).unwrap_err();
            assert!(err.is_parse_error(), "expected parse error for {:?}", raw);
        }
    }
}
