//! Date and time helpers for the NEO datasets
//!
//! Source close approach data carries calendar dates like `2020-Jan-01 12:30`.
//! Output files and user-supplied dates use ISO-like numeric forms.

use chrono::{NaiveDate, NaiveDateTime, ParseResult};

/// Format of approach times in the close approach dataset
pub const SOURCE_DATETIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Format of approach times in exported files and printed output
pub const OUTPUT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format of calendar dates supplied on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a source calendar datetime (`YYYY-Mon-DD hh:mm`).
pub fn cd_to_datetime(calendar_date: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(calendar_date.trim(), SOURCE_DATETIME_FORMAT)
}

/// Formats an approach time without seconds, which the source never carries.
pub fn datetime_to_str(time: &NaiveDateTime) -> String {
    time.format(OUTPUT_DATETIME_FORMAT).to_string()
}

/// Parses a datetime previously written by [`datetime_to_str`].
pub fn str_to_datetime(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), OUTPUT_DATETIME_FORMAT)
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_cd_to_datetime() {
        let time = cd_to_datetime("1900-Jan-01 00:11").unwrap();
        assert_eq!(time.date(), NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
        assert_eq!(time.hour(), 0);
        assert_eq!(time.minute(), 11);
    }

    #[test]
    fn test_cd_to_datetime_rejects_numeric_month() {
        assert!(cd_to_datetime("2020-01-01 00:00").is_err());
    }

    #[test]
    fn test_datetime_to_str_drops_seconds() {
        let time = cd_to_datetime("2020-Dec-31 23:59").unwrap();
        assert_eq!(datetime_to_str(&time), "2020-12-31 23:59");
    }

    #[test]
    fn test_output_format_reads_back() {
        let time = cd_to_datetime("2045-Mar-07 04:20").unwrap();
        let back = str_to_datetime(&datetime_to_str(&time)).unwrap();
        assert_eq!(back, time);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2020-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert!(parse_date("2020-Jan-01").is_err());
    }
}
