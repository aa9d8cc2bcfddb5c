//! Calendar date value object for exercise entries.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::config::{ACCEPTED_DATETIME_FORMATS, ACCEPTED_DATE_FORMATS, DISPLAY_DATE_FORMAT};

/// Raised when a string is not a recognizable calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid calendar date")]
pub struct InvalidDate;

/// A calendar day with no time-of-day component.
///
/// Displays and serializes as `Mon Jan 01 2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Today's date in the server's local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a client-supplied date. Accepts ISO and US dates, RFC 3339 and
    /// RFC 2822 timestamps, and the display form produced by this type.
    pub fn parse(input: &str) -> Result<Self, InvalidDate> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InvalidDate);
        }

        if let Ok(ts) = DateTime::parse_from_rfc3339(input)
            .or_else(|_| DateTime::parse_from_rfc2822(input))
        {
            return Ok(Self(ts.date_naive()));
        }

        ACCEPTED_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
            .map(|dt| dt.date())
            .or_else(|| {
                ACCEPTED_DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
            })
            .map(Self)
            .ok_or(InvalidDate)
    }

    /// Lenient variant used for query filters: unparseable input is `None`.
    pub fn parse_lenient(input: Option<&str>) -> Option<Self> {
        input.and_then(|raw| Self::parse(raw).ok())
    }
}

impl std::fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_DATE_FORMAT))
    }
}

impl Serialize for ExerciseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExerciseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> ExerciseDate {
        ExerciseDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_display_form() {
        assert_eq!(date(2024, 1, 1).to_string(), "Mon Jan 01 2024");
        assert_eq!(date(2023, 12, 25).to_string(), "Mon Dec 25 2023");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(ExerciseDate::parse("2024-01-01"), Ok(date(2024, 1, 1)));
        assert_eq!(ExerciseDate::parse(" 2024/02/29 "), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_timestamps_keep_the_date() {
        assert_eq!(
            ExerciseDate::parse("2024-03-10T23:15:00Z"),
            Ok(date(2024, 3, 10))
        );
        assert_eq!(
            ExerciseDate::parse("2024-03-10T08:30"),
            Ok(date(2024, 3, 10))
        );
    }

    #[test]
    fn test_parse_display_form_round_trips() {
        let d = date(2024, 7, 4);
        assert_eq!(ExerciseDate::parse(&d.to_string()), Ok(d));
        assert_eq!(ExerciseDate::parse("July 4, 2024"), Ok(d));
        assert_eq!(ExerciseDate::parse("04 Jul 2024"), Ok(d));
    }

    #[test]
    fn test_parse_us_slash_date() {
        assert_eq!(ExerciseDate::parse("01/15/2024"), Ok(date(2024, 1, 15)));
    }

    #[test]
    fn test_parse_space_separated_datetime() {
        assert_eq!(
            ExerciseDate::parse("2024-01-15 10:00:00"),
            Ok(date(2024, 1, 15))
        );
        assert_eq!(ExerciseDate::parse("2024-01-15 10:00"), Ok(date(2024, 1, 15)));
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert_eq!(
            ExerciseDate::parse("2024-01-15T10:00:00.000"),
            Ok(date(2024, 1, 15))
        );
        assert_eq!(
            ExerciseDate::parse("2024-01-15 10:00:00.250"),
            Ok(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_parse_rfc2822() {
        assert_eq!(
            ExerciseDate::parse("Mon, 15 Jan 2024 10:00:00 GMT"),
            Ok(date(2024, 1, 15))
        );
        assert_eq!(
            ExerciseDate::parse("Mon, 15 Jan 2024 10:00:00 +0000"),
            Ok(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_parse_long_month_names() {
        assert_eq!(ExerciseDate::parse("January 15 2024"), Ok(date(2024, 1, 15)));
        assert_eq!(ExerciseDate::parse("15 January 2024"), Ok(date(2024, 1, 15)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(ExerciseDate::parse("not a date"), Err(InvalidDate));
        assert_eq!(ExerciseDate::parse("2024-02-30"), Err(InvalidDate));
        assert_eq!(ExerciseDate::parse(""), Err(InvalidDate));
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!(ExerciseDate::parse_lenient(None), None);
        assert_eq!(ExerciseDate::parse_lenient(Some("soon")), None);
        assert_eq!(
            ExerciseDate::parse_lenient(Some("2024-01-02")),
            Some(date(2024, 1, 2))
        );
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&date(2024, 1, 1)).unwrap();
        assert_eq!(json, "\"Mon Jan 01 2024\"");
    }
}
