//! Calendar days used as puzzle keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

const SECONDS_PER_DAY: u64 = 86_400;
const EPOCH_YEAR: i64 = 1970;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected YYYY-MM-DD, got {0:?}")]
    Format(String),
    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    OutOfRange { year: i64, month: u32, day: u32 },
}

/// A calendar day, stored as days since 1970-01-01 (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PuzzleDate(i64);

fn is_leap(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_year(year: i64) -> i64 {
    if is_leap(year) {
        366
    } else {
        365
    }
}

fn month_lengths(year: i64) -> [i64; 12] {
    let february = if is_leap(year) { 29 } else { 28 };
    [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
}

impl PuzzleDate {
    pub fn from_ymd(year: i64, month: u32, day: u32) -> Result<Self, DateError> {
        let out_of_range = DateError::OutOfRange { year, month, day };
        if year < EPOCH_YEAR || !(1..=12).contains(&month) || day == 0 {
            return Err(out_of_range);
        }
        let months = month_lengths(year);
        if i64::from(day) > months[month as usize - 1] {
            return Err(out_of_range);
        }

        let mut days: i64 = (EPOCH_YEAR..year).map(days_in_year).sum();
        days += months[..month as usize - 1].iter().sum::<i64>();
        days += i64::from(day) - 1;
        Ok(Self(days))
    }

    pub fn from_days_since_epoch(days: i64) -> Self {
        Self(days.max(0))
    }

    pub fn days_since_epoch(self) -> i64 {
        self.0
    }

    /// Today's date in UTC
    pub fn today() -> Self {
        let days = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() / SECONDS_PER_DAY)
            .unwrap_or(0);
        Self(days as i64)
    }

    /// `(year, month, day)`
    pub fn ymd(self) -> (i64, u32, u32) {
        let mut days = self.0;
        let mut year = EPOCH_YEAR;
        while days >= days_in_year(year) {
            days -= days_in_year(year);
            year += 1;
        }

        let mut month = 1;
        for length in month_lengths(year) {
            if days < length {
                break;
            }
            days -= length;
            month += 1;
        }
        (year, month, days as u32 + 1)
    }

    /// The date `days` earlier, never before 1970-01-01
    pub fn minus_days(self, days: u32) -> Self {
        Self::from_days_since_epoch(self.0 - i64::from(days))
    }

    pub fn plus_days(self, days: u32) -> Self {
        Self(self.0 + i64::from(days))
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.ymd();
        write!(f, "{:04}-{:02}-{:02}", year, month, day)
    }
}

impl FromStr for PuzzleDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || DateError::Format(s.to_string());
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(format_error());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(format_error());
        }
        let year = year.parse().map_err(|_| format_error())?;
        let month = month.parse().map_err(|_| format_error())?;
        let day = day.parse().map_err(|_| format_error())?;
        Self::from_ymd(year, month, day)
    }
}

impl TryFrom<String> for PuzzleDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PuzzleDate> for String {
    fn from(date: PuzzleDate) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let date = PuzzleDate::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(date.days_since_epoch(), 0);
        assert_eq!(date.to_string(), "1970-01-01");
    }

    #[test]
    fn test_known_dates() {
        // 2000-03-01 follows a leap day in a year divisible by 400
        let date = PuzzleDate::from_ymd(2000, 3, 1).unwrap();
        assert_eq!(date.days_since_epoch(), 11_017);
        assert_eq!(date.ymd(), (2000, 3, 1));

        let date: PuzzleDate = "2024-02-29".parse().unwrap();
        assert_eq!(date.days_since_epoch(), 19_782);
        assert_eq!(date.plus_days(1).to_string(), "2024-03-01");
    }

    #[test]
    fn test_minus_days_crosses_year() {
        let date: PuzzleDate = "2025-01-05".parse().unwrap();
        assert_eq!(date.minus_days(14).to_string(), "2024-12-22");
        assert_eq!(PuzzleDate::from_days_since_epoch(3).minus_days(10).days_since_epoch(), 0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!("2023-02-29".parse::<PuzzleDate>(), Err(DateError::OutOfRange { .. })));
        assert!(matches!("2023-13-01".parse::<PuzzleDate>(), Err(DateError::OutOfRange { .. })));
        assert!(matches!("1969-12-31".parse::<PuzzleDate>(), Err(DateError::OutOfRange { .. })));
        assert!(matches!("2023-1-01".parse::<PuzzleDate>(), Err(DateError::Format(_))));
        assert!(matches!("yesterday".parse::<PuzzleDate>(), Err(DateError::Format(_))));
    }

    #[test]
    fn test_display_round_trips_every_day_of_a_leap_year() {
        let start = PuzzleDate::from_ymd(2024, 1, 1).unwrap();
        for offset in 0..366 {
            let date = start.plus_days(offset);
            assert_eq!(date.to_string().parse::<PuzzleDate>(), Ok(date));
        }
        assert_eq!(start.plus_days(366).to_string(), "2025-01-01");
    }

    #[test]
    fn test_serde_as_string() {
        let date = PuzzleDate::from_ymd(2024, 6, 9).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-06-09\"");
        let back: PuzzleDate = serde_json::from_str("\"2024-06-09\"").unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<PuzzleDate>("\"June 9\"").is_err());
    }

    #[test]
    fn test_today_is_after_2020() {
        assert!(PuzzleDate::today() > PuzzleDate::from_ymd(2020, 1, 1).unwrap());
    }
}
