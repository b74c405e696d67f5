use crate::error::{CyclopsError, Result};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A plain calendar day with no time zone attached.
///
/// Field order matters: the derived `Ord` compares year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CyclopsError::OutOfRange(format!(
                "year {year} must be between {MIN_YEAR} and {MAX_YEAR}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(CyclopsError::OutOfRange(format!(
                "month {month} must be between 1 and 12"
            )));
        }
        let last = days_in_month(month, year);
        if !(1..=last).contains(&day) {
            return Err(CyclopsError::OutOfRange(format!(
                "day {day} must be between 1 and {last} for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Parse a strict `YYYY-MM-DD` string.
    pub fn parse(input: &str) -> Result<Self> {
        let bytes = input.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shape_ok {
            return Err(CyclopsError::InvalidFormat(input.to_string()));
        }

        let field = |range: std::ops::Range<usize>| {
            input[range]
                .parse::<u32>()
                .map_err(|_| CyclopsError::InvalidFormat(input.to_string()))
        };
        let year = field(0..4)? as i32;
        let month = field(5..7)?;
        let day = field(8..10)?;

        Self::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The following calendar day, rolling over month and year boundaries.
    pub fn next(&self) -> Self {
        let mut next = *self;
        next.day += 1;
        if next.day > days_in_month(next.month, next.year) {
            next.day = 1;
            next.month += 1;
            if next.month > 12 {
                next.month = 1;
                next.year += 1;
            }
        }
        next
    }

    pub fn compare(&self, other: &Date) -> Ordering {
        self.cmp(other)
    }

    /// Number of days from `self` through `end`, both ends included. Zero if `end` is earlier.
    pub fn days_until_inclusive(&self, end: &Date) -> u64 {
        match (self.to_naive(), end.to_naive()) {
            (Some(a), Some(b)) if a <= b => (b - a).num_days() as u64 + 1,
            _ => 0,
        }
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Iterate from `self` to `end` inclusive.
    pub fn through(self, end: Date) -> DateIter {
        DateIter {
            current: Some(self),
            end,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

pub struct DateIter {
    current: Option<Date>,
    end: Date,
}

impl Iterator for DateIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.current.take()?;
        if current > self.end {
            return None;
        }
        if current < self.end {
            self.current = Some(current.next());
        }
        Some(current)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Month length for `month` in 1..=12.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    DAYS_PER_MONTH[(month as usize).saturating_sub(1).min(11)]
}
