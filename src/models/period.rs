use chrono::{Datelike, NaiveDateTime};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::models::errors::PeriodError;

/// A calendar month. Category breakdowns are scoped to exactly one period;
/// there is no rolling window.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Period {
    year: i32,
    month: u32
}

impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month))
        }

        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDateTime) -> Self {
        Self {
            year: date.year(),
            month: date.month()
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn contains(&self, date: NaiveDateTime) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }
}

impl Display for Period {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let invalid = || PeriodError::InvalidFormat(value.to_string());

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;

        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid())
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Period::new(month, year)
    }
}
