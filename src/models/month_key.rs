use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation key combining month and year, ignoring the day.
///
/// Field order matters: `year` before `month` makes the derived `Ord`
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(month: u32, year: i32) -> Self {
        Self { year, month }
    }

    /// Parse from a date in MM/DD/YYYY format, keeping only month and year.
    /// Accepts unpadded months and days ("1/5/2021"). Returns `None` for
    /// anything that is not a real calendar date.
    pub fn from_date_str(date: &str) -> Option<Self> {
        let parsed = NaiveDate::parse_from_str(date.trim(), "%m/%d/%Y").ok()?;
        Some(Self {
            year: parsed.year(),
            month: parsed.month(),
        })
    }

    /// Label used in the report file: MM-YYYY.
    pub fn output_label(&self) -> String {
        format!("{:02}-{:04}", self.month, self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}
