use std::{collections::HashMap, fmt};

use chrono::{Datelike as _, NaiveDate};

/// Summed measure per group key, before ranking.
pub type Aggregates = HashMap<String, f64>;

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct RankedGroup {
    pub key: String,
    pub value: f64,
}

/// Calendar month, ordered chronologically. Serialized as 'YYYY-MM'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct MonthlyPoint {
    pub month: YearMonth,
    pub value: f64,
}

// --

impl RankedGroup {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl serde::Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
