use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::error::ParseError;

/// Time bucket size used when grouping entries by period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    /// Period key for `timestamp`: `2024-01-02`, `2024-W01` (ISO week and
    /// ISO week-year) or `2024-01`. Keys of one granularity sort
    /// chronologically as strings.
    pub fn period_key(self, timestamp: &NaiveDateTime) -> String {
        match self {
            Self::Day => timestamp.format("%Y-%m-%d").to_string(),
            Self::Week => {
                let week = timestamp.iso_week();
                format!("{:04}-W{:02}", week.year(), week.week())
            }
            Self::Month => timestamp.format("%Y-%m").to_string(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        };
        f.write_str(s)
    }
}

impl FromStr for Granularity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(ParseError::UnknownGranularity(s.to_string())),
        }
    }
}
