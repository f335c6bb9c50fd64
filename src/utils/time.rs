use crate::error::{BoardResult, Error};
use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// 12-hour clock fragment: 1:00 through 12:59, no leading zero on the hour
    static ref TIME_FRAGMENT: Regex = Regex::new(r"^(1[0-2]|[1-9]):([0-5][0-9])$").unwrap();
}

/// Check a typed start or end time such as `9:30`.
///
/// An empty fragment counts as valid, it just hasn't been filled in yet.
/// The AM/PM period is not part of the fragment and isn't checked here.
pub fn is_valid_time_fragment(text: &str) -> bool {
    text.is_empty() || TIME_FRAGMENT.is_match(text)
}

/// Drop everything but digits and colons from live keyboard input
pub fn sanitize_time_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == ':')
        .collect()
}

/// Parse time string in HH:MM 24-hour format
pub fn parse_24h(time_str: &str) -> Option<NaiveTime> {
    let (hour, minute) = time_str.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.chars().chain(minute.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hour = hour.parse::<u32>().ok()?;
    let minute = minute.parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Half of the day on a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Period::Am),
            "PM" => Ok(Period::Pm),
            _ => Err(Error::InvalidTime(format!("unknown period '{}'", s))),
        }
    }
}

/// A validated time of day on the 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    period: Period,
}

impl ClockTime {
    /// Build a time from its parts; hour must be 1-12 and minute 0-59
    pub fn new(hour: u8, minute: u8, period: Period) -> BoardResult<Self> {
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(Error::InvalidTime(format!(
                "{}:{:02} {} is outside 1:00-12:59",
                hour, minute, period
            )));
        }
        Ok(Self {
            hour,
            minute,
            period,
        })
    }

    /// Parse a fragment like `9:30` together with its period
    pub fn parse(fragment: &str, period: Period) -> BoardResult<Self> {
        let caps = TIME_FRAGMENT
            .captures(fragment)
            .ok_or_else(|| Error::InvalidTime(format!("'{}' is not in format 1:00-12:59", fragment)))?;
        let hour = caps[1]
            .parse::<u8>()
            .map_err(|e| Error::InvalidTime(e.to_string()))?;
        let minute = caps[2]
            .parse::<u8>()
            .map_err(|e| Error::InvalidTime(e.to_string()))?;
        Self::new(hour, minute, period)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Same time on the 24-hour clock; 12 AM is midnight, 12 PM is noon
    pub fn to_naive_time(&self) -> NaiveTime {
        let hour = match (self.hour, self.period) {
            (12, Period::Am) => 0,
            (12, Period::Pm) => 12,
            (h, Period::Am) => h,
            (h, Period::Pm) => h + 12,
        };
        NaiveTime::from_hms_opt(hour as u32, self.minute as u32, 0).unwrap_or_default()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.period)
    }
}
