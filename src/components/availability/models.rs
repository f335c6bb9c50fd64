use super::codec::{self, NOT_AVAILABLE};
use crate::utils::{ClockTime, Period, Weekday};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Free-typed time fields for one day while it is being edited
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeInput {
    pub start_time: String,
    pub start_period: Period,
    pub end_time: String,
    pub end_period: Period,
}

impl TimeInput {
    /// Both times empty, both periods AM
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.start_time.is_empty() && self.end_time.is_empty()
    }
}

/// Editing state for one day: the typed times plus the off-day toggle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayEdit {
    pub input: TimeInput,
    pub off_day: bool,
}

impl DayEdit {
    pub fn off() -> Self {
        Self {
            input: TimeInput::cleared(),
            off_day: true,
        }
    }
}

/// Which half of a time range a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Start,
    End,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Start => "start",
            Field::End => "end",
        }
    }
}

/// A fully valid availability entry for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAvailability {
    Unavailable,
    TimeRange { start: ClockTime, end: ClockTime },
}

impl DayAvailability {
    /// Strictly parse a stored availability string.
    ///
    /// Only `"Not Available"` and complete two-sided ranges with in-range
    /// times are accepted. Partial ranges and free text give `None`.
    pub fn parse(human: &str) -> Option<Self> {
        if codec::is_off(human) {
            return Some(DayAvailability::Unavailable);
        }
        let (start, start_period, end, end_period) = codec::match_range(human)?;
        let start = ClockTime::parse(&start, start_period).ok()?;
        let end = ClockTime::parse(&end, end_period).ok()?;
        Some(DayAvailability::TimeRange { start, end })
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DayAvailability::TimeRange { .. })
    }

    /// Length of the range, wrapping past midnight when the end is earlier
    /// than the start (e.g. `5:00 PM - 1:00 AM` is eight hours)
    pub fn duration(&self) -> Duration {
        match self {
            DayAvailability::Unavailable => Duration::zero(),
            DayAvailability::TimeRange { start, end } => {
                let span = end.to_naive_time() - start.to_naive_time();
                if span < Duration::zero() {
                    span + Duration::days(1)
                } else {
                    span
                }
            }
        }
    }
}

impl fmt::Display for DayAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayAvailability::Unavailable => f.write_str(NOT_AVAILABLE),
            DayAvailability::TimeRange { start, end } => write!(f, "{} - {}", start, end),
        }
    }
}

/// Availability strings for the whole week, keyed by day.
///
/// Days without an entry read as `"Not Available"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyAvailability(BTreeMap<Weekday, String>);

impl WeeklyAvailability {
    /// Every day set to `"Not Available"`
    pub fn unavailable() -> Self {
        Self(
            Weekday::ALL
                .iter()
                .map(|day| (*day, NOT_AVAILABLE.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, day: Weekday) -> &str {
        self.0.get(&day).map(String::as_str).unwrap_or(NOT_AVAILABLE)
    }

    pub fn set(&mut self, day: Weekday, value: impl Into<String>) {
        self.0.insert(day, value.into());
    }

    /// All seven days in week order
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &str)> + '_ {
        Weekday::ALL.iter().map(move |day| (*day, self.get(*day)))
    }

    /// Strongly-typed view of one day, `None` if the stored text is not a
    /// complete range
    pub fn structured(&self, day: Weekday) -> Option<DayAvailability> {
        DayAvailability::parse(self.get(day))
    }

    /// Number of days with anything other than `"Not Available"`
    pub fn available_days(&self) -> usize {
        self.iter().filter(|(_, value)| !codec::is_off(value)).count()
    }
}

impl<S: Into<String>> FromIterator<(Weekday, S)> for WeeklyAvailability {
    fn from_iter<I: IntoIterator<Item = (Weekday, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(day, s)| (day, s.into())).collect())
    }
}
