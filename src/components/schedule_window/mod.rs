use crate::utils::Weekday;
use chrono::{Datelike, Duration, NaiveDate};
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Last day of the 7-day cycle that begins on `start`
pub fn end_day_for(start: Weekday) -> Weekday {
    start.advance(6)
}

/// Whether `start`..=`end` covers exactly seven consecutive days
pub fn is_valid_window(start: Weekday, end: Weekday) -> bool {
    end == end_day_for(start)
}

/// Outcome of checking a window; a mismatch is a warning, not an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStatus {
    Confirmed,
    Mismatch { expected_end: Weekday },
}

/// Start and end day of the scheduling week.
///
/// The two days can be picked independently, so an invalid window is a
/// legal value that gets reported through [`ScheduleWindow::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    pub start_day: Weekday,
    pub end_day: Weekday,
}

impl Default for ScheduleWindow {
    fn default() -> Self {
        Self::starting(Weekday::Monday)
    }
}

impl ScheduleWindow {
    /// Any pair of days, valid or not
    pub fn new(start_day: Weekday, end_day: Weekday) -> Self {
        Self { start_day, end_day }
    }

    /// Seven-day window beginning on `start_day`
    pub fn starting(start_day: Weekday) -> Self {
        Self::new(start_day, end_day_for(start_day))
    }

    /// Change the start day and move the end day along with it
    pub fn set_start_day(&mut self, day: Weekday) {
        self.start_day = day;
        self.end_day = end_day_for(day);
    }

    /// Change only the end day; a mismatch is logged but kept
    pub fn set_end_day(&mut self, day: Weekday) {
        self.end_day = day;
        if let WindowStatus::Mismatch { expected_end } = self.status() {
            warn!(
                "Schedule window {} is not 7 days, expected it to end on {}",
                self, expected_end
            );
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_window(self.start_day, self.end_day)
    }

    pub fn status(&self) -> WindowStatus {
        if self.is_valid() {
            WindowStatus::Confirmed
        } else {
            WindowStatus::Mismatch {
                expected_end: end_day_for(self.start_day),
            }
        }
    }

    /// Confirmation or warning line for display next to the window
    pub fn status_message(&self) -> String {
        let window = self.to_string();
        match self.status() {
            WindowStatus::Confirmed => t!("window_confirmed", window = window).to_string(),
            WindowStatus::Mismatch { expected_end } => t!(
                "window_mismatch",
                window = window,
                expected = expected_end.name()
            )
            .to_string(),
        }
    }

    /// Calendar dates of the cycle containing `date`.
    ///
    /// The range starts on the latest `start_day` on or before `date` and
    /// spans seven days, whatever `end_day` says. `None` when the cycle runs
    /// past the representable calendar.
    pub fn date_range_containing(&self, date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let today = date.weekday().num_days_from_monday() as i64;
        let days_back = (today - self.start_day.index() as i64).rem_euclid(7);

        let start = date.checked_sub_signed(Duration::days(days_back))?;
        let end = start.checked_add_signed(Duration::days(6))?;

        Some((start, end))
    }
}

impl fmt::Display for ScheduleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start_day, self.end_day)
    }
}
