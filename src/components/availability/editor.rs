use super::codec::{decode, encode};
use super::models::{DayEdit, Field, TimeInput, WeeklyAvailability};
use crate::error::{BoardResult, ValidationReport};
use crate::utils::{is_valid_time_fragment, sanitize_time_input, Period, Weekday};
use rust_i18n::t;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Edit buffer for one employee's weekly availability.
///
/// Opened from the stored strings, changed field by field, then either
/// committed back in one go or dropped with [`AvailabilityEditor::cancel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityEditor {
    days: BTreeMap<Weekday, DayEdit>,
}

impl AvailabilityEditor {
    /// Decode every day of the stored availability into editable fields
    pub fn open(availability: &WeeklyAvailability) -> Self {
        let days = availability
            .iter()
            .map(|(day, human)| (day, decode(human)))
            .collect();
        Self { days }
    }

    pub fn day(&self, day: Weekday) -> &DayEdit {
        // `open` fills all seven days and nothing removes them
        &self.days[&day]
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DayEdit {
        self.days.entry(day).or_default()
    }

    /// Store typed text for a start or end time, keeping only digits and colons
    pub fn set_time(&mut self, day: Weekday, field: Field, raw: &str) {
        let value = sanitize_time_input(raw);
        let input = &mut self.day_mut(day).input;
        match field {
            Field::Start => input.start_time = value,
            Field::End => input.end_time = value,
        }
    }

    pub fn set_period(&mut self, day: Weekday, field: Field, period: Period) {
        let input = &mut self.day_mut(day).input;
        match field {
            Field::Start => input.start_period = period,
            Field::End => input.end_period = period,
        }
    }

    /// Toggle the off-day flag; turning it on clears the typed times
    pub fn set_off_day(&mut self, day: Weekday, off: bool) {
        let edit = self.day_mut(day);
        edit.off_day = off;
        if off {
            edit.input = TimeInput::cleared();
        }
    }

    /// Check every working day's start and end text.
    ///
    /// Off days are skipped. All problems are collected, in week order.
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::new();
        for day in Weekday::ALL {
            let edit = self.day(day);
            if edit.off_day {
                continue;
            }
            for (field, text) in [
                (Field::Start, &edit.input.start_time),
                (Field::End, &edit.input.end_time),
            ] {
                if !is_valid_time_fragment(text) {
                    report.push(
                        format!("{} {} time", day, field.label()),
                        t!("availability_time_format", day = day.name(), field = field.label()),
                    );
                }
            }
        }
        report.into_result()
    }

    /// Encode all seven days into `target`.
    ///
    /// Nothing is written unless every day passes validation.
    pub fn commit(&self, target: &mut WeeklyAvailability) -> BoardResult<()> {
        if let Err(report) = self.validate() {
            warn!("Rejected availability save with {} error(s)", report.len());
            return Err(report.into());
        }

        for (day, edit) in &self.days {
            target.set(*day, encode(&edit.input, edit.off_day));
        }
        info!(
            "Saved availability for {} working day(s)",
            target.available_days()
        );
        Ok(())
    }

    /// Throw away all pending edits
    pub fn cancel(self) {}
}
