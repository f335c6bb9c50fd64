use super::models::{DayEdit, TimeInput};
use crate::utils::Period;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Stored text for a day with no availability
pub const NOT_AVAILABLE: &str = "Not Available";

lazy_static! {
    static ref TIME_RANGE: Regex = Regex::new(
        r"(?i)^\s*([0-9]{1,2}:[0-9]{2})\s*(AM|PM)\s*-\s*([0-9]{1,2}:[0-9]{2})\s*(AM|PM)\s*$"
    )
    .unwrap();
    static ref SINGLE_TIME: Regex =
        Regex::new(r"(?i)^\s*([0-9]{1,2}:[0-9]{2})\s*(AM|PM)\s*$").unwrap();
}

/// Whether a stored availability string marks an off day
pub fn is_off(human: &str) -> bool {
    human == NOT_AVAILABLE
}

/// Split a two-sided range into (start, start period, end, end period).
///
/// Only checks the shape; `13:75` passes here and is rejected later by
/// fragment validation.
pub(crate) fn match_range(human: &str) -> Option<(String, Period, String, Period)> {
    let caps = TIME_RANGE.captures(human)?;
    let start_period = caps[2].parse::<Period>().ok()?;
    let end_period = caps[4].parse::<Period>().ok()?;
    Some((
        caps[1].to_string(),
        start_period,
        caps[3].to_string(),
        end_period,
    ))
}

/// Turn a stored availability string into editable fields.
///
/// Never fails. Text that is neither `"Not Available"` nor a two-sided
/// range is kept whole in the start field so it can be fixed by hand.
pub fn decode(human: &str) -> DayEdit {
    if is_off(human) {
        return DayEdit::off();
    }

    if let Some((start_time, start_period, end_time, end_period)) = match_range(human) {
        return DayEdit {
            input: TimeInput {
                start_time,
                start_period,
                end_time,
                end_period,
            },
            off_day: false,
        };
    }

    // One-sided values written by `encode` come back as a start time
    if let Some(caps) = SINGLE_TIME.captures(human) {
        if let Ok(start_period) = caps[2].parse::<Period>() {
            return DayEdit {
                input: TimeInput {
                    start_time: caps[1].to_string(),
                    start_period,
                    end_time: String::new(),
                    end_period: Period::Am,
                },
                off_day: false,
            };
        }
    }

    debug!("Availability '{}' is not a time range, keeping it as start text", human);
    DayEdit {
        input: TimeInput {
            start_time: human.to_string(),
            start_period: Period::Am,
            end_time: String::new(),
            end_period: Period::Am,
        },
        off_day: false,
    }
}

/// Turn edited fields back into the stored availability string.
///
/// The off-day flag wins over any typed times. Fragments are written as-is;
/// run them through [`crate::utils::is_valid_time_fragment`] first.
pub fn encode(input: &TimeInput, off_day: bool) -> String {
    if off_day {
        return NOT_AVAILABLE.to_string();
    }

    match (input.start_time.is_empty(), input.end_time.is_empty()) {
        (false, false) => format!(
            "{} {} - {} {}",
            input.start_time, input.start_period, input.end_time, input.end_period
        ),
        (false, true) => format!("{} {}", input.start_time, input.start_period),
        (true, false) => format!("{} {}", input.end_time, input.end_period),
        (true, true) => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start: &str, sp: Period, end: &str, ep: Period) -> TimeInput {
        TimeInput {
            start_time: start.to_string(),
            start_period: sp,
            end_time: end.to_string(),
            end_period: ep,
        }
    }

    #[test]
    fn test_decode_not_available() {
        let edit = decode("Not Available");
        assert!(edit.off_day);
        assert_eq!(edit.input, TimeInput::cleared());
    }

    #[test]
    fn test_decode_range() {
        let edit = decode("9:00 AM - 5:00 PM");
        assert!(!edit.off_day);
        assert_eq!(edit.input, input("9:00", Period::Am, "5:00", Period::Pm));

        let edit = decode("11:30 PM - 12:00 AM");
        assert_eq!(edit.input, input("11:30", Period::Pm, "12:00", Period::Am));
    }

    #[test]
    fn test_decode_loose_spacing_and_case() {
        let edit = decode("  9:00am-5:00 pm ");
        assert!(!edit.off_day);
        assert_eq!(edit.input, input("9:00", Period::Am, "5:00", Period::Pm));
    }

    #[test]
    fn test_decode_keeps_out_of_range_text_verbatim() {
        // Shape matches, so the fields are filled even though 13:00 is invalid
        let edit = decode("13:00 AM - 5:00 PM");
        assert_eq!(edit.input.start_time, "13:00");
        assert_eq!(edit.input.end_time, "5:00");
    }

    #[test]
    fn test_decode_fallback() {
        for text in ["Mornings only", "", "not available", "9 - 5", "9:00 AM -"] {
            let edit = decode(text);
            assert!(!edit.off_day, "{:?} should not be an off day", text);
            assert_eq!(edit.input.start_time, text);
            assert_eq!(edit.input.start_period, Period::Am);
            assert_eq!(edit.input.end_time, "");
            assert_eq!(edit.input.end_period, Period::Am);
        }
    }

    #[test]
    fn test_encode_off_day_wins() {
        let filled = input("9:00", Period::Am, "5:00", Period::Pm);
        assert_eq!(encode(&filled, true), "Not Available");
        assert_eq!(encode(&TimeInput::cleared(), true), "Not Available");
    }

    #[test]
    fn test_encode_full_and_partial() {
        assert_eq!(
            encode(&input("9:00", Period::Am, "5:00", Period::Pm), false),
            "9:00 AM - 5:00 PM"
        );
        assert_eq!(encode(&input("9:00", Period::Am, "", Period::Pm), false), "9:00 AM");
        assert_eq!(encode(&input("", Period::Am, "5:00", Period::Pm), false), "5:00 PM");
        assert_eq!(encode(&input("", Period::Pm, "", Period::Pm), false), "Not Available");
    }

    #[test]
    fn test_round_trip() {
        for s in [
            "9:00 AM - 5:00 PM",
            "Not Available",
            "5:00 PM - 1:00 AM",
            "12:00 PM - 8:00 PM",
            "5:00 PM - 9:00 AM",
        ] {
            let edit = decode(s);
            assert_eq!(encode(&edit.input, is_off(s)), s);
        }
    }

    #[test]
    fn test_round_trip_normalizes() {
        let s = "9:00   am -  5:00 pm";
        let edit = decode(s);
        assert_eq!(encode(&edit.input, is_off(s)), "9:00 AM - 5:00 PM");
    }

    #[test]
    fn test_decode_single_time() {
        let edit = decode("5:00 pm");
        assert!(!edit.off_day);
        assert_eq!(edit.input, input("5:00", Period::Pm, "", Period::Am));
    }

    #[test]
    fn test_partial_output_round_trips() {
        for stored in [
            encode(&input("9:00", Period::Pm, "", Period::Am), false),
            encode(&input("", Period::Am, "5:00", Period::Pm), false),
        ] {
            let edit = decode(&stored);
            assert_eq!(encode(&edit.input, is_off(&stored)), stored);
        }
    }
}
