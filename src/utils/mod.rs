pub mod time;
pub mod weekday;

pub use time::{is_valid_time_fragment, sanitize_time_input, ClockTime, Period};
pub use weekday::Weekday;
