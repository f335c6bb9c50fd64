use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the scheduling week, in fixed Monday-first order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in cycle order
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the cycle, 0 for Monday through 6 for Sunday
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at `index` in the cycle, wrapping past Sunday
    pub fn from_index(index: usize) -> Weekday {
        Self::ALL[index % 7]
    }

    /// Day `days` positions later in the cycle
    pub fn advance(self, days: usize) -> Weekday {
        Self::from_index(self.index() + days % 7)
    }

    /// Full English name, as used for roster keys
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            "saturday" | "sat" => Ok(Weekday::Saturday),
            "sunday" | "sun" => Ok(Weekday::Sunday),
            _ => Err(Error::UnknownWeekday(s.to_string())),
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::from_index(day.num_days_from_monday() as usize)
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(Weekday::from_index(i), *day);
        }
        assert_eq!(Weekday::from_index(7), Weekday::Monday);
        assert_eq!(Weekday::from_index(13), Weekday::Sunday);
    }

    #[test]
    fn test_advance_wraps() {
        assert_eq!(Weekday::Monday.advance(6), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.advance(1), Weekday::Monday);
        assert_eq!(Weekday::Friday.advance(7), Weekday::Friday);
        assert_eq!(Weekday::Wednesday.advance(20), Weekday::Tuesday);
        assert_eq!(Weekday::Wednesday.advance(19), Weekday::Monday);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("sat".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert_eq!(" SUNDAY ".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_chrono_conversion() {
        for day in Weekday::ALL {
            let chrono_day: chrono::Weekday = day.into();
            assert_eq!(Weekday::from(chrono_day), day);
        }
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }

    #[test]
    fn test_serde_uses_full_name() {
        let json = serde_json::to_string(&Weekday::Thursday).unwrap();
        assert_eq!(json, "\"Thursday\"");
        let day: Weekday = serde_json::from_str("\"Tuesday\"").unwrap();
        assert_eq!(day, Weekday::Tuesday);
    }
}
