use crate::error::{env_error, BoardResult};
use crate::utils::Weekday;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default roster file, relative to the working directory
pub const DEFAULT_ROSTER_FILE: &str = "config/roster.toml";
/// Default restaurant configuration file
pub const DEFAULT_RESTAURANT_FILE: &str = "config/restaurant.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the roster seed data is read from
    pub roster_file: PathBuf,
    /// Where the restaurant settings are read from
    pub restaurant_file: PathBuf,
    /// Locale for user-facing messages
    pub locale: String,
    /// First day of the scheduling week when the restaurant file doesn't set one
    pub schedule_start_day: Weekday,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_file: PathBuf::from(DEFAULT_ROSTER_FILE),
            restaurant_file: PathBuf::from(DEFAULT_RESTAURANT_FILE),
            locale: "en".to_string(),
            schedule_start_day: Weekday::Monday,
        }
    }
}

impl Config {
    /// Load configuration from environment, falling back to defaults
    pub fn load() -> BoardResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build a configuration from a variable lookup; unset variables use defaults
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> BoardResult<Self> {
        let defaults = Config::default();

        let roster_file = var("ROSTER_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.roster_file);

        let restaurant_file = var("RESTAURANT_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.restaurant_file);

        let locale = var("BOARD_LOCALE").unwrap_or(defaults.locale);

        let schedule_start_day = match var("SCHEDULE_START_DAY") {
            Some(value) => value
                .parse::<Weekday>()
                .map_err(|_| env_error("SCHEDULE_START_DAY"))?,
            None => defaults.schedule_start_day,
        };

        Ok(Config {
            roster_file,
            restaurant_file,
            locale,
            schedule_start_day,
        })
    }
}
