//! Restaurant configuration: opening hours, roles, staffing levels and the
//! scheduling week.

use crate::components::roster::Role;
use crate::components::schedule_window::ScheduleWindow;
use crate::error::{config_error, BoardResult, ValidationReport};
use crate::utils::time::parse_24h;
use crate::utils::Weekday;
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Opening hours for one day, times in 24-hour `HH:MM`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub day: Weekday,
    pub open_time: String,
    pub close_time: String,
    #[serde(default)]
    pub is_closed: bool,
}

/// Part of the day a staffing requirement applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftWave {
    Open,
    Mid,
    Closing,
}

/// How many people of a role are needed for one shift wave on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRequirement {
    pub role: Role,
    pub day: Weekday,
    pub shift_wave: ShiftWave,
    pub required_count: u32,
}

/// Settings from the restaurant configuration panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    #[serde(default)]
    pub schedule_window: ScheduleWindow,
    #[serde(default)]
    pub operating_hours: Vec<OperatingHours>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub staffing_requirements: Vec<StaffingRequirement>,
}

impl RestaurantConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> BoardResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            config_error(&format!(
                "Failed to read restaurant config {}: {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml(&content)?;
        info!("Loaded restaurant config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Hours for a given day, if configured
    pub fn hours_for(&self, day: Weekday) -> Option<&OperatingHours> {
        self.operating_hours.iter().find(|h| h.day == day)
    }

    /// Check the configuration and collect every problem.
    ///
    /// The schedule window is only advisory and is not checked here; see
    /// [`ScheduleWindow::status`].
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::new();

        if self.name.chars().count() < 2 {
            report.push("name", t!("restaurant_name_too_short"));
        }

        if self.operating_hours.len() != 7 {
            report.push("operating_hours", t!("restaurant_hours_count"));
        }
        for day in Weekday::ALL {
            match self.hours_for(day) {
                None => report.push(
                    "operating_hours",
                    t!("restaurant_hours_missing_day", day = day.name()),
                ),
                Some(hours) if !hours.is_closed => {
                    for (field, text) in [("open", &hours.open_time), ("close", &hours.close_time)] {
                        if parse_24h(text).is_none() {
                            report.push(
                                format!("{} {} time", day, field),
                                t!("restaurant_hours_invalid", day = day.name(), field = field),
                            );
                        }
                    }
                }
                Some(_) => {}
            }
        }

        if self.roles.is_empty() {
            report.push("roles", t!("restaurant_roles_required"));
        }
        for role in &self.roles {
            if role.name().chars().count() < 2 {
                report.push("roles", t!("restaurant_role_name_too_short"));
            }
        }

        if self.staffing_requirements.is_empty() {
            report.push("staffing_requirements", t!("restaurant_staffing_required"));
        }
        for requirement in &self.staffing_requirements {
            if !self.roles.contains(&requirement.role) {
                report.push(
                    "staffing_requirements",
                    t!(
                        "restaurant_staffing_unknown_role",
                        day = requirement.day.name(),
                        role = requirement.role.name()
                    ),
                );
            }
        }

        report.into_result()
    }

    /// Total people needed on a day across all roles and waves
    pub fn required_staff(&self, day: Weekday) -> u32 {
        self.staffing_requirements
            .iter()
            .filter(|r| r.day == day)
            .map(|r| r.required_count)
            .sum()
    }
}
