use crate::components::availability::WeeklyAvailability;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour pair used to render a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Badge {
    const fn new(background: &'static str, foreground: &'static str) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Grey badge for anything without a colour of its own
    pub const NEUTRAL: Badge = Badge::new("gray-100", "gray-800");
}

/// Job role of an employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Manager,
    Server,
    Cook,
    Bartender,
    Host,
    Dishwasher,
    /// A role name read from stored data that we don't know about
    Other(String),
}

impl Role {
    pub fn name(&self) -> &str {
        match self {
            Role::Manager => "Manager",
            Role::Server => "Server",
            Role::Cook => "Cook",
            Role::Bartender => "Bartender",
            Role::Host => "Host",
            Role::Dishwasher => "Dishwasher",
            Role::Other(name) => name,
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            Role::Manager => Badge::new("purple-100", "purple-800"),
            Role::Server => Badge::new("blue-100", "blue-800"),
            Role::Cook => Badge::new("red-100", "red-800"),
            Role::Bartender => Badge::new("orange-100", "orange-800"),
            Role::Host => Badge::new("green-100", "green-800"),
            Role::Dishwasher => Badge::NEUTRAL,
            Role::Other(_) => Badge::NEUTRAL,
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Manager" => Role::Manager,
            "Server" => Role::Server,
            "Cook" => Role::Cook,
            "Bartender" => Role::Bartender,
            "Host" => Role::Host,
            "Dishwasher" => Role::Dishwasher,
            _ => Role::Other(name),
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::from(name.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.name().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full-time or part-time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[serde(rename = "FT")]
    FullTime,
    #[serde(rename = "PT")]
    PartTime,
}

impl EmploymentStatus {
    pub fn code(self) -> &'static str {
        match self {
            EmploymentStatus::FullTime => "FT",
            EmploymentStatus::PartTime => "PT",
        }
    }

    pub fn badge(self) -> Badge {
        match self {
            EmploymentStatus::FullTime => Badge::new("green-100", "green-800"),
            EmploymentStatus::PartTime => Badge::new("blue-100", "blue-800"),
        }
    }
}

/// Review state of a time-off request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Approved,
    Denied,
    /// Anything unrecognised in stored data is treated as still pending
    #[default]
    #[serde(other)]
    Pending,
}

impl RequestStatus {
    pub fn badge(self) -> Badge {
        match self {
            RequestStatus::Approved => Badge::new("green-100", "green-800"),
            RequestStatus::Denied => Badge::new("red-100", "red-800"),
            RequestStatus::Pending => Badge::new("yellow-100", "yellow-800"),
        }
    }
}

/// A day or range of days an employee asked to have off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// Display label, e.g. `"Nov 25"` or `"Nov 23 - Nov 24"`
    pub date: String,
    pub reason: String,
    #[serde(default)]
    pub status: RequestStatus,
}

/// An employee on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: EmploymentStatus,
    pub role: Role,
    #[serde(default = "WeeklyAvailability::unavailable")]
    pub availability: WeeklyAvailability,
    #[serde(default)]
    pub requests: Vec<TimeOffRequest>,
}

impl Employee {
    /// Requests that still need a decision
    pub fn pending_requests(&self) -> impl Iterator<Item = &TimeOffRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
    }
}
