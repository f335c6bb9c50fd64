use super::models::{Employee, EmploymentStatus, RequestStatus, Role, TimeOffRequest};
use crate::components::availability::WeeklyAvailability;
use crate::error::ValidationReport;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE: Regex = Regex::new(r"^\+?[0-9\s\-()]+$").unwrap();
    static ref ISO_DATE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
}

const REASON_MIN: usize = 10;
const REASON_MAX: usize = 500;

/// Details typed into the "add employee" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: EmploymentStatus,
    pub role: Role,
}

impl NewEmployee {
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::new();

        if self.name.chars().count() < 2 {
            report.push("name", t!("employee_name_too_short"));
        }
        if !EMAIL.is_match(&self.email) {
            report.push("email", t!("employee_email_invalid"));
        }
        if !PHONE.is_match(&self.phone) {
            report.push("phone", t!("employee_phone_invalid"));
        }

        report.into_result()
    }

    /// Validate and turn into a roster entry with no availability yet
    pub fn into_employee(self, id: u32) -> Result<Employee, ValidationReport> {
        self.validate()?;
        Ok(Employee {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            status: self.status,
            role: self.role,
            availability: WeeklyAvailability::unavailable(),
            requests: Vec::new(),
        })
    }
}

/// Details typed into the "request time off" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequest {
    /// First day off, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day off, `YYYY-MM-DD`
    pub end_date: String,
    pub reason: String,
}

impl NewRequest {
    fn parse_date(text: &str) -> Option<NaiveDate> {
        if !ISO_DATE.is_match(text) {
            return None;
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
    }

    /// Check the form and build a pending request from it
    pub fn into_request(self) -> Result<TimeOffRequest, ValidationReport> {
        let mut report = ValidationReport::new();

        let start = Self::parse_date(&self.start_date);
        if start.is_none() {
            report.push("start_date", t!("request_date_invalid"));
        }
        let end = Self::parse_date(&self.end_date);
        if end.is_none() {
            report.push("end_date", t!("request_date_invalid"));
        }

        let reason_len = self.reason.chars().count();
        if reason_len < REASON_MIN {
            report.push("reason", t!("request_reason_too_short"));
        } else if reason_len > REASON_MAX {
            report.push("reason", t!("request_reason_too_long"));
        }

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                report.push("end_date", t!("request_end_before_start"));
            }
        }

        match (start, end) {
            (Some(start), Some(end)) if report.is_empty() => Ok(TimeOffRequest {
                date: date_label(start, end),
                reason: self.reason,
                status: RequestStatus::Pending,
            }),
            _ => Err(report),
        }
    }
}

/// Short label for a request, e.g. `"Nov 25"` or `"Nov 23 - Nov 24"`
fn date_label(start: NaiveDate, end: NaiveDate) -> String {
    let start_label = start.format("%b %-d").to_string();
    if start == end {
        start_label
    } else {
        format!("{} - {}", start_label, end.format("%b %-d"))
    }
}
