use miette::{Diagnostic, Result};
use rust_i18n::t;
use std::fmt;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(rosterline::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(rosterline::config))]
    Config(String),

    #[error("{0}")]
    #[diagnostic(
        code(rosterline::validation),
        help("Nothing was saved; correct the listed fields and save again")
    )]
    Validation(ValidationReport),

    #[error("Invalid time: {0}")]
    #[diagnostic(code(rosterline::invalid_time))]
    InvalidTime(String),

    #[error("Unknown weekday: {0}")]
    #[diagnostic(code(rosterline::unknown_weekday))]
    UnknownWeekday(String),

    #[error("Roster error: {0}")]
    #[diagnostic(code(rosterline::roster))]
    Roster(String),

    #[error(transparent)]
    #[diagnostic(code(rosterline::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(rosterline::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(rosterline::other))]
    Other(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<ValidationReport> for Error {
    fn from(report: ValidationReport) -> Self {
        Error::Validation(report)
    }
}

/// Type alias for Result with our Error type
pub type BoardResult<T> = Result<T, Error>;

/// A single rejected field in a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Which field was rejected, e.g. `"Monday start time"` or `"email"`
    pub field: String,
    /// Human readable message shown to the user
    pub message: String,
}

/// Every problem found in a form, reported together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected field
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Messages in the order they were recorded
    pub fn messages(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.message.as_str()).collect()
    }

    /// `Ok(())` when nothing was recorded, otherwise the report itself
    pub fn into_result(self) -> std::result::Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", t!("validation_header"))?;
        for issue in &self.issues {
            write!(f, "\n{}", issue.message)?;
        }
        Ok(())
    }
}

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create roster errors
pub fn roster_error(message: &str) -> Error {
    Error::Roster(message.to_string())
}
