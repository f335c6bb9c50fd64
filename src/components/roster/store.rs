use super::models::Employee;
use crate::error::{roster_error, BoardResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

/// Storage for roster entries, keyed by employee id
#[async_trait]
pub trait RosterStore: Send + Sync + 'static {
    /// Get an employee by id
    async fn get_employee(&self, id: u32) -> BoardResult<Option<Employee>>;

    /// All employees, ordered by id
    async fn list_employees(&self) -> BoardResult<Vec<Employee>>;

    /// Insert or replace an employee
    async fn upsert_employee(&self, employee: Employee) -> BoardResult<()>;

    /// Remove an employee, returning whether it existed
    async fn remove_employee(&self, id: u32) -> BoardResult<bool>;
}

/// Shape of a roster TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Roster kept in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    employees: RwLock<BTreeMap<u32, Employee>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the roster, later duplicates of an id replace earlier ones
    pub fn from_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let employees = employees.into_iter().map(|e| (e.id, e)).collect();
        Self {
            employees: RwLock::new(employees),
        }
    }

    /// Parse a roster from TOML text
    pub fn from_toml(content: &str) -> BoardResult<Self> {
        let file: RosterFile = toml::from_str(content)?;
        Ok(Self::from_employees(file.employees))
    }

    /// Load a roster from a TOML file
    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            roster_error(&format!("Failed to read roster {}: {}", path.display(), e))
        })?;
        let roster = Self::from_toml(&content)?;
        info!("Loaded roster from {}", path.display());
        Ok(roster)
    }
}

#[async_trait]
impl RosterStore for InMemoryRoster {
    async fn get_employee(&self, id: u32) -> BoardResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.get(&id).cloned())
    }

    async fn list_employees(&self) -> BoardResult<Vec<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.values().cloned().collect())
    }

    async fn upsert_employee(&self, employee: Employee) -> BoardResult<()> {
        let mut employees = self.employees.write().await;
        employees.insert(employee.id, employee);
        Ok(())
    }

    async fn remove_employee(&self, id: u32) -> BoardResult<bool> {
        let mut employees = self.employees.write().await;
        Ok(employees.remove(&id).is_some())
    }
}
