//! Employee roster: who works here, their availability and time-off requests.

pub mod models;
mod store;
pub mod validation;

pub use models::{Badge, Employee, EmploymentStatus, RequestStatus, Role, TimeOffRequest};
pub use store::{InMemoryRoster, RosterFile, RosterStore};
pub use validation::{NewEmployee, NewRequest};

use crate::components::availability::AvailabilityEditor;
use crate::error::{roster_error, BoardResult};
use tracing::info;

async fn require_employee<S: RosterStore + ?Sized>(store: &S, id: u32) -> BoardResult<Employee> {
    store
        .get_employee(id)
        .await?
        .ok_or_else(|| roster_error(&format!("No employee with id {}", id)))
}

/// Validate a new employee and add them under the next free id
pub async fn add_employee<S: RosterStore + ?Sized>(
    store: &S,
    new_employee: NewEmployee,
) -> BoardResult<Employee> {
    let next_id = store
        .list_employees()
        .await?
        .iter()
        .map(|e| e.id)
        .max()
        .map_or(1, |id| id + 1);

    let employee = new_employee.into_employee(next_id)?;
    store.upsert_employee(employee.clone()).await?;
    info!("Added employee {} ({})", employee.name, employee.id);
    Ok(employee)
}

/// Validate a time-off request and attach it to the employee as pending
pub async fn add_request<S: RosterStore + ?Sized>(
    store: &S,
    employee_id: u32,
    new_request: NewRequest,
) -> BoardResult<TimeOffRequest> {
    let mut employee = require_employee(store, employee_id).await?;
    let request = new_request.into_request()?;
    employee.requests.push(request.clone());
    store.upsert_employee(employee).await?;
    info!("Added time-off request {} for employee {}", request.date, employee_id);
    Ok(request)
}

/// Approve or deny a request by its position in the employee's list
pub async fn set_request_status<S: RosterStore + ?Sized>(
    store: &S,
    employee_id: u32,
    index: usize,
    status: RequestStatus,
) -> BoardResult<()> {
    let mut employee = require_employee(store, employee_id).await?;
    let request = employee.requests.get_mut(index).ok_or_else(|| {
        roster_error(&format!(
            "Employee {} has no request at position {}",
            employee_id, index
        ))
    })?;
    request.status = status;
    store.upsert_employee(employee).await?;
    info!("Set request {} of employee {} to {:?}", index, employee_id, status);
    Ok(())
}

/// Commit an availability edit to the stored employee.
///
/// If any day fails validation the stored employee is left unchanged.
pub async fn save_availability<S: RosterStore + ?Sized>(
    store: &S,
    employee_id: u32,
    editor: &AvailabilityEditor,
) -> BoardResult<Employee> {
    let mut employee = require_employee(store, employee_id).await?;
    editor.commit(&mut employee.availability)?;
    store.upsert_employee(employee.clone()).await?;
    info!("Availability saved for {}", employee.name);
    Ok(employee)
}
