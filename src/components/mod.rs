// Export components
pub mod availability;
pub mod restaurant;
pub mod roster;
pub mod schedule_window;

// Re-export the pieces the edit surfaces use most
pub use availability::{AvailabilityEditor, WeeklyAvailability};
pub use schedule_window::{end_day_for, is_valid_window, ScheduleWindow, WindowStatus};
