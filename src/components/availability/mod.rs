//! Weekly availability: the stored "9:00 AM - 5:00 PM" strings, their
//! editable form, and the edit buffer that commits a whole week at once.

pub mod codec;
mod editor;
pub mod models;

pub use codec::{decode, encode, is_off, NOT_AVAILABLE};
pub use editor::AvailabilityEditor;
pub use models::{DayAvailability, DayEdit, Field, TimeInput, WeeklyAvailability};
