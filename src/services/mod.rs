//! Business logic layer
//!
//! Services sit between the shell commands and the data models.

pub mod birthdays;
pub mod contacts;

pub use birthdays::{next_occurrence, upcoming_birthdays, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use contacts::{AddOutcome, ContactService};
