//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts and query results.

pub mod contact;

pub use contact::{
    format_birthday, format_contact, format_contact_list, format_upcoming_birthdays,
};
