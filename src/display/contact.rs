//! Contact display formatting
//!
//! Formats records, contact lists and birthday windows for terminal output.

use crate::models::{AddressBook, Birthday, Record};
use crate::services::UpcomingBirthday;

/// Shown by `all` when the book is empty
pub const NO_CONTACTS: &str = "Контактів немає.";

/// Shown by `birthdays` when nothing falls inside the window
pub const NO_UPCOMING_BIRTHDAYS: &str = "Немає найближчих днів народження.";

/// Format a single contact
pub fn format_contact(record: &Record) -> String {
    record.to_string()
}

/// Format every contact, one `name record` line each, sorted by name
pub fn format_contact_list(book: &AddressBook) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }

    book.sorted_records()
        .into_iter()
        .map(|record| format!("{} {}", record.name(), record))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the answer to `show-birthday`
pub fn format_birthday(name: &str, birthday: Option<&Birthday>) -> String {
    match birthday {
        Some(birthday) => format!("День народження {}: {}", name, birthday),
        None => format!("Немає дня народження для {}.", name),
    }
}

/// Format the result of a birthday window query
pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return NO_UPCOMING_BIRTHDAYS.to_string();
    }

    upcoming
        .iter()
        .map(|u| format!("{}: {} (через {} днів)", u.name, u.birthday, u.days_left))
        .collect::<Vec<_>>()
        .join("\n")
}
