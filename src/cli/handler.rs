//! Shell command handlers
//!
//! `execute` runs a parsed command against the address book and returns the
//! reply text. `render` is the single place where errors become user-facing
//! messages.

use chrono::NaiveDate;

use crate::display::{format_birthday, format_contact, format_contact_list, format_upcoming_birthdays};
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{AddressBook, ValidationError};
use crate::services::{upcoming_birthdays, AddOutcome, ContactService};

use super::commands::{Command, COMMANDS};

pub const GREETING: &str = "Вітаємо в асистенті!";
pub const PROMPT: &str = "Введіть команду: ";
pub const FAREWELL: &str = "До побачення!";

/// Execute one command, producing the text to show the user
pub fn execute(
    command: Command,
    book: &mut AddressBook,
    today: NaiveDate,
    default_window: u32,
) -> PhonebookResult<String> {
    let mut contacts = ContactService::new(book);

    let reply = match command {
        Command::Hello => "Як я можу допомогти?".to_string(),

        Command::Add { name, phone } => match contacts.add_contact(&name, &phone)? {
            AddOutcome::Created => "Контакт доданий.".to_string(),
            AddOutcome::Updated => "Контакт оновлений.".to_string(),
        },

        Command::Change {
            name,
            old_phone,
            new_phone,
        } => {
            contacts.change_phone(&name, &old_phone, &new_phone)?;
            "Контакт оновлено.".to_string()
        }

        Command::Phone { name } => format_contact(contacts.get(&name)?),

        Command::All => format_contact_list(contacts.book()),

        Command::AddBirthday { name, date } => {
            contacts.set_birthday(&name, &date)?;
            "День народження додано.".to_string()
        }

        Command::ShowBirthday { name } => {
            format_birthday(&name, contacts.birthday_of(&name).as_ref())
        }

        Command::Birthdays { window } => {
            let window = window.unwrap_or(default_window);
            format_upcoming_birthdays(&upcoming_birthdays(contacts.book(), today, window))
        }

        Command::RemovePhone { name, phone } => {
            if contacts.remove_phone(&name, &phone)? == 0 {
                format!("Номер {} не знайдено у контакта {}.", phone, name)
            } else {
                "Телефон видалено.".to_string()
            }
        }

        Command::Delete { name } => {
            contacts.delete(&name)?;
            "Контакт видалено.".to_string()
        }

        Command::Help => help_text(),

        Command::Exit => FAREWELL.to_string(),
    };

    Ok(reply)
}

/// Turn a command result into the line shown to the user
pub fn render(result: PhonebookResult<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(e) => error_message(&e),
    }
}

/// User-facing message for an error
pub fn error_message(err: &PhonebookError) -> String {
    match err {
        PhonebookError::Validation(ValidationError::InvalidPhone) => {
            "Телефон не містить 10 цифр.".to_string()
        }
        PhonebookError::Validation(ValidationError::InvalidBirthday) => {
            "Невірний формат дати. Використовуйте формат DD.MM.YYYY.".to_string()
        }
        PhonebookError::NotFound { identifier, .. } => {
            format!("Контакт з іменем {} не знайдено.", identifier)
        }
        PhonebookError::Usage { usage, .. } => format!(
            "Неправильне використання команди. Використання: {}",
            usage
        ),
        PhonebookError::InvalidCommand(_) => "Невірна команда.".to_string(),
        other => format!("Помилка: {}", other),
    }
}

/// The command list shown on start and by `help`
pub fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|spec| format!("  - {} : {}", spec.usage, spec.description))
        .collect::<Vec<_>>()
        .join("\n")
}
