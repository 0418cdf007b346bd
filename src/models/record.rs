//! Contact record
//!
//! A record owns one immutable name, an ordered list of phone numbers
//! (duplicates allowed) and at most one birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Birthday, PhoneNumber, ValidationError};

/// Placeholder rendered when a contact has no birthday
pub const BIRTHDAY_NOT_SPECIFIED: &str = "не зазначено";

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::parse(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `value`; returns how many were removed
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p != value);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// `new` is validated before anything is touched. Returns `Ok(false)`
    /// when no phone matches `old`, leaving the list unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = PhoneNumber::parse(new)?;

        match self.phones.iter_mut().find(|p| *p == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// First phone equal to `value`
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == value)
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Phones joined with `; `
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ім'я: {}, телефони: {}, день народження: ", self.name, self.phones_joined())?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str(BIRTHDAY_NOT_SPECIFIED),
        }
    }
}
