//! Contact service
//!
//! Business logic on top of the address book for the shell commands:
//! find-or-create on add, and lookups that turn a missing contact into a
//! `NotFound` error.

use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{AddressBook, Birthday, PhoneNumber, Record};

/// Whether `add_contact` created a new record or extended an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    Updated,
}

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Add a phone to a contact, creating the contact if needed
    ///
    /// The phone is validated first, so a bad number never leaves behind an
    /// empty new contact.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> PhonebookResult<AddOutcome> {
        PhoneNumber::parse(phone)?;

        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            return Ok(AddOutcome::Updated);
        }

        let mut record = Record::new(name);
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok(AddOutcome::Created)
    }

    /// Replace `old_phone` with `new_phone`; returns whether anything changed
    pub fn change_phone(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> PhonebookResult<bool> {
        let record = self.record_mut(name)?;
        Ok(record.edit_phone(old_phone, new_phone)?)
    }

    /// Remove a phone from a contact; returns how many entries were removed
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> PhonebookResult<usize> {
        let record = self.record_mut(name)?;
        Ok(record.remove_phone(phone))
    }

    /// Set or replace a contact's birthday
    pub fn set_birthday(&mut self, name: &str, date: &str) -> PhonebookResult<()> {
        let record = self.record_mut(name)?;
        record.add_birthday(date)?;
        Ok(())
    }

    /// A contact's birthday, if the contact exists and has one
    pub fn birthday_of(&self, name: &str) -> Option<Birthday> {
        self.book.find(name).and_then(|r| r.birthday().copied())
    }

    /// Look up a contact by exact name
    pub fn get(&self, name: &str) -> PhonebookResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| PhonebookError::contact_not_found(name))
    }

    /// Delete a contact
    pub fn delete(&mut self, name: &str) -> PhonebookResult<Record> {
        self.book
            .delete(name)
            .ok_or_else(|| PhonebookError::contact_not_found(name))
    }

    /// The underlying address book
    pub fn book(&self) -> &AddressBook {
        &*self.book
    }

    fn record_mut(&mut self, name: &str) -> PhonebookResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| PhonebookError::contact_not_found(name))
    }
}
