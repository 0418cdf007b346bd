//! Core data models for the phonebook
//!
//! This module contains the contact domain: validated field types, the
//! per-contact record and the address book that owns every record.

pub mod address_book;
pub mod birthday;
pub mod phone;
pub mod record;

pub use address_book::AddressBook;
pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use phone::PhoneNumber;
pub use record::{Record, BIRTHDAY_NOT_SPECIFIED};

use thiserror::Error;

/// Validation errors for raw field input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("phone must be 10 digits")]
    InvalidPhone,

    #[error("invalid date format, expected DD.MM.YYYY")]
    InvalidBirthday,
}
