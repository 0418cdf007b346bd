//! Phonebook - terminal contact manager
//!
//! This library provides the core functionality for the phonebook assistant:
//! contacts with phone numbers and birthdays, persisted between runs, with a
//! "birthdays in the next N days" query.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Validated fields, contact records and the address book
//! - `services`: Contact operations and the upcoming-birthday query
//! - `storage`: JSON file storage layer
//! - `backup`: Rolling backup management
//! - `export`: JSON, YAML and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Interactive shell and subcommand handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use phonebook::models::{AddressBook, Record};
//! use phonebook::services::upcoming_birthdays;
//!
//! let mut record = Record::new("Oleh");
//! record.add_phone("0501234567").unwrap();
//! record.add_birthday("03.01.1985").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let upcoming = upcoming_birthdays(&book, today, 7);
//! assert_eq!(upcoming[0].days_left, 2);
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PhonebookError, PhonebookResult};
