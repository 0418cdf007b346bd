//! CSV Export functionality
//!
//! Exports contacts as one row per contact: `Name,Phones,Birthday`, with
//! phones joined by `;`.

use std::io::Write;

use crate::error::{PhonebookError, PhonebookResult};
use crate::models::AddressBook;

/// Export all contacts to CSV
pub fn export_contacts_csv<W: Write>(book: &AddressBook, writer: &mut W) -> PhonebookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Name", "Phones", "Birthday"])
        .map_err(|e| PhonebookError::Export(e.to_string()))?;

    for record in book.sorted_records() {
        let phones = record
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(";");
        let birthday = record.birthday().map(|b| b.to_string()).unwrap_or_default();

        csv_writer
            .write_record([record.name(), phones.as_str(), birthday.as_str()])
            .map_err(|e| PhonebookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PhonebookError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_export_contacts_csv() {
        let mut oleh = Record::new("Oleh");
        oleh.add_phone("0501234567").unwrap();
        oleh.add_phone("0507654321").unwrap();
        oleh.add_birthday("01.02.1990").unwrap();

        let mut anna = Record::new("Anna, Jr.");
        anna.add_phone("0509999999").unwrap();

        let book: AddressBook = vec![oleh, anna].into_iter().collect();

        let mut buffer = Vec::new();
        export_contacts_csv(&book, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Name,Phones,Birthday");
        assert_eq!(lines[1], "\"Anna, Jr.\",0509999999,");
        assert_eq!(lines[2], "Oleh,0501234567;0507654321,01.02.1990");
    }

    #[test]
    fn test_export_empty_book_has_header() {
        let mut buffer = Vec::new();
        export_contacts_csv(&AddressBook::new(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Name,Phones,Birthday\n");
    }
}
