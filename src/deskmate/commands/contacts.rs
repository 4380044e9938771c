use crate::commands::{CmdMessage, CmdResult, Table};
use crate::error::{AssistantError, Result};
use crate::fields::Name;
use crate::model::{AddressBook, Record};
use log::debug;

pub const CONTACT_HEADERS: [&str; 5] = ["Name", "Phone(s)", "Birthday", "Email", "Address"];

/// Adds a phone to an existing contact, or creates the contact with it.
pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    if let Ok(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(CmdResult::message(CmdMessage::success("Phone added.")));
    }

    let mut record = Record::new(Name::parse(name)?);
    record.add_phone(phone)?;
    debug!("creating contact {}", record.name().as_str());
    book.add_record(record);
    Ok(CmdResult::message(CmdMessage::success("Contact added.")))
}

pub fn change(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    book.find_mut(name)?.edit_phone(old, new)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Phone {} changed to {}.",
        old, new
    ))))
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let removed = book.find_mut(name)?.remove_phone(phone)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Phone {} removed.",
        removed
    ))))
}

pub fn show_phone(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.find(name)?;
    if record.phones().is_empty() {
        return Err(AssistantError::FieldMissing("phones"));
    }
    let lines = record.phones().iter().map(|p| p.to_string()).collect();
    Ok(CmdResult::default().with_lines(lines))
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.delete(name)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Contact {} deleted.",
        removed.name()
    ))))
}

pub fn show_all(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::warning(
            "The address book is empty.",
        )));
    }
    Ok(CmdResult::default().with_table(contacts_table(book.iter())))
}

pub fn search(book: &AddressBook, keyword: &str) -> Result<CmdResult> {
    let matches = book.find_by_keyword(keyword)?;
    Ok(CmdResult::default().with_table(contacts_table(matches.into_iter())))
}

pub fn clear_all(book: &mut AddressBook) -> Result<CmdResult> {
    let count = book.len();
    book.clear();
    Ok(CmdResult::message(CmdMessage::success(format!(
        "All contacts deleted ({}).",
        count
    ))))
}

fn contacts_table<'a>(records: impl Iterator<Item = &'a Record>) -> Table {
    let mut table = Table::new(CONTACT_HEADERS);
    for record in records {
        table.push_row(record.table_row());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn add_creates_then_extends_contact() {
        let mut book = AddressBook::new();
        let first = add(&mut book, "alice", "1234567890").unwrap();
        assert_eq!(first.messages[0].content, "Contact added.");

        let second = add(&mut book, "Alice", "0987654321").unwrap();
        assert_eq!(second.messages[0].content, "Phone added.");
        assert_eq!(book.find("alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn add_with_bad_phone_does_not_create_contact() {
        let mut book = AddressBook::new();
        let err = add(&mut book, "alice", "123").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid phone number.");
        assert!(book.is_empty());
    }

    #[test]
    fn add_with_bad_name_is_rejected() {
        let mut book = AddressBook::new();
        let err = add(&mut book, "r2d2", "1234567890").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid contact name.");
    }

    #[test]
    fn duplicate_phone_is_a_warning() {
        let mut book = AddressBook::new();
        add(&mut book, "alice", "1234567890").unwrap();
        let err = add(&mut book, "alice", "1234567890").unwrap_err();
        let result = CmdResult::from_error(&err);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Phone already exists.");
        assert_eq!(book.find("alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn change_and_show_phone() {
        let mut book = AddressBook::new();
        add(&mut book, "alice", "1111111111").unwrap();
        change(&mut book, "alice", "1111111111", "2222222222").unwrap();
        let shown = show_phone(&book, "alice").unwrap();
        assert_eq!(shown.lines, vec!["2222222222"]);

        let err = change(&mut book, "bob", "1111111111", "2222222222").unwrap_err();
        assert_eq!(err.to_string(), "No contact with that name.");
    }

    #[test]
    fn delete_and_clear() {
        let mut book = AddressBook::new();
        add(&mut book, "alice", "1111111111").unwrap();
        add(&mut book, "bob", "2222222222").unwrap();

        let deleted = delete(&mut book, "ALICE").unwrap();
        assert_eq!(deleted.messages[0].content, "Contact Alice deleted.");
        assert_eq!(book.len(), 1);

        clear_all(&mut book).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn show_all_renders_a_row_per_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            show_all(&book).unwrap().messages[0].level,
            MessageLevel::Warning
        );

        add(&mut book, "bob", "2222222222").unwrap();
        add(&mut book, "alice", "1111111111").unwrap();
        let result = show_all(&book).unwrap();
        let table = &result.tables[0];
        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.rows[0][0], "Alice");
        assert_eq!(table.rows[1][0], "Bob");
    }

    #[test]
    fn search_returns_matching_rows() {
        let mut book = AddressBook::new();
        add(&mut book, "alice", "1111111111").unwrap();
        add(&mut book, "bob", "2222222222").unwrap();
        let result = search(&book, "2222222222").unwrap();
        assert_eq!(result.tables[0].rows.len(), 1);
        assert_eq!(result.tables[0].rows[0][0], "Bob");
        assert!(search(&book, "carol").is_err());
    }
}
