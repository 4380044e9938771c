use crate::commands::{CmdMessage, CmdResult, Table};
use crate::error::Result;
use crate::fields::DATE_FORMAT;
use crate::model::AddressBook;
use chrono::NaiveDate;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;

pub fn add(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    book.find_mut(name)?.set_birthday(birthday)?;
    Ok(CmdResult::message(CmdMessage::success("Birthday added.")))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let line = book.find(name)?.show_birthday()?;
    Ok(CmdResult::message(CmdMessage::info(line)))
}

pub fn upcoming(book: &AddressBook, days: i64, today: NaiveDate) -> Result<CmdResult> {
    let upcoming = book.upcoming_birthdays(days, today);
    if upcoming.is_empty() {
        return Ok(CmdResult::message(CmdMessage::warning(format!(
            "No birthdays in the next {} days.",
            days
        ))));
    }

    let mut table = Table::new(["Name", "Congratulation date"]);
    for entry in upcoming {
        table.push_row(vec![
            entry.name,
            entry.congratulation_date.format(DATE_FORMAT).to_string(),
        ]);
    }
    Ok(CmdResult::default().with_table(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{contacts, MessageLevel};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book() -> AddressBook {
        let mut book = AddressBook::new();
        contacts::add(&mut book, "alice", "1234567890").unwrap();
        book
    }

    #[test]
    fn add_then_show() {
        let mut book = book();
        add(&mut book, "alice", "01.01.2099").unwrap();
        let shown = show(&book, "alice").unwrap();
        assert_eq!(shown.messages[0].content, "Alice's birthday: 01.01.2099");
    }

    #[test]
    fn bad_date_is_a_warning() {
        let mut book = book();
        let err = add(&mut book, "alice", "2099-01-01").unwrap_err();
        let result = CmdResult::from_error(&err);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[0].content,
            "Invalid date format. Try DD.MM.YYYY."
        );
    }

    #[test]
    fn upcoming_lists_name_and_date() {
        let mut book = book();
        add(&mut book, "alice", "15.10.1990").unwrap();
        let result = upcoming(&book, 7, date(2026, 10, 12)).unwrap();
        assert_eq!(
            result.tables[0].rows,
            vec![vec!["Alice".to_string(), "15.10.2026".to_string()]]
        );
    }

    #[test]
    fn upcoming_with_nothing_in_window_warns() {
        let mut book = book();
        add(&mut book, "alice", "13.10.1990").unwrap();
        let result = upcoming(&book, 0, date(2026, 10, 12)).unwrap();
        assert!(result.tables.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
