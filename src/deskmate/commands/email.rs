use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

pub fn add(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    book.find_mut(name)?.add_email(email)?;
    Ok(CmdResult::message(CmdMessage::success("Email added.")))
}

pub fn change(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    book.find_mut(name)?.edit_email(email)?;
    Ok(CmdResult::message(CmdMessage::success("Email changed.")))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let line = book.find(name)?.show_email()?;
    Ok(CmdResult::message(CmdMessage::info(line)))
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.find_mut(name)?.delete_email()?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Email {} deleted.",
        removed
    ))))
}
