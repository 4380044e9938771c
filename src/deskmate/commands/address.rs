use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

/// What to do with a contact's address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressAction<'a> {
    Add(&'a str),
    Show,
    Edit(&'a str),
    Delete,
}

pub fn run(book: &mut AddressBook, name: &str, action: AddressAction<'_>) -> Result<CmdResult> {
    let record = book.find_mut(name)?;
    let message = match action {
        AddressAction::Add(raw) => {
            record.add_address(raw)?;
            CmdMessage::success("Address added.")
        }
        AddressAction::Show => CmdMessage::info(record.show_address()?),
        AddressAction::Edit(raw) => {
            record.edit_address(raw)?;
            CmdMessage::success("Address changed.")
        }
        AddressAction::Delete => {
            record.delete_address()?;
            CmdMessage::success("Address deleted.")
        }
    };
    Ok(CmdResult::message(message))
}
