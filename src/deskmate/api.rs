//! # API Facade
//!
//! [`AssistantApi`] owns the loaded state and the store it came from. It is
//! the single entry point for the CLI: every method forwards to a function in
//! `commands/` with the right book, and [`AssistantApi::save`] writes the
//! whole state back.
//!
//! The API does no parsing of command lines and no printing. It is generic
//! over [`DataStore`] so tests run against `InMemoryStore`.

use crate::commands::{self, address::AddressAction, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, NoteBook};
use crate::store::{DataStore, Snapshot};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::path::Path;

pub struct AssistantApi<S: DataStore> {
    store: S,
    state: Snapshot,
    birthday_window: i64,
}

impl<S: DataStore> AssistantApi<S> {
    /// Loads the state from `store`.
    pub fn open(store: S) -> Result<Self> {
        let state = store.load()?;
        info!(
            "opened state with {} contacts and {} notes",
            state.contacts.len(),
            state.notes.len()
        );
        Ok(Self {
            store,
            state,
            birthday_window: commands::birthday::DEFAULT_WINDOW_DAYS,
        })
    }

    pub fn with_birthday_window(mut self, days: i64) -> Self {
        self.birthday_window = days;
        self
    }

    pub fn contacts(&self) -> &AddressBook {
        &self.state.contacts
    }

    pub fn notes(&self) -> &NoteBook {
        &self.state.notes
    }

    pub fn save(&mut self) -> Result<()> {
        debug!("saving state");
        self.store.save(&self.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- contacts ---

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        debug!("add contact {}", name);
        commands::contacts::add(&mut self.state.contacts, name, phone)
    }

    pub fn change_contact(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        debug!("change phone of {}", name);
        commands::contacts::change(&mut self.state.contacts, name, old, new)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        debug!("remove phone of {}", name);
        commands::contacts::remove_phone(&mut self.state.contacts, name, phone)
    }

    pub fn show_phone(&self, name: &str) -> Result<CmdResult> {
        commands::contacts::show_phone(&self.state.contacts, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        debug!("delete contact {}", name);
        commands::contacts::delete(&mut self.state.contacts, name)
    }

    pub fn show_all_contacts(&self) -> Result<CmdResult> {
        commands::contacts::show_all(&self.state.contacts)
    }

    pub fn search_contacts(&self, keyword: &str) -> Result<CmdResult> {
        commands::contacts::search(&self.state.contacts, keyword)
    }

    pub fn clear_all_contacts(&mut self) -> Result<CmdResult> {
        debug!("clear all contacts");
        commands::contacts::clear_all(&mut self.state.contacts)
    }

    pub fn address(&mut self, name: &str, action: AddressAction<'_>) -> Result<CmdResult> {
        debug!("address {:?} for {}", action, name);
        commands::address::run(&mut self.state.contacts, name, action)
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        debug!("add email for {}", name);
        commands::email::add(&mut self.state.contacts, name, email)
    }

    pub fn change_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        debug!("change email for {}", name);
        commands::email::change(&mut self.state.contacts, name, email)
    }

    pub fn show_email(&self, name: &str) -> Result<CmdResult> {
        commands::email::show(&self.state.contacts, name)
    }

    pub fn delete_email(&mut self, name: &str) -> Result<CmdResult> {
        debug!("delete email of {}", name);
        commands::email::delete(&mut self.state.contacts, name)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        debug!("add birthday for {}", name);
        commands::birthday::add(&mut self.state.contacts, name, birthday)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthday::show(&self.state.contacts, name)
    }

    /// Upcoming birthdays counted from the local date. `None` uses the
    /// configured window.
    pub fn upcoming_birthdays(&self, days: Option<i64>) -> Result<CmdResult> {
        self.upcoming_birthdays_from(days, Local::now().date_naive())
    }

    pub fn upcoming_birthdays_from(
        &self,
        days: Option<i64>,
        today: NaiveDate,
    ) -> Result<CmdResult> {
        let days = days.unwrap_or(self.birthday_window);
        commands::birthday::upcoming(&self.state.contacts, days, today)
    }

    // --- notes ---

    pub fn add_note(&mut self, title: &str, text: &str, tags: &str) -> Result<CmdResult> {
        debug!("add note {:?}", title);
        commands::notes::add(&mut self.state.notes, title, text, tags)
    }

    pub fn find_note(&self, title: &str) -> Result<CmdResult> {
        commands::notes::find(&self.state.notes, title)
    }

    pub fn edit_note(&mut self, title: &str, text: &str) -> Result<CmdResult> {
        debug!("edit note {:?}", title);
        commands::notes::edit(&mut self.state.notes, title, text)
    }

    pub fn delete_note(&mut self, title: &str) -> Result<CmdResult> {
        debug!("delete note {:?}", title);
        commands::notes::delete(&mut self.state.notes, title)
    }

    pub fn show_all_notes(&self) -> Result<CmdResult> {
        commands::notes::show_all(&self.state.notes)
    }

    pub fn search_notes(&self, keyword: &str) -> Result<CmdResult> {
        commands::notes::search(&self.state.notes, keyword)
    }

    pub fn import_note(&mut self, path: &Path) -> Result<CmdResult> {
        debug!("import note from {}", path.display());
        commands::notes::import(&mut self.state.notes, path)
    }

    pub fn clear_all_notes(&mut self) -> Result<CmdResult> {
        debug!("clear all notes");
        commands::notes::clear_all(&mut self.state.notes)
    }

    pub fn add_tag(&mut self, title: &str, tag: &str) -> Result<CmdResult> {
        debug!("tag {:?} with {:?}", title, tag);
        commands::tags::add_tag(&mut self.state.notes, title, tag)
    }

    pub fn remove_tag(&mut self, title: &str, tag: &str) -> Result<CmdResult> {
        debug!("untag {:?} from {:?}", tag, title);
        commands::tags::remove_tag(&mut self.state.notes, title, tag)
    }

    pub fn search_by_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::tags::search_by_tag(&self.state.notes, tag)
    }

    pub fn sort_by_tag(&mut self) -> Result<CmdResult> {
        debug!("sort notes by tag");
        commands::tags::sort_by_tag(&mut self.state.notes)
    }

    pub fn show_tags(&self) -> Result<CmdResult> {
        commands::tags::show_tags(&self.state.notes)
    }

    pub fn clear_all_tags(&mut self) -> Result<CmdResult> {
        debug!("clear all tags");
        commands::tags::clear_all_tags(&mut self.state.notes)
    }

    pub fn remove_tag_from_all(&mut self, tag: &str) -> Result<CmdResult> {
        debug!("remove tag {:?} from all notes", tag);
        commands::tags::remove_tag_from_all(&mut self.state.notes, tag)
    }
}
