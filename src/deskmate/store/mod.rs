//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence boundary. The whole state, a
//! [`Snapshot`] holding the address book and the note book, is read once at
//! startup and written back once on exit. There is no partial write and no
//! locking; the last writer wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON file under the data
//!   directory. A missing file loads as an empty snapshot.
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory, for
//!   tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── assistant.json     # {"contacts": {...}, "notes": [...]}
//! └── config.json        # optional, see config.rs
//! ```

use crate::error::Result;
use crate::model::{AddressBook, NoteBook};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub contacts: AddressBook,
    #[serde(default)]
    pub notes: NoteBook,
}

/// Loads and saves the complete assistant state.
pub trait DataStore {
    /// Read the persisted state. Absent state is an empty snapshot, not an
    /// error.
    fn load(&self) -> Result<Snapshot>;

    /// Overwrite the persisted state.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}
