//! Domain types: contacts and notes.
//!
//! Nothing here does I/O. The books are plain owned collections that the
//! store serializes as a whole and the command layer mutates.

pub mod address_book;
pub mod contact;
pub mod note;
pub mod note_book;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use contact::Record;
pub use note::Note;
pub use note_book::NoteBook;
