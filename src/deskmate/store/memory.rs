use super::{DataStore, Snapshot};
use crate::error::Result;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Snapshot,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot, saves: 0 }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Number of times `save` was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = snapshot.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::fields::{Name, NoteText, Title};
    use crate::model::{Note, Record};

    pub struct StoreFixture {
        pub snapshot: Snapshot,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                snapshot: Snapshot::default(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            let mut record = Record::new(Name::parse(name).unwrap());
            record.add_phone(phone).unwrap();
            self.snapshot.contacts.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            self.snapshot
                .contacts
                .find_mut(name)
                .unwrap()
                .set_birthday(birthday)
                .unwrap();
            self
        }

        pub fn with_note(mut self, title: &str, text: &str, tags: &[&str]) -> Self {
            let mut note = Note::new(Title::parse(title).unwrap(), NoteText::parse(text).unwrap());
            for tag in tags {
                note.add_tag(tag).unwrap();
            }
            self.snapshot.notes.add_note(note).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_snapshot(self.snapshot)
        }
    }
}
