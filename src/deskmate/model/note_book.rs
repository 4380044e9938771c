use super::note::Note;
use crate::error::{AssistantError, Result};
use crate::fields::NoteText;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Notes in insertion order. Titles are unique, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_note(&mut self, note: Note) -> Result<()> {
        if self.position(note.title().as_str()).is_some() {
            return Err(AssistantError::DuplicateNote(note.title().to_string()));
        }
        self.notes.push(note);
        Ok(())
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.title().matches(title))
    }

    pub fn find_note(&self, title: &str) -> Result<&Note> {
        self.position(title)
            .map(|idx| &self.notes[idx])
            .ok_or_else(|| AssistantError::NoteNotFound(title.trim().to_string()))
    }

    pub fn find_note_mut(&mut self, title: &str) -> Result<&mut Note> {
        match self.position(title) {
            Some(idx) => Ok(&mut self.notes[idx]),
            None => Err(AssistantError::NoteNotFound(title.trim().to_string())),
        }
    }

    /// Replaces the text of a note; title and tags stay as they are.
    pub fn edit_note(&mut self, title: &str, text: NoteText) -> Result<()> {
        self.find_note_mut(title)?.set_text(text);
        Ok(())
    }

    pub fn delete_note(&mut self, title: &str) -> Result<Note> {
        let idx = self
            .position(title)
            .ok_or_else(|| AssistantError::NoteNotFound(title.trim().to_string()))?;
        Ok(self.notes.remove(idx))
    }

    /// Notes whose title or text contains `keyword`, ignoring case.
    pub fn search_notes(&self, keyword: &str) -> Vec<&Note> {
        let needle = keyword.to_lowercase();
        self.notes.iter().filter(|n| n.contains(&needle)).collect()
    }

    pub fn search_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.has_tag(tag)).collect()
    }

    /// Reorders the book: tagged notes first by tag count (most first) then
    /// title, followed by untagged notes by title.
    pub fn sort_by_tag(&mut self) -> &[Note] {
        self.notes.sort_by(|a, b| {
            let a_untagged = a.tags().is_empty();
            let b_untagged = b.tags().is_empty();
            a_untagged
                .cmp(&b_untagged)
                .then_with(|| b.tags().len().cmp(&a.tags().len()))
                .then_with(|| a.title().as_str().cmp(b.title().as_str()))
        });
        &self.notes
    }

    pub fn list_all_tags(&self) -> Vec<String> {
        self.notes
            .iter()
            .flat_map(|n| n.tags().iter().map(|t| t.to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns how many notes had tags.
    pub fn clear_all_tags(&mut self) -> usize {
        let mut cleared = 0;
        for note in self.notes.iter_mut().filter(|n| !n.tags().is_empty()) {
            note.clear_tags();
            cleared += 1;
        }
        cleared
    }

    /// Removes `tag` from every note. Returns how many notes carried it.
    pub fn remove_tag_from_all(&mut self, tag: &str) -> Result<usize> {
        let mut removed = 0;
        for note in self.notes.iter_mut() {
            if note.remove_tag(tag).is_ok() {
                removed += 1;
            }
        }
        if removed == 0 {
            return Err(AssistantError::TagNotFound(tag.trim().to_string()));
        }
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }
}
