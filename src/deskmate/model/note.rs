use crate::error::{AssistantError, Result};
use crate::fields::{NoteText, Tag, Title};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: Title,
    text: NoteText,
    // insertion order is kept for display
    tags: Vec<Tag>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: Title, text: NoteText) -> Self {
        let now = Utc::now();
        Self {
            title,
            text,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn text(&self) -> &NoteText {
        &self.text
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_text(&mut self, text: NoteText) {
        self.text = text;
        self.updated_at = Utc::now();
    }

    pub fn add_tag(&mut self, raw: &str) -> Result<()> {
        let tag = Tag::parse(raw)?;
        if self.tags.contains(&tag) {
            return Err(AssistantError::DuplicateTag(tag.to_string()));
        }
        self.tags.push(tag);
        Ok(())
    }

    pub fn remove_tag(&mut self, raw: &str) -> Result<()> {
        let idx = self
            .tags
            .iter()
            .position(|t| t.as_str() == raw.trim())
            .ok_or_else(|| AssistantError::TagNotFound(raw.trim().to_string()))?;
        self.tags.remove(idx);
        Ok(())
    }

    pub fn has_tag(&self, raw: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == raw.trim())
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    pub fn contains(&self, keyword_lower: &str) -> bool {
        self.title.as_str().to_lowercase().contains(keyword_lower)
            || self.text.as_str().to_lowercase().contains(keyword_lower)
    }

    pub fn tags_display(&self) -> String {
        if self.tags.is_empty() {
            "-".to_string()
        } else {
            self.tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ")
        }
    }

    /// Multi-line representation used by search results and `find-note`.
    pub fn render(&self) -> String {
        format!(
            "Title: {}\nText: {}\nTags: {}\nCreated: {}\nUpdated: {}",
            self.title,
            self.text,
            self.tags_display(),
            self.created_at.format(TIMESTAMP_FORMAT),
            self.updated_at.format(TIMESTAMP_FORMAT),
        )
    }
}
