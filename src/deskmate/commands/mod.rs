//! # Command Layer
//!
//! One module per area of the assistant. Every command takes the book it
//! works on plus already-split string arguments and returns a
//! [`CmdResult`]: the messages, plain lines and tables the CLI should show.
//! Commands never print and never read input; prompting happens in the CLI
//! before a command is called.
//!
//! Failures come back as [`AssistantError`]. The dispatcher turns them into a
//! one-message result with [`CmdResult::from_error`], so a bad command never
//! ends the session.

use crate::error::AssistantError;

pub mod address;
pub mod birthday;
pub mod contacts;
pub mod email;
pub mod notes;
pub mod tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Rows with a header line, optionally under a section title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<H: Into<String>>(headers: impl IntoIterator<Item = H>) -> Self {
        Self {
            title: None,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub lines: Vec<String>,
    pub tables: Vec<Table>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            ..Self::default()
        }
    }

    pub fn from_error(err: &AssistantError) -> Self {
        let content = err.to_string();
        if err.is_warning() {
            Self::message(CmdMessage::warning(content))
        } else {
            Self::message(CmdMessage::error(content))
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }
}
