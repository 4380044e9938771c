use crate::fields::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No contact with that name.")]
    ContactNotFound(String),

    #[error("Phone already exists.")]
    DuplicatePhone(String),

    #[error("No such phone exists.")]
    PhoneNotFound(String),

    #[error("This contact already has {0}.")]
    FieldAlreadySet(&'static str),

    #[error("No {0} found.")]
    FieldMissing(&'static str),

    #[error("Note with title '{0}' not found.")]
    NoteNotFound(String),

    #[error("Note with title '{0}' already exists.")]
    DuplicateNote(String),

    #[error("Tag '{0}' is already on this note.")]
    DuplicateTag(String),

    #[error("Tag '{0}' not found.")]
    TagNotFound(String),

    #[error("Invalid data.")]
    InvalidArguments,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl AssistantError {
    /// Whether the failure is shown as a warning rather than an error.
    /// Rejected values and missing records are warnings. Malformed
    /// arguments and environment failures are errors.
    pub fn is_warning(&self) -> bool {
        !matches!(
            self,
            AssistantError::InvalidArguments
                | AssistantError::FileNotFound(_)
                | AssistantError::Io(_)
                | AssistantError::Serialization(_)
                | AssistantError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_values_are_warnings() {
        assert!(AssistantError::ContactNotFound("bob".into()).is_warning());
        assert!(AssistantError::Validation(ValidationError::InvalidBirthday).is_warning());
        assert!(!AssistantError::InvalidArguments.is_warning());
        assert!(!AssistantError::Store("disk full".into()).is_warning());
    }
}
