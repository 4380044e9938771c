//! Field validators.
//!
//! Every scalar stored on a contact or a note goes through one of the value
//! types in this module. Each type has a `parse` constructor that either
//! returns the normalized value or a [`ValidationError`] whose `Display` is the
//! warning shown to the user. Once constructed, a value is known to be valid,
//! so the model layer never re-checks it.
//!
//! | Type         | Accepts                                        | Normalization        |
//! |--------------|------------------------------------------------|----------------------|
//! | [`Name`]     | alphabetic characters only                     | lowercased           |
//! | [`Phone`]    | exactly 10 ASCII digits                        | unchanged            |
//! | [`Birthday`] | `DD.MM.YYYY`                                   | stored as a date     |
//! | [`Email`]    | `local@domain.tld`                             | lowercased           |
//! | [`Address`]  | at least 3 non-blank characters                | trimmed              |
//! | [`Title`]    | 1 to 14 characters                             | trimmed              |
//! | [`NoteText`] | anything non-empty once whitespace/quotes go   | stripped             |
//! | [`Tag`]      | anything non-blank                             | trimmed              |

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const PHONE_LEN: usize = 10;
pub const MIN_ADDRESS_LEN: usize = 3;
pub const MAX_TITLE_LEN: usize = 15;
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").ok());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid contact name.")]
    InvalidName,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("Invalid date format. Try DD.MM.YYYY.")]
    InvalidBirthday,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Address must be at least {} characters long.", MIN_ADDRESS_LEN)]
    InvalidAddress,

    #[error("Title must be between 1 and {} characters.", MAX_TITLE_LEN - 1)]
    InvalidTitle,

    #[error("Note text cannot be empty.")]
    InvalidNoteText,

    #[error("Tag cannot be empty.")]
    InvalidTag,
}

/// A contact name, lowercased. Also the Address Book key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() || !raw.chars().all(char::is_alphabetic) {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name with its first letter uppercased, for display.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.capitalized())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.len() == PHONE_LEN && raw.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        match EMAIL_PATTERN.as_ref() {
            Some(pattern) if pattern.is_match(raw) => Ok(Self(raw.to_lowercase())),
            _ => Err(ValidationError::InvalidEmail),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_ADDRESS_LEN {
            return Err(ValidationError::InvalidAddress);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Note title. Unique within a Note Book, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len == 0 || len >= MAX_TITLE_LEN {
            return Err(ValidationError::InvalidTitle);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteText(String);

impl NoteText {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let stripped = raw
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'')
            .trim();
        if stripped.is_empty() {
            return Err(ValidationError::InvalidNoteText);
        }
        Ok(Self(stripped.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidTag);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_lowercased_and_capitalized_for_display() {
        let name = Name::parse("ALICE").unwrap();
        assert_eq!(name.as_str(), "alice");
        assert_eq!(name.to_string(), "Alice");
    }

    #[test]
    fn name_rejects_digits_spaces_and_empty() {
        assert_eq!(Name::parse("al1ce"), Err(ValidationError::InvalidName));
        assert_eq!(Name::parse("mary ann"), Err(ValidationError::InvalidName));
        assert_eq!(Name::parse(""), Err(ValidationError::InvalidName));
    }

    #[test]
    fn phone_accepts_ten_digits_unchanged() {
        for raw in ["1234567890", "0000000000", "0987654321"] {
            assert_eq!(Phone::parse(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn phone_rejects_everything_else() {
        for raw in [
            "",
            "123456789",
            "12345678901",
            "12345abcde",
            "123-456-78",
            " 123456789",
            "١٢٣٤٥٦٧٨٩٠",
        ] {
            assert_eq!(Phone::parse(raw), Err(ValidationError::InvalidPhone), "{raw}");
        }
    }

    #[test]
    fn birthday_parses_day_month_year() {
        let bday = Birthday::parse("01.02.1990").unwrap();
        assert_eq!(bday.date(), NaiveDate::from_ymd_opt(1990, 2, 1).unwrap());
        assert_eq!(bday.to_string(), "01.02.1990");
    }

    #[test]
    fn birthday_rejects_other_formats_and_impossible_dates() {
        assert!(Birthday::parse("1990-02-01").is_err());
        assert!(Birthday::parse("31.02.1990").is_err());
        assert!(Birthday::parse("tomorrow").is_err());
    }

    #[test]
    fn email_is_validated_and_lowercased() {
        let email = Email::parse("John.Doe+work@Example.COM").unwrap();
        assert_eq!(email.as_str(), "john.doe+work@example.com");

        assert!(Email::parse("no-at-sign.com").is_err());
        assert!(Email::parse("user@nodot").is_err());
        assert!(Email::parse("user@domain.c").is_err());
        assert!(Email::parse("us er@domain.com").is_err());
    }

    #[test]
    fn address_needs_three_visible_characters() {
        assert_eq!(Address::parse("  Kyiv ").unwrap().as_str(), "Kyiv");
        assert_eq!(Address::parse("ab"), Err(ValidationError::InvalidAddress));
        assert_eq!(Address::parse("      "), Err(ValidationError::InvalidAddress));
    }

    #[test]
    fn title_must_be_shorter_than_fifteen_characters() {
        assert!(Title::parse("fourteen chars").is_ok());
        assert_eq!(
            Title::parse("fifteen chars!!"),
            Err(ValidationError::InvalidTitle)
        );
        assert_eq!(Title::parse("   "), Err(ValidationError::InvalidTitle));
    }

    #[test]
    fn title_matches_case_insensitively() {
        let title = Title::parse("Groceries").unwrap();
        assert!(title.matches("groceries"));
        assert!(title.matches(" GROCERIES "));
        assert!(!title.matches("grocery"));
    }

    #[test]
    fn note_text_strips_whitespace_and_quotes() {
        assert_eq!(
            NoteText::parse("  \"buy milk\" ").unwrap().as_str(),
            "buy milk"
        );
        assert_eq!(NoteText::parse("\"\""), Err(ValidationError::InvalidNoteText));
        assert_eq!(NoteText::parse(" ' ' "), Err(ValidationError::InvalidNoteText));
    }

    #[test]
    fn tag_rejects_blank() {
        assert_eq!(Tag::parse(" work ").unwrap().as_str(), "work");
        assert_eq!(Tag::parse("\t"), Err(ValidationError::InvalidTag));
    }
}
