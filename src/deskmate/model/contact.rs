use crate::error::{AssistantError, Result};
use crate::fields::{Address, Birthday, Email, Name, Phone};
use serde::{Deserialize, Serialize};

const EMPTY_CELL: &str = "-";

/// One person in the address book.
///
/// Every setter takes the raw user input and validates it before touching
/// the record, so a failed call leaves the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
    email: Option<Email>,
    address: Option<Address>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    fn phone_position(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::parse(raw)?;
        if self.phones.contains(&phone) {
            return Err(AssistantError::DuplicatePhone(phone.to_string()));
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let new_phone = Phone::parse(new)?;
        let idx = self
            .phone_position(old)
            .ok_or_else(|| AssistantError::PhoneNotFound(old.to_string()))?;
        if old != new_phone.as_str() && self.phones.contains(&new_phone) {
            return Err(AssistantError::DuplicatePhone(new_phone.to_string()));
        }
        self.phones[idx] = new_phone;
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<Phone> {
        let idx = self
            .phone_position(raw)
            .ok_or_else(|| AssistantError::PhoneNotFound(raw.to_string()))?;
        Ok(self.phones.remove(idx))
    }

    /// Sets the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    pub fn show_birthday(&self) -> Result<String> {
        let birthday = self
            .birthday
            .ok_or(AssistantError::FieldMissing("birthday"))?;
        Ok(format!("{}'s birthday: {}", self.name, birthday))
    }

    pub fn add_email(&mut self, raw: &str) -> Result<()> {
        if self.email.is_some() {
            return Err(AssistantError::FieldAlreadySet("an email"));
        }
        self.email = Some(Email::parse(raw)?);
        Ok(())
    }

    pub fn edit_email(&mut self, raw: &str) -> Result<()> {
        if self.email.is_none() {
            return Err(AssistantError::FieldMissing("email"));
        }
        self.email = Some(Email::parse(raw)?);
        Ok(())
    }

    pub fn delete_email(&mut self) -> Result<Email> {
        self.email.take().ok_or(AssistantError::FieldMissing("email"))
    }

    pub fn show_email(&self) -> Result<String> {
        let email = self
            .email
            .as_ref()
            .ok_or(AssistantError::FieldMissing("email"))?;
        Ok(format!("{}'s email: {}", self.name, email))
    }

    pub fn add_address(&mut self, raw: &str) -> Result<()> {
        if self.address.is_some() {
            return Err(AssistantError::FieldAlreadySet("an address"));
        }
        self.address = Some(Address::parse(raw)?);
        Ok(())
    }

    pub fn edit_address(&mut self, raw: &str) -> Result<()> {
        if self.address.is_none() {
            return Err(AssistantError::FieldMissing("address"));
        }
        self.address = Some(Address::parse(raw)?);
        Ok(())
    }

    pub fn delete_address(&mut self) -> Result<Address> {
        self.address.take().ok_or(AssistantError::FieldMissing("address"))
    }

    pub fn show_address(&self) -> Result<String> {
        let address = self
            .address
            .as_ref()
            .ok_or(AssistantError::FieldMissing("address"))?;
        Ok(format!("{}'s address: {}", self.name, address))
    }

    /// Values a keyword search is matched against: name, phones,
    /// formatted birthday and email.
    pub fn keywords(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.phones.len() + 3);
        words.push(self.name.as_str().to_string());
        words.extend(self.phones.iter().map(|p| p.to_string()));
        if let Some(birthday) = self.birthday {
            words.push(birthday.to_string());
        }
        if let Some(email) = &self.email {
            words.push(email.to_string());
        }
        words
    }

    /// Name, phones, birthday, email, address.
    pub fn table_row(&self) -> Vec<String> {
        let phones = if self.phones.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        vec![
            self.name.to_string(),
            phones,
            cell(self.birthday.map(|b| b.to_string())),
            cell(self.email.as_ref().map(Email::to_string)),
            cell(self.address.as_ref().map(Address::to_string)),
        ]
    }
}

fn cell(value: Option<String>) -> String {
    value.unwrap_or_else(|| EMPTY_CELL.to_string())
}
