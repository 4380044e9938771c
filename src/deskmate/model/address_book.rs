use super::contact::Record;
use crate::error::{AssistantError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A contact whose birthday falls inside the requested window, with the date
/// the congratulation should be sent on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

/// Contacts keyed by their lowercase name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.records
            .get(&name.to_lowercase())
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        self.records
            .remove(&name.to_lowercase())
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
    }

    /// Records whose name, phones, birthday or email equal `keyword`,
    /// ignoring case.
    pub fn find_by_keyword(&self, keyword: &str) -> Result<Vec<&Record>> {
        let needle = keyword.trim().to_lowercase();
        let matches: Vec<&Record> = self
            .records
            .values()
            .filter(|rec| rec.keywords().iter().any(|w| w.to_lowercase() == needle))
            .collect();
        if matches.is_empty() {
            return Err(AssistantError::ContactNotFound(keyword.to_string()));
        }
        Ok(matches)
    }

    /// Birthdays occurring between `today` and `today + days` inclusive.
    ///
    /// A birthday that already passed this year counts for next year. When
    /// the occurrence lands on a weekend the congratulation moves to the
    /// following Monday; the moved date is not checked against the window.
    /// A window reaching past the calendar's range is cut at its end.
    pub fn upcoming_birthdays(&self, days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = Duration::try_days(days)
            .and_then(|span| today.checked_add_signed(span))
            .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });
        self.records
            .values()
            .filter_map(|rec| {
                let birthday = rec.birthday()?.date();
                let mut occurrence = anniversary_in(birthday, today.year())?;
                if occurrence < today {
                    occurrence = anniversary_in(birthday, today.year() + 1)?;
                }
                if occurrence > window_end {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: rec.name().to_string(),
                    congratulation_date: defer_weekend(occurrence),
                })
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

/// The birthday's month and day in `year`. 29 February becomes 28 February
/// in non-leap years.
fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
}

fn defer_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
