use crate::commands::{CmdMessage, CmdResult, Table};
use crate::error::{AssistantError, Result};
use crate::fields::{NoteText, Title};
use crate::model::note::TIMESTAMP_FORMAT;
use crate::model::{Note, NoteBook};
use chrono::{DateTime, Utc};
use log::debug;
use std::fs;
use std::path::Path;
use timeago::Formatter;

pub const NOTE_HEADERS: [&str; 5] = ["Title", "Text", "Tags", "Created", "Updated"];

/// Creates a note from raw prompt answers. `tags` is a comma separated list;
/// blank entries are skipped and repeated ones reported.
pub fn add(book: &mut NoteBook, title: &str, text: &str, tags: &str) -> Result<CmdResult> {
    let title = Title::parse(title)?;
    let text = NoteText::parse(text)?;
    let mut note = Note::new(title, text);

    let mut result = CmdResult::default();
    for raw in tags.split(',').filter(|t| !t.trim().is_empty()) {
        if let Err(e) = note.add_tag(raw) {
            result.add_message(CmdMessage::warning(e.to_string()));
        }
    }

    let title = note.title().to_string();
    book.add_note(note)?;
    result.add_message(CmdMessage::success(format!("Note '{}' added.", title)));
    Ok(result)
}

pub fn find(book: &NoteBook, title: &str) -> Result<CmdResult> {
    let note = book.find_note(title)?;
    Ok(CmdResult::default().with_lines(vec![note.render()]))
}

pub fn edit(book: &mut NoteBook, title: &str, text: &str) -> Result<CmdResult> {
    // look the note up first so a missing title wins over a bad text
    book.find_note(title)?;
    let text = NoteText::parse(text)?;
    book.edit_note(title, text)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Note '{}' updated.",
        title.trim()
    ))))
}

pub fn delete(book: &mut NoteBook, title: &str) -> Result<CmdResult> {
    let removed = book.delete_note(title)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Note '{}' deleted.",
        removed.title()
    ))))
}

pub fn show_all(book: &NoteBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::warning("No notes yet.")));
    }
    Ok(CmdResult::default().with_table(notes_table(book.iter())))
}

pub fn search(book: &NoteBook, keyword: &str) -> Result<CmdResult> {
    let matches = book.search_notes(keyword);
    if matches.is_empty() {
        return Ok(CmdResult::message(CmdMessage::warning(format!(
            "No notes found for '{}'.",
            keyword
        ))));
    }
    let lines = matches.iter().map(|n| n.render()).collect();
    Ok(CmdResult::default().with_lines(lines))
}

/// Imports a text file as a note titled after the file stem.
pub fn import(book: &mut NoteBook, path: &Path) -> Result<CmdResult> {
    if !path.is_file() {
        return Err(AssistantError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(AssistantError::Io)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!("importing {} as note '{}'", path.display(), stem);

    let note = Note::new(Title::parse(&stem)?, NoteText::parse(&content)?);
    book.add_note(note)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Note '{}' imported from {}.",
        stem,
        path.display()
    ))))
}

pub fn clear_all(book: &mut NoteBook) -> Result<CmdResult> {
    let count = book.len();
    book.clear();
    Ok(CmdResult::message(CmdMessage::success(format!(
        "All notes deleted ({}).",
        count
    ))))
}

pub(crate) fn notes_table<'a>(notes: impl Iterator<Item = &'a Note>) -> Table {
    let mut table = Table::new(NOTE_HEADERS);
    for note in notes {
        table.push_row(vec![
            note.title().to_string(),
            note.text().as_str().replace('\n', " "),
            note.tags_display(),
            note.created_at().format(TIMESTAMP_FORMAT).to_string(),
            format_time_ago(note.updated_at()),
        ]);
    }
    table
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use std::io::Write;

    #[test]
    fn add_with_tags() {
        let mut book = NoteBook::new();
        let result = add(&mut book, "Groceries", "\"milk, eggs\"", "food, ,home").unwrap();
        assert_eq!(
            result.messages.last().unwrap().content,
            "Note 'Groceries' added."
        );
        let note = book.find_note("groceries").unwrap();
        assert_eq!(note.text().as_str(), "milk, eggs");
        assert_eq!(note.tags_display(), "#food #home");
    }

    #[test]
    fn add_reports_repeated_tag_but_keeps_note() {
        let mut book = NoteBook::new();
        let result = add(&mut book, "todo", "stuff", "a,a").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn long_title_is_rejected_and_nothing_stored() {
        let mut book = NoteBook::new();
        let err = add(&mut book, "a very long title", "text", "").unwrap_err();
        assert_eq!(
            CmdResult::from_error(&err).messages[0].level,
            MessageLevel::Warning
        );
        assert!(book.is_empty());
    }

    #[test]
    fn duplicate_title_is_a_warning() {
        let mut book = NoteBook::new();
        add(&mut book, "abc", "one", "").unwrap();
        let err = add(&mut book, "abc", "two", "").unwrap_err();
        assert_eq!(err.to_string(), "Note with title 'abc' already exists.");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn edit_reports_missing_note_before_bad_text() {
        let mut book = NoteBook::new();
        let err = edit(&mut book, "nope", "").unwrap_err();
        assert!(matches!(err, AssistantError::NoteNotFound(_)));

        add(&mut book, "abc", "one", "").unwrap();
        let err = edit(&mut book, "abc", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Note text cannot be empty.");
        assert_eq!(book.find_note("abc").unwrap().text().as_str(), "one");

        edit(&mut book, "ABC", "two").unwrap();
        assert_eq!(book.find_note("abc").unwrap().text().as_str(), "two");
    }

    #[test]
    fn search_and_find_render_notes() {
        let mut book = NoteBook::new();
        add(&mut book, "Shopping", "buy bread", "").unwrap();
        add(&mut book, "Work", "send report", "").unwrap();

        let found = search(&book, "BREAD").unwrap();
        assert_eq!(found.lines.len(), 1);
        assert!(found.lines[0].contains("Title: Shopping"));

        let none = search(&book, "zzz").unwrap();
        assert_eq!(none.messages[0].level, MessageLevel::Warning);

        assert!(find(&book, "work").unwrap().lines[0].contains("send report"));
    }

    #[test]
    fn show_all_and_clear() {
        let mut book = NoteBook::new();
        add(&mut book, "one", "text", "x").unwrap();
        add(&mut book, "two", "text", "").unwrap();
        let table = &show_all(&book).unwrap().tables[0];
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][2], "#x");

        clear_all(&mut book).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn import_uses_file_stem_as_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "flour, water, salt").unwrap();

        let mut book = NoteBook::new();
        import(&mut book, &path).unwrap();
        let note = book.find_note("recipe").unwrap();
        assert_eq!(note.text().as_str(), "flour, water, salt");
    }

    #[test]
    fn import_missing_file_is_an_error() {
        let mut book = NoteBook::new();
        let err = import(&mut book, Path::new("/definitely/not/here.txt")).unwrap_err();
        assert_eq!(
            CmdResult::from_error(&err).messages[0].level,
            MessageLevel::Error
        );
        assert!(book.is_empty());
    }
}
