use crate::commands::notes::notes_table;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteBook;

pub fn add_tag(book: &mut NoteBook, title: &str, tag: &str) -> Result<CmdResult> {
    book.find_note_mut(title)?.add_tag(tag)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Tag '{}' added to '{}'.",
        tag.trim(),
        title.trim()
    ))))
}

pub fn remove_tag(book: &mut NoteBook, title: &str, tag: &str) -> Result<CmdResult> {
    book.find_note_mut(title)?.remove_tag(tag)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Tag '{}' removed from '{}'.",
        tag.trim(),
        title.trim()
    ))))
}

pub fn search_by_tag(book: &NoteBook, tag: &str) -> Result<CmdResult> {
    let matches = book.search_by_tag(tag);
    if matches.is_empty() {
        return Ok(CmdResult::message(CmdMessage::warning(format!(
            "No notes tagged '{}'.",
            tag.trim()
        ))));
    }
    Ok(CmdResult::default().with_table(notes_table(matches.into_iter())))
}

/// Sorts the note book in place and shows the new order.
pub fn sort_by_tag(book: &mut NoteBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::warning("No notes yet.")));
    }
    let sorted = book.sort_by_tag();
    Ok(CmdResult::default().with_table(notes_table(sorted.iter())))
}

pub fn show_tags(book: &NoteBook) -> Result<CmdResult> {
    let tags = book.list_all_tags();
    if tags.is_empty() {
        return Ok(CmdResult::message(CmdMessage::warning("No tags found.")));
    }
    Ok(CmdResult::default().with_lines(tags))
}

pub fn clear_all_tags(book: &mut NoteBook) -> Result<CmdResult> {
    let cleared = book.clear_all_tags();
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Tags cleared from {} note(s).",
        cleared
    ))))
}

pub fn remove_tag_from_all(book: &mut NoteBook, tag: &str) -> Result<CmdResult> {
    let removed = book.remove_tag_from_all(tag)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Tag '{}' removed from {} note(s).",
        tag.trim(),
        removed
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{notes, MessageLevel};

    fn book() -> NoteBook {
        let mut book = NoteBook::new();
        notes::add(&mut book, "A", "text", "x").unwrap();
        notes::add(&mut book, "B", "text", "x,y").unwrap();
        notes::add(&mut book, "C", "text", "").unwrap();
        book
    }

    #[test]
    fn sort_by_tag_reorders_book() {
        let mut book = book();
        let result = sort_by_tag(&mut book).unwrap();
        let order: Vec<_> = result.tables[0].rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        let stored: Vec<_> = book.iter().map(|n| n.title().as_str()).collect();
        assert_eq!(stored, vec!["B", "A", "C"]);
    }

    #[test]
    fn add_and_remove_single_tag() {
        let mut book = book();
        add_tag(&mut book, "c", "new").unwrap();
        assert!(book.find_note("C").unwrap().has_tag("new"));
        remove_tag(&mut book, "c", "new").unwrap();
        let err = remove_tag(&mut book, "c", "new").unwrap_err();
        assert_eq!(err.to_string(), "Tag 'new' not found.");
    }

    #[test]
    fn search_by_tag_lists_tagged_notes() {
        let book = book();
        let result = search_by_tag(&book, "y").unwrap();
        assert_eq!(result.tables[0].rows.len(), 1);
        assert_eq!(
            search_by_tag(&book, "zzz").unwrap().messages[0].level,
            MessageLevel::Warning
        );
    }

    #[test]
    fn show_tags_is_sorted() {
        let book = book();
        assert_eq!(show_tags(&book).unwrap().lines, vec!["x", "y"]);
    }

    #[test]
    fn remove_tag_from_all_names_the_missing_tag() {
        let mut book = book();
        let ok = remove_tag_from_all(&mut book, "x").unwrap();
        assert_eq!(ok.messages[0].content, "Tag 'x' removed from 2 note(s).");
        let err = remove_tag_from_all(&mut book, "x").unwrap_err();
        assert_eq!(err.to_string(), "Tag 'x' not found.");
    }

    #[test]
    fn clear_all_tags_empties_every_note() {
        let mut book = book();
        clear_all_tags(&mut book).unwrap();
        assert!(book.list_all_tags().is_empty());
    }
}
