//! # Rendering
//!
//! Turns a [`CmdResult`] into terminal output. Messages are colored by level,
//! plain lines are blue, and tables are laid out as aligned columns.
//!
//! Layout (widths, truncation, padding) is computed on the plain text and
//! color is applied afterwards, so escape codes never skew the alignment.

use colored::{ColoredString, Colorize};
use crate::commands::{CmdMessage, CmdResult, MessageLevel, Table};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a table cell may get before it is cut with an ellipsis.
pub const MAX_CELL_WIDTH: usize = 40;
const COLUMN_SEPARATOR: &str = " │ ";

pub trait Renderer {
    fn render(&mut self, result: &CmdResult) -> io::Result<()>;
}

pub struct ConsoleRenderer<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_message(&mut self, message: &CmdMessage) -> io::Result<()> {
        let style: fn(&str) -> ColoredString = match message.level {
            MessageLevel::Info => |s| s.normal(),
            MessageLevel::Success => |s| s.green(),
            MessageLevel::Warning => |s| s.yellow(),
            MessageLevel::Error => |s| s.red(),
        };
        let line = self.paint(&message.content, style);
        writeln!(self.out, "{}", line)
    }

    fn write_table(&mut self, table: &Table) -> io::Result<()> {
        if let Some(title) = &table.title {
            let title = self.paint(title, |s| s.cyan().bold());
            writeln!(self.out, "\n{}", title)?;
        }

        let headers: Vec<String> = table
            .headers
            .iter()
            .map(|h| truncate_to_width(h, MAX_CELL_WIDTH))
            .collect();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| truncate_to_width(cell, MAX_CELL_WIDTH))
                    .collect()
            })
            .collect();
        let widths = column_widths(&headers, &rows);

        let header_line = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| self.paint(&pad(h, *w), |s| s.cyan()))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        writeln!(self.out, " {}", header_line)?;

        let rule = widths
            .iter()
            .map(|w| "─".repeat(*w + 2))
            .collect::<Vec<_>>()
            .join("┼");
        writeln!(self.out, "{}", rule)?;

        for row in &rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad(row.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR);
            writeln!(self.out, " {}", line.trim_end())?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, result: &CmdResult) -> io::Result<()> {
        for table in &result.tables {
            self.write_table(table)?;
        }
        for line in &result.lines {
            let painted = self.paint(line, |s| s.blue());
            writeln!(self.out, "{}", painted)?;
        }
        for message in &result.messages {
            self.write_message(message)?;
        }
        self.out.flush()
    }
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i >= widths.len() {
                widths.push(0);
            }
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(result: &CmdResult) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new(), false);
        renderer.render(result).unwrap();
        String::from_utf8(renderer.output().clone()).unwrap()
    }

    #[test]
    fn messages_are_one_line_each() {
        let mut result = CmdResult::message(CmdMessage::success("Contact added."));
        result.add_message(CmdMessage::warning("careful"));
        assert_eq!(rendered(&result), "Contact added.\ncareful\n");
    }

    #[test]
    fn table_columns_are_aligned() {
        let mut table = Table::new(["Name", "Phone"]);
        table.push_row(vec!["Alexandra".into(), "1".into()]);
        table.push_row(vec!["Bo".into(), "1234567890".into()]);
        let out = rendered(&CmdResult::default().with_table(table));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], " Name      │ Phone     ");
        assert_eq!(lines[2], " Alexandra │ 1");
        assert_eq!(lines[3], " Bo        │ 1234567890");
    }

    #[test]
    fn table_title_is_printed_above() {
        let table = Table::new(["Command"]).titled("GENERAL");
        let out = rendered(&CmdResult::default().with_table(table));
        assert!(out.starts_with("\nGENERAL\n"));
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(MAX_CELL_WIDTH + 10);
        let cut = truncate_to_width(&long, MAX_CELL_WIDTH);
        assert_eq!(cut.width(), MAX_CELL_WIDTH);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", MAX_CELL_WIDTH), "short");
    }

    #[test]
    fn colored_output_keeps_text() {
        let mut renderer = ConsoleRenderer::new(Vec::new(), true);
        renderer
            .render(&CmdResult::message(CmdMessage::error("Invalid command.")))
            .unwrap();
        let out = String::from_utf8(renderer.output().clone()).unwrap();
        assert!(out.contains("Invalid command."));
    }
}
