use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// Where command lines and prompt answers come from.
pub trait InputSource {
    /// Shows `prompt` and reads one line without its line ending.
    /// `None` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

pub struct StdinInput {
    color: bool,
}

impl StdinInput {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut stdout = io::stdout();
        let shown = if self.color {
            prompt.magenta().to_string()
        } else {
            prompt.to_string()
        };
        // a failed prompt write is not worth aborting the read for
        let _ = write!(stdout, "{}", shown);
        let _ = stdout.flush();

        next_line(&mut io::stdin().lock())
    }
}

/// One line from `reader`. Bytes that are not UTF-8 are replaced rather
/// than ending the input; only end of file or a failing reader does that.
fn next_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf) {
        Ok(0) => return None,
        Ok(_) => {}
        Err(e) => {
            debug!("stdin read failed: {}", e);
            return None;
        }
    }
    let line = String::from_utf8_lossy(&buf);
    Some(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Replays a fixed list of lines and records the prompts it was shown.
#[cfg(test)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn lines_lose_their_endings() {
        let mut reader = Cursor::new(b"hello\r\nexit\n".to_vec());
        assert_eq!(next_line(&mut reader).as_deref(), Some("hello"));
        assert_eq!(next_line(&mut reader).as_deref(), Some("exit"));
        assert_eq!(next_line(&mut reader), None);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let mut reader = Cursor::new(b"exit".to_vec());
        assert_eq!(next_line(&mut reader).as_deref(), Some("exit"));
        assert_eq!(next_line(&mut reader), None);
    }

    #[test]
    fn invalid_utf8_does_not_end_input() {
        let mut reader = Cursor::new(b"hello \xff\xfe\nexit\n".to_vec());
        let first = next_line(&mut reader).unwrap();
        assert!(first.starts_with("hello "));
        assert!(first.contains('\u{FFFD}'));
        assert_eq!(next_line(&mut reader).as_deref(), Some("exit"));
    }
}
