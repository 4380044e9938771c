//! # REPL Dispatcher
//!
//! Reads one line at a time from an [`InputSource`], splits it into a command
//! token and arguments, calls the matching [`AssistantApi`] method and hands
//! the [`CmdResult`] to a [`Renderer`].
//!
//! Command failures never end the session: they are rendered as a warning or
//! error message and the loop goes on. Only a failing renderer stops it.
//!
//! Splitting honours quotes: `"..."` and `'...'` group words into one
//! argument and an unterminated quote runs to the end of the line. The
//! command token is lowercased; arguments are passed through as typed.

use super::input::InputSource;
use super::prompts;
use super::render::Renderer;
use super::setup::{grouped_help, Command};
use crate::api::AssistantApi;
use crate::commands::address::AddressAction;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AssistantError, Result};
use crate::fields::Title;
use crate::store::DataStore;
use log::debug;
use std::path::Path;

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Dispatcher<S: DataStore, R: Renderer, I: InputSource> {
    api: AssistantApi<S>,
    renderer: R,
    input: I,
}

impl<S: DataStore, R: Renderer, I: InputSource> Dispatcher<S, R, I> {
    pub fn new(api: AssistantApi<S>, renderer: R, input: I) -> Self {
        Self {
            api,
            renderer,
            input,
        }
    }

    pub fn into_parts(self) -> (AssistantApi<S>, R, I) {
        (self.api, self.renderer, self.input)
    }

    /// Runs until `exit`/`close` or the end of input.
    pub fn run(&mut self) -> Result<()> {
        self.show(&CmdResult::message(CmdMessage::info(GREETING)))?;
        loop {
            let Some(line) = self.input.read_line(prompts::COMMAND) else {
                debug!("input exhausted");
                return self.show(&CmdResult::message(CmdMessage::info(FAREWELL)));
            };
            if self.handle_line(&line)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let tokens = split_line(line);
        let Some((token, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = Command::from_token(&token.to_lowercase()) else {
            debug!("unknown command {:?}", token);
            self.show(&CmdResult::message(CmdMessage::error("Invalid command.")))?;
            return Ok(Flow::Continue);
        };

        if command == Command::Exit {
            self.show(&CmdResult::message(CmdMessage::info(FAREWELL)))?;
            return Ok(Flow::Exit);
        }

        debug!("dispatching {:?} with {} argument(s)", command, args.len());
        let result = self.execute(command, args).unwrap_or_else(|e| {
            debug!("{:?} failed: {:?}", command, e);
            CmdResult::from_error(&e)
        });
        self.show(&result)?;
        Ok(Flow::Continue)
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        self.renderer.render(result).map_err(AssistantError::Io)
    }

    fn prompt(&mut self, variants: &[&'static str]) -> String {
        self.input
            .read_line(prompts::pick(variants))
            .unwrap_or_default()
    }

    fn execute(&mut self, command: Command, args: &[String]) -> Result<CmdResult> {
        match command {
            Command::Hello => Ok(CmdResult::message(CmdMessage::info("How can I help you?"))),
            Command::Help => Ok(grouped_help()),
            Command::Exit => Ok(CmdResult::message(CmdMessage::info(FAREWELL))),

            Command::AddContact => {
                let [name, phone] = take::<2>(args)?;
                self.api.add_contact(name, phone)
            }
            Command::ChangeContact => {
                let [name, old, new] = take::<3>(args)?;
                self.api.change_contact(name, old, new)
            }
            Command::RemovePhone => {
                let [name, phone] = take::<2>(args)?;
                self.api.remove_phone(name, phone)
            }
            Command::ShowPhone => {
                let [name] = take::<1>(args)?;
                self.api.show_phone(name)
            }
            Command::DeleteContact => {
                let [name] = take::<1>(args)?;
                self.api.delete_contact(name)
            }
            Command::ShowAll => self.api.show_all_contacts(),
            Command::SearchContacts => self.api.search_contacts(&rest(args, 0)?),
            Command::ClearAllContacts => self.api.clear_all_contacts(),

            Command::AddAddress => {
                let [name] = take::<1>(args)?;
                let address = rest(args, 1)?;
                self.api.address(name, AddressAction::Add(&address))
            }
            Command::ShowAddress => {
                let [name] = take::<1>(args)?;
                self.api.address(name, AddressAction::Show)
            }
            Command::ChangeAddress => {
                let [name] = take::<1>(args)?;
                let address = rest(args, 1)?;
                self.api.address(name, AddressAction::Edit(&address))
            }
            Command::DeleteAddress => {
                let [name] = take::<1>(args)?;
                self.api.address(name, AddressAction::Delete)
            }

            Command::AddEmail => {
                let [name, email] = take::<2>(args)?;
                self.api.add_email(name, email)
            }
            Command::ChangeEmail => {
                let [name, email] = take::<2>(args)?;
                self.api.change_email(name, email)
            }
            Command::ShowEmail => {
                let [name] = take::<1>(args)?;
                self.api.show_email(name)
            }
            Command::DeleteEmail => {
                let [name] = take::<1>(args)?;
                self.api.delete_email(name)
            }

            Command::AddBirthday => {
                let [name, birthday] = take::<2>(args)?;
                self.api.add_birthday(name, birthday)
            }
            Command::ShowBirthday => {
                let [name] = take::<1>(args)?;
                self.api.show_birthday(name)
            }
            Command::Birthdays => {
                let days = match args.first() {
                    None => None,
                    Some(raw) => Some(
                        raw.parse::<i64>()
                            .ok()
                            .filter(|d| *d >= 0)
                            .ok_or(AssistantError::InvalidArguments)?,
                    ),
                };
                self.api.upcoming_birthdays(days)
            }

            Command::AddNote => {
                let title = self.prompt(prompts::TITLE);
                // reject a bad or taken title before asking for the text
                Title::parse(&title)?;
                if self.api.notes().find_note(&title).is_ok() {
                    return Err(AssistantError::DuplicateNote(title.trim().to_string()));
                }
                let text = self.prompt(prompts::TEXT);
                let tags = self.prompt(prompts::TAGS);
                self.api.add_note(&title, &text, &tags)
            }
            Command::FindNote => {
                let title = if args.is_empty() {
                    self.prompt(prompts::FIND_TITLE)
                } else {
                    args.join(" ")
                };
                self.api.find_note(&title)
            }
            Command::EditNote => {
                let title = self.prompt(prompts::EDIT_TITLE);
                self.api.notes().find_note(&title)?;
                let text = self.prompt(prompts::EDIT_TEXT);
                self.api.edit_note(&title, &text)
            }
            Command::DeleteNote => {
                let title = self.prompt(prompts::DELETE_TITLE);
                self.api.delete_note(&title)
            }
            Command::ShowAllNotes => self.api.show_all_notes(),
            Command::SearchNotes => self.api.search_notes(&rest(args, 0)?),
            Command::ImportNote => {
                let path = rest(args, 0)?;
                self.api.import_note(Path::new(&path))
            }
            Command::ClearAllNotes => self.api.clear_all_notes(),

            Command::AddTag => {
                let [title, tag] = take::<2>(args)?;
                self.api.add_tag(title, tag)
            }
            Command::RemoveTag => {
                let [title, tag] = take::<2>(args)?;
                self.api.remove_tag(title, tag)
            }
            Command::SearchByTag => {
                let [tag] = take::<1>(args)?;
                self.api.search_by_tag(tag)
            }
            Command::SortByTag => self.api.sort_by_tag(),
            Command::ShowTags => self.api.show_tags(),
            Command::ClearAllTags => self.api.clear_all_tags(),
            Command::RemoveTagFromAll => {
                let [tag] = take::<1>(args)?;
                self.api.remove_tag_from_all(tag)
            }
        }
    }
}

/// The first `N` arguments. Extra ones are ignored.
fn take<const N: usize>(args: &[String]) -> Result<[&str; N]> {
    if args.len() < N {
        return Err(AssistantError::InvalidArguments);
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// Everything from argument `from` on, joined by single spaces.
fn rest(args: &[String], from: usize) -> Result<String> {
    match args.get(from..) {
        Some(tail) if !tail.is_empty() => Ok(tail.join(" ")),
        _ => Err(AssistantError::InvalidArguments),
    }
}

pub fn split_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}
