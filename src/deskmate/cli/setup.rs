use crate::commands::{CmdResult, Table};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deskmate", bin_name = "deskmate", version)]
#[command(about = "Command-line assistant for contacts and notes", long_about = None)]
pub struct Cli {
    /// Directory holding the state and config files
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

/// A verb understood by the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    AddContact,
    ChangeContact,
    RemovePhone,
    ShowPhone,
    DeleteContact,
    ShowAll,
    SearchContacts,
    ClearAllContacts,
    AddAddress,
    ShowAddress,
    ChangeAddress,
    DeleteAddress,
    AddEmail,
    ChangeEmail,
    ShowEmail,
    DeleteEmail,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    AddNote,
    FindNote,
    EditNote,
    DeleteNote,
    ShowAllNotes,
    SearchNotes,
    ImportNote,
    ClearAllNotes,
    AddTag,
    RemoveTag,
    SearchByTag,
    SortByTag,
    ShowTags,
    ClearAllTags,
    RemoveTagFromAll,
}

impl Command {
    pub const ALL: &'static [Command] = &[
        Command::Hello,
        Command::Help,
        Command::Exit,
        Command::AddContact,
        Command::ChangeContact,
        Command::RemovePhone,
        Command::ShowPhone,
        Command::DeleteContact,
        Command::ShowAll,
        Command::SearchContacts,
        Command::ClearAllContacts,
        Command::AddAddress,
        Command::ShowAddress,
        Command::ChangeAddress,
        Command::DeleteAddress,
        Command::AddEmail,
        Command::ChangeEmail,
        Command::ShowEmail,
        Command::DeleteEmail,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::AddNote,
        Command::FindNote,
        Command::EditNote,
        Command::DeleteNote,
        Command::ShowAllNotes,
        Command::SearchNotes,
        Command::ImportNote,
        Command::ClearAllNotes,
        Command::AddTag,
        Command::RemoveTag,
        Command::SearchByTag,
        Command::SortByTag,
        Command::ShowTags,
        Command::ClearAllTags,
        Command::RemoveTagFromAll,
    ];

    /// Matches an already lowercased command token, aliases included.
    pub fn from_token(token: &str) -> Option<Self> {
        let command = match token {
            "hello" => Command::Hello,
            "help" => Command::Help,
            "exit" | "close" => Command::Exit,
            "add-contact" | "add" => Command::AddContact,
            "change-contact" | "change" => Command::ChangeContact,
            "remove-phone" => Command::RemovePhone,
            "show-phone" | "phone" => Command::ShowPhone,
            "delete-contact" | "delete" => Command::DeleteContact,
            "show-all" | "all" => Command::ShowAll,
            "search-contacts" => Command::SearchContacts,
            "clear-all-contacts" => Command::ClearAllContacts,
            "add-address" => Command::AddAddress,
            "show-address" => Command::ShowAddress,
            "change-address" => Command::ChangeAddress,
            "delete-address" => Command::DeleteAddress,
            "add-email" => Command::AddEmail,
            "change-email" => Command::ChangeEmail,
            "show-email" => Command::ShowEmail,
            "delete-email" => Command::DeleteEmail,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "add-note" => Command::AddNote,
            "find-note" => Command::FindNote,
            "edit-note" => Command::EditNote,
            "delete-note" => Command::DeleteNote,
            "show-all-notes" => Command::ShowAllNotes,
            "search-notes" => Command::SearchNotes,
            "import-note" => Command::ImportNote,
            "clear-all-notes" => Command::ClearAllNotes,
            "add-tag" => Command::AddTag,
            "remove-tag" => Command::RemoveTag,
            "search-by-tag" => Command::SearchByTag,
            "sort-by-tag" => Command::SortByTag,
            "show-tags" => Command::ShowTags,
            "clear-all-tags" => Command::ClearAllTags,
            "remove-tag-from-all" => Command::RemoveTagFromAll,
            _ => return None,
        };
        Some(command)
    }

    /// Usage line shown in help.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Exit => "exit / close",
            Command::AddContact => "add-contact <name> <phone>",
            Command::ChangeContact => "change-contact <name> <old> <new>",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::ShowPhone => "show-phone <name>",
            Command::DeleteContact => "delete-contact <name>",
            Command::ShowAll => "show-all",
            Command::SearchContacts => "search-contacts <keyword>",
            Command::ClearAllContacts => "clear-all-contacts",
            Command::AddAddress => "add-address <name> <address>",
            Command::ShowAddress => "show-address <name>",
            Command::ChangeAddress => "change-address <name> <address>",
            Command::DeleteAddress => "delete-address <name>",
            Command::AddEmail => "add-email <name> <email>",
            Command::ChangeEmail => "change-email <name> <email>",
            Command::ShowEmail => "show-email <name>",
            Command::DeleteEmail => "delete-email <name>",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays [days]",
            Command::AddNote => "add-note",
            Command::FindNote => "find-note [title]",
            Command::EditNote => "edit-note",
            Command::DeleteNote => "delete-note",
            Command::ShowAllNotes => "show-all-notes",
            Command::SearchNotes => "search-notes <keyword>",
            Command::ImportNote => "import-note <path>",
            Command::ClearAllNotes => "clear-all-notes",
            Command::AddTag => "add-tag <title> <tag>",
            Command::RemoveTag => "remove-tag <title> <tag>",
            Command::SearchByTag => "search-by-tag <tag>",
            Command::SortByTag => "sort-by-tag",
            Command::ShowTags => "show-tags",
            Command::ClearAllTags => "clear-all-tags",
            Command::RemoveTagFromAll => "remove-tag-from-all <tag>",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Command::Hello => "Greet the assistant",
            Command::Help => "Show all available commands",
            Command::Exit => "Save and exit the assistant",
            Command::AddContact => "Add a new contact or another phone",
            Command::ChangeContact => "Change a contact's phone number",
            Command::RemovePhone => "Remove a phone from a contact",
            Command::ShowPhone => "Show phone numbers of a contact",
            Command::DeleteContact => "Delete a contact",
            Command::ShowAll => "Display all contacts",
            Command::SearchContacts => "Find contacts by name, phone, birthday or email",
            Command::ClearAllContacts => "Clear all contacts",
            Command::AddAddress => "Add an address to a contact",
            Command::ShowAddress => "Show a contact's address",
            Command::ChangeAddress => "Edit a contact's address",
            Command::DeleteAddress => "Delete a contact's address",
            Command::AddEmail => "Add an email to a contact",
            Command::ChangeEmail => "Change a contact's email",
            Command::ShowEmail => "Show a contact's email",
            Command::DeleteEmail => "Delete a contact's email",
            Command::AddBirthday => "Add a birthday to a contact",
            Command::ShowBirthday => "Show a contact's birthday",
            Command::Birthdays => "Show upcoming birthdays",
            Command::AddNote => "Add a new note",
            Command::FindNote => "Find a note by title",
            Command::EditNote => "Edit the text of a note",
            Command::DeleteNote => "Delete a note",
            Command::ShowAllNotes => "Show all notes",
            Command::SearchNotes => "Search notes by keyword",
            Command::ImportNote => "Import a note from a file",
            Command::ClearAllNotes => "Delete all notes",
            Command::AddTag => "Add a tag to a note",
            Command::RemoveTag => "Remove a tag from a note",
            Command::SearchByTag => "Search notes by tag",
            Command::SortByTag => "Sort notes by tags",
            Command::ShowTags => "Display all unique tags used in notes",
            Command::ClearAllTags => "Remove all tags from every note",
            Command::RemoveTagFromAll => "Remove a specific tag from all notes",
        }
    }
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    General,
    Contacts,
    Address,
    Email,
    Birthday,
    Notes,
    Tags,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::General => "GENERAL",
            CommandGroup::Contacts => "CONTACTS",
            CommandGroup::Address => "ADDRESS",
            CommandGroup::Email => "EMAIL",
            CommandGroup::Birthday => "BIRTHDAY",
            CommandGroup::Notes => "NOTES",
            CommandGroup::Tags => "TAGS",
        }
    }

    pub fn for_command(command: Command) -> Self {
        use Command::*;
        match command {
            Hello | Help | Exit => CommandGroup::General,
            AddContact | ChangeContact | RemovePhone | ShowPhone | DeleteContact | ShowAll
            | SearchContacts | ClearAllContacts => CommandGroup::Contacts,
            AddAddress | ShowAddress | ChangeAddress | DeleteAddress => CommandGroup::Address,
            AddEmail | ChangeEmail | ShowEmail | DeleteEmail => CommandGroup::Email,
            AddBirthday | ShowBirthday | Birthdays => CommandGroup::Birthday,
            AddNote | FindNote | EditNote | DeleteNote | ShowAllNotes | SearchNotes
            | ImportNote | ClearAllNotes => CommandGroup::Notes,
            AddTag | RemoveTag | SearchByTag | SortByTag | ShowTags | ClearAllTags
            | RemoveTagFromAll => CommandGroup::Tags,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::General,
            CommandGroup::Contacts,
            CommandGroup::Address,
            CommandGroup::Email,
            CommandGroup::Birthday,
            CommandGroup::Notes,
            CommandGroup::Tags,
        ]
    }
}

/// The `help` output: one titled table per command group.
pub fn grouped_help() -> CmdResult {
    let mut result = CmdResult::default();
    for group in CommandGroup::all() {
        let mut table = Table::new(["Command", "Description"]).titled(group.heading());
        for command in Command::ALL
            .iter()
            .filter(|c| CommandGroup::for_command(**c) == *group)
        {
            table.push_row(vec![command.usage().to_string(), command.about().to_string()]);
        }
        result = result.with_table(table);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_data_dir_and_verbose() {
        let cli = Cli::try_parse_from(["deskmate", "--data-dir", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn aliases_resolve_to_the_same_command() {
        assert_eq!(Command::from_token("add"), Some(Command::AddContact));
        assert_eq!(Command::from_token("close"), Some(Command::Exit));
        assert_eq!(Command::from_token("all"), Some(Command::ShowAll));
        assert_eq!(Command::from_token("ADD"), None);
        assert_eq!(Command::from_token("nope"), None);
    }

    #[test]
    fn every_usage_starts_with_a_token_that_parses() {
        for command in Command::ALL {
            let token = command.usage().split_whitespace().next().unwrap();
            assert_eq!(Command::from_token(token), Some(*command));
        }
    }

    #[test]
    fn help_lists_every_command_once() {
        let help = grouped_help();
        assert_eq!(help.tables.len(), CommandGroup::all().len());
        let rows: usize = help.tables.iter().map(|t| t.rows.len()).sum();
        assert_eq!(rows, Command::ALL.len());
        assert_eq!(help.tables[0].title.as_deref(), Some("GENERAL"));
    }
}
