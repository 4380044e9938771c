//! # Deskmate Architecture
//!
//! Deskmate is a personal assistant for the terminal: an address book of
//! contacts (phones, birthday, email, address) and a note book of titled,
//! tagged notes, driven from an interactive command loop and saved to a
//! single JSON file between sessions.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - REPL: reads lines, splits them, renders results          │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded books and the store                      │
//! │  - Thin facade over commands, saves on request              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates raw arguments, mutates the model               │
//! │  - Returns `CmdResult` (messages, lines, tables)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model/) + Field values (fields.rs)                  │
//! │  - Record, AddressBook, Note, NoteBook                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing prints, reads the terminal or exits the
//! process. Every failure is an [`error::AssistantError`]; the dispatcher
//! turns it into a warning or error message and keeps going.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per command area
//! - [`model`]: Contact records and notes, and the books holding them
//! - [`fields`]: Validated field values (name, phone, email, title, ...)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Data directory resolution and `config.json`
//! - [`logging`]: `env_logger` setup
//! - [`error`]: Error types
//! - [`cli`]: The interactive client

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod logging;
pub mod model;
pub mod store;
