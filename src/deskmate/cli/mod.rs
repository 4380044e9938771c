//! # CLI Layer
//!
//! This module is **one possible UI client** for deskmate: an interactive
//! REPL on stdin/stdout. It is the only place that:
//! - Parses process arguments
//! - Reads lines from the terminal
//! - Prints colored output
//!
//! ## Structure
//!
//! - [`run`]: wires config, store, API and dispatcher together (called by `main.rs`)
//! - `setup`: clap arguments, the REPL verb table and grouped help
//! - `dispatch`: the read, split, dispatch, render loop
//! - `render`: `CmdResult` to terminal text
//! - `input`: where lines come from (stdin, or a script in tests)
//! - `prompts`: the questions asked while creating or editing notes
//!
//! Dispatcher tests run against `InMemoryStore`, a scripted input and a
//! renderer writing into a buffer, so no terminal is needed.

pub mod dispatch;
pub mod input;
pub mod prompts;
pub mod render;
pub mod setup;

use crate::api::AssistantApi;
use crate::config::{resolve_data_dir, AssistantConfig};
use crate::error::Result;
use crate::logging;
use crate::store::fs::FileStore;
use clap::Parser;
use dispatch::Dispatcher;
use input::StdinInput;
use log::info;
use render::ConsoleRenderer;
use setup::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir)?;
    let config = AssistantConfig::load(&data_dir)?;
    info!("using data dir {}", data_dir.display());

    let store = FileStore::new(data_dir).with_data_file(&config.data_file);
    let api = AssistantApi::open(store)?.with_birthday_window(config.birthday_window);

    let color = console::colors_enabled();
    let mut dispatcher = Dispatcher::new(
        api,
        ConsoleRenderer::stdout(color),
        StdinInput::new(color),
    );
    let outcome = dispatcher.run();

    // save even when the session ended on an output error
    let (mut api, _, _) = dispatcher.into_parts();
    api.save()?;
    outcome
}
