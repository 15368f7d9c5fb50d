/// Dispatch the parsed arguments to the matching command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and its warnings
/// - `Err` on any fatal error (missing directory, unreadable file, malformed row, ...)
use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{export::export, import::import, init::init},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Export(args)) => export(args),
        Some(Command::Import(args)) => import(args),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
