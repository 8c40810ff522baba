//! Command handlers, one module per subcommand.

pub mod config_cmd;
pub mod list;
pub mod show;

use rolodex_core::Directory;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a directory-backed command to its handler.
///
/// `config` and `completions` never reach here; `main` handles them
/// before a `Directory` is built.
pub async fn dispatch(
    cmd: Command,
    directory: &Directory,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::List(args) => list::handle(directory, args, global).await,
        Command::Show(args) => show::handle(directory, args, global).await,
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
