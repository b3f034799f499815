//! Command implementations for genprompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command builds its output as a string first so the
//! formatting can be tested without capturing stdout.

mod escape;
mod list;
mod render;
mod show;


use crate::cli::{Cli, Command};
use crate::error::Result;

pub use escape::escape_text;
pub use render::render_prompt;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Only `render` reads
/// the config file; the other commands work on the built-in templates alone.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::List(args) => list::cmd_list(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Render(args) => render::cmd_render(args, cli.config.as_deref()),
        Command::Escape(args) => escape::cmd_escape(args),
    }
}
