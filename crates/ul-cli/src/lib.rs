//! ul-cli library
//!
//! Exports the HTTP client, the session loop and the terminal renderer for
//! the `user-list` binary and its tests.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod session;
pub(crate) mod session_commands;
pub mod terminal;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};
pub use session::{Reply, Session, stdin_lines};
pub use session_commands::{SessionCommands, SessionLine};
