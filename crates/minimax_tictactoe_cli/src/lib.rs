//! Command-line front end for the minimax tic-tac-toe solver.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Command};
pub use commands::{selfplay, solve};
pub use config::{AppConfig, ConfigError};
