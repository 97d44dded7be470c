//! Minimax Tic-Tac-Toe - command-line solver.

use anyhow::{Context, Result};
use clap::Parser;
use minimax_tictactoe::{SearchConfig, Searcher};
use minimax_tictactoe_cli::{AppConfig, Cli, Command, selfplay, solve};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let search = match cli.tie_break {
        Some(tie_break) => SearchConfig::new(tie_break),
        None => *config.search(),
    };
    debug!(?search, "Search configured");
    let searcher = Searcher::new(search);

    let report = match cli.command {
        Command::Solve { board, json } => solve(&searcher, &board, json)?,
        Command::Selfplay { from } => {
            selfplay(&searcher, from.as_ref()).context("Self-play produced an illegal move")?
        }
    };
    println!("{report}");

    Ok(())
}
