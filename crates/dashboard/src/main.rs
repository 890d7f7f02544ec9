//! Task dashboard command-line front end
//!
//! Renders the board as text and turns each command into one board
//! transition. Logs go to stderr, the board to stdout.

mod cli;
mod commands;
mod state;
mod view;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::Reply;
use crate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_cli=warn,dashboard_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let state = AppState::new(&config);

    match commands::run(cli.command, &state).await {
        Ok(Reply::Shown(output)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(Reply::Refused(message)) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
