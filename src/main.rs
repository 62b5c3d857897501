//! reelfeed - browse movies and TV shows from the terminal
//!
//! # Usage
//!
//! ```bash
//! reelfeed home
//! reelfeed movies --page 2
//! reelfeed search "blade runner"
//! reelfeed details 550 -t movie
//! reelfeed check
//! reelfeed set-key <key>
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reelfeed::cli::{Cli, Command, Output};
use reelfeed::commands;
use reelfeed::models::MediaKind;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(&cli);

    let code = match cli.command {
        Command::Home => commands::home_cmd(&output).await,
        Command::Movies(cmd) => commands::listing_cmd(MediaKind::Movie, cmd, &output).await,
        Command::Tv(cmd) => commands::listing_cmd(MediaKind::Tv, cmd, &output).await,
        Command::Search(cmd) => commands::search_cmd(cmd, &output).await,
        Command::Details(cmd) => commands::details_cmd(cmd, &output).await,
        Command::Check => commands::check_cmd(&output).await,
        Command::SetKey(cmd) => commands::set_key_cmd(cmd, &output),
    };

    code.into()
}
