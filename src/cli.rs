//! CLI - command-line surface for reelfeed
//!
//! Every screen of the app is reachable as a subcommand. Output is plain
//! text on a TTY and JSON otherwise (or with `--json`), so everything is
//! scriptable.
//!
//! # Examples
//!
//! ```bash
//! # Shuffled discover rows
//! reelfeed home
//!
//! # Popular movies, upstream page 2, second display page
//! reelfeed movies --page 2 --show-page 2
//!
//! # Search and details
//! reelfeed search "the batman"
//! reelfeed details 414906 -t movie
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;

use crate::models::MediaKind;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments / missing configuration
    InvalidArgs = 2,
    /// Network or API error
    NetworkError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// reelfeed - browse movies and TV shows from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "reelfeed",
    version,
    about = "Browse movies and TV shows from the terminal",
    after_help = "EXAMPLES:\n\
                  reelfeed home                      Shuffled discover rows\n\
                  reelfeed movies --page 2           Popular movies, upstream page 2\n\
                  reelfeed search \"blade runner\"     Search movies and TV\n\
                  reelfeed details 550 -t movie      Cast, directors, reviews"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shuffled discover rows for movies and TV shows
    #[command(visible_alias = "h")]
    Home,

    /// Popular movies listing
    #[command(visible_alias = "m")]
    Movies(ListingCmd),

    /// Popular TV shows listing
    #[command(visible_alias = "t")]
    Tv(ListingCmd),

    /// Search for movies and TV shows
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Cast, directors and reviews for one item
    #[command(visible_alias = "d")]
    Details(DetailsCmd),

    /// Verify API key and connectivity
    Check,

    /// Store the TMDB API key in the config file
    SetKey(SetKeyCmd),
}

#[derive(Args, Debug)]
pub struct SetKeyCmd {
    /// API key to store (TMDB_API_KEY still takes precedence when set)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct ListingCmd {
    /// Upstream API page to fetch (1-based)
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: u32,

    /// Display page over the fetched list (1-based, 10 per page)
    #[arg(long, default_value_t = 1)]
    pub show_page: usize,
}

#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query
    pub query: String,
}

#[derive(Args, Debug)]
pub struct DetailsCmd {
    /// TMDB item id
    pub id: u64,

    /// Media type of the item
    #[arg(long, short = 't', value_enum)]
    pub media_type: MediaTypeArg,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum MediaTypeArg {
    Movie,
    Tv,
}

impl From<MediaTypeArg> for MediaKind {
    fn from(arg: MediaTypeArg) -> Self {
        match arg {
            MediaTypeArg::Movie => MediaKind::Movie,
            MediaTypeArg::Tv => MediaKind::Tv,
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print a progress/info line to stderr (suppressed in JSON/quiet mode)
    pub fn info(&self, msg: impl AsRef<str>) {
        if !self.json && !self.quiet {
            eprintln!("{}", msg.as_ref());
        }
    }

    /// Print an error to stderr and return the exit code
    pub fn error(&self, msg: impl AsRef<str>, code: ExitCode) -> ExitCode {
        eprintln!("error: {}", msg.as_ref());
        code
    }

    /// Serialize a value as pretty JSON on stdout
    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_media_type_arg_maps_to_kind() {
        assert_eq!(MediaKind::from(MediaTypeArg::Movie), MediaKind::Movie);
        assert_eq!(MediaKind::from(MediaTypeArg::Tv), MediaKind::Tv);
    }

    #[test]
    fn test_set_key_takes_positional_key() {
        let cli = Cli::parse_from(["reelfeed", "set-key", "abc123"]);
        match cli.command {
            Command::SetKey(cmd) => assert_eq!(cmd.key, "abc123"),
            _ => panic!("expected set-key command"),
        }
    }

    #[test]
    fn test_listing_defaults() {
        let cli = Cli::parse_from(["reelfeed", "movies"]);
        match cli.command {
            Command::Movies(cmd) => {
                assert_eq!(cmd.page, 1);
                assert_eq!(cmd.show_page, 1);
            }
            _ => panic!("expected movies command"),
        }
    }
}
