//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use puzzler_core::{FIRST_EVENT_YEAR, LAST_PUZZLE_DAY, SessionFile};
use std::path::PathBuf;

/// Advent of Code puzzle input fetcher
#[derive(Parser, Debug)]
#[command(
    name = "puzzler",
    about = "Fetch and cache Advent of Code puzzle inputs",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding cached puzzle inputs
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// File holding the session token
    #[arg(long, global = true, default_value = SessionFile::DEFAULT_FILE_NAME)]
    pub session_file: PathBuf,

    /// HTTP timeout in seconds (waits indefinitely if omitted)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug details
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print a puzzle's input, fetching and caching it if needed
    Input {
        /// Puzzle year (defaults to the current year)
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(i64::from(FIRST_EVENT_YEAR)..))]
        year: Option<u16>,

        /// Puzzle day (defaults to today's unlocked day)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=i64::from(LAST_PUZZLE_DAY)))]
        day: Option<u8>,

        /// Print the input split into lines and fields
        #[arg(long)]
        tokens: bool,
    },

    /// Save a session token so inputs can be fetched
    Setup {
        /// Check the token against the site before saving it
        #[arg(long)]
        verify: bool,
    },

    /// Show the time left until the next puzzle unlocks
    Countdown,
}
