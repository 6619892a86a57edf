//! Puzzler CLI - fetch and cache Advent of Code puzzle inputs

mod cli;
mod config;
mod error;
mod logging;
mod setup;

use clap::Parser;
use cli::{Args, Command};
use config::Config;
use error::CliError;
use puzzler_core::{
    FileCache, PuzzleInputResolver, PuzzleKey, SessionFile, SystemClock, current_release_window,
    format_countdown, time_until_next_release, tokenize,
};
use puzzler_http::AocClient;
use std::io::Write;
use tracing::debug;

fn main() {
    let args = Args::parse();
    let config = Config::from_args(&args);
    logging::init(config.log_level);

    if let Err(e) = run(args.command, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command, config: &Config) -> Result<(), CliError> {
    match command {
        Command::Input { year, day, tokens } => print_input(config, year, day, tokens),
        Command::Setup { verify } => setup::run(config, verify),
        Command::Countdown => {
            let remaining = time_until_next_release(&SystemClock);
            println!("Next puzzle unlocks in {}", format_countdown(remaining));
            Ok(())
        }
    }
}

/// Resolve one puzzle input and write it to stdout
fn print_input(
    config: &Config,
    year: Option<u16>,
    day: Option<u8>,
    tokens: bool,
) -> Result<(), CliError> {
    let input = load_input(config, puzzle_key(year, day)?)?;

    let mut stdout = std::io::stdout().lock();
    if tokens {
        writeln!(stdout, "{}", tokenize(&input))?;
    } else {
        stdout.write_all(input.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

/// Resolve `key` against the configured cache and session file
fn load_input(config: &Config, key: PuzzleKey) -> Result<String, CliError> {
    let cache = FileCache::new(&config.cache_dir);
    debug!(dir = %cache.dir().display(), "using cache directory");

    let credentials = SessionFile::load_or_disabled(&config.session_file);
    if !credentials.is_configured() {
        debug!("run `puzzler setup` to enable fetching");
    }

    let resolver = PuzzleInputResolver::new(
        cache,
        credentials,
        SystemClock,
        AocClient::builder().timeout(config.timeout).build()?,
    );
    Ok(resolver.resolve(key)?)
}

/// Fill in a missing year or day from today's release window
fn puzzle_key(year: Option<u16>, day: Option<u8>) -> Result<PuzzleKey, CliError> {
    let window = current_release_window(&SystemClock);
    let year = match year {
        Some(year) => year,
        None => u16::try_from(window.year)
            .map_err(|_| CliError::Config(format!("Unsupported current year {}", window.year)))?,
    };
    Ok(PuzzleKey::new(year, day.unwrap_or(window.day)))
}
