//! Configuration resolution from CLI args

use crate::cli::Args;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Directory holding cached inputs
    pub cache_dir: PathBuf,
    /// Session token file
    pub session_file: PathBuf,
    /// Request timeout (None = wait indefinitely)
    pub timeout: Option<Duration>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: &'static str,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        let log_level = if args.quiet {
            "warn"
        } else if args.verbose {
            "debug"
        } else {
            "info"
        };

        Config {
            cache_dir: expand_tilde(&args.dir),
            session_file: expand_tilde(&args.session_file),
            timeout: args.timeout.map(Duration::from_secs),
            log_level,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
