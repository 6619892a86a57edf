//! Puzzle input resolution for Advent of Code
//!
//! [`PuzzleInputResolver`] answers "give me the input for year Y, day D" with
//! an explicit, ordered policy:
//!
//! 1. return the locally cached file if there is one
//! 2. refuse keys past the local [`ReleaseWindow`]
//! 3. refuse to fetch without a session token
//! 4. fetch once from the site, persist the body, return it
//!
//! Each refusal is its own [`ResolveError`] variant, and no refusal touches
//! the cache.
//!
//! # Example
//!
//! ```no_run
//! use puzzler_core::{FileCache, PuzzleInputResolver, PuzzleKey, SessionFile, SystemClock};
//! use puzzler_http::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = PuzzleInputResolver::new(
//!     FileCache::new("."),
//!     SessionFile::load(SessionFile::DEFAULT_FILE_NAME)?,
//!     SystemClock,
//!     AocClient::new()?,
//! );
//!
//! let input = resolver.resolve(PuzzleKey::new(2024, 1))?;
//! for row in puzzler_core::tokenize(&input).rows() {
//!     println!("{:?}", row);
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
mod clock;
mod credential;
mod error;
mod key;
mod resolver;
mod tokenizer;

pub use cache::FileCache;
pub use clock::{
    Clock, FixedClock, ReleaseWindow, SystemClock, current_release_window, format_countdown,
    time_until_next_release,
};
pub use credential::{CredentialProvider, Session, SessionFile};
pub use error::{CacheError, CredentialError, ResolveError};
pub use key::{FIRST_EVENT_YEAR, LAST_PUZZLE_DAY, PuzzleKey};
pub use resolver::{InputFetcher, PuzzleInputResolver};
pub use tokenizer::{Tokens, tokenize};
