//! Puzzler HTTP Client
//!
//! Blocking client for the Advent of Code website. It fetches personalized
//! puzzle inputs and checks whether a session cookie is still valid.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Detection of the site's "not released yet" rejection
//! - Session validation that reports the account's user ID
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use puzzler_http::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! if let Some(user_id) = client.verify_session(session)?.user_id {
//!     println!("Session is valid! User ID: {}", user_id);
//! }
//!
//! let input = client.get_input(2024, 1, session)?;
//! println!("{} bytes", input.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder, SessionInfo};
pub use error::AocError;
pub use parser::{REJECTION_PHRASE, is_rejection};
