//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input resolution failed
    #[error("{0}")]
    Resolve(#[from] puzzler_core::ResolveError),

    /// Session file error
    #[error("{0}")]
    Credential(#[from] puzzler_core::CredentialError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] puzzler_http::AocError),

    /// The site did not accept the session token
    #[error("Invalid session: the site did not recognize this token")]
    InvalidSession,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
