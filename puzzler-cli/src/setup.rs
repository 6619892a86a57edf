//! Interactive creation of the session file

use crate::config::Config;
use crate::error::CliError;
use puzzler_core::{CredentialError, Session, SessionFile};
use puzzler_http::AocClient;
use tracing::info;
use zeroize::Zeroizing;

const INSTRUCTIONS: &[&str] = &[
    "1. Log into https://adventofcode.com in your browser.",
    "2. Open the developer tools and go to the storage (Application) tab.",
    "3. Open 'Cookies' and select https://adventofcode.com.",
    "4. Copy the value of the cookie named 'session'.",
];

/// Prompt for a session token and save it to the configured file
pub fn run(config: &Config, verify: bool) -> Result<(), CliError> {
    if config.session_file.exists() {
        println!(
            "{} already exists and will be replaced.",
            config.session_file.display()
        );
    }

    for line in INSTRUCTIONS {
        println!("{}", line);
    }
    let session = prompt_session()?;

    if verify {
        let client = AocClient::builder().timeout(config.timeout).build()?;
        match client.verify_session(session.expose())?.user_id {
            Some(user_id) => println!("Session is valid for user #{}.", user_id),
            None => return Err(CliError::InvalidSession),
        }
    }

    SessionFile::store(&config.session_file, &session)?;
    info!(path = %config.session_file.display(), "session file created");
    println!(
        "Created {}. Session cookies last about a month.",
        config.session_file.display()
    );
    Ok(())
}

/// Read the token without echoing it
fn prompt_session() -> Result<Session, CliError> {
    let raw = Zeroizing::new(
        rpassword::prompt_password("Paste the session cookie value: ")
            .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?,
    );
    Session::new(raw.as_str()).ok_or(CliError::Credential(CredentialError::Empty))
}
