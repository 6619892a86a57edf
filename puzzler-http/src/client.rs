//! Puzzle site HTTP client implementation

use crate::error::AocError;
use crate::parser::{ResponseParser, is_rejection};
use reqwest::header::HeaderValue;
use tracing::debug;
use zeroize::Zeroize;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

const USER_AGENT: &str = concat!("puzzler/", env!("CARGO_PKG_VERSION"));

/// Result of session verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// User ID if session is valid, None otherwise
    pub user_id: Option<u64>,
}

/// Blocking client for the puzzle site
///
/// Every request is a single attempt. Nothing is retried and no redirects
/// are followed.
///
/// # Example
///
/// ```no_run
/// use puzzler_http::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let input = client.get_input(2024, 1, "your_session_cookie")?;
/// println!("Input: {}", input);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a new client with rustls-tls, no redirects and no timeout
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged as sensitive and the temporary string is
    /// zeroized after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()));
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Build `{base}/{segments...}` from the configured base URL
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    /// Verify if a session cookie is valid and retrieve user ID
    ///
    /// Requests the settings page. A 2xx response means the session is valid
    /// and the user ID is read from the page. A redirect (the site sends
    /// anonymous visitors back to the homepage) or an error status means the
    /// session is invalid.
    ///
    /// # Errors
    ///
    /// Only transport failures and URL construction problems are errors.
    pub fn verify_session(&self, session: &str) -> Result<SessionInfo, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.endpoint(&["settings"])?;
        debug!(%url, "verifying session");

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Ok(SessionInfo { user_id: None });
        }

        let html = response.text().map_err(|_| AocError::Encoding)?;
        let user_id = self.parser.extract_user_id(&html);

        Ok(SessionInfo { user_id })
    }

    /// Fetch the raw puzzle input for a specific year and day
    ///
    /// Issues one GET to `/{year}/day/{day}/input` with the session cookie
    /// attached. A 2xx body is returned verbatim, even if it happens to be
    /// the rejection text; callers decide what a body means.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::NotReleased` - Non-success status carrying the site's
    ///   "not unlocked yet" message
    /// * `AocError::InvalidStatus` - Any other non-success status
    /// * `AocError::Encoding` - A 2xx body could not be read
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.endpoint(&[&year.to_string(), "day", &day.to_string(), "input"])?;
        debug!(%url, "requesting puzzle input");

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        let status = response.status();
        if status.is_success() {
            return response.text().map_err(|_| AocError::Encoding);
        }

        // An unreadable error body still reports the status
        let body = response.text().unwrap_or_default();
        if is_rejection(&body) {
            return Err(AocError::NotReleased);
        }
        Err(AocError::InvalidStatus { status })
    }
}

/// Builder for configuring a puzzle site client
///
/// # Example
///
/// ```no_run
/// use puzzler_http::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .timeout(Some(Duration::from_secs(30)))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    timeout: Option<std::time::Duration>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// Useful for pointing the client at a mock server. The URL is parsed
    /// here so that a bad value fails early.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a total request timeout; `None` waits indefinitely
    pub fn timeout(mut self, timeout: Option<std::time::Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
