//! Response body inspection

use regex::Regex;
use std::cell::OnceCell;

/// Prefix of the body the site returns for inputs that are not unlocked yet
pub const REJECTION_PHRASE: &str = "Please don't";

/// Check whether a response body is the site's "not released" rejection
///
/// This is a prefix match on English text, so it breaks if the site ever
/// rewords the message.
pub fn is_rejection(body: &str) -> bool {
    body.starts_with(REJECTION_PHRASE)
}

/// Parser for settings page responses with a cached regex
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    user_id_regex: OnceCell<Regex>,
}

impl ResponseParser {
    pub fn new() -> Self {
        Self {
            user_id_regex: OnceCell::new(),
        }
    }

    fn user_id_regex(&self) -> &Regex {
        self.user_id_regex
            .get_or_init(|| Regex::new(r"\(anonymous user #(\d+)\)").unwrap())
    }

    /// Extract user ID from settings page HTML
    pub fn extract_user_id(&self, html: &str) -> Option<u64> {
        let captures = self.user_id_regex().captures(html)?;
        captures.get(1)?.as_str().parse::<u64>().ok()
    }
}
