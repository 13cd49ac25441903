//! Booking Deep Links
//!
//! Booking is delegated to an external messaging service: the site only
//! builds a link such as `https://wa.me/<recipient>?text=<message>` and
//! opens it in a new browsing context. Nothing comes back.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::error::{DirectoryError, Result};

pub const DEFAULT_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_RECIPIENT: &str = "00966507267217";

/// Characters JavaScript's `encodeURIComponent` leaves unescaped
const MESSAGE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Deep link target for the "book a session" actions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingLink {
    base_url: Url,
    recipient: String,
}

impl Default for BookingLink {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default booking base url is valid"),
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

impl BookingLink {
    pub fn new(base_url: &str, recipient: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DirectoryError::InvalidBookingLink(format!("{base_url}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidBookingLink(format!(
                "{base_url}: not an http(s) base url"
            )));
        }

        let recipient = recipient.into().trim().to_string();
        if recipient.is_empty() {
            return Err(DirectoryError::InvalidBookingLink("recipient is empty".into()));
        }

        Ok(Self { base_url, recipient })
    }

    /// Create from environment variables, falling back to the defaults
    /// for any that are unset.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("BOOKING_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let recipient = std::env::var("BOOKING_RECIPIENT").unwrap_or_else(|_| DEFAULT_RECIPIENT.into());
        Self::new(&base_url, recipient)
    }

    /// Link that opens a conversation with the recipient, optionally
    /// prefilled with `message`.
    pub fn url(&self, message: Option<&str>) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&self.recipient);
        }
        // Spaces become %20, not the form-encoded `+`
        let query = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(|text| format!("text={}", utf8_percent_encode(text, MESSAGE)));
        url.set_query(query.as_deref());
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_link() {
        let link = BookingLink::default();
        assert_eq!(link.url(None), "https://wa.me/00966507267217");
        assert_eq!(link.url(Some("   ")), "https://wa.me/00966507267217");
    }

    #[test]
    fn test_message_is_encoded() {
        let link = BookingLink::default();
        assert_eq!(
            link.url(Some("Hi, math & physics?")),
            "https://wa.me/00966507267217?text=Hi%2C%20math%20%26%20physics%3F"
        );
    }

    #[test]
    fn test_message_matches_browser_component_encoding() {
        let link = BookingLink::default();
        assert_eq!(
            link.url(Some("hello there (1+1)!")),
            "https://wa.me/00966507267217?text=hello%20there%20(1%2B1)!"
        );
        assert_eq!(
            link.url(Some("مرحبا")),
            "https://wa.me/00966507267217?text=%D9%85%D8%B1%D8%AD%D8%A8%D8%A7"
        );
    }

    #[test]
    fn test_custom_base_with_path() {
        let link = BookingLink::new("https://chat.example.com/to/", "123").unwrap();
        assert_eq!(link.url(None), "https://chat.example.com/to/123");
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(BookingLink::new("not a url", "1").is_err());
        assert!(BookingLink::new("mailto:someone@example.com", "1").is_err());
        assert!(BookingLink::new("https://wa.me", "  ").is_err());
    }
}
