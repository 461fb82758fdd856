//! Email address type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RFC 5321 length ceiling; anything longer is rejected outright.
const MAX_LEN: usize = 254;

/// Reasons an address fails structural validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    #[error("email must have text before and after the @")]
    MissingPart,
    #[error("email is too long")]
    TooLong,
}

/// A structurally plausible email address.
///
/// Validation here is the cheap kind that catches typos before a network
/// call is wasted on them; the auth service stays the authority on whether
/// an address is real. Addresses arriving from the backend deserialize
/// transparently without re-validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse and validate an address.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty string, a string over 254 characters,
    /// or one without text on both sides of an `@`.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > MAX_LEN {
            return Err(EmailError::TooLong);
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAtSymbol)?;
        if local.is_empty() || domain.is_empty() {
            return Err(EmailError::MissingPart);
        }

        Ok(Self(s.to_owned()))
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_ordinary_addresses() {
        for address in ["user@example.com", "user+tag@example.co.uk", "a@b"] {
            assert!(Email::parse(address).is_ok(), "{address} should parse");
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_parse_rejects_missing_at() {
        assert_eq!(Email::parse("not-an-email"), Err(EmailError::MissingAtSymbol));
    }

    #[test]
    fn test_parse_rejects_one_sided_addresses() {
        assert_eq!(Email::parse("@example.com"), Err(EmailError::MissingPart));
        assert_eq!(Email::parse("user@"), Err(EmailError::MissingPart));
    }

    #[test]
    fn test_parse_rejects_overlong_input() {
        let address = format!("{}@example.com", "x".repeat(MAX_LEN));
        assert_eq!(Email::parse(&address), Err(EmailError::TooLong));
    }

    #[test]
    fn test_serde_is_transparent() {
        let email = Email::parse("user@example.com").unwrap();
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"user@example.com\""
        );

        let parsed: Email = serde_json::from_str("\"user@example.com\"").unwrap();
        assert_eq!(parsed, email);
    }

    #[test]
    fn test_display_matches_input() {
        let email = Email::parse("user@example.com").unwrap();
        assert_eq!(email.to_string(), "user@example.com");
        assert_eq!(email.as_str(), "user@example.com");
    }
}
