//! Email value object - validated email address.
//!
//! Immutable, compared by value. Owned by the User aggregate; it has no
//! identity of its own.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$")
        .expect("email pattern must compile")
});

/// Validated email address.
///
/// Once constructed, the inner value is guaranteed to match the email
/// pattern and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    ///
    /// # Errors
    /// Returns `AppError::InvalidFormat` if the value is empty or does not
    /// match the email pattern.
    pub fn parse(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if !EMAIL_PATTERN.is_match(&value) {
            return Err(AppError::invalid_format(format!(
                "invalid email format: {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Rehydrate an Email from a value already validated on its way into
    /// the store.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_is_kept_unchanged() {
        let email = Email::parse("ada@example.com").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
    }

    #[test]
    fn test_accepts_subdomains_and_plus_tags() {
        assert!(Email::parse("a.b+tag@mail.example.co").is_ok());
        assert!(Email::parse("user_99%x@sub.domain.org").is_ok());
    }

    #[test]
    fn test_rejects_missing_at_sign() {
        let result = Email::parse("not-an-email");
        assert!(matches!(result, Err(AppError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_empty_value() {
        let result = Email::parse("");
        assert!(matches!(result, Err(AppError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_bad_top_level_domain() {
        // Single-letter TLD
        assert!(Email::parse("ada@example.c").is_err());
        // TLD longer than six letters
        assert!(Email::parse("ada@example.toolongtld").is_err());
        // Numeric TLD
        assert!(Email::parse("ada@example.123").is_err());
    }

    #[test]
    fn test_rejects_missing_local_part() {
        assert!(Email::parse("@example.com").is_err());
    }

    #[test]
    fn test_display_matches_value() {
        let email = Email::parse("ada@example.com").unwrap();
        assert_eq!(email.to_string(), "ada@example.com");
    }

    #[test]
    fn test_compared_by_value() {
        let a = Email::parse("ada@example.com").unwrap();
        let b = Email::parse("ada@example.com").unwrap();
        assert_eq!(a, b);
    }
}
