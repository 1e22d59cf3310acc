//! Merchant key type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`MerchantKey`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum MerchantKeyError {
    /// The input string is empty.
    #[error("merchant key cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("merchant key must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("merchant key cannot contain whitespace")]
    ContainsWhitespace,
}

/// The opaque stable key identifying a merchant.
///
/// Merchants are addressed externally by this key (the `merchant_id` column),
/// not by their database row id. The key is unique across all merchants.
///
/// ## Constraints
///
/// - Length: 1-64 characters
/// - No whitespace
///
/// ## Examples
///
/// ```
/// use stockist_core::MerchantKey;
///
/// assert!(MerchantKey::parse("walgreens-001").is_ok());
/// assert!(MerchantKey::parse("").is_err());        // empty
/// assert!(MerchantKey::parse("bad key").is_err()); // whitespace
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MerchantKey(String);

impl MerchantKey {
    /// Maximum length of a merchant key.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `MerchantKey` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 64 characters,
    /// or contains whitespace.
    pub fn parse(s: &str) -> Result<Self, MerchantKeyError> {
        if s.is_empty() {
            return Err(MerchantKeyError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(MerchantKeyError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(MerchantKeyError::ContainsWhitespace);
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MerchantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MerchantKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let key = MerchantKey::parse("walgreens-001").unwrap();
        assert_eq!(key.as_str(), "walgreens-001");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            MerchantKey::parse(""),
            Err(MerchantKeyError::Empty)
        ));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "x".repeat(MerchantKey::MAX_LENGTH + 1);
        assert!(matches!(
            MerchantKey::parse(&long),
            Err(MerchantKeyError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_whitespace() {
        assert!(matches!(
            MerchantKey::parse("two words"),
            Err(MerchantKeyError::ContainsWhitespace)
        ));
    }

    #[test]
    fn test_max_length_accepted() {
        let max = "x".repeat(MerchantKey::MAX_LENGTH);
        assert!(MerchantKey::parse(&max).is_ok());
    }

    #[test]
    fn test_serializes_transparently() {
        let key = MerchantKey::parse("cvs-12").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"cvs-12\"");
    }
}
