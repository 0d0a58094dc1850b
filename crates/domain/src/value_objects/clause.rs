//! Clause value object
//!
//! A clause is an opaque slice of agreement text. No structure (numbering,
//! headings, page references) is imposed on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single clause extracted from an agreement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause(String);

impl Clause {
    /// Create a clause from raw text, kept verbatim
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the clause text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner text
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the clause consists only of whitespace
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Length of the clause text in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Clause {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Clause {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Clause {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_kept_verbatim() {
        let clause = Clause::new("  Data is stored securely.\n");
        assert_eq!(clause.as_str(), "  Data is stored securely.\n");
    }

    #[test]
    fn blank_detection() {
        assert!(Clause::new("").is_blank());
        assert!(Clause::new(" \n\t").is_blank());
        assert!(!Clause::new(" x ").is_blank());
    }

    #[test]
    fn empty_is_not_the_same_as_blank() {
        let clause = Clause::new("\n");
        assert!(clause.is_blank());
        assert!(!clause.is_empty());
        assert_eq!(clause.len(), 1);
    }

    #[test]
    fn display_shows_text() {
        let clause = Clause::from("Clause 1");
        assert_eq!(format!("{clause}"), "Clause 1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let clause = Clause::new("We sell user data.");
        let json = serde_json::to_string(&clause).unwrap();
        assert_eq!(json, r#""We sell user data.""#);

        let parsed: Clause = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, clause);
    }

    #[test]
    fn into_inner_returns_text() {
        let clause = Clause::from(String::from("abc"));
        assert_eq!(clause.into_inner(), "abc");
    }
}
