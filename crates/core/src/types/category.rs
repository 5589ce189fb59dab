//! Product category enum.
//!
//! Categories are a closed set; the UI offers them through a selection
//! control and the persisted layout stores their display names.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown category name.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Hand Wash")]
    HandWash,
    Skincare,
    Refill,
    #[serde(rename = "Body Care")]
    BodyCare,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::HandWash, Self::Skincare, Self::Refill, Self::BodyCare];

    /// Display name, as stored in the persisted layout.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HandWash => "Hand Wash",
            Self::Skincare => "Skincare",
            Self::Refill => "Refill",
            Self::BodyCare => "Body Care",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::HandWash).unwrap();
        assert_eq!(json, "\"Hand Wash\"");

        let parsed: Category = serde_json::from_str("\"Body Care\"").unwrap();
        assert_eq!(parsed, Category::BodyCare);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("Hair Care".parse::<Category>().is_err());
    }
}
