//! Entry ordering options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction for sorting entries by their creation date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recent entries first
    #[default]
    NewestFirst,
    /// Oldest entries first
    OldestFirst,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewestFirst => f.write_str("newest"),
            Self::OldestFirst => f.write_str("oldest"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" | "newest_first" => Ok(Self::NewestFirst),
            "oldest" | "oldest_first" => Ok(Self::OldestFirst),
            other => Err(format!("unknown sort order '{other}' (expected newest or oldest)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_default() {
        assert_eq!(SortOrder::default(), SortOrder::NewestFirst);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("Newest".parse::<SortOrder>(), Ok(SortOrder::NewestFirst));
        assert_eq!("oldest_first".parse::<SortOrder>(), Ok(SortOrder::OldestFirst));
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_order_serde_names() {
        let json = serde_json::to_string(&SortOrder::OldestFirst).unwrap();
        assert_eq!(json, "\"oldest_first\"");
    }
}
