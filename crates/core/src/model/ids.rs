use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of an entry within the catalog's ordered sequence.
///
/// Catalog entries carry no intrinsic identifier; their identity is the
/// index they occupy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryIndex(usize);

impl EntryIndex {
    /// Creates a new `EntryIndex`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying usize value
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for EntryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryIndex({})", self.0)
    }
}

// ─── Display Implementation ────────────────────────────────────────────────────

impl fmt::Display for EntryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr Implementation ────────────────────────────────────────────────────

/// Error type for parsing an index from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIndexError;

impl fmt::Display for ParseIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse EntryIndex from string")
    }
}

impl std::error::Error for ParseIndexError {}

impl FromStr for EntryIndex {
    type Err = ParseIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map(EntryIndex::new)
            .map_err(|_| ParseIndexError)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_index_display() {
        let idx = EntryIndex::new(42);
        assert_eq!(idx.to_string(), "42");
    }

    #[test]
    fn test_entry_index_from_str() {
        let idx: EntryIndex = "123".parse().unwrap();
        assert_eq!(idx, EntryIndex::new(123));
    }

    #[test]
    fn test_entry_index_from_str_invalid() {
        let result = "not-a-number".parse::<EntryIndex>();
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_index_from_str_negative() {
        let result = "-3".parse::<EntryIndex>();
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_index_roundtrip() {
        let original = EntryIndex::new(7);
        let deserialized: EntryIndex = original.to_string().parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
