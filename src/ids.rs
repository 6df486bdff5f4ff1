use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of a [`NavigationHistoryEntry`](crate::history::NavigationHistoryEntry).
///
/// Serialized as the 26-character ULID string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Ulid);

impl EntryId {
    pub(crate) fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Milliseconds since the Unix epoch at which the entry was recorded.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        self.0.timestamp_ms()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_ulid_string() {
        let id = EntryId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<EntryId>(&json).unwrap(), id);
        assert!(serde_json::from_str::<EntryId>("\"nope\"").is_err());
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
        assert!(b.timestamp_ms() >= a.timestamp_ms());
    }
}
