// ABOUTME: Type definitions for the bz-replace CLI
// ABOUTME: Provides replacement pairs and planned summary updates

use bugzilla_sdk::{Bug, BugId};
use std::fmt;

/// One literal find-and-replace step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPair {
    pub needle: String,
    pub replacement: String,
}

impl ReplacementPair {
    pub fn new(needle: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            replacement: replacement.into(),
        }
    }
}

impl fmt::Display for ReplacementPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.needle, self.replacement)
    }
}

/// New summary computed for a bug returned by the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUpdate {
    pub bug: Bug,
    pub new_summary: String,
}

impl PlannedUpdate {
    pub fn id(&self) -> BugId {
        self.bug.id
    }

    pub fn original_summary(&self) -> &str {
        &self.bug.summary
    }

    pub fn is_changed(&self) -> bool {
        self.bug.summary != self.new_summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_pair_display() {
        let pair = ReplacementPair::new("foo", "bar");
        assert_eq!(pair.to_string(), r#""foo" -> "bar""#);
    }

    #[test]
    fn test_planned_update_is_changed() {
        let update = PlannedUpdate {
            bug: Bug {
                id: 5,
                summary: "same".to_string(),
            },
            new_summary: "same".to_string(),
        };
        assert_eq!(update.id(), 5);
        assert!(!update.is_changed());

        let update = PlannedUpdate {
            new_summary: "different".to_string(),
            ..update
        };
        assert!(update.is_changed());
        assert_eq!(update.original_summary(), "same");
    }
}
