//! The set of type spellings that must not be caught.

use crate::qualified_name::QualifiedName;
use std::collections::HashSet;

/// Default illegal spellings: the broad throwable types, both bare and
/// fully qualified.
pub const DEFAULT_ILLEGAL_NAMES: &[&str] = &[
    "Exception",
    "Error",
    "RuntimeException",
    "Throwable",
    "java.lang.Error",
    "java.lang.Exception",
    "java.lang.RuntimeException",
    "java.lang.Throwable",
];

/// Exact-spelling blacklist of caught types.
///
/// Matching is plain string equality on the spelled name. A bare
/// `Exception` entry does not match `com.acme.Exception`, and nothing
/// here knows about subtypes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalNames {
    names: HashSet<String>,
}

impl Default for IllegalNames {
    fn default() -> Self {
        Self::new(DEFAULT_ILLEGAL_NAMES.iter().copied())
    }
}

impl IllegalNames {
    /// Builds a set from configured spellings; blank entries are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Returns true if `name` is spelled exactly as one of the entries.
    #[must_use]
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.names.contains(&name.to_string())
    }

    /// Number of configured spellings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing is illegal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
