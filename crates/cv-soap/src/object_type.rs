//! The set of object types operations accept.

use indexmap::IndexSet;

use crate::error::{Error, ErrorKind, Result};

/// Object types known to the `V200611` API.
pub const DEFAULT_OBJECT_TYPES: &[&str] = &[
    "Guest",
    "Invitee",
    "Registration",
    "EventParameters",
    "EventDetail",
    "EventEmailHistory",
    "Transaction",
    "Travel",
    "Budget",
    "BudgetItem",
    "EventQuestion",
    "TableAssignment",
    "Event",
    "Survey",
    "Contact",
    "Speaker",
    "Session",
    "eMarketing",
    "Administration",
    "User",
];

/// Whitelist of object type names.
///
/// Names are case-sensitive. Every operation that takes an object type
/// checks it here before any network call.
///
/// # Example
///
/// ```rust
/// use cvent_soap::ObjectTypes;
///
/// let types = ObjectTypes::default().with("Appointment");
/// assert!(types.contains("Event"));
/// assert!(types.contains("Appointment"));
/// assert!(types.validate("event").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTypes {
    names: IndexSet<String>,
}

impl Default for ObjectTypes {
    fn default() -> Self {
        Self::new(DEFAULT_OBJECT_TYPES.iter().copied())
    }
}

impl ObjectTypes {
    /// Build a whitelist from the given names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a name.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Remove a name.
    pub fn without(mut self, name: &str) -> Self {
        self.names.shift_remove(name);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Fails with `InvalidObjectName` when `name` is not whitelisted.
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(Error::new(ErrorKind::InvalidObjectName(name.to_string())))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
