#![forbid(unsafe_code)]

//! The controlling value: what the field currently holds.
//!
//! Values are plain strings. Known enumerations (question types, assessment
//! labels) live with the form that defines them; the engine treats every
//! value uniformly, including values outside any enumeration and the unset
//! (empty) value. Resolution is total: anything the rule table does not
//! name maps to "all panels hidden".

use std::fmt;
use std::sync::Arc;

/// The current value of a controlling field.
///
/// A freshly rendered form may have no selection yet; that state is the
/// *unset* value, represented by the empty string — the same thing a DOM
/// select with no chosen option reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldValue(Arc<str>);

impl FieldValue {
    /// Create a value from any string-like input.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(Arc::from(value.as_ref()))
    }

    /// The unset value (no selection).
    #[must_use]
    pub fn unset() -> Self {
        Self(Arc::from(""))
    }

    /// Whether this is the unset value.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            f.write_str("<unset>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::unset()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl AsRef<str> for FieldValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
