#![forbid(unsafe_code)]

//! Stable lookup keys for controlling fields and panels.
//!
//! Both ids wrap a shared string (`Arc<str>`): they are cloned freely into
//! rule tables, engine slots, and log events, and they compare and hash as
//! plain strings. `Borrow<str>` lets id-keyed maps answer lookups from a
//! bare `&str` without allocating.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Identity of a controlling form field.
///
/// On the original admin pages this is the DOM id of the select (or of the
/// chooser title node) that drives the panels, e.g. `type` or
/// `assessment_type-title`. The engine never interprets the key; it only
/// hands it to [`FormHost::find_field`](crate::FormHost::find_field).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(Arc<str>);

impl FieldId {
    /// Create a field id from any string-like key.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identity of a panel — a group of form fields shown or hidden together.
///
/// Panels are named after what they contain (`response-choices`,
/// `binary-rules`, `experts`), not after their position in the page. A
/// `PanelId` may be managed without a live element backing it; see the
/// tolerant policy in `louver-rules`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(Arc<str>);

impl PanelId {
    /// Create a panel id from any string-like key.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl AsRef<str> for PanelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PanelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
