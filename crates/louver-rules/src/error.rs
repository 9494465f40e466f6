#![forbid(unsafe_code)]

//! Data-level validation errors for rule tables.
//!
//! These fire when a rule table contradicts the declared panel universe,
//! before any host element is touched. Wiring-level failures (a field or
//! panel missing from the live page) live in `louver-runtime`.

use std::fmt;

use louver_core::{FieldValue, PanelId};

/// Errors raised when a rule table fails validation against the managed
/// panel set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A rule maps a field value to a panel id outside the managed set.
    ///
    /// Only raised under [`MissingPanelPolicy::Strict`]; the tolerant
    /// policy leaves the id unmanaged and ignores it on every pass.
    ///
    /// [`MissingPanelPolicy::Strict`]: crate::MissingPanelPolicy::Strict
    UnmanagedPanel {
        /// The field value whose rule is at fault.
        value: FieldValue,
        /// The panel id the rule references.
        panel: PanelId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmanagedPanel { value, panel } => write!(
                f,
                "rule for value '{value}' references unmanaged panel '{panel}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmanaged_panel_names_both_sides() {
        let err = ConfigError::UnmanagedPanel {
            value: FieldValue::new("boolean"),
            panel: PanelId::new("binary-rules"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("boolean"), "value missing: {rendered}");
        assert!(
            rendered.contains("binary-rules"),
            "panel missing: {rendered}"
        );
    }

    #[test]
    fn implements_std_error() {
        let err = ConfigError::UnmanagedPanel {
            value: FieldValue::new("x"),
            panel: PanelId::new("y"),
        };
        let dyn_err: &dyn std::error::Error = &err;
        assert!(dyn_err.source().is_none());
    }
}
