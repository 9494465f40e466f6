#![forbid(unsafe_code)]

//! Rules-as-data configuration.
//!
//! Captures a complete visibility setup, controlling field plus managed
//! panels plus the value-to-panels table, as a single [`RulesConfig`]
//! that can be loaded from TOML or JSON at startup. Rule changes then
//! ship as data instead of a recompile.
//!
//! # Loading
//!
//! ```toml
//! # question-rules.toml
//! field = "type"
//! panels = ["response-choices", "max-choices"]
//!
//! [rules]
//! unique_choice = ["response-choices"]
//! multiple_choice = ["response-choices", "max-choices"]
//! ```
//!
//! ```rust,ignore
//! let config = RulesConfig::from_toml_file("question-rules.toml")?;
//! let (field, panels, rules, policy) = config.into_parts()?;
//! ```
//!
//! # Defaults
//!
//! Every field defaults to empty, so partial documents parse; `validate`
//! is the gate that rejects configs too empty to drive a form.

use std::collections::BTreeMap;
#[cfg(feature = "rules-config")]
use std::path::Path;

#[cfg(feature = "rules-config")]
use serde::{Deserialize, Serialize};

use louver_core::{FieldId, PanelId};

use crate::ruleset::{MissingPanelPolicy, RuleSet};

// ---------------------------------------------------------------------------
// RulesConfig
// ---------------------------------------------------------------------------

/// Declarative description of one controlled form.
///
/// The `rules` table keys are field values; each entry lists the panels
/// that value reveals. Values absent from the table hide every managed
/// panel.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "rules-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "rules-config", serde(default))]
pub struct RulesConfig {
    /// Id of the controlling field.
    pub field: String,

    /// Every panel the engine manages. Panels not listed here are never
    /// touched.
    pub panels: Vec<String>,

    /// Field value to the panel ids it reveals.
    pub rules: BTreeMap<String, Vec<String>>,

    /// When true, undeclared rule targets and missing panel elements are
    /// errors instead of no-ops.
    pub strict: bool,
}

impl RulesConfig {
    /// Load from a TOML string.
    #[cfg(feature = "rules-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, RulesConfigError> {
        toml::from_str(s).map_err(RulesConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "rules-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RulesConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RulesConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "rules-config")]
    pub fn from_json_str(s: &str) -> Result<Self, RulesConfigError> {
        serde_json::from_str(s).map_err(RulesConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "rules-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RulesConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RulesConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate the configuration.
    ///
    /// Returns a list of findings. An empty list means the config is
    /// valid. Rule targets outside `panels` are findings only under
    /// `strict`; the tolerant policy ignores them.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.field.is_empty() {
            errors.push("field must not be empty".into());
        }

        for (i, panel) in self.panels.iter().enumerate() {
            if panel.is_empty() {
                errors.push(format!("panels[{i}] must not be empty"));
            } else if self.panels[..i].contains(panel) {
                errors.push(format!("panels[{i}] duplicates '{panel}'"));
            }
        }

        for (value, targets) in &self.rules {
            for target in targets {
                if target.is_empty() {
                    errors.push(format!("rule '{value}' lists an empty panel id"));
                } else if self.strict && !self.panels.contains(target) {
                    errors.push(format!(
                        "rule '{value}' references panel '{target}' not listed in panels"
                    ));
                }
            }
        }

        errors
    }

    /// Id of the controlling field.
    #[must_use]
    pub fn field_id(&self) -> FieldId {
        FieldId::new(&self.field)
    }

    /// Managed panel universe, in declaration order.
    #[must_use]
    pub fn managed_panels(&self) -> Vec<PanelId> {
        self.panels.iter().map(PanelId::new).collect()
    }

    /// Policy implied by the `strict` flag.
    #[must_use]
    pub fn policy(&self) -> MissingPanelPolicy {
        if self.strict {
            MissingPanelPolicy::Strict
        } else {
            MissingPanelPolicy::Tolerant
        }
    }

    /// Build the rule table.
    #[must_use]
    pub fn ruleset(&self) -> RuleSet {
        let mut builder = RuleSet::builder();
        for (value, targets) in &self.rules {
            builder = builder.rule(value.as_str(), targets.iter().map(String::as_str));
        }
        builder.build()
    }

    /// Validate and split into the pieces the wiring layer needs.
    ///
    /// Fails with [`RulesConfigError::Validation`] carrying every finding
    /// when the config is invalid.
    pub fn into_parts(
        self,
    ) -> Result<(FieldId, Vec<PanelId>, RuleSet, MissingPanelPolicy), RulesConfigError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(RulesConfigError::Validation(errors));
        }
        Ok((
            self.field_id(),
            self.managed_panels(),
            self.ruleset(),
            self.policy(),
        ))
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a rules configuration.
#[derive(Debug)]
pub enum RulesConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "rules-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "rules-config")]
    Json(serde_json::Error),
    /// Validation findings.
    Validation(Vec<String>),
}

impl std::fmt::Display for RulesConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "rules-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "rules-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for RulesConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "rules-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "rules-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
