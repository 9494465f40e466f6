#![forbid(unsafe_code)]

//! Form wiring: resolving a host's elements and binding the engine.
//!
//! [`bind_form`] is the one entry point that turns policy data into a
//! live form. It looks up the controlling field and every managed panel,
//! enforces the configured policy, and only then constructs the engine
//! and binds it. Every check runs before the first panel mutation, so a
//! failed setup leaves the page exactly as the server rendered it.

use std::fmt;

use louver_core::{FieldId, FormHost, PanelId};
use louver_rules::{ConfigError, MissingPanelPolicy, RuleSet};

use crate::engine::{Binding, VisibilityEngine};

/// Errors raised while wiring a form.
///
/// Ordering of checks is fixed: missing field, then missing panels (under
/// the strict policy), then rule validation.
#[derive(Debug)]
pub enum SetupError {
    /// The controlling field is absent from the host. Fatal under every
    /// policy: without it there is nothing to listen to, so no listener is
    /// installed and no panel is touched.
    MissingField(FieldId),
    /// A managed panel id has no live element, under the strict policy.
    MissingPanel(PanelId),
    /// The rule table failed validation against the managed set.
    Config(ConfigError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(id) => {
                write!(f, "controlling field '{id}' not found in host")
            }
            Self::MissingPanel(id) => {
                write!(f, "managed panel '{id}' has no element in host")
            }
            Self::Config(e) => write!(f, "invalid rule configuration: {e}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// A fully wired form: the engine plus its live change listener.
///
/// Dropping the binding detaches the listener and leaves the panels in
/// their last applied state.
pub struct FormBinding<H: FormHost> {
    engine: VisibilityEngine<H::Panel>,
    binding: Binding,
}

impl<H: FormHost> fmt::Debug for FormBinding<H>
where
    H::Panel: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBinding")
            .field("engine", &self.engine)
            .field("binding", &self.binding)
            .finish()
    }
}

impl<H: FormHost> FormBinding<H> {
    /// The engine driving this form.
    ///
    /// Callers can force an extra pass through it, e.g. after swapping
    /// page content under the field's feet.
    #[must_use]
    pub fn engine(&self) -> &VisibilityEngine<H::Panel> {
        &self.engine
    }

    /// True while the change listener is attached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.binding.is_active()
    }
}

/// Resolve, validate, and bind one controlled form.
///
/// Lookups and validation all happen before any visibility is written:
///
/// 1. the controlling field is resolved ([`SetupError::MissingField`]);
/// 2. each panel in `panels` is resolved; under
///    [`MissingPanelPolicy::Strict`] an absent element aborts
///    ([`SetupError::MissingPanel`]), under the tolerant policy it becomes
///    a permanent no-op slot;
/// 3. the rule table is checked against the managed set
///    ([`SetupError::Config`], strict only).
///
/// On success the engine has already applied the field's current value
/// and is listening for changes.
pub fn bind_form<H>(
    host: &H,
    field_id: &FieldId,
    rules: RuleSet,
    panels: &[PanelId],
    policy: MissingPanelPolicy,
) -> Result<FormBinding<H>, SetupError>
where
    H: FormHost,
    H::Panel: 'static,
{
    let field = host
        .find_field(field_id)
        .ok_or_else(|| SetupError::MissingField(field_id.clone()))?;

    let mut resolved: Vec<(PanelId, Option<H::Panel>)> = Vec::with_capacity(panels.len());
    for id in panels {
        let handle = host.find_panel(id);
        if handle.is_none() && policy.is_strict() {
            return Err(SetupError::MissingPanel(id.clone()));
        }
        resolved.push((id.clone(), handle));
    }

    let engine = VisibilityEngine::with_policy(rules, resolved, policy)?;
    let binding = engine.bind(&field);
    Ok(FormBinding { engine, binding })
}
