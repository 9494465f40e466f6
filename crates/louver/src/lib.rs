#![forbid(unsafe_code)]

//! Louver public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

pub mod error;

// --- Core re-exports -------------------------------------------------------

pub use louver_core::memory::{MemoryPage, MemoryPanel, SelectField, WatchedLabel};
pub use louver_core::{
    ChangeCallback, ControllingField, FieldId, FieldValue, FormHost, PanelHandle, PanelId,
    ValueCell, WatchGuard,
};

// --- Rules re-exports ------------------------------------------------------

pub use louver_rules::{
    ConfigError, MissingPanelPolicy, PanelSet, RuleSet, RuleSetBuilder, RulesConfig,
    RulesConfigError,
};

// --- Runtime re-exports ----------------------------------------------------

pub use louver_runtime::{Binding, FormBinding, SetupError, VisibilityEngine, bind_form};

// --- Admin re-exports ------------------------------------------------------

#[cfg(feature = "admin")]
pub use louver_admin::{AdminForm, AdminView, AttachedForm, RouteMatcher, active_form, attach};

// --- Errors ----------------------------------------------------------------

pub use error::{Error, Result};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ControllingField, Error, FieldId, FieldValue, FormBinding, FormHost, MissingPanelPolicy,
        PanelHandle, PanelId, Result, RuleSet, RuleSetBuilder, VisibilityEngine, bind_form,
    };

    #[cfg(feature = "admin")]
    pub use crate::{AdminForm, AdminView, attach};

    pub use crate::{core, rules, runtime};

    #[cfg(feature = "admin")]
    pub use crate::admin;
}

pub use louver_core as core;
pub use louver_rules as rules;
pub use louver_runtime as runtime;

#[cfg(feature = "admin")]
pub use louver_admin as admin;
