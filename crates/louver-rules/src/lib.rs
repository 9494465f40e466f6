#![forbid(unsafe_code)]

//! Louver Rules
//!
//! The declarative half of Louver: which panels a controlling field's
//! value reveals, and what happens when a rule points at a panel nobody
//! declared.
//!
//! # Key Components
//!
//! - [`RuleSet`] / [`RuleSetBuilder`] - immutable value-to-panels table
//! - [`PanelSet`] - sorted, deduplicated set of panel ids
//! - [`MissingPanelPolicy`] - strict versus tolerant handling of
//!   unresolved panels
//! - [`ConfigError`] - data-level validation failures
//! - [`RulesConfig`] - rules-as-data loading from TOML or JSON (behind
//!   the `rules-config` feature)
//!
//! # Role in Louver
//!
//! `louver-rules` owns the policy data and nothing else: no host access,
//! no listeners, no panel mutation. The runtime crate consults a
//! [`RuleSet`] on every field change; this crate guarantees resolution is
//! total and the table immutable.

pub mod config;
pub mod error;
pub mod ruleset;

pub use config::{RulesConfig, RulesConfigError};
pub use error::ConfigError;
pub use ruleset::{MissingPanelPolicy, PanelSet, RuleSet, RuleSetBuilder};
