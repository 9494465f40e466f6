#![forbid(unsafe_code)]

//! Louver Runtime
//!
//! The live half of Louver: the engine that drives panel visibility and
//! the wiring that connects it to a page.
//!
//! # Key Components
//!
//! - [`VisibilityEngine`] - total, idempotent visibility passes over the
//!   managed panel set
//! - [`Binding`] - RAII guard for the installed change listener
//! - [`bind_form`] / [`FormBinding`] - resolve-validate-bind in one step
//! - [`SetupError`] - wiring-level failures, raised before any mutation
//!
//! # Role in Louver
//!
//! `louver-runtime` consumes a `RuleSet` from `louver-rules` and the host
//! capabilities from `louver-core`. It owns the full lifecycle: configure,
//! initial pass, change tracking, disposal. Nothing here knows which CMS
//! page it is running on; `louver-admin` supplies that.

pub mod engine;
pub mod wiring;

pub use engine::{Binding, VisibilityEngine};
pub use wiring::{FormBinding, SetupError, bind_form};
