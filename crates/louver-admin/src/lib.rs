#![forbid(unsafe_code)]

//! Louver Admin
//!
//! The shipped rule packs: which CMS admin forms Louver knows about,
//! which URLs they live on, and how to wire them in one call.
//!
//! # Key Components
//!
//! - [`attach`] / [`AttachedForm`] - page-ready entry point, route-gated
//! - [`AdminForm`] / [`AdminView`] / [`RouteMatcher`] - URL recognition
//! - [`question`] - the question form pack (type select)
//! - [`assessment`] - the assessment form pack (chooser title label)
//!
//! # Role in Louver
//!
//! Everything below this crate is generic over hosts and rule tables;
//! this crate pins the concrete ids, values, labels, and routes of the
//! admin pages we ship against. An integrator with different forms can
//! ignore it entirely and call `louver-runtime` directly.

pub mod assessment;
pub mod attach;
pub mod question;
pub mod routes;

pub use attach::{AttachedForm, attach};
pub use routes::{AdminForm, AdminView, RouteMatcher, active_form};
