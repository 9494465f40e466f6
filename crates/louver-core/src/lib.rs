#![forbid(unsafe_code)]

//! Core: field identity, host capabilities, and change notification.
//!
//! # Role in Louver
//! `louver-core` is the host-facing layer. It owns the identity types for
//! controlling fields and panels, the capability traits through which the
//! engine reaches the surrounding page, and the change-notification
//! primitive that backs both native change events and content-mutation
//! watches.
//!
//! # Primary responsibilities
//! - **Identity**: [`FieldId`] and [`PanelId`], stable lookup keys.
//! - **Values**: [`FieldValue`], the string-backed controlling value
//!   (including the unset value).
//! - **Capabilities**: [`ControllingField`], [`PanelHandle`], [`FormHost`] —
//!   the seams between the engine and whatever renders the form.
//! - **Notification**: [`ValueCell`] and [`WatchGuard`], single-threaded
//!   observe/unsubscribe plumbing.
//! - **Reference host**: [`MemoryPage`](memory::MemoryPage), a headless page
//!   for wiring tests and simulations.
//!
//! # How it fits in the system
//! `louver-rules` describes *which* panels a value reveals; `louver-runtime`
//! drives the decision through the traits defined here. Nothing in this
//! crate knows about rule tables or admin routes.

pub mod field;
pub mod host;
pub mod id;
pub mod memory;
pub mod panel;
pub mod value;
pub mod watch;

pub use field::{ChangeCallback, ControllingField};
pub use host::FormHost;
pub use id::{FieldId, PanelId};
pub use panel::PanelHandle;
pub use value::FieldValue;
pub use watch::{ValueCell, WatchGuard};
