#![forbid(unsafe_code)]

//! The form host: how the engine finds fields and panels.
//!
//! Lookups return `Option` — a missing element is a fact about the page,
//! not an exception. What to *do* about a missing panel is policy
//! (`louver-rules`), and a missing controlling field is a setup error
//! (`louver-runtime`); this trait just reports what exists. Earlier
//! revisions of the original admin scripts wrapped lookups in try/catch and
//! substituted a throwaway element on failure; the option return is that
//! behavior made explicit.

use crate::field::ControllingField;
use crate::id::{FieldId, PanelId};
use crate::panel::PanelHandle;

/// Lookup capability of the surrounding page.
///
/// The host owns its elements; lookups hand out handles (cheap clones
/// pointing at host-owned state). The engine holds handles only for the
/// lifetime of one binding.
pub trait FormHost {
    /// Controlling-field handle type this host produces.
    type Field: ControllingField;
    /// Panel handle type this host produces.
    type Panel: PanelHandle;

    /// Find the controlling field registered under `id`.
    fn find_field(&self, id: &FieldId) -> Option<Self::Field>;

    /// Find the panel registered under `id`.
    fn find_panel(&self, id: &PanelId) -> Option<Self::Panel>;
}
