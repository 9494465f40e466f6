#![forbid(unsafe_code)]

//! The panel handle: one writable visibility slot per panel.

/// Write access to a panel's visibility.
///
/// The engine is the only writer; the rendering layer is the only reader.
/// Setters take `&self` because handles share page-owned state (a DOM
/// element's style, a `Cell<bool>` in the in-memory host) — the same shape
/// as every other interior-mutability handle in this workspace.
pub trait PanelHandle {
    /// Show or hide the panel. Writing the current state again is fine;
    /// every rule application writes every managed panel unconditionally.
    fn set_visible(&self, visible: bool);

    /// Current visibility, as the rendering layer would see it.
    fn is_visible(&self) -> bool;
}
