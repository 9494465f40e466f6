#![forbid(unsafe_code)]

//! The controlling field: the one input whose value selects the panels.
//!
//! The engine only ever *reads* the field. How the value is observed is the
//! host's business — a native change event on a select, or a content
//! mutation on a chooser title node — and is hidden behind [`watch`].
//!
//! [`watch`]: ControllingField::watch

use crate::value::FieldValue;
use crate::watch::WatchGuard;

/// Callback invoked with the new value after every change.
pub type ChangeCallback = Box<dyn Fn(&FieldValue)>;

/// Read-only view of the form input that drives panel visibility.
///
/// Implementations are handles: cheap to clone, pointing at state owned by
/// the surrounding page. The trait is object-safe so wiring code can hold
/// fields of mixed provenance behind one type.
pub trait ControllingField {
    /// The value the field currently holds (unset if nothing is selected).
    fn value(&self) -> FieldValue;

    /// Observe future value changes.
    ///
    /// The callback fires once per change with the new value; it does not
    /// fire for the current value (callers wanting an immediate pass read
    /// [`value`](Self::value) first, which is exactly what the engine's
    /// `bind` does). Dropping the guard removes the listener — required
    /// when the containing page is torn down, so no callback outlives the
    /// form it belongs to.
    fn watch(&self, callback: ChangeCallback) -> WatchGuard;
}
