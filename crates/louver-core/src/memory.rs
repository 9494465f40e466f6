#![forbid(unsafe_code)]

//! In-memory form host.
//!
//! A headless stand-in for the CMS admin page: fields and panels registered
//! by id, no rendering. It is the reference implementation of the host
//! capabilities and the fixture every wiring test runs against.
//!
//! Two field flavors cover both notification sources found on the original
//! pages:
//!
//! - [`SelectField`] — a native select; changing the selection fires the
//!   watchers directly.
//! - [`WatchedLabel`] — a node whose *text content* is the value (the
//!   chooser title pattern, where the page swaps the label text and a
//!   mutation watch picks it up). The label text maps 1:1 to a
//!   [`FieldValue`], compared exactly, no trimming.

use std::cell::Cell;
use std::rc::Rc;

use ahash::AHashMap;

use crate::field::{ChangeCallback, ControllingField};
use crate::host::FormHost;
use crate::id::{FieldId, PanelId};
use crate::panel::PanelHandle;
use crate::value::FieldValue;
use crate::watch::{ValueCell, WatchGuard};

/// A select input holding one of a fixed set of values.
#[derive(Debug, Clone)]
pub struct SelectField {
    value: ValueCell<FieldValue>,
}

impl SelectField {
    /// Create a select with an initial value (possibly unset).
    #[must_use]
    pub fn new(initial: FieldValue) -> Self {
        Self {
            value: ValueCell::new(initial),
        }
    }

    /// Change the selection, firing watchers if the value differs.
    pub fn select(&self, value: impl Into<FieldValue>) {
        self.value.set(value.into());
    }
}

impl ControllingField for SelectField {
    fn value(&self) -> FieldValue {
        self.value.get()
    }

    fn watch(&self, callback: ChangeCallback) -> WatchGuard {
        self.value.watch(move |value| callback(value))
    }
}

/// A node observed through its text content.
///
/// The value *is* the text: watchers see a fresh [`FieldValue`] built from
/// the new text after every mutation.
#[derive(Debug, Clone)]
pub struct WatchedLabel {
    text: ValueCell<String>,
}

impl WatchedLabel {
    /// Create a label with initial text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: ValueCell::new(text.into()),
        }
    }

    /// Replace the text content (the mutation the page performs when the
    /// chooser selection changes).
    pub fn set_text(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }
}

impl ControllingField for WatchedLabel {
    fn value(&self) -> FieldValue {
        FieldValue::new(self.text.get())
    }

    fn watch(&self, callback: ChangeCallback) -> WatchGuard {
        self.text.watch(move |text| callback(&FieldValue::new(text)))
    }
}

/// Either field flavor, behind one handle type.
///
/// `FormHost::find_field` must return a single type; a page mixes both
/// sources, so the host hands out this enum and delegates.
#[derive(Debug, Clone)]
pub enum PageField {
    /// Native select input.
    Select(SelectField),
    /// Mutation-watched label node.
    Label(WatchedLabel),
}

impl ControllingField for PageField {
    fn value(&self) -> FieldValue {
        match self {
            Self::Select(field) => field.value(),
            Self::Label(label) => label.value(),
        }
    }

    fn watch(&self, callback: ChangeCallback) -> WatchGuard {
        match self {
            Self::Select(field) => field.watch(callback),
            Self::Label(label) => label.watch(callback),
        }
    }
}

/// A panel slot: a shared visibility bit.
///
/// Fresh panels are *visible* — a rendered form shows everything until a
/// visibility pass hides it, which is why failed setup must leave panels
/// untouched rather than "default them off".
#[derive(Debug, Clone)]
pub struct MemoryPanel {
    visible: Rc<Cell<bool>>,
}

impl MemoryPanel {
    /// Create a fresh, visible panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: Rc::new(Cell::new(true)),
        }
    }
}

impl Default for MemoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelHandle for MemoryPanel {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

/// A headless page: id-keyed fields and panels.
#[derive(Debug, Default)]
pub struct MemoryPage {
    fields: AHashMap<FieldId, PageField>,
    panels: AHashMap<PanelId, MemoryPanel>,
}

impl MemoryPage {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a select field; the returned handle drives it.
    pub fn add_select(&mut self, id: impl Into<FieldId>, initial: impl Into<FieldValue>) -> SelectField {
        let field = SelectField::new(initial.into());
        self.fields.insert(id.into(), PageField::Select(field.clone()));
        field
    }

    /// Register a watched label; the returned handle mutates its text.
    pub fn add_label(&mut self, id: impl Into<FieldId>, text: impl Into<String>) -> WatchedLabel {
        let label = WatchedLabel::new(text);
        self.fields.insert(id.into(), PageField::Label(label.clone()));
        label
    }

    /// Register a panel; the returned handle shares its visibility bit.
    pub fn add_panel(&mut self, id: impl Into<PanelId>) -> MemoryPanel {
        let panel = MemoryPanel::new();
        self.panels.insert(id.into(), panel.clone());
        panel
    }

    /// Registered panel count.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}

impl FormHost for MemoryPage {
    type Field = PageField;
    type Panel = MemoryPanel;

    fn find_field(&self, id: &FieldId) -> Option<Self::Field> {
        self.fields.get(id.as_str()).cloned()
    }

    fn find_panel(&self, id: &PanelId) -> Option<Self::Panel> {
        self.panels.get(id.as_str()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn lookups_return_registered_elements_only() {
        let mut page = MemoryPage::new();
        page.add_select("type", FieldValue::unset());
        page.add_panel("binary-rules");

        assert!(page.find_field(&FieldId::new("type")).is_some());
        assert!(page.find_field(&FieldId::new("missing")).is_none());
        assert!(page.find_panel(&PanelId::new("binary-rules")).is_some());
        assert!(page.find_panel(&PanelId::new("missing")).is_none());
    }

    #[test]
    fn select_changes_reach_watchers() {
        let mut page = MemoryPage::new();
        let select = page.add_select("type", "open");
        let field = page.find_field(&FieldId::new("type")).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = Rc::clone(&seen);
        let _guard = field.watch(Box::new(move |v| seen_in.borrow_mut().push(v.clone())));

        select.select("boolean");
        select.select("boolean"); // no change, no event
        select.select("percentage");

        let values: Vec<String> = seen.borrow().iter().map(|v| v.as_str().to_string()).collect();
        assert_eq!(values, ["boolean", "percentage"]);
    }

    #[test]
    fn label_text_is_the_value() {
        let mut page = MemoryPage::new();
        let label = page.add_label("assessment_type-title", "Diagnostic rapide");
        let field = page.find_field(&FieldId::new("assessment_type-title")).unwrap();

        assert_eq!(field.value(), FieldValue::new("Diagnostic rapide"));

        let last = Rc::new(RefCell::new(FieldValue::unset()));
        let last_in = Rc::clone(&last);
        let _guard = field.watch(Box::new(move |v| *last_in.borrow_mut() = v.clone()));

        label.set_text("Evaluation avec expert");
        assert_eq!(*last.borrow(), FieldValue::new("Evaluation avec expert"));
    }

    #[test]
    fn fresh_panels_start_visible() {
        let mut page = MemoryPage::new();
        let panel = page.add_panel("experts");
        assert!(panel.is_visible());

        let looked_up = page.find_panel(&PanelId::new("experts")).unwrap();
        looked_up.set_visible(false);
        assert!(!panel.is_visible(), "handles share the visibility bit");
    }

    #[test]
    fn both_field_flavors_share_one_contract() {
        let mut page = MemoryPage::new();
        page.add_select("type", "number");
        page.add_label("assessment_type-title", "Evaluation participative");

        let select = page.find_field(&FieldId::new("type")).unwrap();
        let label = page.find_field(&FieldId::new("assessment_type-title")).unwrap();

        assert_eq!(select.value(), FieldValue::new("number"));
        assert_eq!(label.value(), FieldValue::new("Evaluation participative"));
    }
}
