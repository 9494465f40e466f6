#![forbid(unsafe_code)]

//! Rule tables mapping a controlling field's value to the panels it
//! reveals.
//!
//! A [`RuleSet`] is the declarative heart of Louver: a static table from
//! [`FieldValue`] to [`PanelSet`]. The engine consults it on every change
//! of the controlling field and drives each managed panel to exactly the
//! state the table dictates.
//!
//! # Invariants
//!
//! 1. Panel sets are sorted and deduplicated on construction.
//! 2. Resolution is total: a value with no entry resolves to the empty
//!    set, so every managed panel hides.
//! 3. A built `RuleSet` is immutable; rebinding a form never mutates the
//!    table it was configured with.

use std::fmt;

use ahash::AHashMap;
use louver_core::{FieldValue, PanelId};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// PanelSet
// ---------------------------------------------------------------------------

/// A sorted, deduplicated set of panel ids.
///
/// Small enough that a sorted `Vec` with binary search beats a hash set;
/// rule tables in practice hold a handful of ids per value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSet {
    ids: Vec<PanelId>,
}

impl PanelSet {
    /// The empty set: reveals nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Build from any iterator of panel ids. Duplicates collapse.
    pub fn new<I, P>(ids: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PanelId>,
    {
        let mut ids: Vec<PanelId> = ids.into_iter().map(Into::into).collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    /// True when `id` is in the set.
    #[must_use]
    pub fn contains(&self, id: &PanelId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Number of panel ids in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the set reveals nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the ids in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, PanelId> {
        self.ids.iter()
    }
}

impl<'a> IntoIterator for &'a PanelSet {
    type Item = &'a PanelId;
    type IntoIter = std::slice::Iter<'a, PanelId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl<P: Into<PanelId>> FromIterator<P> for PanelSet {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for PanelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "}}")
    }
}

// ---------------------------------------------------------------------------
// MissingPanelPolicy
// ---------------------------------------------------------------------------

/// How panels that cannot be resolved are treated.
///
/// Two checks consult this policy:
///
/// - configuration time: a rule references a panel id outside the managed
///   set ([`RuleSet::ensure_managed`]);
/// - bind time: a managed panel id has no live element in the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MissingPanelPolicy {
    /// Unresolved panels degrade to permanent no-ops. Rules may reference
    /// undeclared ids; missing elements are skipped on every apply.
    #[default]
    Tolerant,
    /// Unresolved panels are errors: undeclared rule targets fail
    /// configuration and missing elements abort the bind.
    Strict,
}

impl MissingPanelPolicy {
    /// True when missing panels abort instead of degrade.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for MissingPanelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tolerant => write!(f, "tolerant"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// Immutable table mapping field values to the panel sets they reveal.
///
/// Values absent from the table (the unset value included, unless a rule
/// names it) reveal nothing.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: AHashMap<FieldValue, PanelSet>,
}

impl RuleSet {
    /// Start building a table.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// A table with no entries: every value hides every panel.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Panels revealed by `value`, or `None` when no rule matches.
    ///
    /// Callers treat `None` as the empty set; [`reveals`](Self::reveals)
    /// does that fold for a single panel.
    #[must_use]
    pub fn panels_for(&self, value: &FieldValue) -> Option<&PanelSet> {
        self.rules.get(value)
    }

    /// Total resolution for one panel: does `value` reveal `panel`?
    #[must_use]
    pub fn reveals(&self, value: &FieldValue, panel: &PanelId) -> bool {
        self.rules
            .get(value)
            .is_some_and(|set| set.contains(panel))
    }

    /// Union of every panel id referenced by any rule.
    #[must_use]
    pub fn referenced_panels(&self) -> PanelSet {
        self.rules
            .values()
            .flat_map(PanelSet::iter)
            .cloned()
            .collect()
    }

    /// Check that every rule only references panels in `managed`.
    ///
    /// Values are visited in sorted order, so the reported offender is
    /// deterministic when several rules are at fault.
    pub fn ensure_managed(&self, managed: &[PanelId]) -> Result<(), ConfigError> {
        let mut rules: Vec<(&FieldValue, &PanelSet)> = self.rules.iter().collect();
        rules.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (value, set) in rules {
            for panel in set {
                if !managed.contains(panel) {
                    return Err(ConfigError::UnmanagedPanel {
                        value: value.clone(),
                        panel: panel.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of value rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(value, panels)` rules in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldValue, &PanelSet)> {
        self.rules.iter()
    }
}

// ---------------------------------------------------------------------------
// RuleSetBuilder
// ---------------------------------------------------------------------------

/// Builder for [`RuleSet`].
///
/// Later entries replace earlier ones for the same value, matching map
/// semantics rather than merging.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: AHashMap<FieldValue, PanelSet>,
}

impl RuleSetBuilder {
    /// Start with an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `value` to the panels it reveals.
    #[must_use]
    pub fn rule<V, I, P>(mut self, value: V, panels: I) -> Self
    where
        V: Into<FieldValue>,
        I: IntoIterator<Item = P>,
        P: Into<PanelId>,
    {
        self.rules.insert(value.into(), PanelSet::new(panels));
        self
    }

    /// Map `value` to "reveal nothing", explicitly.
    ///
    /// Behaviorally identical to leaving `value` out of the table; the
    /// entry documents that the value was considered, not forgotten.
    #[must_use]
    pub fn hide_all<V: Into<FieldValue>>(mut self, value: V) -> Self {
        self.rules.insert(value.into(), PanelSet::empty());
        self
    }

    /// Finish the table.
    #[must_use]
    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_set_sorts_and_dedupes() {
        let set = PanelSet::new(["b-panel", "a-panel", "b-panel"]);
        let ids: Vec<&str> = set.iter().map(PanelId::as_str).collect();
        assert_eq!(ids, ["a-panel", "b-panel"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn panel_set_contains_by_binary_search() {
        let set = PanelSet::new(["experts", "royalty-payed"]);
        assert!(set.contains(&PanelId::new("experts")));
        assert!(set.contains(&PanelId::new("royalty-payed")));
        assert!(!set.contains(&PanelId::new("categories")));
    }

    #[test]
    fn empty_panel_set_reveals_nothing() {
        let set = PanelSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(&PanelId::new("anything")));
    }

    #[test]
    fn panel_set_display_lists_ids() {
        let set = PanelSet::new(["beta", "alpha"]);
        assert_eq!(set.to_string(), "{alpha, beta}");
        assert_eq!(PanelSet::empty().to_string(), "{}");
    }

    #[test]
    fn builder_maps_values_to_panels() {
        let rules = RuleSet::builder()
            .rule("unique_choice", ["response-choices"])
            .rule("multiple_choice", ["response-choices", "max-choices"])
            .build();

        let unique = FieldValue::new("unique_choice");
        let multiple = FieldValue::new("multiple_choice");
        assert!(rules.reveals(&unique, &PanelId::new("response-choices")));
        assert!(!rules.reveals(&unique, &PanelId::new("max-choices")));
        assert!(rules.reveals(&multiple, &PanelId::new("max-choices")));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn unknown_value_resolves_to_nothing() {
        let rules = RuleSet::builder()
            .rule("boolean", ["binary-rules"])
            .build();

        let unknown = FieldValue::new("never-ruled");
        assert!(rules.panels_for(&unknown).is_none());
        assert!(!rules.reveals(&unknown, &PanelId::new("binary-rules")));
    }

    #[test]
    fn unset_value_hides_unless_explicitly_ruled() {
        let bare = RuleSet::builder().rule("x", ["p"]).build();
        assert!(!bare.reveals(&FieldValue::unset(), &PanelId::new("p")));

        let with_unset_rule = RuleSet::builder()
            .rule(FieldValue::unset(), ["placeholder-note"])
            .build();
        assert!(with_unset_rule.reveals(
            &FieldValue::unset(),
            &PanelId::new("placeholder-note")
        ));
    }

    #[test]
    fn hide_all_records_an_explicit_empty_rule() {
        let rules = RuleSet::builder().hide_all("open").build();
        let open = FieldValue::new("open");

        let set = rules.panels_for(&open);
        assert!(set.is_some_and(PanelSet::is_empty), "entry should exist");
        assert!(!rules.reveals(&open, &PanelId::new("response-choices")));
    }

    #[test]
    fn later_rule_replaces_earlier_for_same_value() {
        let rules = RuleSet::builder()
            .rule("number", ["number-settings", "number-ranges"])
            .rule("number", ["number-settings"])
            .build();

        let number = FieldValue::new("number");
        assert!(!rules.reveals(&number, &PanelId::new("number-ranges")));
        assert!(rules.reveals(&number, &PanelId::new("number-settings")));
    }

    #[test]
    fn referenced_panels_unions_all_rules() {
        let rules = RuleSet::builder()
            .rule("a", ["p1", "p2"])
            .rule("b", ["p2", "p3"])
            .build();

        let all = rules.referenced_panels();
        let ids: Vec<&str> = all.iter().map(PanelId::as_str).collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);
    }

    #[test]
    fn ensure_managed_accepts_covered_rules() {
        let rules = RuleSet::builder()
            .rule("a", ["p1"])
            .rule("b", ["p1", "p2"])
            .build();
        let managed = [PanelId::new("p1"), PanelId::new("p2"), PanelId::new("p3")];
        assert!(rules.ensure_managed(&managed).is_ok());
    }

    #[test]
    fn ensure_managed_reports_first_unmanaged_panel() {
        let rules = RuleSet::builder()
            .rule("b", ["declared"])
            .rule("a", ["rogue"])
            .build();
        let managed = [PanelId::new("declared")];

        let err = rules
            .ensure_managed(&managed)
            .expect_err("rogue panel should fail the check");
        let ConfigError::UnmanagedPanel { value, panel } = err;
        // Sorted visit order makes "a" the deterministic offender.
        assert_eq!(value.as_str(), "a");
        assert_eq!(panel.as_str(), "rogue");
    }

    #[test]
    fn empty_ruleset_is_legal_and_hides_everything() {
        let rules = RuleSet::empty();
        assert!(rules.is_empty());
        assert!(!rules.reveals(&FieldValue::new("anything"), &PanelId::new("p")));
        assert!(rules.ensure_managed(&[]).is_ok());
    }

    #[test]
    fn policy_defaults_to_tolerant() {
        assert_eq!(MissingPanelPolicy::default(), MissingPanelPolicy::Tolerant);
        assert!(!MissingPanelPolicy::Tolerant.is_strict());
        assert!(MissingPanelPolicy::Strict.is_strict());
    }

    #[test]
    fn policy_display_names_are_lowercase() {
        assert_eq!(MissingPanelPolicy::Tolerant.to_string(), "tolerant");
        assert_eq!(MissingPanelPolicy::Strict.to_string(), "strict");
    }
}
