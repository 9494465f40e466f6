#![forbid(unsafe_code)]

//! The visibility engine: one controlling field driving a set of panels.
//!
//! [`VisibilityEngine`] owns the configured rule table and a slot per
//! managed panel. Each visibility pass resolves the current field value
//! through the table and writes every slot to exactly the state the table
//! dictates. Panels outside the managed set are never touched.
//!
//! # Invariants
//!
//! 1. A pass is total: every managed panel is driven to shown or hidden,
//!    never left in a stale state.
//! 2. A pass is idempotent: applying the same value twice leaves the same
//!    states behind.
//! 3. Panel state depends only on the most recent value, not on the
//!    sequence of values before it.
//! 4. A slot without a live handle is skipped, never an error.
//!
//! # Failure Modes
//!
//! - **Re-entrant field mutation**: a panel whose `set_visible` writes the
//!   controlling field back re-enters the engine through the listener.
//!   Equal values stop the cycle; a write that keeps flipping the value
//!   recurses until the stack runs out. Visibility is a sink, not a source.

use std::rc::Rc;

use louver_core::{ControllingField, FieldValue, PanelHandle, PanelId, WatchGuard};
use louver_rules::{ConfigError, MissingPanelPolicy, RuleSet};
use tracing::{debug, info, info_span};
use web_time::Instant;

/// One managed panel: its id and, when the page has it, a live handle.
#[derive(Debug)]
struct PanelSlot<P> {
    id: PanelId,
    /// `None` under the tolerant policy when the element was absent at
    /// configure time. The slot stays managed in name and is skipped on
    /// every pass.
    handle: Option<P>,
}

/// Shared interior for [`VisibilityEngine`].
#[derive(Debug)]
struct EngineInner<P> {
    rules: RuleSet,
    slots: Vec<PanelSlot<P>>,
    policy: MissingPanelPolicy,
}

/// A configured visibility engine.
///
/// Cloning the engine creates a new handle to the **same** configuration
/// and slots; the change-listener closure holds one such handle.
#[derive(Debug)]
pub struct VisibilityEngine<P> {
    inner: Rc<EngineInner<P>>,
}

impl<P> Clone for VisibilityEngine<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: PanelHandle> VisibilityEngine<P> {
    /// Configure an engine under the default tolerant policy.
    ///
    /// Never fails: rule targets outside the managed set are ignored on
    /// every pass, and slots without handles are skipped.
    pub fn new<I>(rules: RuleSet, panels: I) -> Self
    where
        I: IntoIterator<Item = (PanelId, Option<P>)>,
    {
        let slots = collect_slots(panels);
        Self::from_parts(rules, slots, MissingPanelPolicy::Tolerant)
    }

    /// Configure an engine under an explicit policy.
    ///
    /// Under [`MissingPanelPolicy::Strict`], a rule referencing a panel id
    /// outside `panels` fails with [`ConfigError::UnmanagedPanel`] before
    /// any state is built.
    pub fn with_policy<I>(
        rules: RuleSet,
        panels: I,
        policy: MissingPanelPolicy,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (PanelId, Option<P>)>,
    {
        let slots = collect_slots(panels);
        if policy.is_strict() {
            let ids: Vec<PanelId> = slots.iter().map(|slot| slot.id.clone()).collect();
            rules.ensure_managed(&ids)?;
        }
        Ok(Self::from_parts(rules, slots, policy))
    }

    fn from_parts(rules: RuleSet, slots: Vec<PanelSlot<P>>, policy: MissingPanelPolicy) -> Self {
        let missing = slots.iter().filter(|slot| slot.handle.is_none()).count();
        let referenced = rules.referenced_panels();
        let orphaned: Vec<&PanelId> = referenced
            .iter()
            .filter(|id| !slots.iter().any(|slot| slot.id == **id))
            .collect();
        if !orphaned.is_empty() {
            debug!(?orphaned, "rule targets without a managed panel");
        }
        debug!(
            rules = rules.len(),
            panels = slots.len(),
            missing,
            %policy,
            "visibility engine configured"
        );
        Self {
            inner: Rc::new(EngineInner {
                rules,
                slots,
                policy,
            }),
        }
    }

    /// Run one visibility pass for `value`.
    ///
    /// Total and idempotent: every managed panel is written to the state
    /// the rule table dictates for `value`. Unknown and unset values hide
    /// everything. Slots without handles are skipped.
    pub fn apply(&self, value: &FieldValue) {
        let start = Instant::now();
        let _span = info_span!(
            "visibility.apply",
            value = %value,
            panels = self.inner.slots.len() as u64,
            duration_us = tracing::field::Empty
        )
        .entered();

        let revealed = self.inner.rules.panels_for(value);
        let mut shown = 0_u64;
        let mut hidden = 0_u64;
        let mut skipped = 0_u64;
        for slot in &self.inner.slots {
            let visible = revealed.is_some_and(|set| set.contains(&slot.id));
            match &slot.handle {
                Some(handle) => {
                    handle.set_visible(visible);
                    if visible {
                        shown += 1;
                    } else {
                        hidden += 1;
                    }
                }
                None => skipped += 1,
            }
        }

        let duration_us = start.elapsed().as_micros() as u64;
        tracing::Span::current().record("duration_us", duration_us);
        info!(
            value = %value,
            shown,
            hidden,
            skipped,
            duration_us,
            "visibility pass"
        );
    }

    /// Bind the engine to a controlling field.
    ///
    /// Applies the field's current value immediately, then installs a
    /// change listener that re-applies on every value change. The returned
    /// [`Binding`] detaches the listener when dropped; panels keep their
    /// last applied state.
    pub fn bind<F>(&self, field: &F) -> Binding
    where
        F: ControllingField + ?Sized,
        P: 'static,
    {
        self.apply(&field.value());
        let engine = self.clone();
        let watch = field.watch(Box::new(move |value| engine.apply(value)));
        Binding { watch }
    }

    /// Number of managed panel slots, handle-less slots included.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.inner.slots.len()
    }

    /// Ids of every managed panel, in declaration order.
    pub fn managed_panels(&self) -> impl Iterator<Item = &PanelId> {
        self.inner.slots.iter().map(|slot| &slot.id)
    }

    /// The policy the engine was configured under.
    #[must_use]
    pub fn policy(&self) -> MissingPanelPolicy {
        self.inner.policy
    }

    /// The configured rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.inner.rules
    }
}

fn collect_slots<P, I>(panels: I) -> Vec<PanelSlot<P>>
where
    I: IntoIterator<Item = (PanelId, Option<P>)>,
{
    panels
        .into_iter()
        .map(|(id, handle)| PanelSlot { id, handle })
        .collect()
}

/// RAII guard for a bound change listener.
///
/// Holds the watch registration alive. Dropping the binding detaches the
/// listener, so later field changes no longer reach the engine; the
/// panels keep whatever state the last pass wrote.
#[derive(Debug)]
pub struct Binding {
    watch: WatchGuard,
}

impl Binding {
    /// True while the listener is attached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.watch.is_active()
    }
}
