#![forbid(unsafe_code)]

//! Change notification for controlling values.
//!
//! [`ValueCell<T>`] holds a value in shared, reference-counted storage
//! (`Rc<RefCell<..>>`) and notifies live watchers whenever the value
//! actually changes (compared by `PartialEq`). It backs both notification
//! sources a form host may offer: a native change event (the select-based
//! pages) and a content-mutation watch (the chooser-title pages) — the
//! consumer cannot tell them apart.
//!
//! # Invariants
//!
//! 1. Setting an equal value is a no-op: no generation bump, no callbacks.
//! 2. Watchers fire in registration order.
//! 3. Dead watchers (dropped [`WatchGuard`]s) are pruned lazily on notify.
//! 4. Callbacks run with no internal borrow held, so a watcher may read or
//!    even set the cell re-entrantly without panicking.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type WatcherRc<T> = Rc<dyn Fn(&T)>;
type WatcherWeak<T> = Weak<dyn Fn(&T)>;

struct CellInner<T> {
    value: T,
    generation: u64,
    watchers: Vec<WatcherWeak<T>>,
}

/// A shared value with change notification.
///
/// Cloning a `ValueCell` produces another handle to the *same* storage:
/// both handles see the same value and the same watchers.
pub struct ValueCell<T> {
    inner: Rc<RefCell<CellInner<T>>>,
}

impl<T> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ValueCell")
            .field("value", &inner.value)
            .field("generation", &inner.generation)
            .field("watchers", &inner.watchers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> ValueCell<T> {
    /// Create a cell holding `value`, generation 0, no watchers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CellInner {
                value,
                generation: 0,
                watchers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value. Equal values are ignored; a changed value bumps
    /// the generation and notifies every live watcher, in registration
    /// order, after all internal borrows are released.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.generation += 1;
        }
        self.notify();
    }

    /// Register a watcher. The callback receives the new value on every
    /// change until the returned guard is dropped.
    pub fn watch(&self, callback: impl Fn(&T) + 'static) -> WatchGuard {
        let strong: WatcherRc<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().watchers.push(weak);
        WatchGuard {
            keep: Some(Box::new(strong)),
        }
    }

    /// How many times the value has changed since creation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation
    }

    /// Registered watchers, including dead ones not yet pruned.
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.inner.borrow().watchers.len()
    }

    fn notify(&self) {
        // Collect live callbacks first so no borrow is held while they run.
        let callbacks: Vec<WatcherRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.watchers.retain(|w| w.strong_count() > 0);
            inner.watchers.iter().filter_map(Weak::upgrade).collect()
        };
        if callbacks.is_empty() {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(watchers = callbacks.len(), "value change dispatched");

        let value = self.inner.borrow().value.clone();
        for callback in &callbacks {
            callback(&value);
        }
    }
}

/// RAII guard for a registered watcher.
///
/// Dropping the guard drops the only strong reference to the callback; the
/// weak entry in the watcher list fails to upgrade and is pruned on the
/// next notification. The callback is never invoked after the guard is
/// dropped.
pub struct WatchGuard {
    keep: Option<Box<dyn Any>>,
}

impl WatchGuard {
    /// A guard watching nothing. Useful for fields whose value can never
    /// change: the `ControllingField` contract still hands out a guard.
    #[must_use]
    pub fn inert() -> Self {
        Self { keep: None }
    }

    /// Whether this guard holds a live watcher.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.keep.is_some()
    }
}

impl fmt::Debug for WatchGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchGuard")
            .field("active", &self.is_active())
            .finish()
    }
}
