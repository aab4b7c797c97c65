//! UI state - presentation state shared between the carousel and its observers
//!
//! `UiState` is a cheap-to-clone handle. The carousel controller holds one
//! clone and is the only writer; views hold other clones and only read.
//! Every effective mutation is pushed to subscribers after it has been applied.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Point-in-time copy of the shared carousel state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UiSnapshot {
    pub active_index: usize,
    pub drag_displacement: f32,
}

/// Handle returned by [`UiState::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&UiSnapshot)>;

struct Inner {
    snapshot: UiSnapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Shared, observable carousel state
#[derive(Clone)]
pub struct UiState {
    inner: Rc<RefCell<Inner>>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("UiState")
            .field("active_index", &inner.snapshot.active_index)
            .field("drag_displacement", &inner.snapshot.drag_displacement)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                snapshot: UiSnapshot::default(),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Index of the card currently centred in the carousel
    pub fn active_index(&self) -> usize {
        self.inner.borrow().snapshot.active_index
    }

    /// Horizontal displacement of an in-flight drag, 0 at rest
    pub fn drag_displacement(&self) -> f32 {
        self.inner.borrow().snapshot.drag_displacement
    }

    pub fn snapshot(&self) -> UiSnapshot {
        self.inner.borrow().snapshot
    }

    /// Register a callback invoked after every effective mutation
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&UiSnapshot) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a callback. Returns false if the id was unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        inner.listeners.len() != before
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation (carousel controller only)
    // ─────────────────────────────────────────────────────────────────────────

    pub(in crate::model) fn set_active_index(&self, index: usize) {
        self.mutate(|snapshot| snapshot.active_index = index);
    }

    pub(in crate::model) fn set_drag_displacement(&self, displacement: f32) {
        self.mutate(|snapshot| snapshot.drag_displacement = displacement);
    }

    /// Apply a change and notify. The borrow is released before listeners
    /// run, so a listener may read the state or (un)subscribe.
    fn mutate(&self, change: impl FnOnce(&mut UiSnapshot)) {
        let (snapshot, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.snapshot;
            change(&mut inner.snapshot);
            if inner.snapshot == before {
                return;
            }
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (inner.snapshot, listeners)
        };

        for listener in listeners {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_new_state_is_at_rest() {
        let state = UiState::new();
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.drag_displacement(), 0.0);
    }

    #[test]
    fn test_clones_share_state() {
        let writer = UiState::new();
        let reader = writer.clone();

        writer.set_active_index(3);
        writer.set_drag_displacement(-12.5);

        assert_eq!(reader.active_index(), 3);
        assert_eq!(reader.drag_displacement(), -12.5);
    }

    #[test]
    fn test_subscriber_sees_new_values() {
        let state = UiState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = Rc::clone(&seen);
        let reader = state.clone();
        state.subscribe(move |snapshot| {
            // Reading through the handle inside a callback must not panic
            assert_eq!(reader.active_index(), snapshot.active_index);
            seen_clone.borrow_mut().push(*snapshot);
        });

        state.set_active_index(2);
        state.set_drag_displacement(30.0);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].active_index, 2);
        assert_eq!(seen[1].drag_displacement, 30.0);
    }

    #[test]
    fn test_noop_mutation_does_not_notify() {
        let state = UiState::new();
        let calls = Rc::new(Cell::new(0));

        let calls_clone = Rc::clone(&calls);
        state.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));

        state.set_active_index(0);
        state.set_drag_displacement(0.0);
        assert_eq!(calls.get(), 0);

        state.set_active_index(1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let state = UiState::new();
        let calls = Rc::new(Cell::new(0));

        let calls_clone = Rc::clone(&calls);
        let id = state.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));

        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));

        state.set_active_index(4);
        assert_eq!(calls.get(), 0);
    }
}
