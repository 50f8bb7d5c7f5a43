//! Original state - the snapshot taken when a top-level reduction starts
//!
//! One `Origin` is captured per top-level call and lent, by reference, to
//! every reducer invoked beneath it. It is not `Clone`: nested
//! combinators can only forward the instance they were given, so all of them
//! observe the same snapshot.
//!
//! Comparison is by allocation, not by value. A reducer that rebuilt a
//! structurally equal state still counts as a change, and a reducer that
//! returned its input untouched does not.

use std::fmt;
use std::sync::Arc;

/// Snapshot of the state at the start of the current top-level reduction
pub struct Origin<S> {
    snapshot: Option<Arc<S>>,
}

impl<S> Origin<S> {
    /// Capture the incoming state of a top-level call
    pub fn capture(state: Option<&Arc<S>>) -> Self {
        Origin {
            snapshot: state.cloned(),
        }
    }

    /// The captured state, `None` if the reduction started without one
    pub fn state(&self) -> Option<&Arc<S>> {
        self.snapshot.as_ref()
    }

    /// Borrow the captured value
    pub fn get(&self) -> Option<&S> {
        self.snapshot.as_deref()
    }

    /// Whether the reduction started without a state
    pub fn is_absent(&self) -> bool {
        self.snapshot.is_none()
    }

    /// `state` is the very allocation captured at the start
    pub fn is_unchanged(&self, state: &Arc<S>) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|snapshot| Arc::ptr_eq(snapshot, state))
    }

    /// `state` differs from the captured allocation
    pub fn changed(&self, state: &Arc<S>) -> bool {
        !self.is_unchanged(state)
    }
}

impl<S: fmt::Debug> fmt::Debug for Origin<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Origin")
            .field("snapshot", &self.snapshot)
            .finish()
    }
}
