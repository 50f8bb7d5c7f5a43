//! Pass-through default
//!
//! Returns its input allocation untouched. Unlike a bare identity it owns an
//! initial value, so an absent state resolves to something explicit instead
//! of staying absent; aggregators of named sub-reducers treat a missing
//! initial value as fatal.

use std::sync::Arc;

use crate::{Origin, Reducer};

/// Identity reducer with an explicit initial value
#[derive(Debug)]
pub struct PassThrough<S> {
    initial: Arc<S>,
}

impl<S> PassThrough<S> {
    pub fn new(initial: S) -> Self {
        PassThrough {
            initial: Arc::new(initial),
        }
    }

    /// Share an already allocated initial value
    pub fn from_arc(initial: Arc<S>) -> Self {
        PassThrough { initial }
    }

    /// Value returned when the state is absent
    pub fn initial(&self) -> &Arc<S> {
        &self.initial
    }

    /// Resolve a possibly absent state without applying any transition
    pub fn resolve(&self, state: Option<Arc<S>>) -> Arc<S> {
        state.unwrap_or_else(|| Arc::clone(&self.initial))
    }
}

impl<S: Default> Default for PassThrough<S> {
    fn default() -> Self {
        PassThrough::new(S::default())
    }
}

impl<S> Clone for PassThrough<S> {
    fn clone(&self) -> Self {
        PassThrough {
            initial: Arc::clone(&self.initial),
        }
    }
}

impl<S, A> Reducer<S, A> for PassThrough<S>
where
    S: Send + Sync,
    A: ?Sized,
{
    fn reduce_with(&self, state: Option<Arc<S>>, _action: &A, _origin: &Origin<S>) -> Arc<S> {
        self.resolve(state)
    }
}
