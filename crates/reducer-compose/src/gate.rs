//! Predicate gate - runs a reducer only while a condition holds
//!
//! The predicate sees `(state, action, origin)`, so a stage can be skipped
//! either on the current value ("only while the record is open") or on a
//! comparison with the snapshot ("only if the record changed since the
//! reduction began"). When the predicate fails the else branch runs, which
//! is a pass-through unless replaced with [`Gate::otherwise`].

use std::fmt;
use std::sync::Arc;

use reducer_core::{BoxReducer, Origin, PassThrough, Reducer};
use tracing::trace;

/// Conditional reducer
pub struct Gate<S, A: ?Sized, P> {
    predicate: P,
    then: BoxReducer<S, A>,
    otherwise: BoxReducer<S, A>,
}

impl<S, A, P> Gate<S, A, P>
where
    S: Send + Sync + 'static,
    A: ?Sized + 'static,
    P: Fn(Option<&Arc<S>>, &A, &Origin<S>) -> bool + Send + Sync,
{
    /// Gate over a pass-through that starts from `S::default()`
    pub fn new<R>(predicate: P, then: R) -> Self
    where
        R: Reducer<S, A> + 'static,
        S: Default,
    {
        Self::with_initial(predicate, then, S::default())
    }

    /// Gate over a pass-through that starts from `initial`
    pub fn with_initial<R>(predicate: P, then: R, initial: S) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Gate {
            predicate,
            then: then.boxed(),
            otherwise: PassThrough::new(initial).boxed(),
        }
    }

    /// Run `reducer` instead of passing through when the predicate fails
    pub fn otherwise<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        self.otherwise = reducer.boxed();
        self
    }
}

impl<S, A, P> Reducer<S, A> for Gate<S, A, P>
where
    A: ?Sized,
    P: Fn(Option<&Arc<S>>, &A, &Origin<S>) -> bool + Send + Sync,
{
    fn reduce_with(&self, state: Option<Arc<S>>, action: &A, origin: &Origin<S>) -> Arc<S> {
        if (self.predicate)(state.as_ref(), action, origin) {
            self.then.reduce_with(state, action, origin)
        } else {
            trace!("gate closed");
            self.otherwise.reduce_with(state, action, origin)
        }
    }
}

impl<S, A: ?Sized, P> fmt::Debug for Gate<S, A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate").finish_non_exhaustive()
    }
}
