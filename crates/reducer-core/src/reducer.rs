//! Reducer contract
//!
//! A reducer maps `(state, action, origin)` to the next state. States travel
//! as `Arc<S>`: returning the input allocation means "unchanged", and the
//! input may only be modified through `Arc::make_mut`, which copies whenever
//! anyone else (the origin snapshot included) still holds it.
//!
//! An absent state (`None`) is legal input. Every reducer resolves it to an
//! initial value of its own; no reducer ever returns "nothing".

use std::sync::Arc;

use crate::Origin;

/// A pure state-transition function.
///
/// Implementations must be synchronous, total and free of side effects.
pub trait Reducer<S, A: ?Sized>: Send + Sync {
    /// Reduce as part of an in-progress reduction started elsewhere.
    ///
    /// `origin` must be forwarded unchanged to any nested reducer.
    fn reduce_with(&self, state: Option<Arc<S>>, action: &A, origin: &Origin<S>) -> Arc<S>;

    /// Reduce as the outermost call.
    ///
    /// Captures `state` as the origin for this call and everything beneath it.
    fn reduce(&self, state: Option<Arc<S>>, action: &A) -> Arc<S> {
        let origin = Origin::capture(state.as_ref());
        self.reduce_with(state, action, &origin)
    }

    /// Erase the concrete type so heterogeneous reducers can be composed
    fn boxed(self) -> BoxReducer<S, A>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Type-erased reducer, as stored by the combinators
pub type BoxReducer<S, A> = Box<dyn Reducer<S, A>>;

impl<S, A, R> Reducer<S, A> for Box<R>
where
    A: ?Sized,
    R: Reducer<S, A> + ?Sized,
{
    fn reduce_with(&self, state: Option<Arc<S>>, action: &A, origin: &Origin<S>) -> Arc<S> {
        (**self).reduce_with(state, action, origin)
    }
}

impl<S, A, R> Reducer<S, A> for Arc<R>
where
    A: ?Sized,
    R: Reducer<S, A> + ?Sized,
{
    fn reduce_with(&self, state: Option<Arc<S>>, action: &A, origin: &Origin<S>) -> Arc<S> {
        (**self).reduce_with(state, action, origin)
    }
}

/// Reducer backed by a closure taking the full contract
pub struct FnReducer<F> {
    f: F,
}

impl<S, A, F> Reducer<S, A> for FnReducer<F>
where
    A: ?Sized,
    F: Fn(Option<Arc<S>>, &A, &Origin<S>) -> Arc<S> + Send + Sync,
{
    fn reduce_with(&self, state: Option<Arc<S>>, action: &A, origin: &Origin<S>) -> Arc<S> {
        (self.f)(state, action, origin)
    }
}

/// Wrap a closure that handles absent state and the origin itself.
pub fn reducer_fn<S, A, F>(f: F) -> FnReducer<F>
where
    A: ?Sized,
    F: Fn(Option<Arc<S>>, &A, &Origin<S>) -> Arc<S> + Send + Sync,
{
    FnReducer { f }
}

/// Reducer backed by a closure over a present state, with a default
pub struct WithInitial<S, F> {
    initial: Arc<S>,
    f: F,
}

impl<S, F> WithInitial<S, F> {
    /// Value substituted when the state is absent
    pub fn initial(&self) -> &Arc<S> {
        &self.initial
    }
}

impl<S, A, F> Reducer<S, A> for WithInitial<S, F>
where
    S: Send + Sync,
    A: ?Sized,
    F: Fn(Arc<S>, &A) -> Arc<S> + Send + Sync,
{
    fn reduce_with(&self, state: Option<Arc<S>>, action: &A, _origin: &Origin<S>) -> Arc<S> {
        let state = state.unwrap_or_else(|| Arc::clone(&self.initial));
        (self.f)(state, action)
    }
}

/// Wrap a closure over a present state, substituting `initial` when absent.
///
/// ```rust
/// use std::sync::Arc;
/// use reducer_core::{with_initial, Reducer};
///
/// let x = with_initial(0i64, |x: Arc<i64>, action: &str| match action {
///     "x.increment" => Arc::new(*x + 1),
///     "x.decrement" => Arc::new(*x - 1),
///     _ => x,
/// });
///
/// assert_eq!(*x.reduce(None, "x.increment"), 1);
/// ```
pub fn with_initial<S, A, F>(initial: S, f: F) -> WithInitial<S, F>
where
    A: ?Sized,
    F: Fn(Arc<S>, &A) -> Arc<S> + Send + Sync,
{
    WithInitial {
        initial: Arc::new(initial),
        f,
    }
}
