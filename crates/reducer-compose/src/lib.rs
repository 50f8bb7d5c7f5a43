//! Reducer Compose - Higher-order reducers
//!
//! Narrow reducers are assembled into one state-transition function with
//! three combinators, each of which both consumes and produces the reducer
//! contract and so nests arbitrarily deep:
//! - [`Join`]: reducers applied in sequence
//! - [`Dispatch`]: reducers indexed by action type, pass-through otherwise
//! - [`Gate`]: a reducer applied only while a predicate holds
//!
//! The outermost call captures the incoming state as the [`Origin`]; every
//! nested call receives that same instance.
//!
//! ```rust
//! use std::sync::Arc;
//! use reducer_compose::{dispatch, join, with_initial, Reducer};
//!
//! let inc = dispatch([(
//!     "inc",
//!     with_initial(0i64, |x: Arc<i64>, _a: &str| Arc::new(*x + 1)).boxed(),
//! )])
//! .unwrap();
//! let scale = dispatch([(
//!     "inc",
//!     with_initial(0i64, |x: Arc<i64>, _a: &str| Arc::new(*x * 10)).boxed(),
//! )])
//! .unwrap();
//! let reducer = join([inc.boxed(), scale.boxed()]).unwrap();
//!
//! assert_eq!(*reducer.reduce(Some(Arc::new(0)), "inc"), 10);
//! ```

pub mod dispatch;
pub mod gate;
pub mod join;

pub use dispatch::*;
pub use gate::*;
pub use join::*;

pub use reducer_core::*;

use std::sync::Arc;

/// Join two or more reducers, applied left to right.
pub fn join<S, A, I>(stages: I) -> ConfigResult<Join<S, A>>
where
    A: ?Sized,
    I: IntoIterator<Item = BoxReducer<S, A>>,
{
    Join::new(stages)
}

/// Index reducers by action type without an initial state.
///
/// A matched handler applies its own default to an absent state; a miss on
/// an absent state yields `S::default()`.
pub fn dispatch<S, A, I, K>(table: I) -> ConfigResult<Dispatch<S, A>>
where
    S: Default,
    A: ?Sized,
    I: IntoIterator<Item = (K, BoxReducer<S, A>)>,
    K: Into<String>,
{
    Dispatch::new(table)
}

/// Index reducers by action type, starting from `initial`.
pub fn dispatch_with_initial<S, A, I, K>(table: I, initial: S) -> ConfigResult<Dispatch<S, A>>
where
    A: ?Sized,
    I: IntoIterator<Item = (K, BoxReducer<S, A>)>,
    K: Into<String>,
{
    Dispatch::with_initial(table, initial)
}

/// Apply `then` only while `predicate` holds, passing through otherwise.
pub fn gate<S, A, P, R>(predicate: P, then: R) -> Gate<S, A, P>
where
    S: Default + Send + Sync + 'static,
    A: ?Sized + 'static,
    P: Fn(Option<&Arc<S>>, &A, &Origin<S>) -> bool + Send + Sync,
    R: Reducer<S, A> + 'static,
{
    Gate::new(predicate, then)
}
