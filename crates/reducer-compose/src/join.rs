//! Sequential join - runs reducers left to right
//!
//! Stage `i + 1` is seeded with the output of stage `i`. Every stage sees the
//! same origin, so a late stage can still tell what changed since the
//! reduction began.

use std::fmt;
use std::sync::Arc;

use reducer_core::{BoxReducer, ConfigError, ConfigResult, Origin, Reducer};
use tracing::{debug, trace};

/// Fewest stages a join accepts
pub const MIN_JOIN_STAGES: usize = 2;

/// Several reducers applied in sequence as one
pub struct Join<S, A: ?Sized> {
    /// Receives the incoming (possibly absent) state
    head: BoxReducer<S, A>,
    /// Never empty
    tail: Vec<BoxReducer<S, A>>,
}

impl<S, A: ?Sized> Join<S, A> {
    /// Build a join, rejecting fewer than two stages
    pub fn new<I>(stages: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = BoxReducer<S, A>>,
    {
        let mut stages = stages.into_iter();
        let head = stages.next().ok_or(ConfigError::TooFewReducers { given: 0 })?;
        let tail: Vec<_> = stages.collect();

        if tail.len() + 1 < MIN_JOIN_STAGES {
            return Err(ConfigError::TooFewReducers {
                given: tail.len() + 1,
            });
        }

        debug!(stages = tail.len() + 1, "join built");
        Ok(Join { head, tail })
    }

    /// Number of stages
    pub fn stage_count(&self) -> usize {
        self.tail.len() + 1
    }
}

impl<S, A: ?Sized> Reducer<S, A> for Join<S, A> {
    fn reduce_with(&self, state: Option<Arc<S>>, action: &A, origin: &Origin<S>) -> Arc<S> {
        let seeded = self.head.reduce_with(state, action, origin);

        self.tail
            .iter()
            .enumerate()
            .fold(seeded, |next, (index, stage)| {
                trace!(stage = index + 1, "join stage");
                stage.reduce_with(Some(next), action, origin)
            })
    }
}

impl<S, A: ?Sized> fmt::Debug for Join<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Join")
            .field("stages", &self.stage_count())
            .finish()
    }
}
