//! Type-indexed dispatch - routes an action to the reducer keyed by its type
//!
//! Unrecognized actions are never an error: the state passes through as the
//! same allocation. When an initial state is supplied, an absent state is
//! replaced by it before lookup, which is what lets a dispatch serve as the
//! root reducer of a state sub-tree. Without one, a matched handler receives
//! the absent state and applies its own default.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use reducer_core::{Action, BoxReducer, ConfigError, ConfigResult, Origin, PassThrough, Reducer};
use tracing::{debug, trace};

/// Action type that almost always comes from an undefined type constant
pub const UNDEFINED_ACTION_TYPE: &str = "undefined";

/// Dispatch configuration
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Table keys rejected at construction
    pub reserved_types: Vec<String>,
    /// Emit a trace event when an action matches no entry
    pub trace_misses: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            reserved_types: vec![UNDEFINED_ACTION_TYPE.to_string()],
            trace_misses: true,
        }
    }
}

impl DispatchConfig {
    /// Also reject the other shapes a missing constant tends to take
    pub fn strict() -> Self {
        DispatchConfig {
            reserved_types: vec![
                UNDEFINED_ACTION_TYPE.to_string(),
                "null".to_string(),
                String::new(),
            ],
            ..DispatchConfig::default()
        }
    }

    /// Dispatch that stays silent on unmatched actions
    pub fn quiet() -> Self {
        DispatchConfig {
            trace_misses: false,
            ..DispatchConfig::default()
        }
    }

    pub fn is_reserved(&self, action_type: &str) -> bool {
        self.reserved_types.iter().any(|reserved| reserved == action_type)
    }
}

/// Reducers indexed by action type
pub struct Dispatch<S, A: ?Sized> {
    handlers: HashMap<String, BoxReducer<S, A>>,
    /// Substituted for an absent state before lookup
    initial: Option<Arc<S>>,
    /// Resolves an absent state on a miss
    fallback: PassThrough<S>,
    config: DispatchConfig,
}

impl<S, A: ?Sized> Dispatch<S, A> {
    /// Build from `(action type, reducer)` pairs without an initial state.
    ///
    /// Handlers resolve an absent state themselves; an unmatched action on
    /// an absent state yields `S::default()`.
    pub fn new<I, K>(table: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, BoxReducer<S, A>)>,
        K: Into<String>,
        S: Default,
    {
        Self::build(table, None, PassThrough::default(), DispatchConfig::default())
    }

    /// Build with an explicit initial state
    pub fn with_initial<I, K>(table: I, initial: S) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, BoxReducer<S, A>)>,
        K: Into<String>,
    {
        Self::with_config(table, initial, DispatchConfig::default())
    }

    /// Build with an explicit initial state and configuration.
    ///
    /// Fails on the first reserved key. A key inserted twice keeps the last
    /// reducer.
    pub fn with_config<I, K>(table: I, initial: S, config: DispatchConfig) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, BoxReducer<S, A>)>,
        K: Into<String>,
    {
        let initial = Arc::new(initial);
        let fallback = PassThrough::from_arc(Arc::clone(&initial));
        Self::build(table, Some(initial), fallback, config)
    }

    fn build<I, K>(
        table: I,
        initial: Option<Arc<S>>,
        fallback: PassThrough<S>,
        config: DispatchConfig,
    ) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, BoxReducer<S, A>)>,
        K: Into<String>,
    {
        let mut handlers = HashMap::new();

        for (key, reducer) in table {
            let key = key.into();
            if config.is_reserved(&key) {
                return Err(ConfigError::ReservedActionType { key });
            }
            handlers.insert(key, reducer);
        }

        debug!(handlers = handlers.len(), "dispatch built");
        Ok(Dispatch {
            handlers,
            initial,
            fallback,
            config,
        })
    }

    /// Whether an action of this type has a handler
    pub fn handles(&self, action_type: &str) -> bool {
        self.handlers.contains_key(action_type)
    }

    /// Action types with a handler, in no particular order
    pub fn action_types(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// State substituted when the incoming state is absent, if supplied
    pub fn initial(&self) -> Option<&Arc<S>> {
        self.initial.as_ref()
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }
}

impl<S, A> Reducer<S, A> for Dispatch<S, A>
where
    S: Send + Sync,
    A: Action + ?Sized,
{
    fn reduce_with(&self, state: Option<Arc<S>>, action: &A, origin: &Origin<S>) -> Arc<S> {
        let state = state.or_else(|| self.initial.clone());
        let action_type = action.action_type();

        match self.handlers.get(action_type) {
            Some(handler) => handler.reduce_with(state, action, origin),
            None => {
                if self.config.trace_misses {
                    trace!(action_type, "no handler, passing state through");
                }
                self.fallback.resolve(state)
            }
        }
    }
}

impl<S, A: ?Sized> fmt::Debug for Dispatch<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.action_types().collect();
        types.sort_unstable();
        f.debug_struct("Dispatch")
            .field("action_types", &types)
            .field("config", &self.config)
            .finish()
    }
}
