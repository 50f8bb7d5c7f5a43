//! Reducer Bench - Fixtures shared by the benchmark suite
//!
//! Builds composites of configurable width and depth over a small counter
//! state so the benches measure combinator overhead, not reducer work.

use std::sync::Arc;

use reducer_compose::{
    dispatch, gate, join, with_initial, BoxReducer, Dispatch, DispatchConfig, Join, Origin,
    Reducer,
};

/// Counter state reduced by the fixtures
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Counter {
    pub value: u64,
    pub revision: u64,
}

/// Action type for slot `index`
pub fn action_type(index: usize) -> String {
    format!("counter.slot.{index}")
}

fn bump() -> BoxReducer<Counter, str> {
    with_initial(Counter::default(), |c: Arc<Counter>, _a: &str| {
        Arc::new(Counter {
            value: c.value + 1,
            revision: c.revision,
        })
    })
    .boxed()
}

fn revise() -> BoxReducer<Counter, str> {
    with_initial(Counter::default(), |c: Arc<Counter>, _a: &str| {
        Arc::new(Counter {
            value: c.value,
            revision: c.revision + 1,
        })
    })
    .boxed()
}

/// Dispatch with `width` distinct action types
pub fn wide_dispatch(width: usize) -> Dispatch<Counter, str> {
    Dispatch::with_config(
        (0..width).map(|i| (action_type(i), bump())),
        Counter::default(),
        DispatchConfig::quiet(),
    )
    .expect("fixture action types are never reserved")
}

/// `depth` nested levels of join -> dispatch -> gate, each bumping once
pub fn nested(depth: usize) -> BoxReducer<Counter, str> {
    let mut inner = join([bump(), revise()])
        .expect("two stages")
        .boxed();

    for _ in 0..depth {
        let routed = dispatch([(action_type(0), inner)])
            .expect("fixture action types are never reserved")
            .boxed();
        let stage: Join<Counter, str> = join([
            routed,
            gate(
                |c: Option<&Arc<Counter>>, _a: &str, o: &Origin<Counter>| {
                    c.is_some_and(|c| o.changed(c))
                },
                revise(),
            )
            .boxed(),
        ])
        .expect("two stages");
        inner = stage.boxed();
    }

    inner
}
