//! A widget editor assembled from narrow reducers
//!
//! - First the widget's shape is decided: an edit opens it, a close clears it.
//! - While it is open its `x`/`y` fields are maintained by their own reducers.
//! - Its hash is recomputed only when the widget changed during this reduction.

use std::sync::Arc;

use reducer_compose::{
    dispatch, dispatch_with_initial, gate, join, reducer_fn, with_initial, Action, Dispatch,
    Join, Origin, Reducer,
};

#[derive(Clone, Debug, Default, PartialEq)]
struct Widget {
    x: i64,
    y: i64,
    cur_hash: Option<String>,
}

impl Widget {
    fn new(x: i64, y: i64) -> Self {
        Widget {
            x,
            y,
            cur_hash: None,
        }
    }

    fn hash(&self) -> String {
        format!("x={};y={}", self.x, self.y)
    }
}

type Editing = Option<Widget>;

#[derive(Clone, Debug)]
enum WidgetAction {
    Edit(Widget),
    Close,
    IncrementX,
    DecrementX,
    IncrementY,
    Unrelated,
}

impl Action for WidgetAction {
    fn action_type(&self) -> &str {
        match self {
            WidgetAction::Edit(_) => "widget.edit",
            WidgetAction::Close => "widget.edit.close",
            WidgetAction::IncrementX => "widget.edit.x.increment",
            WidgetAction::DecrementX => "widget.edit.x.decrement",
            WidgetAction::IncrementY => "widget.edit.y.increment",
            WidgetAction::Unrelated => "app.unrelated",
        }
    }
}

fn step(delta: i64) -> reducer_compose::BoxReducer<i64, WidgetAction> {
    with_initial(0i64, move |n: Arc<i64>, _a: &WidgetAction| Arc::new(*n + delta)).boxed()
}

fn x_reducer() -> Dispatch<i64, WidgetAction> {
    dispatch([
        ("widget.edit.x.increment", step(1)),
        ("widget.edit.x.decrement", step(-1)),
    ])
    .unwrap()
}

fn y_reducer() -> Dispatch<i64, WidgetAction> {
    dispatch([("widget.edit.y.increment", step(1))]).unwrap()
}

/// Field-wise aggregation in the style of a "combine named sub-reducers"
/// helper: each field reducer runs as its own top-level reduction, and the
/// widget is rebuilt only if a field moved.
fn fields() -> impl Reducer<Editing, WidgetAction> {
    let x = x_reducer();
    let y = y_reducer();
    with_initial(None, move |editing: Arc<Editing>, action: &WidgetAction| {
        let moved = match &*editing {
            Some(widget) => {
                let next_x = *x.reduce(Some(Arc::new(widget.x)), action);
                let next_y = *y.reduce(Some(Arc::new(widget.y)), action);
                (next_x != widget.x || next_y != widget.y).then(|| Widget {
                    x: next_x,
                    y: next_y,
                    cur_hash: widget.cur_hash.clone(),
                })
            }
            None => None,
        };
        match moved {
            Some(widget) => Arc::new(Some(widget)),
            None => editing,
        }
    })
}

fn widget_reducer() -> Join<Editing, WidgetAction> {
    let edit = reducer_fn(
        |editing: Option<Arc<Editing>>, action: &WidgetAction, _o: &Origin<Editing>| match action {
            WidgetAction::Edit(widget) => Arc::new(Some(widget.clone())),
            _ => editing.unwrap_or_default(),
        },
    );
    let close = with_initial(None, |_w: Arc<Editing>, _a: &WidgetAction| Arc::new(None));

    let rehash = with_initial(None, |editing: Arc<Editing>, _a: &WidgetAction| {
        let mut editing = editing;
        if let Some(widget) = Arc::make_mut(&mut editing) {
            widget.cur_hash = Some(widget.hash());
        }
        editing
    });

    join([
        dispatch_with_initial(
            [
                ("widget.edit", edit.boxed()),
                ("widget.edit.close", close.boxed()),
            ],
            None,
        )
        .unwrap()
        .boxed(),
        gate(
            |w: Option<&Arc<Editing>>, _a: &WidgetAction, _o: &Origin<Editing>| {
                w.is_some_and(|w| w.is_some())
            },
            join([
                fields().boxed(),
                gate(
                    |w: Option<&Arc<Editing>>, _a: &WidgetAction, o: &Origin<Editing>| {
                        w.is_some_and(|w| o.changed(w))
                    },
                    rehash,
                )
                .boxed(),
            ])
            .unwrap(),
        )
        .boxed(),
    ])
    .unwrap()
}

fn open(reducer: &Join<Editing, WidgetAction>, x: i64, y: i64) -> Arc<Editing> {
    reducer.reduce(None, &WidgetAction::Edit(Widget::new(x, y)))
}

#[test]
fn test_edit_opens_and_hashes() {
    let reducer = widget_reducer();
    let editing = open(&reducer, 1, 2);

    let widget = Option::as_ref(&editing).unwrap();
    assert_eq!((widget.x, widget.y), (1, 2));
    assert_eq!(widget.cur_hash.as_deref(), Some("x=1;y=2"));
}

#[test]
fn test_field_change_rehashes() {
    let reducer = widget_reducer();
    let editing = open(&reducer, 1, 2);

    let editing = reducer.reduce(Some(editing), &WidgetAction::IncrementX);
    let editing = reducer.reduce(Some(editing), &WidgetAction::IncrementY);
    let editing = reducer.reduce(Some(editing), &WidgetAction::DecrementX);

    let widget = Option::as_ref(&editing).unwrap();
    assert_eq!((widget.x, widget.y), (1, 3));
    assert_eq!(widget.cur_hash.as_deref(), Some("x=1;y=3"));
}

#[test]
fn test_unrelated_action_keeps_allocation() {
    let reducer = widget_reducer();
    let editing = open(&reducer, 5, 5);

    let next = reducer.reduce(Some(Arc::clone(&editing)), &WidgetAction::Unrelated);
    assert!(Arc::ptr_eq(&next, &editing));
}

#[test]
fn test_field_actions_ignored_while_closed() {
    let reducer = widget_reducer();
    let closed: Arc<Editing> = Arc::new(None);

    let next = reducer.reduce(Some(Arc::clone(&closed)), &WidgetAction::IncrementX);
    assert!(Arc::ptr_eq(&next, &closed));
}

#[test]
fn test_close_clears_widget() {
    let reducer = widget_reducer();
    let editing = open(&reducer, 1, 1);

    let next = reducer.reduce(Some(editing), &WidgetAction::Close);
    assert_eq!(*next, None);
}

#[test]
fn test_initial_state_is_explicit() {
    let reducer = widget_reducer();
    assert_eq!(*reducer.reduce(None, &WidgetAction::Unrelated), None);
}

#[test]
fn test_previous_state_never_mutated() {
    let reducer = widget_reducer();
    let before = open(&reducer, 0, 0);
    let snapshot = (*before).clone();

    let _after = reducer.reduce(Some(Arc::clone(&before)), &WidgetAction::IncrementX);
    assert_eq!(*before, snapshot);
}
