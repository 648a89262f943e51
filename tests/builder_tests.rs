use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use animation_template::{
    ObjectBinder, TargetHandle, TemplateError, DEFAULT_OBJECT_NAME, INFINITE_EXECUTIONS,
};

struct Button {
    width: i32,
    opacity: Rc<Cell<f32>>,
    scale: Rc<Cell<f32>>,
}

impl Button {
    fn new(width: i32) -> Rc<Self> {
        Rc::new(Self {
            width,
            opacity: Rc::new(Cell::new(0.0)),
            scale: Rc::new(Cell::new(1.0)),
        })
    }

    fn opacity_target(&self) -> TargetHandle<f32> {
        self.opacity.clone()
    }

    fn scale_target(&self) -> TargetHandle<f32> {
        self.scale.clone()
    }
}

struct Panel;

fn as_any<T: 'static>(object: &Rc<T>) -> Rc<dyn Any> {
    Rc::clone(object) as Rc<dyn Any>
}

/// it should address the default object when no name is given
#[test]
fn unnamed_binder_uses_default_name() {
    let binder = ObjectBinder::<Button>::new();
    assert_eq!(binder.names(), [DEFAULT_OBJECT_NAME]);
}

/// it should preserve name order and duplicates exactly as declared
#[test]
fn names_keep_declaration_order() {
    let binder = ObjectBinder::<Button>::named_all(["b", "a", "b"]);
    assert_eq!(binder.names(), ["b", "a", "b"]);
    assert!(binder.type_name().contains("Button"));
}

/// it should hand the bound names to the lookup and bind its result
#[test]
fn build_with_resolves_through_lookup() {
    let button = Button::new(1);
    let mut seen: Vec<String> = Vec::new();

    let mut builder = ObjectBinder::<Button>::named("ok")
        .target_with(|b: &Button| b.opacity_target())
        .end_value(1.0);

    let action = builder
        .build_with(|names: &[String]| {
            seen = names.to_vec();
            Some(as_any(&button))
        })
        .unwrap();

    assert_eq!(seen, ["ok"]);
    assert!(std::ptr::eq(action.object(), &*button));
    assert_eq!(action.names(), ["ok"]);
}

/// it should report an unresolvable name as ObjectNotFound
#[test]
fn build_with_missing_object() {
    let mut builder = ObjectBinder::<Button>::named("missing")
        .target_with(|b: &Button| b.opacity_target());

    let err = builder.build_with(|_: &[String]| None).unwrap_err();
    assert_eq!(
        err,
        TemplateError::ObjectNotFound {
            names: vec!["missing".to_string()],
        }
    );
}

/// it should reject a lookup result of the wrong runtime type
#[test]
fn build_with_type_mismatch() {
    let panel = Rc::new(Panel);
    let mut builder = ObjectBinder::<Button>::named("ok")
        .target_with(|b: &Button| b.opacity_target());

    let err = builder
        .build_with(|_: &[String]| Some(as_any(&panel)))
        .unwrap_err();

    match err {
        TemplateError::TypeMismatch { expected, names } => {
            assert!(expected.contains("Button"));
            assert_eq!(names, ["ok".to_string()]);
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

/// it should refuse to build without a previously bound object
#[test]
fn build_before_any_resolution() {
    let builder = ObjectBinder::<Button>::named("ok")
        .target_with(|b: &Button| b.opacity_target());

    let err = builder.build().unwrap_err();
    assert_eq!(
        err,
        TemplateError::UnboundObject {
            names: vec!["ok".to_string()],
        }
    );
}

/// it should reuse the last bound object with a fresh counter on build
#[test]
fn build_reuses_bound_object() {
    let button = Button::new(1);
    let mut builder = ObjectBinder::<Button>::named("ok")
        .target_with(|b: &Button| b.opacity_target())
        .executions(2);

    let mut first = builder
        .build_with(|_: &[String]| Some(as_any(&button)))
        .unwrap();
    first.add_execution(2);
    assert_eq!(first.execution_count(), 2);

    let second = builder.build().unwrap();
    assert_eq!(second.execution_count(), 0);
    assert!(std::ptr::eq(first.object(), second.object()));
    assert_ne!(first.id(), second.id());
}

/// it should build one action per looked-up object, in lookup order
#[test]
fn build_many_preserves_order() {
    let first = Button::new(1);
    let second = Button::new(2);
    let builder = ObjectBinder::<Button>::named_all(["a", "b"])
        .target_with(|b: &Button| b.opacity_target());

    let actions: Vec<_> = builder
        .build_many_with(|_: &[String]| vec![as_any(&first), as_any(&second)])
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].object().width, 1);
    assert_eq!(actions[1].object().width, 2);
}

/// it should call the multi lookup once and type-check per element
#[test]
fn build_many_isolates_bad_elements() {
    let good = Button::new(1);
    let bad = Rc::new(Panel);
    let also_good = Button::new(3);
    let calls = Cell::new(0);

    let builder = ObjectBinder::<Button>::named("all")
        .target_with(|b: &Button| b.opacity_target());

    let results: Vec<_> = builder
        .build_many_with(|_: &[String]| {
            calls.set(calls.get() + 1);
            vec![as_any(&good), as_any(&bad), as_any(&also_good)]
        })
        .collect();

    assert_eq!(calls.get(), 1);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().object().width, 1);
    assert!(matches!(
        results[1],
        Err(TemplateError::TypeMismatch { .. })
    ));
    assert_eq!(results[2].as_ref().unwrap().object().width, 3);
}

/// it should stop at the first failure when collected into a Result
#[test]
fn build_many_collect_halts_on_error() {
    let good = Button::new(1);
    let bad = Rc::new(Panel);

    let builder = ObjectBinder::<Button>::named("all")
        .target_with(|b: &Button| b.opacity_target());

    let collected: Result<Vec<_>, _> = builder
        .build_many_with(|_: &[String]| vec![as_any(&good), as_any(&bad)])
        .collect();

    assert!(matches!(
        collected,
        Err(TemplateError::TypeMismatch { .. })
    ));
}

/// it should produce no actions when the multi lookup finds nothing
#[test]
fn build_many_with_empty_lookup() {
    let builder = ObjectBinder::<Button>::named("ghost")
        .target_with(|b: &Button| b.opacity_target());

    let mut actions = builder.build_many_with(|_: &[String]| Vec::new());
    assert!(actions.next().is_none());
}

/// it should share behavior functions between sibling actions
#[test]
fn sibling_actions_alias_behavior() {
    let button = Button::new(1);
    let gate = Rc::new(Cell::new(true));
    let gate_ref = Rc::clone(&gate);

    let mut builder = ObjectBinder::<Button>::named("ok")
        .target_with(|b: &Button| b.opacity_target())
        .execute_when_with(move |_: &Button| gate_ref.get());

    let first = builder
        .build_with(|_: &[String]| Some(as_any(&button)))
        .unwrap();
    let second = builder.build().unwrap();

    assert!(first.execute_when());
    assert!(second.execute_when());
    gate.set(false);
    assert!(!first.execute_when());
    assert!(!second.execute_when());
}

/// it should let the latest setter call win while targets accumulate
#[test]
fn last_setter_wins_targets_accumulate() {
    let button = Button::new(1);
    let mut builder = ObjectBinder::<Button>::named("ok")
        .target_with(|b: &Button| b.opacity_target())
        .and_target_with(|b: &Button| b.scale_target())
        .end_value(0.3)
        .end_value(0.9);

    let action = builder
        .build_with(|_: &[String]| Some(as_any(&button)))
        .unwrap();

    assert_eq!(action.end_value(), Some(0.9));
    assert_eq!(action.map_targets(|t| t).count(), 2);

    for target in action.map_targets(|t| t) {
        target.set(0.9);
    }
    assert_eq!(button.opacity.get(), 0.9);
    assert_eq!(button.scale.get(), 0.9);
}

/// it should support target-less control actions from stage one
#[test]
fn control_action_without_targets() {
    let button = Button::new(1);
    let mut builder = ObjectBinder::<Button>::named("ok").executions(1);

    let action = builder
        .build_with(|_: &[String]| Some(as_any(&button)))
        .unwrap();

    assert!(action.first_target().is_none());
    assert_eq!(action.end_value(), None);
    assert_eq!(action.executions(), 1);
}

/// it should keep an ignored action inert until both fields are re-opened
#[test]
fn ignore_is_sticky_until_fully_reopened() {
    let button = Button::new(1);
    let lookup = |_: &[String]| Some(as_any(&button));

    let ignored = ObjectBinder::<Button>::named("ok")
        .ignore()
        .build_with(lookup)
        .unwrap();
    assert!(!ignored.should_execute());
    assert_eq!(ignored.executions(), 0);

    let gate_only = ObjectBinder::<Button>::named("ok")
        .ignore()
        .execute_when(true)
        .build_with(lookup)
        .unwrap();
    assert!(!gate_only.should_execute());

    let cap_only = ObjectBinder::<Button>::named("ok")
        .ignore()
        .executions(3)
        .build_with(lookup)
        .unwrap();
    assert!(!cap_only.should_execute());

    let reopened = ObjectBinder::<Button>::named("ok")
        .ignore()
        .execute_when(true)
        .executions(3)
        .build_with(lookup)
        .unwrap();
    assert!(reopened.should_execute());
}

/// it should stay inert after ignore no matter what unrelated setters do
#[test]
fn ignore_survives_unrelated_setters() {
    let button = Button::new(1);
    let mut builder = ObjectBinder::<Button>::named("ok")
        .target_with(|b: &Button| b.opacity_target())
        .ignore()
        .end_value(0.9)
        .on_finish(|_: &Button, _| {});

    let action = builder
        .build_with(|_: &[String]| Some(as_any(&button)))
        .unwrap();

    assert!(!action.should_execute());
    assert_eq!(action.end_value(), Some(0.9));
}

/// it should start sibling binders for other object types mid-chain
#[test]
fn with_object_starts_independent_binder() {
    let binder = ObjectBinder::<Button>::named("ok");
    let sibling = binder.with_object::<Panel, _>("side");

    assert_eq!(sibling.names(), ["side"]);
    assert!(sibling.type_name().contains("Panel"));
    assert_eq!(binder.names(), ["ok"]);

    let multi = binder.with_object_names::<Panel, _, _>(["l", "r"]);
    assert_eq!(multi.names(), ["l", "r"]);
}

/// it should default the execution cap to the infinite sentinel
#[test]
fn default_cap_is_infinite() {
    let button = Button::new(1);
    let mut builder = ObjectBinder::<Button>::named("ok")
        .target_with(|b: &Button| b.opacity_target());

    let action = builder
        .build_with(|_: &[String]| Some(as_any(&button)))
        .unwrap();

    assert_eq!(action.executions(), INFINITE_EXECUTIONS);
    assert!(action.should_execute());
}
