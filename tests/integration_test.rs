#![cfg(all(
    feature = "decorate",
    feature = "compose",
    feature = "adapt",
    feature = "inject",
    feature = "queue",
    feature = "registry"
))]
//! Integration tests for fntoolbox.
//!
//! These tests verify the public API of the library works correctly
//! across module boundaries.

use std::cell::RefCell;
use std::rc::Rc;

use fntoolbox::prelude::*;
use rstest::rstest;

/// Functions registered in a namespace, looked up and combined.
#[rstest]
fn registry_of_functions_composes() {
    let mut registry: Registry<Function<i32, i32>> = Registry::new();
    registry
        .in_package(&["math"], |package| {
            package.register("sum", Function::total(|arguments: &[i32]| arguments.iter().sum()))?;
            package.register("double", Function::total(|arguments: &[i32]| 2 * arguments[0]))?;
            package.register("square", Function::total(|arguments: &[i32]| arguments[0] * arguments[0]))
        })
        .unwrap();

    let lookup = |path: &str| registry.lookup(path).cloned().unwrap();
    let combined = compose(lookup("math.sum"))
        .of([lookup("math.double"), lookup("math.square")])
        .into_function();
    assert_eq!(combined.call(&[3]), Ok(15));
}

/// A composed function can be decorated, and the decorated form composed again.
#[rstest]
fn decorated_composition_round_trip() {
    let sum: Function<i32, i32> = Function::total(|arguments| arguments.iter().sum());
    let double: Function<i32, i32> = Function::total(|arguments| 2 * arguments[0]);
    let square: Function<i32, i32> = Function::total(|arguments| arguments[0] * arguments[0]);
    let combined = compose(sum.clone()).of([double, square]).into_function();

    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let counting: Decoration<i32, i32> = decorate(move |proceed, _| {
        *counter.borrow_mut() += 1;
        proceed.invoke()?;
        Ok(None)
    });
    let decorated = counting.apply(combined).into_function().map(|result| result.unwrap_or(0));

    let twice = compose(sum).of([decorated.clone(), decorated]).into_function();
    assert_eq!(twice.call(&[3]), Ok(30));
    assert_eq!(*calls.borrow(), 2);
}

/// Timing a composed function leaves its results and faults untouched.
#[rstest]
fn timed_composed_function() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let sum: Function<i32, i32, (), String> = Function::unbound(|arguments: &[i32]| {
        if arguments.is_empty() {
            Err("nothing to add".to_string())
        } else {
            Ok(arguments.iter().sum())
        }
    });
    let measured = timed(compose(sum.clone()).of([sum]).into_function());
    assert_eq!(measured.call(&[1, 2, 3]), Ok(Some(6)));
    assert_eq!(measured.call(&[]), Err("nothing to add".to_string()));
}

/// Timing an adapted function over JSON arguments.
#[cfg(feature = "json")]
#[rstest]
fn timed_adapted_json_function() {
    use serde_json::{Value, json};

    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let count: Function<Value, usize> =
        Function::total(|arguments: &[Value]| arguments[1].as_array().map_or(0, Vec::len));
    let adapted = adapt(count, Some(Shape::new(1, 0)));
    let measured = timed(adapted);
    assert_eq!(measured.call(&[json!("head"), json!(1), json!(2)]), Ok(Some(2)));
}

/// Merged bodies fed from a bounded queue of services.
#[rstest]
fn merged_bodies_consume_queue_snapshot() {
    let mut services = make_bounded(3, ["stale"]);
    services.push("http").push("scope").push("timeout");

    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let first_seen = Rc::clone(&seen);
    let second_seen = Rc::clone(&seen);
    let merged = merge([
        InjectableBody::new(["$http"], move |injected: &[&str]| {
            first_seen
                .borrow_mut()
                .extend(injected.iter().map(ToString::to_string));
            Ok::<(), String>(())
        }),
        InjectableBody::new(["$scope", "$timeout"], move |injected: &[&str]| {
            second_seen.borrow_mut().push(injected.join("+"));
            Ok(())
        }),
    ]);

    merged.invoke(&services.to_vec()).unwrap();
    assert_eq!(*seen.borrow(), vec!["http", "scope+timeout"]);
}

/// Array adapter helpers over the argument buffers other modules use.
#[rstest]
fn array_helpers_over_function_arguments() {
    let middle: Function<i32, Vec<i32>> =
        Function::total(|arguments: &[i32]| slice(arguments, 1, arguments.len().saturating_sub(1)));
    assert_eq!(middle.call(&[1, 2, 3, 4]), Ok(vec![2, 3]));

    let visited = RefCell::new(Vec::new());
    for_each(&[10, 20]).each(|item, index| visited.borrow_mut().push((*item, index)));
    assert_eq!(visited.into_inner(), vec![(10, 0), (20, 1)]);
}

static_assertions::assert_not_impl_any!(Function<i32, i32>: Send, Sync);
static_assertions::assert_impl_all!(BoundedFifo<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(RegistryError: std::error::Error, Send, Sync);
