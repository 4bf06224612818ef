#![cfg(all(feature = "compose", feature = "decorate"))]
//! Property-based tests for the composition and decoration laws.
//!
//! ## Composition Laws
//! - **Identity base case**: `compose(f).into_function()(xs) == f(xs)`
//! - **Arity**: `compose(f).of([g1, ..., gk])(xs) == f([g1(xs), ..., gk(xs)])`
//! - **Chaining**: `compose(f).of([g]).of([h])(xs) == f([g([h(xs)])])`
//!
//! ## Decoration Laws
//! - **Identity**: a pass-through behavior preserves the result
//! - **Override**: a constant behavior never runs the initial function
//! - **Pinning**: `loyal_to(owner)` ignores the call receiver

use std::cell::Cell;
use std::rc::Rc;

use fntoolbox::compose::compose;
use fntoolbox::decorate::{Decoration, decorate, loyal_to};
use fntoolbox::function::Function;
use proptest::prelude::*;

fn wrapping_sum() -> Function<i32, i32> {
    Function::total(|arguments: &[i32]| arguments.iter().fold(0_i32, |total, value| total.wrapping_add(*value)))
}

fn wrapping_double() -> Function<i32, i32> {
    Function::total(|arguments| arguments.first().copied().unwrap_or(0_i32).wrapping_mul(2))
}

fn wrapping_square() -> Function<i32, i32> {
    Function::total(|arguments| {
        let first: i32 = arguments.first().copied().unwrap_or(0);
        first.wrapping_mul(first)
    })
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Identity base case: an unextended composition is the final function.
    #[test]
    fn prop_compose_identity_base_case(arguments in prop::collection::vec(any::<i32>(), 0..8)) {
        let final_function = wrapping_sum();
        let built = compose(final_function.clone()).into_function();

        prop_assert_eq!(built.call(&arguments), final_function.call(&arguments));
    }

    /// Arity: the final function sees one result per component, in order.
    #[test]
    fn prop_compose_fans_out(x in -10_000_i32..10_000) {
        let combined = compose(wrapping_sum())
            .of([wrapping_double(), wrapping_square()])
            .into_function();

        prop_assert_eq!(combined.call(&[x]), Ok(2 * x + x * x));
    }

    /// Chaining: each stage feeds the function built so far.
    #[test]
    fn prop_compose_chaining_nests(x in -1_000_i32..1_000) {
        let chained = compose(wrapping_sum())
            .of([wrapping_double()])
            .of([wrapping_square()])
            .into_function();

        prop_assert_eq!(chained.call(&[x]), Ok(2 * (x * x)));
    }

    /// Components see the full argument list, not a slice of it.
    #[test]
    fn prop_components_receive_all_arguments(arguments in prop::collection::vec(-100_i32..100, 0..8)) {
        let first: Function<i32, i32> = Function::total(|results| results[0]);
        let combined = compose(first).of([wrapping_sum()]).into_function();

        prop_assert_eq!(combined.call(&arguments), wrapping_sum().call(&arguments));
    }
}

// =============================================================================
// Decoration Laws
// =============================================================================

proptest! {
    /// Identity: proceeding once and not overriding preserves the result.
    #[test]
    fn prop_decoration_identity(arguments in prop::collection::vec(any::<i32>(), 0..8)) {
        let pass: Decoration<i32, i32> = decorate(|proceed, _| {
            proceed.invoke()?;
            Ok(None)
        });
        let decorated = pass.apply(wrapping_sum());

        prop_assert_eq!(decorated.call(&arguments), wrapping_sum().call(&arguments).map(Some));
    }

    /// Override: a constant behavior never executes the initial function.
    #[test]
    fn prop_decoration_override(constant in any::<i32>(), arguments in prop::collection::vec(any::<i32>(), 0..8)) {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let initial: Function<i32, i32> = Function::total(move |_| {
            counter.set(counter.get() + 1);
            0
        });
        let constant_behavior: Decoration<i32, i32> = decorate(move |_, _| Ok(Some(constant)));

        prop_assert_eq!(constant_behavior.apply(initial).call(&arguments), Ok(Some(constant)));
        prop_assert_eq!(runs.get(), 0);
    }

    /// Pinning: the initial function always sees the owner as receiver.
    #[test]
    fn prop_loyal_to_pins_receiver(owner in any::<i64>(), stranger in any::<i64>()) {
        let whoami: Function<u8, i64, i64> = Function::new(|receiver, _| Ok(*receiver.unwrap_or(&0)));
        let pinned = loyal_to(owner).apply(whoami);

        prop_assert_eq!(pinned.apply(Some(&stranger), &[]), Ok(Some(owner)));
        prop_assert_eq!(pinned.call(&[]), Ok(Some(owner)));
    }
}
