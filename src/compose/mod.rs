//! Composition Combinator - fan-out composition of functions of any arity.
//!
//! A composition fixes one *final function* and a list of *component
//! functions*. Calling the composed function with an argument list runs every
//! component on the whole list and hands the results, in component order, to
//! the final function:
//!
//! ```text
//! compose(f).of([g1, ..., gk])(args) = f(g1(args), ..., gk(args))
//! ```
//!
//! # Overview
//!
//! - [`compose`]: starts a composition around a final function
//! - [`compose_identity`]: starts a composition around the identity function
//! - [`Composition::of`]: adds one stage of components
//! - [`Composition::into_function`]: finishes the composition
//! - [`compose!`](crate::compose!): the same, in a single expression
//!
//! # Laws
//!
//! - **Identity base case**: `compose(f).into_function()` is `f` itself
//! - **Arity**: the final function receives exactly one argument per component
//! - **Fault propagation**: the first failing component stops the chain; later
//!   components do not run and the fault reaches the caller unchanged
//!
//! # Chaining
//!
//! Each stage wraps the function built so far as the next final function, so
//! `compose(f).of([g]).of([h])` computes `f(g(h(args)))` while
//! `compose(f).of([g, h])` computes `f(g(args), h(args))`.
//!
//! Chaining stages is therefore not interchangeable with listing the same
//! components in one stage: with `f = sum`, `g = double` and `h = square`,
//! `compose(f).of([g]).of([h])` maps `3` to `18` while
//! `compose(f).of([g, h])` maps it to `15`. Use a single stage to fan out.
//!
//! # Examples
//!
//! ```
//! use fntoolbox::compose::compose;
//! use fntoolbox::function::Function;
//!
//! let sum: Function<i32, i32> = Function::total(|arguments| arguments[0] + arguments[1]);
//! let double: Function<i32, i32> = Function::total(|arguments| 2 * arguments[0]);
//! let square: Function<i32, i32> = Function::total(|arguments| arguments[0] * arguments[0]);
//!
//! let combined = compose(sum).of([double, square]).into_function();
//! assert_eq!(combined.call(&[3]), Ok(6 + 9));
//! ```

mod combinator;
mod compose_macro;

pub use combinator::{Composition, compose, compose_identity};
