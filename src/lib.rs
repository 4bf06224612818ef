//! # fntoolbox
//!
//! Small functional-programming helpers for building functions out of other
//! functions, plus a bounded first-in-first-out queue.
//!
//! ## Overview
//!
//! - **Array Adapter**: copy and slice any array-like container
//! - **Function values**: shared closures with an explicit, optional receiver
//! - **Decoration**: wrap a function with an "around" behavior (`timed`, `loyal_to`)
//! - **Composition**: fan an argument list out to components, feed a final function
//! - **Argument shapes**: convert between variadic and sequence-consuming functions
//! - **Injectable bodies**: merge dependency-injected bodies into one sequential body
//! - **Queues**: plain and bounded FIFO queues
//! - **Registry**: namespaced exports that refuse silent redefinition
//!
//! All combinators are synchronous: every wrapped function runs to completion
//! on the caller's stack before the wrapper returns.
//!
//! ## Feature Flags
//!
//! - `decorate`: Decoration engine
//! - `compose`: Composition combinator
//! - `adapt`: Argument-shape adapter
//! - `inject`: Injectable-body merger
//! - `queue`: FIFO queues
//! - `registry`: Namespaced registry
//! - `serde`: Serialization of configuration and queue types
//! - `json`: `serde_json::Value` as a sequence-capable argument type
//! - `fxhash`: `FxHashMap` storage for the registry
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fntoolbox::prelude::*;
//!
//! let sum: Function<i32, i32> = Function::total(|arguments| arguments[0] + arguments[1]);
//! let double: Function<i32, i32> = Function::total(|arguments| 2 * arguments[0]);
//! let square: Function<i32, i32> = Function::total(|arguments| arguments[0] * arguments[0]);
//!
//! let combined = compose(sum).of([double, square]).into_function();
//! assert_eq!(combined.call(&[3]), Ok(15));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use fntoolbox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::array::*;
    pub use crate::function::*;

    #[cfg(feature = "decorate")]
    pub use crate::decorate::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "adapt")]
    pub use crate::adapt::*;

    #[cfg(feature = "inject")]
    pub use crate::inject::*;

    #[cfg(feature = "queue")]
    pub use crate::queue::*;

    #[cfg(feature = "registry")]
    pub use crate::registry::*;
}

pub mod array;

pub mod function;

#[cfg(feature = "decorate")]
pub mod decorate;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "adapt")]
pub mod adapt;

#[cfg(feature = "inject")]
pub mod inject;

#[cfg(feature = "queue")]
pub mod queue;

#[cfg(feature = "registry")]
pub mod registry;
