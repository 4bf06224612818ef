//! First-class function values with an explicit receiver.
//!
//! A [`Function`] is a shared, immutable closure of arbitrary arity. Instead
//! of relying on an implicit call-time binding for "the object the function
//! was called on", every call threads an explicit, optional receiver:
//!
//! ```text
//! Function<A, T, R, E>  ~  (Option<&R>, &[A]) -> Result<T, E>
//! ```
//!
//! - `A`: the argument type (the arity is the length observed at call time)
//! - `T`: the result type
//! - `R`: the receiver type (defaults to `()`)
//! - `E`: the fault type (defaults to [`Infallible`])
//!
//! Faults are ordinary `Err` values. Nothing in this crate catches, maps or
//! retries them, so the caller of a composed or decorated function observes
//! the very error value raised by the wrapped function.
//!
//! `Function` is reference counted with [`Rc`] and therefore neither `Send`
//! nor `Sync`: all combinators run to completion on the caller's stack.
//!
//! # Examples
//!
//! ```rust
//! use fntoolbox::function::Function;
//!
//! let sum: Function<i32, i32> = Function::total(|arguments| arguments.iter().sum());
//! assert_eq!(sum.call(&[1, 2, 3]), Ok(6));
//!
//! struct Counter {
//!     step: i32,
//! }
//!
//! let advance: Function<i32, i32, Counter> = Function::new(|receiver, arguments| {
//!     Ok(arguments[0] + receiver.map_or(1, |counter: &Counter| counter.step))
//! });
//! assert_eq!(advance.apply(Some(&Counter { step: 10 }), &[5]), Ok(15));
//! assert_eq!(advance.call(&[5]), Ok(6));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

type Closure<A, T, R, E> = dyn Fn(Option<&R>, &[A]) -> Result<T, E>;

/// A shared closure over an explicit receiver and an argument list.
///
/// Cloning a `Function` shares the underlying closure; [`Function::ptr_eq`]
/// is the only notion of identity.
pub struct Function<A, T, R = (), E = Infallible>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    closure: Rc<Closure<A, T, R, E>>,
}

impl<A, T, R, E> Function<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    /// Creates a function that sees the call receiver.
    pub fn new<F>(closure: F) -> Self
    where
        F: Fn(Option<&R>, &[A]) -> Result<T, E> + 'static,
    {
        Self {
            closure: Rc::new(closure),
        }
    }

    /// Creates a function that ignores the call receiver.
    pub fn unbound<F>(closure: F) -> Self
    where
        F: Fn(&[A]) -> Result<T, E> + 'static,
    {
        Self::new(move |_, arguments| closure(arguments))
    }

    /// Creates a function that ignores the receiver and never faults.
    pub fn total<F>(closure: F) -> Self
    where
        F: Fn(&[A]) -> T + 'static,
    {
        Self::new(move |_, arguments| Ok(closure(arguments)))
    }

    /// Invokes the function with the given receiver and arguments.
    #[inline]
    pub fn apply(&self, receiver: Option<&R>, arguments: &[A]) -> Result<T, E> {
        (self.closure)(receiver, arguments)
    }

    /// Invokes the function with an absent receiver.
    #[inline]
    pub fn call(&self, arguments: &[A]) -> Result<T, E> {
        self.apply(None, arguments)
    }

    /// Returns `true` if both values share the same closure.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.closure, &other.closure)
    }

    /// Post-processes every successful result with `transform`.
    pub fn map<U, G>(self, transform: G) -> Function<A, U, R, E>
    where
        U: 'static,
        G: Fn(T) -> U + 'static,
    {
        Function::new(move |receiver, arguments| self.apply(receiver, arguments).map(&transform))
    }
}

impl<A, T, R, E> Clone for Function<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            closure: Rc::clone(&self.closure),
        }
    }
}

impl<A, T, R, E> fmt::Debug for Function<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("closure", &Rc::as_ptr(&self.closure).cast::<()>())
            .finish()
    }
}

static_assertions::assert_not_impl_any!(Function<i32, i32>: Send, Sync);

/// The identity function over argument lists.
///
/// Returns the first argument unchanged, or `None` when called without
/// arguments. Used as the terminal case of argument-less composition.
///
/// # Examples
///
/// ```rust
/// use fntoolbox::function::{Function, identity};
///
/// let pass_through: Function<&str, Option<&str>> = identity();
/// assert_eq!(pass_through.call(&["kept", "dropped"]), Ok(Some("kept")));
/// assert_eq!(pass_through.call(&[]), Ok(None));
/// ```
pub fn identity<A, R, E>() -> Function<A, Option<A>, R, E>
where
    A: Clone + 'static,
    R: 'static,
    E: 'static,
{
    Function::new(|_, arguments: &[A]| Ok(arguments.first().cloned()))
}
