//! Decoration Engine - wrapping a function with an "around" behavior.
//!
//! A decoration wraps one *initial function* with a *behavior*. At call time
//! the behavior receives a [`Proceed`] continuation together with the
//! argument list, and decides:
//!
//! - whether the initial function runs at all ([`Proceed::invoke`]),
//! - with which receiver it runs ([`Proceed::invoke_with`]),
//! - whether its result is overridden (by returning `Ok(Some(value))`).
//!
//! Returning `Ok(None)` from the behavior means "no override": the decorated
//! call yields whatever the continuation last stored, or `None` when the
//! continuation never ran. A fault from the initial function or from the
//! behavior itself propagates unchanged through the decorated call.
//!
//! # Laws
//!
//! - **Identity**: a behavior that invokes the continuation once and returns
//!   `None` yields a function equivalent to the initial one (wrapped in `Some`)
//! - **Override**: a behavior that never invokes the continuation and always
//!   returns `Some(k)` yields `k` without running the initial function
//! - **Pinning**: `loyal_to(owner)` always runs the initial function with
//!   `owner` as receiver
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use fntoolbox::decorate::{Decoration, decorate};
//! use fntoolbox::function::Function;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let counting: Decoration<i32, i32> = decorate(move |proceed, _arguments| {
//!     counter.set(counter.get() + 1);
//!     proceed.invoke()?;
//!     Ok(None)
//! });
//!
//! let square: Function<i32, i32> = Function::total(|arguments| arguments[0] * arguments[0]);
//! let counted_square = counting.apply(square);
//!
//! assert_eq!(counted_square.call(&[7]), Ok(Some(49)));
//! assert_eq!(calls.get(), 1);
//! ```

use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::function::Function;

type BehaviorFn<A, T, R, E> = dyn Fn(&mut Proceed<'_, A, T, R, E>, &[A]) -> Result<Option<T>, E>;

/// The continuation handed to a behavior.
///
/// Each invocation runs the wrapped function once and stores its result,
/// replacing any previously stored one. Behaviors are expected to invoke it
/// zero or one times; repeated invocation re-runs the wrapped function.
pub struct Proceed<'call, A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    initial: &'call Function<A, Option<T>, R, E>,
    receiver: Option<&'call R>,
    arguments: &'call [A],
    result: Option<T>,
}

impl<A, T, R, E> Proceed<'_, A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    /// Runs the wrapped function with the receiver of the outer call.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's fault unchanged.
    pub fn invoke(&mut self) -> Result<Option<&T>, E> {
        self.result = self.initial.apply(self.receiver, self.arguments)?;
        Ok(self.result.as_ref())
    }

    /// Runs the wrapped function with `receiver` in place of the outer one.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's fault unchanged.
    pub fn invoke_with(&mut self, receiver: &R) -> Result<Option<&T>, E> {
        self.result = self.initial.apply(Some(receiver), self.arguments)?;
        Ok(self.result.as_ref())
    }

    /// The result stored by the last invocation, if any.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// The receiver of the outer call.
    pub const fn receiver(&self) -> Option<&R> {
        self.receiver
    }
}

/// A reusable set of behaviors that can be applied to many functions.
///
/// Behaviors are stored outermost first: the first behavior sees the call
/// before any other and its continuation leads to the second one.
pub struct Decoration<A, T, R = (), E = std::convert::Infallible>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    behaviors: Vec<Rc<BehaviorFn<A, T, R, E>>>,
}

/// Creates a decoration from one behavior.
///
/// The behavior receives the continuation and the argument list of the outer
/// call and returns `Ok(Some(value))` to override the result, or `Ok(None)`
/// to keep whatever the continuation stored.
pub fn decorate<A, T, R, E, B>(behavior: B) -> Decoration<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
    B: Fn(&mut Proceed<'_, A, T, R, E>, &[A]) -> Result<Option<T>, E> + 'static,
{
    let behavior: Rc<BehaviorFn<A, T, R, E>> = Rc::new(behavior);
    Decoration {
        behaviors: vec![behavior],
    }
}

/// Stacks several decorations into one; the first one is outermost.
///
/// An empty input yields [`Decoration::identity`].
pub fn decorate_all<A, T, R, E, I>(decorations: I) -> Decoration<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
    I: IntoIterator<Item = Decoration<A, T, R, E>>,
{
    decorations
        .into_iter()
        .fold(Decoration::identity(), Decoration::then)
}

impl<A, T, R, E> Decoration<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    /// The decoration that leaves functions unchanged.
    pub const fn identity() -> Self {
        Self {
            behaviors: Vec::new(),
        }
    }

    /// Appends `inner` so that it runs inside the behaviors of `self`.
    #[must_use]
    pub fn then(mut self, inner: Self) -> Self {
        self.behaviors.extend(inner.behaviors);
        self
    }

    /// Number of stacked behaviors.
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Returns `true` for the identity decoration.
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Decorates a plain function.
    pub fn apply(&self, initial: Function<A, T, R, E>) -> Decorated<A, T, R, E> {
        self.apply_decorated(Decorated::lift(initial))
    }

    /// Decorates an already decorated function, without nesting results.
    pub fn apply_decorated(&self, initial: Decorated<A, T, R, E>) -> Decorated<A, T, R, E> {
        let function = self
            .behaviors
            .iter()
            .rev()
            .fold(initial.function, |inner, behavior| {
                wrap(Rc::clone(behavior), inner)
            });
        Decorated { function }
    }
}

impl<A, T, R, E> Clone for Decoration<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            behaviors: self.behaviors.clone(),
        }
    }
}

impl<A, T, R, E> Default for Decoration<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    fn default() -> Self {
        Self::identity()
    }
}

fn wrap<A, T, R, E>(
    behavior: Rc<BehaviorFn<A, T, R, E>>,
    inner: Function<A, Option<T>, R, E>,
) -> Function<A, Option<T>, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    Function::new(move |receiver, arguments| {
        let mut proceed = Proceed {
            initial: &inner,
            receiver,
            arguments,
            result: None,
        };
        let overridden = behavior(&mut proceed, arguments)?;
        Ok(overridden.or(proceed.result))
    })
}

/// A function produced by a [`Decoration`].
///
/// Its result is `None` when the behaviors neither ran the initial function
/// nor overrode the result.
pub struct Decorated<A, T, R = (), E = std::convert::Infallible>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    function: Function<A, Option<T>, R, E>,
}

impl<A, T, R, E> Decorated<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    /// Lifts a plain function without adding any behavior.
    pub fn lift(function: Function<A, T, R, E>) -> Self {
        Self {
            function: function.map(Some),
        }
    }

    /// Invokes the decorated function with an explicit receiver.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised by a behavior or the initial function.
    pub fn apply(&self, receiver: Option<&R>, arguments: &[A]) -> Result<Option<T>, E> {
        self.function.apply(receiver, arguments)
    }

    /// Invokes the decorated function with an absent receiver.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised by a behavior or the initial function.
    pub fn call(&self, arguments: &[A]) -> Result<Option<T>, E> {
        self.function.call(arguments)
    }

    /// Applies a further decoration on top of this one.
    #[must_use]
    pub fn decorate(self, decoration: &Decoration<A, T, R, E>) -> Self {
        decoration.apply_decorated(self)
    }

    /// The underlying function value.
    pub fn into_function(self) -> Function<A, Option<T>, R, E> {
        self.function
    }
}

impl<A, T, R, E> Clone for Decorated<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
        }
    }
}

/// Times every call of `function` and reports the duration to the log.
///
/// The duration is emitted with `tracing::info!`. The result is never
/// overridden.
pub fn timed<A, T, R, E>(function: Function<A, T, R, E>) -> Decorated<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    timed_with(function, |duration| {
        tracing::info!(
            elapsed_ms = duration.as_secs_f64() * 1000.0,
            "Elapsed time : {} ms.",
            duration.as_millis()
        );
    })
}

/// Times every call of `function` and hands the duration to `on_duration`.
///
/// The continuation is invoked exactly once per call. When the function
/// faults, the fault propagates and no duration is reported.
pub fn timed_with<A, T, R, E, F>(function: Function<A, T, R, E>, on_duration: F) -> Decorated<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
    F: Fn(Duration) + 'static,
{
    decorate(move |proceed: &mut Proceed<'_, A, T, R, E>, _| {
        let start = Instant::now();
        proceed.invoke()?;
        on_duration(start.elapsed());
        Ok(None)
    })
    .apply(function)
}

/// A decoration that always runs the function with `owner` as receiver.
///
/// Useful to detach a method from its owner while keeping the receiver the
/// method relies on.
///
/// # Examples
///
/// ```rust
/// use fntoolbox::decorate::loyal_to;
/// use fntoolbox::function::Function;
///
/// struct Greeter {
///     name: &'static str,
/// }
///
/// let greet: Function<&str, String, Greeter> = Function::new(|receiver: Option<&Greeter>, arguments: &[&str]| {
///     Ok(format!("{}, {}", arguments[0], receiver.map_or("nobody", |greeter: &Greeter| greeter.name)))
/// });
///
/// let detached = loyal_to(Greeter { name: "Ada" }).apply(greet);
/// let stranger = Greeter { name: "Bob" };
/// assert_eq!(detached.apply(Some(&stranger), &["hello"]), Ok(Some("hello, Ada".to_string())));
/// ```
pub fn loyal_to<A, T, R, E>(owner: impl Into<Rc<R>>) -> Decoration<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    let owner: Rc<R> = owner.into();
    decorate(move |proceed: &mut Proceed<'_, A, T, R, E>, _| {
        proceed.invoke_with(&owner)?;
        Ok(None)
    })
}
