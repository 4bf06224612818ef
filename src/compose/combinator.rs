//! The composition combinator.
//!
//! [`compose`] fixes a *final function*; [`Composition::of`] fans every call
//! out to a list of *component functions* and feeds their results, in order,
//! to the final function.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::array::ArgumentBuffer;
use crate::function::{Function, identity};

/// A final function waiting for its component functions.
///
/// # Examples
///
/// ```rust
/// use fntoolbox::compose::compose;
/// use fntoolbox::function::Function;
///
/// let sum: Function<i32, i32> = Function::total(|arguments| arguments.iter().sum());
/// let double: Function<i32, i32> = Function::total(|arguments| arguments[0] * 2);
/// let square: Function<i32, i32> = Function::total(|arguments| arguments[0] * arguments[0]);
///
/// let combined = compose(sum).of([double, square]).into_function();
/// assert_eq!(combined.call(&[3]), Ok(15));
/// ```
pub struct Composition<A, T, R = (), E = std::convert::Infallible>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    final_function: Function<A, T, R, E>,
}

/// Starts a composition around `final_function`.
pub const fn compose<A, T, R, E>(final_function: Function<A, T, R, E>) -> Composition<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    Composition { final_function }
}

/// Starts a composition around the identity function.
///
/// Composing side-effecting components onto it yields a function that passes
/// the first component's result through.
pub fn compose_identity<A, R, E>() -> Composition<A, Option<A>, R, E>
where
    A: Clone + 'static,
    R: 'static,
    E: 'static,
{
    compose(identity())
}

impl<A, T, R, E> Composition<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    /// Composes the current final function with `components`.
    ///
    /// Each component receives the entire argument list of the outer call and
    /// an absent receiver. The final function receives the component results
    /// in order, together with the outer call's receiver. Components run left
    /// to right; the first fault stops the chain and is returned unchanged.
    ///
    /// An empty `components` list leaves the composition unchanged. The result
    /// is itself composable: the built function becomes the next final
    /// function.
    #[must_use]
    pub fn of<I>(self, components: I) -> Self
    where
        I: IntoIterator<Item = Function<A, A, R, E>>,
    {
        let components: Rc<[Function<A, A, R, E>]> = components.into_iter().collect();
        if components.is_empty() {
            return self;
        }
        let final_function = self.final_function;
        compose(Function::new(move |receiver, arguments| {
            let mut results: ArgumentBuffer<A> = SmallVec::with_capacity(components.len());
            for component in components.iter() {
                results.push(component.call(arguments)?);
            }
            final_function.apply(receiver, &results)
        }))
    }

    /// Composes the current final function with a single component.
    #[must_use]
    pub fn with(self, component: Function<A, A, R, E>) -> Self {
        self.of([component])
    }

    /// Finishes the composition and returns the built function.
    ///
    /// Without any prior [`Composition::of`], this is the very final function
    /// the composition started from.
    pub fn into_function(self) -> Function<A, T, R, E> {
        self.final_function
    }
}

impl<A, T, R, E> From<Function<A, T, R, E>> for Composition<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    fn from(final_function: Function<A, T, R, E>) -> Self {
        compose(final_function)
    }
}

impl<A, T, R, E> Clone for Composition<A, T, R, E>
where
    A: 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            final_function: self.final_function.clone(),
        }
    }
}
