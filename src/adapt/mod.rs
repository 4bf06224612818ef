//! Argument-Shape Adapter - between variadic and array-consuming functions.
//!
//! [`adapt`] turns a function that expects a *head / middle sequence / tail*
//! argument layout into a flat variadic one: the call's leading
//! [`Shape::starting`] arguments and trailing [`Shape::trailing`] arguments are
//! passed positionally, and everything in between is collected into one
//! sequence argument. Without a shape, every argument is collected.
//!
//! [`spread`] goes the other way: it accepts the middle block as a single
//! sequence argument and splices its items into a flat argument list.
//!
//! Sequences are built and read through the [`Sequence`] capability of the
//! argument type. With the `json` feature, `serde_json::Value` provides it.
//!
//! # Examples
//!
//! ```rust
//! use fntoolbox::adapt::{Sequence, Shape, adapt};
//! use fntoolbox::function::Function;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Arg {
//!     Word(&'static str),
//!     List(Vec<Arg>),
//! }
//!
//! impl Sequence for Arg {
//!     fn from_sequence(items: Vec<Self>) -> Self {
//!         Self::List(items)
//!     }
//!
//!     fn as_sequence(&self) -> Option<&[Self]> {
//!         match self {
//!             Self::List(items) => Some(items),
//!             Self::Word(_) => None,
//!         }
//!     }
//! }
//!
//! let echo: Function<Arg, Vec<Arg>> = Function::total(|arguments| arguments.to_vec());
//! let adapted = adapt(echo, Some(Shape::new(1, 1)));
//!
//! let result = adapted.call(&[Arg::Word("a"), Arg::Word("m1"), Arg::Word("m2"), Arg::Word("b")]);
//! assert_eq!(
//!     result,
//!     Ok(vec![
//!         Arg::Word("a"),
//!         Arg::List(vec![Arg::Word("m1"), Arg::Word("m2")]),
//!         Arg::Word("b"),
//!     ])
//! );
//! ```

use crate::array::ArgumentBuffer;
use crate::function::Function;

/// How many positional arguments surround the collected middle block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Shape {
    /// Leading arguments passed positionally.
    pub starting: usize,
    /// Trailing arguments passed positionally.
    pub trailing: usize,
}

impl Shape {
    /// Creates a shape with the given head and tail lengths.
    pub const fn new(starting: usize, trailing: usize) -> Self {
        Self { starting, trailing }
    }

    /// Splits an argument count into `(head_end, tail_start)`.
    ///
    /// The head is `[0, head_end)`, the middle `[head_end, tail_start)` and
    /// the tail `[tail_start, length)`. When `starting + trailing` exceeds
    /// `length` the middle is empty; the head is served first.
    pub const fn split(&self, length: usize) -> (usize, usize) {
        let head_end = if self.starting < length {
            self.starting
        } else {
            length
        };
        let tail_candidate = length.saturating_sub(self.trailing);
        let tail_start = if tail_candidate > head_end {
            tail_candidate
        } else {
            head_end
        };
        (head_end, tail_start)
    }
}

/// Argument types that can carry a whole sequence of arguments as one value.
///
/// # Laws
///
/// - `Self::from_sequence(items).as_sequence() == Some(&items)`
pub trait Sequence: Sized {
    /// Packs `items` into a single argument.
    fn from_sequence(items: Vec<Self>) -> Self;

    /// Views this argument as a sequence, if it is one.
    fn as_sequence(&self) -> Option<&[Self]>;
}

#[cfg(feature = "json")]
impl Sequence for serde_json::Value {
    fn from_sequence(items: Vec<Self>) -> Self {
        Self::Array(items)
    }

    fn as_sequence(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }
}

/// Turns a sequence-consuming function into a variadic one.
///
/// - `shape == None`: `target` receives one argument, the sequence of all
///   call arguments.
/// - `shape == Some(shape)`: `target` receives the head arguments, one
///   sequence holding the middle arguments, then the tail arguments.
///
/// The call receiver is forwarded unchanged. Short argument lists never fail:
/// the middle sequence is simply empty.
pub fn adapt<A, T, R, E>(target: Function<A, T, R, E>, shape: Option<Shape>) -> Function<A, T, R, E>
where
    A: Sequence + Clone + 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    match shape {
        None => Function::new(move |receiver, arguments: &[A]| {
            target.apply(receiver, &[A::from_sequence(arguments.to_vec())])
        }),
        Some(shape) => Function::new(move |receiver, arguments: &[A]| {
            let (head_end, tail_start) = shape.split(arguments.len());
            let mut reshaped: ArgumentBuffer<A> = ArgumentBuffer::with_capacity(
                head_end + 1 + (arguments.len() - tail_start),
            );
            reshaped.extend(arguments[..head_end].iter().cloned());
            reshaped.push(A::from_sequence(arguments[head_end..tail_start].to_vec()));
            reshaped.extend(arguments[tail_start..].iter().cloned());
            target.apply(receiver, &reshaped)
        }),
    }
}

/// Turns a variadic function into one taking its middle block as a sequence.
///
/// The argument at index `starting` is expected to be a sequence; its items
/// are spliced in its place. An argument that is not a sequence is passed
/// through as a single item, and a call with no argument at that index is
/// forwarded unchanged.
pub fn spread<A, T, R, E>(target: Function<A, T, R, E>, starting: usize) -> Function<A, T, R, E>
where
    A: Sequence + Clone + 'static,
    T: 'static,
    R: 'static,
    E: 'static,
{
    Function::new(move |receiver, arguments: &[A]| {
        let Some(middle) = arguments.get(starting) else {
            return target.apply(receiver, arguments);
        };
        let mut flattened: ArgumentBuffer<A> = ArgumentBuffer::with_capacity(arguments.len());
        flattened.extend(arguments[..starting].iter().cloned());
        match middle.as_sequence() {
            Some(items) => flattened.extend(items.iter().cloned()),
            None => flattened.push(middle.clone()),
        }
        flattened.extend(arguments[starting + 1..].iter().cloned());
        target.apply(receiver, &flattened)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    enum Arg {
        Int(i32),
        List(Vec<Arg>),
    }

    impl Sequence for Arg {
        fn from_sequence(items: Vec<Self>) -> Self {
            Self::List(items)
        }

        fn as_sequence(&self) -> Option<&[Self]> {
            match self {
                Self::List(items) => Some(items),
                Self::Int(_) => None,
            }
        }
    }

    fn ints(values: &[i32]) -> Vec<Arg> {
        values.iter().copied().map(Arg::Int).collect()
    }

    fn echo() -> Function<Arg, Vec<Arg>> {
        Function::total(|arguments| arguments.to_vec())
    }

    #[rstest]
    #[case(Shape::new(0, 0), 4, (0, 4))]
    #[case(Shape::new(1, 1), 5, (1, 4))]
    #[case(Shape::new(2, 2), 3, (2, 2))]
    #[case(Shape::new(5, 0), 3, (3, 3))]
    #[case(Shape::new(0, 5), 3, (0, 0))]
    fn split_never_overlaps(
        #[case] shape: Shape,
        #[case] length: usize,
        #[case] expected: (usize, usize),
    ) {
        assert_eq!(shape.split(length), expected);
    }

    #[rstest]
    fn without_shape_collects_everything() {
        let adapted = adapt(echo(), None);
        assert_eq!(adapted.call(&ints(&[1, 2])), Ok(vec![Arg::List(ints(&[1, 2]))]));
    }

    #[rstest]
    fn short_argument_list_yields_empty_middle() {
        let adapted = adapt(echo(), Some(Shape::new(2, 2)));
        let mut expected = ints(&[1, 2]);
        expected.push(Arg::List(Vec::new()));
        expected.push(Arg::Int(3));
        assert_eq!(adapted.call(&ints(&[1, 2, 3])), Ok(expected));
    }

    #[rstest]
    fn spread_splices_middle_sequence() {
        let spreaded = spread(echo(), 1);
        let call = vec![Arg::Int(0), Arg::List(ints(&[1, 2])), Arg::Int(3)];
        assert_eq!(spreaded.call(&call), Ok(ints(&[0, 1, 2, 3])));
    }

    #[rstest]
    fn spread_passes_scalar_middle_through() {
        let spreaded = spread(echo(), 0);
        assert_eq!(spreaded.call(&ints(&[7, 8])), Ok(ints(&[7, 8])));
        assert_eq!(spreaded.call(&[]), Ok(Vec::new()));
    }

    #[rstest]
    fn spread_undoes_adapt() {
        let round_trip = adapt(spread(echo(), 1), Some(Shape::new(1, 1)));
        assert_eq!(round_trip.call(&ints(&[1, 2, 3, 4])), Ok(ints(&[1, 2, 3, 4])));
    }
}
