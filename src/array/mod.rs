//! Array Adapter - low-level sequence utilities.
//!
//! Every other module builds its argument lists with the helpers in this
//! module. The "array-like" role is an explicit capability contract,
//! [`ArrayLike`]: any ordered, indexable, length-bearing container can play
//! it, whether it is a slice, a `Vec`, a fixed-size array, a `VecDeque` or an
//! inline `SmallVec` argument buffer.
//!
//! # Examples
//!
//! ```rust
//! use fntoolbox::array::{slice, to_array};
//!
//! let captured = [1, 2, 3, 4];
//! let copy = to_array(&captured);
//! assert_eq!(copy, vec![1, 2, 3, 4]);
//!
//! assert_eq!(slice(&copy, 1, 3), vec![2, 3]);
//! assert!(slice(&copy, 3, 1).is_empty());
//! ```

use std::collections::VecDeque;

use smallvec::SmallVec;

/// An ordered, indexable, length-bearing container.
///
/// # Laws
///
/// - `array.item(index)` is `Some` exactly when `index < array.length()`
/// - Items are reported in a stable order between two mutations
pub trait ArrayLike {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns the element at `index`, or `None` when out of range.
    fn item(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if the container holds no element.
    fn is_empty_array(&self) -> bool {
        self.length() == 0
    }
}

impl<T> ArrayLike for [T] {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> ArrayLike for [T; N] {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        N
    }

    #[inline]
    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> ArrayLike for Vec<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> ArrayLike for VecDeque<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> ArrayLike for SmallVec<[T; N]> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

/// Inline capacity of the per-call argument buffers built by the combinators.
pub(crate) const INLINE_ARGUMENTS: usize = 8;

/// Per-call argument buffer; stays on the stack for short argument lists.
pub(crate) type ArgumentBuffer<A> = SmallVec<[A; INLINE_ARGUMENTS]>;

/// Copies an array-like container into a new, independent `Vec`.
///
/// The result never aliases the input: mutating one does not affect the
/// other. Also usable as a defensive copy of a real `Vec`.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use fntoolbox::array::to_array;
///
/// let queue: VecDeque<char> = "abc".chars().collect();
/// assert_eq!(to_array(&queue), vec!['a', 'b', 'c']);
/// ```
pub fn to_array<L>(array_like: &L) -> Vec<L::Item>
where
    L: ArrayLike + ?Sized,
    L::Item: Clone,
{
    (0..array_like.length())
        .filter_map(|index| array_like.item(index).cloned())
        .collect()
}

/// Copies the elements in `[start, end)` into a new `Vec`.
///
/// Returns an empty `Vec` when `start >= end` or when `end` lies past the
/// end of the container. Never panics.
///
/// # Examples
///
/// ```rust
/// use fntoolbox::array::slice;
///
/// let values = vec![10, 20, 30, 40];
/// assert_eq!(slice(&values, 1, 3), vec![20, 30]);
/// assert_eq!(slice(&values, 2, 9), Vec::<i32>::new());
/// ```
pub fn slice<L>(sequence: &L, start: usize, end: usize) -> Vec<L::Item>
where
    L: ArrayLike + ?Sized,
    L::Item: Clone,
{
    if start >= end || end > sequence.length() {
        return Vec::new();
    }
    (start..end)
        .filter_map(|index| sequence.item(index).cloned())
        .collect()
}

/// Borrowing counterpart of [`slice`] over a plain slice.
///
/// Returns an empty slice under the same conditions as [`slice`].
#[inline]
pub(crate) fn slice_view<T>(sequence: &[T], start: usize, end: usize) -> &[T] {
    if start >= end {
        return &[];
    }
    sequence.get(start..end).unwrap_or(&[])
}

/// Curried iteration over an array-like container.
///
/// `for_each(&items).each(|item, index| ...)` runs the body once per
/// element, in order, with the element and its index.
///
/// # Examples
///
/// ```rust
/// use fntoolbox::array::for_each;
///
/// let mut seen = Vec::new();
/// for_each(&["a", "b"]).each(|item, index| seen.push(format!("{index}:{item}")));
/// assert_eq!(seen, vec!["0:a", "1:b"]);
/// ```
pub const fn for_each<L>(array_like: &L) -> ForEach<'_, L>
where
    L: ArrayLike + ?Sized,
{
    ForEach { array_like }
}

/// The consumer returned by [`for_each`].
pub struct ForEach<'a, L: ?Sized> {
    array_like: &'a L,
}

impl<L> ForEach<'_, L>
where
    L: ArrayLike + ?Sized,
{
    /// Runs `body` for every element with `(item, index)`.
    pub fn each<F>(&self, mut body: F)
    where
        F: FnMut(&L::Item, usize),
    {
        let length = self.array_like.length();
        for index in 0..length {
            if let Some(item) = self.array_like.item(index) {
                body(item, index);
            }
        }
    }
}

/// Curried iteration over the named members of a record.
///
/// A record is any container whose shared reference iterates `(name, value)`
/// pairs, such as a `BTreeMap<&str, V>` or a `HashMap<String, V>`. Members
/// are visited in the record's own iteration order.
///
/// Records carry no notion of function-valued or inherited members, so the
/// filtering of those is left to an explicit predicate passed to
/// [`ForProperty::each_accepted`].
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use fntoolbox::array::for_property;
///
/// let record = BTreeMap::from([("name", 1), ("size", 2), ("zone", 3)]);
///
/// let mut names = Vec::new();
/// for_property(&record).each(|name, _| names.push(name.to_string()));
/// assert_eq!(names, vec!["name", "size", "zone"]);
///
/// let mut large = Vec::new();
/// for_property(&record).each_accepted(
///     |_, value: &i32| *value > 1,
///     |name, value: &i32| large.push((name.len(), *value)),
/// );
/// assert_eq!(large, vec![(4, 2), (4, 3)]);
/// ```
pub const fn for_property<M>(record: &M) -> ForProperty<'_, M>
where
    M: ?Sized,
{
    ForProperty { record }
}

/// The consumer returned by [`for_property`].
pub struct ForProperty<'a, M: ?Sized> {
    record: &'a M,
}

impl<'a, M, K, V> ForProperty<'a, M>
where
    M: ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: AsRef<str> + ?Sized + 'a,
    V: 'a,
{
    /// Runs `body` for every member with `(name, value)`.
    pub fn each<F>(&self, body: F)
    where
        F: FnMut(&str, &V),
    {
        self.each_accepted(|_, _| true, body);
    }

    /// Runs `body` for every member that `accept` lets through.
    pub fn each_accepted<P, F>(&self, mut accept: P, mut body: F)
    where
        P: FnMut(&str, &V) -> bool,
        F: FnMut(&str, &V),
    {
        for (name, value) in self.record {
            let name = name.as_ref();
            if accept(name, value) {
                body(name, value);
            }
        }
    }
}
