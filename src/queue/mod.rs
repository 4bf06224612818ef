//! First-in-first-out queues, plain and bounded.
//!
//! - [`Fifo`]: an unbounded FIFO backed by a `VecDeque`
//! - [`BoundedFifo`]: a [`Fifo`] whose insertion is decorated with an
//!   eviction rule: after every push, the oldest elements are discarded one at
//!   a time until the queue holds at most `max_size` elements
//!
//! Both implement [`Queue`], so callers can be generic over the variant.
//!
//! # Invariants
//!
//! - **FIFO order**: elements leave in insertion order
//! - **Bound**: after any completed push, `size() <= max_size`
//! - **Eviction order**: the longest-resident elements are evicted first
//!
//! Queues are mutated in place and hold no lock; sharing one across threads
//! of control requires external serialization.
//!
//! # Examples
//!
//! ```rust
//! use fntoolbox::queue::{Queue, make_bounded};
//!
//! let mut recent = make_bounded(3, []);
//! recent.push(1).push(2).push(3).push(4).push(5);
//! assert_eq!(recent.to_vec(), vec![3, 4, 5]);
//! assert_eq!(recent.size(), 3);
//! ```

use std::collections::VecDeque;
use std::collections::vec_deque;

/// Common interface of the FIFO queues.
pub trait Queue<T> {
    /// Appends `element` at the tail and returns the queue for chaining.
    fn push(&mut self, element: T) -> &mut Self;

    /// Removes and returns the head element; `None` when empty.
    fn pop(&mut self) -> Option<T>;

    /// Number of held elements.
    fn size(&self) -> usize;

    /// Returns `true` when no element is held.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// An ordered snapshot, head to tail.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

/// An unbounded first-in-first-out queue.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Fifo<T> {
    elements: VecDeque<T>,
}

impl<T> Fifo<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Returns the head element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    /// Iterates head to tail.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.elements.iter()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T> Queue<T> for Fifo<T> {
    fn push(&mut self, element: T) -> &mut Self {
        self.elements.push_back(element);
        self
    }

    fn pop(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.iter().cloned().collect()
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Fifo<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            elements: iterator.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Fifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        for element in iterator {
            self.push(element);
        }
    }
}

impl<T> IntoIterator for Fifo<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Fifo<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A capacity-limited FIFO that evicts its oldest elements on overflow.
///
/// The capacity is fixed at construction. A capacity of zero is legal: the
/// queue is empty after every push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedFifo<T> {
    fifo: Fifo<T>,
    max_size: usize,
}

/// Creates a bounded queue and pushes `initial` into it in order.
///
/// Eviction applies to the initial elements too, so only the last
/// `max_size` of them remain.
///
/// # Examples
///
/// ```rust
/// use fntoolbox::queue::{Queue, make_bounded};
///
/// let queue = make_bounded(2, [10, 20, 30]);
/// assert_eq!(queue.to_vec(), vec![20, 30]);
/// ```
pub fn make_bounded<T, I>(max_size: usize, initial: I) -> BoundedFifo<T>
where
    I: IntoIterator<Item = T>,
{
    let mut queue = BoundedFifo::new(max_size);
    queue.extend(initial);
    queue
}

impl<T> BoundedFifo<T> {
    /// Creates an empty queue holding at most `max_size` elements.
    pub const fn new(max_size: usize) -> Self {
        Self {
            fifo: Fifo::new(),
            max_size,
        }
    }

    /// The fixed capacity.
    pub const fn capacity(&self) -> usize {
        self.max_size
    }

    /// Returns the head element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.fifo.peek()
    }

    /// Iterates head to tail.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.fifo.iter()
    }

    fn evict_overflow(&mut self) {
        let mut evicted = 0_usize;
        while self.fifo.size() > self.max_size {
            if self.fifo.pop().is_none() {
                break;
            }
            evicted += 1;
        }
        if evicted > 0 {
            tracing::trace!(evicted, max_size = self.max_size, "evicted oldest queue elements");
        }
    }
}

impl<T> Queue<T> for BoundedFifo<T> {
    fn push(&mut self, element: T) -> &mut Self {
        self.fifo.push(element);
        self.evict_overflow();
        self
    }

    fn pop(&mut self) -> Option<T> {
        self.fifo.pop()
    }

    fn size(&self) -> usize {
        self.fifo.size()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.fifo.to_vec()
    }
}

impl<T> Extend<T> for BoundedFifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        for element in iterator {
            self.push(element);
        }
    }
}

impl<T> IntoIterator for BoundedFifo<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.fifo.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fifo_pops_in_insertion_order() {
        let mut queue = Fifo::new();
        queue.push('a').push('b').push('c');
        assert_eq!(queue.pop(), Some('a'));
        assert_eq!(queue.pop(), Some('b'));
        assert_eq!(queue.pop(), Some('c'));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[rstest]
    fn popping_empty_queue_is_a_no_op() {
        let mut queue: BoundedFifo<u8> = BoundedFifo::new(2);
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.size(), 0);
    }

    #[rstest]
    #[case(0, vec![1, 2, 3], vec![])]
    #[case(1, vec![1, 2, 3], vec![3])]
    #[case(3, vec![1, 2], vec![1, 2])]
    #[case(2, vec![10, 20, 30], vec![20, 30])]
    fn retroactive_eviction(
        #[case] max_size: usize,
        #[case] initial: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let queue = make_bounded(max_size, initial);
        assert_eq!(queue.to_vec(), expected);
        assert_eq!(queue.capacity(), max_size);
    }

    #[rstest]
    fn snapshot_is_defensive() {
        let mut queue = make_bounded(4, [1, 2]);
        let mut snapshot = queue.to_vec();
        snapshot.push(99);
        queue.push(3);
        assert_eq!(queue.to_vec(), vec![1, 2, 3]);
        assert_eq!(snapshot, vec![1, 2, 99]);
    }

    #[rstest]
    fn peek_sees_oldest_survivor() {
        let mut queue = make_bounded(2, ["x", "y"]);
        queue.push("z");
        assert_eq!(queue.peek(), Some(&"y"));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["y", "z"]);
    }
}
