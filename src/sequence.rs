//! The contract shared by every list engine

use alloc::vec::Vec;

/// Returned when a mutation names a position the list does not have.
///
/// The list is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} out of range for sequence of length {len}")]
pub struct IndexError {
    /// the rejected position
    pub index: usize,
    /// length of the list when the call was made
    pub len: usize,
}

/// An ordered, mutable sequence of values.
///
/// Implemented by [`SinglyLinkedList`](crate::SinglyLinkedList) and
/// [`DoublyLinkedList`](crate::DoublyLinkedList). An index is valid iff
/// `index < len()`; reads at an invalid index return `None` and mutations are
/// rejected without touching the list.
pub trait Sequence<T> {
    /// Appends `elements` to the back of the list, in order.
    fn add<I: IntoIterator<Item = T>>(&mut self, elements: I);

    /// Same as [`add`](Sequence::add).
    fn append<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.add(elements)
    }

    /// Inserts `elements` at the front, keeping their order as the new prefix.
    ///
    /// Prepending `[a, b]` to `[c, d]` gives `[a, b, c, d]`.
    fn prepend<I: IntoIterator<Item = T>>(&mut self, elements: I);

    /// Returns the first element, or `None` if the list is empty.
    fn get_first(&self) -> Option<&T>;

    /// Returns the last element, or `None` if the list is empty.
    fn get_last(&self) -> Option<&T>;

    /// Returns the element at `index`, or `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<&T>;

    /// Overwrites the element at `index`.
    fn set(&mut self, index: usize, value: T) -> Result<(), IndexError>;

    /// Inserts `elements`, in order, at `index`.
    ///
    /// * an empty list accepts `index == 0` and behaves like [`add`](Sequence::add)
    /// * `index == 0` behaves like [`prepend`](Sequence::prepend)
    /// * `index == len() - 1` appends after the last element, it does not
    ///   insert in front of it
    /// * any other valid index splices the elements between `index - 1` and
    ///   `index`
    ///
    /// Every other index is rejected.
    fn insert<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        elements: I,
    ) -> Result<(), IndexError>;

    /// Removes and returns the first element.
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the last element.
    fn remove_last(&mut self) -> Option<T>;

    /// Removes and returns the element at `index`, or `None` if `index >= len()`.
    fn remove(&mut self, index: usize) -> Option<T>;

    /// Returns true if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements in the list.
    fn len(&self) -> usize;

    /// Removes every element.
    fn clear(&mut self);

    /// Copies the elements, front to back, into a new `Vec`.
    ///
    /// The returned vector does not observe later mutations.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;

    /// Reverses the order of the elements in place.
    fn reverse(&mut self);
}
