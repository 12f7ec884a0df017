//! A reader/writer locked wrapper around any [`Sequence`]
//!
//! Every call takes the lock once, delegates to the wrapped list and releases
//! the lock before returning. Read-only calls share the lock, everything else
//! holds it exclusively. A sequence of calls is not atomic as a unit.
//!
//! The lock is a [`parking_lot::RwLock`], which is task-fair: once a writer is
//! waiting, new readers queue behind it, and contended locks are handed off
//! fairly from time to time. No FIFO order among waiters is promised.

use alloc::vec::Vec;

use core::fmt;
use core::marker::PhantomData;

use crossbeam_utils::CachePadded;
use parking_lot::RwLock;

use crate::s_list::LinkedList as SinglyLinkedList;
use crate::sequence::{IndexError, Sequence};

/// Thread safe list, `L` is the engine doing the actual work.
pub struct ConcurrentList<T, L = SinglyLinkedList<T>> {
    list: CachePadded<RwLock<L>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ConcurrentList<T> {
    /// Creates a new, empty list backed by a singly linked list.
    pub fn new() -> Self {
        Self::from_list(SinglyLinkedList::new())
    }
}

impl<T, L: Sequence<T> + Default> Default for ConcurrentList<T, L> {
    fn default() -> Self {
        Self::from_list(L::default())
    }
}

impl<T, L: Sequence<T>> ConcurrentList<T, L> {
    /// Wraps an existing list.
    pub fn from_list(list: L) -> Self {
        Self {
            list: CachePadded::new(RwLock::new(list)),
            _marker: PhantomData,
        }
    }

    /// Unwraps the list.
    pub fn into_inner(self) -> L {
        CachePadded::into_inner(self.list).into_inner()
    }

    /// Appends `elements` to the back of the list, in order.
    pub fn add<I: IntoIterator<Item = T>>(&self, elements: I) {
        self.list.write().add(elements)
    }

    /// Same as [`add`](Self::add).
    pub fn append<I: IntoIterator<Item = T>>(&self, elements: I) {
        self.list.write().append(elements)
    }

    /// Inserts `elements` at the front, keeping their order.
    pub fn prepend<I: IntoIterator<Item = T>>(&self, elements: I) {
        self.list.write().prepend(elements)
    }

    /// Returns a copy of the first element.
    pub fn get_first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.list.read().get_first().cloned()
    }

    /// Returns a copy of the last element.
    pub fn get_last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.list.read().get_last().cloned()
    }

    /// Returns a copy of the element at `index`.
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.list.read().get(index).cloned()
    }

    /// See [`Sequence::set`].
    pub fn set(&self, index: usize, value: T) -> Result<(), IndexError> {
        self.list.write().set(index, value)
    }

    /// See [`Sequence::insert`].
    pub fn insert<I: IntoIterator<Item = T>>(
        &self,
        index: usize,
        elements: I,
    ) -> Result<(), IndexError> {
        self.list.write().insert(index, elements)
    }

    pub fn remove_first(&self) -> Option<T> {
        self.list.write().remove_first()
    }

    pub fn remove_last(&self) -> Option<T> {
        self.list.write().remove_last()
    }

    pub fn remove(&self, index: usize) -> Option<T> {
        self.list.write().remove(index)
    }

    pub fn is_empty(&self) -> bool {
        self.list.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.read().len()
    }

    pub fn clear(&self) {
        self.list.write().clear()
    }

    /// Snapshot of the elements, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.read().to_vec()
    }

    pub fn reverse(&self) {
        self.list.write().reverse()
    }
}

impl<T, L: fmt::Debug> fmt::Debug for ConcurrentList<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentList")
            .field("list", &*self.list)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ConcurrentList;
    use crate::d_list::LinkedList as DoublyLinkedList;
    use crate::sequence::{IndexError, Sequence};
    use alloc::vec;

    #[test]
    fn test_default_engine() {
        let list = ConcurrentList::new();
        assert!(list.is_empty());
        list.add([1, 2, 3]);
        list.prepend([0]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.get_first(), Some(0));
        assert_eq!(list.get_last(), Some(3));
        assert_eq!(list.get(2), Some(2));
        assert_eq!(list.get(4), None);

        assert_eq!(list.set(4, 9), Err(IndexError { index: 4, len: 4 }));
        assert_eq!(list.set(1, 9), Ok(()));
        assert_eq!(list.insert(2, [7, 8]), Ok(()));
        assert_eq!(list.to_vec(), vec![0, 9, 7, 8, 2, 3]);

        assert_eq!(list.remove(1), Some(9));
        assert_eq!(list.remove_first(), Some(0));
        assert_eq!(list.remove_last(), Some(3));
        list.reverse();
        assert_eq!(list.to_vec(), vec![2, 8, 7]);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.remove_last(), None);
    }

    #[test]
    fn test_injected_engine() {
        let engine: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
        let list = ConcurrentList::from_list(engine);
        list.append([4]);
        assert_eq!(list.remove_last(), Some(4));

        let snapshot = list.to_vec();
        list.clear();
        assert_eq!(snapshot, vec![1, 2, 3]);

        let inner = list.into_inner();
        assert!(inner.is_empty());
    }

    #[test]
    fn test_debug() {
        let list: ConcurrentList<i32, DoublyLinkedList<i32>> = ConcurrentList::default();
        list.add([1, 2]);
        let debug = alloc::format!("{:?}", list);
        assert!(debug.starts_with("ConcurrentList"));
        assert!(debug.contains("[1, 2]"));
    }
}
