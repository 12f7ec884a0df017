//! A doubly linked list

use alloc::boxed::Box;
use alloc::vec::Vec;

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::sequence::{IndexError, Sequence};

struct Node<T> {
    next: Option<NonNull<Node<T>>>,
    // back reference only, the predecessor owns us through its `next`
    prev: Option<NonNull<Node<T>>>,
    data: T,
}

impl<T> Node<T> {
    fn alloc(data: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            data,
        })))
    }

    /// Frees an unlinked node and hands back its value.
    ///
    /// # Safety
    /// `node` must come from [`Node::alloc`], must no longer be reachable from
    /// any list, and must not be used again.
    unsafe fn into_data(node: NonNull<Node<T>>) -> T {
        let mut node = Box::from_raw(node.as_ptr());
        node.next = None;
        node.prev = None;
        node.data
    }
}

/// Doubly linked list
///
/// Every node keeps a back reference to its predecessor, so both ends can be
/// removed in O(1) and positional lookups walk from the nearer end.
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list owns every node it links, nothing is shared with other lists
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: `&LinkedList<T>` only ever hands out `&T`
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            curr: self.head,
            remaining: self.len,
            _list: PhantomData,
        }
    }

    /// Returns the node at `index`, which must be `< self.len`.
    fn node_at(&self, index: usize) -> NonNull<Node<T>> {
        debug_assert!(index < self.len);
        let node = if index <= self.len / 2 {
            let mut node = self.head;
            for _ in 0..index {
                // SAFETY: index < len, every node on the way is live
                node = node.and_then(|n| unsafe { n.as_ref().next });
            }
            node
        } else {
            let mut node = self.tail;
            for _ in index + 1..self.len {
                // SAFETY: index < len, every node on the way is live
                node = node.and_then(|n| unsafe { n.as_ref().prev });
            }
            node
        };
        match node {
            Some(node) => node,
            None => unreachable!("list shorter than its length"),
        }
    }

    /// Takes the whole chain out of `self`, leaving it empty.
    fn detach(&mut self) -> Option<(NonNull<Node<T>>, NonNull<Node<T>>, usize)> {
        let head = self.head.take()?;
        let tail = self.tail.take()?;
        let len = mem::take(&mut self.len);
        Some((head, tail, len))
    }

    /// Links every node of `other` in front of the current head.
    fn splice_front(&mut self, mut other: Self) {
        let Some((head, tail, len)) = other.detach() else {
            return;
        };
        // SAFETY: `head..tail` now belongs to us, the old head is live if present
        unsafe {
            (*tail.as_ptr()).next = self.head;
            match self.head {
                Some(old_head) => (*old_head.as_ptr()).prev = Some(tail),
                None => self.tail = Some(tail),
            }
        }
        self.head = Some(head);
        self.len += len;
    }

    /// Links every node of `other` right after `prev`.
    fn splice_after(&mut self, prev: NonNull<Node<T>>, mut other: Self) {
        let Some((head, tail, len)) = other.detach() else {
            return;
        };
        // SAFETY: `prev` is a live node of `self`, `head..tail` is owned by us
        unsafe {
            let next = (*prev.as_ptr()).next;
            (*head.as_ptr()).prev = Some(prev);
            (*tail.as_ptr()).next = next;
            (*prev.as_ptr()).next = Some(head);
            match next {
                Some(next) => (*next.as_ptr()).prev = Some(tail),
                None => self.tail = Some(tail),
            }
        }
        self.len += len;
    }

    /// Unlinks an interior node, stitching its neighbours together.
    ///
    /// # Safety
    /// `node` must be a live node of `self` that is neither head nor tail.
    unsafe fn unlink_interior(&mut self, node: NonNull<Node<T>>) -> T {
        let prev = (*node.as_ptr()).prev;
        let next = (*node.as_ptr()).next;
        if let Some(prev) = prev {
            (*prev.as_ptr()).next = next;
        }
        if let Some(next) = next {
            (*next.as_ptr()).prev = prev;
        }
        self.len -= 1;
        Node::into_data(node)
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn add<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for elt in elements {
            let node = Node::alloc(elt);
            // SAFETY: `node` is fresh, the tail is a live node owned by this list
            unsafe {
                (*node.as_ptr()).prev = self.tail;
                match self.tail {
                    Some(tail) => (*tail.as_ptr()).next = Some(node),
                    None => self.head = Some(node),
                }
            }
            self.tail = Some(node);
            self.len += 1;
        }
    }

    fn prepend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.splice_front(elements.into_iter().collect());
    }

    fn get_first(&self) -> Option<&T> {
        // SAFETY: the head lives as long as `&self`
        self.head.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    fn get_last(&self) -> Option<&T> {
        // SAFETY: the tail lives as long as `&self`
        self.tail.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let node = self.node_at(index);
        // SAFETY: the node lives as long as `&self`
        Some(unsafe { &(*node.as_ptr()).data })
    }

    fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        if index >= self.len {
            tracing::trace!(index, len = self.len, "set rejected");
            return Err(IndexError {
                index,
                len: self.len,
            });
        }
        let node = self.node_at(index);
        // SAFETY: we hold `&mut self`, no other reference to the node exists
        unsafe { (*node.as_ptr()).data = value };
        Ok(())
    }

    fn insert<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        elements: I,
    ) -> Result<(), IndexError> {
        if index >= self.len {
            if index == 0 {
                self.add(elements);
                return Ok(());
            }
            tracing::trace!(index, len = self.len, "insert rejected");
            return Err(IndexError {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.prepend(elements);
        } else if index == self.len - 1 {
            self.add(elements);
        } else {
            let prev = self.node_at(index - 1);
            self.splice_after(prev, elements.into_iter().collect());
        }
        Ok(())
    }

    fn remove_first(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: the head is live and owned by this list
        unsafe {
            self.head = (*head.as_ptr()).next;
            match self.head {
                Some(new_head) => (*new_head.as_ptr()).prev = None,
                None => self.tail = None,
            }
        }
        self.len -= 1;
        // SAFETY: the old head is no longer reachable
        Some(unsafe { Node::into_data(head) })
    }

    fn remove_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: the tail is live and owned by this list
        unsafe {
            self.tail = (*tail.as_ptr()).prev;
            match self.tail {
                Some(new_tail) => (*new_tail.as_ptr()).next = None,
                None => self.head = None,
            }
        }
        self.len -= 1;
        // SAFETY: the old tail is no longer reachable
        Some(unsafe { Node::into_data(tail) })
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            tracing::trace!(index, len = self.len, "remove rejected");
            return None;
        }
        if index == 0 {
            return self.remove_first();
        }
        if index == self.len - 1 {
            return self.remove_last();
        }
        let node = self.node_at(index);
        // SAFETY: 0 < index < len - 1, so the node is interior
        Some(unsafe { self.unlink_interior(node) })
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        while self.remove_first().is_some() {}
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len);
        values.extend(self.values().cloned());
        values
    }

    fn reverse(&mut self) {
        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: every node on the chain is live, we hold `&mut self`
            unsafe {
                let node = &mut *node.as_ptr();
                curr = node.next;
                mem::swap(&mut node.next, &mut node.prev);
            }
        }
        mem::swap(&mut self.head, &mut self.tail);
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.values().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Borrowing walk over the values, front to back.
struct Values<'a, T> {
    curr: Option<NonNull<Node<T>>>,
    remaining: usize,
    _list: PhantomData<&'a LinkedList<T>>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        self.remaining -= 1;
        // SAFETY: the list is borrowed for 'a, so the node outlives the item
        unsafe {
            self.curr = (*node.as_ptr()).next;
            Some(&(*node.as_ptr()).data)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}
