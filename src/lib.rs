#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
pub mod concurrent;
pub mod d_list;
pub mod s_list;
pub mod sequence;

#[cfg(feature = "std")]
pub use concurrent::ConcurrentList;
pub use d_list::LinkedList as DoublyLinkedList;
pub use s_list::LinkedList as SinglyLinkedList;
pub use sequence::{IndexError, Sequence};
