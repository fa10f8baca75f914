//! This crate provides a first-in first-out queue of strings, implemented as
//! a cyclic doubly-linked list.
//!
//! The [`Queue`] allows inserting and removing elements at both ends in
//! constant time, and reorganizing the whole queue (reversal, pairwise
//! swapping, sorting, deduplication) by pure link surgery that never moves,
//! copies or reallocates a payload. In compromise, querying the size takes
//! *O*(*n*) time.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::new();
//!
//! queue.push_back("second");
//! queue.push_front("first");
//! queue.push_back("third");
//!
//! assert_eq!(queue.len(), 3);
//!
//! let element = queue.pop_front().unwrap();
//! assert_eq!(element.value(), "first");
//!
//! assert_eq!(queue.pop_front().unwrap().value(), "second");
//! assert_eq!(queue.pop_front().unwrap().value(), "third");
//! assert!(queue.pop_front().is_none());
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the queue is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                        Sentinel     │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║  String   ║           ║  String   ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║ sentinel  ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     Queue
//! ```
//! The `Queue` contains a single pointer `sentinel` that points to the
//! sentinel node.
//!
//! Each node of the queue is allocated on the heap, which contains:
//! - the `next` pointer that points to the next element (or the sentinel if
//!   it is the last element in the queue);
//! - the `prev` pointer that points to the previous element (or the sentinel
//!   if it is the first element in the queue);
//! - the payload, an owned `String` copied in at insertion, except on the
//!   sentinel.
//!
//! Note that the sentinel has *NO* payload to save memory.
//!
//! Initially, there is only the sentinel in an empty queue, of which the
//! `next` and `prev` pointers point to itself.
//!
//! As elements are inserted into the queue, `sentinel.next` points to the
//! first element, and `sentinel.prev` points to the last element of the
//! queue.
//!
//! In convention, in a queue with *n* elements, the nodes are indexed by 0,
//! 1, ..., *n* - 1, and the sentinel is always indexed by *n*. The queue
//! never caches *n*: [`len`] derives it by walking the ring.
//!
//! # Iteration
//!
//! Iterating over a queue is by the [`Iter`] and [`IntoIter`] iterators.
//! These are double-ended iterators and iterate the queue like an array
//! (fused and non-cyclic). [`Iter`] borrows the payloads; [`IntoIter`]
//! consumes the queue and yields them as owned strings.
//!
//! ## Examples
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let queue = Queue::from_iter(["a", "b", "c"]);
//! let mut iter = queue.iter();
//! assert_eq!(iter.next(), Some("a"));
//! assert_eq!(iter.next(), Some("b"));
//! assert_eq!(iter.next(), Some("c"));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! assert_eq!(Vec::from_iter(queue), vec!["a", "b", "c"]);
//! ```
//!
//! # Reorganizing
//!
//! The queue reorders elements without ever touching their payloads:
//! - [`swap_pairs`]: swap the first and the second element, the third and
//!   the fourth, and so on;
//! - [`reverse`]: reverse the order of all elements;
//! - [`sort`]: stable in-place merge sort, in ascending byte-wise order;
//! - [`delete_duplicates`]: in a sorted queue, remove every run of
//!   payload-equal elements entirely;
//! - [`delete_middle`]: remove the element at index *n* / 2.
//!
//! ## Examples
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter(["cherry", "apple", "banana", "apple"]);
//!
//! queue.sort(); // becomes [apple, apple, banana, cherry]
//! queue.delete_duplicates(); // becomes [banana, cherry]
//!
//! assert_eq!(Vec::from_iter(&queue), vec!["banana", "cherry"]);
//! ```
//!
//! # Removal and Copy-out
//!
//! Removing an element detaches its node from the ring and transfers
//! ownership to the caller as an [`Element`]. The payload can be borrowed
//! ([`value`]), recovered as an owned string ([`into_string`]), or copied
//! into a caller buffer as a NUL-terminated byte string with silent
//! truncation ([`copy_value_into`]).
//!
//! ## Examples
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.push_back("hello");
//!
//! let element = queue.pop_front().unwrap();
//! let mut buf = [0u8; 4];
//! element.copy_value_into(&mut buf);
//! assert_eq!(&buf, b"hel\0"); // truncated to fit, NUL-terminated
//! ```
//!
//! [`Queue`]: crate::Queue
//! [`Element`]: crate::Element
//! [`Iter`]: crate::Iter
//! [`IntoIter`]: crate::IntoIter
//! [`len`]: crate::Queue::len
//! [`swap_pairs`]: crate::Queue::swap_pairs
//! [`reverse`]: crate::Queue::reverse
//! [`sort`]: crate::Queue::sort
//! [`delete_duplicates`]: crate::Queue::delete_duplicates
//! [`delete_middle`]: crate::Queue::delete_middle
//! [`value`]: crate::Element::value
//! [`into_string`]: crate::Element::into_string
//! [`copy_value_into`]: crate::Element::copy_value_into

#[doc(inline)]
pub use queue::element::Element;
#[doc(inline)]
pub use queue::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use queue::Queue;

pub mod queue;

mod experiments;
