use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

use crate::queue::element::Element;
use crate::Iter;

pub mod element;
pub mod iterator;

mod algorithms;

/// The `Queue` is a first-in first-out queue of strings, implemented as a
/// cyclic doubly-linked list with a sentinel node. It allows inserting and
/// removing elements at both ends in constant time, and reorganizing the
/// elements (reversal, pairwise swapping, sorting, deduplication) by pure
/// link surgery that never moves a payload.
///
/// Every insertion copies the given string into a fresh heap-allocated
/// element. Every removal detaches the element from the ring and hands it
/// back to the caller as an owned [`Element`].
///
/// # Naming Conventions
///
/// - `start..end`: a half-open range of ring nodes, left inclusive and right
///   exclusive (possibly the sentinel).
pub struct Queue {
    sentinel: NonNull<Sentinel>,
}

#[repr(C)]
pub(crate) struct Node {
    pub(crate) next: NonNull<Node>,
    pub(crate) prev: NonNull<Node>,
    pub(crate) value: String,
}

/// The sentinel carries links but no payload. Both `Sentinel` and [`Node`]
/// are `#[repr(C)]` and `Sentinel` is a layout prefix of `Node`, so a
/// sentinel pointer can be used as a `NonNull<Node>` wherever only the links
/// are read or written.
#[repr(C)]
struct Sentinel {
    next: NonNull<Node>,
    prev: NonNull<Node>,
}

// private methods
impl Queue {
    pub(crate) fn sentinel_node(&self) -> NonNull<Node> {
        self.sentinel.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node> {
        // SAFETY: `sentinel.next` is always valid (either the sentinel itself,
        // or the first element of the ring).
        unsafe { self.sentinel.as_ref() }.next
    }
    pub(crate) fn back_node(&self) -> NonNull<Node> {
        // SAFETY: `sentinel.prev` is always valid (either the sentinel itself,
        // or the last element of the ring).
        unsafe { self.sentinel.as_ref() }.prev
    }

    /// Detach a single node `node` from the ring, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` is an element of
    /// this queue. Detaching a node that is not (in particular, the sentinel)
    /// makes the ring ill-formed.
    ///
    /// The links of the detached node are stale and must not be followed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node>) -> Box<Node> {
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the ring, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belong
    /// to this queue, or whether `prev` and `next` are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the queue, or they are not
    /// adjacent nodes, this function call makes the ring ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node>,
        next: NonNull<Node>,
        node: NonNull<Node>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }
}

impl Queue {
    /// Create an empty `Queue`.
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::Queue;
    /// let queue = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            sentinel: new_sentinel(),
        }
    }

    /// Returns `true` if the `Queue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.is_empty());
    ///
    /// queue.push_front("foo");
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.sentinel_node()
    }

    /// Returns the number of elements in the `Queue`.
    ///
    /// The size is not cached anywhere; it is derived by walking the whole
    /// ring.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_front("b");
    /// assert_eq!(queue.len(), 1);
    ///
    /// queue.push_front("a");
    /// assert_eq!(queue.len(), 2);
    ///
    /// queue.push_back("c");
    /// assert_eq!(queue.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_front("b");
    /// queue.push_front("a");
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.front(), Some("a"));
    ///
    /// queue.clear();
    /// assert_eq!(queue.len(), 0);
    /// assert_eq!(queue.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a view of the front payload, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.front(), None);
    ///
    /// queue.push_front("one");
    /// assert_eq!(queue.front(), Some("one"));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so the front node is an element.
        Some(unsafe { self.front_node().as_ref() }.value.as_str())
    }

    /// Provides a view of the back payload, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.back(), None);
    ///
    /// queue.push_back("one");
    /// assert_eq!(queue.back(), Some("one"));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so the back node is an element.
        Some(unsafe { self.back_node().as_ref() }.value.as_str())
    }

    /// Adds an element holding a copy of `value` first in the queue.
    ///
    /// The queue stores its own copy; the caller keeps ownership of `value`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_front("two");
    /// assert_eq!(queue.front(), Some("two"));
    ///
    /// queue.push_front("one");
    /// assert_eq!(queue.front(), Some("one"));
    /// ```
    pub fn push_front(&mut self, value: &str) {
        let node = Node::new_detached(value.to_owned());
        // SAFETY: the sentinel and the current front node are adjacent.
        unsafe { self.attach_node(self.sentinel_node(), self.front_node(), node) };
    }

    /// Removes the first element and returns ownership of it, or `None` if
    /// the queue is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.pop_front().is_none());
    ///
    /// queue.push_front("one");
    /// queue.push_front("three");
    /// assert_eq!(queue.pop_front().unwrap().value(), "three");
    /// assert_eq!(queue.pop_front().unwrap().value(), "one");
    /// assert!(queue.pop_front().is_none());
    /// ```
    pub fn pop_front(&mut self) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so the front node is an element.
        let node = unsafe { self.detach_node(self.front_node()) };
        Some(Element { node })
    }

    /// Appends an element holding a copy of `value` to the back of the
    /// queue.
    ///
    /// The queue stores its own copy; the caller keeps ownership of `value`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back("one");
    /// queue.push_back("three");
    /// assert_eq!(queue.back(), Some("three"));
    /// ```
    pub fn push_back(&mut self, value: &str) {
        let node = Node::new_detached(value.to_owned());
        // SAFETY: the current back node and the sentinel are adjacent.
        unsafe { self.attach_node(self.back_node(), self.sentinel_node(), node) };
    }

    /// Removes the last element and returns ownership of it, or `None` if
    /// the queue is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.pop_back().is_none());
    /// queue.push_back("one");
    /// queue.push_back("three");
    /// assert_eq!(queue.pop_back().unwrap().value(), "three");
    /// ```
    pub fn pop_back(&mut self) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so the back node is an element.
        let node = unsafe { self.detach_node(self.back_node()) };
        Some(Element { node })
    }

    /// Removes the middle element of the queue and releases it, returning
    /// `true`, or returns `false` if the queue is empty.
    ///
    /// In a queue with *n* elements, the middle is the element at the
    /// zero-based index *n* / 2 (rounded down): the single element of
    /// `["a"]` is its middle, and the middle of `["a", "b", "c", "d"]` is
    /// `"c"`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c"]);
    /// assert!(queue.delete_middle());
    /// assert_eq!(Vec::from_iter(&queue), vec!["a", "c"]);
    ///
    /// let mut queue = Queue::new();
    /// assert!(!queue.delete_middle());
    /// ```
    pub fn delete_middle(&mut self) -> bool {
        let len = self.len();
        if len == 0 {
            return false;
        }
        let mut mid = self.sentinel_node();
        for _ in 0..(len / 2 + 1) {
            // SAFETY: `len / 2 + 1 <= len`, so the walk stays on ring members.
            // The first step reads the sentinel, so it goes through a raw
            // place rather than a whole-node reference.
            mid = unsafe { (*mid.as_ptr()).next };
        }
        // SAFETY: the walk took at least one step and fewer than `len + 1`,
        // so `mid` is an element, never the sentinel.
        drop(unsafe { self.detach_node(mid) });
        true
    }

    /// Provides a forward iterator over the payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_back("a");
    /// queue.push_back("b");
    /// queue.push_back("c");
    ///
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some("a"));
    /// assert_eq!(iter.next(), Some("b"));
    /// assert_eq!(iter.next(), Some("c"));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Node {
    /// Create a detached node with the given payload. The links are dangling
    /// until the node is attached to a ring.
    pub(crate) fn new_detached(value: String) -> NonNull<Node> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            value,
        })))
    }
}

fn new_sentinel() -> NonNull<Sentinel> {
    let sentinel = NonNull::from(Box::leak(Box::new(Sentinel {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
    })));
    let node = sentinel.cast::<Node>();
    // SAFETY: `sentinel` was just leaked from a live allocation. Its links
    // are self-initialized here, before anything else can read them.
    unsafe {
        (*sentinel.as_ptr()).next = node;
        (*sentinel.as_ptr()).prev = node;
    }
    sentinel
}

/// Connect two ring members as `prev -> next`, closing one seam of the ring.
///
/// The links are written through raw places, never through a whole-node
/// reference, so either side may be the sentinel.
pub(crate) unsafe fn connect(prev: NonNull<Node>, next: NonNull<Node>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

#[cfg(debug_assertions)]
fn assert_adjacent(prev: NonNull<Node>, next: NonNull<Node>) {
    unsafe {
        assert_eq!((*prev.as_ptr()).next, next);
        assert_eq!((*next.as_ptr()).prev, prev);
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: `sentinel` still owns the allocation made in `new_sentinel`,
        // and the ring is now empty, so no node links to it.
        drop(unsafe { Box::from_raw(self.sentinel.as_ptr()) });
    }
}

unsafe impl Send for Queue {}

unsafe impl Sync for Queue {}

#[cfg(test)]
mod tests {
    use crate::queue::Queue;
    use crate::Element;
    use std::collections::VecDeque;
    use std::iter::FromIterator;

    #[test]
    fn queue_create() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        queue.push_back("one");
        assert!(!queue.is_empty());
        assert_eq!(queue.pop_back().unwrap().value(), "one");
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_push_and_pop() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);

        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
        assert!(queue.pop_front().is_none());
        assert!(queue.pop_back().is_none());

        queue.push_back("one");
        assert_eq!(queue.back(), Some("one"));
        assert_eq!(queue.pop_front().unwrap().value(), "one");
        assert!(queue.pop_back().is_none());
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);

        queue.push_front("one");
        queue.push_front("two");
        queue.push_back("three");
        assert_eq!(queue.back(), Some("three"));
        assert_eq!(queue.front(), Some("two"));
        assert_eq!(queue.pop_front().unwrap().value(), "two");
        assert_eq!(queue.pop_back().unwrap().value(), "three");

        assert_eq!(queue.front(), Some("one"));
        assert_eq!(queue.pop_front().unwrap().value(), "one");
        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn queue_len() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);

        queue.push_back("a");
        assert_eq!(queue.len(), 1);

        queue.push_front("b");
        assert_eq!(queue.len(), 2);

        queue.push_back("c");
        assert_eq!(queue.len(), 3);

        let _ = queue.pop_front();
        assert_eq!(queue.len(), 2);

        queue.clear();
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn queue_clear_and_reuse() {
        let mut queue = Queue::from_iter(["a", "b", "c"]);
        queue.clear();
        assert!(queue.is_empty());

        queue.push_back("d");
        assert_eq!(Vec::from_iter(&queue), vec!["d"]);
    }

    #[test]
    fn queue_delete_middle() {
        fn check(words: &[&str]) {
            let mut queue = Queue::from_iter(words.iter().copied());
            assert!(queue.delete_middle());
            let mut expected = words.to_vec();
            expected.remove(words.len() / 2);
            assert_eq!(Vec::from_iter(&queue), expected);
            assert_eq!(queue.len(), words.len() - 1);
        }
        let mut empty = Queue::new();
        assert!(!empty.delete_middle());

        check(&["a"]);
        check(&["a", "b"]);
        check(&["a", "b", "c"]);
        check(&["a", "b", "c", "d"]);
        check(&["a", "b", "c", "d", "e"]);
        check(&["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn queue_matches_vec_deque() {
        fastrand::seed(0xDEC0);
        let mut queue = Queue::new();
        let mut model: VecDeque<String> = VecDeque::new();
        for step in 0..512 {
            match fastrand::usize(0..6) {
                0 => {
                    let word = format!("w{}", step);
                    queue.push_front(&word);
                    model.push_front(word);
                }
                1 | 2 => {
                    let word = format!("w{}", step);
                    queue.push_back(&word);
                    model.push_back(word);
                }
                3 => {
                    assert_eq!(
                        queue.pop_front().map(Element::into_string),
                        model.pop_front()
                    );
                }
                4 => {
                    assert_eq!(queue.pop_back().map(Element::into_string), model.pop_back());
                }
                _ => {
                    assert_eq!(queue.len(), model.len());
                    assert_eq!(queue.front(), model.front().map(String::as_str));
                    assert_eq!(queue.back(), model.back().map(String::as_str));
                }
            }
        }
        assert_eq!(Vec::from_iter(queue), Vec::from_iter(model));
    }
}
