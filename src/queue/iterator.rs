use crate::queue::{Node, Queue};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the payloads of a `Queue`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the ring, where `start` is inclusive and `end` is not.
///
/// Though the `Iter` does not hold a reference from the queue,
/// it actually *borrows* (immutably) from the queue, so a phantom
/// marker of `&'a Queue` is added to protect the queue from being
/// written.
///
/// # Examples
///
/// ```compile_fail
/// use cyclic_queue::Queue;
/// use std::iter::FromIterator;
///
/// let mut queue = Queue::from_iter(["a", "b", "c"]);
/// let mut iter = queue.iter();
///
/// // Won't compile, because the queue is already borrowed immutably.
/// queue.push_back("d");
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    start: NonNull<Node>,
    end: NonNull<Node>,
    _marker: PhantomData<&'a Queue>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(queue: &'a Queue) -> Self {
        let start = queue.front_node();
        let end = queue.sentinel_node();
        let _marker = PhantomData;
        Self {
            start,
            end,
            _marker,
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        let mut ptr = self.start;
        while ptr != self.end {
            // SAFETY: `start..end` is always a valid range of the ring, so
            // every node before `end` can be read.
            let current = unsafe { ptr.as_ref() };
            f.field(&current.value);
            ptr = current.next;
        }
        f.finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of the ring,
        // and it is not empty here, so it is safe.
        let current = unsafe { self.start.as_ref() };
        self.start = current.next;
        Some(current.value.as_str())
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of the ring, and it
        // is not empty here. `end` may be the sentinel, so its `prev` link
        // is read through a raw place; the new `end` is an element.
        self.end = unsafe { (*self.end.as_ptr()).prev };
        let current = unsafe { self.end.as_ref() };
        Some(current.value.as_str())
    }
}

impl FusedIterator for Iter<'_> {}

/// An owning iterator over the payloads of a `Queue`.
///
/// This `struct` is created by the [`into_iter`] method on [`Queue`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: Queue::into_iter
pub struct IntoIter {
    queue: Queue,
}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("queue", &self.queue)
            .finish()
    }
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|element| element.into_string())
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.queue.pop_back().map(|element| element.into_string())
    }
}

impl FusedIterator for IntoIter {}

impl IntoIterator for Queue {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Queue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<S: AsRef<str>> Extend<S> for Queue {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item.as_ref()));
    }
}

unsafe impl Send for Iter<'_> {}

unsafe impl Sync for Iter<'_> {}

#[cfg(test)]
mod tests {
    use crate::Queue;
    use std::iter::FromIterator;

    fn test_iter_case(words: &[&str], mid: usize) {
        let queue = Queue::from_iter(words.iter().copied());

        let mut iter = queue.iter();
        for word in words {
            assert_eq!(iter.next(), Some(*word));
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let mut iter = queue.iter().rev();
        for word in words.iter().rev() {
            assert_eq!(iter.next(), Some(*word));
        }
        assert_eq!(iter.next(), None);

        // Iterate `mid` items forward, then the rest from the back.
        let mut iter = queue.iter();
        for word in words.iter().take(mid) {
            assert_eq!(iter.next(), Some(*word));
        }
        for word in words.iter().skip(mid).rev() {
            assert_eq!(iter.next_back(), Some(*word));
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter() {
        let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
        test_iter_case(&words, 5);
        test_iter_case(&words, 3);
        test_iter_case(&words, 0);
        test_iter_case(&words[..2], 1);
        test_iter_case(&words[..1], 1);
        test_iter_case(&words[..1], 0);
        test_iter_case(&[], 0);
    }

    #[test]
    fn test_iter_last() {
        let queue = Queue::from_iter(["a", "b", "c"]);
        assert_eq!(queue.iter().last(), Some("c"));

        let queue = Queue::new();
        assert_eq!(queue.iter().last(), None);
    }

    #[test]
    fn test_into_iter() {
        let queue = Queue::from_iter(["one", "two", "three"]);
        let mut iter = queue.into_iter();
        assert_eq!(iter.next(), Some("one".to_string()));
        assert_eq!(iter.next_back(), Some("three".to_string()));
        assert_eq!(iter.next(), Some("two".to_string()));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_from_iter_and_extend() {
        let mut queue = Queue::from_iter(["a", "b"]);
        queue.extend(vec!["c".to_string(), "d".to_string()]);
        assert_eq!(Vec::from_iter(&queue), vec!["a", "b", "c", "d"]);

        let owned: Vec<String> = queue.into_iter().collect();
        assert_eq!(owned, vec!["a", "b", "c", "d"]);
    }
}
