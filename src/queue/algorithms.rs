use crate::queue::{connect, Queue};

mod sort;

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for Queue {}

impl Clone for Queue {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl Queue {
    /// Swaps every two adjacent elements: the first with the second, the
    /// third with the fourth, and so on. In a queue with an odd number of
    /// elements, the last element stays where it is.
    ///
    /// The swap is done by relinking nodes; no payload is moved, copied or
    /// released.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d", "e"]);
    ///
    /// queue.swap_pairs();
    ///
    /// assert_eq!(Vec::from_iter(&queue), vec!["b", "a", "d", "c", "e"]);
    /// ```
    pub fn swap_pairs(&mut self) {
        let sentinel = self.sentinel_node();
        let mut first = self.front_node();
        while first != sentinel {
            // SAFETY: `first` is an element, so all links around the pair are
            // valid ring links.
            let second = unsafe { first.as_ref() }.next;
            if second == sentinel {
                break;
            }
            // Relink the pair as `prev -> second -> first -> rest`.
            unsafe {
                let prev = first.as_ref().prev;
                let rest = second.as_ref().next;
                connect(prev, second);
                connect(second, first);
                connect(first, rest);
            }
            first = unsafe { first.as_ref() }.next;
        }
    }

    /// Reverses the order of the elements.
    ///
    /// Every ring member, the sentinel included, has its forward and
    /// backward links exchanged; no payload is moved, copied or released.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c"]);
    ///
    /// queue.reverse();
    ///
    /// assert_eq!(Vec::from_iter(&queue), vec!["c", "b", "a"]);
    /// ```
    pub fn reverse(&mut self) {
        let sentinel = self.sentinel_node();
        let mut current = sentinel;
        loop {
            // SAFETY: every ring member, the sentinel included, has valid
            // links, so the walk visits each of them exactly once. The links
            // are accessed through raw places because `current` may be the
            // sentinel.
            let next = unsafe {
                let node = current.as_ptr();
                let next = (*node).next;
                (*node).next = (*node).prev;
                (*node).prev = next;
                next
            };
            if next == sentinel {
                break;
            }
            current = next;
        }
    }

    /// Removes every run of adjacent payload-equal elements, leaving only
    /// the elements whose payload occurs once in its neighborhood. No
    /// element of a removed run survives.
    ///
    /// The queue is expected to be sorted in ascending order, so that equal
    /// payloads are adjacent. On an unsorted queue the walk still removes
    /// adjacent equal runs, but payloads may remain duplicated across
    /// non-adjacent positions.
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
    /// let mut queue = Queue::from_iter(["a", "b", "b", "c"]);
    ///
    /// queue.delete_duplicates();
    ///
    /// assert_eq!(Vec::from_iter(&queue), vec!["a", "c"]);
    /// ```
    pub fn delete_duplicates(&mut self) {
        let sentinel = self.sentinel_node();
        let mut current = self.front_node();
        while current != sentinel {
            // SAFETY: `current` is an element; walking `next` stays on the
            // ring until the sentinel reappears.
            let mut run_end = unsafe { current.as_ref() }.next;
            while run_end != sentinel
                && unsafe { run_end.as_ref().value == current.as_ref().value }
            {
                run_end = unsafe { run_end.as_ref() }.next;
            }
            // `current..run_end` is a maximal run of equal payloads. A run
            // of length one is kept; a longer run is released entirely.
            if unsafe { current.as_ref() }.next == run_end {
                current = run_end;
            } else {
                while current != run_end {
                    let next = unsafe { current.as_ref() }.next;
                    // SAFETY: every node of the run is an element of this
                    // queue.
                    drop(unsafe { self.detach_node(current) });
                    current = next;
                }
            }
        }
    }

    /// Sorts the queue in ascending byte-wise order of the payloads.
    ///
    /// This sort is stable (i.e., does not reorder equal elements). It is
    /// done by relinking nodes; no payload is moved, copied or released.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(1)
    /// memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is done by a naive merge sort with an
    /// insertion-sort floor for short ranges. There is no extra temporary
    /// storage during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["pear", "apple", "orange"]);
    ///
    /// queue.sort();
    ///
    /// assert_eq!(Vec::from_iter(&queue), vec!["apple", "orange", "pear"]);
    /// ```
    pub fn sort(&mut self) {
        sort::merge_sort(self);
    }
}
