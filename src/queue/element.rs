use std::fmt;

use crate::queue::Node;

/// An element removed from a [`Queue`].
///
/// The element owns its node and payload; dropping it releases the payload,
/// then the node. Its former ring links are stale and are never read.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.push_back("payload");
///
/// let element = queue.pop_front().unwrap();
/// assert_eq!(element.value(), "payload");
/// assert_eq!(element.into_string(), "payload");
/// ```
///
/// [`Queue`]: crate::Queue
pub struct Element {
    pub(crate) node: Box<Node>,
}

impl Element {
    /// Borrows the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back("one");
    ///
    /// let element = queue.pop_back().unwrap();
    /// assert_eq!(element.value(), "one");
    /// ```
    #[inline]
    pub fn value(&self) -> &str {
        self.node.value.as_str()
    }

    /// Recovers the owned payload, releasing the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back("one");
    ///
    /// let value = queue.pop_back().unwrap().into_string();
    /// assert_eq!(value, "one");
    /// ```
    #[inline]
    pub fn into_string(self) -> String {
        self.node.value
    }

    /// Copies the payload into `buf` as a NUL-terminated byte string.
    ///
    /// At most `buf.len() - 1` payload bytes are written, followed by a
    /// single NUL byte. A payload longer than that is silently truncated;
    /// callers who need the whole payload use [`value`] or [`into_string`]
    /// instead.
    ///
    /// An empty `buf` is a caller error: it is debug-asserted, and no byte
    /// is written.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back("hello");
    ///
    /// let element = queue.pop_front().unwrap();
    ///
    /// let mut buf = [0u8; 6];
    /// element.copy_value_into(&mut buf);
    /// assert_eq!(&buf, b"hello\0");
    ///
    /// let mut short = [0u8; 4];
    /// element.copy_value_into(&mut short);
    /// assert_eq!(&short, b"hel\0");
    /// ```
    ///
    /// [`value`]: Element::value
    /// [`into_string`]: Element::into_string
    pub fn copy_value_into(&self, buf: &mut [u8]) {
        debug_assert!(!buf.is_empty(), "Cannot copy into an empty buffer");
        if buf.is_empty() {
            return;
        }
        let value = self.node.value.as_bytes();
        let len = value.len().min(buf.len() - 1);
        buf[..len].copy_from_slice(&value[..len]);
        buf[len] = 0;
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.value()).finish()
    }
}

unsafe impl Send for Element {}

unsafe impl Sync for Element {}

#[cfg(test)]
mod tests {
    use crate::Queue;

    #[test]
    fn element_value_and_into_string() {
        let mut queue = Queue::new();
        queue.push_back("carrier");
        let element = queue.pop_back().unwrap();
        assert_eq!(element.value(), "carrier");
        assert_eq!(element.into_string(), "carrier");
    }

    #[test]
    fn tail_round_trip() {
        let mut queue = Queue::new();
        queue.push_back("anchor");
        let before = queue.len();

        queue.push_back("payload");
        assert_eq!(queue.len(), before + 1);

        let element = queue.pop_back().unwrap();
        let mut buf = [0u8; 32];
        element.copy_value_into(&mut buf);
        assert_eq!(&buf[..8], b"payload\0");
        assert_eq!(queue.len(), before);
    }

    #[test]
    fn copy_value_exact_and_oversized() {
        let mut queue = Queue::new();
        queue.push_back("abc");
        let element = queue.pop_front().unwrap();

        let mut buf = [0xff_u8; 4];
        element.copy_value_into(&mut buf);
        assert_eq!(&buf, b"abc\0");

        let mut buf = [0xff_u8; 6];
        element.copy_value_into(&mut buf);
        assert_eq!(&buf, b"abc\0\xff\xff");
    }

    #[test]
    fn copy_value_truncates() {
        let mut queue = Queue::new();
        queue.push_back("container");
        let element = queue.pop_front().unwrap();

        let mut buf = [0u8; 5];
        element.copy_value_into(&mut buf);
        assert_eq!(&buf, b"cont\0");

        let mut buf = [0xff_u8; 1];
        element.copy_value_into(&mut buf);
        assert_eq!(buf, [0]);
    }

    #[test]
    fn copy_value_of_empty_payload() {
        let mut queue = Queue::new();
        queue.push_back("");
        let element = queue.pop_front().unwrap();

        let mut buf = [0xff_u8; 3];
        element.copy_value_into(&mut buf);
        assert_eq!(buf, [0, 0xff, 0xff]);
    }

    #[test]
    #[should_panic(expected = "empty buffer")]
    fn copy_value_into_empty_buffer() {
        let mut queue = Queue::new();
        queue.push_back("x");
        let element = queue.pop_front().unwrap();
        element.copy_value_into(&mut []);
    }

    #[test]
    fn element_debug() {
        let mut queue = Queue::new();
        queue.push_back("probe");
        let element = queue.pop_front().unwrap();
        assert_eq!(format!("{:?}", element), "Element(\"probe\")");
    }
}
