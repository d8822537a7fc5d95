use std::fmt;

/// An element detached from a [`Queue`](crate::Queue).
///
/// It owns the string the queue held. Dropping it releases the string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    pub(crate) fn new(value: String) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Copy the value into `buf` as a `0`-terminated byte string, truncating
    /// it to `buf.len() - 1` bytes. Returns the number of value bytes copied.
    ///
    /// Nothing is written into an empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["hello"]);
    /// let element = queue.remove_head(None).unwrap();
    ///
    /// let mut buf = [0xff_u8; 4];
    /// assert_eq!(element.copy_to(&mut buf), 3);
    /// assert_eq!(&buf, b"hel\0");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let room = match buf.len().checked_sub(1) {
            Some(room) => room,
            None => return 0,
        };
        let bytes = self.value.as_bytes();
        let len = bytes.len().min(room);
        buf[..len].copy_from_slice(&bytes[..len]);
        buf[len] = 0;
        len
    }
}

impl From<Element> for String {
    fn from(element: Element) -> Self {
        element.into_value()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.value).finish()
    }
}
