use std::fmt::{Debug, Formatter};

use crate::config::QueueConfig;
use crate::error::{QueueError, Result};
use crate::queue::algorithms::drain::Drain;
use crate::queue::iterator::Iter;
use crate::ring::Arena;

pub use element::Element;

pub mod iterator;

mod algorithms;
mod element;
#[cfg(test)]
mod proptests;

pub use algorithms::drain;

/// The `Queue` is a string queue on a cyclic doubly-linked list. Inserting or
/// removing at either end takes constant time; all reordering algorithms
/// work by relinking nodes, never by copying strings.
///
/// The `Queue` contains:
/// - an arena of nodes, addressed by stable keys;
/// - the key of the ghost node, which carries no string. `ghost.next` is the
///   head of the queue and `ghost.prev` its tail;
/// - the [`QueueConfig`] it was built with.
///
/// The queue does not cache its length, [`Queue::size`] walks the ring.
pub struct Queue {
    arena: Arena<String>,
    ghost: usize,
    config: QueueConfig,
}

// private methods
impl Queue {
    fn build(config: QueueConfig) -> Self {
        // one extra slot for the ghost node
        let arena = Arena::with_capacity(config.initial_capacity.saturating_add(1));
        Self::with_arena(arena, config)
    }

    fn with_arena(mut arena: Arena<String>, config: QueueConfig) -> Self {
        let ghost = arena.new_head();
        Self {
            arena,
            ghost,
            config,
        }
    }

    pub(crate) fn ghost_node(&self) -> usize {
        self.ghost
    }
    pub(crate) fn front_node(&self) -> usize {
        self.arena.next(self.ghost)
    }
    pub(crate) fn back_node(&self) -> usize {
        self.arena.prev(self.ghost)
    }

    /// Number of strings, read off the arena occupancy. Only valid between
    /// operations, when the ghost is the only head alive.
    fn occupancy(&self) -> usize {
        self.arena.occupied() - 1
    }

    /// Check that `additional` more nodes fit under the configured bound.
    pub(crate) fn reserve_nodes(&self, additional: usize) -> Result<()> {
        match self.config.max_len {
            Some(max_len) if self.occupancy().saturating_add(additional) > max_len => {
                tracing::debug!(
                    max_len,
                    additional,
                    "rejected insertion into a full queue"
                );
                Err(QueueError::AllocationFailure("queue is at its max_len"))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn link_front(&mut self, value: String) {
        let node = self.arena.new_detached(value);
        self.arena.insert_after(self.ghost, node);
    }

    pub(crate) fn link_back(&mut self, value: String) {
        let node = self.arena.new_detached(value);
        self.arena.insert_before(self.ghost, node);
    }

    /// Unlink `node` and release it, returning its string.
    pub(crate) fn detach_node(&mut self, node: usize) -> String {
        self.arena.unlink(node);
        self.arena.release(node)
    }

    fn detach_element(&mut self, node: usize, buf: Option<&mut [u8]>) -> Element {
        let element = Element::new(self.detach_node(node));
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        element
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let len = self.arena.assert_ring(self.ghost);
        assert_eq!(len, self.occupancy(), "leaked nodes or heads");
        assert_eq!(len, self.size());
    }

    #[cfg(test)]
    pub(crate) fn node_keys(&self) -> Vec<usize> {
        self.arena.keys(self.ghost)
    }
}

/// Duplicate `value` into freshly reserved storage, reporting a failed
/// reservation instead of aborting.
fn duplicate(value: &str) -> Result<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(value.len()).map_err(|err| {
        tracing::debug!(%err, len = value.len(), "cannot allocate queue value");
        QueueError::AllocationFailure("cannot allocate value storage")
    })?;
    owned.push_str(value);
    Ok(owned)
}

impl Queue {
    /// Create an empty, unbounded `Queue`.
    ///
    /// # Examples
    /// ```
    /// use string_queue::Queue;
    /// let queue = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::build(QueueConfig::default())
    }

    /// Create an empty `Queue` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if the options do not
    /// [validate](QueueConfig::validate), and
    /// [`QueueError::AllocationFailure`] if `initial_capacity` nodes cannot
    /// be laid out in one allocation.
    pub fn with_config(config: QueueConfig) -> Result<Self> {
        config.validate()?;
        let capacity = config.initial_capacity.saturating_add(1);
        let arena = Arena::try_with_capacity(capacity).ok_or_else(|| {
            tracing::debug!(capacity, "cannot lay out queue arena");
            QueueError::AllocationFailure("initial_capacity is too large")
        })?;
        Ok(Self::with_arena(arena, config))
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Returns `true` if the `Queue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty(self.ghost)
    }

    /// Returns the number of strings in the `Queue`, counting them one by one.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.size(), 0);
    ///
    /// queue.insert_head("b").unwrap();
    /// queue.insert_head("a").unwrap();
    /// assert_eq!(queue.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        self.arena.len(self.ghost)
    }

    /// Removes all strings from the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides the head string, or `None` if the queue is empty.
    pub fn front(&self) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        Some(self.arena.element(self.front_node()))
    }

    /// Provides the tail string, or `None` if the queue is empty.
    pub fn back(&self) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        Some(self.arena.element(self.back_node()))
    }

    /// Copies `value` and inserts it at the head of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::AllocationFailure`] if the queue is at its
    /// `max_len`, or the copy cannot be allocated. The queue is unchanged.
    ///
    /// Only the copy is reserved fallibly. The node itself takes a slot in
    /// the arena, and growing the arena aborts on out-of-memory like any
    /// `Vec` does. Pre-allocating with [`QueueConfig::with_initial_capacity`]
    /// keeps inserts within the reserved slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.insert_head("b").unwrap();
    /// assert_eq!(queue.front(), Some("b"));
    ///
    /// queue.insert_head("a").unwrap();
    /// assert_eq!(queue.front(), Some("a"));
    /// ```
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        self.reserve_nodes(1)?;
        let value = duplicate(value)?;
        self.link_front(value);
        Ok(())
    }

    /// Copies `value` and inserts it at the tail of the queue.
    ///
    /// # Errors
    ///
    /// See [`Queue::insert_head`].
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("a").unwrap();
    /// queue.insert_tail("b").unwrap();
    /// assert_eq!(queue.back(), Some("b"));
    /// ```
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        self.reserve_nodes(1)?;
        let value = duplicate(value)?;
        self.link_back(value);
        Ok(())
    }

    /// Inserts an owned string at the head of the queue.
    pub fn push_front(&mut self, value: String) -> Result<()> {
        self.reserve_nodes(1)?;
        self.link_front(value);
        Ok(())
    }

    /// Inserts an owned string at the tail of the queue.
    pub fn push_back(&mut self, value: String) -> Result<()> {
        self.reserve_nodes(1)?;
        self.link_back(value);
        Ok(())
    }

    /// Detaches the head element, or returns `None` if the queue is empty.
    ///
    /// If `buf` is given, the value is also copied into it the way
    /// [`Element::copy_to`] does.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["first", "second"]);
    ///
    /// let mut buf = [0_u8; 16];
    /// let element = queue.remove_head(Some(&mut buf)).unwrap();
    /// assert_eq!(element.value(), "first");
    /// assert_eq!(&buf[..6], b"first\0");
    /// assert_eq!(queue.size(), 1);
    /// ```
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_element(self.front_node(), buf))
    }

    /// Detaches the tail element, or returns `None` if the queue is empty.
    ///
    /// See [`Queue::remove_head`].
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_element(self.back_node(), buf))
    }

    /// Removes the head string and returns it, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["a", "b"]);
    /// assert_eq!(queue.pop_front().as_deref(), Some("a"));
    /// assert_eq!(queue.pop_front().as_deref(), Some("b"));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<String> {
        self.remove_head(None).map(Element::into_value)
    }

    /// Removes the tail string and returns it, or `None` if the queue is
    /// empty.
    pub fn pop_back(&mut self) -> Option<String> {
        self.remove_tail(None).map(Element::into_value)
    }

    /// Moves all strings from `other` to the end of the queue, in order.
    /// After this operation, `other` becomes empty.
    ///
    /// The strings are moved, not copied.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::AllocationFailure`] if the strings would not fit
    /// under this queue's `max_len`; neither queue is changed then.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["a"]);
    /// let mut other = Queue::from(["b", "c"]);
    ///
    /// queue.append(&mut other).unwrap();
    /// assert_eq!(queue.to_vec(), vec!["a", "b", "c"]);
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Queue) -> Result<()> {
        if self.config.max_len.is_some() {
            self.reserve_nodes(other.occupancy())?;
        }
        for value in other.drain() {
            self.link_back(value);
        }
        Ok(())
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let queue = Queue::from(["0", "1", "2"]);
    ///
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some("0"));
    /// assert_eq!(iter.next_back(), Some("2"));
    /// assert_eq!(iter.next(), Some("1"));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.arena, self.ghost)
    }

    /// Removes every string from the queue, yielding them front to back.
    ///
    /// Strings the iterator does not yield are dropped with it.
    pub fn drain(&mut self) -> Drain<'_> {
        Drain::new(self)
    }

    /// Copies the strings into a `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
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
