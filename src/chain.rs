//! A chain of queues for k-way merging.
//!
//! The chain is itself a ring of [`QueueContext`] descriptors, built on the
//! same arena as the queues. Each descriptor owns one queue and caches its
//! length, so merging does not have to count the queues again.

use std::fmt;

use crate::error::{QueueError, Result};
use crate::queue::Queue;
use crate::ring::{Arena, Elements};

/// A queue in a [`Chain`], with its cached length.
#[derive(Debug)]
pub struct QueueContext {
    id: usize,
    queue: Queue,
    size: usize,
}

impl QueueContext {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// The cached length of the queue.
    pub fn size(&self) -> usize {
        self.size
    }
}

pub struct Chain {
    arena: Arena<QueueContext>,
    ghost: usize,
    next_id: usize,
}

impl Chain {
    pub fn new() -> Self {
        let mut arena = Arena::with_capacity(1);
        let ghost = arena.new_head();
        Self {
            arena,
            ghost,
            next_id: 0,
        }
    }

    /// Appends a queue to the chain and returns the id of its descriptor.
    pub fn push(&mut self, queue: Queue) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        let size = queue.size();
        let node = self.arena.new_detached(QueueContext { id, queue, size });
        self.arena.insert_before(self.ghost, node);
        id
    }

    /// Number of queues in the chain.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn len(&self) -> usize {
        self.arena.len(self.ghost)
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty(self.ghost)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &QueueContext> + '_ {
        Elements::new(&self.arena, self.ghost)
    }

    pub fn first(&self) -> Option<&QueueContext> {
        self.iter().next()
    }

    pub fn get(&self, id: usize) -> Option<&QueueContext> {
        self.iter().find(|context| context.id == id)
    }

    /// Takes the queues back out of the chain, in chain order.
    pub fn into_queues(mut self) -> Vec<Queue> {
        let mut queues = Vec::new();
        while !self.arena.is_empty(self.ghost) {
            let node = self.arena.next(self.ghost);
            self.arena.unlink(node);
            queues.push(self.arena.release(node).queue);
        }
        queues
    }

    /// Merges every queue of the chain into the first one, sorted ascending,
    /// or descending if `descend` is set. The cached sizes of the other
    /// queues are summed into the first and reset to zero. Returns the
    /// length of the merged queue.
    ///
    /// An empty chain merges to `0`. A chain of one queue returns its cached
    /// size and leaves the queue as it is, unsorted.
    ///
    /// The queues need not be sorted beforehand; the merged queue is sorted
    /// as a whole.
    ///
    /// Each queue owns its own arena, so the strings cannot be spliced over
    /// by relinking. Every string is moved into a fresh node of the first
    /// queue instead, which costs one slot allocation per string. The string
    /// buffers themselves are not copied.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::AllocationFailure`] if the first queue is
    /// bounded and the merged strings would not fit. No queue is changed
    /// then.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::{Chain, Queue};
    ///
    /// let mut chain = Chain::new();
    /// chain.push(Queue::from(["a", "c"]));
    /// chain.push(Queue::from(["b", "d"]));
    ///
    /// assert_eq!(chain.merge(false), Ok(4));
    /// let queues = chain.into_queues();
    /// assert_eq!(queues[0].to_vec(), vec!["a", "b", "c", "d"]);
    /// assert!(queues[1].is_empty());
    /// ```
    pub fn merge(&mut self, descend: bool) -> Result<usize> {
        let ghost = self.ghost;
        if self.arena.is_empty(ghost) {
            return Ok(0);
        }
        let first = self.arena.next(ghost);
        if self.arena.is_singular(ghost) {
            return Ok(self.arena.element(first).size);
        }

        let target = &self.arena.element(first).queue;
        if let Some(max_len) = target.config().max_len {
            let incoming: usize = self.iter().skip(1).map(|c| c.queue.size()).sum();
            if target.size().saturating_add(incoming) > max_len {
                tracing::debug!(max_len, incoming, "rejected chain merge");
                return Err(QueueError::AllocationFailure(
                    "merged queue would exceed its max_len",
                ));
            }
        }

        let mut node = self.arena.next(first);
        let mut merged = 1_usize;
        while node != ghost {
            let next = self.arena.next(node);
            let (into, from) = match self.arena.elements2_mut(first, node) {
                Some(pair) => pair,
                None => unreachable!("chain descriptors are distinct payload nodes"),
            };
            for value in from.queue.drain() {
                into.queue.link_back(value);
            }
            into.size += from.size;
            from.size = 0;
            merged += 1;
            node = next;
        }

        let context = self.arena.element_mut(first);
        context.queue.sort(descend);
        tracing::trace!(queues = merged, size = context.size, descend, "merged chain");
        Ok(context.size)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
