use crate::queue::Queue;
use std::hash::{Hash, Hasher};

pub mod drain;

mod monotonic;
mod sort;

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for Queue {}

impl Clone for Queue {
    /// Clone the strings and the configuration. The clone is packed into a
    /// fresh arena.
    fn clone(&self) -> Self {
        let mut queue = Queue::build(self.config.clone());
        for value in self {
            queue.link_back(value.to_owned());
        }
        queue
    }
}

impl Hash for Queue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for value in self {
            value.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl Queue {
    /// Removes and drops the middle string. In a queue of length *n* that is
    /// the string at index `n / 2`, so the second of the two middles for an
    /// even length.
    ///
    /// Returns `false` only if the queue is empty.
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
    /// let mut queue = Queue::from(["0", "1", "2", "3"]);
    /// assert!(queue.delete_middle());
    /// assert_eq!(queue.to_vec(), vec!["0", "1", "3"]);
    ///
    /// assert!(!Queue::new().delete_middle());
    /// ```
    pub fn delete_middle(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let ghost = self.ghost_node();
        // `fast` moves two steps for every step of `slow`
        let (mut slow, mut fast) = (self.front_node(), self.front_node());
        while fast != ghost && self.arena.next(fast) != ghost {
            slow = self.arena.next(slow);
            fast = self.arena.advance(fast, 2);
        }
        self.detach_node(slow);
        true
    }

    /// Removes every string that is equal to one of its neighbours, so each
    /// run of equal strings disappears as a whole.
    ///
    /// Only adjacent strings are compared. The queue must be sorted for this
    /// to remove all duplicates; on an unsorted queue only adjacent runs go.
    ///
    /// Returns `false` only if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["a", "a", "b", "c", "c"]);
    /// assert!(queue.delete_duplicates());
    /// assert_eq!(queue.to_vec(), vec!["b"]);
    /// ```
    pub fn delete_duplicates(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let ghost = self.ghost_node();
        let mut current = self.front_node();
        while current != ghost {
            let mut next = self.arena.next(current);
            let mut duplicated = false;
            while next != ghost && self.arena.element(next) == self.arena.element(current) {
                self.detach_node(next);
                duplicated = true;
                next = self.arena.next(current);
            }
            if duplicated {
                self.detach_node(current);
            }
            current = next;
        }
        true
    }

    /// Swaps every two adjacent strings. A trailing odd string stays put.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["1", "2", "3", "4", "5"]);
    /// queue.swap_pairs();
    /// assert_eq!(queue.to_vec(), vec!["2", "1", "4", "3", "5"]);
    /// ```
    pub fn swap_pairs(&mut self) {
        let ghost = self.ghost_node();
        let mut first = self.front_node();
        while first != ghost {
            let second = self.arena.next(first);
            if second == ghost {
                break;
            }
            self.arena.move_after(first, second);
            first = self.arena.next(first);
        }
    }

    /// Reverses the queue in place.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["a", "b", "c"]);
    /// queue.reverse();
    /// assert_eq!(queue.to_vec(), vec!["c", "b", "a"]);
    /// ```
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        if self.arena.is_empty(ghost) || self.arena.is_singular(ghost) {
            return;
        }
        self.arena.reverse(ghost);
    }

    /// Reverses every consecutive group of `k` strings. A shorter group left
    /// at the end keeps its order. Nothing happens if `k <= 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["1", "2", "3", "4", "5"]);
    /// queue.reverse_k_group(2);
    /// assert_eq!(queue.to_vec(), vec!["2", "1", "4", "3", "5"]);
    ///
    /// queue.reverse_k_group(3);
    /// assert_eq!(queue.to_vec(), vec!["4", "1", "2", "3", "5"]);
    /// ```
    pub fn reverse_k_group(&mut self, k: usize) {
        if k <= 1 || self.is_empty() {
            return;
        }
        let groups = self.size() / k;
        if groups == 0 {
            return;
        }
        let group = self.arena.new_head();
        let mut anchor = self.ghost_node();
        for _ in 0..groups {
            let first = self.arena.next(anchor);
            let last = self.arena.advance(anchor, k);
            self.arena.cut(group, anchor, last);
            self.arena.reverse(group);
            self.arena.splice_after(group, anchor);
            // the old first string now closes the group
            anchor = first;
        }
        self.arena.release_head(group);
        tracing::trace!(k, groups, "reversed queue groups");
    }
}
