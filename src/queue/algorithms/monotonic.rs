use crate::queue::Queue;
use std::cmp::Ordering;

impl Queue {
    /// Removes every string that has a strictly smaller string anywhere to
    /// its right, leaving a non-decreasing queue. Returns the number of
    /// strings left.
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
    /// let mut queue = Queue::from(["5", "3", "4", "1", "2"]);
    /// assert_eq!(queue.ascend(), 2);
    /// assert_eq!(queue.to_vec(), vec!["1", "2"]);
    /// ```
    pub fn ascend(&mut self) -> usize {
        self.retain_monotonic(Ordering::Greater)
    }

    /// Removes every string that has a strictly greater string anywhere to
    /// its right, leaving a non-increasing queue. Returns the number of
    /// strings left.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["5", "3", "4", "1", "2"]);
    /// assert_eq!(queue.descend(), 3);
    /// assert_eq!(queue.to_vec(), vec!["5", "4", "2"]);
    /// ```
    pub fn descend(&mut self) -> usize {
        self.retain_monotonic(Ordering::Less)
    }

    /// Scan from the tail to the head, keeping the best string seen so far,
    /// and drop every string that compares `dropped` against it.
    fn retain_monotonic(&mut self, dropped: Ordering) -> usize {
        let ghost = self.ghost_node();
        if self.arena.is_empty(ghost) || self.arena.is_singular(ghost) {
            return self.size();
        }
        let mut best = self.back_node();
        let mut node = self.arena.prev(best);
        while node != ghost {
            let prev = self.arena.prev(node);
            if self.arena.element(node).cmp(self.arena.element(best)) == dropped {
                self.detach_node(node);
            } else {
                best = node;
            }
            node = prev;
        }
        self.size()
    }
}
