use crate::queue::Queue;
use crate::ring::Arena;
use std::cmp::Ordering;

impl Queue {
    /// Sort the queue by byte-wise lexicographic order, ascending, or
    /// descending if `descend` is set.
    ///
    /// This sort is stable (i.e., does not reorder equal strings).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time. No string
    /// is moved, only nodes are relinked.
    ///
    /// # Current Implementation
    ///
    /// A top-down merge sort that cuts the ring in halves. Queues longer
    /// than [`QueueConfig::recursive_sort_limit`] are merged bottom-up
    /// instead, with the same merge step and no recursion.
    ///
    /// [`QueueConfig::recursive_sort_limit`]: crate::QueueConfig::recursive_sort_limit
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::Queue;
    ///
    /// let mut queue = Queue::from(["b", "a", "b", "c"]);
    ///
    /// queue.sort(false);
    /// assert_eq!(queue.to_vec(), vec!["a", "b", "b", "c"]);
    ///
    /// queue.sort(true);
    /// assert_eq!(queue.to_vec(), vec!["c", "b", "b", "a"]);
    /// ```
    pub fn sort(&mut self, descend: bool) {
        let ghost = self.ghost_node();
        if self.arena.is_empty(ghost) || self.arena.is_singular(ghost) {
            return;
        }
        let len = self.size();
        if len <= self.config.recursive_sort_limit {
            tracing::trace!(len, descend, "sorting queue top-down");
            merge_sort(&mut self.arena, ghost, descend);
        } else {
            tracing::trace!(len, descend, "sorting queue bottom-up");
            merge_sort_bottom_up(&mut self.arena, ghost, len, descend);
        }
    }
}

/// Whether `left` goes before `right`. Ties go to `left`, which keeps the
/// merge stable.
fn precedes<T: Ord>(left: &T, right: &T, descend: bool) -> bool {
    match left.cmp(right) {
        Ordering::Equal => true,
        Ordering::Less => !descend,
        Ordering::Greater => descend,
    }
}

/// Returns the node just before the midpoint of the ring, so that cutting
/// after it leaves `ceil(n / 2)` nodes in front and `floor(n / 2)` behind.
///
/// The ring must not be empty.
fn split<T>(arena: &Arena<T>, head: usize) -> usize {
    let mut slow = arena.next(head);
    let mut fast = arena.next(slow);
    while fast != head && arena.next(fast) != head {
        slow = arena.next(slow);
        fast = arena.advance(fast, 2);
    }
    slow
}

fn merge_sort<T: Ord>(arena: &mut Arena<T>, head: usize, descend: bool) {
    if arena.is_empty(head) || arena.is_singular(head) {
        return;
    }
    let mid = split(arena, head);
    let (left, right) = (arena.new_head(), arena.new_head());
    arena.cut(left, head, mid);
    arena.splice_after(head, right);

    merge_sort(arena, left, descend);
    merge_sort(arena, right, descend);
    merge_two(arena, head, left, right, descend);

    arena.release_head(left);
    arena.release_head(right);
}

/// Merge the sorted rings `left` and `right` onto the back of `dest`,
/// leaving both empty.
fn merge_two<T: Ord>(
    arena: &mut Arena<T>,
    dest: usize,
    left: usize,
    right: usize,
    descend: bool,
) {
    while !arena.is_empty(left) && !arena.is_empty(right) {
        let (front_left, front_right) = (arena.next(left), arena.next(right));
        let taken = if precedes(
            arena.element(front_left),
            arena.element(front_right),
            descend,
        ) {
            front_left
        } else {
            front_right
        };
        arena.move_before(taken, dest);
    }
    arena.splice_before(left, dest);
    arena.splice_before(right, dest);
}

/// Merge runs of width 1, 2, 4, ... in passes over the ring. Each pass cuts
/// two runs off the front of `head`, merges them onto `merged`, and finally
/// moves `merged` back.
fn merge_sort_bottom_up<T: Ord>(arena: &mut Arena<T>, head: usize, len: usize, descend: bool) {
    let (left, right, merged) = (arena.new_head(), arena.new_head(), arena.new_head());
    let mut width = 1_usize;
    while width < len {
        while !arena.is_empty(head) {
            let back = arena.advance_within(head, head, width);
            arena.cut(left, head, back);
            let back = arena.advance_within(head, head, width);
            arena.cut(right, head, back);
            merge_two(arena, merged, left, right, descend);
        }
        arena.splice_after(merged, head);
        width = width.saturating_mul(2);
    }
    arena.release_head(left);
    arena.release_head(right);
    arena.release_head(merged);
}
