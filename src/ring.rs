//! Cyclic doubly-linked rings over an index arena.
//!
//! Every node lives in a [`Slab`] and is addressed by its stable key. A node
//! carries its `next` and `prev` keys and an optional payload. Nodes without
//! payload are *heads*: the ghost node of a queue, or a scratch head an
//! algorithm borrows for a moment to hold a detached run of nodes.
//!
//! All structural operations are key rewrites, so moving a node never moves
//! its payload.
//!
//! # Naming Conventions
//!
//! - `head`: a payload-free node anchoring a ring;
//! - `front..=back`: a closed run of payload nodes, both inclusive;
//! - `(from..=to]`: a run given by the node *before* it and its last node.

use slab::Slab;
use std::alloc::Layout;

pub(crate) struct Node<T> {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) element: Option<T>,
}

pub(crate) struct Arena<T> {
    nodes: Slab<Node<T>>,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
        }
    }

    /// Like [`Arena::with_capacity`], but `None` if `capacity` nodes do not
    /// fit in a single allocation.
    pub(crate) fn try_with_capacity(capacity: usize) -> Option<Self> {
        Layout::array::<Node<T>>(capacity).ok()?;
        Some(Self::with_capacity(capacity))
    }

    /// Number of live nodes, heads included.
    pub(crate) fn occupied(&self) -> usize {
        self.nodes.len()
    }

    fn alloc(&mut self, element: Option<T>) -> usize {
        let entry = self.nodes.vacant_entry();
        let key = entry.key();
        entry.insert(Node {
            next: key,
            prev: key,
            element,
        });
        key
    }

    /// Allocate an empty, self-linked head.
    pub(crate) fn new_head(&mut self) -> usize {
        self.alloc(None)
    }

    /// Release a head that no longer anchors any node.
    pub(crate) fn release_head(&mut self, head: usize) {
        debug_assert!(self.is_empty(head), "Cannot release a non-empty head");
        let node = self.nodes.remove(head);
        debug_assert!(node.element.is_none(), "Cannot release a payload node as a head");
    }

    /// Allocate a payload node that is not linked into any ring yet.
    pub(crate) fn new_detached(&mut self, element: T) -> usize {
        self.alloc(Some(element))
    }

    /// Release an unlinked payload node and hand back its payload.
    pub(crate) fn release(&mut self, node: usize) -> T {
        debug_assert!(self.is_empty(node), "Cannot release a linked node");
        match self.nodes.remove(node).element {
            Some(element) => element,
            None => unreachable!("heads carry no payload"),
        }
    }

    pub(crate) fn next(&self, node: usize) -> usize {
        self.nodes[node].next
    }

    pub(crate) fn prev(&self, node: usize) -> usize {
        self.nodes[node].prev
    }

    pub(crate) fn element(&self, node: usize) -> &T {
        match &self.nodes[node].element {
            Some(element) => element,
            None => unreachable!("heads carry no payload"),
        }
    }

    pub(crate) fn element_mut(&mut self, node: usize) -> &mut T {
        match &mut self.nodes[node].element {
            Some(element) => element,
            None => unreachable!("heads carry no payload"),
        }
    }

    /// Mutable payloads of two distinct nodes, or `None` if either one is
    /// vacant, a head, or both keys are equal.
    pub(crate) fn elements2_mut(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)> {
        let (a, b) = self.nodes.get2_mut(a, b)?;
        Some((a.element.as_mut()?, b.element.as_mut()?))
    }

    pub(crate) fn init(&mut self, head: usize) {
        let node = &mut self.nodes[head];
        node.next = head;
        node.prev = head;
    }

    pub(crate) fn is_empty(&self, head: usize) -> bool {
        self.next(head) == head
    }

    pub(crate) fn is_singular(&self, head: usize) -> bool {
        !self.is_empty(head) && self.next(head) == self.prev(head)
    }

    /// Count the nodes of the ring anchored by `head`.
    ///
    /// This operation should compute in *O*(*n*) time.
    pub(crate) fn len(&self, head: usize) -> usize {
        let mut len = 0;
        let mut node = self.next(head);
        while node != head {
            len += 1;
            node = self.next(node);
        }
        len
    }

    /// Walk forward `steps` nodes from `from`, without checking for the head.
    pub(crate) fn advance(&self, mut from: usize, steps: usize) -> usize {
        (0..steps).for_each(|_| from = self.next(from));
        from
    }

    /// Walk forward at most `steps` nodes from `from`, stopping at the last
    /// node before `head`.
    pub(crate) fn advance_within(&self, head: usize, mut from: usize, steps: usize) -> usize {
        for _ in 0..steps {
            let next = self.next(from);
            if next == head {
                break;
            }
            from = next;
        }
        from
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Link a detached node between the adjacent `prev` and `next`.
    fn attach_between(&mut self, prev: usize, next: usize, node: usize) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
    }

    pub(crate) fn insert_after(&mut self, pos: usize, node: usize) {
        let next = self.next(pos);
        self.attach_between(pos, next, node);
    }

    pub(crate) fn insert_before(&mut self, pos: usize, node: usize) {
        let prev = self.prev(pos);
        self.attach_between(prev, pos, node);
    }

    /// Bypass `node` in its ring. The node is left self-linked, owned by the
    /// caller, who must either release it or link it elsewhere.
    pub(crate) fn unlink(&mut self, node: usize) {
        let (prev, next) = (self.prev(node), self.next(node));
        self.connect(prev, next);
        self.init(node);
    }

    pub(crate) fn move_after(&mut self, node: usize, pos: usize) {
        self.unlink(node);
        self.insert_after(pos, node);
    }

    pub(crate) fn move_before(&mut self, node: usize, pos: usize) {
        self.unlink(node);
        self.insert_before(pos, node);
    }

    /// Move the run `(from..=to]` out of its ring and make it the whole
    /// content of `dest`.
    ///
    /// `to` must be reachable from `from` going forward without passing the
    /// head of their ring. If `from == to`, `dest` ends up empty. Whatever
    /// `dest` anchored before is forgotten, so it should be empty.
    pub(crate) fn cut(&mut self, dest: usize, from: usize, to: usize) {
        debug_assert!(self.is_empty(dest), "Cannot cut into a non-empty head");
        if from == to {
            self.init(dest);
            return;
        }
        let (front, after) = (self.next(from), self.next(to));
        self.connect(from, after);
        self.connect(dest, front);
        self.connect(to, dest);
    }

    /// Move every node of `src` between the adjacent `prev` and `next`,
    /// leaving `src` empty.
    fn splice_between(&mut self, src: usize, prev: usize, next: usize) {
        if self.is_empty(src) {
            return;
        }
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let (front, back) = (self.next(src), self.prev(src));
        self.connect(prev, front);
        self.connect(back, next);
        self.init(src);
    }

    /// Move every node of `src`, in order, right after `pos`.
    pub(crate) fn splice_after(&mut self, src: usize, pos: usize) {
        let next = self.next(pos);
        self.splice_between(src, pos, next);
    }

    /// Move every node of `src`, in order, right before `pos`. With `pos` a
    /// head this appends at the far end of its ring.
    pub(crate) fn splice_before(&mut self, src: usize, pos: usize) {
        let prev = self.prev(pos);
        self.splice_between(src, prev, pos);
    }

    /// Reverse the ring anchored by `head` by swapping the links of every
    /// node, the head included.
    pub(crate) fn reverse(&mut self, head: usize) {
        let mut at = head;
        loop {
            let node = &mut self.nodes[at];
            std::mem::swap(&mut node.next, &mut node.prev);
            at = node.prev;
            if at == head {
                break;
            }
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.next(prev), next);
        assert_eq!(self.prev(next), prev);
    }

    /// Keys of the ring in order, for tests that observe node identity.
    #[cfg(test)]
    pub(crate) fn keys(&self, head: usize) -> Vec<usize> {
        let mut keys = Vec::new();
        let mut node = self.next(head);
        while node != head {
            keys.push(node);
            node = self.next(node);
        }
        keys
    }

    /// Check the link invariant of the whole ring and return its length.
    #[cfg(test)]
    pub(crate) fn assert_ring(&self, head: usize) -> usize {
        let mut len = 0;
        let mut node = head;
        loop {
            assert_eq!(self.prev(self.next(node)), node, "broken next link");
            assert_eq!(self.next(self.prev(node)), node, "broken prev link");
            node = self.next(node);
            if node == head {
                break;
            }
            assert!(self.nodes[node].element.is_some(), "stray head in ring");
            len += 1;
            assert!(len <= self.nodes.len(), "ring does not close");
        }
        len
    }
}

/// A double-ended iterator over the payloads of a ring.
///
/// It uses a pair of nodes `start..end` to represent a half-open run of the
/// ring, where `start` is inclusive and `end` is not.
pub(crate) struct Elements<'a, T> {
    arena: &'a Arena<T>,
    start: usize,
    end: usize,
}

impl<'a, T> Elements<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, head: usize) -> Self {
        Self {
            arena,
            start: arena.next(head),
            end: head,
        }
    }
}

impl<T> Clone for Elements<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            start: self.start,
            end: self.end,
        }
    }
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let current = self.start;
        self.start = self.arena.next(current);
        Some(self.arena.element(current))
    }
}

impl<T> DoubleEndedIterator for Elements<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end = self.arena.prev(self.end);
        Some(self.arena.element(self.end))
    }
}

impl<T> std::iter::FusedIterator for Elements<'_, T> {}

#[cfg(test)]
mod tests {
    use super::Arena;

    fn ring_of(arena: &mut Arena<u32>, values: &[u32]) -> usize {
        let head = arena.new_head();
        for &value in values {
            let node = arena.new_detached(value);
            arena.insert_before(head, node);
        }
        head
    }

    fn values(arena: &Arena<u32>, head: usize) -> Vec<u32> {
        arena.keys(head).into_iter().map(|k| *arena.element(k)).collect()
    }

    #[test]
    fn ring_init_and_singular() {
        let mut arena = Arena::with_capacity(4);
        let head = arena.new_head();
        assert!(arena.is_empty(head));
        assert!(!arena.is_singular(head));

        let node = arena.new_detached(7);
        arena.insert_after(head, node);
        assert!(!arena.is_empty(head));
        assert!(arena.is_singular(head));
        assert_eq!(arena.assert_ring(head), 1);

        arena.unlink(node);
        assert!(arena.is_empty(head));
        assert_eq!(arena.release(node), 7);
        arena.release_head(head);
        assert_eq!(arena.occupied(), 0);
    }

    #[test]
    fn ring_cut() {
        let mut arena = Arena::with_capacity(8);
        let head = ring_of(&mut arena, &[1, 2, 3, 4, 5]);
        let dest = arena.new_head();
        let keys = arena.keys(head);

        // (1..=4] moves 2, 3, 4
        arena.cut(dest, keys[0], keys[3]);
        assert_eq!(values(&arena, head), vec![1, 5]);
        assert_eq!(values(&arena, dest), vec![2, 3, 4]);
        assert_eq!(arena.assert_ring(head), 2);
        assert_eq!(arena.assert_ring(dest), 3);

        // an empty run leaves `dest` empty
        let empty = arena.new_head();
        arena.cut(empty, keys[0], keys[0]);
        assert!(arena.is_empty(empty));
        assert_eq!(values(&arena, head), vec![1, 5]);

        // cutting from the head takes the front of the ring
        let front = arena.new_head();
        arena.cut(front, head, keys[0]);
        assert_eq!(values(&arena, front), vec![1]);
        assert_eq!(values(&arena, head), vec![5]);
    }

    #[test]
    fn ring_splice() {
        let mut arena = Arena::with_capacity(8);
        let head = ring_of(&mut arena, &[1, 2]);
        let other = ring_of(&mut arena, &[3, 4]);
        arena.splice_before(other, head);
        assert_eq!(values(&arena, head), vec![1, 2, 3, 4]);
        assert!(arena.is_empty(other));

        let other = ring_of(&mut arena, &[5, 6]);
        arena.splice_after(other, head);
        assert_eq!(values(&arena, head), vec![5, 6, 1, 2, 3, 4]);
        assert_eq!(arena.assert_ring(head), 6);

        // splicing an empty ring changes nothing
        let empty = arena.new_head();
        arena.splice_after(empty, head);
        assert_eq!(arena.assert_ring(head), 6);
    }

    #[test]
    fn ring_move_and_reverse() {
        let mut arena = Arena::with_capacity(8);
        let head = ring_of(&mut arena, &[1, 2, 3]);
        let keys = arena.keys(head);
        arena.move_after(keys[0], keys[1]);
        assert_eq!(values(&arena, head), vec![2, 1, 3]);
        arena.move_before(keys[2], keys[1]);
        assert_eq!(values(&arena, head), vec![3, 2, 1]);

        arena.reverse(head);
        assert_eq!(values(&arena, head), vec![1, 2, 3]);
        assert_eq!(arena.assert_ring(head), 3);

        let empty = arena.new_head();
        arena.reverse(empty);
        assert!(arena.is_empty(empty));
    }

    #[test]
    fn ring_advance_and_iterate() {
        let mut arena = Arena::with_capacity(8);
        let head = ring_of(&mut arena, &[1, 2, 3]);
        assert_eq!(arena.len(head), 3);
        assert_eq!(*arena.element(arena.advance(head, 2)), 2);
        assert_eq!(*arena.element(arena.advance_within(head, head, 10)), 3);

        let elements = super::Elements::new(&arena, head);
        assert_eq!(elements.clone().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(elements.rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
