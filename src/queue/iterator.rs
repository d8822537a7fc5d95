use crate::queue::Queue;
use crate::ring::{Arena, Elements};
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the strings of a `Queue`.
///
/// It walks a half-open run `start..end` of the ring, where `end` starts at
/// the ghost node. Borrowing the queue keeps it from being mutated while
/// iterating.
///
/// # Examples
///
/// ```compile_fail
/// use string_queue::Queue;
///
/// let mut queue = Queue::from(["1", "2", "3"]);
/// let mut iter = queue.iter();
///
/// // Won't compile, because queue is already borrowed immutably.
/// queue.insert_tail("4").unwrap();
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    elements: Elements<'a, String>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(arena: &'a Arena<String>, ghost: usize) -> Self {
        Self {
            elements: Elements::new(arena, ghost),
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.elements.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next().map(String::as_str)
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back().map(String::as_str)
    }
}

impl FusedIterator for Iter<'_> {}

/// An owning iterator over the strings of a `Queue`.
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
        self.queue.pop_front()
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
        self.queue.pop_back()
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

impl FromIterator<String> for Queue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

/// Pushes every string to the back of the queue.
///
/// Extending stops at the first string that does not fit under the queue's
/// `max_len`; the rest of the iterator is left unconsumed.
impl Extend<String> for Queue {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push_back(value) {
                tracing::debug!(%err, "stopped extending queue");
                break;
            }
        }
    }
}

impl<'a> Extend<&'a str> for Queue {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(str::to_owned))
    }
}

impl<const N: usize> From<[&str; N]> for Queue {
    fn from(values: [&str; N]) -> Self {
        values.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Queue, QueueConfig};

    #[test]
    fn test_iter() {
        fn test_case(input: &[&str], mid: usize) {
            let queue: Queue = input.iter().copied().collect();
            let mut iter = queue.iter();
            for item in input.iter().take(mid) {
                assert_eq!(iter.next(), Some(*item));
            }
            let mut iter = iter.rev();
            for item in input.iter().skip(mid).rev() {
                assert_eq!(iter.next(), Some(*item));
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);
        }
        let input = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        test_case(&input, 10);
        test_case(&input, 5);
        test_case(&input, 0);
        test_case(&input[..2], 1);
        test_case(&input[..1], 1);
        test_case(&input[..1], 0);
        test_case(&[], 0);
    }

    #[test]
    fn test_into_iter() {
        let queue = Queue::from(["a", "b", "c"]);
        let mut iter = queue.clone().into_iter();
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next(), None);

        assert_eq!(queue.iter().last(), Some("c"));
        assert_eq!(
            (&queue).into_iter().collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_extend_stops_when_full() {
        let mut queue = Queue::with_config(QueueConfig::new().with_max_len(2)).unwrap();
        queue.extend(["a", "b", "c"]);
        assert_eq!(queue.to_vec(), vec!["a", "b"]);
        queue.assert_invariants();
    }
}
