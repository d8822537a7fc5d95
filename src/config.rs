use crate::error::{QueueError, Result};

/// Queues longer than this are sorted bottom-up instead of recursively.
pub const DEFAULT_RECURSIVE_SORT_LIMIT: usize = 1 << 16;

/// Construction options of a [`Queue`](crate::Queue).
///
/// # Examples
///
/// ```
/// use string_queue::{Queue, QueueConfig, QueueError};
///
/// let config = QueueConfig::new().with_max_len(2);
/// let mut queue = Queue::with_config(config).unwrap();
///
/// assert!(queue.insert_tail("a").is_ok());
/// assert!(queue.insert_tail("b").is_ok());
/// assert!(matches!(
///     queue.insert_tail("c"),
///     Err(QueueError::AllocationFailure(_))
/// ));
/// assert_eq!(queue.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Number of nodes to pre-allocate.
    pub initial_capacity: usize,
    /// Upper bound on the number of elements; `None` means unbounded.
    pub max_len: Option<usize>,
    /// Longest queue that is still sorted by the recursive merge sort.
    pub recursive_sort_limit: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            max_len: None,
            recursive_sort_limit: DEFAULT_RECURSIVE_SORT_LIMIT,
        }
    }
}

impl QueueConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_recursive_sort_limit(mut self, limit: usize) -> Self {
        self.recursive_sort_limit = limit;
        self
    }

    /// Checks the options before a queue is built from them.
    pub fn validate(&self) -> Result<()> {
        if self.max_len == Some(0) {
            return Err(QueueError::InvalidArgument("max_len must be positive"));
        }
        if self.recursive_sort_limit == 0 {
            return Err(QueueError::InvalidArgument(
                "recursive_sort_limit must be positive",
            ));
        }
        if let Some(max_len) = self.max_len {
            if self.initial_capacity > max_len {
                return Err(QueueError::InvalidArgument(
                    "initial_capacity exceeds max_len",
                ));
            }
        }
        Ok(())
    }
}
