//! This crate provides a queue of owned strings, implemented as a cyclic
//! doubly-linked list over an index arena.
//!
//! The [`Queue`] inserts and removes strings at either end in constant time.
//! Its reordering algorithms (sorting, reversing, deduplicating and the like)
//! relink nodes in place and never copy a string.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use string_queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("b").unwrap();
//! queue.insert_tail("c").unwrap();
//! queue.insert_head("a").unwrap();
//! assert_eq!(queue.size(), 3);
//!
//! let mut buf = [0_u8; 2];
//! let removed = queue.remove_head(Some(&mut buf)).unwrap();
//! assert_eq!(removed.value(), "a");
//! assert_eq!(&buf, b"a\0");
//!
//! queue.reverse();
//! assert_eq!(queue.to_vec(), vec!["c", "b"]);
//! ```
//!
//! # Memory Layout
//!
//! The nodes of a queue live in a slab and link to each other by key:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) key g   │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢                        ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║  String   ║           ║  String   ║                        ┊   None    ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │     head                                                         ↑   ↑
//! └──────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                          │
//! ║   ghost   ║ ─────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║   arena   ║
//! ╟───────────╢
//! ║  config   ║
//! ╚═══════════╝
//!     Queue
//! ```
//! The `Queue` contains:
//! - the key `ghost` of the ghost node;
//! - the arena holding every node;
//! - the [`QueueConfig`] it was built with.
//!
//! The ghost node carries no string. In an empty queue its `next` and `prev`
//! keys point to itself; otherwise `ghost.next` is the head and `ghost.prev`
//! the tail of the queue. No length is cached, so [`Queue::size`] walks the
//! ring.
//!
//! # Errors
//!
//! Insertion reports [`QueueError::AllocationFailure`] when the string cannot
//! be stored, either because its storage cannot be reserved or because the
//! queue is bounded by [`QueueConfig::with_max_len`] and full. The queue is
//! left unchanged then.
//!
//! ```
//! use string_queue::{Queue, QueueConfig, QueueError};
//!
//! let mut queue = Queue::with_config(QueueConfig::new().with_max_len(1)).unwrap();
//! queue.insert_tail("a").unwrap();
//! assert!(matches!(
//!     queue.insert_tail("b"),
//!     Err(QueueError::AllocationFailure(_))
//! ));
//! assert_eq!(queue.to_vec(), vec!["a"]);
//! ```
//!
//! # Merging Queues
//!
//! A [`Chain`] owns several queues and merges them all into its first one.
//!
//! ```
//! use string_queue::{Chain, Queue};
//!
//! let mut chain = Chain::new();
//! chain.push(Queue::from(["c", "a"]));
//! chain.push(Queue::from(["b"]));
//! assert_eq!(chain.merge(false), Ok(3));
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod queue;

mod ring;

#[doc(inline)]
pub use chain::{Chain, QueueContext};
#[doc(inline)]
pub use config::QueueConfig;
#[doc(inline)]
pub use error::{QueueError, Result};
#[doc(inline)]
pub use queue::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use queue::{Element, Queue};
