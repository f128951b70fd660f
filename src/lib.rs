//! Singly linked list with the classic teaching operations: build from a
//! counted input, insert and delete at either end or at a position, delete
//! by value, reverse, count, search and find the middle element.
//!
//! ```
//! use singly_linked::LinkedList;
//!
//! let mut list = LinkedList::construct(3, [10, 20, 30]).unwrap();
//! list.insert_at_position(99, 1).unwrap();
//! assert_eq!(vec![10, 99, 20, 30], list.iter().copied().collect::<Vec<_>>());
//! assert_eq!(Ok(&20), list.find_middle());
//! ```

pub mod config;
pub mod error;
pub mod linked_list;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::{ListConfig, PositionPolicy};
pub use error::{ListError, Result};
pub use linked_list::{IntoIter, Iter, IterMut, LinkedList};
pub use session::ListSession;
