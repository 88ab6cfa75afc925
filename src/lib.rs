//! This crate exposes a handful of classic data structures, mostly for educational purposes: two
//! stacks, a queue, and a Binary Search Tree (BST).
//!
//! ## Stacks and queues
//!
//! A stack hands values back in the reverse of the order they were pushed (last in, first out).
//! A queue hands them back in the same order (first in, first out). Both are exposed as traits
//! ([`Stack`] and [`Queue`]) so the storage strategy can be chosen when the structure is built:
//!
//! - [`ArrayStack`] keeps its values in a buffer that doubles whenever it fills up, making `push`
//!   amortized `O(1)`.
//! - [`LinkedStack`] keeps a singly linked list and only ever touches its head.
//! - [`LinkedQueue`] keeps a doubly linked list with pointers to both ends.
//!
//! Asking an empty stack or queue for a value fails with [`Error::EmptyStructure`] and leaves the
//! structure untouched.
//!
//! ## Binary Search Tree
//!
//! A BST stores keys in `Node`s, each of which may have a left and a right child. The important
//! invariants are:
//!
//! 1. For every `Node`, all the keys in its left subtree are less than its own key.
//! 2. For every `Node`, all the keys in its right subtree are greater than its own key.
//!
//! Searching therefore takes `O(height)`. [`Tree`] does no balancing, so its height (and its
//! speed) depends on the order keys arrive in: inserting sorted keys degrades it to a list.
//! Visiting the left subtree, then the node, then the right subtree yields the keys sorted.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod array_stack;
pub mod error;
pub mod linked_stack;
pub mod queue;
pub mod stack;
pub mod tree;
mod util;

pub use array_stack::ArrayStack;
pub use error::{Error, Result};
pub use linked_stack::LinkedStack;
pub use queue::{LinkedQueue, Queue};
pub use stack::{Stack, StackKind};
pub use tree::Tree;
