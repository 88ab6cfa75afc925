//! The stack capability shared by [`ArrayStack`] and [`LinkedStack`].
//!
//! # Examples
//!
//! ```
//! use dstruct::stack::{Stack, StackKind};
//!
//! for kind in [StackKind::default(), StackKind::Linked] {
//!     let mut stack = kind.build();
//!     stack.push(10);
//!     stack.push(20);
//!
//!     assert_eq!(stack.peek(), Ok(&20));
//!     assert_eq!(stack.pop(), Ok(20));
//!     assert_eq!(stack.pop(), Ok(10));
//!     assert!(stack.pop().is_err());
//! }
//! ```

use std::fmt;

use crate::array_stack::{ArrayStack, DEFAULT_CAPACITY};
use crate::error::Result;
use crate::linked_stack::LinkedStack;

/// A last-in-first-out collection.
pub trait Stack<T> {
    /// Puts `value` on top of the stack.
    fn push(&mut self, value: T);

    /// Removes and returns the top of the stack. Fails with
    /// [`Error::EmptyStructure`](crate::Error::EmptyStructure) when the stack is empty.
    fn pop(&mut self) -> Result<T>;

    /// Returns the top of the stack without removing it. Fails with
    /// [`Error::EmptyStructure`](crate::Error::EmptyStructure) when the stack is empty.
    fn peek(&self) -> Result<&T>;

    /// How many values are on the stack.
    fn len(&self) -> usize;

    /// Whether the stack holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the stack from top to bottom, e.g. `top <- 3 <- 2 <- 1`.
    fn render(&self) -> String
    where
        T: fmt::Display;

    /// Prints [`render`](Stack::render) to standard output.
    fn display(&self)
    where
        T: fmt::Display,
    {
        println!("{}", self.render());
    }
}

/// Selects which [`Stack`] implementation [`StackKind::build`] constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    /// An [`ArrayStack`] starting with the given capacity.
    Array {
        /// The initial capacity of the buffer.
        capacity: usize,
    },
    /// A [`LinkedStack`].
    Linked,
}

impl Default for StackKind {
    fn default() -> Self {
        Self::Array {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StackKind {
    /// Constructs an empty stack of this kind.
    pub fn build<T: 'static>(self) -> Box<dyn Stack<T>> {
        match self {
            Self::Array { capacity } => Box::new(ArrayStack::with_capacity(capacity)),
            Self::Linked => Box::new(LinkedStack::new()),
        }
    }
}
