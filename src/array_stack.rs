//! A stack backed by a contiguous buffer that doubles its capacity whenever it fills up.
//!
//! # Examples
//!
//! ```
//! use dstruct::array_stack::ArrayStack;
//! use dstruct::stack::Stack;
//!
//! let mut stack = ArrayStack::with_capacity(2);
//! stack.push(10);
//! stack.push(20);
//! assert_eq!(stack.capacity(), 2);
//!
//! // The third push doesn't fit so the buffer doubles first.
//! stack.push(30);
//! assert_eq!(stack.capacity(), 4);
//!
//! assert_eq!(stack.to_string(), "top <- 30 <- 20 <- 10");
//! assert_eq!(stack.pop(), Ok(30));
//! ```

use std::fmt;
use std::iter::Rev;
use std::slice;

use crate::error::{Error, Operation, Result};
use crate::stack::Stack;
use crate::util;

/// The capacity of a stack built with [`ArrayStack::new`].
pub const DEFAULT_CAPACITY: usize = 5;

/// A [`Stack`] storing its values bottom to top in a single buffer.
///
/// `push` is amortized `O(1)`; every other operation except rendering is `O(1)`.
pub struct ArrayStack<T> {
    items: Vec<T>,
    /// How many values fit before the buffer has to grow. Never shrinks.
    capacity: usize,
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayStack<T> {
    /// Generates a new, empty stack with room for [`DEFAULT_CAPACITY`] values.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Generates a new, empty stack with room for `capacity` values. A capacity of zero is
    /// treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// How many values the stack can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.items.iter().rev())
    }

    /// Drops every value. The capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Moves everything into a buffer twice the size.
    fn grow(&mut self) {
        let capacity = self.capacity * 2;
        tracing::debug!(from = self.capacity, to = capacity, "growing array stack");

        let mut items = Vec::with_capacity(capacity);
        items.extend(self.items.drain(..));
        self.items = items;
        self.capacity = capacity;
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(value);

        debug_assert!(self.items.len() <= self.capacity);
    }

    fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::empty_stack(Operation::Pop))
    }

    fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::empty_stack(Operation::Peek))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T> fmt::Display for ArrayStack<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("stack is empty");
        }
        util::write_chain(f, "top", self.iter(), None)
    }
}

impl<T> fmt::Debug for ArrayStack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

impl<T> Clone for ArrayStack<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Collecting pushes the values in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterates over an [`ArrayStack`] from top to bottom. Created by [`ArrayStack::iter`].
#[derive(Debug)]
pub struct Iter<'a, T>(Rev<slice::Iter<'a, T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
