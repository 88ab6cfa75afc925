//! A stack backed by a singly linked list. Only the head of the list is ever touched so `push`,
//! `pop` and `peek` are all `O(1)`.
//!
//! # Examples
//!
//! ```
//! use dstruct::linked_stack::LinkedStack;
//! use dstruct::stack::Stack;
//!
//! let mut stack = LinkedStack::new();
//! stack.push("a");
//! stack.push("b");
//!
//! assert_eq!(stack.to_string(), "top <- b <- a");
//! assert_eq!(stack.pop(), Ok("b"));
//! assert_eq!(stack.peek(), Ok(&"a"));
//! ```

use std::fmt;

use crate::error::{Error, Operation, Result};
use crate::stack::Stack;
use crate::util;

/// A [`Stack`] whose values live in a chain of nodes hanging off `top`.
pub struct LinkedStack<T> {
    top: Link<T>,
    /// Number of nodes reachable from `top`.
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    /// The node below this one. `None` on the bottom node.
    next: Link<T>,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> LinkedStack<T> {
    /// Generates a new, empty stack.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
            len: self.len,
        }
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        // Unlink one node at a time so dropping a long chain doesn't recurse.
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
    }

    fn pop(&mut self) -> Result<T> {
        let node = self.top.take().ok_or(Error::empty_stack(Operation::Pop))?;
        let Node { value, next } = *node;
        self.top = next;
        self.len -= 1;
        Ok(value)
    }

    fn peek(&self) -> Result<&T> {
        self.top
            .as_ref()
            .map(|node| &node.value)
            .ok_or(Error::empty_stack(Operation::Peek))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T> fmt::Display for LinkedStack<T>
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

impl<T> fmt::Debug for LinkedStack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Clone for LinkedStack<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // `iter` runs top to bottom so pushing in that order would flip the stack.
        let values: Vec<_> = self.iter().collect();
        values.into_iter().rev().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Collecting pushes the values in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterates over a [`LinkedStack`] from top to bottom. Created by [`LinkedStack::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.len -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
