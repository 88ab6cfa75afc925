//! A first-in-first-out queue backed by a doubly linked list.
//!
//! The list keeps pointers to both ends so `enqueue` (at the tail) and `dequeue` (at the head) are
//! `O(1)`. Each node points at its neighbours in both directions, which lets the queue be walked
//! from either end.
//!
//! # Examples
//!
//! ```
//! use dstruct::queue::{LinkedQueue, Queue};
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//!
//! assert_eq!(queue.to_string(), "start <- 1 <- 2 <- 3 <- end");
//! assert_eq!(queue.peek(), Ok(&1));
//! assert_eq!(queue.dequeue(), Ok(1));
//!
//! // Walking backwards follows the `prev` links.
//! assert_eq!(queue.iter().rev().collect::<Vec<_>>(), vec![&3, &2]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Operation, Result};
use crate::util;

/// A first-in-first-out collection.
pub trait Queue<T> {
    /// Adds `value` at the back of the queue.
    fn enqueue(&mut self, value: T);

    /// Removes and returns the value at the front of the queue. Fails with
    /// [`Error::EmptyStructure`] when the queue is empty.
    fn dequeue(&mut self) -> Result<T>;

    /// Returns the value at the front of the queue without removing it. Fails with
    /// [`Error::EmptyStructure`] when the queue is empty.
    fn peek(&self) -> Result<&T>;

    /// How many values are queued.
    fn len(&self) -> usize;

    /// Whether the queue holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the queue from front to back, e.g. `start <- 1 <- 2 <- end`.
    fn render(&self) -> String
    where
        T: fmt::Display;

    /// Prints [`render`](Queue::render) to standard output.
    fn display(&self)
    where
        T: fmt::Display,
    {
        println!("{}", self.render());
    }
}

/// A [`Queue`] over a doubly linked list.
///
/// Either both `head` and `tail` are `None` or both are `Some`. Following `next` from `head`
/// reaches `tail` in `len - 1` steps and following `prev` from `tail` walks the same nodes in
/// reverse.
pub struct LinkedQueue<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    /// The queue owns its nodes even though it only holds pointers to them.
    marker: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> LinkedQueue<T> {
    /// Generates a new, empty queue.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Iterates from the front of the queue to the back. The iterator is double ended; walking it
    /// backwards follows the `prev` links from the tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Unlinks the head node and hands back its value.
    fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` was allocated by `Box::new` in `enqueue` and leaked into the list.
            // We're about to overwrite every pointer to it (`self.head` here, `self.tail` or the
            // new head's `prev` below), so rebuilding the `Box` gives us sole ownership.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            match self.head {
                // That was the only node.
                None => self.tail = None,
                // SAFETY: `new_head` is a live node owned by this list and no references into
                // the list outlive `&mut self`.
                Some(mut new_head) => unsafe { new_head.as_mut().prev = None },
            }
            self.len -= 1;

            if cfg!(debug_assertions) {
                assert_eq!(self.head.is_none(), self.tail.is_none());
                assert_eq!(self.head.is_none(), self.len == 0);
            }
            node.value
        })
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: self.tail,
            next: None,
        })));
        match self.tail {
            None => self.head = Some(node),
            // SAFETY: `tail` is a live node owned by this list and no references into the list
            // outlive `&mut self`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
        }
        self.tail = Some(node);
        self.len += 1;
    }

    fn dequeue(&mut self) -> Result<T> {
        self.pop_front().ok_or(Error::empty_queue(Operation::Dequeue))
    }

    fn peek(&self) -> Result<&T> {
        self.head
            // SAFETY: `head` is a live node owned by this list. The returned reference borrows
            // `self` so the node can't be freed while it's in use.
            .map(|head| unsafe { &(*head.as_ptr()).value })
            .ok_or(Error::empty_queue(Operation::Peek))
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

impl<T> fmt::Display for LinkedQueue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("queue is empty");
        }
        util::write_chain(f, "start", self.iter(), Some("end"))
    }
}

impl<T> fmt::Debug for LinkedQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Clone for LinkedQueue<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterates over a [`LinkedQueue`] from front to back (or back to front with
/// [`DoubleEndedIterator`]). Created by [`LinkedQueue::iter`].
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    /// Nodes not yet yielded from either end. The ends meet when this reaches zero.
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|head| {
            // SAFETY: `len > 0` so `head` hasn't been yielded yet and is a live node of a list
            // borrowed for `'a`.
            let node = unsafe { &*head.as_ptr() };
            self.head = node.next;
            self.len -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|tail| {
            // SAFETY: See `next`.
            let node = unsafe { &*tail.as_ptr() };
            self.tail = node.prev;
            self.len -= 1;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
