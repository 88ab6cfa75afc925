//! Errors returned by the structures in this crate.
//!
//! Every error is local to the call that produced it: the structure is left exactly as it was
//! before the failing call.

use std::fmt;

use thiserror::Error;

/// Shorthand for results whose error is [`enum@Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors a structure can report.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A stack or queue was asked for an element while holding none.
    #[error("{structure} is empty; {operation}")]
    EmptyStructure {
        /// Which kind of structure was empty.
        structure: Structure,
        /// What the caller tried to do.
        operation: Operation,
    },
    /// A tree was asked for an extreme key while holding none.
    #[error("tree is empty; {operation}")]
    EmptyTree {
        /// What the caller tried to do.
        operation: Operation,
    },
}

impl Error {
    pub(crate) fn empty_stack(operation: Operation) -> Self {
        Self::EmptyStructure {
            structure: Structure::Stack,
            operation,
        }
    }

    pub(crate) fn empty_queue(operation: Operation) -> Self {
        Self::EmptyStructure {
            structure: Structure::Queue,
            operation,
        }
    }
}

/// The kinds of linear structure that can report [`Error::EmptyStructure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// Any [`Stack`](crate::stack::Stack) implementation.
    Stack,
    /// Any [`Queue`](crate::queue::Queue) implementation.
    Queue,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stack => f.write_str("stack"),
            Self::Queue => f.write_str("queue"),
        }
    }
}

/// The operation that failed. Its `Display` completes the sentence started by the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Removing the top of a stack.
    Pop,
    /// Looking at the next element without removing it.
    Peek,
    /// Removing the head of a queue.
    Dequeue,
    /// Looking up the smallest key of a tree.
    FindMinimum,
    /// Looking up the largest key of a tree.
    FindMaximum,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pop => f.write_str("pop not possible"),
            Self::Peek => f.write_str("nothing to peek"),
            Self::Dequeue => f.write_str("nothing to dequeue"),
            Self::FindMinimum => f.write_str("no minimum key"),
            Self::FindMaximum => f.write_str("no maximum key"),
        }
    }
}
