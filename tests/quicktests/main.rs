#[macro_use(quickcheck)]
extern crate quickcheck_macros;

#[path = "../../src/test/quick.rs"]
mod quick;

pub(crate) use quick::{Op, QueueOp, StackOp};

mod queue;
mod stack;
mod tree;
