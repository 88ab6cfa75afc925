use dstruct::queue::{LinkedQueue, Queue};

use std::collections::VecDeque;

use crate::QueueOp;

/// Applies a set of operations to a queue and to a `VecDeque` used as a model, checking every
/// result against the model along the way.
fn do_ops<T>(ops: &[QueueOp<T>], queue: &mut LinkedQueue<T>, model: &mut VecDeque<T>) -> bool
where
    T: Clone + PartialEq,
{
    for op in ops {
        let agrees = match op {
            QueueOp::Enqueue(value) => {
                queue.enqueue(value.clone());
                model.push_back(value.clone());
                true
            }
            QueueOp::Dequeue => queue.dequeue().ok() == model.pop_front(),
            QueueOp::Peek => queue.peek().ok() == model.front(),
        };
        if !agrees || queue.len() != model.len() || queue.is_empty() != model.is_empty() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<QueueOp<i8>>) -> bool {
    let mut queue = LinkedQueue::new();
    let mut model = VecDeque::new();

    do_ops(&ops, &mut queue, &mut model) && queue.iter().eq(model.iter())
}

#[quickcheck]
fn dequeues_match_enqueues(xs: Vec<i32>) -> bool {
    let mut queue: LinkedQueue<_> = xs.iter().copied().collect();
    let dequeued: Vec<_> = xs.iter().map(|_| queue.dequeue().ok()).collect();
    let expected: Vec<_> = xs.iter().copied().map(Some).collect();

    dequeued == expected && queue.is_empty() && queue.dequeue().is_err()
}

#[quickcheck]
fn backward_links_mirror_forward_links(ops: Vec<QueueOp<i8>>) -> bool {
    let mut queue = LinkedQueue::new();
    let mut model = VecDeque::new();
    do_ops(&ops, &mut queue, &mut model);

    let forward: Vec<_> = queue.iter().collect();
    let mut backward: Vec<_> = queue.iter().rev().collect();
    backward.reverse();

    forward == backward && forward.len() == queue.len()
}
