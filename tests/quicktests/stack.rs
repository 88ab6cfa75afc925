use dstruct::stack::{Stack, StackKind};

use crate::StackOp;

/// Applies a set of operations to a stack and to a `Vec` used as a model, checking every result
/// against the model along the way.
fn do_ops<T>(ops: &[StackOp<T>], stack: &mut dyn Stack<T>, model: &mut Vec<T>) -> bool
where
    T: Clone + PartialEq,
{
    for op in ops {
        let agrees = match op {
            StackOp::Push(value) => {
                stack.push(value.clone());
                model.push(value.clone());
                true
            }
            StackOp::Pop => stack.pop().ok() == model.pop(),
            StackOp::Peek => stack.peek().ok() == model.last(),
        };
        if !agrees || stack.len() != model.len() || stack.is_empty() != model.is_empty() {
            return false;
        }
    }
    true
}

fn kinds() -> [StackKind; 3] {
    [
        StackKind::default(),
        StackKind::Array { capacity: 1 },
        StackKind::Linked,
    ]
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<StackOp<i8>>) -> bool {
    kinds().iter().all(|kind| {
        let mut stack = kind.build();
        let mut model = Vec::new();
        do_ops(&ops, stack.as_mut(), &mut model)
    })
}

#[quickcheck]
fn pops_reverse_pushes(xs: Vec<i32>) -> bool {
    kinds().iter().all(|kind| {
        let mut stack = kind.build();
        for x in &xs {
            stack.push(*x);
        }
        let popped: Vec<_> = xs.iter().map(|_| stack.pop().ok()).collect();
        let expected: Vec<_> = xs.iter().rev().copied().map(Some).collect();

        popped == expected && stack.is_empty() && stack.pop().is_err()
    })
}

#[quickcheck]
fn render_lists_top_first(xs: Vec<u8>) -> bool {
    kinds().iter().all(|kind| {
        let mut stack = kind.build();
        for x in &xs {
            stack.push(*x);
        }
        let expected = if xs.is_empty() {
            "stack is empty".to_string()
        } else {
            xs.iter()
                .rev()
                .fold("top".to_string(), |acc, x| format!("{} <- {}", acc, x))
        };

        stack.render() == expected
    })
}
