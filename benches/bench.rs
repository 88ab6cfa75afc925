use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dstruct::queue::{LinkedQueue, Queue};
use dstruct::stack::{Stack, StackKind};

/// Helper to bench a function on a stack.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// implementations of stacks before finishing the group.
fn bench_stack(c: &mut Criterion, name: &str, f: impl Fn(&mut dyn Stack<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_elements in [8, 128, 2048, 32768] {
        let stack_tests = [
            ("array", StackKind::default()),
            ("linked", StackKind::Linked),
        ];
        for (name, kind) in stack_tests {
            let id = BenchmarkId::new(name, num_elements);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut stack = kind.build();
                        let instant = std::time::Instant::now();
                        f(stack.as_mut(), black_box(num_elements));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

fn bench_queue(c: &mut Criterion, name: &str, f: impl Fn(&mut LinkedQueue<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_elements in [8, 128, 2048, 32768] {
        let id = BenchmarkId::new("linked", num_elements);

        group.bench_function(id, |b| {
            b.iter(|| {
                let mut queue = LinkedQueue::new();
                f(&mut queue, black_box(num_elements));
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_stack(c, "push", |stack, n| {
        for x in 0..n {
            stack.push(x);
        }
    });
    bench_stack(c, "push-pop", |stack, n| {
        for x in 0..n {
            stack.push(x);
        }
        while let Ok(x) = stack.pop() {
            black_box(x);
        }
    });

    bench_queue(c, "enqueue", |queue, n| {
        for x in 0..n {
            queue.enqueue(x);
        }
    });
    bench_queue(c, "enqueue-dequeue", |queue, n| {
        for x in 0..n {
            queue.enqueue(x);
        }
        while let Ok(x) = queue.dequeue() {
            black_box(x);
        }
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
