// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::LinkedList;

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use lifostack::runtime::{sum_zero_1, sum_zero_2, sum_zero_3};
use lifostack::{Stack, Storage};

const SIZES: &[usize] = &[1024, 2048, 4096, 8192, 16384, 32768, 65536, 131_072];
const PAIR_SIZES: &[usize] = &[10, 20, 40, 80];

pub fn push_pop<S: Storage<usize>>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push", size), size, |b, &size| {
            b.iter_batched_ref(
                Stack::<usize, S>::default,
                |stack| {
                    for i in 0..size {
                        stack.push(i);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("drain", size), size, |b, &size| {
            b.iter_batched_ref(
                || (0..size).collect::<Stack<usize, S>>(),
                |stack| {
                    for item in stack.drain() {
                        black_box(item);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn count<S: Storage<usize>>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("len", size), size, |b, &size| {
            let stack: Stack<usize, S> = (0..size).collect();
            b.iter(|| black_box(stack.len()))
        });
        group.bench_with_input(BenchmarkId::new("length", size), size, |b, &size| {
            let mut stack: Stack<usize, S> = (0..size).collect();
            b.iter(|| black_box(stack.length()))
        });
        group.bench_with_input(BenchmarkId::new("is_empty", size), size, |b, &size| {
            let mut stack: Stack<usize, S> = (0..size).collect();
            b.iter(|| black_box(stack.is_empty()))
        });
    }
    group.finish();
}

fn sum_zero(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_zero");
    for k in PAIR_SIZES {
        let mut numbers = vec![1i64; *k];
        numbers.extend(vec![-1i64; *k]);
        group.bench_with_input(BenchmarkId::new("set", k), &numbers, |b, numbers| {
            b.iter(|| sum_zero_1(black_box(numbers)))
        });
        group.bench_with_input(BenchmarkId::new("quadratic", k), &numbers, |b, numbers| {
            b.iter(|| sum_zero_2(black_box(numbers)))
        });
        group.bench_with_input(BenchmarkId::new("mirror", k), &numbers, |b, numbers| {
            b.iter(|| sum_zero_3(black_box(numbers)))
        });
    }
    group.finish();
}

fn push_pop_vec(c: &mut Criterion) {
    push_pop::<Vec<usize>>("push_pop/vec", c)
}

fn push_pop_linked_list(c: &mut Criterion) {
    push_pop::<LinkedList<usize>>("push_pop/linked_list", c)
}

fn count_vec(c: &mut Criterion) {
    count::<Vec<usize>>("count/vec", c)
}

fn count_linked_list(c: &mut Criterion) {
    count::<LinkedList<usize>>("count/linked_list", c)
}

criterion_group!(
    stack,
    push_pop_vec,
    push_pop_linked_list,
    count_vec,
    count_linked_list,
    sum_zero
);
criterion_main!(stack);
