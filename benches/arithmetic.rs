//! Benchmarks for arithmetic and square root extraction

extern crate criterion;
extern crate oorandom;
extern crate sqrt_digits;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sqrt_digits::{sqrt_digits_with_context, BigUnsigned, Context, DigitSearch, SqrtDigits};

mod common;
use common::*;

criterion_main!(
    arithmetic,
    square_root,
);

criterion_group!(
    name = arithmetic;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        bench_addition,
        bench_multiplication,
        bench_decimal_conversion,
);

criterion_group!(
    name = square_root;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7))
                       .sample_size(50);
    targets =
        bench_digit_search,
        bench_bounded_precision,
);


fn bench_addition(c: &mut Criterion) {
    let values = random_bigunsigneds(40, 8, 0x6a5f);
    let pairs = make_random_pairs(&values, 7);

    c.bench_function("addition-8-limbs", |b| {
        b.iter(|| {
            for &(x, y) in pairs.iter() {
                black_box(x + y);
            }
        })
    });
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");
    for &limb_count in [1usize, 4, 16, 64].iter() {
        let values = random_bigunsigneds(20, limb_count, limb_count as u64);
        let pairs = make_random_pairs(&values, 11);
        group.bench_with_input(BenchmarkId::from_parameter(limb_count), &pairs, |b, pairs| {
            b.iter(|| {
                for &(x, y) in pairs.iter() {
                    black_box(x * y);
                }
            })
        });
    }
    group.finish();
}

fn bench_decimal_conversion(c: &mut Criterion) {
    let values = random_bigunsigneds(10, 32, 0xdec);
    let strings: Vec<String> = values.iter().map(|v| v.to_string()).collect();

    c.bench_function("to_string-32-limbs", |b| {
        b.iter(|| {
            for v in values.iter() {
                black_box(v.to_string());
            }
        })
    });

    c.bench_function("parse-32-limbs", |b| {
        b.iter(|| {
            for s in strings.iter() {
                black_box(s.parse::<BigUnsigned>().unwrap());
            }
        })
    });
}

fn bench_digit_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt-2-stream-200");
    for &search in [DigitSearch::Linear, DigitSearch::Dichotomic].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", search)), &search, |b, &search| {
            b.iter(|| {
                let digits: String = SqrtDigits::with_search(2u8, search).take(200).collect();
                black_box(digits)
            })
        });
    }
    group.finish();
}

fn bench_bounded_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt-42-bounded");
    for &precision in [10u64, 100, 500].iter() {
        let ctx = Context::new(precision);
        group.bench_with_input(BenchmarkId::from_parameter(precision), &ctx, |b, ctx| {
            b.iter(|| black_box(sqrt_digits_with_context(42, ctx).unwrap()))
        });
    }
    group.finish();
}
