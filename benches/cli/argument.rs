use criterion::{Criterion, Throughput};
use libcli::argument::{classify, parse_byte_array, put_unsigned_decimal};
use std::hint::black_box;

pub fn bench_classify(c: &mut Criterion) {
    let inputs: [&[u8]; 6] = [
        b"0xDEADBEEF",
        b"0b10101010",
        b"-2147483648",
        b"4294967295",
        b"{01 02 03 04}",
        b"not-a-number",
    ];

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("classify", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(classify(black_box(input)));
            }
        })
    });
    group.finish();
}

pub fn bench_parse_byte_array(c: &mut Criterion) {
    let input = b"{00 11 22 33 44 55 66 77 88 99 AA BB CC DD EE FF}";

    let mut group = c.benchmark_group("parse_byte_array");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("parse_byte_array", |b| {
        let mut out = [0u8; 16];
        b.iter(|| black_box(parse_byte_array(black_box(input), &mut out)))
    });
    group.finish();
}

pub fn bench_put_unsigned_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_unsigned_decimal");
    group.bench_function("put_unsigned_decimal", |b| {
        let mut out = heapless::Vec::<u8, 16>::new();
        b.iter(|| {
            out.clear();
            put_unsigned_decimal(&mut out, black_box(u32::MAX));
        })
    });
    group.finish();
}
