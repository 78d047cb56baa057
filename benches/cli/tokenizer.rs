use criterion::{BatchSize, Criterion, Throughput};
use libcli::tokenizer::{Arguments, Tokenizer};
use std::hint::black_box;

fn split_line(c: &mut Criterion, name: &str, line: &[u8]) {
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function(name, |b| {
        b.iter_batched_ref(
            || {
                let mut buf = line.to_vec();
                buf.push(0);
                buf
            },
            |buf| {
                let args: Arguments<'_> = Tokenizer::split(buf);
                black_box(args.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_split(c: &mut Criterion) {
    split_line(c, "split", b"printhex 0x1A2B 42 -7 0b1010 {DE AD BE EF}");
}

pub fn bench_split_quoted(c: &mut Criterion) {
    split_line(
        c,
        "split_quoted",
        b"argprint \"first quoted argument\" 'second one' plain \"and a last one\"",
    );
}
