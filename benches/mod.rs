use criterion::{criterion_group, criterion_main};

mod cli;

criterion_group!(
    benches,
    cli::tokenizer::bench_split,
    cli::tokenizer::bench_split_quoted,
    cli::argument::bench_classify,
    cli::argument::bench_parse_byte_array,
    cli::argument::bench_put_unsigned_decimal,
    cli::dispatch::bench_dispatch_prefix,
    cli::dispatch::bench_dispatch_exact
);
criterion_main!(benches);
