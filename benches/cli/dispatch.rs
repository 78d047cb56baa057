use criterion::{Criterion, Throughput};
use libcli::argument::Argument;
use libcli::interpreter::Interpreter;
use libcli::line::LineBuffer;
use libcli::registry::{Command, HandlerResult, MatchMode};
use libcli::sink::{OutputFn, Sink};
use std::hint::black_box;

fn noop(args: &[Argument<'_>], _out: &mut dyn Sink) -> HandlerResult {
    black_box(args.len());
    Ok(())
}

static COMMANDS: [Command<'static>; 8] = [
    Command::new("helloworld", "prints a simple Hello World", &noop),
    Command::new("ping", "prints a pong!", &noop),
    Command::new("argprint", "prints every argument", &noop),
    Command::new("printhex", "prints a hexadecimal value", &noop),
    Command::new("printdec", "prints a decimal value", &noop),
    Command::new("cntarr", "counts byte array elements", &noop),
    Command::new("reboot", "restarts the device", &noop),
    Command::new("status", "prints the device status", &noop),
];

fn dispatch(c: &mut Criterion, name: &str, mode: MatchMode) {
    // Last registered command, so lookup walks the whole registry
    let line = b"status verbose 0x10\r";

    let mut buffer = LineBuffer::<64>::new();
    let mut cli: Interpreter<'_, OutputFn, 64> =
        Interpreter::new(&mut buffer, |bytes: &[u8]| bytes.len());
    cli.set_match_mode(mode);
    cli.registry_mut()
        .register_all(&COMMANDS)
        .expect("Failed to register");

    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function(name, |b| b.iter(|| black_box(cli.input(black_box(line)))));
    group.finish();
}

pub fn bench_dispatch_prefix(c: &mut Criterion) {
    dispatch(c, "dispatch_prefix", MatchMode::Prefix);
}

pub fn bench_dispatch_exact(c: &mut Criterion) {
    dispatch(c, "dispatch_exact", MatchMode::Exact);
}
