//! Interactive demo on a host terminal.
//!
//! Reads stdin byte by byte, feeds the interpreter and ticks it after every
//! byte, the same way a firmware main loop would poll a UART. Run it with the
//! terminal in raw mode (`stty raw -echo`) to get the device experience, or
//! pipe commands in:
//!
//! ```text
//! printf 'printhex 255\rcntarr {DE AD}\r' | cargo run
//! ```

use core::fmt::Write as _;
use std::io::Read;

use libcli::argument::{
    Argument, ArgumentType, put_byte_hex, put_unsigned_decimal, put_unsigned_hex,
};
use libcli::config::Config;
use libcli::error::Error;
use libcli::interpreter::Interpreter;
use libcli::line::LineBuffer;
use libcli::registry::{Command, HandlerResult, MatchMode};
use libcli::sink::{FmtSink, IoSink, Sink};

const LINE_SIZE: usize = 128;
const MAX_BYTES: usize = 32;

fn hello_world(_args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    out.write(b"hello world!\n");
    Ok(())
}

fn ping(_args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    out.write(b"pong!\n");
    Ok(())
}

fn arg_print(args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    for (i, arg) in args.iter().enumerate() {
        write!(
            FmtSink(&mut *out),
            "Argument [{i}]: {} ({})\n\r",
            arg.as_str().unwrap_or("<binary>"),
            arg.kind().name()
        )
        .map_err(|_| Error::ExecutionFailed)?;
    }
    Ok(())
}

/// Decimal and hex literals as a native unsigned value. Negative numbers are
/// reinterpreted, so `-1` prints as the largest value.
fn number(args: &[Argument<'_>]) -> Result<u32, Error> {
    let arg = args.first().ok_or(Error::InvalidArgument)?;
    let value = match arg.kind() {
        ArgumentType::SignedDecimal => arg.to_i32().map(|n| n as u32),
        ArgumentType::UnsignedDecimal | ArgumentType::HexLiteral => arg.to_u32(),
        _ => None,
    };
    value.ok_or(Error::InvalidArgument)
}

fn print_dec(args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    put_unsigned_decimal(out, number(args)?);
    Ok(())
}

fn print_hex(args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    put_unsigned_hex(out, number(args)?);
    Ok(())
}

fn array_counter(args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    let bytes = args
        .first()
        .and_then(|arg| arg.to_bytes::<MAX_BYTES>())
        .ok_or(Error::InvalidArgument)?;

    out.write(b"num elements: ");
    put_unsigned_decimal(out, bytes.len() as u32);
    for (i, &byte) in bytes.iter().enumerate() {
        out.write(b"\r\n [");
        put_unsigned_decimal(out, i as u32);
        out.write(b"]: ");
        put_byte_hex(out, byte);
    }
    Ok(())
}

static COMMANDS: [Command<'static>; 6] = [
    Command::new("helloworld", "prints a simple Hello World", &hello_world),
    Command::new("ping", "prints a pong!", &ping),
    Command::new("argprint", "prints out all given args", &arg_print),
    Command::new(
        "printhex",
        "prints out a given argument as a hexadecimal Value",
        &print_hex,
    ),
    Command::new(
        "printdec",
        "prints out a given decimal argument as a decimal Value",
        &print_dec,
    ),
    Command::new(
        "cntarr",
        "prints out the number of elements in a given Byte Array",
        &array_counter,
    ),
];

fn main() {
    let config = Config {
        echo: true,
        prompt: Some("\n\r$> "),
        match_mode: MatchMode::Exact,
        help: true,
    };

    let mut line = LineBuffer::<LINE_SIZE>::new();
    let mut cli: Interpreter<'_, _, LINE_SIZE> =
        Interpreter::with_config(&mut line, IoSink(std::io::stdout()), config);
    cli.registry_mut()
        .register_all(&COMMANDS)
        .expect("Failed to register commands");
    cli.reset();
    cli.tick();

    for byte in std::io::stdin().lock().bytes() {
        let Ok(byte) = byte else { break };
        cli.feed(byte);
        cli.tick();
    }
}
