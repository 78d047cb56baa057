//! Argument classification and literal conversion.
//!
//! Handlers receive their arguments as raw byte strings. This module decides
//! which literal category an argument belongs to ([`classify`]) and converts
//! it into a number or a byte array.
//!
//! # Literal Categories
//!
//! | Text           | [`ArgumentType`]                   |
//! |----------------|------------------------------------|
//! | `0b1010`       | [`ArgumentType::BinaryLiteral`]    |
//! | `0x1A2B`       | [`ArgumentType::HexLiteral`]       |
//! | `{DE AD BE EF}`| [`ArgumentType::ByteArray`]        |
//! | `-42`, `+7`    | [`ArgumentType::SignedDecimal`]    |
//! | `42`           | [`ArgumentType::UnsignedDecimal`]  |
//! | anything else  | [`ArgumentType::Undefined`]        |
//!
//! The free conversion functions are format-matched to these categories and
//! do no validation of their own: feeding them text of another category
//! yields an unspecified number, never a panic. [`Argument`] wraps the
//! classify-then-convert sequence into checked accessors.
//!
//! ```rust
//! use libcli::argument::{classify, parse_unsigned_hex, Argument, ArgumentType};
//!
//! assert_eq!(classify(b"0x1A2B"), ArgumentType::HexLiteral);
//! assert_eq!(parse_unsigned_hex(b"0x1A2B"), 0x1A2B);
//!
//! let arg = Argument::new(b"{AA BB CC}");
//! let bytes = arg.to_bytes::<8>().unwrap();
//! assert_eq!(&bytes[..], &[0xAA, 0xBB, 0xCC]);
//! ```

pub(crate) mod ascii;
pub mod print;


use ascii::{NUL, all_digits, hex_value, is_bin_digit, terminated_len};

pub use print::{put_byte_hex, put_nibble_hex, put_unsigned_decimal, put_unsigned_hex};

/// Number of hex digits in the native unsigned width.
const NIBBLES: usize = (u32::BITS / 4) as usize;

/// Literal category of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentType {
    /// Decimal integer with a leading `-` or `+`.
    SignedDecimal,
    /// Decimal integer without sign.
    UnsignedDecimal,
    /// `0b` followed by binary digits.
    BinaryLiteral,
    /// `0x` followed by hex digits.
    HexLiteral,
    /// Hex bytes enclosed in braces, e.g. `{DE AD}`.
    ByteArray,
    /// None of the above; callers treat it as a plain string.
    Undefined,
}

impl ArgumentType {
    /// Alias used by callers that treat unclassified text as a string.
    pub const STRING: ArgumentType = ArgumentType::Undefined;

    /// Human readable category name.
    pub fn name(self) -> &'static str {
        match self {
            ArgumentType::SignedDecimal => "Signed Decimal Integer",
            ArgumentType::UnsignedDecimal => "Unsigned Decimal Integer",
            ArgumentType::BinaryLiteral => "Binary Literal",
            ArgumentType::HexLiteral => "Hexadecimal Literal",
            ArgumentType::ByteArray => "Hexadecimal Byte Array",
            ArgumentType::Undefined => "String",
        }
    }
}

/// Determine the literal category of `arg`.
///
/// Rules are tried in order and the first match wins: binary, hexadecimal,
/// byte array, signed decimal, unsigned decimal. Numeric categories need at
/// least one digit, so `""`, `"0x"` and `"-"` are [`ArgumentType::Undefined`].
/// Byte arrays are only checked for their braces here; the interior is
/// validated when the array is parsed.
pub fn classify(arg: &[u8]) -> ArgumentType {
    let arg = &arg[..terminated_len(arg)];

    match arg {
        [b'0', b'b', digits @ ..] if all_digits(digits, is_bin_digit) => {
            return ArgumentType::BinaryLiteral;
        }
        [b'0', b'x', digits @ ..] if all_digits(digits, |b| b.is_ascii_hexdigit()) => {
            return ArgumentType::HexLiteral;
        }
        [b'{', .., b'}'] => return ArgumentType::ByteArray,
        [b'-' | b'+', digits @ ..] if all_digits(digits, |b| b.is_ascii_digit()) => {
            return ArgumentType::SignedDecimal;
        }
        _ => {}
    }

    if all_digits(arg, |b| b.is_ascii_digit()) {
        ArgumentType::UnsignedDecimal
    } else {
        ArgumentType::Undefined
    }
}

/// Parse an unsigned decimal literal.
///
/// Digits accumulate left to right until a terminator or the end of the
/// slice. There is no overflow check; values beyond `u32::MAX` wrap.
pub fn parse_unsigned_decimal(arg: &[u8]) -> u32 {
    arg.iter()
        .take_while(|&&b| b != NUL)
        .fold(0u32, |acc, &b| {
            acc.wrapping_mul(10).wrapping_add(u32::from(b.wrapping_sub(b'0')))
        })
}

/// Parse a decimal literal with an optional `-` or `+` sign.
pub fn parse_signed_decimal(arg: &[u8]) -> i32 {
    match arg {
        [b'-', rest @ ..] => (parse_unsigned_decimal(rest) as i32).wrapping_neg(),
        [b'+', rest @ ..] => parse_unsigned_decimal(rest) as i32,
        _ => parse_unsigned_decimal(arg) as i32,
    }
}

/// Parse a `0x` prefixed hexadecimal literal.
///
/// At most eight digits are consumed, most significant first; the scan also
/// stops at a terminator.
pub fn parse_unsigned_hex(arg: &[u8]) -> u32 {
    let digits = arg.get(2..).unwrap_or(&[]);
    digits
        .iter()
        .take(NIBBLES)
        .take_while(|&&b| b != NUL)
        .fold(0u32, |acc, &b| (acc << 4) | u32::from(hex_value(b)))
}

/// Parse a `0b` prefixed binary literal.
///
/// At most 32 digits are consumed; the scan also stops at a terminator.
pub fn parse_unsigned_binary(arg: &[u8]) -> u32 {
    let digits = arg.get(2..).unwrap_or(&[]);
    digits
        .iter()
        .take(u32::BITS as usize)
        .take_while(|&&b| b != NUL)
        .fold(0u32, |acc, &b| (acc << 1) | u32::from(b == b'1'))
}

/// Decode a single hex digit.
pub fn parse_nibble_hex(digit: u8) -> u8 {
    hex_value(digit)
}

/// Decode one or two hex digits into a byte.
///
/// The second byte is only consumed when it is a hex digit, so `"A}"` yields
/// `0x0A` and `"AB"` yields `0xAB`.
pub fn parse_byte_hex(arg: &[u8]) -> u8 {
    match arg {
        [] => 0,
        [high, low, ..] if low.is_ascii_hexdigit() => (hex_value(*high) << 4) | hex_value(*low),
        [single, ..] => hex_value(*single),
    }
}

/// Number of elements in a byte-array literal such as `{AA BB CC}`.
///
/// Zero means the literal is malformed; an empty `{}` is reported the same
/// way.
pub fn byte_array_len(arg: &[u8]) -> usize {
    scan_byte_array(arg, None)
}

/// Decode a byte-array literal into `out`, returning the element count.
///
/// Elements that do not fit into `out` are counted but not written. Zero
/// means the literal is malformed.
pub fn parse_byte_array(arg: &[u8], out: &mut [u8]) -> usize {
    scan_byte_array(arg, Some(out))
}

/// Walks the interior of `{...}`: hex digits pair up into bytes, a single
/// separator may follow each byte, anything else invalidates the literal.
fn scan_byte_array(arg: &[u8], mut out: Option<&mut [u8]>) -> usize {
    let arg = &arg[..terminated_len(arg)];
    if arg.len() < 2 {
        return 0;
    }
    let interior = &arg[1..arg.len() - 1];

    let mut nibbles = 0;
    let mut elements = 0;
    for (i, &byte) in interior.iter().enumerate() {
        if byte.is_ascii_hexdigit() {
            if nibbles == 0 {
                if let Some(slot) = out.as_deref_mut().and_then(|buf| buf.get_mut(elements)) {
                    *slot = parse_byte_hex(&interior[i..]);
                }
                elements += 1;
            }
            nibbles += 1;
            if nibbles > 2 {
                return 0;
            }
        } else if nibbles == 0 {
            return 0;
        } else {
            nibbles = 0;
        }
    }
    elements
}

/// A single argument handed to a command handler.
///
/// The bytes borrow the interpreter's input buffer and are only valid for
/// the duration of one dispatch.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argument<'a> {
    bytes: &'a [u8],
}

impl<'a> Argument<'a> {
    /// Wrap raw argument bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The raw bytes of the argument.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The argument as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.bytes).ok()
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the argument has no bytes.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Literal category, see [`classify`].
    pub fn kind(&self) -> ArgumentType {
        classify(self.bytes)
    }

    /// Unsigned value of a decimal, hex or binary literal.
    pub fn to_u32(&self) -> Option<u32> {
        match self.kind() {
            ArgumentType::UnsignedDecimal => Some(parse_unsigned_decimal(self.bytes)),
            ArgumentType::HexLiteral => Some(parse_unsigned_hex(self.bytes)),
            ArgumentType::BinaryLiteral => Some(parse_unsigned_binary(self.bytes)),
            _ => None,
        }
    }

    /// Signed value of a decimal literal, with or without sign.
    pub fn to_i32(&self) -> Option<i32> {
        match self.kind() {
            ArgumentType::SignedDecimal | ArgumentType::UnsignedDecimal => {
                Some(parse_signed_decimal(self.bytes))
            }
            _ => None,
        }
    }

    /// Elements of a byte-array literal.
    ///
    /// `None` when the argument is not a byte array, the array is malformed
    /// or empty, or it holds more than `N` elements.
    pub fn to_bytes<const N: usize>(&self) -> Option<heapless::Vec<u8, N>> {
        if self.kind() != ArgumentType::ByteArray {
            return None;
        }
        let len = byte_array_len(self.bytes);
        if len == 0 {
            return None;
        }
        let mut out = heapless::Vec::new();
        out.resize(len, 0).ok()?;
        parse_byte_array(self.bytes, &mut out);
        Some(out)
    }
}

impl core::fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_str() {
            Some(text) => f.debug_tuple("Argument").field(&text).finish(),
            None => f.debug_tuple("Argument").field(&self.bytes).finish(),
        }
    }
}

impl PartialEq<str> for Argument<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Argument<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl AsRef<[u8]> for Argument<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
