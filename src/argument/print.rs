//! Number printers writing ASCII straight into a [`Sink`].

use super::NIBBLES;
use super::ascii::hex_digit;
use crate::sink::Sink;

/// Largest decimal place value representable in `u32`.
const TOP_DECIMAL_PLACE: u32 = 1_000_000_000;

/// Print `num` as minimal decimal, `"0"` for zero.
pub fn put_unsigned_decimal<S: Sink + ?Sized>(out: &mut S, num: u32) {
    let mut digits = [0u8; 10];
    let mut len = 0;
    let mut rest = num;
    let mut place = TOP_DECIMAL_PLACE;

    while place > 0 {
        let digit = rest / place;
        rest -= digit * place;
        if len > 0 || digit > 0 {
            digits[len] = b'0' + digit as u8;
            len += 1;
        }
        place /= 10;
    }

    if len == 0 {
        out.write(b"0");
    } else {
        out.write(&digits[..len]);
    }
}

/// Print `num` as `0x` followed by minimal uppercase hex, `"0x0"` for zero.
pub fn put_unsigned_hex<S: Sink + ?Sized>(out: &mut S, num: u32) {
    let mut digits = [0u8; 2 + NIBBLES];
    digits[..2].copy_from_slice(b"0x");
    let mut len = 2;

    for shift in (0..NIBBLES).rev() {
        let nibble = (num >> (shift * 4)) as u8 & 0x0F;
        if len > 2 || nibble > 0 {
            digits[len] = hex_digit(nibble);
            len += 1;
        }
    }

    if len == 2 {
        digits[len] = b'0';
        len += 1;
    }
    out.write(&digits[..len]);
}

/// Print a byte as two uppercase hex digits, without prefix.
pub fn put_byte_hex<S: Sink + ?Sized>(out: &mut S, byte: u8) {
    out.write(&[hex_digit(byte >> 4), hex_digit(byte)]);
}

/// Print the low nibble of `nibble` as one uppercase hex digit.
pub fn put_nibble_hex<S: Sink + ?Sized>(out: &mut S, nibble: u8) {
    out.write(&[hex_digit(nibble)]);
}
