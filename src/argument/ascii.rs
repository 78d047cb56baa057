//! ASCII digit helpers shared by the classifier, parsers and printers.

/// String terminator written over separators by the tokenizer.
pub(crate) const NUL: u8 = 0;

pub(crate) fn is_bin_digit(byte: u8) -> bool {
    matches!(byte, b'0' | b'1')
}

/// True when every byte satisfies `pred` and there is at least one byte.
pub(crate) fn all_digits(bytes: &[u8], pred: fn(u8) -> bool) -> bool {
    !bytes.is_empty() && bytes.iter().all(|&b| pred(b))
}

/// Value of a hex digit, either letter case.
///
/// Bytes that are not hex digits produce an unspecified nibble; callers
/// validate first.
pub(crate) fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 0xA,
        b'A'..=b'F' => byte - b'A' + 0xA,
        _ => byte.wrapping_sub(b'0') & 0x0F,
    }
}

/// Uppercase ASCII digit for the low nibble of `nibble`.
pub(crate) fn hex_digit(nibble: u8) -> u8 {
    let nibble = nibble & 0x0F;
    if nibble >= 0xA {
        nibble - 0xA + b'A'
    } else {
        nibble + b'0'
    }
}

/// Length of `bytes` up to, not including, the first terminator.
pub(crate) fn terminated_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == NUL).unwrap_or(bytes.len())
}
