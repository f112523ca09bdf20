use crate::values::error::RegisterError;
use crate::values::types::Endianness;

/// Translates `address` into an index range of `count` words within `len`.
///
/// Addresses below `offset` are out of range.
pub fn word_span(
    address: u16,
    offset: u16,
    count: usize,
    len: usize,
) -> Result<(usize, usize), RegisterError> {
    if count == 0 {
        return Err(RegisterError::ZeroLength);
    }

    let out_of_range = RegisterError::OutOfRange { address, count };
    let start = (address as usize)
        .checked_sub(offset as usize)
        .ok_or(out_of_range)?;
    let end = start.checked_add(count).ok_or(out_of_range)?;
    if end > len {
        return Err(out_of_range);
    }

    Ok((start, end))
}

/// Joins the words stored at the lower and upper address into a 32-bit value.
#[inline]
pub const fn combine_words(lower: u16, upper: u16, endianness: Endianness) -> u32 {
    if endianness.is_big() {
        ((lower as u32) << 16) | upper as u32
    } else {
        ((upper as u32) << 16) | lower as u32
    }
}

/// Splits a 32-bit value into the words for the lower and upper address.
#[inline]
pub const fn split_words(value: u32, endianness: Endianness) -> [u16; 2] {
    let high = (value >> 16) as u16;
    let low = value as u16;
    if endianness.is_big() {
        [high, low]
    } else {
        [low, high]
    }
}

/// Number of chars in a UTF-8 string.
pub const fn char_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        // continuation bytes do not start a char
        if bytes[i] & 0xC0 != 0x80 {
            count += 1;
        }
        i += 1;
    }
    count
}
