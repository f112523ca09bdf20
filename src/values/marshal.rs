//! Conversions between 32-bit primitives and register word pairs.
//!
//! Word pairs are ordered by address: index 0 is stored at the lower address.

use crate::values::error::RegisterError;
use crate::values::helpers::{combine_words, split_words};
use crate::values::types::Endianness;

/// 32-bit primitives that travel as two register words.
pub trait DoubleWord: Copy {
    fn to_bits32(self) -> u32;
    fn from_bits32(bits: u32) -> Self;
}

impl DoubleWord for u32 {
    #[inline]
    fn to_bits32(self) -> u32 {
        self
    }

    #[inline]
    fn from_bits32(bits: u32) -> Self {
        bits
    }
}

impl DoubleWord for i32 {
    #[inline]
    fn to_bits32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_bits32(bits: u32) -> Self {
        bits as i32
    }
}

impl DoubleWord for f32 {
    #[inline]
    fn to_bits32(self) -> u32 {
        self.to_bits()
    }

    #[inline]
    fn from_bits32(bits: u32) -> Self {
        f32::from_bits(bits)
    }
}

/// Words for the lower and upper address.
#[inline]
pub fn to_word_pair<T: DoubleWord>(value: T, endianness: Endianness) -> [u16; 2] {
    split_words(value.to_bits32(), endianness)
}

/// Fills `words`, which must hold exactly two words.
pub fn to_words<T: DoubleWord>(
    value: T,
    words: &mut [u16],
    endianness: Endianness,
) -> Result<(), RegisterError> {
    if words.len() != 2 {
        return Err(RegisterError::WordCount {
            expected: 2,
            found: words.len(),
        });
    }
    words.copy_from_slice(&to_word_pair(value, endianness));
    Ok(())
}

/// Builds a value from words at the lower and upper address.
pub fn from_words<T: DoubleWord>(words: &[u16], endianness: Endianness) -> Result<T, RegisterError> {
    match words {
        [lower, upper] => Ok(T::from_bits32(combine_words(*lower, *upper, endianness))),
        _ => Err(RegisterError::WordCount {
            expected: 2,
            found: words.len(),
        }),
    }
}

/// Bits as they would sit in memory after copying the word pair in `endianness`.
///
/// Platform order yields the natural bit pattern, the opposite order swaps halves.
#[inline]
pub fn to_dword<T: DoubleWord>(value: T, endianness: Endianness) -> u32 {
    let bits = value.to_bits32();
    if endianness.is_platform() {
        bits
    } else {
        bits.rotate_left(16)
    }
}

#[inline]
pub fn from_dword<T: DoubleWord>(dword: u32, endianness: Endianness) -> T {
    if endianness.is_platform() {
        T::from_bits32(dword)
    } else {
        T::from_bits32(dword.rotate_left(16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_pairs() {
        assert_eq!(to_word_pair(131_071u32, Endianness::Big), [0x0001, 0xFFFF]);
        assert_eq!(to_word_pair(1.4f32, Endianness::Big), [0x3FB3, 0x3333]);
        assert_eq!(to_word_pair(1.4f32, Endianness::Little), [0x3333, 0x3FB3]);
        assert_eq!(to_word_pair(-1i32, Endianness::Big), [0xFFFF, 0xFFFF]);
    }

    #[test]
    fn slices_must_hold_two_words() {
        let mut three = [0u16; 3];
        assert_eq!(
            to_words(1u32, &mut three, Endianness::Big),
            Err(RegisterError::WordCount { expected: 2, found: 3 })
        );
        assert_eq!(
            from_words::<u32>(&[1], Endianness::Big),
            Err(RegisterError::WordCount { expected: 2, found: 1 })
        );

        let mut two = [0u16; 2];
        to_words(i32::MIN + 2, &mut two, Endianness::Little).unwrap();
        assert_eq!(two, [0x0002, 0x8000]);
        assert_eq!(from_words::<i32>(&two, Endianness::Little), Ok(i32::MIN + 2));
    }

    #[test]
    fn float_words_from_little_order() {
        assert_eq!(from_words::<f32>(&[0xFFFF, 0xFF7F], Endianness::Little), Ok(f32::MIN));
    }

    #[test]
    fn dword_swaps_halves_off_platform() {
        let platform = Endianness::PLATFORM;
        let other = if platform.is_big() { Endianness::Little } else { Endianness::Big };
        assert_eq!(to_dword(0x0123_ABCDu32, platform), 0x0123_ABCD);
        assert_eq!(to_dword(0x0123_ABCDu32, other), 0xABCD_0123);
        assert_eq!(from_dword::<u32>(0xABCD_0123, other), 0x0123_ABCD);
        assert_eq!(from_dword::<f32>(to_dword(1.4f32, other), other), 1.4);
    }
}
