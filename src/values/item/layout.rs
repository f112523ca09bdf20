use crate::values::buffer::{RegisterRead, RegisterWrite};
use crate::values::cast;
use crate::values::error::RegisterError;
use crate::values::marshal::DoubleWord;
use crate::values::traits::Primitive;
use crate::values::types::Endianness;

/// Value stored in a single register word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Native;

/// Value stored in two consecutive register words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Virtual;

/// Primitives that fit in one word.
pub trait NativeWord: Primitive {
    fn from_word(word: u16) -> Self;
    fn to_word(self) -> u16;
}

/// Primitives that span two words.
pub trait WideWord: Primitive + DoubleWord {}

macro_rules! impl_native_word {
    ($($type:ty),*) => {
        $(
            impl NativeWord for $type {
                #[inline]
                fn from_word(word: u16) -> Self {
                    cast::unchecked(word)
                }

                #[inline]
                fn to_word(self) -> u16 {
                    cast::unchecked(self)
                }
            }
        )*
    };
}

impl_native_word!(u8, i8, u16, i16);

impl WideWord for u32 {}
impl WideWord for i32 {}
impl WideWord for f32 {}

/// How a value of `T` is laid out in register words.
pub trait WordLayout<T: Primitive> {
    const WORDS: usize;

    fn read<R: RegisterRead + ?Sized>(
        reader: &R,
        address: u16,
        endianness: Endianness,
    ) -> Result<T, RegisterError>;

    fn write<W: RegisterWrite + ?Sized>(
        value: T,
        writer: &mut W,
        address: u16,
        endianness: Endianness,
    ) -> Result<(), RegisterError>;
}

/// Word order is ignored for single words.
impl<T: NativeWord> WordLayout<T> for Native {
    const WORDS: usize = 1;

    #[inline]
    fn read<R: RegisterRead + ?Sized>(
        reader: &R,
        address: u16,
        _endianness: Endianness,
    ) -> Result<T, RegisterError> {
        reader.try_get_word(address).map(T::from_word)
    }

    #[inline]
    fn write<W: RegisterWrite + ?Sized>(
        value: T,
        writer: &mut W,
        address: u16,
        _endianness: Endianness,
    ) -> Result<(), RegisterError> {
        writer.try_set_word(address, value.to_word())
    }
}

impl<T: WideWord> WordLayout<T> for Virtual {
    const WORDS: usize = 2;

    #[inline]
    fn read<R: RegisterRead + ?Sized>(
        reader: &R,
        address: u16,
        endianness: Endianness,
    ) -> Result<T, RegisterError> {
        reader.try_get_wide(address, endianness).map(T::from_bits32)
    }

    #[inline]
    fn write<W: RegisterWrite + ?Sized>(
        value: T,
        writer: &mut W,
        address: u16,
        endianness: Endianness,
    ) -> Result<(), RegisterError> {
        writer.try_set_wide(address, value.to_bits32(), endianness)
    }
}

/// Primitives with a register layout.
pub trait Mapped: Primitive {
    type Layout: WordLayout<Self>;
}

macro_rules! impl_mapped {
    ($layout:ty => $($type:ty),*) => {
        $(
            impl Mapped for $type {
                type Layout = $layout;
            }
        )*
    };
}

impl_mapped!(Native => u8, i8, u16, i16);
impl_mapped!(Virtual => u32, i32, f32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::buffer::{RegisterBuffer, RegisterView};

    #[test]
    fn native_words_truncate_and_extend() {
        assert_eq!(u8::from_word(0x1234), 0x34);
        assert_eq!(i8::from_word(0x0080), -128);
        assert_eq!((-1i8).to_word(), 0xFFFF);
        assert_eq!((-1i16).to_word(), 0xFFFF);
        assert_eq!(<Native as WordLayout<u8>>::WORDS, 1);
        assert_eq!(<Virtual as WordLayout<f32>>::WORDS, 2);
    }

    #[test]
    fn virtual_layout_round_trip() {
        let mut words = [0u16; 4];
        let mut buffer = RegisterBuffer::new(&mut words);
        <f32 as Mapped>::Layout::write(1.4f32, &mut buffer, 1, Endianness::Big).unwrap();
        assert_eq!(buffer.words(), &[0, 0x3FB3, 0x3333, 0]);

        let view = RegisterView::new(buffer.words());
        let value: f32 = Virtual::read(&view, 1, Endianness::Big).unwrap();
        assert_eq!(value, 1.4);
        let swapped: f32 = Virtual::read(&view, 1, Endianness::Little).unwrap();
        assert_eq!(swapped.to_bits(), 0x3333_3FB3);
    }
}
