//! Integer text conversion in base 2, 8, 10 and 16.
//!
//! Signed values in bases 2, 8 and 16 are rendered and parsed through their
//! unsigned counterpart, so `-1i16` becomes `ffff` and `8000` parses back to
//! `i16::MIN`. Base 10 keeps the sign.

use core::fmt::{self, Write};
use core::num::{IntErrorKind, ParseIntError};

use crate::values::cast::CastTo;
use crate::values::error::ParseError;
use crate::values::traits::Integer;
use crate::values::types::Text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    pub const fn from_base(base: u32) -> Option<Self> {
        match base {
            2 => Some(Self::Binary),
            8 => Some(Self::Octal),
            10 => Some(Self::Decimal),
            16 => Some(Self::Hex),
            _ => None,
        }
    }
}

/// Integers that can be written and parsed in any [`Radix`].
pub trait RadixInteger: Integer {
    /// Writes digits only, lowercase, no prefix and no padding.
    fn write_radix(self, radix: Radix, out: &mut dyn Write) -> fmt::Result;

    /// Parses digits only. Non-decimal input must not carry a sign.
    fn parse_radix(text: &str, radix: Radix) -> Result<Self, ParseError>;
}

pub(crate) fn map_int_error(err: ParseIntError) -> ParseError {
    match err.kind() {
        IntErrorKind::Empty => ParseError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::Overflow,
        _ => ParseError::Invalid,
    }
}

fn reject_sign(text: &str) -> Result<&str, ParseError> {
    if text.starts_with(['+', '-']) {
        Err(ParseError::Invalid)
    } else {
        Ok(text)
    }
}

macro_rules! impl_radix_pair {
    ($($unsigned:ty, $signed:ty);* $(;)?) => {
        $(
            impl RadixInteger for $unsigned {
                fn write_radix(self, radix: Radix, out: &mut dyn Write) -> fmt::Result {
                    match radix {
                        Radix::Binary => write!(out, "{:b}", self),
                        Radix::Octal => write!(out, "{:o}", self),
                        Radix::Decimal => write!(out, "{}", self),
                        Radix::Hex => write!(out, "{:x}", self),
                    }
                }

                fn parse_radix(text: &str, radix: Radix) -> Result<Self, ParseError> {
                    let digits = match radix {
                        Radix::Decimal => text,
                        _ => reject_sign(text)?,
                    };
                    <$unsigned>::from_str_radix(digits, radix.base()).map_err(map_int_error)
                }
            }

            impl RadixInteger for $signed {
                fn write_radix(self, radix: Radix, out: &mut dyn Write) -> fmt::Result {
                    match radix {
                        Radix::Decimal => write!(out, "{}", self),
                        _ => CastTo::<$unsigned>::cast_unchecked(self).write_radix(radix, out),
                    }
                }

                fn parse_radix(text: &str, radix: Radix) -> Result<Self, ParseError> {
                    match radix {
                        Radix::Decimal => {
                            <$signed>::from_str_radix(text, 10).map_err(map_int_error)
                        }
                        _ => <$unsigned>::parse_radix(text, radix)
                            .map(CastTo::<$signed>::cast_unchecked),
                    }
                }
            }
        )*
    };
}

impl_radix_pair!(
    u8, i8;
    u16, i16;
    u32, i32;
    u64, i64;
);

/// Renders `value` in `radix`, lowercase and without prefix.
pub fn to_text<T: RadixInteger>(value: T, radix: Radix) -> Text {
    let mut text = Text::new();
    // 64 binary digits always fit
    let _ = value.write_radix(radix, &mut text);
    text
}

/// Parses `text` in `radix`. Base 16 accepts an optional `0x` prefix.
pub fn from_text<T: RadixInteger>(text: &str, radix: Radix) -> Result<T, ParseError> {
    let digits = match radix {
        Radix::Hex => strip_hex_prefix(text),
        _ => text,
    };
    T::parse_radix(digits, radix)
}

/// Removes a leading `0x` or `0X`.
pub fn strip_hex_prefix(text: &str) -> &str {
    match text.as_bytes() {
        [b'0', b'x' | b'X', ..] => &text[2..],
        _ => text,
    }
}
