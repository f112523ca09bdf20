use core::fmt::Debug;

use paste::paste;

use crate::values::types::{NumericKind, NumericType};

mod sealed {
    pub trait Sealed {}
}

/// One of the ten primitive numeric types.
///
/// Every per-type decision in the crate is taken on these associated constants, so
/// generic code is specialized at compile time instead of looking up type tables.
pub trait Primitive: sealed::Sealed + Copy + PartialEq + Default + Debug + 'static {
    const TYPE: NumericType;
    const KIND: NumericKind = Self::TYPE.kind();
    const SIZE: usize = Self::TYPE.size();
    const BITS: u32 = Self::TYPE.bits();
    const IS_SIGNED: bool = Self::TYPE.is_signed();
    const IS_FLOAT: bool = Self::TYPE.is_float();
    const IS_INTEGER: bool = Self::TYPE.is_integer();
    const ZERO: Self;

    fn to_numeric(self) -> NumericValue;
}

/// Integer primitives.
pub trait Integer: Primitive {}

/// Floating point primitives.
pub trait Float: Primitive {
    /// Widening conversion used by the general formatter.
    fn to_f64(self) -> f64;
}

/// A primitive value with its type erased into the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl NumericValue {
    pub const fn numeric_type(self) -> NumericType {
        match self {
            Self::U8(_) => NumericType::U8,
            Self::I8(_) => NumericType::I8,
            Self::U16(_) => NumericType::U16,
            Self::I16(_) => NumericType::I16,
            Self::U32(_) => NumericType::U32,
            Self::I32(_) => NumericType::I32,
            Self::U64(_) => NumericType::U64,
            Self::I64(_) => NumericType::I64,
            Self::F32(_) => NumericType::F32,
            Self::F64(_) => NumericType::F64,
        }
    }

    /// Raw bit pattern, zero-extended from the type's width.
    ///
    /// Signed values yield their two's complement, floats their IEEE-754 encoding.
    pub const fn bits(self) -> u64 {
        match self {
            Self::U8(v) => v as u64,
            Self::I8(v) => v as u8 as u64,
            Self::U16(v) => v as u64,
            Self::I16(v) => v as u16 as u64,
            Self::U32(v) => v as u64,
            Self::I32(v) => v as u32 as u64,
            Self::U64(v) => v,
            Self::I64(v) => v as u64,
            Self::F32(v) => v.to_bits() as u64,
            Self::F64(v) => v.to_bits(),
        }
    }

    /// Integer value widened losslessly, `None` for floats.
    pub const fn integer(self) -> Option<i128> {
        match self {
            Self::U8(v) => Some(v as i128),
            Self::I8(v) => Some(v as i128),
            Self::U16(v) => Some(v as i128),
            Self::I16(v) => Some(v as i128),
            Self::U32(v) => Some(v as i128),
            Self::I32(v) => Some(v as i128),
            Self::U64(v) => Some(v as i128),
            Self::I64(v) => Some(v as i128),
            Self::F32(_) | Self::F64(_) => None,
        }
    }

    /// Float value widened to `f64`, `None` for integers.
    pub fn float(self) -> Option<f64> {
        match self {
            Self::F32(v) => Some(f64::from(v)),
            Self::F64(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_primitive {
    ($($type:ident => $zero:expr),* $(,)?) => {
        $(
            paste! {
                impl sealed::Sealed for $type {}

                impl Primitive for $type {
                    const TYPE: NumericType = NumericType::[<$type:camel>];
                    const ZERO: Self = $zero;

                    #[inline]
                    fn to_numeric(self) -> NumericValue {
                        NumericValue::[<$type:camel>](self)
                    }
                }
            }
        )*
    };
}

impl_primitive!(
    u8 => 0,
    i8 => 0,
    u16 => 0,
    i16 => 0,
    u32 => 0,
    i32 => 0,
    u64 => 0,
    i64 => 0,
    f32 => 0.0,
    f64 => 0.0,
);

impl Integer for u8 {}
impl Integer for i8 {}
impl Integer for u16 {}
impl Integer for i16 {}
impl Integer for u32 {}
impl Integer for i32 {}
impl Integer for u64 {}
impl Integer for i64 {}

impl Float for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Float for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}
