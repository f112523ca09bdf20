//! Conversions between any two primitive types.
//!
//! Checked conversions reject values the destination cannot hold. Unchecked
//! conversions follow `as` semantics: integers wrap, floats saturate when converted
//! to integers and NaN becomes zero. Converting to a float never overflows, values
//! beyond the range of `f32` become infinities.

use crate::values::error::CastError;

/// Conversion from `Self` into `U`.
pub trait CastTo<U>: Sized {
    fn cast_checked(self) -> Result<U, CastError>;
    fn cast_unchecked(self) -> U;
}

/// Converts `from` into `U`, failing on overflow.
#[inline]
pub fn checked<U, F: CastTo<U>>(from: F) -> Result<U, CastError> {
    from.cast_checked()
}

/// Converts `from` into `U` with wrapping or saturating semantics.
#[inline]
pub fn unchecked<U, F: CastTo<U>>(from: F) -> U {
    from.cast_unchecked()
}

/// Open interval of floats whose truncation fits an integer type.
trait TruncationBounds {
    const LOWER: f64;
    const UPPER: f64;
}

macro_rules! impl_bounds {
    ($($type:ty => ($lower:expr, $upper:expr)),* $(,)?) => {
        $(
            impl TruncationBounds for $type {
                const LOWER: f64 = $lower;
                const UPPER: f64 = $upper;
            }
        )*
    };
}

impl_bounds!(
    u8 => (-1.0, 256.0),
    i8 => (-129.0, 128.0),
    u16 => (-1.0, 65_536.0),
    i16 => (-32_769.0, 32_768.0),
    u32 => (-1.0, 4_294_967_296.0),
    i32 => (-2_147_483_649.0, 2_147_483_648.0),
    u64 => (-1.0, 18_446_744_073_709_551_616.0),
    // next double below -2^63
    i64 => (-9_223_372_036_854_777_856.0, 9_223_372_036_854_775_808.0),
);

macro_rules! impl_cast {
    (int $from:ty => $($to:ty),*) => {
        $(
            impl CastTo<$to> for $from {
                #[inline]
                fn cast_checked(self) -> Result<$to, CastError> {
                    <$to>::try_from(self).map_err(|_| CastError::ArithmeticOverflow)
                }

                #[inline]
                fn cast_unchecked(self) -> $to {
                    self as $to
                }
            }
        )*
    };
    (widen $from:ty => $($to:ty),*) => {
        $(
            impl CastTo<$to> for $from {
                #[inline]
                fn cast_checked(self) -> Result<$to, CastError> {
                    Ok(self as $to)
                }

                #[inline]
                fn cast_unchecked(self) -> $to {
                    self as $to
                }
            }
        )*
    };
    (truncate $from:ty => $($to:ty),*) => {
        $(
            impl CastTo<$to> for $from {
                #[inline]
                fn cast_checked(self) -> Result<$to, CastError> {
                    let value = self as f64;
                    if value > <$to as TruncationBounds>::LOWER
                        && value < <$to as TruncationBounds>::UPPER
                    {
                        Ok(self as $to)
                    } else {
                        Err(CastError::ArithmeticOverflow)
                    }
                }

                #[inline]
                fn cast_unchecked(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

impl_cast!(int u8 => u8, i8, u16, i16, u32, i32, u64, i64);
impl_cast!(int i8 => u8, i8, u16, i16, u32, i32, u64, i64);
impl_cast!(int u16 => u8, i8, u16, i16, u32, i32, u64, i64);
impl_cast!(int i16 => u8, i8, u16, i16, u32, i32, u64, i64);
impl_cast!(int u32 => u8, i8, u16, i16, u32, i32, u64, i64);
impl_cast!(int i32 => u8, i8, u16, i16, u32, i32, u64, i64);
impl_cast!(int u64 => u8, i8, u16, i16, u32, i32, u64, i64);
impl_cast!(int i64 => u8, i8, u16, i16, u32, i32, u64, i64);

impl_cast!(widen u8 => f32, f64);
impl_cast!(widen i8 => f32, f64);
impl_cast!(widen u16 => f32, f64);
impl_cast!(widen i16 => f32, f64);
impl_cast!(widen u32 => f32, f64);
impl_cast!(widen i32 => f32, f64);
impl_cast!(widen u64 => f32, f64);
impl_cast!(widen i64 => f32, f64);
impl_cast!(widen f32 => f32, f64);
impl_cast!(widen f64 => f32, f64);

impl_cast!(truncate f32 => u8, i8, u16, i16, u32, i32, u64, i64);
impl_cast!(truncate f64 => u8, i8, u16, i16, u32, i32, u64, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_integer_narrowing() {
        assert_eq!(checked::<u32, _>(i32::MIN), Err(CastError::ArithmeticOverflow));
        assert_eq!(checked::<u8, _>(255u16), Ok(255u8));
        assert_eq!(checked::<u8, _>(256u16), Err(CastError::ArithmeticOverflow));
        assert_eq!(checked::<i16, _>(0x8000u16), Err(CastError::ArithmeticOverflow));
        assert_eq!(checked::<i64, _>(-1i8), Ok(-1i64));
        assert_eq!(checked::<u16, _>(7u16), Ok(7u16));
    }

    #[test]
    fn unchecked_integer_wraps() {
        assert_eq!(unchecked::<u32, _>(i32::MIN), 0x8000_0000u32);
        assert_eq!(unchecked::<i16, _>(0xFFFFu16), -1i16);
        assert_eq!(unchecked::<u8, _>(0x1234u16), 0x34u8);
        assert_eq!(unchecked::<i8, _>(0x80u16), i8::MIN);
    }

    #[test]
    fn float_to_integer() {
        assert_eq!(checked::<i8, _>(-128.9f32), Ok(-128i8));
        assert_eq!(checked::<i8, _>(-129.0f32), Err(CastError::ArithmeticOverflow));
        assert_eq!(checked::<u8, _>(-0.5f64), Ok(0u8));
        assert_eq!(checked::<u8, _>(f32::NAN), Err(CastError::ArithmeticOverflow));
        assert_eq!(checked::<i32, _>(f64::INFINITY), Err(CastError::ArithmeticOverflow));
        assert_eq!(checked::<i64, _>(-9_223_372_036_854_775_808.0f64), Ok(i64::MIN));
        assert_eq!(checked::<u64, _>(18_446_744_073_709_551_616.0f64), Err(CastError::ArithmeticOverflow));
        assert_eq!(unchecked::<u8, _>(300.0f32), 255u8);
        assert_eq!(unchecked::<i32, _>(f32::NAN), 0);
    }

    #[test]
    fn to_float_never_overflows() {
        assert_eq!(checked::<f32, _>(f64::MAX), Ok(f32::INFINITY));
        assert_eq!(checked::<f32, _>(u64::MAX), Ok(u64::MAX as f32));
        assert_eq!(checked::<f64, _>(1.4f32), Ok(f64::from(1.4f32)));
        assert_eq!(unchecked::<f32, _>(-f64::MAX), f32::NEG_INFINITY);
    }
}
