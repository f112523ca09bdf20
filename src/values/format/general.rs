//! Shortest-form float rendering with a fixed number of significant digits.
//!
//! Output switches to scientific notation when the decimal exponent is at least the
//! precision or below -4. Scientific output always carries an exponent sign and at
//! least two exponent digits, e.g. `1.234568E+08`.

use core::fmt::{self, Write};

use crate::values::types::{LetterCase, NumericType};

/// Significant digits rendered by default.
pub const F32_PRECISION: u8 = 7;
pub const F64_PRECISION: u8 = 15;

/// Significant digits needed to parse a value back unchanged.
pub const F32_ROUND_TRIP: u8 = 9;
pub const F64_ROUND_TRIP: u8 = 17;

const MAX_DIGITS: usize = F64_ROUND_TRIP as usize;

/// Default precision of a float type, 0 for integers.
pub const fn default_precision(ty: NumericType) -> u8 {
    match ty {
        NumericType::F32 => F32_PRECISION,
        NumericType::F64 => F64_PRECISION,
        _ => 0,
    }
}

/// Round-trip precision of a float type, 0 for integers.
pub const fn round_trip_precision(ty: NumericType) -> u8 {
    match ty {
        NumericType::F32 => F32_ROUND_TRIP,
        NumericType::F64 => F64_ROUND_TRIP,
        _ => 0,
    }
}

/// Upper bound of chars written for `digits` significant digits.
pub const fn max_length(ty: NumericType, digits: u8) -> usize {
    let digits = if digits == 0 { default_precision(ty) } else { digits };
    match ty {
        NumericType::F32 => digits as usize + 6,
        _ => digits as usize + 7,
    }
}

pub fn write_general(
    out: &mut dyn Write,
    value: f64,
    digits: usize,
    case: LetterCase,
) -> fmt::Result {
    if value.is_nan() {
        return out.write_str("NaN");
    }
    if value.is_infinite() {
        return out.write_str(if value < 0.0 { "-Infinity" } else { "Infinity" });
    }
    if value == 0.0 {
        return out.write_str(if value.is_sign_negative() { "-0" } else { "0" });
    }

    let digits = digits.clamp(1, MAX_DIGITS);
    let mut scientific: heapless::String<32> = heapless::String::new();
    write!(scientific, "{:.*e}", digits - 1, value)?;

    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };

    let mut significant = [b'0'; MAX_DIGITS];
    let mut len = 0;
    for b in mantissa.bytes().filter(u8::is_ascii_digit) {
        if len == MAX_DIGITS {
            break;
        }
        significant[len] = b;
        len += 1;
    }
    while len > 1 && significant[len - 1] == b'0' {
        len -= 1;
    }
    let significant = &significant[..len];

    if negative {
        out.write_char('-')?;
    }

    if exponent >= digits as i32 || exponent < -4 {
        write_digits(out, &significant[..1])?;
        if len > 1 {
            out.write_char('.')?;
            write_digits(out, &significant[1..])?;
        }
        out.write_char(if case.is_upper() { 'E' } else { 'e' })?;
        out.write_char(if exponent < 0 { '-' } else { '+' })?;
        write!(out, "{:02}", exponent.unsigned_abs())
    } else if exponent >= 0 {
        let whole = exponent as usize + 1;
        for i in 0..whole {
            out.write_char(significant.get(i).map_or('0', |b| *b as char))?;
        }
        if len > whole {
            out.write_char('.')?;
            write_digits(out, &significant[whole..])?;
        }
        Ok(())
    } else {
        out.write_str("0.")?;
        for _ in 0..(-exponent - 1) {
            out.write_char('0')?;
        }
        write_digits(out, significant)
    }
}

fn write_digits(out: &mut dyn Write, digits: &[u8]) -> fmt::Result {
    digits.iter().try_for_each(|d| out.write_char(*d as char))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::types::Text;

    fn general(value: f64, digits: usize, case: LetterCase) -> Text {
        let mut text = Text::new();
        write_general(&mut text, value, digits, case).unwrap();
        text
    }

    #[test]
    fn fixed_notation() {
        assert_eq!(general(f64::from(1234.567f32), 7, LetterCase::Upper), "1234.567");
        assert_eq!(general(f64::from(1234.567f32), 6, LetterCase::Upper), "1234.57");
        assert_eq!(general(f64::from(1.4f32), 7, LetterCase::Upper), "1.4");
        assert_eq!(general(f64::from(123_456_789f32), 9, LetterCase::Upper), "123456792");
        assert_eq!(general(100.0, 7, LetterCase::Upper), "100");
        assert_eq!(general(-0.5, 7, LetterCase::Upper), "-0.5");
        assert_eq!(general(0.0001, 7, LetterCase::Upper), "0.0001");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(general(f64::from(123_456_789f32), 7, LetterCase::Upper), "1.234568E+08");
        assert_eq!(general(f64::from(123_456_789f32), 6, LetterCase::Lower), "1.23457e+08");
        assert_eq!(general(f64::from(12_345.6f32), 4, LetterCase::Upper), "1.235E+04");
        assert_eq!(general(0.000001, 7, LetterCase::Upper), "1E-06");
        assert_eq!(general(1e100, 15, LetterCase::Upper), "1E+100");
        assert_eq!(general(f64::from(f32::MAX), 9, LetterCase::Upper), "3.40282347E+38");
    }

    #[test]
    fn notation_boundaries() {
        assert_eq!(general(0.0001, 7, LetterCase::Lower), "0.0001");
        assert_eq!(general(-0.00012345, 7, LetterCase::Upper), "-0.00012345");
        assert_eq!(general(0.00001, 7, LetterCase::Upper), "1E-05");
        assert_eq!(general(0.00001, 7, LetterCase::Lower), "1e-05");
        assert_eq!(general(f64::from(-1.2345679e-5f32), 7, LetterCase::Upper), "-1.234568E-05");
        assert_eq!(general(1_234_567.0, 7, LetterCase::Upper), "1234567");
        assert_eq!(general(12_345_678.0, 7, LetterCase::Upper), "1.234568E+07");
        assert_eq!(general(12_345_678.0, 7, LetterCase::Lower), "1.234568e+07");
    }

    #[test]
    fn small_values_fit_declared_length() {
        let f32_value = f64::from(-1.2345679e-5f32);
        for value in [f32_value, f64::from(-5.90913e-5f32), -0.000123456789] {
            assert!(general(value, 7, LetterCase::Upper).len() <= max_length(NumericType::F32, 7));
            assert!(general(value, 9, LetterCase::Upper).len() <= max_length(NumericType::F32, 9));
        }
        assert_eq!(general(f32_value, 9, LetterCase::Upper), "-1.23456794E-05");
    }

    #[test]
    fn special_values() {
        assert_eq!(general(f64::NAN, 7, LetterCase::Upper), "NaN");
        assert_eq!(general(f64::INFINITY, 7, LetterCase::Upper), "Infinity");
        assert_eq!(general(f64::NEG_INFINITY, 7, LetterCase::Upper), "-Infinity");
        assert_eq!(general(0.0, 7, LetterCase::Upper), "0");
        assert_eq!(general(-0.0, 7, LetterCase::Upper), "-0");
    }

    #[test]
    fn declared_lengths() {
        assert_eq!(max_length(NumericType::F32, 0), 13);
        assert_eq!(max_length(NumericType::F32, 9), 15);
        assert_eq!(max_length(NumericType::F64, 0), 22);
        assert_eq!(max_length(NumericType::F64, 17), 24);
    }
}
