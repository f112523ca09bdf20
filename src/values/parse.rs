//! Locale-aware text to number conversion.
//!
//! Input is first normalized from the caller's [`NumberLocale`] into invariant form
//! (`.` decimal separator, `,` group separator, `-` negative sign) and then parsed
//! with the rules of the requested [`NumberStyle`].

use core::fmt::Write;

use crate::values::cast::CastTo;
use crate::values::error::ParseError;
use crate::values::radix::{Radix, RadixInteger};
use crate::values::traits::Primitive;
use crate::values::types::Text;

/// Accepted shapes of numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberStyle {
    /// Optional sign and decimal digits.
    Integer,
    /// Hex digits without sign and without prefix.
    HexNumber,
    /// Integer style plus group separators and a decimal point.
    Number,
    /// Number style plus exponent, infinities and NaN.
    Float,
}

/// Separator characters of a culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub group_separator: char,
    pub negative_sign: char,
}

impl NumberLocale {
    pub const INVARIANT: Self = Self::new('.', ',');

    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
            negative_sign: '-',
        }
    }

    pub const fn with_negative_sign(mut self, negative_sign: char) -> Self {
        self.negative_sign = negative_sign;
        self
    }

    fn is_invariant(&self) -> bool {
        *self == Self::INVARIANT
    }

    fn normalize(&self, text: &str) -> Result<Text, ParseError> {
        let mut out = Text::new();
        for c in text.chars() {
            let mapped = if c == self.decimal_separator {
                '.'
            } else if c == self.group_separator {
                ','
            } else if c == self.negative_sign {
                '-'
            } else {
                c
            };
            out.write_char(mapped).map_err(|_| ParseError::Invalid)?;
        }
        Ok(out)
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Parses invariant-form text in a given style.
pub trait FromNumberText: Primitive {
    fn from_number_text(text: &str, style: NumberStyle) -> Result<Self, ParseError>;
}

/// Parse bridge from locale text to primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberParser {
    locale: NumberLocale,
}

impl NumberParser {
    pub const fn invariant() -> Self {
        Self {
            locale: NumberLocale::INVARIANT,
        }
    }

    pub const fn with_locale(locale: NumberLocale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> NumberLocale {
        self.locale
    }

    pub fn try_parse<T: FromNumberText>(&self, text: &str, style: NumberStyle) -> Result<T, ParseError> {
        if self.locale.is_invariant() {
            T::from_number_text(text, style)
        } else {
            let normalized = self.locale.normalize(text)?;
            T::from_number_text(&normalized, style)
        }
    }

    /// Hex digits without prefix. Signed types use two's complement.
    #[inline]
    pub fn parse_hex<T: FromNumberText>(&self, text: &str) -> Result<T, ParseError> {
        self.try_parse(text, NumberStyle::HexNumber)
    }

    #[inline]
    pub fn parse_integer<T: FromNumberText>(&self, text: &str) -> Result<T, ParseError> {
        self.try_parse(text, NumberStyle::Integer)
    }

    #[inline]
    pub fn parse_number<T: FromNumberText>(&self, text: &str) -> Result<T, ParseError> {
        self.try_parse(text, NumberStyle::Number)
    }

    #[inline]
    pub fn parse_float<T: FromNumberText>(&self, text: &str) -> Result<T, ParseError> {
        self.try_parse(text, NumberStyle::Float)
    }
}

fn trimmed(text: &str) -> Result<&str, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        Err(ParseError::Empty)
    } else {
        Ok(text)
    }
}

/// Drops group separators from the integral part.
fn ungroup(text: &str) -> Result<Text, ParseError> {
    let mut out = Text::new();
    let mut in_fraction = false;
    for c in text.chars() {
        match c {
            ',' if in_fraction => return Err(ParseError::Invalid),
            ',' => continue,
            '.' => in_fraction = true,
            _ => {}
        }
        out.write_char(c).map_err(|_| ParseError::Invalid)?;
    }
    Ok(out)
}

fn is_signed_digits(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_f64(text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>().map_err(|_| ParseError::Invalid)
}

fn integer_from_text<T>(text: &str, style: NumberStyle) -> Result<T, ParseError>
where
    T: RadixInteger + CastTo<f64>,
    f64: CastTo<T>,
{
    let text = trimmed(text)?;
    match style {
        NumberStyle::Integer => T::parse_radix(text, Radix::Decimal),
        NumberStyle::HexNumber => T::parse_radix(text, Radix::Hex),
        NumberStyle::Number => {
            let plain = ungroup(text)?;
            let (whole, fraction) = match plain.split_once('.') {
                Some(parts) => parts,
                None => (plain.as_str(), ""),
            };
            if !fraction.bytes().all(|b| b == b'0') || !is_signed_digits(whole) {
                return Err(ParseError::Invalid);
            }
            T::parse_radix(whole, Radix::Decimal)
        }
        NumberStyle::Float => {
            let value = parse_f64(text)?;
            if !value.is_finite() {
                return Err(ParseError::Overflow);
            }
            let parsed = CastTo::<T>::cast_checked(value).map_err(|_| ParseError::Overflow)?;
            if CastTo::<f64>::cast_unchecked(parsed) != value {
                return Err(ParseError::Invalid);
            }
            Ok(parsed)
        }
    }
}

fn float_from_text<T>(text: &str, style: NumberStyle) -> Result<T, ParseError>
where
    T: Primitive + core::str::FromStr,
{
    let text = trimmed(text)?;
    let parse = |s: &str| s.parse::<T>().map_err(|_| ParseError::Invalid);
    match style {
        NumberStyle::HexNumber => Err(ParseError::UnsupportedStyle),
        NumberStyle::Integer if is_signed_digits(text) => parse(text),
        NumberStyle::Integer => Err(ParseError::Invalid),
        NumberStyle::Number => {
            let plain = ungroup(text)?;
            let numeric = plain
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-'));
            if numeric {
                parse(&plain)
            } else {
                Err(ParseError::Invalid)
            }
        }
        NumberStyle::Float => parse(text),
    }
}

macro_rules! impl_from_number_text {
    (int $($type:ty),*) => {
        $(
            impl FromNumberText for $type {
                #[inline]
                fn from_number_text(text: &str, style: NumberStyle) -> Result<Self, ParseError> {
                    integer_from_text(text, style)
                }
            }
        )*
    };
    (float $($type:ty),*) => {
        $(
            impl FromNumberText for $type {
                #[inline]
                fn from_number_text(text: &str, style: NumberStyle) -> Result<Self, ParseError> {
                    float_from_text(text, style)
                }
            }
        )*
    };
}

impl_from_number_text!(int u8, i8, u16, i16, u32, i32, u64, i64);
impl_from_number_text!(float f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_style() {
        let p = NumberParser::invariant();
        assert_eq!(p.parse_integer::<i16>(" -42 "), Ok(-42));
        assert_eq!(p.parse_integer::<u8>("+7"), Ok(7));
        assert_eq!(p.parse_integer::<u8>("256"), Err(ParseError::Overflow));
        assert_eq!(p.parse_integer::<u8>("1.0"), Err(ParseError::Invalid));
        assert_eq!(p.parse_integer::<u8>("   "), Err(ParseError::Empty));
    }

    #[test]
    fn hex_style() {
        let p = NumberParser::invariant();
        assert_eq!(p.parse_hex::<u16>("ffff"), Ok(0xFFFF));
        assert_eq!(p.parse_hex::<i16>("FFFF"), Ok(-1));
        assert_eq!(p.parse_hex::<i32>("80000001"), Ok(i32::MIN + 1));
        assert_eq!(p.parse_hex::<u16>("-1"), Err(ParseError::Invalid));
        assert_eq!(p.parse_hex::<f32>("1"), Err(ParseError::UnsupportedStyle));
    }

    #[test]
    fn number_style_with_groups() {
        let p = NumberParser::invariant();
        assert_eq!(p.parse_number::<u32>("1,234,567"), Ok(1_234_567));
        assert_eq!(p.parse_number::<i32>("-1,000.00"), Ok(-1000));
        assert_eq!(p.parse_number::<i32>("1.5"), Err(ParseError::Invalid));
        assert_eq!(p.parse_number::<f64>("1,234.5"), Ok(1234.5));
        assert_eq!(p.parse_number::<f64>("1e3"), Err(ParseError::Invalid));
    }

    #[test]
    fn float_style() {
        let p = NumberParser::invariant();
        assert_eq!(p.parse_float::<f32>("1234.567"), Ok(1234.567));
        assert_eq!(p.parse_float::<f64>("1.5E+03"), Ok(1500.0));
        assert_eq!(p.parse_float::<f32>("3.4028235E+38"), Ok(f32::MAX));
        assert_eq!(p.parse_float::<i32>("1e3"), Ok(1000));
        assert_eq!(p.parse_float::<i32>("1.5"), Err(ParseError::Invalid));
        assert_eq!(p.parse_float::<u8>("1e3"), Err(ParseError::Overflow));
        assert!(p.parse_float::<f64>("NaN").unwrap().is_nan());
        assert_eq!(p.parse_float::<f32>("abc"), Err(ParseError::Invalid));
    }

    #[test]
    fn locale_normalization() {
        let german = NumberParser::with_locale(NumberLocale::new(',', '.'));
        assert_eq!(german.parse_float::<f64>("1.234,5"), Ok(1234.5));
        assert_eq!(german.parse_number::<u32>("1.000"), Ok(1000));
        assert_eq!(german.parse_integer::<i16>("-12"), Ok(-12));

        let minus = NumberParser::with_locale(NumberLocale::INVARIANT.with_negative_sign('\u{2212}'));
        assert_eq!(minus.parse_integer::<i16>("\u{2212}5"), Ok(-5));
    }
}
