use core::fmt::{self, Write};

use crate::values::error::FormatError;
use crate::values::format::general::{self, write_general};
use crate::values::helpers::char_len;
use crate::values::traits::{Float, Integer, NumericValue, Primitive};
use crate::values::types::{LetterCase, NumericType, Representation};

/// Writes the body of a value, between the rule's prefix and suffix.
pub type Converter = fn(NumericValue, &FormatRule, &mut dyn Write) -> fmt::Result;

/// Numeric pattern of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Decimal digits, zero padded to the rule's padding.
    Integer,
    /// Two's complement hex digits, zero padded to the rule's padding.
    Hex,
    /// Significant digits of a float, 0 selects the type's default precision.
    General { digits: u8 },
}

/// How a rule renders the body of a value.
#[derive(Debug, Clone, Copy)]
pub enum FormatSpec {
    Pattern(Pattern),
    /// Bit pattern split into equal parts, most significant part first.
    Composite { parts: u8 },
    Conversion(Converter),
}

/// A single way of rendering values of one numeric type.
///
/// The declared maximum length is the body length plus the chars of prefix and
/// suffix, so rules keep it consistent when either is replaced.
#[derive(Debug, Clone, Copy)]
pub struct FormatRule {
    ty: NumericType,
    representation: Representation,
    spec: FormatSpec,
    prefix: &'static str,
    suffix: &'static str,
    padding: u8,
    case: LetterCase,
    body_length: usize,
    fallback: bool,
}

const HEX_PREFIX: &str = "0x";
const BINARY_PREFIX: &str = "0b";

/// Widest decimal rendering, sign included.
const fn decimal_width(ty: NumericType) -> usize {
    match ty {
        NumericType::U8 => 3,
        NumericType::I8 => 4,
        NumericType::U16 => 5,
        NumericType::I16 => 6,
        NumericType::U32 => 10,
        NumericType::I32 => 11,
        NumericType::U64 | NumericType::I64 => 20,
        NumericType::F32 | NumericType::F64 => general::max_length(ty, 0),
    }
}

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

impl FormatRule {
    const fn raw(
        ty: NumericType,
        representation: Representation,
        spec: FormatSpec,
        prefix: &'static str,
        padding: u8,
        case: LetterCase,
        body_length: usize,
    ) -> Self {
        Self {
            ty,
            representation,
            spec,
            prefix,
            suffix: "",
            padding,
            case,
            body_length,
            fallback: false,
        }
    }

    pub(crate) const fn hex_for(ty: NumericType, padding: u8, case: LetterCase) -> Self {
        let body = max(ty.size() * 2, padding as usize);
        Self::raw(
            ty,
            Representation::Hex,
            FormatSpec::Pattern(Pattern::Hex),
            HEX_PREFIX,
            padding,
            case,
            body,
        )
    }

    pub(crate) const fn integer_for(ty: NumericType, padding: u8) -> Self {
        let sign = if ty.is_signed() { 1 } else { 0 };
        let body = max(decimal_width(ty), padding as usize + sign);
        Self::raw(
            ty,
            Representation::Decimal,
            FormatSpec::Pattern(Pattern::Integer),
            "",
            padding,
            LetterCase::Upper,
            body,
        )
    }

    pub(crate) const fn general_for(ty: NumericType, digits: u8, case: LetterCase) -> Self {
        Self::raw(
            ty,
            Representation::Decimal,
            FormatSpec::Pattern(Pattern::General { digits }),
            "",
            0,
            case,
            general::max_length(ty, digits),
        )
    }

    /// Rule used when nothing is registered: plain decimal digits for integers and
    /// default precision for floats.
    pub const fn fallback(ty: NumericType) -> Self {
        let rule = if ty.is_float() {
            Self::general_for(ty, 0, LetterCase::Upper)
        } else {
            Self::integer_for(ty, 0)
        };
        rule.as_fallback()
    }

    /// `0x` followed by at least `padding` hex digits.
    pub const fn hex<T: Integer>(padding: u8, case: LetterCase) -> Self {
        Self::hex_for(T::TYPE, padding, case)
    }

    /// Hex digits without prefix.
    pub const fn short_hex<T: Integer>(padding: u8, case: LetterCase) -> Self {
        Self::hex_for(T::TYPE, padding, case).prefix("")
    }

    /// Hex digits of `parts` equal slices of the bit pattern, each padded.
    ///
    /// Works on floats too, rendering their IEEE-754 encoding.
    pub const fn hex_parts<T: Primitive>(parts: u8, padding: u8, case: LetterCase) -> Self {
        let parts = if parts == 0 { 1 } else { parts };
        let part_digits = T::SIZE * 2 / parts as usize;
        let body = parts as usize * max(part_digits, padding as usize);
        Self::raw(
            T::TYPE,
            Representation::Hex,
            FormatSpec::Composite { parts },
            HEX_PREFIX,
            padding,
            case,
            body,
        )
    }

    /// Decimal digits padded with zeros to `padding`.
    pub const fn integer<T: Integer>(padding: u8) -> Self {
        Self::integer_for(T::TYPE, padding)
    }

    /// `digits` significant digits, 0 for the type's default precision.
    pub const fn general<T: Float>(digits: u8, case: LetterCase) -> Self {
        Self::general_for(T::TYPE, digits, case)
    }

    /// `0b` followed by every bit of the type.
    pub const fn binary<T: Integer>() -> Self {
        let bits = T::BITS as usize;
        Self::raw(
            T::TYPE,
            Representation::Binary,
            FormatSpec::Conversion(write_binary),
            BINARY_PREFIX,
            bits as u8,
            LetterCase::Upper,
            bits,
        )
    }

    /// Rule driven by a custom converter.
    pub const fn conversion(
        ty: NumericType,
        representation: Representation,
        converter: Converter,
        body_length: usize,
    ) -> Self {
        Self::raw(
            ty,
            representation,
            FormatSpec::Conversion(converter),
            "",
            0,
            LetterCase::Upper,
            body_length,
        )
    }

    pub const fn prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    pub const fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    pub const fn case(mut self, case: LetterCase) -> Self {
        self.case = case;
        self
    }

    pub(crate) const fn as_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }

    #[inline]
    pub const fn numeric_type(&self) -> NumericType {
        self.ty
    }

    #[inline]
    pub const fn representation(&self) -> Representation {
        self.representation
    }

    #[inline]
    pub const fn spec(&self) -> FormatSpec {
        self.spec
    }

    #[inline]
    pub const fn prefix_str(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn suffix_str(&self) -> &'static str {
        self.suffix
    }

    #[inline]
    pub const fn padding(&self) -> u8 {
        self.padding
    }

    #[inline]
    pub const fn letter_case(&self) -> LetterCase {
        self.case
    }

    /// True when the rule came from the built-in fallback table.
    #[inline]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Number of composite parts, `None` for other rules.
    pub const fn parts(&self) -> Option<usize> {
        match self.spec {
            FormatSpec::Composite { parts } => Some(parts as usize),
            _ => None,
        }
    }

    /// Declared upper bound of chars written by this rule.
    pub const fn max_length(&self) -> usize {
        self.body_length + char_len(self.prefix) + char_len(self.suffix)
    }

    /// Checks that the rule can render its type.
    pub fn validate(&self) -> Result<(), FormatError> {
        let unsupported = FormatError::UnsupportedPattern {
            ty: self.ty,
            representation: self.representation,
        };
        match (self.spec, self.representation) {
            (FormatSpec::Pattern(Pattern::Integer), Representation::Decimal)
            | (FormatSpec::Pattern(Pattern::Hex), Representation::Hex)
                if self.ty.is_integer() => {}
            (FormatSpec::Pattern(Pattern::General { digits }), Representation::Decimal)
                if self.ty.is_float() =>
            {
                if digits > general::round_trip_precision(self.ty) {
                    return Err(FormatError::InvalidPrecision { ty: self.ty, digits });
                }
            }
            (FormatSpec::Composite { parts }, Representation::Hex | Representation::Binary) => {
                if parts == 0 || self.ty.bits() % parts as u32 != 0 {
                    return Err(unsupported);
                }
            }
            (FormatSpec::Conversion(_), _) => {}
            _ => return Err(unsupported),
        }
        Ok(())
    }

    /// Writes `prefix`, body and `suffix` for `value`.
    pub fn write(&self, value: NumericValue, out: &mut dyn Write) -> fmt::Result {
        out.write_str(self.prefix)?;
        match self.spec {
            FormatSpec::Pattern(Pattern::Integer) => match value.integer() {
                Some(v) => write_padded_decimal(out, v, self.padding as usize)?,
                None => self.write_float(value, 0, out)?,
            },
            FormatSpec::Pattern(Pattern::Hex) => {
                self.write_bits(out, value.bits(), self.padding as usize)?
            }
            FormatSpec::Pattern(Pattern::General { digits }) => {
                self.write_float(value, digits, out)?
            }
            FormatSpec::Composite { parts } => {
                let parts = parts.max(1) as u32;
                let part_bits = self.ty.bits() / parts;
                let mask = mask(part_bits);
                for i in (0..parts).rev() {
                    let part = (value.bits() >> (part_bits * i)) & mask;
                    self.write_bits(out, part, self.padding as usize)?;
                }
            }
            FormatSpec::Conversion(convert) => convert(value, self, out)?,
        }
        out.write_str(self.suffix)
    }

    /// Writes a composite rule for `parts` already split, most significant first.
    pub fn write_parts(&self, parts: &[u16], out: &mut dyn Write) -> Result<(), FormatError> {
        let expected = self.parts().ok_or(FormatError::NotComposite(self.ty))?;
        if parts.len() != expected {
            return Err(FormatError::PartCount {
                expected,
                found: parts.len(),
            });
        }
        self.write_part_list(parts, out)
            .map_err(|_| FormatError::Overflow)
    }

    fn write_part_list(&self, parts: &[u16], out: &mut dyn Write) -> fmt::Result {
        let part_bits = self.ty.bits() / parts.len() as u32;
        out.write_str(self.prefix)?;
        for part in parts {
            self.write_bits(out, u64::from(*part) & mask(part_bits), self.padding as usize)?;
        }
        out.write_str(self.suffix)
    }

    fn write_float(&self, value: NumericValue, digits: u8, out: &mut dyn Write) -> fmt::Result {
        match value.float() {
            Some(v) => {
                let digits = if digits == 0 {
                    general::default_precision(self.ty)
                } else {
                    digits
                };
                write_general(out, v, digits as usize, self.case)
            }
            None => write!(out, "{}", value.integer().unwrap_or_default()),
        }
    }

    fn write_bits(&self, out: &mut dyn Write, bits: u64, width: usize) -> fmt::Result {
        match (self.representation, self.case) {
            (Representation::Binary, _) => write!(out, "{:0width$b}", bits),
            (_, LetterCase::Upper) => write!(out, "{:0width$X}", bits),
            (_, LetterCase::Lower) => write!(out, "{:0width$x}", bits),
        }
    }
}

const fn mask(bits: u32) -> u64 {
    if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }
}

fn write_padded_decimal(out: &mut dyn Write, value: i128, padding: usize) -> fmt::Result {
    if value < 0 {
        write!(out, "-{:0padding$}", value.unsigned_abs())
    } else {
        write!(out, "{:0padding$}", value)
    }
}

/// Every bit of the value's type, most significant first.
fn write_binary(value: NumericValue, _rule: &FormatRule, out: &mut dyn Write) -> fmt::Result {
    let width = value.numeric_type().bits() as usize;
    write!(out, "{:0width$b}", value.bits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::types::{TEXT_CAPACITY, Text};

    fn render<T: Primitive>(rule: &FormatRule, value: T) -> Text {
        let mut text = Text::new();
        rule.write(value.to_numeric(), &mut text).unwrap();
        assert!(rule.max_length() <= TEXT_CAPACITY);
        text
    }

    #[test]
    fn hex_patterns() {
        let rule = FormatRule::hex::<u16>(4, LetterCase::Upper);
        assert_eq!(render(&rule, 0x0123u16), "0x0123");
        assert_eq!(render(&FormatRule::hex::<i16>(4, LetterCase::Upper), -1i16), "0xFFFF");
        assert_eq!(render(&FormatRule::hex::<u8>(2, LetterCase::Lower), 0xABu8), "0xab");
        assert_eq!(rule.max_length(), 6);
    }

    #[test]
    fn suffix_counts_chars() {
        let rule = FormatRule::short_hex::<u16>(4, LetterCase::Upper).suffix("\u{2095}");
        assert_eq!(render(&rule, 0xFFFFu16), "FFFF\u{2095}");
        assert_eq!(rule.max_length(), 5);
    }

    #[test]
    fn composite_float_parts() {
        let rule = FormatRule::hex_parts::<f32>(2, 4, LetterCase::Upper);
        assert_eq!(render(&rule, 1.4f32), "0x3FB33333");
        assert_eq!(render(&rule, 1234.567f32), "0x449A5225");
        assert_eq!(rule.max_length(), 10);

        let mut text = Text::new();
        rule.write_parts(&[0x449A, 0x5225], &mut text).unwrap();
        assert_eq!(text, "0x449A5225");
        assert_eq!(
            rule.write_parts(&[1], &mut Text::new()),
            Err(FormatError::PartCount { expected: 2, found: 1 })
        );
        assert_eq!(
            FormatRule::hex::<u16>(4, LetterCase::Upper).write_parts(&[1], &mut Text::new()),
            Err(FormatError::NotComposite(NumericType::U16))
        );
    }

    #[test]
    fn integer_patterns() {
        assert_eq!(render(&FormatRule::integer::<i16>(0), -32768i16), "-32768");
        assert_eq!(render(&FormatRule::integer::<u16>(4), 7u16), "0007");
        assert_eq!(render(&FormatRule::integer::<i16>(4), -5i16), "-0005");
        assert_eq!(FormatRule::integer::<u8>(0).max_length(), 3);
        assert_eq!(FormatRule::integer::<i64>(0).max_length(), 20);
    }

    #[test]
    fn binary_is_full_width() {
        let rule = FormatRule::binary::<u16>();
        assert_eq!(render(&rule, 5u16), "0b0000000000000101");
        assert_eq!(render(&FormatRule::binary::<i8>(), -1i8), "0b11111111");
        assert_eq!(rule.max_length(), 18);
    }

    #[test]
    fn general_pattern() {
        let rule = FormatRule::general::<f32>(0, LetterCase::Upper);
        assert_eq!(render(&rule, 1234.567f32), "1234.567");
        assert_eq!(render(&rule, 123_456_789f32), "1.234568E+08");
        let lower = FormatRule::general::<f32>(6, LetterCase::Lower);
        assert_eq!(render(&lower, 123_456_789f32), "1.23457e+08");
    }

    #[test]
    fn fallback_rules() {
        let rule = FormatRule::fallback(NumericType::U64);
        assert!(rule.is_fallback());
        assert_eq!(rule.representation(), Representation::Decimal);
        assert_eq!(render(&rule, u64::MAX), "18446744073709551615");
        assert_eq!(render(&FormatRule::fallback(NumericType::F64), 0.1f64), "0.1");
    }

    #[test]
    fn validation() {
        assert!(FormatRule::hex::<u32>(8, LetterCase::Upper).validate().is_ok());
        assert!(FormatRule::binary::<u8>().validate().is_ok());
        assert_eq!(
            FormatRule::general::<f64>(18, LetterCase::Upper).validate(),
            Err(FormatError::InvalidPrecision { ty: NumericType::F64, digits: 18 })
        );
        assert_eq!(
            FormatRule::hex_parts::<u32>(3, 0, LetterCase::Upper).validate(),
            Err(FormatError::UnsupportedPattern {
                ty: NumericType::U32,
                representation: Representation::Hex,
            })
        );
    }
}
