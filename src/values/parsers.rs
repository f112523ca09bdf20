//! Text to [`FormattedValue`] parsers that honor the registered prefixes and the
//! empty-input policy of [`FormatOptions`].

use crate::values::error::ParseError;
use crate::values::formatted::FormattedValue;
use crate::values::formatting::ValueFormatting;
use crate::values::parse::{FromNumberText, NumberParser};
use crate::values::radix::{Radix, RadixInteger};
use crate::values::traits::{Float, Primitive};
use crate::values::types::{FormatOptions, Representation};

/// Parses text into a formatted value of `T`.
pub trait ValueParser<T: Primitive> {
    fn try_parse(&self, text: &str, options: &FormatOptions) -> Result<FormattedValue<T>, ParseError>;
}

/// Blank input, or a lone minus sign when `allow_sign` is set.
fn is_blank(text: &str, allow_sign: bool) -> bool {
    let text = text.trim();
    text.is_empty() || (allow_sign && text == "-")
}

/// Parser for integer types in all three representations.
#[derive(Debug, Clone, Copy)]
pub struct IntegerParser<'f> {
    formatting: &'f ValueFormatting,
    numbers: NumberParser,
}

impl<'f> IntegerParser<'f> {
    pub const fn new(formatting: &'f ValueFormatting) -> Self {
        Self::with_numbers(formatting, NumberParser::invariant())
    }

    pub const fn with_numbers(formatting: &'f ValueFormatting, numbers: NumberParser) -> Self {
        Self { formatting, numbers }
    }

    /// Removes the prefix registered for `T` under `options`, ignoring case.
    ///
    /// Returns the remaining text and whether a prefix was removed.
    pub fn strip_prefix<'t, T: Primitive>(&self, text: &'t str, options: &FormatOptions) -> (&'t str, bool) {
        let prefix = self.formatting.format_prefix(T::TYPE, options);
        let trimmed = text.trim();
        if prefix.is_empty() {
            return (trimmed, false);
        }
        match trimmed.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => (&trimmed[prefix.len()..], true),
            _ => (trimmed, false),
        }
    }

    /// Removes the suffix registered for `T` under `options`.
    pub fn strip_suffix<'t, T: Primitive>(&self, text: &'t str, options: &FormatOptions) -> &'t str {
        let suffix = self.formatting.format_suffix(T::TYPE, options);
        let trimmed = text.trim();
        if suffix.is_empty() {
            return trimmed;
        }
        trimmed.strip_suffix(suffix).unwrap_or(trimmed).trim_end()
    }

    /// Parses hex when the text carries the hex prefix or `is_hex_default` is set,
    /// otherwise decimal first and hex second.
    pub fn try_parse_auto<T>(&self, text: &str, is_hex_default: bool) -> Result<FormattedValue<T>, ParseError>
    where
        T: RadixInteger + FromNumberText,
    {
        let hex = FormatOptions::HEX;
        let (_, had_prefix) = self.strip_prefix::<T>(text, &hex);
        if had_prefix || is_hex_default {
            self.try_parse(text, &hex)
        } else {
            self.try_parse(text, &FormatOptions::DECIMAL)
                .or_else(|_| self.try_parse(text, &hex))
        }
    }
}

impl<T> ValueParser<T> for IntegerParser<'_>
where
    T: RadixInteger + FromNumberText,
{
    fn try_parse(&self, text: &str, options: &FormatOptions) -> Result<FormattedValue<T>, ParseError> {
        let representation = options.representation();
        let digits = match representation {
            Representation::Decimal => text,
            _ => self.strip_suffix::<T>(self.strip_prefix::<T>(text, options).0, options),
        };
        let parsed = match representation {
            Representation::Decimal => self.numbers.parse_integer::<T>(digits),
            Representation::Hex => self.numbers.parse_hex::<T>(digits),
            Representation::Binary => T::parse_radix(digits, Radix::Binary),
        };
        match parsed {
            Ok(value) => Ok(self.formatting.create(value, *options)),
            Err(_) if options.empty_is_zero()
                && is_blank(digits, T::IS_SIGNED && representation == Representation::Decimal) =>
            {
                Ok(self.formatting.zero(*options))
            }
            Err(err) => Err(err),
        }
    }
}

/// Parser for `f32` and `f64` in decimal representation.
#[derive(Debug, Clone, Copy)]
pub struct FloatParser<'f> {
    formatting: &'f ValueFormatting,
    numbers: NumberParser,
}

impl<'f> FloatParser<'f> {
    pub const fn new(formatting: &'f ValueFormatting) -> Self {
        Self::with_numbers(formatting, NumberParser::invariant())
    }

    pub const fn with_numbers(formatting: &'f ValueFormatting, numbers: NumberParser) -> Self {
        Self { formatting, numbers }
    }
}

impl<T> ValueParser<T> for FloatParser<'_>
where
    T: Float + FromNumberText,
{
    fn try_parse(&self, text: &str, options: &FormatOptions) -> Result<FormattedValue<T>, ParseError> {
        if options.representation() != Representation::Decimal {
            return Err(ParseError::UnsupportedRepresentation(options.representation()));
        }
        match self.numbers.parse_float::<T>(text) {
            Ok(value) => Ok(self.formatting.create(value, *options)),
            Err(_) if options.empty_is_zero() && is_blank(text, true) => {
                Ok(self.formatting.zero(*options))
            }
            Err(err) => Err(err),
        }
    }
}

/// Types with a parser chosen by their kind.
pub trait DefaultParse: Primitive {
    fn parse_with(
        formatting: &ValueFormatting,
        text: &str,
        options: &FormatOptions,
    ) -> Result<FormattedValue<Self>, ParseError>;
}

macro_rules! impl_default_parse {
    ($parser:ident => $($type:ty),*) => {
        $(
            impl DefaultParse for $type {
                #[inline]
                fn parse_with(
                    formatting: &ValueFormatting,
                    text: &str,
                    options: &FormatOptions,
                ) -> Result<FormattedValue<Self>, ParseError> {
                    $parser::new(formatting).try_parse(text, options)
                }
            }
        )*
    };
}

impl_default_parse!(IntegerParser => u8, i8, u16, i16, u32, i32, u64, i64);
impl_default_parse!(FloatParser => f32, f64);
