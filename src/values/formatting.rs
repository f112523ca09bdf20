//! The formatting facade: three registries plus the float precision settings.

use log::{debug, trace};

use crate::values::error::FormatError;
use crate::values::format::general::{F32_PRECISION, F32_ROUND_TRIP, F64_PRECISION, F64_ROUND_TRIP};
use crate::values::format::{FormatRegistry, FormatRule};
use crate::values::formatted::FormattedValue;
use crate::values::helpers::char_len;
use crate::values::traits::Primitive;
use crate::values::types::{FormatOptions, LetterCase, NumericType, Representation, Text};

/// Significant digits of the decimal float rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatPrecision {
    pub f32_digits: u8,
    pub f32_alternate_digits: u8,
    pub f64_digits: u8,
    pub f64_alternate_digits: u8,
}

impl FloatPrecision {
    pub const STANDARD: Self = Self {
        f32_digits: F32_PRECISION,
        f32_alternate_digits: 5,
        f64_digits: F64_PRECISION,
        f64_alternate_digits: 12,
    };

    /// Primary rules print enough digits to parse back the same value.
    pub const ROUND_TRIP: Self = Self {
        f32_digits: F32_ROUND_TRIP,
        f64_digits: F64_ROUND_TRIP,
        ..Self::STANDARD
    };

    /// Alternate digits stay below the default precision and never exceed the
    /// primary digits, primary digits stay within round-trip precision.
    pub fn validate(&self) -> Result<(), FormatError> {
        let check = |ty: NumericType, digits: u8, alternate: u8, default: u8, limit: u8| {
            if digits == 0 || digits > limit {
                Err(FormatError::InvalidPrecision { ty, digits })
            } else if alternate == 0 || alternate >= default || alternate > digits {
                Err(FormatError::InvalidPrecision { ty, digits: alternate })
            } else {
                Ok(())
            }
        };
        check(
            NumericType::F32,
            self.f32_digits,
            self.f32_alternate_digits,
            F32_PRECISION,
            F32_ROUND_TRIP,
        )?;
        check(
            NumericType::F64,
            self.f64_digits,
            self.f64_alternate_digits,
            F64_PRECISION,
            F64_ROUND_TRIP,
        )
    }
}

impl Default for FloatPrecision {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Resolves rules per representation and renders values.
///
/// Built once and shared by reference; all methods take `&self`.
#[derive(Debug, Clone)]
pub struct ValueFormatting {
    precision: FloatPrecision,
    hex: FormatRegistry,
    decimal: FormatRegistry,
    binary: FormatRegistry,
}

/// Formatting with the standard rule sets and default precision.
pub static STANDARD: ValueFormatting = ValueFormatting::standard();

const fn standard_hex() -> FormatRegistry {
    let wide_float = FormatRule::hex_parts::<f32>(2, 4, LetterCase::Upper);
    FormatRegistry::new(Representation::Hex)
        .with_rule(FormatRule::hex::<u8>(2, LetterCase::Upper), false)
        .with_rule(FormatRule::hex::<i8>(2, LetterCase::Upper), false)
        .with_rule(FormatRule::hex::<u16>(4, LetterCase::Upper), false)
        .with_rule(FormatRule::hex::<i16>(4, LetterCase::Upper), false)
        .with_rule(FormatRule::hex::<u32>(8, LetterCase::Upper), false)
        .with_rule(FormatRule::hex::<i32>(8, LetterCase::Upper), false)
        .with_rule(wide_float, false)
        .with_rule(FormatRule::short_hex::<u16>(4, LetterCase::Upper).suffix("\u{2095}"), true)
        .with_rule(wide_float.prefix(""), true)
}

const fn standard_decimal(precision: FloatPrecision) -> FormatRegistry {
    FormatRegistry::new(Representation::Decimal)
        .with_rule(FormatRule::general::<f32>(precision.f32_digits, LetterCase::Upper), false)
        .with_rule(FormatRule::general::<f64>(precision.f64_digits, LetterCase::Upper), false)
        .with_rule(
            FormatRule::general::<f32>(precision.f32_alternate_digits, LetterCase::Lower),
            true,
        )
        .with_rule(
            FormatRule::general::<f64>(precision.f64_alternate_digits, LetterCase::Lower),
            true,
        )
}

const fn standard_binary() -> FormatRegistry {
    FormatRegistry::new(Representation::Binary)
        .with_rule(FormatRule::binary::<u8>(), false)
        .with_rule(FormatRule::binary::<i8>(), false)
        .with_rule(FormatRule::binary::<u16>(), false)
        .with_rule(FormatRule::binary::<i16>(), false)
        .with_rule(FormatRule::binary::<u32>(), false)
        .with_rule(FormatRule::binary::<i32>(), false)
        .with_rule(FormatRule::binary::<u8>().prefix(""), true)
        .with_rule(FormatRule::binary::<i8>().prefix(""), true)
        .with_rule(FormatRule::binary::<u16>().prefix(""), true)
        .with_rule(FormatRule::binary::<i16>().prefix(""), true)
}

impl ValueFormatting {
    /// Standard rule sets with default precision.
    pub const fn standard() -> Self {
        Self::with_precision(FloatPrecision::STANDARD)
    }

    const fn with_precision(precision: FloatPrecision) -> Self {
        Self {
            precision,
            hex: standard_hex(),
            decimal: standard_decimal(precision),
            binary: standard_binary(),
        }
    }

    pub fn builder() -> ValueFormattingBuilder {
        ValueFormattingBuilder::new()
    }

    #[inline]
    pub const fn precision(&self) -> FloatPrecision {
        self.precision
    }

    pub const fn registry(&self, representation: Representation) -> &FormatRegistry {
        match representation {
            Representation::Decimal => &self.decimal,
            Representation::Hex => &self.hex,
            Representation::Binary => &self.binary,
        }
    }

    /// Renders `value` according to `options`.
    ///
    /// A primary rendering longer than a non-zero `max_length` is replaced by the
    /// alternate rendering, which may itself still be longer.
    pub fn format<T: Primitive>(&self, value: T, options: &FormatOptions) -> Text {
        let registry = self.registry(options.representation());
        let value = value.to_numeric();
        let text = registry.render(value, options.use_alternate());
        if options.use_alternate()
            || options.max_length() == 0
            || char_len(&text) <= options.max_length()
        {
            return text;
        }
        trace!(
            "{} exceeds {} chars, using alternate {} rule",
            text.as_str(),
            options.max_length(),
            options.representation()
        );
        registry.render(value, true)
    }

    /// Renders with the primary rule of `representation`.
    pub fn format_default<T: Primitive>(&self, value: T, representation: Representation) -> Text {
        self.format(value, &FormatOptions::new(representation))
    }

    /// Renders the already split parts of a composite value.
    pub fn format_parts(
        &self,
        ty: NumericType,
        options: &FormatOptions,
        parts: &[u16],
    ) -> Result<Text, FormatError> {
        self.registry(options.representation())
            .format_parts(ty, options.use_alternate(), parts)
    }

    /// Declared maximum length of the registered rule, 0 if none is registered.
    pub fn max_length_output(&self, ty: NumericType, options: &FormatOptions) -> usize {
        let registry = self.registry(options.representation());
        let rule = registry
            .get_format(ty, options.use_alternate())
            .or_else(|| registry.get_format(ty, false));
        match rule {
            Some(rule) => rule.max_length(),
            None if options.representation() == Representation::Decimal => {
                registry.get_format_or_fallback(ty, false).max_length()
            }
            None => 0,
        }
    }

    /// Prefix of the resolved rule.
    pub fn format_prefix(&self, ty: NumericType, options: &FormatOptions) -> &'static str {
        self.registry(options.representation())
            .get_format_or_fallback(ty, options.use_alternate())
            .prefix_str()
    }

    /// Suffix of the resolved rule.
    pub fn format_suffix(&self, ty: NumericType, options: &FormatOptions) -> &'static str {
        self.registry(options.representation())
            .get_format_or_fallback(ty, options.use_alternate())
            .suffix_str()
    }

    pub fn create<T: Primitive>(&self, value: T, options: FormatOptions) -> FormattedValue<T> {
        let text = self.format(value, &options);
        FormattedValue::new(value, text, options)
    }

    pub fn zero<T: Primitive>(&self, options: FormatOptions) -> FormattedValue<T> {
        self.create(T::ZERO, options)
    }
}

impl Default for ValueFormatting {
    fn default() -> Self {
        Self::standard()
    }
}

/// Most rules a builder can hold: every slot of every registry.
const MAX_RULES: usize = 3 * 2 * NumericType::COUNT;

/// Builder for customized formatting.
///
/// Starts from the standard rule sets. Added rules replace the standard ones and
/// everything is validated on [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ValueFormattingBuilder {
    precision: FloatPrecision,
    rules: heapless::Vec<(FormatRule, bool), MAX_RULES>,
    overflow: bool,
}

impl ValueFormattingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: FloatPrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn float_digits(mut self, f32_digits: u8, f64_digits: u8) -> Self {
        self.precision.f32_digits = f32_digits;
        self.precision.f64_digits = f64_digits;
        self
    }

    pub fn alternate_float_digits(mut self, f32_digits: u8, f64_digits: u8) -> Self {
        self.precision.f32_alternate_digits = f32_digits;
        self.precision.f64_alternate_digits = f64_digits;
        self
    }

    /// Adds or replaces a primary or alternate rule.
    pub fn register(mut self, rule: FormatRule, alternate: bool) -> Self {
        if self.rules.push((rule, alternate)).is_err() {
            self.overflow = true;
        }
        self
    }

    pub fn build(self) -> Result<ValueFormatting, FormatError> {
        if self.overflow {
            return Err(FormatError::TooManyRules(MAX_RULES));
        }
        self.precision.validate()?;

        let mut formatting = ValueFormatting::with_precision(self.precision);
        for (rule, alternate) in self.rules {
            let registry = match rule.representation() {
                Representation::Decimal => &mut formatting.decimal,
                Representation::Hex => &mut formatting.hex,
                Representation::Binary => &mut formatting.binary,
            };
            registry.register(rule, alternate)?;
        }
        debug!("build value formatting with {:?}", self.precision);
        Ok(formatting)
    }
}
