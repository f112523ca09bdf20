use core::fmt;

use crate::values::formatting::ValueFormatting;
use crate::values::traits::Primitive;
use crate::values::types::{FormatOptions, Text};

/// A value together with its rendered text and the options that produced it.
///
/// An empty value carries no text and stands in for input that was never parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedValue<T> {
    value: T,
    text: Option<Text>,
    options: FormatOptions,
}

impl<T: Primitive> FormattedValue<T> {
    pub(crate) fn new(value: T, text: Text, options: FormatOptions) -> Self {
        Self {
            value,
            text: Some(text),
            options,
        }
    }

    /// Zero value without text.
    pub fn empty(options: FormatOptions) -> Self {
        Self {
            value: T::ZERO,
            text: None,
            options,
        }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Rendered text, empty for an empty value.
    pub fn text(&self) -> &str {
        self.text.as_ref().map_or("", |text| text.as_str())
    }

    #[inline]
    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// True when there is no text or only whitespace.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// Renders the same value with other options.
    pub fn reformat(&self, options: FormatOptions, formatting: &ValueFormatting) -> Self {
        formatting.create(self.value, options)
    }
}

impl<T: Primitive> Default for FormattedValue<T> {
    fn default() -> Self {
        Self::empty(FormatOptions::default())
    }
}

impl<T: Primitive> fmt::Display for FormattedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::formatting::STANDARD;

    #[test]
    fn empty_value() {
        let empty = FormattedValue::<u16>::empty(FormatOptions::HEX);
        assert!(empty.is_empty());
        assert_eq!(empty.value(), 0);
        assert_eq!(empty.text(), "");
        assert_eq!(empty.options(), FormatOptions::HEX);
        assert_eq!(FormattedValue::<f32>::default().options(), FormatOptions::DECIMAL);
    }

    #[test]
    fn created_value_keeps_options() {
        let value = STANDARD.create(0x1234u16, FormatOptions::HEX);
        assert!(!value.is_empty());
        assert_eq!(value.text(), "0x1234");
        assert_eq!(value.to_string(), "0x1234");

        let decimal = value.reformat(FormatOptions::DECIMAL, &STANDARD);
        assert_eq!(decimal.value(), 0x1234);
        assert_eq!(decimal.text(), "4660");
        assert_eq!(decimal.reformat(FormatOptions::HEX, &STANDARD), value);
    }

    #[test]
    fn zero_is_not_empty() {
        let zero = STANDARD.zero::<i16>(FormatOptions::DECIMAL);
        assert_eq!(zero.text(), "0");
        assert!(!zero.is_empty());
        assert_ne!(zero, FormattedValue::empty(FormatOptions::DECIMAL));
    }
}
