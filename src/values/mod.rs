pub mod buffer;
pub mod cast;
pub mod error;
pub mod format;
pub mod formatted;
pub mod formatting;
pub mod helpers;
pub mod item;
pub mod marshal;
pub mod parse;
pub mod parsers;
pub mod radix;
pub mod shared;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_support;

pub use buffer::{RegisterBuffer, RegisterRead, RegisterView, RegisterWrite};
pub use cast::CastTo;
pub use error::{CastError, FormatError, ParseError, RegisterError};
pub use format::{Converter, FormatRegistry, FormatRule, FormatSpec, Pattern};
pub use formatted::FormattedValue;
pub use formatting::{FloatPrecision, STANDARD, ValueFormatting, ValueFormattingBuilder};
pub use item::{
    DataItem, Mapped, Native, NativeDataItem, NoObserver, TypedDataItem, ValueChanged,
    ValueObserver, Virtual, VirtualDataItem,
};
pub use parse::{NumberLocale, NumberParser, NumberStyle};
pub use parsers::{DefaultParse, FloatParser, IntegerParser, ValueParser};
pub use radix::{Radix, RadixInteger};
pub use shared::SharedRegisters;
pub use traits::{Float, Integer, NumericValue, Primitive};
pub use types::{
    DisplayFormat, Endianness, FormatOptions, LetterCase, NumericKind, NumericType,
    Representation, TEXT_CAPACITY, Text, ValueType,
};

pub mod prelude {
    pub use super::{
        CastError, DataItem, Endianness, FormatError, FormatOptions, FormatRule, FormattedValue,
        IntegerParser, FloatParser, NativeDataItem, NumericType, ParseError, Primitive,
        RegisterBuffer, RegisterError, RegisterRead, RegisterView, RegisterWrite,
        Representation, SharedRegisters, TypedDataItem, ValueChanged, ValueFormatting,
        ValueParser, VirtualDataItem,
    };
}
