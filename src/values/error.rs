use crate::values::types::{NumericType, Representation};

/// Errors that can occur when accessing register words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    /// Address (after offset translation) or word count exceeds buffer bounds.
    #[error("address {address:#06x} with {count} word(s) exceeds buffer bounds")]
    OutOfRange { address: u16, count: usize },
    /// Operation attempted with zero words.
    #[error("operation attempted with zero words")]
    ZeroLength,
    /// A word slice does not hold the expected number of words.
    #[error("expected {expected} word(s) but got {found}")]
    WordCount { expected: usize, found: usize },
}

/// Errors that can occur when parsing text into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input is empty or blank and the empty-input policy does not apply.
    #[error("cannot parse a value from empty input")]
    Empty,
    /// Input contains characters that are not valid for the requested style.
    #[error("invalid digit or symbol in numeric input")]
    Invalid,
    /// Input is well formed but does not fit the target type.
    #[error("numeric input is out of range for the target type")]
    Overflow,
    /// The number style cannot be used with the target type.
    #[error("number style not supported for the target type")]
    UnsupportedStyle,
    /// The parser does not handle this representation.
    #[error("representation {0} is not supported by this parser")]
    UnsupportedRepresentation(Representation),
}

/// Errors raised by checked numeric conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    /// The destination type cannot hold the source value.
    #[error("arithmetic overflow in checked conversion")]
    ArithmeticOverflow,
}

/// Errors raised while registering or applying format rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Rule was built for another representation than the registry's.
    #[error("rule for {found} cannot be registered in a {expected} registry")]
    RepresentationMismatch {
        expected: Representation,
        found: Representation,
    },
    /// The rule's pattern cannot render values of this type or representation.
    #[error("pattern is not supported for {ty} in {representation}")]
    UnsupportedPattern {
        ty: NumericType,
        representation: Representation,
    },
    /// Declared output length does not fit the text capacity.
    #[error("declared output length {length} exceeds text capacity {capacity}")]
    CapacityExceeded { length: usize, capacity: usize },
    /// Significant digit settings are out of the supported range.
    #[error("invalid floating point precision: {digits} digit(s) for {ty}")]
    InvalidPrecision { ty: NumericType, digits: u8 },
    /// Part formatting requested on a rule that is not composite.
    #[error("format rule for {0} is not composite")]
    NotComposite(NumericType),
    /// Number of parts does not match the composite rule.
    #[error("composite rule expects {expected} part(s) but got {found}")]
    PartCount { expected: usize, found: usize },
    /// More rules were added to a builder than it can hold.
    #[error("builder holds at most {0} rules")]
    TooManyRules(usize),
    /// Output did not fit into the text buffer.
    #[error("formatted output exceeds text capacity")]
    Overflow,
}
