use core::fmt;

/// Capacity, in bytes, of every formatted text buffer.
pub const TEXT_CAPACITY: usize = 72;

/// Fixed-capacity text produced by formatting.
pub type Text = heapless::String<TEXT_CAPACITY>;

/// Storage class of a numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    SignedInt,
    UnsignedInt,
    Float,
}

/// The ten primitive numeric types a register value can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl NumericType {
    pub const COUNT: usize = 10;

    pub const ALL: [NumericType; Self::COUNT] = [
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::F32,
        Self::F64,
    ];

    /// Dense index used by the per-type rule tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn kind(self) -> NumericKind {
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => NumericKind::UnsignedInt,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => NumericKind::SignedInt,
            Self::F32 | Self::F64 => NumericKind::Float,
        }
    }

    /// Size in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.size() as u32 * 8
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self.kind(), NumericKind::Float)
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Floats count as signed.
    #[inline]
    pub const fn is_signed(self) -> bool {
        !matches!(self.kind(), NumericKind::UnsignedInt)
    }

    /// Integer type of the same width with the opposite signedness.
    pub const fn toggle_signed(self) -> Option<NumericType> {
        match self {
            Self::U8 => Some(Self::I8),
            Self::I8 => Some(Self::U8),
            Self::U16 => Some(Self::I16),
            Self::I16 => Some(Self::U16),
            Self::U32 => Some(Self::I32),
            Self::I32 => Some(Self::U32),
            Self::U64 => Some(Self::I64),
            Self::I64 => Some(Self::U64),
            Self::F32 | Self::F64 => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Radix family used when rendering or parsing a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    #[default]
    Decimal,
    Hex,
    Binary,
}

impl Representation {
    /// Hex for integers, decimal for floats.
    pub const fn default_for(ty: NumericType) -> Self {
        if ty.is_float() {
            Self::Decimal
        } else {
            Self::Hex
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Hex => "hex",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

impl LetterCase {
    #[inline]
    pub const fn is_upper(self) -> bool {
        matches!(self, Self::Upper)
    }
}

/// How a value should be rendered and parsed.
///
/// `max_length` of 0 disables the length ceiling. With a non-zero ceiling a primary
/// rendering that is longer falls back to the alternate rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    representation: Representation,
    use_alternate: bool,
    max_length: usize,
    empty_is_zero: bool,
}

impl FormatOptions {
    pub const DECIMAL: Self = Self::new(Representation::Decimal);
    pub const HEX: Self = Self::new(Representation::Hex);
    pub const BINARY: Self = Self::new(Representation::Binary);

    /// Primary rule, no length ceiling, empty input parses as zero.
    pub const fn new(representation: Representation) -> Self {
        Self {
            representation,
            use_alternate: false,
            max_length: 0,
            empty_is_zero: true,
        }
    }

    /// Options matching the natural representation of a type.
    pub const fn default_for(ty: NumericType) -> Self {
        Self::new(Representation::default_for(ty))
    }

    pub const fn with_alternate(mut self, use_alternate: bool) -> Self {
        self.use_alternate = use_alternate;
        self
    }

    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub const fn with_empty_is_zero(mut self, empty_is_zero: bool) -> Self {
        self.empty_is_zero = empty_is_zero;
        self
    }

    #[inline]
    pub const fn representation(&self) -> Representation {
        self.representation
    }

    #[inline]
    pub const fn use_alternate(&self) -> bool {
        self.use_alternate
    }

    #[inline]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    #[inline]
    pub const fn empty_is_zero(&self) -> bool {
        self.empty_is_zero
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::DECIMAL
    }
}

/// Order of the two 16-bit words that make up a 32-bit value.
///
/// `Big` stores the most significant word at the lower address. `Undefined` and
/// `Native` both resolve to the platform order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    #[default]
    Undefined,
    Native,
    Big,
    Little,
}

impl Endianness {
    pub const PLATFORM: Endianness = if cfg!(target_endian = "big") {
        Endianness::Big
    } else {
        Endianness::Little
    };

    /// Maps `Undefined` and `Native` to the concrete platform order.
    pub const fn resolve(self) -> Endianness {
        match self {
            Self::Undefined | Self::Native => Self::PLATFORM,
            other => other,
        }
    }

    #[inline]
    pub const fn is_big(self) -> bool {
        matches!(self.resolve(), Self::Big)
    }

    #[inline]
    pub const fn is_platform(self) -> bool {
        self.is_big() == matches!(Self::PLATFORM, Self::Big)
    }
}

/// Numeric type paired with its display representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueType {
    pub ty: NumericType,
    pub representation: Representation,
}

impl ValueType {
    pub const fn new(ty: NumericType) -> Self {
        Self {
            ty,
            representation: Representation::default_for(ty),
        }
    }

    pub const fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    pub const fn options(self) -> FormatOptions {
        FormatOptions::new(self.representation)
    }
}

/// Display style of a register cell in an editor grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayFormat {
    Led,
    Binary,
    Hex,
    Integer,
    Float32,
}

impl DisplayFormat {
    /// `None` for LED cells, which show a single bit and have no text form.
    pub const fn value_type(self) -> Option<ValueType> {
        match self {
            Self::Led => None,
            Self::Binary => {
                Some(ValueType::new(NumericType::U16).with_representation(Representation::Binary))
            }
            Self::Hex => Some(ValueType::new(NumericType::U16)),
            Self::Integer => Some(
                ValueType::new(NumericType::I16).with_representation(Representation::Decimal),
            ),
            Self::Float32 => Some(ValueType::new(NumericType::F32)),
        }
    }

    /// Number of register words a cell spans.
    pub const fn words(self) -> usize {
        match self {
            Self::Float32 => 2,
            _ => 1,
        }
    }
}
