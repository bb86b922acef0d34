//! The closed set of constant value types and their format rules.
//!
//! A value only becomes a [`ConstantValue`] through one of the `From` impls
//! below, so a constant of any other type is rejected when the registry is
//! compiled rather than when it is printed.

use std::fmt;

/// A single C `char`.
///
/// Rust's `c_char` is an alias for `i8` or `u8` depending on the target, which
/// would make a `char` constant print as a number. Wrapping it keeps the `%c`
/// rule separate from the narrow integer rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CChar(pub u8);

/// An extended-precision (`long double`) value, carried as an `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongDouble(pub f64);

/// A constant value tagged with its static C type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstantValue {
    /// `char`
    Char(u8),
    /// `signed char`
    I8(i8),
    /// `unsigned char`
    U8(u8),
    /// `short`
    I16(i16),
    /// `unsigned short`
    U16(u16),
    /// `int`
    I32(i32),
    /// `unsigned int`
    U32(u32),
    /// `long` / `long long`
    I64(i64),
    /// `unsigned long` / `unsigned long long`
    U64(u64),
    /// `float`
    F32(f32),
    /// `double`
    F64(f64),
    /// `long double`
    LongDouble(f64),
    /// `char *` / `const char *`
    Text(&'static str),
}

/// The rendering rule selected by a value's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSpec {
    /// The raw byte (`%c`)
    Char,
    /// Signed decimal at the value's own width (`%hhd` .. `%lld`)
    SignedDecimal,
    /// Unsigned decimal at the value's own width (`%hhu` .. `%llu`)
    UnsignedDecimal,
    /// Six fractional digits (`%f`)
    FixedPoint,
    /// `long double` through the long-integer pattern (`%ld`)
    LongDoubleAsInteger,
    /// Literal text, no quoting (`%s`)
    Text,
}

impl FormatSpec {
    /// Selects the format rule for a value.
    pub fn of(value: &ConstantValue) -> Self {
        match value {
            ConstantValue::Char(_) => Self::Char,
            ConstantValue::I8(_)
            | ConstantValue::I16(_)
            | ConstantValue::I32(_)
            | ConstantValue::I64(_) => Self::SignedDecimal,
            ConstantValue::U8(_)
            | ConstantValue::U16(_)
            | ConstantValue::U32(_)
            | ConstantValue::U64(_) => Self::UnsignedDecimal,
            ConstantValue::F32(_) | ConstantValue::F64(_) => Self::FixedPoint,
            ConstantValue::LongDouble(_) => Self::LongDoubleAsInteger,
            ConstantValue::Text(_) => Self::Text,
        }
    }

    /// The printf conversion this rule stands for
    pub fn printf_pattern(&self) -> &'static str {
        match self {
            Self::Char => "%c",
            Self::SignedDecimal => "%d",
            Self::UnsignedDecimal => "%u",
            Self::FixedPoint => "%f",
            Self::LongDoubleAsInteger => "%ld",
            Self::Text => "%s",
        }
    }
}

impl ConstantValue {
    /// Shorthand for [`FormatSpec::of`]
    pub fn format_spec(&self) -> FormatSpec {
        FormatSpec::of(self)
    }

    /// Name of the C type this value was declared with
    pub fn c_type(&self) -> &'static str {
        match self {
            Self::Char(_) => "char",
            Self::I8(_) => "signed char",
            Self::U8(_) => "unsigned char",
            Self::I16(_) => "short",
            Self::U16(_) => "unsigned short",
            Self::I32(_) => "int",
            Self::U32(_) => "unsigned int",
            Self::I64(_) => "long",
            Self::U64(_) => "unsigned long",
            Self::F32(_) => "float",
            Self::F64(_) => "double",
            Self::LongDouble(_) => "long double",
            Self::Text(_) => "const char *",
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.printf_pattern())
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ConstantValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    &'static str => Text,
}

impl From<CChar> for ConstantValue {
    fn from(value: CChar) -> Self {
        Self::Char(value.0)
    }
}

impl From<LongDouble> for ConstantValue {
    fn from(value: LongDouble) -> Self {
        Self::LongDouble(value.0)
    }
}
