//! Type-dispatched constant formatting.
//!
//! Every entry renders as one `NAME;VALUE\n` line. The value's textual form is
//! chosen by [`FormatSpec::of`] from the value's static type and mirrors what
//! C's `printf` produces for the same conversion:
//!
//! | type                    | rule                   | example          |
//! |-------------------------|------------------------|------------------|
//! | `char`                  | raw byte               | `A`              |
//! | signed integers         | signed decimal         | `-1`             |
//! | unsigned integers       | unsigned decimal       | `4294967295`     |
//! | `float` / `double`      | six fractional digits  | `1.500000`       |
//! | `long double`           | long-integer pattern   | `3`              |
//! | strings                 | literal, unquoted      | `org.example`    |

mod value;

use crate::error::Result;
use crate::registry::ConstantEntry;
use std::io::Write;

pub use value::{CChar, ConstantValue, FormatSpec, LongDouble};

/// Separator between the name and value fields
pub const FIELD_SEPARATOR: u8 = b';';

/// How `long double` values are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LongDoublePolicy {
    /// Reuse the long-integer pattern: truncate toward zero and print a
    /// signed decimal, saturating at the `i64` range
    #[default]
    IntegerPattern,
    /// Render like `double` (`%f`)
    FixedPoint,
}

/// Configuration for the formatter
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    /// Rendering of `long double` values
    pub long_double: LongDoublePolicy,
}

impl FormatConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `long double` rendering policy
    pub fn long_double(mut self, policy: LongDoublePolicy) -> Self {
        self.long_double = policy;
        self
    }
}

/// Renders constant entries into `NAME;VALUE` lines
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Creates a formatter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with custom configuration
    pub fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Writes `NAME;VALUE\n` for one entry.
    pub fn write_entry<W: Write + ?Sized>(
        &self,
        out: &mut W,
        entry: &ConstantEntry,
    ) -> Result<()> {
        out.write_all(entry.name.as_bytes())?;
        out.write_all(&[FIELD_SEPARATOR])?;
        self.write_value(out, &entry.value)?;
        out.write_all(b"\n")?;
        Ok(())
    }

    /// Writes the value field alone.
    ///
    /// The match is exhaustive over [`ConstantValue`]; each arm implements the
    /// rule [`FormatSpec::of`] names for that variant.
    pub fn write_value<W: Write + ?Sized>(
        &self,
        out: &mut W,
        value: &ConstantValue,
    ) -> Result<()> {
        match *value {
            ConstantValue::Char(byte) => out.write_all(&[byte])?,
            ConstantValue::I8(v) => write!(out, "{v}")?,
            ConstantValue::U8(v) => write!(out, "{v}")?,
            ConstantValue::I16(v) => write!(out, "{v}")?,
            ConstantValue::U16(v) => write!(out, "{v}")?,
            ConstantValue::I32(v) => write!(out, "{v}")?,
            ConstantValue::U32(v) => write!(out, "{v}")?,
            ConstantValue::I64(v) => write!(out, "{v}")?,
            ConstantValue::U64(v) => write!(out, "{v}")?,
            ConstantValue::F32(v) => write_fixed(out, f64::from(v))?,
            ConstantValue::F64(v) => write_fixed(out, v)?,
            ConstantValue::LongDouble(v) => match self.config.long_double {
                LongDoublePolicy::IntegerPattern => write!(out, "{}", truncate_to_long(v))?,
                LongDoublePolicy::FixedPoint => write_fixed(out, v)?,
            },
            ConstantValue::Text(s) => out.write_all(s.as_bytes())?,
        }
        Ok(())
    }

    /// Renders one entry into a fresh buffer.
    pub fn render_entry(&self, entry: &ConstantEntry) -> Vec<u8> {
        let mut buf = Vec::with_capacity(entry.name.len() + 24);
        // Writing into a Vec cannot fail.
        let _ = self.write_entry(&mut buf, entry);
        buf
    }

    /// Renders the value field into a string; a non-UTF-8 `char` byte is
    /// replaced with U+FFFD.
    pub fn render_value(&self, value: &ConstantValue) -> String {
        let mut buf = Vec::new();
        let _ = self.write_value(&mut buf, value);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// `%f`: six fractional digits, with glibc's spelling for non-finite values
fn write_fixed<W: Write + ?Sized>(out: &mut W, v: f64) -> std::io::Result<()> {
    if v.is_nan() {
        out.write_all(if v.is_sign_negative() { b"-nan" } else { b"nan" })
    } else if v.is_infinite() {
        out.write_all(if v.is_sign_negative() { b"-inf" } else { b"inf" })
    } else {
        write!(out, "{v:.6}")
    }
}

/// Truncation toward zero; NaN maps to 0 and out-of-range values saturate.
fn truncate_to_long(v: f64) -> i64 {
    v.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(name: &'static str, value: impl Into<ConstantValue>) -> String {
        let entry = ConstantEntry::new(name, value.into());
        String::from_utf8(Formatter::new().render_entry(&entry)).unwrap()
    }

    #[test]
    fn test_concrete_lines() {
        assert_eq!(line("FOO_ERROR_ABORTED", -1i32), "FOO_ERROR_ABORTED;-1\n");
        assert_eq!(
            line("FOO_INSTALL_FLAGS_NONE", 0u32),
            "FOO_INSTALL_FLAGS_NONE;0\n"
        );
        assert_eq!(line("FOO_MAJOR_VERSION", 1u32), "FOO_MAJOR_VERSION;1\n");
    }

    #[test]
    fn test_narrow_integers_are_not_characters() {
        assert_eq!(line("A", -1i8), "A;-1\n");
        assert_eq!(line("B", 65u8), "B;65\n");
        assert_eq!(line("C", i8::MIN), "C;-128\n");
        assert_eq!(line("D", u8::MAX), "D;255\n");
        assert_eq!(line("E", i16::MIN), "E;-32768\n");
        assert_eq!(line("F", u16::MAX), "F;65535\n");
    }

    #[test]
    fn test_integer_round_trip_at_declared_width() {
        let f = Formatter::new();
        assert_eq!(f.render_value(&u32::MAX.into()).parse::<u32>().unwrap(), u32::MAX);
        assert_eq!(f.render_value(&u32::MAX.into()), "4294967295");
        assert_eq!(f.render_value(&i32::MIN.into()).parse::<i32>().unwrap(), i32::MIN);
        assert_eq!(f.render_value(&i64::MIN.into()).parse::<i64>().unwrap(), i64::MIN);
        assert_eq!(f.render_value(&u64::MAX.into()).parse::<u64>().unwrap(), u64::MAX);
        assert_eq!(f.render_value(&(-2i8).into()).parse::<i8>().unwrap(), -2);
        assert_eq!(f.render_value(&40000u16.into()).parse::<u16>().unwrap(), 40000);
    }

    #[test]
    fn test_char_is_raw_byte() {
        assert_eq!(line("SEP", CChar(b';')), "SEP;;\n");
        let entry = ConstantEntry::new("HIGH", CChar(0xE9).into());
        assert_eq!(Formatter::new().render_entry(&entry), b"HIGH;\xE9\n".to_vec());
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(line("HALF", 0.5f64), "HALF;0.500000\n");
        assert_eq!(line("NEG", -2.25f32), "NEG;-2.250000\n");
        assert_eq!(line("BIG", 1e10f64), "BIG;10000000000.000000\n");
        assert_eq!(line("NAN", f64::NAN), "NAN;nan\n");
        assert_eq!(line("NINF", f32::NEG_INFINITY), "NINF;-inf\n");
    }

    #[test]
    fn test_long_double_uses_integer_pattern() {
        assert_eq!(line("LD", LongDouble(3.75)), "LD;3\n");
        assert_eq!(line("LDN", LongDouble(-3.75)), "LDN;-3\n");
        assert_eq!(line("LDNAN", LongDouble(f64::NAN)), "LDNAN;0\n");
        assert_eq!(line("LDMAX", LongDouble(1e300)), "LDMAX;9223372036854775807\n");
    }

    #[test]
    fn test_long_double_fixed_point_policy() {
        let f = Formatter::with_config(
            FormatConfig::new().long_double(LongDoublePolicy::FixedPoint),
        );
        assert_eq!(f.render_value(&LongDouble(3.75).into()), "3.750000");
        assert_eq!(f.config().long_double, LongDoublePolicy::FixedPoint);
    }

    #[test]
    fn test_text_is_unquoted() {
        assert_eq!(
            line("FOO_DEFAULT_ARCH", "x86_64 \"quoted\";\\"),
            "FOO_DEFAULT_ARCH;x86_64 \"quoted\";\\\n"
        );
        assert_eq!(line("EMPTY", ""), "EMPTY;\n");
    }

    #[test]
    fn test_sink_failure_is_reported() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let entry = ConstantEntry::new("X", 1i32.into());
        let err = Formatter::new().write_entry(&mut Closed, &entry).unwrap_err();
        assert!(matches!(err, crate::Error::Output(_)));
    }
}
