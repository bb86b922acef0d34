//! Ordered, immutable constant registries.
//!
//! A registry is the list of `(name, value)` pairs a native library exposes
//! through its headers, in declaration order. Order is part of the output
//! contract, so nothing here sorts or deduplicates.
//!
//! Entries are normally declared with the [`constant!`](crate::constant)
//! macro, which takes the symbol itself rather than a copy of its value:
//!
//! ```
//! use abiprobe_core::{constant, Registry};
//!
//! const FOO_ERROR_ABORTED: i32 = -1;
//! #[allow(non_camel_case_types)]
//! type guint = u32;
//! const FOO_INSTALL_FLAGS_NONE: u32 = 0;
//!
//! let registry = Registry::new(vec![
//!     constant!(FOO_ERROR_ABORTED),
//!     constant!(FOO_INSTALL_FLAGS_NONE as guint),
//! ]);
//! assert_eq!(registry.names().collect::<Vec<_>>(), [
//!     "FOO_ERROR_ABORTED",
//!     "(guint) FOO_INSTALL_FLAGS_NONE",
//! ]);
//! ```

pub mod flatpak;

use crate::format::ConstantValue;
use std::collections::HashSet;

/// One named constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantEntry {
    /// Symbolic name, exactly as the native harness prints it
    pub name: &'static str,
    /// Typed value
    pub value: ConstantValue,
}

impl ConstantEntry {
    /// Creates a new entry
    pub const fn new(name: &'static str, value: ConstantValue) -> Self {
        Self { name, value }
    }
}

/// Builds a [`ConstantEntry`] from a constant in scope.
///
/// `constant!(NAME)` names the entry `NAME`. `constant!(NAME as ty)` casts the
/// value first and names the entry `(ty) NAME`, which is how a C harness
/// stringifies a cast argument. The value goes through
/// [`ConstantValue::from`], so a constant of an unsupported type, or a symbol
/// that no longer exists, fails to compile.
#[macro_export]
macro_rules! constant {
    ($name:ident) => {
        $crate::registry::ConstantEntry::new(
            stringify!($name),
            $crate::format::ConstantValue::from($name),
        )
    };
    ($name:ident as $ty:ty) => {
        $crate::registry::ConstantEntry::new(
            concat!("(", stringify!($ty), ") ", stringify!($name)),
            $crate::format::ConstantValue::from($name as $ty),
        )
    };
}

/// An ordered collection of constant entries
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<ConstantEntry>,
}

impl Registry {
    /// Creates a registry; entries keep the given order
    pub fn new(entries: Vec<ConstantEntry>) -> Self {
        Self { entries }
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &[ConstantEntry] {
        &self.entries
    }

    /// Iterates entries in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, ConstantEntry> {
        self.entries.iter()
    }

    /// Iterates entry names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its exact name
    pub fn get(&self, name: &str) -> Option<&ConstantEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Names that occur more than once, each reported at its second occurrence
    pub fn duplicate_names(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.names().filter(|name| !seen.insert(*name)).collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ConstantEntry;
    type IntoIter = std::slice::Iter<'a, ConstantEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<ConstantEntry> for Registry {
    fn from_iter<I: IntoIterator<Item = ConstantEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{CChar, LongDouble};
    use pretty_assertions::assert_eq;

    const FOO_ERROR_ABORTED: i32 = -1;
    const FOO_SEPARATOR: CChar = CChar(b'/');
    const FOO_PRECISION: LongDouble = LongDouble(2.5);
    const FOO_DEFAULT_BRANCH: &str = "stable";
    const FOO_FLAGS_ALL: i64 = 0xFFFF_FFFF;

    #[test]
    fn test_constant_macro_names() {
        let plain = constant!(FOO_ERROR_ABORTED);
        assert_eq!(plain.name, "FOO_ERROR_ABORTED");
        assert_eq!(plain.value, ConstantValue::I32(-1));

        let cast = constant!(FOO_FLAGS_ALL as u32);
        assert_eq!(cast.name, "(u32) FOO_FLAGS_ALL");
        assert_eq!(cast.value, ConstantValue::U32(u32::MAX));
    }

    #[test]
    fn test_constant_macro_value_types() {
        assert_eq!(constant!(FOO_SEPARATOR).value, ConstantValue::Char(b'/'));
        assert_eq!(constant!(FOO_PRECISION).value, ConstantValue::LongDouble(2.5));
        assert_eq!(constant!(FOO_DEFAULT_BRANCH).value, ConstantValue::Text("stable"));
    }

    #[test]
    fn test_registry_preserves_order() {
        let registry = Registry::new(vec![
            ConstantEntry::new("Z", 1i32.into()),
            ConstantEntry::new("A", 2i32.into()),
            ConstantEntry::new("M", 3i32.into()),
        ]);
        assert_eq!(registry.names().collect::<Vec<_>>(), ["Z", "A", "M"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert_eq!(registry.get("A").map(|e| e.value), Some(ConstantValue::I32(2)));
        assert!(registry.get("a").is_none());
    }

    #[test]
    fn test_duplicate_names() {
        let registry: Registry = [
            ConstantEntry::new("A", 1i32.into()),
            ConstantEntry::new("B", 2i32.into()),
            ConstantEntry::new("A", 3i32.into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(registry.duplicate_names(), ["A"]);
        assert!(Registry::default().duplicate_names().is_empty());
    }
}
