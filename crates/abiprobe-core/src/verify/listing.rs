//! Parsing of `NAME;VALUE` listings.

use crate::error::{Error, Result};
use crate::format::Formatter;
use crate::registry::Registry;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

/// One parsed listing line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Name field, verbatim
    pub name: String,
    /// Value field, verbatim
    pub value: String,
}

/// An ordered set of name/value pairs, as printed by a constant harness
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<ListingEntry>,
    index: HashMap<String, usize>,
}

impl Listing {
    /// Parses a listing.
    ///
    /// Blank lines are skipped. The name is everything before the first `;`
    /// and the value everything after it, so a value may itself contain `;`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut listing = Self::default();

        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            if line.trim().is_empty() {
                continue;
            }

            let Some((name, value)) = line.split_once(';') else {
                return Err(Error::malformed_line(line_no, line));
            };
            if name.is_empty() {
                return Err(Error::malformed_line(line_no, line));
            }

            trace!("Line {}: {} = {:?}", line_no, name, value);
            listing.push(line_no, name.to_string(), value.to_string())?;
        }

        debug!("Parsed listing with {} entries", listing.len());
        Ok(listing)
    }

    /// Parses raw harness output.
    ///
    /// `char` constants are printed as raw bytes, so the output need not be
    /// UTF-8. Invalid sequences become U+FFFD, the same normalisation
    /// [`Formatter::render_value`] applies on the registry side.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// Reads and parses a listing file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::file_read(path, e))?;
        Self::parse_bytes(&bytes)
    }

    /// Renders a registry into a listing.
    ///
    /// A name registered twice is an error, exactly as in [`Listing::parse`];
    /// the line number is the entry's 1-based position.
    pub fn from_registry(registry: &Registry, formatter: &Formatter) -> Result<Self> {
        let mut listing = Self::default();
        for (i, entry) in registry.iter().enumerate() {
            let value = formatter.render_value(&entry.value);
            listing.push(i + 1, entry.name.to_string(), value)?;
        }
        Ok(listing)
    }

    fn push(&mut self, line: usize, name: String, value: String) -> Result<()> {
        if self.index.contains_key(&name) {
            return Err(Error::duplicate_name(line, name));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(ListingEntry { name, value });
        Ok(())
    }

    /// Entries in listing order
    pub fn entries(&self) -> &[ListingEntry] {
        &self.entries
    }

    /// Looks up a value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].value.as_str())
    }

    /// Position of a name in listing order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns true if the listing contains `name`
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the listing is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CChar;
    use crate::registry::flatpak;
    use crate::registry::ConstantEntry;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_basic() {
        let text = "A;1\nB;-2\n\nC;text with; semicolon\r\nD;cr\r\r\n";
        let listing = Listing::parse(text).unwrap();
        assert_eq!(listing.len(), 4);
        assert_eq!(listing.get("A"), Some("1"));
        assert_eq!(listing.get("B"), Some("-2"));
        assert_eq!(listing.get("C"), Some("text with; semicolon"));
        assert_eq!(listing.position("C"), Some(2));
        assert_eq!(listing.get("D"), Some("cr\r"));
        assert!(!listing.contains("E"));
    }

    #[test]
    fn test_parse_empty_value() {
        let listing = Listing::parse("EMPTY;\n").unwrap();
        assert_eq!(listing.get("EMPTY"), Some(""));
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = Listing::parse("A;1\nB 2\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let err = Listing::parse(";1\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let err = Listing::parse("A;1\nB;2\nA;1\n").unwrap_err();
        match err {
            Error::DuplicateName { line, name } => {
                assert_eq!(line, 3);
                assert_eq!(name, "A");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_registry_matches_dump() {
        let registry = flatpak::registry();
        let formatter = Formatter::new();
        let mut out = Vec::new();
        crate::dump(registry, &mut out).unwrap();

        let parsed = Listing::parse(std::str::from_utf8(&out).unwrap()).unwrap();
        let rendered = Listing::from_registry(registry, &formatter).unwrap();
        assert_eq!(parsed, rendered);
        assert_eq!(parsed.len(), registry.len());
    }

    #[test]
    fn test_from_registry_rejects_duplicates() {
        let registry = Registry::new(vec![
            ConstantEntry::new("A", 1i32.into()),
            ConstantEntry::new("B", 2i32.into()),
            ConstantEntry::new("A", 3i32.into()),
        ]);
        let err = Listing::from_registry(&registry, &Formatter::new()).unwrap_err();
        match err {
            Error::DuplicateName { line, name } => {
                assert_eq!(line, 3);
                assert_eq!(name, "A");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_high_byte_char_round_trips_through_file() {
        let registry = Registry::new(vec![
            ConstantEntry::new("SEP", CChar(0xE9).into()),
            ConstantEntry::new("COUNT", 2u32.into()),
        ]);
        let formatter = Formatter::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        crate::dump_with(&formatter, &registry, &mut file).unwrap();

        let parsed = Listing::from_path(file.path()).unwrap();
        assert_eq!(parsed.get("SEP"), Some("\u{FFFD}"));
        assert_eq!(parsed.get("COUNT"), Some("2"));

        let rendered = Listing::from_registry(&registry, &formatter).unwrap();
        assert!(crate::compare(&parsed, &rendered).is_match());
    }

    #[test]
    fn test_parse_bytes() {
        let listing = Listing::parse_bytes(b"SEP;\xE9\nA;1\n").unwrap();
        assert_eq!(listing.get("SEP"), Some("\u{FFFD}"));
        assert_eq!(listing.get("A"), Some("1"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(gint) FLATPAK_ERROR_ABORTED;4").unwrap();
        let listing = Listing::from_path(file.path()).unwrap();
        assert_eq!(listing.get("(gint) FLATPAK_ERROR_ABORTED"), Some("4"));

        let err = Listing::from_path("/nonexistent/abiprobe/listing.txt").unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
