//! Cross-checking a registry against a reference listing.
//!
//! The reference is whatever an independent generator printed for the same
//! constants, usually the native C harness compiled against the library
//! headers. Comparison is by exact name and exact value text: `4` and `04`
//! are different values, because the two sides are supposed to be produced
//! by the same format rules.

mod listing;

use std::fmt;
use tracing::{debug, info};

pub use listing::{Listing, ListingEntry};

/// A single difference between the expected and actual listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    /// Both sides know the constant but disagree on its value
    ValueMismatch {
        /// Constant name
        name: String,
        /// Value in the expected listing
        expected: String,
        /// Value in the actual listing
        actual: String,
    },
    /// The constant is only in the expected listing
    Missing {
        /// Constant name
        name: String,
    },
    /// The constant is only in the actual listing
    Unexpected {
        /// Constant name
        name: String,
    },
}

impl Discrepancy {
    /// Name of the constant concerned
    pub fn name(&self) -> &str {
        match self {
            Self::ValueMismatch { name, .. }
            | Self::Missing { name }
            | Self::Unexpected { name } => name,
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueMismatch {
                name,
                expected,
                actual,
            } => write!(f, "{name}: expected {expected:?}, found {actual:?}"),
            Self::Missing { name } => write!(f, "{name}: missing"),
            Self::Unexpected { name } => write!(f, "{name}: unexpected"),
        }
    }
}

/// Result of comparing two listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Differences, in expected order, followed by unexpected names in actual order
    pub discrepancies: Vec<Discrepancy>,
    /// Both listings hold the same names but in a different order
    pub order_differs: bool,
    /// Number of names present on both sides with equal values
    pub matched: usize,
}

impl Comparison {
    /// Returns true if the listings are identical
    pub fn is_match(&self) -> bool {
        self.discrepancies.is_empty() && !self.order_differs
    }

    /// One-line summary suitable for logs
    pub fn summary(&self) -> String {
        let count = |pred: fn(&Discrepancy) -> bool| {
            self.discrepancies.iter().filter(|d| pred(d)).count()
        };
        format!(
            "{} matched, {} mismatched, {} missing, {} unexpected{}",
            self.matched,
            count(|d| matches!(d, Discrepancy::ValueMismatch { .. })),
            count(|d| matches!(d, Discrepancy::Missing { .. })),
            count(|d| matches!(d, Discrepancy::Unexpected { .. })),
            if self.order_differs { ", order differs" } else { "" }
        )
    }
}

/// Compares `actual` against `expected`.
pub fn compare(expected: &Listing, actual: &Listing) -> Comparison {
    let mut comparison = Comparison::default();

    for entry in expected.entries() {
        match actual.get(&entry.name) {
            Some(value) if value == entry.value => comparison.matched += 1,
            Some(value) => comparison.discrepancies.push(Discrepancy::ValueMismatch {
                name: entry.name.clone(),
                expected: entry.value.clone(),
                actual: value.to_string(),
            }),
            None => comparison.discrepancies.push(Discrepancy::Missing {
                name: entry.name.clone(),
            }),
        }
    }

    for entry in actual.entries() {
        if !expected.contains(&entry.name) {
            comparison.discrepancies.push(Discrepancy::Unexpected {
                name: entry.name.clone(),
            });
        }
    }

    // Order only counts when the name sets agree; otherwise the missing and
    // unexpected entries already explain the shift.
    let same_names = expected.len() == actual.len()
        && !comparison.discrepancies.iter().any(|d| {
            matches!(d, Discrepancy::Missing { .. } | Discrepancy::Unexpected { .. })
        });
    if same_names {
        comparison.order_differs = expected
            .entries()
            .iter()
            .zip(actual.entries())
            .any(|(e, a)| e.name != a.name);
    }

    debug!("Compared {} expected against {} actual", expected.len(), actual.len());
    if comparison.is_match() {
        info!("Listings match: {}", comparison.summary());
    } else {
        info!("Listings differ: {}", comparison.summary());
    }
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing(text: &str) -> Listing {
        Listing::parse(text).unwrap()
    }

    #[test]
    fn test_identical() {
        let a = listing("A;1\nB;2\n");
        let result = compare(&a, &a.clone());
        assert!(result.is_match());
        assert_eq!(result.matched, 2);
        assert_eq!(result.summary(), "2 matched, 0 mismatched, 0 missing, 0 unexpected");
    }

    #[test]
    fn test_value_drift() {
        let result = compare(&listing("A;1\nB;4294967295\n"), &listing("A;1\nB;-1\n"));
        assert!(!result.is_match());
        assert_eq!(
            result.discrepancies,
            vec![Discrepancy::ValueMismatch {
                name: "B".into(),
                expected: "4294967295".into(),
                actual: "-1".into(),
            }]
        );
        assert_eq!(
            result.discrepancies[0].to_string(),
            "B: expected \"4294967295\", found \"-1\""
        );
    }

    #[test]
    fn test_missing_and_unexpected() {
        let result = compare(&listing("A;1\nB;2\nC;3\n"), &listing("D;4\nA;1\nE;5\n"));
        let names: Vec<(&str, &str)> = result
            .discrepancies
            .iter()
            .map(|d| {
                let kind = match d {
                    Discrepancy::ValueMismatch { .. } => "mismatch",
                    Discrepancy::Missing { .. } => "missing",
                    Discrepancy::Unexpected { .. } => "unexpected",
                };
                (d.name(), kind)
            })
            .collect();
        assert_eq!(
            names,
            [
                ("B", "missing"),
                ("C", "missing"),
                ("D", "unexpected"),
                ("E", "unexpected"),
            ]
        );
        assert!(!result.order_differs);
        assert_eq!(result.matched, 1);
    }

    #[test]
    fn test_order_drift() {
        let result = compare(&listing("A;1\nB;2\n"), &listing("B;2\nA;1\n"));
        assert!(result.discrepancies.is_empty());
        assert!(result.order_differs);
        assert!(!result.is_match());
        assert!(result.summary().ends_with(", order differs"));
    }

    #[test]
    fn test_values_compare_as_text() {
        let result = compare(&listing("A;4\n"), &listing("A;04\n"));
        assert_eq!(result.discrepancies.len(), 1);
    }
}
