//! # abiprobe-core
//!
//! A library for printing the constants a native library exposes, so that a
//! binding layer's idea of those constants can be checked against the real
//! ABI.
//!
//! This crate provides:
//! - A fixed, ordered registry of named constants of known C types
//! - A formatter that renders each one as a `NAME;VALUE` line, choosing the
//!   value's form from its static type the way `printf` would
//! - Parsing and comparison of such listings to spot ABI drift
//!
//! ## Architecture
//!
//! - [`registry`]: constant entries, the [`constant!`] macro and the libflatpak table
//! - [`format`]: the closed value type and the type-dispatched formatter
//! - [`mod@dump`]: writes a registry in order
//! - [`verify`]: listing parser and comparison
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```
//! use abiprobe_core::{dump, ConstantEntry, ConstantValue, Registry};
//!
//! let registry = Registry::new(vec![
//!     ConstantEntry::new("FOO_ERROR_ABORTED", ConstantValue::I32(-1)),
//!     ConstantEntry::new("FOO_INSTALL_FLAGS_NONE", ConstantValue::U32(0)),
//! ]);
//!
//! let mut out = Vec::new();
//! dump(&registry, &mut out)?;
//! assert_eq!(out, b"FOO_ERROR_ABORTED;-1\nFOO_INSTALL_FLAGS_NONE;0\n");
//! # Ok::<(), abiprobe_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod dump;
pub mod error;
pub mod format;
pub mod registry;
pub mod verify;

// Re-export primary types for convenience
pub use dump::{dump, dump_with, DumpStats};
pub use error::{Error, Result};
pub use format::{
    CChar, ConstantValue, FormatConfig, FormatSpec, Formatter, LongDouble, LongDoublePolicy,
};
pub use registry::{ConstantEntry, Registry};
pub use verify::{compare, Comparison, Discrepancy, Listing};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
