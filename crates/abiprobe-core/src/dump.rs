//! Writes a whole registry, one line per entry.

use crate::error::Result;
use crate::format::Formatter;
use crate::registry::Registry;
use std::io::Write;
use tracing::{debug, trace};

/// Outcome of a dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpStats {
    /// Number of lines written
    pub lines: usize,
    /// Number of bytes written
    pub bytes: usize,
}

/// Writes every entry of `registry` to `out` with the default formatter.
pub fn dump<W: Write + ?Sized>(registry: &Registry, out: &mut W) -> Result<DumpStats> {
    dump_with(&Formatter::new(), registry, out)
}

/// Writes every entry of `registry` to `out` in registry order, then flushes.
pub fn dump_with<W: Write + ?Sized>(
    formatter: &Formatter,
    registry: &Registry,
    out: &mut W,
) -> Result<DumpStats> {
    debug!("Dumping {} constants", registry.len());

    let mut stats = DumpStats::default();
    for entry in registry {
        let line = formatter.render_entry(entry);
        trace!("{} -> {:?}", entry.name, String::from_utf8_lossy(&line));
        out.write_all(&line)?;
        stats.lines += 1;
        stats.bytes += line.len();
    }
    out.flush()?;

    debug!("Dump complete: {} lines, {} bytes", stats.lines, stats.bytes);
    Ok(stats)
}
