//! abiprobe - Print and cross-check the libflatpak constant table
//!
//! `abiprobe` (or `abiprobe dump`) prints every registered constant as a
//! `NAME;VALUE` line on stdout. `abiprobe check` compares that output with a
//! reference listing produced by the native harness.

use abiprobe_core::registry::flatpak;
use abiprobe_core::{compare, dump_with, FormatConfig, Formatter, Listing, LongDoublePolicy};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;

/// Print and cross-check the libflatpak constant table
#[derive(Parser, Debug)]
#[command(name = "abiprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Format options for the default dump
    #[command(flatten)]
    format: FormatArgs,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every constant as NAME;VALUE (the default)
    Dump(FormatArgs),
    /// Compare the registry with a reference listing
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Rendering of long double constants
    #[arg(long, value_enum, default_value = "integer", env = "ABIPROBE_LONG_DOUBLE")]
    long_double: LongDoubleArg,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Reference listing to compare against ("-" reads stdin)
    reference: PathBuf,

    #[command(flatten)]
    format: FormatArgs,
}

/// Rendering policy for long double values
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LongDoubleArg {
    /// Long-integer pattern, byte-compatible with the native harness
    Integer,
    /// Six fractional digits, like double
    FixedPoint,
}

impl FormatArgs {
    fn formatter(&self) -> Formatter {
        let policy = match self.long_double {
            LongDoubleArg::Integer => LongDoublePolicy::IntegerPattern,
            LongDoubleArg::FixedPoint => LongDoublePolicy::FixedPoint,
        };
        Formatter::with_config(FormatConfig::new().long_double(policy))
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the listing, so logs go to stderr
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        None => run_dump(&cli.format),
        Some(Command::Dump(args)) => run_dump(&args),
        Some(Command::Check(args)) => {
            run_check(&args, io::stdin().lock(), &mut io::stdout().lock())
        }
    }
}

/// Print the registry to stdout
fn run_dump(args: &FormatArgs) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = dump_with(&args.formatter(), flatpak::registry(), &mut out)
        .context("Failed to write constants to stdout")?;
    info!("Wrote {} constants", stats.lines);
    Ok(ExitCode::SUCCESS)
}

/// Compare the registry with a reference listing, writing one report line
/// per discrepancy to `out`
fn run_check<R: Read, W: Write>(args: &CheckArgs, stdin: R, out: &mut W) -> Result<ExitCode> {
    let expected = read_reference(&args.reference, stdin)?;
    let actual = Listing::from_registry(flatpak::registry(), &args.format.formatter())
        .context("Registry is not a valid listing")?;
    debug!(
        "Reference has {} entries, registry has {}",
        expected.len(),
        actual.len()
    );

    let comparison = compare(&expected, &actual);

    for discrepancy in &comparison.discrepancies {
        writeln!(out, "{}", discrepancy).context("Failed to write report")?;
    }
    if comparison.order_differs {
        writeln!(out, "constant order differs from reference")
            .context("Failed to write report")?;
    }

    if comparison.is_match() {
        info!("{}", comparison.summary());
        Ok(ExitCode::SUCCESS)
    } else {
        warn!("ABI drift: {}", comparison.summary());
        Ok(ExitCode::FAILURE)
    }
}

/// Read a reference listing from a file, or from `stdin` when the path is `-`
fn read_reference<R: Read>(path: &Path, mut stdin: R) -> Result<Listing> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        stdin
            .read_to_end(&mut bytes)
            .context("Failed to read reference listing from stdin")?;
        Listing::parse_bytes(&bytes).context("Invalid reference listing on stdin")
    } else {
        Listing::from_path(path)
            .with_context(|| format!("Failed to load reference listing: {}", path.display()))
    }
}
