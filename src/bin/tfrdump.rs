//! Dump a TIE Fighter pilot file as text.
//!
//! Usage:
//!   tfrdump <PILOT.TFR>
//!
//! Output goes to stdout. Diagnostics go to stderr; set `RUST_LOG=debug` to trace every
//! decoded field.

use anyhow::Context;
use std::io::{self, Write};
use std::path::PathBuf;
use tfrdump::{decode_source, render, ByteSource, Labels, FIELD_MAP};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 1 {
        eprintln!("usage: tfrdump <PILOT.TFR>");
        eprintln!("Please name a pilot file as parameter");
        std::process::exit(2);
    }
    let path = PathBuf::from(&args[0]);

    let source = ByteSource::open(&path).with_context(|| format!("reading {}", path.display()))?;
    let record = decode_source(FIELD_MAP, &source).with_context(|| format!("decoding {}", path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in render(&record, &Labels::english()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
