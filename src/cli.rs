//! Command-line option handling for the generator binary.
//!
//! Flags mirror libpq conventions and fall back to the standard PG*
//! environment variables when unset. Kept out of main so parsing is
//! testable without spawning a process.

use crate::catalog::CatalogConfig;
use crate::error::AppError;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "postgres";

#[derive(Debug, Clone)]
pub struct Options {
    pub catalog: CatalogConfig,
    /// Number of spaces prefixed to every generated line.
    pub indent: usize,
    /// Output file; stdout when unset.
    pub out: Option<PathBuf>,
    pub help: bool,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [options]\n\
         \n\
         Options:\n\
         \x20 -H, --host <HOST>          Postgres hostname (env PGHOST)\n\
         \x20 -p, --port <PORT>          Postgres port (env PGPORT)\n\
         \x20 -u, --user <USER>          Postgres user (env PGUSER)\n\
         \x20 -d, --database <DATABASE>  Postgres database (env PGDATABASE, default {DEFAULT_DATABASE})\n\
         \x20 -i, --indent <LEVEL>       Base indent width for every generated line (default 0)\n\
         \x20 -o, --out <FILE>           Write the fragment to FILE instead of stdout\n\
         \x20 -h, --help                 Show this help"
    )
}

/// Parse options from the given argument list (program name excluded).
/// Malformed integer values and unknown flags fail fast; nothing is
/// generated on a bad invocation.
pub fn parse_options(args: &[String]) -> Result<Options, AppError> {
    let mut opts = Options {
        catalog: CatalogConfig {
            host: env::var("PGHOST").ok(),
            port: None,
            user: env::var("PGUSER").ok(),
            database: env::var("PGDATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
        },
        indent: 0,
        out: None,
        help: false,
    };
    if let Ok(v) = env::var("PGPORT") {
        opts.catalog.port = Some(
            v.parse::<u16>()
                .map_err(|_| AppError::config(format!("PGPORT is not a valid port: '{v}'")))?,
        );
    }

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let take_value = |i: &mut usize| -> Result<String, AppError> {
            *i += 1;
            args.get(*i)
                .cloned()
                .ok_or_else(|| AppError::config(format!("{arg} requires a value")))
        };
        match arg {
            "-H" | "--host" => opts.catalog.host = Some(take_value(&mut i)?),
            "-p" | "--port" => {
                let v = take_value(&mut i)?;
                opts.catalog.port = Some(
                    v.parse::<u16>()
                        .map_err(|_| AppError::config(format!("invalid port: '{v}'")))?,
                );
            }
            "-u" | "--user" => opts.catalog.user = Some(take_value(&mut i)?),
            "-d" | "--database" => opts.catalog.database = take_value(&mut i)?,
            "-i" | "--indent" => {
                let v = take_value(&mut i)?;
                opts.indent = v
                    .parse::<usize>()
                    .map_err(|_| AppError::config(format!("invalid indent level: '{v}'")))?;
            }
            "-o" | "--out" => opts.out = Some(PathBuf::from(take_value(&mut i)?)),
            "-h" | "--help" => opts.help = true,
            other => {
                return Err(AppError::config(format!("unknown option: '{other}'")));
            }
        }
        i += 1;
    }
    Ok(opts)
}

/// Write the assembled fragment to its sink in one pass: the named file when
/// given, stdout otherwise. Generation has already finished by the time this
/// runs, so a failure here never leaves a partially generated fragment.
pub fn write_fragment(lines: &[String], out: Option<&Path>) -> Result<(), AppError> {
    let mut text = lines.join("\n");
    text.push('\n');
    match out {
        Some(path) => fs::write(path, &text)
            .map_err(|e| AppError::io(format!("failed to write {}: {e}", path.display()))),
        None => io::stdout()
            .write_all(text.as_bytes())
            .map_err(|e| AppError::io(format!("failed to write fragment to stdout: {e}"))),
    }
}
