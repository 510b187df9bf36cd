//!
//! typespecgen binary
//! ------------------
//! Introspects every scalar type known to a running Postgres server and
//! emits an RSpec shared-examples fragment exercising type-specific
//! round-trip behavior, so the committed spec file tracks the server's
//! actual type inventory across versions and extensions.

use std::env;
use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use typespecgen::assemble::assemble;
use typespecgen::catalog;
use typespecgen::cli::{parse_options, usage, write_fragment};
use typespecgen::tables::ExceptionTables;

#[tokio::main]
async fn main() -> Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("typespecgen")
        .to_string();
    let opts = match parse_options(&args[1..]) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", usage(&program));
            std::process::exit(2);
        }
    };
    if opts.help {
        println!("{}", usage(&program));
        return Ok(());
    }

    let client = catalog::connect(&opts.catalog)
        .await
        .context("catalog connection failed")?;
    let records = catalog::fetch_types(&client)
        .await
        .context("catalog introspection failed")?;

    let indent_unit = " ".repeat(opts.indent);
    let lines = assemble(&records, ExceptionTables::builtin(), &indent_unit);

    write_fragment(&lines, opts.out.as_deref()).context("failed to write fragment")?;
    info!("{} lines written", lines.len());
    Ok(())
}
