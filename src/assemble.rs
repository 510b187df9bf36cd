//! Fragment assembly: wraps each catalog record in a named example group and
//! brackets the whole sequence with a generated-file banner and the shared
//! examples declaration.

use crate::record::TypeRecord;
use crate::render::{iline, render};
use crate::select::select;
use crate::tables::ExceptionTables;

pub const PROGRAM_NAME: &str = "typespecgen";

/// Build the complete output fragment. Output depends only on the inputs:
/// re-running on identical (records, tables, indent_unit) yields byte-identical
/// lines, and record order carries straight through to block order.
pub fn assemble(
    records: &[TypeRecord],
    tables: &ExceptionTables,
    indent_unit: &str,
) -> Vec<String> {
    let mut out = Vec::new();
    let bar = "#".repeat(80);

    iline(&mut out, indent_unit, 0, &bar);
    iline(
        &mut out,
        indent_unit,
        0,
        &format!("### This file is automatically generated by {PROGRAM_NAME}."),
    );
    iline(
        &mut out,
        indent_unit,
        0,
        "### It is intended to be human readable, but not manually edited.",
    );
    iline(
        &mut out,
        indent_unit,
        0,
        "### Regenerate it to keep specs for all supported Postgres types current",
    );
    iline(
        &mut out,
        indent_unit,
        0,
        "### as extensions or new Postgres versions add new types.",
    );
    iline(&mut out, indent_unit, 0, &bar);
    out.push(String::new());

    iline(&mut out, indent_unit, 0, "shared_examples 'type specs' do");
    out.push(String::new());

    for record in records {
        iline(
            &mut out,
            indent_unit,
            1,
            &format!("describe '{}' do", record.display_name),
        );
        let choice = select(record, tables);
        out.extend(render(&choice, 2, indent_unit));
        iline(&mut out, indent_unit, 1, "end");
        out.push(String::new());
    }

    iline(&mut out, indent_unit, 0, "end");
    out
}
