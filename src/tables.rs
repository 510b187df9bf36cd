//! Static exception tables consulted during template selection.
//!
//! Four read-only tables, built once at startup and passed explicitly into
//! the selector so the decision logic stays pure. All lookups are keyed by
//! the catalog short name (`pg_type.typname`), never the display name.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub struct ExceptionTables {
    /// Types too obscure to bother supporting (Postgres internals).
    /// Membership alone decides the outcome; category is never consulted.
    pub internal_types: HashSet<&'static str>,
    /// short name -> (problem, issue URL). Lack of support is documented;
    /// the generated example still runs, pre-flagged with the defect.
    pub known_bugs: HashMap<&'static str, (&'static str, &'static str)>,
    /// short name -> problem, with no issue filed yet. Only populated during
    /// development; a committed run should keep this empty.
    pub unknown_bugs: HashMap<&'static str, &'static str>,
    /// Types whose test table must specify an explicit length, so the
    /// round-trip example carries a literal value and its length.
    pub bounded_length_types: HashSet<&'static str>,
}

static BUILTIN: Lazy<ExceptionTables> = Lazy::new(|| ExceptionTables {
    internal_types: [
        "abstime",
        "char",
        "name",
        "pg_node_tree",
        "regclass",
        "regconfig",
        "regdictionary",
        "regoper",
        "regoperator",
        "regproc",
        "regprocedure",
        "regtype",
        "reltime",
        "txid_snapshot",
        "unknown",
        "xid",
    ]
    .into_iter()
    .collect(),
    known_bugs: [(
        "numeric",
        (
            "replaced by zero",
            "https://github.com/confluentinc/bottledwater-pg/issues/4",
        ),
    )]
    .into_iter()
    .collect(),
    unknown_bugs: HashMap::new(),
    // "character" introspects as typname bpchar
    bounded_length_types: ["bit", "bpchar"].into_iter().collect(),
});

impl ExceptionTables {
    /// The builtin inventory. Constructed on first use, immutable afterwards.
    pub fn builtin() -> &'static ExceptionTables {
        &BUILTIN
    }

    pub fn empty() -> ExceptionTables {
        ExceptionTables {
            internal_types: HashSet::new(),
            known_bugs: HashMap::new(),
            unknown_bugs: HashMap::new(),
            bounded_length_types: HashSet::new(),
        }
    }
}
