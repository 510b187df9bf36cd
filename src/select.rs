//! Template selection: maps one catalog record to the spec template that
//! exercises it, consulting the exception tables for overrides.

use crate::record::{TypeCategory, TypeRecord};
use crate::tables::ExceptionTables;

/// Fixed example value for bounded bit-string types.
pub const BIT_VALUE: &str = "1110";
/// Fixed example value for bounded character-string types.
pub const STRING_VALUE: &str = "Hello";
/// Message carried by the placeholder for categories with no template yet.
pub const PENDING_MESSAGE: &str = "spec not yet implemented";

/// Defect annotation emitted ahead of an otherwise-normal example body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Lack of support is documented, preferably as a Github issue.
    Documented { problem: String, url: String },
    /// Observed during development, no issue filed yet.
    Provisional { problem: String },
}

/// The example body chosen for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Internal/obscure type: a single no-op placeholder example.
    Unsupported,
    /// Boolean family: plain round-trip with a canonical truthy value.
    Roundtrip { name: String },
    /// Bit-string family; bounded types carry a literal value and its length.
    BitString {
        name: String,
        bounded: Option<(String, usize)>,
    },
    Numeric { name: String },
    /// Character-string family; same bounded split as bit-strings.
    CharString {
        name: String,
        bounded: Option<(String, usize)>,
    },
    /// Date/time family: delegates to a shared example named after the type.
    DateTime { name: String },
    /// Unrecognized category: explicit failing placeholder rather than a
    /// silently skipped type.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateChoice {
    pub annotation: Option<Annotation>,
    pub body: Body,
}

/// Pure decision function: record + tables -> template choice. Total over all
/// inputs; never fails.
///
/// Internal types short-circuit before anything else, including the defect
/// tables: they have no meaningful round-trip semantics, so a bug annotation
/// on one would be misleading.
pub fn select(record: &TypeRecord, tables: &ExceptionTables) -> TemplateChoice {
    let short = record.short_name.as_str();
    if tables.internal_types.contains(short) {
        return TemplateChoice {
            annotation: None,
            body: Body::Unsupported,
        };
    }

    let annotation = if let Some((problem, url)) = tables.known_bugs.get(short) {
        Some(Annotation::Documented {
            problem: (*problem).to_string(),
            url: (*url).to_string(),
        })
    } else if let Some(problem) = tables.unknown_bugs.get(short) {
        Some(Annotation::Provisional {
            problem: (*problem).to_string(),
        })
    } else {
        None
    };

    let name = record.display_name.clone();
    let bounded_with = |value: &str| {
        if tables.bounded_length_types.contains(short) {
            Some((value.to_string(), value.chars().count()))
        } else {
            None
        }
    };

    let body = match record.category {
        TypeCategory::Boolean => Body::Roundtrip { name },
        TypeCategory::BitString => Body::BitString {
            name,
            bounded: bounded_with(BIT_VALUE),
        },
        TypeCategory::Numeric => Body::Numeric { name },
        TypeCategory::CharString => Body::CharString {
            name,
            bounded: bounded_with(STRING_VALUE),
        },
        TypeCategory::DateTime => Body::DateTime { name },
        TypeCategory::Other(_) => Body::Pending,
    };

    TemplateChoice { annotation, body }
}
