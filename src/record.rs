//! Catalog record model: one introspected scalar type from pg_type.

/// Storage/semantic family of a type, from the single-character
/// `pg_type.typcategory` code.
/// See https://www.postgresql.org/docs/current/catalog-pg-type.html#CATALOG-TYPCATEGORY-TABLE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Boolean,
    BitString,
    Numeric,
    CharString,
    DateTime,
    /// Any category code we have no template for. Carried through so the
    /// generator surfaces the type as an explicit placeholder instead of
    /// dropping it.
    Other(char),
}

impl TypeCategory {
    pub fn from_code(code: char) -> Self {
        match code {
            'B' => TypeCategory::Boolean,
            'V' => TypeCategory::BitString,
            'N' => TypeCategory::Numeric,
            'S' => TypeCategory::CharString,
            'D' => TypeCategory::DateTime,
            other => TypeCategory::Other(other),
        }
    }
}

/// One row from the catalog query.
#[derive(Debug, Clone)]
pub struct TypeRecord {
    /// Fully-qualified human-readable name, e.g. "timestamp with time zone".
    /// Unique per run; names the generated example group.
    pub display_name: String,
    /// Internal short identifier, e.g. "timestamptz". Only used as the key
    /// into the exception tables.
    pub short_name: String,
    pub category: TypeCategory,
}

impl TypeRecord {
    pub fn new<S: Into<String>>(display_name: S, short_name: S, category: char) -> Self {
        TypeRecord {
            display_name: display_name.into(),
            short_name: short_name.into(),
            category: TypeCategory::from_code(category),
        }
    }
}
