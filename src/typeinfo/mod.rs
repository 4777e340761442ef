//! Column type descriptors.
//!
//! A [`TypeDescriptor`] is the structured form of the type string MySQL
//! reports in `SHOW FULL COLUMNS`: `varchar(256)`, `int(11) unsigned`,
//! `enum('a','b')` and friends. [`parse_type`] is the only way to obtain
//! one; it either understands the whole string or fails, so a descriptor
//! is never half-populated.

mod parse;

pub use parse::parse_type;

use serde::{Deserialize, Serialize};

/// Broad classification of a column type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Integer family, including `year` and `bool`.
    Integer,
    /// Binary floating point (`float`, `double`, `real`).
    Float,
    /// Exact fixed-point numerics (`decimal`, `numeric`).
    Decimal,
    /// Character data (`char`, `varchar`, the `text` family).
    String,
    /// Byte data (`binary`, `varbinary`, the `blob` family).
    Binary,
    /// `enum(...)` with its declared value list.
    Enum,
    /// `set(...)` with its declared value list.
    Set,
    /// Everything else the server can report (temporal, `bit`, `json`,
    /// spatial types).
    #[default]
    Other,
}

/// Structured description of a column's declared type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Broad type classification.
    pub kind: ColumnKind,
    /// Declared character/byte capacity; zero when the type carries none.
    /// For charset-aware types this is the declared character count, not a
    /// byte count; it does not change with the encoding width.
    pub max_size: u32,
    /// Storage width for fixed-width types (`char`, `binary`); zero signals
    /// variable width.
    pub fixed_size: u32,
    /// Set by the `unsigned` modifier; `zerofill` implies it as well.
    pub is_unsigned: bool,
    /// Declared literals of an `enum(...)` column, in declaration order.
    pub enum_values: Vec<String>,
    /// Declared literals of a `set(...)` column, in declaration order.
    pub set_values: Vec<String>,
    /// Resolved collation for charset-aware types; empty otherwise.
    pub collation: String,
}
