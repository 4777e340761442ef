//! Column entity and its builder.

use serde::{Deserialize, Serialize};

use crate::error::SchemaResult;
use crate::source::ColumnRow;
use crate::typeinfo::{self, TypeDescriptor};

/// A single table column.
///
/// Created once from one metadata row during assembly, immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Zero-based position within the table's declared column sequence.
    pub ordinal: usize,
    /// Column name, verbatim from server metadata; any punctuation the
    /// identifier carries is preserved.
    pub name: String,
    /// Parsed type descriptor.
    pub type_desc: TypeDescriptor,
    /// The raw server type string the descriptor was parsed from.
    pub raw_type: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Declared default value, if any.
    pub default: Option<String>,
    /// Whether the column is `auto_increment`.
    pub is_auto: bool,
}

impl Column {
    /// Build a column from one metadata row.
    ///
    /// Pure transformation: the row's name is taken verbatim and its type
    /// string is handed to [`typeinfo::parse_type`] together with the
    /// resolved collation. A type the parser rejects fails the whole
    /// assembly, since a table model must be fully typed.
    pub fn from_row(row: ColumnRow) -> SchemaResult<Self> {
        let type_desc = typeinfo::parse_type(&row.raw_type, &row.collation)?;
        Ok(Self {
            ordinal: row.ordinal,
            name: row.name,
            type_desc,
            raw_type: row.raw_type,
            nullable: row.nullable,
            default: row.default,
            is_auto: row.extra.to_ascii_lowercase().contains("auto_increment"),
        })
    }
}
