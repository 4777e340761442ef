//! Error types for schema introspection.

use thiserror::Error;

/// Result type for schema introspection operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while assembling a table model.
///
/// Every build-time error aborts assembly entirely; a partially populated
/// [`Table`](crate::model::Table) is never returned. Query-time absence
/// (an out-of-range primary-key position, an unknown column name) is an
/// `Option` on the query surface, not an error.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Column type string the parser does not understand.
    #[error("unsupported column type {raw:?}: {reason}")]
    Parse {
        /// The raw type string as returned by the server.
        raw: String,
        /// What the parser rejected about it.
        reason: String,
    },

    /// An index row references a column the table does not declare.
    #[error("index {index:?} references unknown column {column:?}")]
    UnknownIndexColumn {
        /// Name of the offending index.
        index: String,
        /// The unresolvable column name.
        column: String,
    },

    /// Two rows of one index carry the same sequence number.
    #[error("index {index:?} repeats sequence number {seq}")]
    DuplicateIndexSequence {
        /// Name of the offending index.
        index: String,
        /// The repeated sequence number.
        seq: u32,
    },

    /// Column rows were not contiguous by ordinal, starting at zero.
    #[error("column metadata out of order: expected ordinal {expected}, found {found}")]
    OrdinalMismatch {
        /// The ordinal the pipeline expected next.
        expected: usize,
        /// The ordinal the metadata row carried.
        found: usize,
    },

    /// The server returned no column rows for the requested table.
    #[error("table `{schema}`.`{table}` does not exist or has no columns")]
    MissingTable {
        /// Schema the table was looked up in.
        schema: String,
        /// The requested table name.
        table: String,
    },

    /// The metadata source failed to fetch rows.
    #[error("metadata query failed: {0}")]
    Source(#[from] sqlx::Error),
}

impl SchemaError {
    /// Create a parse error naming the offending raw type string.
    pub fn parse(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}
