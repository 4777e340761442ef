//! Table entity, the canonical assembly pipeline, and the read-only query
//! surface.

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};
use crate::model::{index, Column, Index};
use crate::source::{ColumnRow, IndexRow};

/// Reserved name of the primary-key index.
pub const PRIMARY_INDEX: &str = "PRIMARY";

/// Normalized description of one table's structure.
///
/// Immutable once assembled and safe for unsynchronized concurrent reads.
/// Two assemblies of the same underlying table, through either metadata
/// source, compare deeply equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Schema (database) the table lives in.
    pub schema: String,
    /// Table name, verbatim; quoting is a query-construction concern and
    /// never alters the stored name.
    pub name: String,
    /// Columns in declaration order; position equals ordinal.
    pub columns: Vec<Column>,
    /// Indexes in first-occurrence order from metadata.
    pub indexes: Vec<Index>,
    /// Ordinals of the primary-key columns, verbatim from the `PRIMARY`
    /// index's column sequence. Empty if the table has no primary key.
    pub pk_columns: Vec<usize>,
}

impl Table {
    /// Run the canonical builder pipeline: column rows into [`Column`]s,
    /// index rows into [`Index`]es, then primary-key resolution.
    ///
    /// Column rows must arrive ordered by ordinal, contiguous from zero;
    /// index rows may arrive in any order. Both metadata-source adapters
    /// feed this one function, which is what makes them converge on
    /// identical models.
    ///
    /// # Errors
    ///
    /// Any parse or resolution failure aborts the whole assembly; no
    /// partially populated table is returned.
    pub fn from_rows(
        schema: &str,
        name: &str,
        column_rows: Vec<ColumnRow>,
        index_rows: Vec<IndexRow>,
    ) -> SchemaResult<Self> {
        let mut columns = Vec::with_capacity(column_rows.len());
        for (position, row) in column_rows.into_iter().enumerate() {
            if row.ordinal != position {
                return Err(SchemaError::OrdinalMismatch {
                    expected: position,
                    found: row.ordinal,
                });
            }
            columns.push(Column::from_row(row)?);
        }

        let indexes = index::group_rows(&columns, index_rows)?;

        let pk_columns = indexes
            .iter()
            .find(|ix| ix.name == PRIMARY_INDEX)
            .map(|ix| ix.columns.clone())
            .unwrap_or_default();

        Ok(Self {
            schema: schema.to_string(),
            name: name.to_string(),
            columns,
            indexes,
            pk_columns,
        })
    }

    /// The column at `ordinal`, if within bounds.
    pub fn column(&self, ordinal: usize) -> Option<&Column> {
        self.columns.get(ordinal)
    }

    /// Ordinal of the column named `name`, if the table declares one.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// The index named `name`, if the table declares one. Names are
    /// matched case-sensitively.
    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indexes.iter().find(|ix| ix.name == name)
    }

    /// Whether the column at `ordinal` participates in the primary key,
    /// at any key position.
    pub fn is_primary_key(&self, ordinal: usize) -> bool {
        self.pk_columns.contains(&ordinal)
    }

    /// The column at primary-key position `position`, in key declaration
    /// order rather than column-table order. `None` past the end of the key.
    pub fn pk_column(&self, position: usize) -> Option<&Column> {
        self.pk_columns
            .get(position)
            .and_then(|&ordinal| self.columns.get(ordinal))
    }
}
