//! Index entity and the grouping of raw index rows.

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};
use crate::model::Column;
use crate::source::IndexRow;

/// A named, ordered grouping of columns used for lookup or uniqueness.
///
/// `"PRIMARY"` is the reserved name for the primary key. Columns are held
/// as ordinals into the owning table's column sequence, in index
/// declaration order, which need not match column-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Index name, unique within its table.
    pub name: String,
    /// Whether the index enforces uniqueness.
    pub is_unique: bool,
    /// Column ordinals in index declaration order.
    pub columns: Vec<usize>,
}

struct Group {
    name: String,
    is_unique: bool,
    parts: Vec<(u32, usize)>,
}

/// Group raw per-column index rows into ordered [`Index`] entities.
///
/// Distinct index names keep first-seen order; within an index, columns are
/// ordered by their sequence number ascending. Column names resolve to
/// ordinals against the already-built column sequence.
///
/// # Errors
///
/// A row naming a column the table does not declare fails with
/// [`SchemaError::UnknownIndexColumn`]; a repeated sequence number within
/// one index fails with [`SchemaError::DuplicateIndexSequence`]. Both
/// signal inconsistent server metadata and abort assembly.
pub(crate) fn group_rows(columns: &[Column], rows: Vec<IndexRow>) -> SchemaResult<Vec<Index>> {
    let mut groups: Vec<Group> = Vec::new();

    for row in rows {
        let IndexRow {
            index_name,
            column_name,
            seq_in_index,
            non_unique,
        } = row;

        let ordinal = columns
            .iter()
            .position(|c| c.name == column_name)
            .ok_or_else(|| SchemaError::UnknownIndexColumn {
                index: index_name.clone(),
                column: column_name.clone(),
            })?;

        let pos = match groups.iter().position(|g| g.name == index_name) {
            Some(pos) => pos,
            None => {
                groups.push(Group {
                    name: index_name.clone(),
                    is_unique: !non_unique,
                    parts: Vec::new(),
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[pos];
        if group.parts.iter().any(|&(seq, _)| seq == seq_in_index) {
            return Err(SchemaError::DuplicateIndexSequence {
                index: index_name,
                seq: seq_in_index,
            });
        }
        group.parts.push((seq_in_index, ordinal));
    }

    Ok(groups
        .into_iter()
        .map(|mut group| {
            group.parts.sort_by_key(|&(seq, _)| seq);
            Index {
                name: group.name,
                is_unique: group.is_unique,
                columns: group.parts.into_iter().map(|(_, ordinal)| ordinal).collect(),
            }
        })
        .collect())
}
