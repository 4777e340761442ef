//! Table assembly orchestration.

use futures::future::try_join_all;
use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::model::Table;
use crate::source::MetadataSource;

/// Assemble the complete model of `` `schema`.`table` `` from a metadata
/// source.
///
/// Fetches column metadata, then index metadata, then runs the canonical
/// builder pipeline ([`Table::from_rows`]). Assembly is synchronous with
/// respect to the source: one fetch at a time, no shared state. Every call
/// re-derives the model fresh.
///
/// # Errors
///
/// Any fetch or build failure aborts with no partial table: a source error
/// is propagated verbatim, a table with zero column rows fails with
/// [`SchemaError::MissingTable`], and parse/resolution failures surface
/// from the pipeline.
pub async fn assemble_table<S>(source: &mut S, schema: &str, table: &str) -> SchemaResult<Table>
where
    S: MetadataSource + ?Sized,
{
    let column_rows = source.fetch_columns(schema, table).await?;
    if column_rows.is_empty() {
        return Err(SchemaError::MissingTable {
            schema: schema.to_string(),
            table: table.to_string(),
        });
    }

    let index_rows = source.fetch_indexes(schema, table).await?;
    debug!(
        %schema,
        %table,
        columns = column_rows.len(),
        index_rows = index_rows.len(),
        "assembling table model"
    );

    Table::from_rows(schema, table, column_rows, index_rows)
}

/// Assemble several tables concurrently, one source handle per table.
///
/// Results come back in target order. The first failure fails the whole
/// batch, matching the no-partial-output policy of a single assembly.
pub async fn assemble_tables<S>(targets: Vec<(S, String, String)>) -> SchemaResult<Vec<Table>>
where
    S: MetadataSource,
{
    try_join_all(
        targets
            .into_iter()
            .map(|(mut source, schema, table)| async move {
                assemble_table(&mut source, &schema, &table).await
            }),
    )
    .await
}
