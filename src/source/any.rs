//! Generic query-handle metadata source.

use async_trait::async_trait;
use sqlx::AnyConnection;
use sqlx::Row;
use tracing::debug;

use super::{show_full_columns, show_index, ColumnRow, IndexRow, MetadataSource};
use crate::error::SchemaResult;

/// Metadata source over a driver-agnostic query handle.
///
/// This is the generic counterpart to [`MySqlSource`](super::MySqlSource):
/// the same statements issued through [`AnyConnection`], sqlx's
/// runtime-dispatched handle. Assembling a table through either source
/// yields deeply equal models.
///
/// # Example
///
/// ```ignore
/// use sqlx::{Connection, any::AnyConnection};
/// use myschema::{assemble_table, AnySource};
///
/// sqlx::any::install_default_drivers();
/// let conn = AnyConnection::connect("mysql://root@localhost/test").await?;
/// let mut source = AnySource::new(conn);
/// let table = assemble_table(&mut source, "test", "orders").await?;
/// ```
pub struct AnySource {
    conn: AnyConnection,
}

impl AnySource {
    /// Wrap an established generic connection.
    pub fn new(conn: AnyConnection) -> Self {
        Self { conn }
    }

    /// Recover the underlying connection.
    pub fn into_inner(self) -> AnyConnection {
        self.conn
    }
}

#[async_trait]
impl MetadataSource for AnySource {
    async fn fetch_columns(&mut self, schema: &str, table: &str) -> SchemaResult<Vec<ColumnRow>> {
        let sql = show_full_columns(schema, table);
        debug!(%schema, %table, "fetching column metadata over generic handle");
        let rows = sqlx::query(&sql).fetch_all(&mut self.conn).await?;

        rows.iter()
            .enumerate()
            .map(|(ordinal, row)| {
                Ok(ColumnRow {
                    ordinal,
                    name: row.try_get("Field")?,
                    raw_type: row.try_get("Type")?,
                    collation: row
                        .try_get::<Option<String>, _>("Collation")?
                        .unwrap_or_default(),
                    nullable: row.try_get::<String, _>("Null")? == "YES",
                    default: row.try_get("Default")?,
                    extra: row.try_get("Extra")?,
                })
            })
            .collect()
    }

    async fn fetch_indexes(&mut self, schema: &str, table: &str) -> SchemaResult<Vec<IndexRow>> {
        let sql = show_index(schema, table);
        debug!(%schema, %table, "fetching index metadata over generic handle");
        let rows = sqlx::query(&sql).fetch_all(&mut self.conn).await?;

        rows.iter()
            .map(|row| {
                Ok(IndexRow {
                    index_name: row.try_get("Key_name")?,
                    column_name: row.try_get("Column_name")?,
                    seq_in_index: row.try_get::<i64, _>("Seq_in_index")? as u32,
                    non_unique: row.try_get::<i64, _>("Non_unique")? != 0,
                })
            })
            .collect()
    }
}
