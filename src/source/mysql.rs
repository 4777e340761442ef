//! Native-protocol metadata source.

use async_trait::async_trait;
use sqlx::mysql::MySqlConnection;
use sqlx::Row;
use tracing::debug;

use super::{show_full_columns, show_index, ColumnRow, IndexRow, MetadataSource};
use crate::error::SchemaResult;

/// Metadata source over a native MySQL protocol connection.
///
/// Wraps an already-established [`MySqlConnection`]; connection
/// configuration and authentication stay with the caller.
///
/// # Example
///
/// ```ignore
/// use sqlx::{Connection, mysql::MySqlConnection};
/// use myschema::{assemble_table, MySqlSource};
///
/// let conn = MySqlConnection::connect("mysql://root@localhost/test").await?;
/// let mut source = MySqlSource::new(conn);
/// let table = assemble_table(&mut source, "test", "orders").await?;
/// ```
pub struct MySqlSource {
    conn: MySqlConnection,
}

impl MySqlSource {
    /// Wrap an established native connection.
    pub fn new(conn: MySqlConnection) -> Self {
        Self { conn }
    }

    /// Recover the underlying connection.
    pub fn into_inner(self) -> MySqlConnection {
        self.conn
    }
}

#[async_trait]
impl MetadataSource for MySqlSource {
    async fn fetch_columns(&mut self, schema: &str, table: &str) -> SchemaResult<Vec<ColumnRow>> {
        let sql = show_full_columns(schema, table);
        debug!(%schema, %table, "fetching column metadata over native connection");
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
        debug!(%schema, %table, "fetching index metadata over native connection");
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
