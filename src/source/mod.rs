//! Metadata source adapters.
//!
//! A [`MetadataSource`] abstracts over how raw column and index rows are
//! fetched for a table. Two adapters exist:
//!
//! - [`MySqlSource`] drives a native MySQL protocol connection
//!   ([`sqlx::mysql::MySqlConnection`]).
//! - [`AnySource`] drives a generic, driver-agnostic query handle
//!   ([`sqlx::any::AnyConnection`]).
//!
//! Both issue the same metadata statements and map results onto the same
//! row contract ([`ColumnRow`], [`IndexRow`]), so the builder pipeline
//! above them is adapter-agnostic and the assembled models converge.
//!
//! Connection establishment, authentication, and wire framing stay with the
//! caller: an adapter wraps an already-established handle and owns it for
//! its lifetime (recover it with `into_inner`).

mod any;
mod mysql;

pub use any::AnySource;
pub use mysql::MySqlSource;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SchemaResult;

/// One raw column metadata row, as produced by `SHOW FULL COLUMNS`.
///
/// Adapters deliver these ordered by ordinal, contiguous from zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRow {
    /// Zero-based declaration position.
    pub ordinal: usize,
    /// Column name, with any quoting artifacts already stripped by the
    /// server.
    pub name: String,
    /// Raw type string (e.g. `varchar(256)`, `int(11) unsigned`).
    pub raw_type: String,
    /// Resolved collation; empty for non-charset columns.
    pub collation: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Declared default value, if any.
    pub default: Option<String>,
    /// Extra flags (e.g. `auto_increment`).
    pub extra: String,
}

/// One raw per-column index row, as produced by `SHOW INDEX`.
///
/// Delivery order is not significant; the index builder imposes order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRow {
    /// Index name; `PRIMARY` for the primary key.
    pub index_name: String,
    /// Name of the column this row describes.
    pub column_name: String,
    /// 1-based position of the column within the index.
    pub seq_in_index: u32,
    /// Whether the index permits duplicate values.
    pub non_unique: bool,
}

/// Capability set every metadata backend implements.
///
/// Methods take `&mut self` because a database connection is an exclusive
/// resource; concurrent assemblies each need their own source.
#[async_trait]
pub trait MetadataSource: Send {
    /// Fetch column metadata rows for one table, ordered by ordinal.
    async fn fetch_columns(&mut self, schema: &str, table: &str) -> SchemaResult<Vec<ColumnRow>>;

    /// Fetch raw per-column index rows for one table, in server order.
    async fn fetch_indexes(&mut self, schema: &str, table: &str) -> SchemaResult<Vec<IndexRow>>;
}

/// Quote an identifier MySQL-style, escaping backticks by doubling.
///
/// Quoting is only ever applied when constructing metadata queries; the
/// names stored in the model stay verbatim.
pub fn quote_identifier(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

pub(crate) fn show_full_columns(schema: &str, table: &str) -> String {
    format!(
        "SHOW FULL COLUMNS FROM {}.{}",
        quote_identifier(schema),
        quote_identifier(table)
    )
}

pub(crate) fn show_index(schema: &str, table: &str) -> String {
    format!(
        "SHOW INDEX FROM {}.{}",
        quote_identifier(schema),
        quote_identifier(table)
    )
}
