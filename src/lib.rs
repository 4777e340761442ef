//! # myschema
//!
//! MySQL table schema introspection with interchangeable metadata backends.
//!
//! The crate builds an in-memory, normalized description of a table's
//! structure (columns, typed descriptors, indexes, primary key) from the raw
//! metadata rows a server returns, so downstream tools (replication decoders,
//! query builders, diffing tools) can reason about a table's shape without
//! re-parsing DDL.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │         MetadataSource (native conn │ generic handle)    │
//! │         SHOW FULL COLUMNS / SHOW INDEX → raw rows        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [typeinfo]
//! ┌─────────────────────────────────────────────────────────┐
//! │        TypeDescriptor (kind, sizes, flags, values)       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [model builders]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Columns → Indexes → primary-key resolution        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [assemble]
//! ┌─────────────────────────────────────────────────────────┐
//! │              Table (immutable, query surface)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: raw rows in, an assembled [`Table`] out. The builder
//! pipeline is a single canonical path parametrized over [`MetadataSource`],
//! which is what guarantees that the native protocol connection and the
//! generic query handle converge on deeply equal models.
//!
//! ## Example
//!
//! ```ignore
//! use sqlx::{Connection, mysql::MySqlConnection};
//! use myschema::{assemble_table, MySqlSource};
//!
//! let conn = MySqlConnection::connect("mysql://root@localhost/test").await?;
//! let mut source = MySqlSource::new(conn);
//! let table = assemble_table(&mut source, "test", "orders").await?;
//!
//! for column in &table.columns {
//!     println!("{}: {:?}", column.name, column.type_desc.kind);
//! }
//! ```

pub mod assemble;
pub mod error;
pub mod model;
pub mod source;
pub mod typeinfo;

pub use assemble::{assemble_table, assemble_tables};
pub use error::{SchemaError, SchemaResult};
pub use model::{Column, Index, Table, PRIMARY_INDEX};
pub use source::{AnySource, ColumnRow, IndexRow, MetadataSource, MySqlSource};
pub use typeinfo::{parse_type, ColumnKind, TypeDescriptor};
