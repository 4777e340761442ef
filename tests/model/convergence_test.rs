//! Contract tests for the dual-backend convergence invariant: one canonical
//! builder pipeline, instantiated against two metadata sources that deliver
//! the same table with different backend quirks, must produce deeply equal
//! models.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use myschema::{
        assemble_table, assemble_tables, ColumnRow, IndexRow, MetadataSource, SchemaError,
        SchemaResult,
    };

    fn col(ordinal: usize, name: &str, raw_type: &str, collation: &str) -> ColumnRow {
        ColumnRow {
            ordinal,
            name: name.to_string(),
            raw_type: raw_type.to_string(),
            collation: collation.to_string(),
            nullable: true,
            default: None,
            extra: String::new(),
        }
    }

    fn idx(index: &str, column: &str, seq: u32, non_unique: bool) -> IndexRow {
        IndexRow {
            index_name: index.to_string(),
            column_name: column.to_string(),
            seq_in_index: seq,
            non_unique,
        }
    }

    fn fixture_columns() -> Vec<ColumnRow> {
        vec![
            col(0, "id", "int(11)", ""),
            col(1, "id1", "int(11)", ""),
            col(2, "id2", "int(11)", ""),
            col(3, "name", "varchar(256)", "utf8mb4_general_ci"),
        ]
    }

    /// Index rows as the native protocol path delivers them: grouped by
    /// index, sequence ascending.
    fn conn_index_rows() -> Vec<IndexRow> {
        vec![
            idx("PRIMARY", "id2", 1, false),
            idx("PRIMARY", "id", 2, false),
            idx("id1", "id1", 1, false),
            idx("name_idx", "name", 1, true),
        ]
    }

    /// The same rows with one index's rows out of sequence order, the way a
    /// generic handle is free to deliver them. Grouping must not depend on
    /// delivery order within an index.
    fn handle_index_rows() -> Vec<IndexRow> {
        vec![
            idx("PRIMARY", "id", 2, false),
            idx("PRIMARY", "id2", 1, false),
            idx("id1", "id1", 1, false),
            idx("name_idx", "name", 1, true),
        ]
    }

    /// Stands in for one metadata backend; each instance owns its canned
    /// rows the way a real source owns its connection.
    struct FixtureSource {
        columns: Vec<ColumnRow>,
        indexes: Vec<IndexRow>,
    }

    #[async_trait]
    impl MetadataSource for FixtureSource {
        async fn fetch_columns(
            &mut self,
            _schema: &str,
            _table: &str,
        ) -> SchemaResult<Vec<ColumnRow>> {
            Ok(self.columns.clone())
        }

        async fn fetch_indexes(
            &mut self,
            _schema: &str,
            _table: &str,
        ) -> SchemaResult<Vec<IndexRow>> {
            Ok(self.indexes.clone())
        }
    }

    /// A source whose fetches fail, standing in for a dead connection.
    struct FailingSource;

    #[async_trait]
    impl MetadataSource for FailingSource {
        async fn fetch_columns(
            &mut self,
            _schema: &str,
            _table: &str,
        ) -> SchemaResult<Vec<ColumnRow>> {
            Err(SchemaError::from(sqlx::Error::PoolClosed))
        }

        async fn fetch_indexes(
            &mut self,
            _schema: &str,
            _table: &str,
        ) -> SchemaResult<Vec<IndexRow>> {
            Err(SchemaError::from(sqlx::Error::PoolClosed))
        }
    }

    #[tokio::test]
    async fn test_both_backends_converge() {
        let mut conn = FixtureSource {
            columns: fixture_columns(),
            indexes: conn_index_rows(),
        };
        let mut handle = FixtureSource {
            columns: fixture_columns(),
            indexes: handle_index_rows(),
        };

        let via_conn = assemble_table(&mut conn, "test", "schema_test")
            .await
            .unwrap();
        let via_handle = assemble_table(&mut handle, "test", "schema_test")
            .await
            .unwrap();

        assert_eq!(via_conn, via_handle);
        assert_eq!(via_conn.pk_columns, vec![2, 0]);
    }

    #[tokio::test]
    async fn test_assembly_works_through_a_trait_object() {
        let mut source = FixtureSource {
            columns: fixture_columns(),
            indexes: conn_index_rows(),
        };
        let dynamic: &mut dyn MetadataSource = &mut source;

        let ta = assemble_table(dynamic, "test", "schema_test").await.unwrap();
        assert_eq!(ta.columns.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_table_is_descriptive() {
        let mut empty = FixtureSource {
            columns: Vec::new(),
            indexes: Vec::new(),
        };

        let err = assemble_table(&mut empty, "test", "nope").await.unwrap_err();
        match err {
            SchemaError::MissingTable { schema, table } => {
                assert_eq!(schema, "test");
                assert_eq!(table, "nope");
            }
            other => panic!("expected MissingTable, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_source_errors_abort_assembly() {
        let err = assemble_table(&mut FailingSource, "test", "t")
            .await
            .unwrap_err();
        assert!(matches!(err, SchemaError::Source(_)));
    }

    #[tokio::test]
    async fn test_batch_assembly_keeps_target_order() {
        let targets = vec![
            (
                FixtureSource {
                    columns: fixture_columns(),
                    indexes: conn_index_rows(),
                },
                "test".to_string(),
                "first".to_string(),
            ),
            (
                FixtureSource {
                    columns: fixture_columns(),
                    indexes: handle_index_rows(),
                },
                "test".to_string(),
                "second".to_string(),
            ),
        ];

        let tables = assemble_tables(targets).await.unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].name, "first");
        assert_eq!(tables[1].name, "second");
        // Same underlying structure on both paths.
        assert_eq!(tables[0].columns, tables[1].columns);
        assert_eq!(tables[0].indexes, tables[1].indexes);
    }
}
