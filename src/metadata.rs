//! Metadata assembly: raw catalog rows and foreign-key tuples into a
//! normalized [`TableMeta`] record.

use tracing::debug;

use crate::catalog::{CatalogRow, TableCatalog};
use crate::error::CodeGenerationError;
use crate::java_types;
use crate::naming;
use crate::types::foreign_key_meta::MULTI_FK_SEPARATOR;
use crate::types::{ColumnMeta, ForeignKeyMeta, TableMeta};

pub struct MetadataResolver<'a> {
    catalog: &'a dyn TableCatalog,
    /// Database used for the foreign-key fetch when the qualified name
    /// carries none.
    default_database: Option<String>,
}

impl<'a> MetadataResolver<'a> {
    pub fn new(catalog: &'a dyn TableCatalog, default_database: Option<String>) -> Self {
        Self {
            catalog,
            default_database,
        }
    }

    /// Resolve one qualified table or view name into its normalized
    /// metadata. Fails when the name is blank, the catalog reports no rows,
    /// a column's SQL type is unknown, or the catalog itself fails.
    pub fn resolve(&self, qualified_table_name: &str) -> Result<TableMeta, CodeGenerationError> {
        let table_name = naming::extract_table_name(qualified_table_name)?;
        let database_name = naming::extract_database_name(qualified_table_name);

        let rows = self.fetch_rows(database_name.as_deref(), &table_name)?;

        if rows.is_empty() {
            return Err(CodeGenerationError::TableNotFound(table_name));
        }

        let description = rows[0].table_description.clone();

        let mut columns = rows
            .iter()
            .map(|row| build_column(&table_name, row))
            .collect::<Result<Vec<_>, _>>()?;

        // every table yields a usable key
        if !columns.iter().any(|c| c.is_primary_key) {
            if let Some(first) = columns.first_mut() {
                first.is_primary_key = true;
            }
        }

        let class_name = naming::resolve_class_name(description.as_deref(), &table_name);

        let foreign_keys =
            self.fetch_merged_foreign_keys(database_name.as_deref(), &table_name)?;
        for column in &mut columns {
            if let Some(foreign_key) = foreign_keys
                .iter()
                .find(|fk| fk.source_column_name == column.column_name)
            {
                column.foreign_key_comment = Some(foreign_key.comment());
            }
        }

        debug!(
            table = %table_name,
            class = %class_name,
            columns = columns.len(),
            foreign_keys = foreign_keys.len(),
            "resolved table metadata"
        );

        Ok(TableMeta {
            table_name,
            database_name,
            description,
            class_name,
            columns,
        })
    }

    fn fetch_rows(
        &self,
        database: Option<&str>,
        table: &str,
    ) -> Result<Vec<CatalogRow>, CodeGenerationError> {
        let result = if TableMeta::is_view_name(table) {
            self.catalog.fetch_view_info(database, table)
        } else {
            self.catalog.fetch_table_info(database, table)
        };

        result.map_err(|source| CodeGenerationError::CatalogAccess {
            table: table.to_string(),
            source,
        })
    }

    /// Fetch foreign keys and merge constraints sharing a source column into
    /// one record, in encounter order.
    fn fetch_merged_foreign_keys(
        &self,
        database: Option<&str>,
        table: &str,
    ) -> Result<Vec<ForeignKeyMeta>, CodeGenerationError> {
        let database = database.or(self.default_database.as_deref());

        let rows = self
            .catalog
            .fetch_foreign_keys(database, table)
            .map_err(|source| CodeGenerationError::CatalogAccess {
                table: table.to_string(),
                source,
            })?;

        let mut merged: Vec<ForeignKeyMeta> = Vec::new();

        for row in rows {
            // a raw string carrying the separator would break the parallel
            // alignment of the merged sides
            let sides = [
                &row.foreign_key_name,
                &row.referenced_table_name,
                &row.referenced_column_name,
            ];
            if sides.iter().any(|side| side.contains(MULTI_FK_SEPARATOR)) {
                return Err(CodeGenerationError::ReservedSeparator {
                    table: table.to_string(),
                    foreign_key: row.foreign_key_name.clone(),
                });
            }

            let incoming = ForeignKeyMeta {
                source_column_name: row.source_column_name,
                foreign_key_name: row.foreign_key_name,
                referenced_table_name: row.referenced_table_name,
                referenced_column_name: row.referenced_column_name,
            };

            match merged
                .iter()
                .position(|fk| fk.source_column_name == incoming.source_column_name)
            {
                Some(index) => merged[index].merge(&incoming),
                None => merged.push(incoming),
            }
        }

        Ok(merged)
    }
}

fn build_column(table_name: &str, row: &CatalogRow) -> Result<ColumnMeta, CodeGenerationError> {
    let precision = row.precision.unwrap_or(0);
    let scale = row.scale.unwrap_or(0);

    let java_name = naming::resolve_field_name(row.column_description.as_deref(), &row.column_name);
    let java_type = java_types::resolve_java_type(
        table_name,
        &row.column_name,
        &row.sql_type,
        precision,
        scale,
    )?;

    let is_primary_key = row.primary_key_ordinal.is_some_and(|ordinal| ordinal > 0)
        || row
            .identity_flag
            .as_deref()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("Y"));

    Ok(ColumnMeta {
        column_name: row.column_name.clone(),
        sql_type: row.sql_type.clone(),
        description: row.column_description.clone(),
        java_name,
        java_type,
        foreign_key_comment: None,
        allows_null: row.allows_null.clone(),
        identity_flag: row.identity_flag.clone(),
        length: row.length.unwrap_or(0),
        precision,
        scale,
        is_primary_key,
    })
}
