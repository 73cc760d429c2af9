pub mod fixture;

pub use fixture::FixtureCatalog;

use thiserror::Error;

/// Failure reported by a catalog backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("access to the catalog views was denied: {0}")]
    AccessDenied(String),

    #[error("catalog query failed: {0}")]
    Query(String),
}

/// One column row of a table or view as reported by the system catalog.
///
/// Numeric fields are optional at this interface; the assembler defaults
/// them to 0 before type resolution.
#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub table_name: String,
    pub table_description: Option<String>,
    pub column_name: String,
    pub sql_type: String,
    pub column_description: Option<String>,
    /// 'Y' or 'N'
    pub allows_null: Option<String>,
    pub length: Option<i32>,
    pub precision: Option<i32>,
    pub scale: Option<i32>,
    /// Position of the column inside the primary key, 0 or absent when the
    /// column is not part of it.
    pub primary_key_ordinal: Option<i32>,
    /// 'Y' when the data store assigns the value itself.
    pub identity_flag: Option<String>,
}

/// One foreign-key constraint tuple, unmerged. A source column participating
/// in several constraints yields several rows.
#[derive(Debug, Clone)]
pub struct ForeignKeyRow {
    pub source_column_name: String,
    pub foreign_key_name: String,
    pub referenced_table_name: String,
    pub referenced_column_name: String,
}

/// Metadata-fetch interface. Implementations may be backed by any catalog
/// source; the pipeline treats every call as blocking and applies no retry.
pub trait TableCatalog {
    fn fetch_table_info(
        &self,
        database: Option<&str>,
        table: &str,
    ) -> Result<Vec<CatalogRow>, CatalogError>;

    fn fetch_view_info(
        &self,
        database: Option<&str>,
        view: &str,
    ) -> Result<Vec<CatalogRow>, CatalogError>;

    fn fetch_foreign_keys(
        &self,
        database: Option<&str>,
        table: &str,
    ) -> Result<Vec<ForeignKeyRow>, CatalogError>;
}
