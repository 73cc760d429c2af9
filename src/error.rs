use thiserror::Error;

use crate::catalog::CatalogError;

/// Boundary-facing classification of a generation failure. The core treats
/// every error as unrecoverable for the current request; the severity only
/// drives status/exit-code mapping at the calling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    ClientFault,
    ServerFault,
}

/// Single error kind raised by the generation pipeline.
#[derive(Debug, Error)]
pub enum CodeGenerationError {
    /// The request itself is unusable (blank table name, empty table list).
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Table '{0}' was not found in the system catalog views.")]
    TableNotFound(String),

    #[error("No Java type is known for the column '{column}' with SQL type '{sql_type}'.")]
    UnknownSqlType {
        table: String,
        column: String,
        sql_type: String,
    },

    #[error("Catalog access failed for table '{table}': {source}")]
    CatalogAccess {
        table: String,
        #[source]
        source: CatalogError,
    },

    /// A raw foreign-key string already contains the reserved merge separator,
    /// which would break the parallel alignment of merged constraints.
    #[error("Foreign key '{foreign_key}' on table '{table}' contains the reserved separator '#'")]
    ReservedSeparator { table: String, foreign_key: String },
}

impl CodeGenerationError {
    pub fn table_name(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest(_) => None,
            Self::TableNotFound(table) => Some(table),
            Self::UnknownSqlType { table, .. } => Some(table),
            Self::CatalogAccess { table, .. } => Some(table),
            Self::ReservedSeparator { table, .. } => Some(table),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::InvalidRequest(_) | Self::TableNotFound(_) => Severity::ClientFault,
            Self::UnknownSqlType { .. }
            | Self::CatalogAccess { .. }
            | Self::ReservedSeparator { .. } => Severity::ServerFault,
        }
    }
}
