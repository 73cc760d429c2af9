use super::column_meta::ColumnMeta;
use crate::naming;

/// Leading character that marks a view by naming convention.
const VIEW_PREFIX: char = 'V';

/// Normalized metadata of one table or view, columns in catalog order.
#[derive(Clone, Debug)]
pub struct TableMeta {
    pub table_name: String,
    pub database_name: Option<String>,
    pub description: Option<String>,
    /// Resolved Java class base name, suffixes not applied.
    pub class_name: String,
    pub columns: Vec<ColumnMeta>,
}

impl TableMeta {
    pub fn is_composite_pk(&self) -> bool {
        self.columns
            .iter()
            .filter(|c| c.is_primary_key)
            .take(2)
            .count()
            > 1
    }

    pub fn is_view_name(table_name: &str) -> bool {
        table_name.starts_with(VIEW_PREFIX)
    }

    pub fn is_view(&self) -> bool {
        Self::is_view_name(&self.table_name)
    }

    /// Java type of the primary key: the `PK`-suffixed class for a composite
    /// key, otherwise the single key column's type.
    pub fn pk_java_type(&self) -> Option<String> {
        if self.is_composite_pk() {
            return Some(naming::pk_class_name(&self.class_name));
        }

        self.columns
            .iter()
            .find(|c| c.is_primary_key)
            .map(|c| c.java_type.clone())
    }
}
