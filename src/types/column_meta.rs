/// Values the catalog reports in the identity flag column that mark a
/// store-generated value.
const IDENTITY_FLAGS: &[&str] = &["A", "D", "Y"];

/// Normalized metadata of one table or view column.
///
/// `java_name` and `java_type` are resolved before construction; a column
/// whose SQL type has no known mapping never becomes a `ColumnMeta`.
#[derive(Clone, Debug)]
pub struct ColumnMeta {
    pub column_name: String,
    pub sql_type: String,
    pub description: Option<String>,
    pub java_name: String,
    pub java_type: String,
    /// Rendered `FK_NAME -> TABLE.COLUMN | ...` line, when the column is a
    /// foreign key.
    pub foreign_key_comment: Option<String>,
    /// 'Y' or 'N'
    pub allows_null: Option<String>,
    pub identity_flag: Option<String>,
    pub length: i32,
    pub precision: i32,
    pub scale: i32,
    pub is_primary_key: bool,
}

impl ColumnMeta {
    pub fn is_identity(&self) -> bool {
        self.identity_flag
            .as_deref()
            .is_some_and(|flag| IDENTITY_FLAGS.iter().any(|f| f.eq_ignore_ascii_case(flag)))
    }

    pub fn is_nullable(&self) -> bool {
        self.allows_null
            .as_deref()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("Y"))
    }
}
