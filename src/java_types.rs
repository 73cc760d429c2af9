//! SQL type to Java type resolution.

use crate::error::CodeGenerationError;

/// Precision below which a scale-0 DECIMAL/NUMERIC still fits an `Integer`.
const INTEGER_PRECISION_LIMIT: i32 = 7;

/// Closed, data-driven mapping from SQL type names to Java types. The
/// DECIMAL/NUMERIC family is handled separately because it depends on
/// precision and scale.
const SQL_TYPE_MAP: &[(&str, &str)] = &[
    ("BIT", "Boolean"),
    ("TINYINT", "Integer"),
    ("SMALLINT", "Integer"),
    ("INT", "Integer"),
    ("BIGINT", "Long"),
    ("NCHAR", "String"),
    ("NVARCHAR", "String"),
    ("CHAR", "String"),
    ("VARCHAR", "String"),
    ("TEXT", "String"),
    ("UNIQUEIDENTIFIER", "String"),
    ("BINARY", "byte[]"),
    ("VARBINARY", "byte[]"),
    ("IMAGE", "byte[]"),
    ("DATE", "LocalDate"),
    ("TIME", "LocalTime"),
    ("DATETIME", "LocalDateTime"),
    ("DATETIME2", "LocalDateTime"),
    ("SMALLDATETIME", "LocalDateTime"),
    ("DATETIMEOFFSET", "LocalDateTime"),
    // monetary and floating types map to BigDecimal on purpose: binary
    // floats cannot represent money exactly
    ("FLOAT", "BigDecimal"),
    ("REAL", "BigDecimal"),
    ("MONEY", "BigDecimal"),
    ("SMALLMONEY", "BigDecimal"),
];

/// Resolve the Java type for a column. An unknown SQL type is a hard stop
/// for the table: silently guessing would produce incorrect persistence
/// mappings.
pub fn resolve_java_type(
    table_name: &str,
    column_name: &str,
    sql_type: &str,
    precision: i32,
    scale: i32,
) -> Result<String, CodeGenerationError> {
    let normalized = sql_type.to_uppercase();

    if normalized.starts_with("DECIMAL") || normalized.starts_with("NUMERIC") {
        if scale == 0 {
            let java_type = if precision < INTEGER_PRECISION_LIMIT {
                "Integer"
            } else {
                "Long"
            };
            return Ok(java_type.to_string());
        }

        return Ok("BigDecimal".to_string());
    }

    SQL_TYPE_MAP
        .iter()
        .find(|(sql, _)| *sql == normalized)
        .map(|(_, java)| (*java).to_string())
        .ok_or_else(|| CodeGenerationError::UnknownSqlType {
            table: table_name.to_string(),
            column: column_name.to_string(),
            sql_type: normalized,
        })
}
