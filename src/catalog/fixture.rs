use super::{CatalogError, CatalogRow, ForeignKeyRow, TableCatalog};

/// In-memory catalog with a fixed set of sample tables. Stands in for the
/// real system catalog in tests and in the demo CLI.
#[derive(Debug, Default)]
pub struct FixtureCatalog;

impl FixtureCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Names of the tables and views the fixture knows about.
    pub fn table_names() -> &'static [&'static str] {
        &["T999DOMA", "T999NULL", "T999TEST", "V999VIEW"]
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    table_name: &str,
    table_description: Option<&str>,
    column_name: &str,
    sql_type: &str,
    column_description: Option<&str>,
    allows_null: char,
    length: i32,
    precision: i32,
    scale: i32,
    primary_key_ordinal: Option<i32>,
    identity_flag: char,
) -> CatalogRow {
    CatalogRow {
        table_name: table_name.to_string(),
        table_description: table_description.map(str::to_string),
        column_name: column_name.to_string(),
        sql_type: sql_type.to_string(),
        column_description: column_description.map(str::to_string),
        allows_null: Some(allows_null.to_string()),
        length: Some(length),
        precision: Some(precision),
        scale: Some(scale),
        primary_key_ordinal,
        identity_flag: Some(identity_flag.to_string()),
    }
}

fn fk(source: &str, name: &str, table: &str, column: &str) -> ForeignKeyRow {
    ForeignKeyRow {
        source_column_name: source.to_string(),
        foreign_key_name: name.to_string(),
        referenced_table_name: table.to_string(),
        referenced_column_name: column.to_string(),
    }
}

impl TableCatalog for FixtureCatalog {
    fn fetch_table_info(
        &self,
        _database: Option<&str>,
        table: &str,
    ) -> Result<Vec<CatalogRow>, CatalogError> {
        if table.eq_ignore_ascii_case("T999TEST") {
            let t = "T999TEST";
            let desc = Some(
                "Test table containing many SQL types. Also, all columns have perfect descriptions.",
            );
            return Ok(vec![
                row(t, desc, "ID_TST", "decimal", Some("Identifier Test"), 'N', 5, 18, 0, Some(1), 'Y'),
                row(t, desc, "CD_DOM", "decimal", Some("Code Domain"), 'N', 5, 3, 0, Some(0), 'N'),
                row(t, desc, "VL_TST", "decimal", Some("Value Test"), 'Y', 9, 18, 2, None, 'N'),
                row(t, desc, "NM_TST", "char", Some("Name Test"), 'N', 30, 0, 0, None, 'N'),
                row(t, desc, "FL_TST", "bit", Some("Flag Test"), 'Y', 1, 1, 0, None, 'N'),
                row(t, desc, "DT_TST", "datetime", Some("Datetime Test"), 'Y', 8, 23, 3, None, 'N'),
                row(t, desc, "DA_TST", "date", Some("Date Test"), 'Y', 3, 10, 0, None, 'N'),
                row(t, desc, "TM_TST", "time", Some("Time Test"), 'Y', 5, 16, 7, None, 'N'),
                row(t, desc, "BL_TST", "binary", Some("Binary Test"), 'Y', 8, 0, 0, None, 'N'),
            ]);
        }

        if table.eq_ignore_ascii_case("T999DOMA") {
            let t = "T999DOMA";
            let desc = Some("In this table, no column descriptions fit the column's codes.");
            return Ok(vec![
                row(t, desc, "CD_DOM", "decimal", Some("This column will be an Integer"), 'N', 5, 3, 0, Some(1), 'Y'),
                row(t, desc, "CD_DFK", "decimal", Some("This column is FK for two different tables"), 'N', 5, 3, 0, None, 'N'),
                row(t, desc, "NM_DOM", "char", Some("And this one will be a String"), 'N', 200, 0, 0, None, 'N'),
            ]);
        }

        if table.eq_ignore_ascii_case("T999NULL") {
            let t = "T999NULL";
            return Ok(vec![
                row(t, None, "CD_FPK", "decimal", None, 'N', 5, 3, 0, Some(1), 'N'),
                row(t, None, "CD_SPK", "decimal", None, 'N', 5, 3, 0, Some(2), 'N'),
                row(t, None, "NM_NUL", "varchar", None, 'Y', 50, 0, 0, None, 'N'),
            ]);
        }

        Ok(Vec::new())
    }

    fn fetch_view_info(
        &self,
        _database: Option<&str>,
        view: &str,
    ) -> Result<Vec<CatalogRow>, CatalogError> {
        if view.eq_ignore_ascii_case("V999VIEW") {
            let v = "V999VIEW";
            return Ok(vec![
                row(v, None, "SQ_VIE", "decimal", None, 'N', 5, 18, 0, Some(1), 'N'),
                row(v, None, "NM_VIE", "varchar", None, 'Y', 50, 0, 0, None, 'N'),
            ]);
        }

        Ok(Vec::new())
    }

    fn fetch_foreign_keys(
        &self,
        _database: Option<&str>,
        table: &str,
    ) -> Result<Vec<ForeignKeyRow>, CatalogError> {
        if table.eq_ignore_ascii_case("T999TEST") {
            return Ok(vec![fk("CD_DOM", "FK_TEST_DOMA_01", "T999DOMA", "CD_DOM")]);
        }

        if table.eq_ignore_ascii_case("T999DOMA") {
            return Ok(vec![
                fk("CD_DFK", "FK_DOMA_FFKY_01", "T999FFKY", "CD_DFK"),
                fk("CD_DFK", "FK_DOMA_SFKY_02", "T999SFKY", "CD_DFK"),
            ]);
        }

        if table.eq_ignore_ascii_case("T999NULL") {
            return Ok(vec![
                fk("CD_FPK", "FK_NULL_FNUL_01", "T999FNUL", "CD_FPK"),
                fk("CD_SPK", "FK_NULL_SNUL_02", "T999SNUL", "CD_SPK"),
            ]);
        }

        Ok(Vec::new())
    }
}
