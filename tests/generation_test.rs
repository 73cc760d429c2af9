//! End-to-end generation scenarios driven through the fixture catalog:
//! resolve -> build -> render, plus the boundary packaging rules.

use std::io::Read;

use spring_source_generator::catalog::{
    CatalogError, CatalogRow, FixtureCatalog, ForeignKeyRow, TableCatalog,
};
use spring_source_generator::error::{CodeGenerationError, Severity};
use spring_source_generator::generator::generate_sources;
use spring_source_generator::packaging;
use spring_source_generator::request::GenerationRequest;
use spring_source_generator::types::GeneratedSource;

fn request(tables: &str, dto: bool, service_repository: bool) -> GenerationRequest {
    GenerationRequest {
        table_names: tables.to_string(),
        root_package: "com.example".to_string(),
        generate_dto: dto,
        generate_service_repository: service_repository,
    }
}

fn generate(tables: &str, dto: bool, service_repository: bool) -> Vec<GeneratedSource> {
    let catalog = FixtureCatalog::new();
    generate_sources(&catalog, &request(tables, dto, service_repository), None).unwrap()
}

#[test]
fn scenario_a_entity_comments_and_type_narrowing() {
    let sources = generate("T999TEST", false, false);
    assert_eq!(sources.len(), 1);

    let entity = &sources[0];
    assert_eq!(entity.java_name, "TestContainingPerfectDescriptions");
    assert_eq!(entity.package_name, "com.example.entity");

    // comment block carries the raw name, the kind and the description
    assert!(entity.source_code.contains(" * T999TEST\n"));
    assert!(entity.source_code.contains(" * Type: Entity\n"));
    assert!(entity
        .source_code
        .contains(" * Test table containing many SQL types."));

    // decimal scale 0 below the precision limit narrows to Integer
    assert!(entity.source_code.contains("\tprivate Integer codeDomain;\n"));
    // decimal precision 18 scale 0 widens to Long
    assert!(entity.source_code.contains("\tprivate Long identifierTest;\n"));
    // decimal with scale keeps BigDecimal plus its digits constraint
    assert!(entity
        .source_code
        .contains("\t@Digits(integer = 16, fraction = 2)\n"));
    assert!(entity
        .source_code
        .contains("\tprivate BigDecimal valueTest;\n"));

    // identity primary key
    assert!(entity
        .source_code
        .contains("\t@Id\n\t@GeneratedValue(strategy = GenerationType.IDENTITY)\n"));

    // type imports derived from the fields
    assert!(entity.source_code.contains("import java.math.BigDecimal;\n"));
    assert!(entity.source_code.contains("import java.time.LocalDate;\n"));
    assert!(entity.source_code.contains("import java.time.LocalDateTime;\n"));
    assert!(entity.source_code.contains("import java.time.LocalTime;\n"));
}

#[test]
fn scenario_b_merged_foreign_keys_render_one_comment() {
    let sources = generate("T999DOMA", false, false);
    let entity = &sources[0];

    assert!(entity.source_code.contains(
        "\t// FK_DOMA_FFKY_01 -> T999FFKY.CD_DFK | FK_DOMA_SFKY_02 -> T999SFKY.CD_DFK\n"
    ));
}

#[test]
fn scenario_c_composite_key_round_trip() {
    let sources = generate("T999NULL", false, true);

    let names: Vec<&str> = sources.iter().map(|s| s.java_name.as_str()).collect();
    assert_eq!(
        names,
        [
            "CompositeKeyTable",
            "CompositeKeyTablePK",
            "CompositeKeyTableService",
            "CompositeKeyTableRepository"
        ]
    );

    let repository = &sources[3];
    assert!(repository
        .source_code
        .contains("import com.example.entity.CompositeKeyTablePK;\n"));
    assert!(repository.source_code.contains(
        "public interface CompositeKeyTableRepository extends JpaRepository<CompositeKeyTable, CompositeKeyTablePK> {"
    ));
}

#[test]
fn scenario_d_field_override_wins_over_abbreviations() {
    let sources = generate("T999NULL", false, false);

    assert!(sources[0]
        .source_code
        .contains("\tprivate Integer secondPrimaryKey;\n"));
}

/// Catalog with a column whose SQL type has no mapping.
struct GeometryCatalog;

impl TableCatalog for GeometryCatalog {
    fn fetch_table_info(
        &self,
        database: Option<&str>,
        table: &str,
    ) -> Result<Vec<CatalogRow>, CatalogError> {
        if table.eq_ignore_ascii_case("T999GEOM") {
            return Ok(vec![CatalogRow {
                table_name: "T999GEOM".to_string(),
                table_description: None,
                column_name: "SH_GEO".to_string(),
                sql_type: "geometry".to_string(),
                column_description: None,
                allows_null: Some("N".to_string()),
                length: Some(0),
                precision: Some(0),
                scale: Some(0),
                primary_key_ordinal: Some(1),
                identity_flag: None,
            }]);
        }

        FixtureCatalog::new().fetch_table_info(database, table)
    }

    fn fetch_view_info(
        &self,
        database: Option<&str>,
        view: &str,
    ) -> Result<Vec<CatalogRow>, CatalogError> {
        FixtureCatalog::new().fetch_view_info(database, view)
    }

    fn fetch_foreign_keys(
        &self,
        database: Option<&str>,
        table: &str,
    ) -> Result<Vec<ForeignKeyRow>, CatalogError> {
        if table.eq_ignore_ascii_case("T999GEOM") {
            return Ok(Vec::new());
        }

        FixtureCatalog::new().fetch_foreign_keys(database, table)
    }
}

#[test]
fn scenario_e_unknown_sql_type_aborts_the_request() {
    let catalog = GeometryCatalog;
    let err =
        generate_sources(&catalog, &request("T999TEST,T999GEOM", true, true), None).unwrap_err();

    match &err {
        CodeGenerationError::UnknownSqlType {
            table,
            column,
            sql_type,
        } => {
            assert_eq!(table, "T999GEOM");
            assert_eq!(column, "SH_GEO");
            assert_eq!(sql_type, "GEOMETRY");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.severity(), Severity::ServerFault);
}

#[test]
fn unknown_table_fails_the_whole_request() {
    let catalog = FixtureCatalog::new();
    let err =
        generate_sources(&catalog, &request("T999TEST,T999MISS", false, false), None).unwrap_err();

    assert!(matches!(err, CodeGenerationError::TableNotFound(ref t) if t == "T999MISS"));
    assert_eq!(err.severity(), Severity::ClientFault);
}

#[test]
fn blank_table_list_is_a_client_fault() {
    let catalog = FixtureCatalog::new();
    let err = generate_sources(&catalog, &request(" , ,", false, false), None).unwrap_err();

    assert!(matches!(err, CodeGenerationError::InvalidRequest(_)));
    assert_eq!(err.severity(), Severity::ClientFault);
}

#[test]
fn composite_entity_source_matches_expected_text() {
    let sources = generate("T999NULL", false, false);

    let expected = "package com.example.entity;\n\n\
        import jakarta.persistence.*;\n\
        import jakarta.validation.constraints.Size;\n\
        import lombok.AllArgsConstructor;\n\
        import lombok.Data;\n\
        import lombok.NoArgsConstructor;\n\n\
        /*-\n \
        * T999NULL\n \
        * Type: Entity\n \
        */\n\
        @IdClass(CompositeKeyTablePK.class)\n\
        @Data\n\
        @AllArgsConstructor\n\
        @NoArgsConstructor\n\
        @Entity\n\
        @Table(name = \"T999NULL\")\n\
        public class CompositeKeyTable {\n\n\
        \t// FK_NULL_FNUL_01 -> T999FNUL.CD_FPK\n\
        \t@Id\n\
        \t@Column(name = \"CD_FPK\")\n\
        \tprivate Integer codeFpk;\n\n\
        \t// FK_NULL_SNUL_02 -> T999SNUL.CD_SPK\n\
        \t@Id\n\
        \t@Column(name = \"CD_SPK\")\n\
        \tprivate Integer secondPrimaryKey;\n\n\
        \t@Size(max = 50)\n\
        \t@Column(name = \"NM_NUL\")\n\
        \tprivate String nameNul;\n\n\
        }\n";

    assert_eq!(sources[0].source_code, expected);
}

#[test]
fn composite_pk_source_matches_expected_text() {
    let sources = generate("T999NULL", false, false);

    let expected = "package com.example.entity;\n\n\
        import java.io.Serializable;\n\
        import lombok.AllArgsConstructor;\n\
        import lombok.Data;\n\
        import lombok.NoArgsConstructor;\n\n\
        /*-\n \
        * T999NULL\n \
        * Type: Composite Primary Key\n \
        */\n\
        @Data\n\
        @AllArgsConstructor\n\
        @NoArgsConstructor\n\
        public class CompositeKeyTablePK implements Serializable {\n\
        \tprivate static final long serialVersionUID = 1L;\n\n\
        \t// FK_NULL_FNUL_01 -> T999FNUL.CD_FPK\n\
        \tprivate Integer codeFpk;\n\n\
        \t// FK_NULL_SNUL_02 -> T999SNUL.CD_SPK\n\
        \tprivate Integer secondPrimaryKey;\n\n\
        }\n";

    assert_eq!(sources[1].source_code, expected);
    assert_eq!(sources[1].java_name, "CompositeKeyTablePK");
}

#[test]
fn service_and_dto_sources_follow_their_field_styles() {
    let sources = generate("T999NULL", true, true);

    let dto = sources.iter().find(|s| s.java_name.ends_with("Dto")).unwrap();
    assert_eq!(dto.package_name, "com.example.dto");
    assert!(dto.source_code.contains(
        "public class CompositeKeyTableDto {\n\
         \tprivate Integer codeFpk;\n\
         \tprivate Integer secondPrimaryKey;\n\
         \tprivate String nameNul;\n\n\
         }\n"
    ));

    let service = sources
        .iter()
        .find(|s| s.java_name.ends_with("Service"))
        .unwrap();
    assert_eq!(service.package_name, "com.example.service");
    assert!(service.source_code.contains(
        "public class CompositeKeyTableService {\n\
         \tprivate final CompositeKeyTableRepository repository;\n\n\
         }\n"
    ));
    assert!(service
        .source_code
        .contains("import com.example.repository.CompositeKeyTableRepository;\n"));
}

#[test]
fn views_generate_like_tables() {
    let sources = generate("V999VIEW", false, false);
    let entity = &sources[0];

    assert_eq!(entity.java_name, "V999View");
    assert!(entity.source_code.contains("\tprivate Long sqView;\n"));
    assert!(entity.source_code.contains("\t@Size(max = 50)\n"));
    assert!(entity.source_code.contains("\tprivate String nameView;\n"));
}

#[test]
fn generation_is_deterministic_across_runs() {
    let first = generate("T999TEST,T999NULL", true, true);
    let second = generate("T999TEST,T999NULL", true, true);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.java_name, b.java_name);
        assert_eq!(a.package_name, b.package_name);
        assert_eq!(a.source_code, b.source_code);
    }
}

#[test]
fn duplicate_table_names_generate_once() {
    let sources = generate("T999TEST, T999TEST", false, false);
    assert_eq!(sources.len(), 1);
}

#[test]
fn single_source_packages_as_a_java_file() {
    let sources = generate("T999TEST", false, false);

    let file_name = packaging::resolve_output_file_name(&sources, "generated-sources").unwrap();
    assert_eq!(file_name, "TestContainingPerfectDescriptions.java");

    let payload = packaging::generate_payload(&sources).unwrap();
    assert_eq!(payload, sources[0].source_code.as_bytes());
}

#[test]
fn multiple_sources_package_as_a_zip_archive() {
    let sources = generate("T999NULL", true, true);

    let file_name = packaging::resolve_output_file_name(&sources, "generated-sources").unwrap();
    assert_eq!(file_name, "generated-sources.zip");

    let payload = packaging::generate_payload(&sources).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(payload)).unwrap();
    assert_eq!(archive.len(), 5);

    let mut entry = archive
        .by_name("com/example/entity/CompositeKeyTablePK.java")
        .unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    assert!(content.contains("implements Serializable"));
}
