//! Model building: one normalized table metadata record and the request
//! options into 1-5 class models, plus the end-to-end generation entry
//! point.

use tracing::info;

use crate::catalog::TableCatalog;
use crate::error::CodeGenerationError;
use crate::field_mapping;
use crate::imports;
use crate::metadata::MetadataResolver;
use crate::naming;
use crate::renderer;
use crate::request::GenerationRequest;
use crate::types::{ClassAnnotation, ClassKind, ClassModel, ColumnMeta, GeneratedSource, TableMeta};

const DATA: &str = "Data";
const NO_ARGS_CONSTRUCTOR: &str = "NoArgsConstructor";
const ALL_ARGS_CONSTRUCTOR: &str = "AllArgsConstructor";

#[derive(Clone, Copy, Debug, Default)]
pub struct GenerationOptions {
    pub generate_dto: bool,
    pub generate_service_repository: bool,
}

/// Run the whole pipeline for a request: resolve each table, build its class
/// models, render. One failing table aborts the request; the generated
/// sources must compile together as a set, so there is no partial output.
pub fn generate_sources(
    catalog: &dyn TableCatalog,
    request: &GenerationRequest,
    default_database: Option<&str>,
) -> Result<Vec<GeneratedSource>, CodeGenerationError> {
    let table_names = naming::split_comma_separated(&request.table_names)?;
    let options = GenerationOptions {
        generate_dto: request.generate_dto,
        generate_service_repository: request.generate_service_repository,
    };

    let resolver = MetadataResolver::new(catalog, default_database.map(str::to_string));

    let mut class_models = Vec::new();
    for table_name in &table_names {
        let table_meta = resolver.resolve(table_name)?;
        info!(
            table = %table_meta.table_name,
            class = %table_meta.class_name,
            "building class models"
        );

        class_models.extend(build_class_models(
            &table_meta,
            &request.root_package,
            &options,
        ));
    }

    Ok(renderer::render_all(&class_models))
}

/// Derive the class models for one table: always the entity, the key holder
/// when the primary key is composite, and the optional DTO / service /
/// repository trio.
pub fn build_class_models(
    table_meta: &TableMeta,
    root_package: &str,
    options: &GenerationOptions,
) -> Vec<ClassModel> {
    let mut models = vec![entity_model(table_meta, root_package)];

    if table_meta.is_composite_pk() {
        models.push(entity_pk_model(table_meta, root_package));
    }

    if options.generate_dto {
        models.push(dto_model(table_meta, root_package));
    }

    if options.generate_service_repository {
        models.push(service_model(table_meta, root_package));
        models.push(repository_model(table_meta, root_package));
    }

    models
}

fn new_model(kind: ClassKind, table_meta: &TableMeta, root_package: &str) -> ClassModel {
    let package_name = format!("{}.{}", root_package, kind.package_segment());
    let mut model = ClassModel::new(kind, &table_meta.class_name, &package_name);

    model.add_class_comment(&table_meta.table_name);
    model.add_class_comment(&format!("Type: {}", kind.comment_label()));
    if let Some(description) = &table_meta.description {
        model.add_class_comment(description);
    }

    model
}

fn entity_model(table_meta: &TableMeta, root_package: &str) -> ClassModel {
    let mut model = new_model(ClassKind::Entity, table_meta, root_package);

    field_mapping::populate_entity_fields(&mut model, &table_meta.columns);

    if model.is_composite_primary_key() {
        let pk_class_name = naming::pk_class_name(&model.class_name);
        model.add_annotation(ClassAnnotation::with_single_value(
            "IdClass",
            &format!("{pk_class_name}.class"),
        ));
    }

    model.add_annotation(ClassAnnotation::new(DATA));
    model.add_annotation(ClassAnnotation::new(ALL_ARGS_CONSTRUCTOR));
    model.add_annotation(ClassAnnotation::new(NO_ARGS_CONSTRUCTOR));
    model.add_annotation(ClassAnnotation::new("Entity"));

    let mut table_annotation = ClassAnnotation::new("Table");
    table_annotation.add_attribute("name", &format!("\"{}\"", table_meta.table_name));
    model.add_annotation(table_annotation);

    imports::populate_imports(&mut model);

    model
}

fn entity_pk_model(table_meta: &TableMeta, root_package: &str) -> ClassModel {
    let mut model = new_model(ClassKind::EntityPk, table_meta, root_package);

    let primary_key_columns: Vec<ColumnMeta> = table_meta
        .columns
        .iter()
        .filter(|c| c.is_primary_key)
        .cloned()
        .collect();
    field_mapping::populate_entity_fields(&mut model, &primary_key_columns);

    model.add_annotation(ClassAnnotation::new(DATA));
    model.add_annotation(ClassAnnotation::new(ALL_ARGS_CONSTRUCTOR));
    model.add_annotation(ClassAnnotation::new(NO_ARGS_CONSTRUCTOR));

    imports::populate_imports(&mut model);

    model
}

fn dto_model(table_meta: &TableMeta, root_package: &str) -> ClassModel {
    let mut model = new_model(ClassKind::Dto, table_meta, root_package);

    field_mapping::populate_plain_fields(&mut model, &table_meta.columns);

    model.add_annotation(ClassAnnotation::new(DATA));
    model.add_annotation(ClassAnnotation::new(ALL_ARGS_CONSTRUCTOR));
    model.add_annotation(ClassAnnotation::new(NO_ARGS_CONSTRUCTOR));

    imports::populate_imports(&mut model);

    model
}

fn service_model(table_meta: &TableMeta, root_package: &str) -> ClassModel {
    let mut model = new_model(ClassKind::Service, table_meta, root_package);

    field_mapping::populate_plain_fields(&mut model, &table_meta.columns);

    model.add_annotation(ClassAnnotation::new("Service"));
    model.add_annotation(ClassAnnotation::new("RequiredArgsConstructor"));

    imports::populate_imports(&mut model);
    model.add_import(&sibling_import(
        root_package,
        ClassKind::Repository,
        &naming::repository_class_name(&table_meta.class_name),
    ));

    model
}

fn repository_model(table_meta: &TableMeta, root_package: &str) -> ClassModel {
    let mut model = new_model(ClassKind::Repository, table_meta, root_package);

    field_mapping::populate_plain_fields(&mut model, &table_meta.columns);

    if table_meta.is_composite_pk() {
        model.add_import(&sibling_import(
            root_package,
            ClassKind::Entity,
            &naming::pk_class_name(&table_meta.class_name),
        ));
    }
    model.add_import(imports::JPA_REPOSITORY_IMPORT);
    model.add_import(&sibling_import(
        root_package,
        ClassKind::Entity,
        &table_meta.class_name,
    ));

    model
}

fn sibling_import(root_package: &str, kind: ClassKind, class_name: &str) -> String {
    format!(
        "import {}.{}.{};",
        root_package,
        kind.package_segment(),
        class_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixtureCatalog;
    use crate::metadata::MetadataResolver;

    fn meta_for(table: &str) -> TableMeta {
        let catalog = FixtureCatalog::new();
        MetadataResolver::new(&catalog, None)
            .resolve(table)
            .unwrap()
    }

    #[test]
    fn entity_only_by_default() {
        let models = build_class_models(&meta_for("T999TEST"), "com.example", &GenerationOptions::default());

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].kind, ClassKind::Entity);
        assert_eq!(models[0].package_name, "com.example.entity");
    }

    #[test]
    fn composite_key_table_also_yields_a_key_holder() {
        let options = GenerationOptions {
            generate_dto: true,
            generate_service_repository: true,
        };
        let models = build_class_models(&meta_for("T999NULL"), "com.example", &options);

        let kinds: Vec<ClassKind> = models.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            [
                ClassKind::Entity,
                ClassKind::EntityPk,
                ClassKind::Dto,
                ClassKind::Service,
                ClassKind::Repository
            ]
        );

        let entity = &models[0];
        assert_eq!(entity.annotations()[0].name(), "IdClass");
        assert_eq!(
            entity.annotations()[0].single_value(),
            Some("CompositeKeyTablePK.class")
        );

        let pk = &models[1];
        assert_eq!(pk.fields().len(), 2);
        assert!(pk.fields().iter().all(|f| f.is_primary_key));

        let repository = &models[4];
        assert!(repository
            .imports()
            .contains(&"import com.example.entity.CompositeKeyTablePK;".to_string()));
        assert_eq!(
            repository.primary_key_java_type(),
            Some("CompositeKeyTablePK".to_string())
        );
    }

    #[test]
    fn single_key_repository_uses_the_column_type() {
        let options = GenerationOptions {
            generate_dto: false,
            generate_service_repository: true,
        };
        let models = build_class_models(&meta_for("T999TEST"), "com.example", &options);

        let repository = models
            .iter()
            .find(|m| m.kind == ClassKind::Repository)
            .unwrap();
        assert_eq!(repository.primary_key_java_type(), Some("Long".to_string()));
        assert!(!repository
            .imports()
            .iter()
            .any(|i| i.contains("PK;")));
    }

    #[test]
    fn service_imports_its_repository() {
        let options = GenerationOptions {
            generate_dto: false,
            generate_service_repository: true,
        };
        let models = build_class_models(&meta_for("T999DOMA"), "com.example", &options);

        // T999DOMA's class name is description-derived
        let service = models
            .iter()
            .find(|m| m.kind == ClassKind::Service)
            .unwrap();
        assert_eq!(service.class_name, "InThisColumnsCodes");
        assert!(service
            .imports()
            .contains(&"import com.example.repository.InThisColumnsCodesRepository;".to_string()));
        assert!(service
            .imports()
            .contains(&"import org.springframework.stereotype.Service;".to_string()));
    }

    #[test]
    fn class_comments_cover_name_kind_and_description() {
        let models = build_class_models(&meta_for("T999TEST"), "com.example", &GenerationOptions::default());

        let comments = models[0].class_comments();
        assert_eq!(comments[0], "T999TEST");
        assert_eq!(comments[1], "Type: Entity");
        assert!(comments[2].starts_with("Test table containing many SQL types."));
    }
}
