//! Import derivation: a closed, data-driven mapping from annotation and
//! Java type names to import lines, applied per class kind.

use crate::types::{ClassKind, ClassModel};

const IMPORT_JAVA_IO_SERIALIZABLE: &str = "import java.io.Serializable;";
const IMPORT_JAKARTA_PERSISTENCE: &str = "import jakarta.persistence.*;";

pub const JPA_REPOSITORY_IMPORT: &str =
    "import org.springframework.data.jpa.repository.JpaRepository;";

/// Annotation or Java type name to import line. Names with no entry (plain
/// `java.lang` types such as Integer or String) need no import.
const ANNOTATION_IMPORTS: &[(&str, &str)] = &[
    ("Service", "import org.springframework.stereotype.Service;"),
    ("JpaRepository", JPA_REPOSITORY_IMPORT),
    ("RequiredArgsConstructor", "import lombok.RequiredArgsConstructor;"),
    ("NoArgsConstructor", "import lombok.NoArgsConstructor;"),
    ("Getter", "import lombok.Getter;"),
    ("Data", "import lombok.Data;"),
    ("AllArgsConstructor", "import lombok.AllArgsConstructor;"),
    ("Size", "import jakarta.validation.constraints.Size;"),
    ("NotNull", "import jakarta.validation.constraints.NotNull;"),
    ("Digits", "import jakarta.validation.constraints.Digits;"),
    ("Serializable", IMPORT_JAVA_IO_SERIALIZABLE),
    ("Entity", IMPORT_JAKARTA_PERSISTENCE),
    ("Table", IMPORT_JAKARTA_PERSISTENCE),
    ("Id", IMPORT_JAKARTA_PERSISTENCE),
    ("GeneratedValue", IMPORT_JAKARTA_PERSISTENCE),
    ("Column", IMPORT_JAKARTA_PERSISTENCE),
    ("IdClass", IMPORT_JAKARTA_PERSISTENCE),
    ("Lob", IMPORT_JAKARTA_PERSISTENCE),
    ("BigDecimal", "import java.math.BigDecimal;"),
    ("LocalDateTime", "import java.time.LocalDateTime;"),
    ("LocalDate", "import java.time.LocalDate;"),
    ("LocalTime", "import java.time.LocalTime;"),
];

pub fn import_for(name: &str) -> Option<&'static str> {
    ANNOTATION_IMPORTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, import)| *import)
}

/// Derive the import set of a model from the decorations and types it uses.
pub fn populate_imports(class_model: &mut ClassModel) {
    let mut wanted: Vec<&'static str> = Vec::new();

    if class_model.kind == ClassKind::EntityPk {
        wanted.push(IMPORT_JAVA_IO_SERIALIZABLE);
    }

    for annotation in class_model.annotations() {
        if let Some(import) = import_for(annotation.name()) {
            wanted.push(import);
        }
    }

    for field in class_model.fields() {
        if requires_field_annotation_imports(class_model.kind) {
            for annotation in field.annotations() {
                if let Some(import) = import_for(annotation.name()) {
                    wanted.push(import);
                }
            }
        }

        if requires_field_java_type_imports(class_model.kind) {
            if let Some(import) = import_for(&field.java_type) {
                wanted.push(import);
            }
        }
    }

    for import in wanted {
        class_model.add_import(import);
    }
}

fn requires_field_annotation_imports(kind: ClassKind) -> bool {
    matches!(kind, ClassKind::Entity)
}

fn requires_field_java_type_imports(kind: ClassKind) -> bool {
    matches!(kind, ClassKind::Entity | ClassKind::EntityPk | ClassKind::Dto)
}
