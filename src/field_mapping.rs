//! Column metadata to class-model field mapping, including the persistence
//! and validation decorations entity fields carry.

use crate::types::{ClassAnnotation, ClassField, ClassModel, ColumnMeta};

/// Populate entity-style fields: foreign-key comment plus the full
/// decoration set per column.
pub fn populate_entity_fields(class_model: &mut ClassModel, columns: &[ColumnMeta]) {
    for column in columns {
        let mut field = ClassField::new(&column.java_name, &column.java_type);
        field.comment = column.foreign_key_comment.clone();
        field.is_primary_key = column.is_primary_key;

        add_id_annotation(column, &mut field);
        add_generated_value_annotation(column, &mut field);
        add_not_null_annotation(column, &mut field);
        add_digits_annotation(column, &mut field);
        add_size_annotation(column, &mut field);
        add_lob_annotation(column, &mut field);
        add_column_annotation(column, &mut field);

        class_model.add_field(field);
    }
}

/// Populate bare fields, no decorations: used by DTO, service and
/// repository models.
pub fn populate_plain_fields(class_model: &mut ClassModel, columns: &[ColumnMeta]) {
    for column in columns {
        let mut field = ClassField::new(&column.java_name, &column.java_type);
        field.is_primary_key = column.is_primary_key;

        class_model.add_field(field);
    }
}

fn add_id_annotation(column: &ColumnMeta, field: &mut ClassField) {
    if column.is_primary_key {
        field.add_annotation(ClassAnnotation::new("Id"));
    }
}

fn add_generated_value_annotation(column: &ColumnMeta, field: &mut ClassField) {
    if column.is_identity() {
        let mut annotation = ClassAnnotation::new("GeneratedValue");
        annotation.add_attribute("strategy", "GenerationType.IDENTITY");

        field.add_annotation(annotation);
    }
}

fn add_not_null_annotation(column: &ColumnMeta, field: &mut ClassField) {
    if !column.is_nullable() && !column.is_primary_key {
        field.add_annotation(ClassAnnotation::new("NotNull"));
    }
}

fn add_digits_annotation(column: &ColumnMeta, field: &mut ClassField) {
    if column.java_type == "BigDecimal" && column.scale > 0 {
        let integer_portion = column.precision - column.scale;

        let mut annotation = ClassAnnotation::new("Digits");
        annotation.add_attribute("integer", &integer_portion.to_string());
        annotation.add_attribute("fraction", &column.scale.to_string());

        field.add_annotation(annotation);
    }
}

fn add_size_annotation(column: &ColumnMeta, field: &mut ClassField) {
    if column.java_type == "String" && column.length > 0 {
        let mut annotation = ClassAnnotation::new("Size");
        annotation.add_attribute("max", &column.length.to_string());

        field.add_annotation(annotation);
    }
}

fn add_lob_annotation(column: &ColumnMeta, field: &mut ClassField) {
    if column.sql_type.eq_ignore_ascii_case("CLOB") {
        field.add_annotation(ClassAnnotation::new("Lob"));
    }
}

fn add_column_annotation(column: &ColumnMeta, field: &mut ClassField) {
    let mut annotation = ClassAnnotation::new("Column");
    annotation.add_attribute("name", &format!("\"{}\"", column.column_name));

    field.add_annotation(annotation);
}
