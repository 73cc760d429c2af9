//! Deterministic source rendering: a class model in, Java text out. A pure
//! function of its input; rendering the same model twice yields identical
//! bytes.

use crate::types::{ClassAnnotation, ClassKind, ClassModel, GeneratedSource};

pub fn render_all(class_models: &[ClassModel]) -> Vec<GeneratedSource> {
    class_models.iter().map(render).collect()
}

pub fn render(class_model: &ClassModel) -> GeneratedSource {
    let mut output = String::new();

    render_package(&mut output, class_model);
    render_imports(&mut output, class_model);
    render_class_comments(&mut output, class_model);
    render_class_annotations(&mut output, class_model);
    render_class_declaration(&mut output, class_model);
    render_fields(&mut output, class_model);

    output.push_str("}\n");

    GeneratedSource {
        java_name: class_model.kind.derived_class_name(&class_model.class_name),
        package_name: class_model.package_name.clone(),
        source_code: output,
    }
}

fn render_package(output: &mut String, class_model: &ClassModel) {
    if !class_model.package_name.trim().is_empty() {
        output.push_str(&format!("package {};\n\n", class_model.package_name));
    }
}

fn render_imports(output: &mut String, class_model: &ClassModel) {
    if class_model.imports().is_empty() {
        return;
    }

    // sort a copy; the model itself stays untouched
    let mut imports: Vec<&String> = class_model.imports().iter().collect();
    imports.sort();

    for import in imports {
        output.push_str(import);
        output.push('\n');
    }

    output.push('\n');
}

fn render_class_comments(output: &mut String, class_model: &ClassModel) {
    if class_model.class_comments().is_empty() {
        return;
    }

    output.push_str("/*-\n");
    for comment in class_model.class_comments() {
        output.push_str(&format!(" * {comment}\n"));
    }
    output.push_str(" */\n");
}

fn render_class_annotations(output: &mut String, class_model: &ClassModel) {
    for annotation in class_model.annotations() {
        render_annotation(output, annotation);
    }
}

fn render_class_declaration(output: &mut String, class_model: &ClassModel) {
    let class_name = &class_model.class_name;

    match class_model.kind {
        ClassKind::Entity => {
            output.push_str(&format!("public class {class_name} {{\n\n"));
        }
        ClassKind::EntityPk => {
            output.push_str(&format!(
                "public class {} implements Serializable {{\n",
                class_model.kind.derived_class_name(class_name)
            ));
            output.push_str("\tprivate static final long serialVersionUID = 1L;\n\n");
        }
        ClassKind::Dto | ClassKind::Service => {
            output.push_str(&format!(
                "public class {} {{\n",
                class_model.kind.derived_class_name(class_name)
            ));
        }
        ClassKind::Repository => {
            let key_type = class_model
                .primary_key_java_type()
                .unwrap_or_else(|| "Object".to_string());
            output.push_str(&format!(
                "public interface {} extends JpaRepository<{}, {}> {{\n\n",
                class_model.kind.derived_class_name(class_name),
                class_name,
                key_type
            ));
        }
    }
}

fn render_fields(output: &mut String, class_model: &ClassModel) {
    match class_model.kind {
        ClassKind::Entity => render_entity_fields(output, class_model),
        ClassKind::EntityPk => render_entity_pk_fields(output, class_model),
        ClassKind::Dto => render_dto_fields(output, class_model),
        ClassKind::Service => render_service_fields(output, class_model),
        ClassKind::Repository => {
            // nothing to render
        }
    }
}

fn render_entity_fields(output: &mut String, class_model: &ClassModel) {
    for field in class_model.fields() {
        if let Some(comment) = field.comment.as_deref().filter(|c| !c.trim().is_empty()) {
            output.push_str(&format!("\t// {comment}\n"));
        }

        for annotation in field.annotations() {
            output.push('\t');
            render_annotation(output, annotation);
        }

        output.push_str(&format!("\tprivate {} {};\n\n", field.java_type, field.name));
    }
}

fn render_entity_pk_fields(output: &mut String, class_model: &ClassModel) {
    for field in class_model.fields() {
        if let Some(comment) = field.comment.as_deref().filter(|c| !c.trim().is_empty()) {
            output.push_str(&format!("\t// {comment}\n"));
        }

        output.push_str(&format!("\tprivate {} {};\n\n", field.java_type, field.name));
    }
}

fn render_dto_fields(output: &mut String, class_model: &ClassModel) {
    for field in class_model.fields() {
        output.push_str(&format!("\tprivate {} {};\n", field.java_type, field.name));
    }

    output.push('\n');
}

fn render_service_fields(output: &mut String, class_model: &ClassModel) {
    output.push_str(&format!(
        "\tprivate final {} repository;\n",
        crate::naming::repository_class_name(&class_model.class_name)
    ));

    output.push('\n');
}

fn render_annotation(output: &mut String, annotation: &ClassAnnotation) {
    output.push('@');
    output.push_str(annotation.name());

    if let Some(value) = annotation.single_value() {
        output.push_str(&format!("({value})"));
    } else if !annotation.attributes().is_empty() {
        let attributes: Vec<String> = annotation
            .attributes()
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect();
        output.push_str(&format!("({})", attributes.join(", ")));
    }

    output.push('\n');
}
