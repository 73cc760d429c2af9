use crate::naming;

/// The five kinds of class the generator can emit. A closed set: rendering
/// dispatches on the tag, one branch per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassKind {
    Entity,
    EntityPk,
    Dto,
    Service,
    Repository,
}

impl ClassKind {
    /// Package segment appended to the root package for this kind. The
    /// composite-key class lives next to its entity.
    pub fn package_segment(self) -> &'static str {
        match self {
            Self::Entity | Self::EntityPk => "entity",
            Self::Dto => "dto",
            Self::Service => "service",
            Self::Repository => "repository",
        }
    }

    pub fn comment_label(self) -> &'static str {
        match self {
            Self::Entity => "Entity",
            Self::EntityPk => "Composite Primary Key",
            Self::Dto => "DTO",
            Self::Service => "Service",
            Self::Repository => "Repository",
        }
    }

    /// Class name with the kind-specific suffix applied.
    pub fn derived_class_name(self, class_name: &str) -> String {
        match self {
            Self::Entity => class_name.to_string(),
            Self::EntityPk => naming::pk_class_name(class_name),
            Self::Dto => naming::dto_class_name(class_name),
            Self::Service => naming::service_class_name(class_name),
            Self::Repository => naming::repository_class_name(class_name),
        }
    }
}

/// A single annotation: either a positional value (`@IdClass(Foo.class)`) or
/// an ordered attribute map (`@Column(name = "X")`). The positional value
/// takes precedence at render time.
#[derive(Clone, Debug)]
pub struct ClassAnnotation {
    name: String,
    single_value: Option<String>,
    attributes: Vec<(String, String)>,
}

impl ClassAnnotation {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            single_value: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_single_value(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            single_value: Some(value.to_string()),
            attributes: Vec::new(),
        }
    }

    /// Add one attribute, keeping insertion order; a duplicate key only
    /// overwrites the value. Blank keys are ignored.
    pub fn add_attribute(&mut self, key: &str, value: &str) {
        let key = key.trim();
        if key.is_empty() {
            return;
        }

        let value = value.trim().to_string();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn single_value(&self) -> Option<&str> {
        self.single_value.as_deref()
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

/// One member of a class model.
#[derive(Clone, Debug)]
pub struct ClassField {
    pub name: String,
    pub java_type: String,
    pub comment: Option<String>,
    pub is_primary_key: bool,
    annotations: Vec<ClassAnnotation>,
}

impl ClassField {
    pub fn new(name: &str, java_type: &str) -> Self {
        Self {
            name: name.to_string(),
            java_type: java_type.to_string(),
            comment: None,
            is_primary_key: false,
            annotations: Vec::new(),
        }
    }

    pub fn add_annotation(&mut self, annotation: ClassAnnotation) {
        self.annotations.push(annotation);
    }

    pub fn annotations(&self) -> &[ClassAnnotation] {
        &self.annotations
    }
}

/// Intermediate representation of one generated class. Built up by the
/// model builder, then handed to the renderer by shared reference; the
/// accessors expose slices only, so the renderer cannot mutate it.
#[derive(Clone, Debug)]
pub struct ClassModel {
    pub package_name: String,
    /// Base class name; the kind suffix is applied when rendering.
    pub class_name: String,
    pub kind: ClassKind,
    class_comments: Vec<String>,
    imports: Vec<String>,
    annotations: Vec<ClassAnnotation>,
    fields: Vec<ClassField>,
}

impl ClassModel {
    pub fn new(kind: ClassKind, class_name: &str, package_name: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            class_name: class_name.to_string(),
            kind,
            class_comments: Vec::new(),
            imports: Vec::new(),
            annotations: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add a class-level comment line; blank input and duplicates are
    /// dropped, order is preserved.
    pub fn add_class_comment(&mut self, comment: &str) {
        let comment = comment.trim();
        if comment.is_empty() {
            return;
        }
        if !self.class_comments.iter().any(|c| c == comment) {
            self.class_comments.push(comment.to_string());
        }
    }

    /// Add one import line; blank input and duplicates are dropped, order is
    /// preserved (rendering sorts a copy).
    pub fn add_import(&mut self, import: &str) {
        let import = import.trim();
        if import.is_empty() {
            return;
        }
        if !self.imports.iter().any(|i| i == import) {
            self.imports.push(import.to_string());
        }
    }

    pub fn add_annotation(&mut self, annotation: ClassAnnotation) {
        self.annotations.push(annotation);
    }

    pub fn add_field(&mut self, field: ClassField) {
        self.fields.push(field);
    }

    pub fn class_comments(&self) -> &[String] {
        &self.class_comments
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn annotations(&self) -> &[ClassAnnotation] {
        &self.annotations
    }

    pub fn fields(&self) -> &[ClassField] {
        &self.fields
    }

    pub fn is_composite_primary_key(&self) -> bool {
        self.fields
            .iter()
            .filter(|f| f.is_primary_key)
            .take(2)
            .count()
            > 1
    }

    /// Java type of the primary key as seen from this model's fields.
    pub fn primary_key_java_type(&self) -> Option<String> {
        if self.is_composite_primary_key() {
            return Some(naming::pk_class_name(&self.class_name));
        }

        self.fields
            .iter()
            .find(|f| f.is_primary_key)
            .map(|f| f.java_type.clone())
    }
}
