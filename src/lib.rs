pub mod catalog;
pub mod cli;
pub mod error;
pub mod field_mapping;
pub mod generator;
pub mod imports;
pub mod java_types;
pub mod metadata;
pub mod naming;
pub mod packaging;
pub mod renderer;
pub mod request;
pub mod types;

pub use catalog::{CatalogError, CatalogRow, FixtureCatalog, ForeignKeyRow, TableCatalog};
pub use error::{CodeGenerationError, Severity};
pub use generator::{build_class_models, generate_sources, GenerationOptions};
pub use metadata::MetadataResolver;
pub use renderer::{render, render_all};
pub use request::{GenerationFailure, GenerationRequest};
pub use types::{ClassKind, ClassModel, GeneratedSource, TableMeta};
