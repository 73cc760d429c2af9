pub mod class_model;
pub mod column_meta;
pub mod foreign_key_meta;
pub mod generated_source;
pub mod table_meta;

pub use class_model::{ClassAnnotation, ClassField, ClassKind, ClassModel};
pub use column_meta::ColumnMeta;
pub use foreign_key_meta::ForeignKeyMeta;
pub use generated_source::GeneratedSource;
pub use table_meta::TableMeta;
