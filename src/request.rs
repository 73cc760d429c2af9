//! Boundary request and failure payloads.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_derive::{Deserialize, Serialize};

use crate::error::CodeGenerationError;

/// A generation request. Field names follow the wire shape, so the same
/// struct loads from a TOML request file:
///
/// ```toml
/// tableNames = "T999TEST,T999NULL"
/// rootPackage = "com.example"
/// generateDto = true
/// generateServiceRepository = true
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Comma-separated table/view names, each optionally
    /// `DATABASE.NAME`-qualified.
    pub table_names: String,
    pub root_package: String,
    #[serde(default)]
    pub generate_dto: bool,
    #[serde(default)]
    pub generate_service_repository: bool,
}

impl GenerationRequest {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("request file {} is not a valid request", path.display()))
    }
}

/// Error payload surfaced to the boundary when generation fails.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    pub error_detail: String,
}

impl From<&CodeGenerationError> for GenerationFailure {
    fn from(error: &CodeGenerationError) -> Self {
        Self {
            table_name: error.table_name().map(str::to_string),
            error_detail: error.to_string(),
        }
    }
}
