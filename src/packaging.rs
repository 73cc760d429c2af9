//! Boundary packaging: one generated source becomes a raw `.java` payload,
//! several become a zip archive with package-derived paths.

use std::io::{Cursor, Write};

use anyhow::{bail, Context, Result};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::types::GeneratedSource;

/// `Name.java` for a single source, `{default_name}.zip` otherwise.
pub fn resolve_output_file_name(sources: &[GeneratedSource], default_name: &str) -> Result<String> {
    match sources {
        [] => bail!("No generated Java sources were provided."),
        [single] => Ok(format!("{}.java", single.java_name)),
        _ => Ok(format!("{default_name}.zip")),
    }
}

/// Final binary payload for the generated sources.
pub fn generate_payload(sources: &[GeneratedSource]) -> Result<Vec<u8>> {
    match sources {
        [] => bail!("No generated Java sources were provided."),
        [single] => Ok(single.source_code.clone().into_bytes()),
        _ => generate_zip_archive(sources),
    }
}

/// Relative file path of one source, e.g. `com/example/entity/Foo.java`.
pub fn source_file_path(source: &GeneratedSource) -> String {
    if source.package_name.trim().is_empty() {
        return format!("{}.java", source.java_name);
    }

    format!(
        "{}/{}.java",
        source.package_name.replace('.', "/"),
        source.java_name
    )
}

fn generate_zip_archive(sources: &[GeneratedSource]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for source in sources {
        writer
            .start_file(source_file_path(source), options)
            .with_context(|| format!("failed to add '{}' to the archive", source.java_name))?;
        writer
            .write_all(source.source_code.as_bytes())
            .with_context(|| format!("failed to write '{}' into the archive", source.java_name))?;
    }

    let cursor = writer.finish().context("failed to finalize the archive")?;

    Ok(cursor.into_inner())
}
