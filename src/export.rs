use crate::builder::BuildResult;
use crate::error::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to export paths that carry none.
pub const DIAGRAM_EXTENSION: &str = "mmd";

/// Builds a file stem from a flow title by joining its words with `_`.
pub fn diagram_file_stem(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Saves the diagram of a build result as a `.mmd` file.
///
/// When `path` has no extension, `.mmd` is appended. Returns the path that was
/// written.
pub fn save_diagram(result: &BuildResult, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    if result.diagram.is_empty() {
        return Err(ExportError::NoDiagram);
    }

    let mut path = path.as_ref().to_path_buf();
    if path.extension().is_none() {
        path.set_extension(DIAGRAM_EXTENSION);
    }

    fs::write(&path, &result.diagram).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "saved mermaid diagram");
    Ok(path)
}
