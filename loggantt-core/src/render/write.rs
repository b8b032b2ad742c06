use crate::render::error::RenderError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes through a temporary file in the destination directory, so a
/// failed write never leaves a truncated document behind.
pub fn write_document(path: &Path, contents: &str) -> Result<(), RenderError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let fail = |source| RenderError::write_output(path, source);

    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    tmp.write_all(contents.as_bytes()).map_err(fail)?;
    tmp.flush().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "document written");
    Ok(())
}
