//! Download artifact of the draft.

use crate::error::ExportError;
use crate::value::DraftRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fixed name of the exported file.
pub const EXPORT_FILENAME: &str = "briefing-form-data.json";

/// Serializes the draft as indented JSON.
pub fn export_json(draft: &DraftRecord) -> Result<String, ExportError> {
    Ok(draft.to_pretty_json()?)
}

/// Writes the export artifact into `dir` and returns the file path.
pub fn write_export(dir: &Path, draft: &DraftRecord) -> Result<PathBuf, ExportError> {
    let json = export_json(draft)?;
    let path = dir.join(EXPORT_FILENAME);
    fs::write(&path, json).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    info!(path = %path.display(), fields = draft.len(), "exported draft");
    Ok(path)
}
