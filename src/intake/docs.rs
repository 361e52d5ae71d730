use std::path::Path;
use thiserror::Error;

/// Document-text extraction boundary. PDF and word-processor extraction is
/// handled by external tooling before the file reaches this tool; here only
/// already-plain text is accepted. Anything else is rejected per file
/// without aborting the session.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("unsupported document format: {0} (supply extracted plain text as .txt or .md)")]
    UnsupportedFormat(String),

    #[error("document read error: {0}: {1}")]
    Read(String, String),
}

const SUPPORTED_EXTENSIONS: [&str; 3] = ["txt", "md", "text"];

pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.display().to_string()));
    }

    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);
    if !supported {
        return Err(DocumentError::UnsupportedFormat(path.display().to_string()));
    }

    std::fs::read_to_string(path)
        .map_err(|e| DocumentError::Read(path.display().to_string(), e.to_string()))
}
