//! Plain text document loading

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions of binary or structured formats that are not read as text
const UNSUPPORTED_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "odt", "rtf", "xls", "xlsx", "ppt", "pptx", "zip", "png", "jpg",
    "jpeg", "gif",
];

#[derive(Error, Debug)]
pub enum DocumentReadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Unsupported document format '{format}': {}", .path.display())]
    UnsupportedFormat { path: PathBuf, format: String },
    #[error("File is not valid UTF-8 text: {}", .0.display())]
    Encoding(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the text content of the document at `path`.
pub fn load_text(path: impl AsRef<Path>) -> Result<String, DocumentReadError> {
    let path = path.as_ref();

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_ascii_lowercase();
        if UNSUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(DocumentReadError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: ext,
            });
        }
    }

    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DocumentReadError::NotFound(path.to_path_buf()),
        _ => DocumentReadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text =
        String::from_utf8(bytes).map_err(|_| DocumentReadError::Encoding(path.to_path_buf()))?;
    let text = match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    };

    tracing::info!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(text)
}
