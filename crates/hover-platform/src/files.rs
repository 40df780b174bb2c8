//! Files handed to Hover on the command line.

use std::path::Path;

use hover_common::PlatformError;

/// A file read from disk, ready to be pasted into a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastedFile {
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl PastedFile {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Read `path` for pasting.
pub fn read_pasted_file(path: &Path) -> Result<PastedFile, PlatformError> {
    let bytes = std::fs::read(path)
        .map_err(|e| PlatformError::PathError(format!("{}: {e}", path.display())))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());
    Ok(PastedFile {
        name,
        mime: mime_for_path(path),
        bytes,
    })
}

/// MIME type from the file extension, `application/octet-stream` when
/// unknown.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "pdf" => "application/pdf",
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "html" | "htm" => "text/html",
        _ => "application/octet-stream",
    }
}
